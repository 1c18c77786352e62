//! Data model types for the Gradalyze client.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One transcript line item: a single course with its earned grade.
///
/// Created either by the catalog UI when a user selects a grade for a known
/// course slot, or by the normalizer when ingesting OCR output. Mutated in
/// place (by id) on table edits; destroyed individually via delete or
/// collectively via a table reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Stable unique identifier within a user's grade list. Supplied by the
    /// backend, copied from a static catalog slot, or synthesized as
    /// `grade-{millis}-{index}` when absent.
    pub id: String,
    /// Free-text course title. Never empty in a valid record.
    pub subject: String,
    /// Optional catalog code (e.g. "ICC 0101"); empty string when unknown.
    #[serde(rename = "courseCode", default)]
    pub course_code: String,
    /// Non-negative unit count; fractional units such as 1.5 occur.
    pub units: f64,
    /// Grade on the fixed scale, or the 0.00 ungraded sentinel.
    pub grade: f64,
    /// Display grouping bucket (e.g. "First Year - 1st Semester").
    pub semester: String,
}

/// Transient view-model of "does this user have an uploaded transcript".
///
/// Replaced wholesale on confirmation or failure, never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingTranscript {
    /// Display URL or storage path of the transcript.
    pub url: String,
    /// Original filename.
    pub name: String,
    /// Optimistically shown, not yet confirmed persisted.
    #[serde(rename = "_temp", default)]
    pub temp: bool,
}

/// The six RIASEC-style archetype axes, each scored 0-100 by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchetypePercents {
    #[serde(default)]
    pub realistic: f64,
    #[serde(default)]
    pub investigative: f64,
    #[serde(default)]
    pub artistic: f64,
    #[serde(default)]
    pub social: f64,
    #[serde(default)]
    pub enterprising: f64,
    #[serde(default)]
    pub conventional: f64,
}

impl ArchetypePercents {
    /// Build from a loosely-typed response object, coercing each axis to a
    /// finite number and defaulting to 0 otherwise.
    pub fn from_value(value: &Value) -> Self {
        let axis = |name: &str| {
            value
                .get(name)
                .and_then(coerce_f64)
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
        };
        Self {
            realistic: axis("realistic"),
            investigative: axis("investigative"),
            artistic: axis("artistic"),
            social: axis("social"),
            enterprising: axis("enterprising"),
            conventional: axis("conventional"),
        }
    }
}

/// Career forecast result at the API boundary.
///
/// The backend response shape is polymorphic; the tag is decided once at
/// parse time and never re-inspected downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForecastResult {
    /// Ordered job labels, ranked best-first (no scores supplied).
    RankedList(Vec<String>),
    /// Job label to score mapping.
    ScoredMap(HashMap<String, f64>),
}

impl ForecastResult {
    /// Parse a forecast process response. Accepts three shapes:
    /// parallel `jobs`/`scores` arrays of equal length (merged into a map),
    /// a bare `jobs` label list, or a pre-merged `job_scores` mapping.
    pub fn from_response(value: &Value) -> Option<Self> {
        if let Some(map) = value.get("job_scores").and_then(Value::as_object) {
            let merged: HashMap<String, f64> = map
                .iter()
                .filter_map(|(k, v)| coerce_f64(v).map(|s| (k.clone(), s)))
                .collect();
            return Some(ForecastResult::ScoredMap(merged));
        }

        let jobs: Vec<String> = value
            .get("jobs")
            .and_then(Value::as_array)?
            .iter()
            .filter_map(|j| j.as_str().map(str::to_string))
            .collect();

        match value.get("scores").and_then(Value::as_array) {
            Some(scores) if scores.len() == jobs.len() => {
                let merged: HashMap<String, f64> = jobs
                    .iter()
                    .cloned()
                    .zip(scores.iter().filter_map(coerce_f64))
                    .collect();
                Some(ForecastResult::ScoredMap(merged))
            }
            _ => Some(ForecastResult::RankedList(jobs)),
        }
    }

    /// Job labels in display order: ranked order for a list, descending
    /// score for a map.
    pub fn ranked_labels(&self) -> Vec<String> {
        match self {
            ForecastResult::RankedList(jobs) => jobs.clone(),
            ForecastResult::ScoredMap(map) => {
                let mut pairs: Vec<(&String, &f64)> = map.iter().collect();
                pairs.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
                pairs.into_iter().map(|(label, _)| label.clone()).collect()
            }
        }
    }
}

/// Derived, non-authoritative display state: the last successful analysis
/// call or the last persisted snapshot. Safely recomputable at any time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    #[serde(default)]
    pub career_forecast: Option<ForecastResult>,
    #[serde(default)]
    pub primary_archetype: Option<String>,
    #[serde(default)]
    pub archetype_percents: Option<ArchetypePercents>,
}

impl AnalysisResults {
    pub fn is_empty(&self) -> bool {
        self.career_forecast.is_none()
            && self.primary_archetype.is_none()
            && self.archetype_percents.is_none()
    }
}

/// One company recommendation returned by the recommendations endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecommendation {
    #[serde(alias = "company")]
    pub name: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Backend user profile, including transcript pointers and the prior
/// analysis snapshot (an embedded JSON blob).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Declared course/program (e.g. "BS Computer Science"). Drives the
    /// forecast endpoint dispatch.
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub transcript_url: Option<String>,
    #[serde(default)]
    pub transcript_name: Option<String>,
    /// Prior analysis results serialized as a JSON string by the backend.
    #[serde(default)]
    pub analysis_snapshot: Option<String>,
}

impl UserProfile {
    /// Parse the embedded analysis snapshot blob, if present and well-formed.
    /// A missing or corrupt snapshot is treated as "no prior analysis".
    pub fn parse_snapshot(&self) -> Option<AnalysisResults> {
        let raw = self.analysis_snapshot.as_deref()?;
        match serde_json::from_str(raw) {
            Ok(results) => Some(results),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unparseable analysis snapshot");
                None
            }
        }
    }

    /// Transcript view-model derived from the persisted profile pointers.
    pub fn existing_transcript(&self) -> Option<ExistingTranscript> {
        let url = self.transcript_url.clone()?;
        Some(ExistingTranscript {
            url,
            name: self.transcript_name.clone().unwrap_or_default(),
            temp: false,
        })
    }
}

/// Academic program. The backend applies a different forecast scoring model
/// per curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curriculum {
    ComputerScience,
    InformationTechnology,
}

impl Curriculum {
    /// Dispatch on the user's declared course: any course containing
    /// "computer science" (case-insensitive) selects the CS model, all
    /// others the IT model.
    pub fn from_course(course: &str) -> Self {
        if course.to_lowercase().contains("computer science") {
            Curriculum::ComputerScience
        } else {
            Curriculum::InformationTechnology
        }
    }
}

/// Numeric coercion for loosely-typed JSON values: numbers pass through,
/// strings are parsed.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grade_record_wire_format() {
        let record = GradeRecord {
            id: "grade-1".to_string(),
            subject: "Calculus 1".to_string(),
            course_code: "MMW 0001".to_string(),
            units: 3.0,
            grade: 1.5,
            semester: "First Year - 1st Semester".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["courseCode"], "MMW 0001");
        assert_eq!(json["subject"], "Calculus 1");

        let back: GradeRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_existing_transcript_temp_flag() {
        let json = json!({"url": "/files/tor.pdf", "name": "tor.pdf", "_temp": true});
        let transcript: ExistingTranscript = serde_json::from_value(json).unwrap();
        assert!(transcript.temp);

        let json = json!({"url": "/files/tor.pdf", "name": "tor.pdf"});
        let transcript: ExistingTranscript = serde_json::from_value(json).unwrap();
        assert!(!transcript.temp);
    }

    #[test]
    fn test_forecast_parallel_arrays_merge_to_map() {
        let value = json!({"jobs": ["Data Analyst", "QA Engineer"], "scores": [0.91, 0.72]});
        let forecast = ForecastResult::from_response(&value).unwrap();
        match forecast {
            ForecastResult::ScoredMap(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map["Data Analyst"], 0.91);
            }
            _ => panic!("expected ScoredMap"),
        }
    }

    #[test]
    fn test_forecast_bare_label_list_stays_ranked() {
        let value = json!({"jobs": ["Data Analyst", "QA Engineer"]});
        let forecast = ForecastResult::from_response(&value).unwrap();
        assert_eq!(
            forecast,
            ForecastResult::RankedList(vec![
                "Data Analyst".to_string(),
                "QA Engineer".to_string()
            ])
        );
    }

    #[test]
    fn test_forecast_mismatched_scores_fall_back_to_list() {
        let value = json!({"jobs": ["Data Analyst", "QA Engineer"], "scores": [0.91]});
        let forecast = ForecastResult::from_response(&value).unwrap();
        assert!(matches!(forecast, ForecastResult::RankedList(_)));
    }

    #[test]
    fn test_forecast_premerged_mapping_key() {
        let value = json!({"job_scores": {"Data Analyst": 0.91, "QA Engineer": "0.72"}});
        let forecast = ForecastResult::from_response(&value).unwrap();
        match forecast {
            ForecastResult::ScoredMap(map) => {
                assert_eq!(map["QA Engineer"], 0.72);
            }
            _ => panic!("expected ScoredMap"),
        }
    }

    #[test]
    fn test_forecast_absent_jobs_is_none() {
        assert!(ForecastResult::from_response(&json!({"status": "ok"})).is_none());
    }

    #[test]
    fn test_ranked_labels_sorts_map_descending() {
        let forecast = ForecastResult::ScoredMap(HashMap::from([
            ("QA Engineer".to_string(), 0.72),
            ("Data Analyst".to_string(), 0.91),
        ]));
        assert_eq!(
            forecast.ranked_labels(),
            vec!["Data Analyst".to_string(), "QA Engineer".to_string()]
        );
    }

    #[test]
    fn test_archetype_percents_coerce_and_default() {
        let value = json!({
            "realistic": 42.5,
            "investigative": "88",
            "artistic": null,
            "social": "not a number",
            "enterprising": 10,
        });
        let percents = ArchetypePercents::from_value(&value);
        assert_eq!(percents.realistic, 42.5);
        assert_eq!(percents.investigative, 88.0);
        assert_eq!(percents.artistic, 0.0);
        assert_eq!(percents.social, 0.0);
        assert_eq!(percents.enterprising, 10.0);
        assert_eq!(percents.conventional, 0.0);
    }

    #[test]
    fn test_profile_snapshot_round_trip() {
        let results = AnalysisResults {
            career_forecast: Some(ForecastResult::RankedList(vec!["Data Analyst".into()])),
            primary_archetype: Some("Investigative".to_string()),
            archetype_percents: Some(ArchetypePercents {
                investigative: 80.0,
                ..Default::default()
            }),
        };
        let profile = UserProfile {
            id: 7,
            email: "student@example.com".to_string(),
            name: "Student".to_string(),
            course: "BS Computer Science".to_string(),
            transcript_url: None,
            transcript_name: None,
            analysis_snapshot: Some(serde_json::to_string(&results).unwrap()),
        };

        assert_eq!(profile.parse_snapshot().unwrap(), results);
    }

    #[test]
    fn test_profile_corrupt_snapshot_is_none() {
        let profile = UserProfile {
            id: 7,
            email: "student@example.com".to_string(),
            name: String::new(),
            course: String::new(),
            transcript_url: None,
            transcript_name: None,
            analysis_snapshot: Some("{not json".to_string()),
        };
        assert!(profile.parse_snapshot().is_none());
    }

    #[test]
    fn test_curriculum_dispatch_is_case_insensitive() {
        assert_eq!(
            Curriculum::from_course("BS Computer Science"),
            Curriculum::ComputerScience
        );
        assert_eq!(
            Curriculum::from_course("bachelor of science in COMPUTER SCIENCE"),
            Curriculum::ComputerScience
        );
        assert_eq!(
            Curriculum::from_course("BS Information Technology"),
            Curriculum::InformationTechnology
        );
        assert_eq!(Curriculum::from_course(""), Curriculum::InformationTechnology);
    }
}
