//! Grade normalization: converts heterogeneous inbound payloads (numeric
//! arrays from OCR, loosely-typed objects, previously-saved rows) into
//! canonical [`GradeRecord`] lists.
//!
//! Two entry points exist on purpose:
//! - [`normalize_ocr`] keeps anonymous "Subject N" rows — OCR results are
//!   always shown even when unlabeled.
//! - [`normalize_saved`] drops rows with no identifiable subject —
//!   previously-saved profile data that lost its subject is stale/corrupt.

use serde_json::Value;

use crate::defaults::{DEFAULT_UNITS, DETECTED_SEMESTER, GRADE_SCALE, UNGRADED_SENTINEL};
use crate::models::{coerce_f64, GradeRecord};

/// Markers in a raw grade string that mean "ungraded/excluded".
const UNGRADED_MARKERS: [&str; 4] = ["inc", "drp", "w", "na"];

/// Normalize an OCR payload. Anonymous rows are retained.
pub fn normalize_ocr(items: &[Value]) -> Vec<GradeRecord> {
    normalize(items, true)
}

/// Normalize previously-saved profile rows. Rows whose subject is empty or
/// the anonymous placeholder are discarded.
pub fn normalize_saved(items: &[Value]) -> Vec<GradeRecord> {
    normalize(items, false)
}

fn normalize(items: &[Value], keep_anonymous: bool) -> Vec<GradeRecord> {
    let now_ms = chrono::Utc::now().timestamp_millis();

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let record = normalize_item(item, index, now_ms);
            let placeholder = fallback_subject(index);
            if !keep_anonymous
                && (record.subject.is_empty() || record.subject == placeholder)
            {
                tracing::debug!(index, "dropping saved row with no identifiable subject");
                return None;
            }
            Some(record)
        })
        .collect()
}

fn normalize_item(item: &Value, index: usize, now_ms: i64) -> GradeRecord {
    // A bare number is a grade value for an anonymous subject.
    if let Some(grade) = item.as_f64() {
        return GradeRecord {
            id: synthesize_id(now_ms, index),
            subject: fallback_subject(index),
            course_code: String::new(),
            units: DEFAULT_UNITS,
            grade: round2(grade),
            semester: DETECTED_SEMESTER.to_string(),
        };
    }

    let subject = first_string(item, &["subject", "course_title", "course_name"])
        .unwrap_or_else(|| fallback_subject(index));
    let course_code =
        first_string(item, &["courseCode", "code", "course_no"]).unwrap_or_default();
    let units = item
        .get("units")
        .and_then(coerce_f64)
        .filter(|u| u.is_finite())
        .unwrap_or(DEFAULT_UNITS);
    let grade = coerce_grade(item.get("grade").unwrap_or(&Value::Null));
    let semester = first_string(item, &["semester"])
        .unwrap_or_else(|| DETECTED_SEMESTER.to_string());
    let id = first_string(item, &["id"]).unwrap_or_else(|| synthesize_id(now_ms, index));

    GradeRecord {
        id,
        subject,
        course_code,
        units,
        grade,
        semester,
    }
}

/// Coerce a raw grade value. Non-numeric values and values carrying an
/// INC/DRP/W/NA marker (regardless of any numeric prefix) normalize to the
/// ungraded sentinel; everything else is rounded to two decimal places.
pub fn coerce_grade(raw: &Value) -> f64 {
    let text = match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let lowered = text.to_lowercase();
    if UNGRADED_MARKERS.iter().any(|m| lowered.contains(m)) {
        return UNGRADED_SENTINEL;
    }
    match coerce_f64(raw) {
        Some(grade) if grade.is_finite() => round2(grade),
        _ => UNGRADED_SENTINEL,
    }
}

/// True when `grade` is one of the ten allowed scale values. The table-edit
/// path only ever writes grades passing this check.
pub fn is_on_scale(grade: f64) -> bool {
    GRADE_SCALE.iter().any(|g| (g - grade).abs() < 1e-9)
}

/// Validate a grade list ahead of analysis. Returns the user-facing list of
/// offending subjects on failure.
pub fn validate_for_analysis(records: &[GradeRecord]) -> Result<(), Vec<String>> {
    if records.is_empty() {
        return Err(vec!["grade list is empty".to_string()]);
    }

    let offending: Vec<String> = records
        .iter()
        .filter_map(|r| {
            if r.subject.trim().is_empty() {
                Some("(blank subject)".to_string())
            } else if r.grade < 0.0 || r.grade > 5.0 {
                Some(r.subject.clone())
            } else {
                None
            }
        })
        .collect();

    if offending.is_empty() {
        Ok(())
    } else {
        Err(offending)
    }
}

fn first_string(item: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        item.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

fn fallback_subject(index: usize) -> String {
    format!("Subject {}", index + 1)
}

fn synthesize_id(now_ms: i64, index: usize) -> String {
    format!("grade-{}-{}", now_ms, index)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_number_becomes_anonymous_subject() {
        let records = normalize_ocr(&[json!(2.75)]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "Subject 1");
        assert_eq!(records[0].units, 3.0);
        assert_eq!(records[0].grade, 2.75);
        assert_eq!(records[0].semester, "Detected Subjects");
        assert_eq!(records[0].course_code, "");
        assert!(records[0].id.starts_with("grade-"));
    }

    #[test]
    fn subject_key_priority_order() {
        let records = normalize_ocr(&[
            json!({"subject": "Calculus 1", "course_title": "shadowed", "grade": 1.5}),
            json!({"course_title": "Physics 1", "grade": 2.0}),
            json!({"course_name": "Ethics", "grade": 1.75}),
        ]);
        assert_eq!(records[0].subject, "Calculus 1");
        assert_eq!(records[1].subject, "Physics 1");
        assert_eq!(records[2].subject, "Ethics");
    }

    #[test]
    fn course_code_key_priority_order() {
        let records = normalize_ocr(&[
            json!({"subject": "A", "courseCode": "ICC 0101", "code": "shadowed", "grade": 1.0}),
            json!({"subject": "B", "code": "MMW 0001", "grade": 1.0}),
            json!({"subject": "C", "course_no": "PE 101", "grade": 1.0}),
            json!({"subject": "D", "grade": 1.0}),
        ]);
        assert_eq!(records[0].course_code, "ICC 0101");
        assert_eq!(records[1].course_code, "MMW 0001");
        assert_eq!(records[2].course_code, "PE 101");
        assert_eq!(records[3].course_code, "");
    }

    #[test]
    fn units_default_when_missing_or_unparseable() {
        let records = normalize_ocr(&[
            json!({"subject": "A", "units": "1.5", "grade": 1.0}),
            json!({"subject": "B", "units": "three", "grade": 1.0}),
            json!({"subject": "C", "grade": 1.0}),
        ]);
        assert_eq!(records[0].units, 1.5);
        assert_eq!(records[1].units, 3.0);
        assert_eq!(records[2].units, 3.0);
    }

    #[test]
    fn ungraded_markers_normalize_to_sentinel() {
        for raw in ["INC", "drp", "W", "na", "5 (INC)", "1.00 DRP"] {
            assert_eq!(coerce_grade(&json!(raw)), 0.0, "marker input {raw:?}");
        }
    }

    #[test]
    fn non_numeric_grade_normalizes_to_sentinel() {
        assert_eq!(coerce_grade(&json!("passed")), 0.0);
        assert_eq!(coerce_grade(&Value::Null), 0.0);
    }

    #[test]
    fn numeric_grades_round_to_two_decimals() {
        assert_eq!(coerce_grade(&json!("1.504")), 1.5);
        assert_eq!(coerce_grade(&json!(2.249)), 2.25);
        assert_eq!(coerce_grade(&json!("2.75")), 2.75);
    }

    #[test]
    fn existing_id_is_preserved() {
        let records = normalize_ocr(&[json!({"id": "slot-icc0101", "subject": "A", "grade": 1.0})]);
        assert_eq!(records[0].id, "slot-icc0101");
    }

    #[test]
    fn semester_is_kept_when_given() {
        let records = normalize_ocr(&[
            json!({"subject": "A", "grade": 1.0, "semester": "First Year - 1st Semester"}),
        ]);
        assert_eq!(records[0].semester, "First Year - 1st Semester");
    }

    #[test]
    fn ocr_path_keeps_anonymous_rows_saved_path_drops_them() {
        let items = vec![
            json!({"subject": "Calculus 1", "grade": 1.5}),
            json!(2.75),
            json!({"grade": 2.0}),
        ];

        let ocr = normalize_ocr(&items);
        assert_eq!(ocr.len(), 3);
        assert_eq!(ocr[1].subject, "Subject 2");
        assert_eq!(ocr[2].subject, "Subject 3");

        let saved = normalize_saved(&items);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].subject, "Calculus 1");
    }

    #[test]
    fn saved_path_drops_blank_subject() {
        let saved = normalize_saved(&[json!({"subject": "   ", "grade": 1.0})]);
        assert!(saved.is_empty());
    }

    #[test]
    fn normalization_is_idempotent_modulo_ids() {
        let first = normalize_ocr(&[
            json!({"subject": "Calculus 1", "grade": "1.50", "units": "3",
                   "semester": "Detected Subjects"}),
            json!(2.75),
        ]);

        let round_tripped: Vec<Value> = first
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect();
        let second = normalize_ocr(&round_tripped);

        assert_eq!(first, second);
    }

    #[test]
    fn end_to_end_scenario_a() {
        let payload = vec![
            json!({"subject": "Calculus 1", "grade": "1.50", "units": "3"}),
            json!(2.75),
        ];
        let records = normalize_ocr(&payload);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].subject, "Calculus 1");
        assert_eq!(records[0].units, 3.0);
        assert_eq!(records[0].grade, 1.5);
        assert_eq!(records[0].semester, "Detected Subjects");

        assert_eq!(records[1].subject, "Subject 2");
        assert_eq!(records[1].units, 3.0);
        assert_eq!(records[1].grade, 2.75);
        assert_eq!(records[1].semester, "Detected Subjects");
    }

    #[test]
    fn scale_closure() {
        for grade in [1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0, 5.0] {
            assert!(is_on_scale(grade), "{grade} should be on scale");
        }
        for grade in [0.0, 0.5, 1.1, 3.25, 4.0, 6.0] {
            assert!(!is_on_scale(grade), "{grade} should be off scale");
        }
    }

    #[test]
    fn validation_flags_out_of_range_grade() {
        let records = vec![GradeRecord {
            id: "g1".to_string(),
            subject: "X".to_string(),
            course_code: String::new(),
            units: 3.0,
            grade: 6.0,
            semester: "Detected Subjects".to_string(),
        }];
        let offending = validate_for_analysis(&records).unwrap_err();
        assert_eq!(offending, vec!["X".to_string()]);
    }

    #[test]
    fn validation_flags_blank_subject_and_empty_list() {
        assert!(validate_for_analysis(&[]).is_err());

        let records = vec![GradeRecord {
            id: "g1".to_string(),
            subject: " ".to_string(),
            course_code: String::new(),
            units: 3.0,
            grade: 1.0,
            semester: "Detected Subjects".to_string(),
        }];
        assert!(validate_for_analysis(&records).is_err());
    }

    #[test]
    fn validation_accepts_sentinel_grade() {
        let records = vec![GradeRecord {
            id: "g1".to_string(),
            subject: "PE 1".to_string(),
            course_code: String::new(),
            units: 2.0,
            grade: 0.0,
            semester: "Detected Subjects".to_string(),
        }];
        assert!(validate_for_analysis(&records).is_ok());
    }
}
