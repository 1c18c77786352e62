//! Analysis gateway: career forecast, archetype classification, and company
//! recommendations. The scoring models are opaque backend services; this
//! gateway only speaks their HTTP contracts.

use gradalyze_core::defaults::{
    ARCHETYPE_GAMMA, ARCHETYPE_R, ARCHETYPE_SIMILARITY, ARCHETYPE_TAU,
};
use gradalyze_core::{
    ArchetypePercents, CompanyRecommendation, Curriculum, Error, ForecastResult, GradeRecord,
    Result,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ApiClient;
use crate::http::ensure_success;

#[derive(Debug, Clone)]
pub struct AnalysisGateway {
    api: ApiClient,
}

/// Archetype classification outcome: six-axis percentages plus the primary
/// label.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchetypeOutcome {
    pub percents: ArchetypePercents,
    pub primary: String,
}

#[derive(Deserialize)]
struct RecommendationsResponse {
    #[serde(default)]
    companies: Vec<CompanyRecommendation>,
}

/// The backend applies a different forecast scoring model per curriculum,
/// exposed as two endpoint variants.
fn forecast_prefix(curriculum: Curriculum) -> &'static str {
    match curriculum {
        Curriculum::ComputerScience => "/api/forecast/cs",
        Curriculum::InformationTechnology => "/api/forecast/it",
    }
}

impl AnalysisGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Run the career forecast over bare grade values. The response shape is
    /// polymorphic; the [`ForecastResult`] tag is decided here, once.
    pub async fn forecast(
        &self,
        curriculum: Curriculum,
        email: &str,
        grade_values: &[f64],
    ) -> Result<ForecastResult> {
        let path = format!("{}/process", forecast_prefix(curriculum));
        let response = self
            .api
            .http()
            .post(self.api.url(&path))
            .json(&json!({ "email": email, "grade_values": grade_values }))
            .send()
            .await?;
        let response =
            ensure_success(response, "Failed to process career forecasting").await?;
        let body: Value = response.json().await?;

        ForecastResult::from_response(&body).ok_or_else(|| {
            Error::Request("Failed to process career forecasting".to_string())
        })
    }

    pub async fn clear_forecast(&self, curriculum: Curriculum, email: &str) -> Result<()> {
        let path = format!("{}/clear", forecast_prefix(curriculum));
        let response = self
            .api
            .http()
            .post(self.api.url(&path))
            .json(&json!({ "email": email }))
            .send()
            .await?;
        ensure_success(response, "Failed to clear career forecast").await?;
        Ok(())
    }

    /// Run the archetype classification over the full grade objects, with
    /// the fixed scoring parameters the backend expects.
    pub async fn archetype(
        &self,
        email: &str,
        records: &[GradeRecord],
    ) -> Result<ArchetypeOutcome> {
        let response = self
            .api
            .http()
            .post(self.api.url("/api/archetype/process"))
            .json(&json!({
                "email": email,
                "grades": records,
                "gamma": ARCHETYPE_GAMMA,
                "r": ARCHETYPE_R,
                "tau": ARCHETYPE_TAU,
                "similarity": ARCHETYPE_SIMILARITY,
            }))
            .send()
            .await?;
        let response =
            ensure_success(response, "Failed to process archetype analysis").await?;
        let body: Value = response.json().await?;

        let percents_value = body.get("percentages").unwrap_or(&body);
        let percents = ArchetypePercents::from_value(percents_value);
        let primary = body
            .get("primary_debiased")
            .or_else(|| body.get("primary"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(ArchetypeOutcome { percents, primary })
    }

    pub async fn clear_archetype(&self, email: &str) -> Result<()> {
        let response = self
            .api
            .http()
            .post(self.api.url("/api/archetype/clear"))
            .json(&json!({ "email": email }))
            .send()
            .await?;
        ensure_success(response, "Failed to clear archetype results").await?;
        Ok(())
    }

    /// Fetch company recommendations; `refresh` forces recomputation.
    pub async fn recommendations(
        &self,
        email: &str,
        refresh: bool,
    ) -> Result<Vec<CompanyRecommendation>> {
        let response = self
            .api
            .http()
            .post(self.api.url("/api/companies/process"))
            .json(&json!({ "email": email, "refresh": refresh }))
            .send()
            .await?;
        let response =
            ensure_success(response, "Failed to load company recommendations").await?;
        let body: RecommendationsResponse = response.json().await?;
        Ok(body.companies)
    }

    pub async fn clear_recommendations(&self, email: &str) -> Result<()> {
        let response = self
            .api
            .http()
            .post(self.api.url("/api/companies/clear"))
            .json(&json!({ "email": email }))
            .send()
            .await?;
        ensure_success(response, "Failed to clear company recommendations").await?;
        Ok(())
    }
}
