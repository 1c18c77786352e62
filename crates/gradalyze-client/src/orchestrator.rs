//! Analysis orchestration: career forecast plus archetype classification
//! over the current grade list, and the all-or-nothing clear operation.
//!
//! The two process calls are genuinely sequential and independently
//! committing: a failure in the forecast prevents the archetype call from
//! running at all, while an archetype failure leaves an already-committed
//! forecast intact. The three clear calls, by contrast, fire concurrently
//! and local state only changes when all three succeed.

use std::sync::Arc;

use gradalyze_core::normalize::validate_for_analysis;
use gradalyze_core::{AnalysisResults, Curriculum, Error, Result, UserProfile};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::analysis::AnalysisGateway;
use crate::auth::AuthGateway;
use crate::grades::GradesGateway;
use crate::store::GradeStore;

pub struct AnalysisOrchestrator {
    analysis: AnalysisGateway,
    grades: GradesGateway,
    auth: AuthGateway,
    results: Arc<RwLock<AnalysisResults>>,
}

impl AnalysisOrchestrator {
    pub fn new(analysis: AnalysisGateway, grades: GradesGateway, auth: AuthGateway) -> Self {
        Self {
            analysis,
            grades,
            auth,
            results: Arc::new(RwLock::new(AnalysisResults::default())),
        }
    }

    /// Seed display state from a persisted snapshot (profile fetch).
    pub async fn seed(&self, snapshot: AnalysisResults) {
        *self.results.write().await = snapshot;
    }

    /// Current display state.
    pub async fn results(&self) -> AnalysisResults {
        self.results.read().await.clone()
    }

    /// Run both analyses over the store's current grade list.
    pub async fn run(&self, store: &GradeStore, user: &UserProfile) -> Result<AnalysisResults> {
        let request_id = Uuid::new_v4();
        let records = store.records().await;

        if let Err(offending) = validate_for_analysis(&records) {
            return Err(Error::Validation(format!(
                "These subjects cannot be analyzed: {}",
                offending.join(", ")
            )));
        }

        // Best-effort persist ahead of the analysis calls.
        if let Err(e) = self.grades.replace(user.id, &records).await {
            tracing::warn!(%request_id, user_id = user.id, error = %e,
                "pre-analysis grade persist failed");
        }

        let curriculum = Curriculum::from_course(&user.course);
        tracing::info!(%request_id, user_id = user.id, ?curriculum,
            record_count = records.len(), "starting analysis");

        let grade_values: Vec<f64> = records.iter().map(|r| r.grade).collect();
        let forecast = self
            .analysis
            .forecast(curriculum, &user.email, &grade_values)
            .await?;
        self.results.write().await.career_forecast = Some(forecast);

        let archetype = self.analysis.archetype(&user.email, &records).await?;
        {
            let mut results = self.results.write().await;
            results.primary_archetype = Some(archetype.primary);
            results.archetype_percents = Some(archetype.percents);
        }

        tracing::info!(%request_id, user_id = user.id, "analysis complete");
        Ok(self.results.read().await.clone())
    }

    /// Clear all stored analysis artifacts. The three clear requests fire
    /// concurrently; if any fails, local display state is left untouched and
    /// the whole clear reports as failed.
    pub async fn clear(&self, user: &UserProfile) -> Result<AnalysisResults> {
        let curriculum = Curriculum::from_course(&user.course);

        let (forecast, archetype, recommendations) = tokio::join!(
            self.analysis.clear_forecast(curriculum, &user.email),
            self.analysis.clear_archetype(&user.email),
            self.analysis.clear_recommendations(&user.email),
        );
        forecast?;
        archetype?;
        recommendations?;

        *self.results.write().await = AnalysisResults::default();

        // Re-fetch the profile so display state reflects the backend's view.
        let profile = self.auth.profile_by_email(&user.email).await?;
        if let Some(snapshot) = profile.parse_snapshot() {
            *self.results.write().await = snapshot;
        }

        Ok(self.results.read().await.clone())
    }
}
