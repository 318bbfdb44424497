use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::time::Instant;
use uuid::Uuid;

use crate::{
    analysis::{analyze, AnalysisResult},
    api::error::ApiError,
    domain::{ApplianceUsage, Profile},
    recommend::{recommend, Tip},
    state::AppState,
};

/// Analysis plus the profile context the UI needs to display it
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub recommendations: Vec<Tip>,
    pub currency: String,
    pub profile: ProfileSummary,
}

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub id: Uuid,
    pub name: String,
    pub location_type: String,
    pub region: Option<String>,
}

impl From<&Profile> for ProfileSummary {
    fn from(p: &Profile) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            location_type: p.location_type.clone(),
            region: p.region.clone(),
        }
    }
}

/// GET /api/profiles/:id/analysis - Monthly consumption, cost, solar and payback
pub async fn run_analysis(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let start = Instant::now();

    let profile = state.store.get_profile(profile_id).await?;
    let appliances: Vec<ApplianceUsage> = state
        .store
        .list_appliances(profile_id)
        .await?
        .into_iter()
        .map(|r| r.usage)
        .collect();
    let solar = state
        .store
        .get_solar(profile_id)
        .await?
        .map(|r| r.spec)
        .unwrap_or_else(|| state.cfg.solar_defaults.absent_spec());

    let analysis = analyze(&appliances, &profile.tariff, &solar);
    let recommendations = recommend(&profile.location_type, &appliances, solar.is_installed());

    tracing::info!(
        %profile_id,
        appliances = appliances.len(),
        baseline_cost_month = analysis.baseline.cost_month,
        savings_year = analysis.savings.cost_savings_year,
        tips = recommendations.len(),
        duration_us = start.elapsed().as_micros() as u64,
        "Analysis completed"
    );

    Ok(Json(AnalysisReport {
        recommendations,
        currency: profile.currency.clone(),
        profile: ProfileSummary::from(&profile),
        analysis,
    }))
}
