use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::{
        error::ApiError,
        extract::ApiJson,
        payload::{OkResponse, SetSolarRequest},
    },
    domain::SolarSpec,
    state::AppState,
};

/// POST /api/profiles/:id/solar - Create or update the solar installation
///
/// Omitted fields keep their stored value; a new record starts from zero
/// capacity and cost with the configured PSH and performance ratio.
pub async fn set_solar(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    ApiJson(request): ApiJson<SetSolarRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    request.validate()?;

    let record = state
        .store
        .upsert_solar(
            profile_id,
            request.into(),
            state.cfg.solar_defaults.absent_spec(),
        )
        .await?;

    tracing::info!(
        %profile_id,
        system_kwp = record.spec.system_size_kwp,
        install_cost = record.spec.install_cost,
        "Solar configuration saved"
    );
    Ok(Json(OkResponse { ok: true }))
}

/// GET /api/profiles/:id/solar - Stored installation, or `null`
pub async fn get_solar(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<Option<SolarSpec>>, ApiError> {
    let record = state.store.get_solar(profile_id).await?;
    Ok(Json(record.map(|r| r.spec)))
}
