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
        payload::{AddApplianceRequest, ApplianceView, CreatedResponse},
    },
    state::AppState,
};

/// POST /api/profiles/:id/appliances - Add an appliance to a profile
pub async fn add_appliance(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    ApiJson(request): ApiJson<AddApplianceRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    request.validate()?;

    let record = state
        .store
        .add_appliance(profile_id, request.into_usage())
        .await?;

    tracing::info!(
        %profile_id,
        appliance_id = %record.id,
        category = %record.usage.category,
        power_watts = record.usage.power_watts,
        "Appliance added"
    );
    Ok(Json(CreatedResponse { id: record.id }))
}

/// GET /api/profiles/:id/appliances - List a profile's appliances
pub async fn list_appliances(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<Vec<ApplianceView>>, ApiError> {
    let records = state.store.list_appliances(profile_id).await?;
    Ok(Json(records.into_iter().map(ApplianceView::from).collect()))
}
