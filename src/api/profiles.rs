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
        payload::{CreateProfileRequest, CreatedResponse, ProfileView},
    },
    state::AppState,
};

/// POST /api/profiles - Create a household profile
pub async fn create_profile(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateProfileRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    request.validate()?;

    let profile = state
        .store
        .create_profile(request.into_new_profile(&state.cfg.defaults))
        .await?;

    tracing::info!(profile_id = %profile.id, location = %profile.location_type, "Profile created");
    Ok(Json(CreatedResponse { id: profile.id }))
}

/// GET /api/profiles - List profiles, newest first
pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileView>>, ApiError> {
    let profiles = state.store.list_profiles().await?;
    Ok(Json(profiles.into_iter().map(ProfileView::from).collect()))
}

/// GET /api/profiles/:id - Get a profile by ID
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileView>, ApiError> {
    let profile = state.store.get_profile(id).await?;
    Ok(Json(profile.into()))
}
