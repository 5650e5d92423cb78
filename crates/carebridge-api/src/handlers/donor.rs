//! Donor profile handlers.

use axum::Json;
use axum::extract::State;
use uuid::Uuid;

use crate::error::ApiError;
use carebridge_entity::donor::{CreateDonorProfile, DonorProfile, UpdateDonorProfile};

use crate::dto::request::{CreateDonorProfileRequest, UpdateDonorProfileRequest};
use crate::dto::response::ApiResponse;
use crate::dto::validate_dto;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/donors
pub async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateDonorProfileRequest>,
) -> Result<Json<ApiResponse<DonorProfile>>, ApiError> {
    validate_dto(&req)?;

    let profile = state
        .donor_service
        .create_profile(
            auth.context(),
            CreateDonorProfile {
                account_id: Uuid::nil(), // set from the context by the service
                full_name: req.full_name,
                contact_number: req.contact_number,
                email: req.email,
                address: req.address,
                city: req.city,
                state: req.state,
                pincode: req.pincode,
                occupation: req.occupation,
                organization_name: req.organization_name,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(profile)))
}

/// GET /api/donors/me
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DonorProfile>>, ApiError> {
    let profile = state.donor_service.get_my_profile(auth.context()).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/donors/me
pub async fn update_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateDonorProfileRequest>,
) -> Result<Json<ApiResponse<DonorProfile>>, ApiError> {
    let profile = state
        .donor_service
        .update_my_profile(
            auth.context(),
            UpdateDonorProfile {
                full_name: req.full_name,
                contact_number: req.contact_number,
                email: req.email,
                address: req.address,
                city: req.city,
                state: req.state,
                pincode: req.pincode,
                occupation: req.occupation,
                organization_name: req.organization_name,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(profile)))
}
