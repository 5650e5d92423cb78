//! Orphanage profile handlers and public directory.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::error::ApiError;
use carebridge_entity::orphanage::{
    CreateOrphanageProfile, OrphanageProfile, OrphanageSummary, UpdateOrphanageProfile,
};

use crate::dto::request::{CreateOrphanageRequest, UpdateOrphanageRequest};
use crate::dto::response::ApiResponse;
use crate::dto::validate_dto;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/orphanages
pub async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateOrphanageRequest>,
) -> Result<Json<ApiResponse<OrphanageProfile>>, ApiError> {
    validate_dto(&req)?;

    let profile = state
        .orphanage_service
        .create_profile(
            auth.context(),
            CreateOrphanageProfile {
                account_id: Uuid::nil(), // set from the context by the service
                name: req.name,
                description: req.description,
                address: req.address,
                city: req.city,
                state: req.state,
                pincode: req.pincode,
                phone_number: req.phone_number,
                email: req.email,
                established_on: req.established_on,
                total_orphans: req.total_orphans,
                boys_count: req.boys_count,
                girls_count: req.girls_count,
                students_count: req.students_count,
                registration_no: req.registration_no,
                website: req.website,
                banner_image: req.banner_image,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(profile)))
}

/// GET /api/orphanages/me
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<OrphanageProfile>>, ApiError> {
    let profile = state
        .orphanage_service
        .get_my_profile(auth.context())
        .await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/orphanages/me
pub async fn update_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateOrphanageRequest>,
) -> Result<Json<ApiResponse<OrphanageProfile>>, ApiError> {
    let profile = state
        .orphanage_service
        .update_my_profile(
            auth.context(),
            UpdateOrphanageProfile {
                name: req.name,
                description: req.description,
                address: req.address,
                city: req.city,
                state: req.state,
                pincode: req.pincode,
                phone_number: req.phone_number,
                email: req.email,
                established_on: req.established_on,
                total_orphans: req.total_orphans,
                boys_count: req.boys_count,
                girls_count: req.girls_count,
                students_count: req.students_count,
                registration_no: req.registration_no,
                website: req.website,
                banner_image: req.banner_image,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(profile)))
}

/// GET /api/orphanages
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<OrphanageSummary>>>, ApiError> {
    let orphanages = state.orphanage_service.list().await?;
    Ok(Json(ApiResponse::ok(orphanages)))
}

/// GET /api/orphanages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrphanageProfile>>, ApiError> {
    let orphanage = state.orphanage_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(orphanage)))
}
