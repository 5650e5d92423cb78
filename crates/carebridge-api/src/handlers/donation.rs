//! Donation workflow handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::error::ApiError;
use carebridge_entity::donation::{Donation, DonationStatus};
use carebridge_service::donation::CreateDonationRequest as ServiceCreateDonation;

use crate::dto::request::{CreateDonationRequest, UpdateDonationStatusRequest};
use crate::dto::response::ApiResponse;
use crate::dto::validate_dto;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/donations
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateDonationRequest>,
) -> Result<Json<ApiResponse<Donation>>, ApiError> {
    validate_dto(&req)?;

    let donation = state
        .donation_service
        .create(
            auth.context(),
            ServiceCreateDonation {
                orphanage_id: req.orphanage_id,
                requirement_id: req.requirement_id,
                item_name: req.item_name,
                description: req.description,
                quantity: req.quantity,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(donation)))
}

/// GET /api/donations/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Donation>>>, ApiError> {
    let donations = state.donation_service.list_for_donor(auth.context()).await?;
    Ok(Json(ApiResponse::ok(donations)))
}

/// GET /api/donations/received
pub async fn list_received(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Donation>>>, ApiError> {
    let donations = state
        .donation_service
        .list_for_orphanage(auth.context())
        .await?;
    Ok(Json(ApiResponse::ok(donations)))
}

/// PUT /api/donations/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDonationStatusRequest>,
) -> Result<Json<ApiResponse<Donation>>, ApiError> {
    validate_dto(&req)?;

    let status: DonationStatus = req.status.parse()?;

    let donation = state
        .donation_service
        .update_status(auth.context(), id, status, req.proof_image)
        .await?;

    Ok(Json(ApiResponse::ok(donation)))
}
