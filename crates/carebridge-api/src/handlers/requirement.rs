//! Requirement handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::error::ApiError;
use carebridge_entity::requirement::{
    CreateRequirement, Requirement, RequirementCategory, UpdateRequirement,
};

use crate::dto::request::{CreateRequirementRequest, UpdateRequirementRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate_dto;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/requirements
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateRequirementRequest>,
) -> Result<Json<ApiResponse<Requirement>>, ApiError> {
    validate_dto(&req)?;

    let category = match req.category {
        Some(ref name) => name.parse()?,
        None => RequirementCategory::default(),
    };

    let requirement = state
        .requirement_service
        .create(
            auth.context(),
            CreateRequirement {
                orphanage_id: Uuid::nil(), // resolved from the context by the service
                item_name: req.item_name,
                category,
                description: req.description,
                quantity_needed: req.quantity_needed,
                deadline: req.deadline,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(requirement)))
}

/// GET /api/requirements/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Requirement>>>, ApiError> {
    let requirements = state.requirement_service.list_mine(auth.context()).await?;
    Ok(Json(ApiResponse::ok(requirements)))
}

/// PUT /api/requirements/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRequirementRequest>,
) -> Result<Json<ApiResponse<Requirement>>, ApiError> {
    let category = req
        .category
        .as_deref()
        .map(str::parse::<RequirementCategory>)
        .transpose()?;

    let requirement = state
        .requirement_service
        .update(
            auth.context(),
            id,
            UpdateRequirement {
                item_name: req.item_name,
                category,
                description: req.description,
                quantity_needed: req.quantity_needed,
                deadline: req.deadline,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(requirement)))
}

/// DELETE /api/requirements/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.requirement_service.delete(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Requirement deleted",
    ))))
}

/// GET /api/requirements/public
pub async fn list_public(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Requirement>>>, ApiError> {
    let requirements = state.requirement_service.list_public().await?;
    Ok(Json(ApiResponse::ok(requirements)))
}

/// GET /api/requirements/orphanage/{id}
pub async fn list_public_for_orphanage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Requirement>>>, ApiError> {
    let requirements = state
        .requirement_service
        .list_public_for_orphanage(id)
        .await?;
    Ok(Json(ApiResponse::ok(requirements)))
}
