//! Requirement CRUD with owner checks, plus public need listings.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use carebridge_core::error::AppError;
use carebridge_database::repositories::orphanage::OrphanageRepository;
use carebridge_database::repositories::requirement::RequirementRepository;
use carebridge_entity::orphanage::OrphanageProfile;
use carebridge_entity::requirement::{CreateRequirement, Requirement, UpdateRequirement};

use crate::context::RequestContext;

/// Handles requirement postings.
#[derive(Debug, Clone)]
pub struct RequirementService {
    /// Requirement repository.
    requirement_repo: Arc<RequirementRepository>,
    /// Orphanage repository, for owner resolution.
    orphanage_repo: Arc<OrphanageRepository>,
}

impl RequirementService {
    /// Creates a new requirement service.
    pub fn new(
        requirement_repo: Arc<RequirementRepository>,
        orphanage_repo: Arc<OrphanageRepository>,
    ) -> Self {
        Self {
            requirement_repo,
            orphanage_repo,
        }
    }

    /// Posts a new requirement for the caller's orphanage.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateRequirement,
    ) -> Result<Requirement, AppError> {
        let orphanage = self.my_orphanage(ctx).await?;
        data.orphanage_id = orphanage.id;

        if data.item_name.trim().is_empty() {
            return Err(AppError::validation("Item name cannot be empty"));
        }
        if data.quantity_needed <= 0 {
            return Err(AppError::validation("Quantity needed must be positive"));
        }

        let requirement = self.requirement_repo.create(&data).await?;

        info!(
            orphanage_id = %orphanage.id,
            requirement_id = %requirement.id,
            "Requirement posted"
        );

        Ok(requirement)
    }

    /// All requirements posted by the caller's orphanage, newest first.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<Requirement>, AppError> {
        let orphanage = self.my_orphanage(ctx).await?;
        self.requirement_repo.find_by_orphanage(orphanage.id).await
    }

    /// Updates a requirement owned by the caller's orphanage.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateRequirement,
    ) -> Result<Requirement, AppError> {
        self.check_ownership(ctx, id).await?;

        if let Some(quantity) = data.quantity_needed {
            if quantity <= 0 {
                return Err(AppError::validation("Quantity needed must be positive"));
            }
        }

        let requirement = self.requirement_repo.update(id, &data).await?;

        info!(requirement_id = %id, "Requirement updated");

        Ok(requirement)
    }

    /// Deletes a requirement owned by the caller's orphanage.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.check_ownership(ctx, id).await?;

        if !self.requirement_repo.delete(id).await? {
            return Err(AppError::not_found("Requirement not found"));
        }

        info!(requirement_id = %id, "Requirement deleted");

        Ok(())
    }

    /// All open (unfulfilled) requirements across orphanages, newest first.
    pub async fn list_public(&self) -> Result<Vec<Requirement>, AppError> {
        self.requirement_repo.list_unfulfilled().await
    }

    /// Open requirements for one orphanage, newest first.
    pub async fn list_public_for_orphanage(
        &self,
        orphanage_id: Uuid,
    ) -> Result<Vec<Requirement>, AppError> {
        self.requirement_repo
            .list_unfulfilled_by_orphanage(orphanage_id)
            .await
    }

    /// Resolve the caller's orphanage profile.
    async fn my_orphanage(&self, ctx: &RequestContext) -> Result<OrphanageProfile, AppError> {
        self.orphanage_repo
            .find_by_account(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Orphanage profile not found"))
    }

    /// Forbidden unless the requirement belongs to the caller's orphanage.
    async fn check_ownership(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let requirement = self
            .requirement_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Requirement not found"))?;

        let orphanage = self.my_orphanage(ctx).await?;
        if requirement.orphanage_id != orphanage.id {
            return Err(AppError::forbidden(
                "You do not own this requirement",
            ));
        }

        Ok(())
    }
}
