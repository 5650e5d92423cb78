//! Orphanage profile management and public listings.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use carebridge_core::error::AppError;
use carebridge_database::repositories::orphanage::OrphanageRepository;
use carebridge_entity::orphanage::{
    CreateOrphanageProfile, OrphanageProfile, OrphanageSummary, UpdateOrphanageProfile,
};

use crate::context::RequestContext;

/// Handles orphanage profile operations and the public directory.
#[derive(Debug, Clone)]
pub struct OrphanageService {
    /// Orphanage repository.
    orphanage_repo: Arc<OrphanageRepository>,
}

impl OrphanageService {
    /// Creates a new orphanage service.
    pub fn new(orphanage_repo: Arc<OrphanageRepository>) -> Self {
        Self { orphanage_repo }
    }

    /// Creates the caller's orphanage profile (one per account).
    pub async fn create_profile(
        &self,
        ctx: &RequestContext,
        mut data: CreateOrphanageProfile,
    ) -> Result<OrphanageProfile, AppError> {
        data.account_id = ctx.account_id;

        if data.name.trim().is_empty() {
            return Err(AppError::validation("Orphanage name cannot be empty"));
        }

        let profile = self.orphanage_repo.create(&data).await?;

        info!(account_id = %ctx.account_id, profile_id = %profile.id, "Orphanage profile created");

        Ok(profile)
    }

    /// Gets the caller's orphanage profile.
    pub async fn get_my_profile(&self, ctx: &RequestContext) -> Result<OrphanageProfile, AppError> {
        self.orphanage_repo
            .find_by_account(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Orphanage profile not found"))
    }

    /// Updates the caller's orphanage profile.
    pub async fn update_my_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateOrphanageProfile,
    ) -> Result<OrphanageProfile, AppError> {
        let profile = self.orphanage_repo.update(ctx.account_id, &data).await?;

        info!(account_id = %ctx.account_id, "Orphanage profile updated");

        Ok(profile)
    }

    /// Public directory of all orphanages, summary fields only.
    pub async fn list(&self) -> Result<Vec<OrphanageSummary>, AppError> {
        self.orphanage_repo.list_summaries().await
    }

    /// Full public detail for one orphanage.
    pub async fn get_by_id(&self, id: Uuid) -> Result<OrphanageProfile, AppError> {
        self.orphanage_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Orphanage not found"))
    }
}
