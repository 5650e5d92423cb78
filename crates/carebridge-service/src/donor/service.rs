//! Donor profile creation and owner-only updates.

use std::sync::Arc;

use tracing::info;

use carebridge_core::error::AppError;
use carebridge_database::repositories::donor::DonorProfileRepository;
use carebridge_entity::donor::{CreateDonorProfile, DonorProfile, UpdateDonorProfile};

use crate::context::RequestContext;

/// Handles donor profile self-service operations.
#[derive(Debug, Clone)]
pub struct DonorProfileService {
    /// Donor profile repository.
    donor_repo: Arc<DonorProfileRepository>,
}

impl DonorProfileService {
    /// Creates a new donor profile service.
    pub fn new(donor_repo: Arc<DonorProfileRepository>) -> Self {
        Self { donor_repo }
    }

    /// Creates the caller's donor profile (one per account).
    pub async fn create_profile(
        &self,
        ctx: &RequestContext,
        mut data: CreateDonorProfile,
    ) -> Result<DonorProfile, AppError> {
        data.account_id = ctx.account_id;

        if data.full_name.trim().is_empty() {
            return Err(AppError::validation("Full name cannot be empty"));
        }

        let profile = self.donor_repo.create(&data).await?;

        info!(account_id = %ctx.account_id, profile_id = %profile.id, "Donor profile created");

        Ok(profile)
    }

    /// Gets the caller's donor profile.
    pub async fn get_my_profile(&self, ctx: &RequestContext) -> Result<DonorProfile, AppError> {
        self.donor_repo
            .find_by_account(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Donor profile not found"))
    }

    /// Updates the caller's donor profile.
    pub async fn update_my_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateDonorProfile,
    ) -> Result<DonorProfile, AppError> {
        let profile = self.donor_repo.update(ctx.account_id, &data).await?;

        info!(account_id = %ctx.account_id, "Donor profile updated");

        Ok(profile)
    }
}
