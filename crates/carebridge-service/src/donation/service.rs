//! Donation creation, status transitions, and transition notifications.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use carebridge_core::error::AppError;
use carebridge_database::repositories::donation::DonationRepository;
use carebridge_database::repositories::donor::DonorProfileRepository;
use carebridge_database::repositories::orphanage::OrphanageRepository;
use carebridge_database::repositories::requirement::RequirementRepository;
use carebridge_entity::donation::{CreateDonation, Donation, DonationStatus};

use crate::context::RequestContext;
use crate::notify::NotifyService;

/// Handles the donation workflow.
#[derive(Debug, Clone)]
pub struct DonationService {
    /// Donation repository.
    donation_repo: Arc<DonationRepository>,
    /// Donor profile repository.
    donor_repo: Arc<DonorProfileRepository>,
    /// Orphanage repository.
    orphanage_repo: Arc<OrphanageRepository>,
    /// Requirement repository.
    requirement_repo: Arc<RequirementRepository>,
    /// Mail dispatch for transition notifications.
    notify: Arc<NotifyService>,
}

/// Data for pledging a new donation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateDonationRequest {
    /// Target orphanage.
    pub orphanage_id: Uuid,
    /// Requirement being answered, if any.
    pub requirement_id: Option<Uuid>,
    /// Item name; ignored when a requirement is referenced.
    pub item_name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Number of units pledged.
    pub quantity: i32,
}

impl DonationService {
    /// Creates a new donation service.
    pub fn new(
        donation_repo: Arc<DonationRepository>,
        donor_repo: Arc<DonorProfileRepository>,
        orphanage_repo: Arc<OrphanageRepository>,
        requirement_repo: Arc<RequirementRepository>,
        notify: Arc<NotifyService>,
    ) -> Self {
        Self {
            donation_repo,
            donor_repo,
            orphanage_repo,
            requirement_repo,
            notify,
        }
    }

    /// Pledges a new donation on behalf of the caller's donor profile.
    ///
    /// When a requirement is referenced, its item name wins over any name
    /// the caller supplied. With neither a requirement nor an item name the
    /// request is rejected. The "new donation" email to the orphanage is
    /// dispatched only after the row is persisted and never fails the call.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateDonationRequest,
    ) -> Result<Donation, AppError> {
        let donor = self
            .donor_repo
            .find_by_account(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Donor profile not found"))?;

        let orphanage = self
            .orphanage_repo
            .find_by_id(req.orphanage_id)
            .await?
            .ok_or_else(|| AppError::not_found("Orphanage not found"))?;

        if req.quantity <= 0 {
            return Err(AppError::validation("Quantity must be positive"));
        }

        let item_name = match req.requirement_id {
            Some(requirement_id) => {
                let requirement = self
                    .requirement_repo
                    .find_by_id(requirement_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Requirement not found"))?;
                requirement.item_name
            }
            None => match req.item_name {
                Some(name) if !name.trim().is_empty() => name,
                _ => {
                    return Err(AppError::validation(
                        "Either a requirement or an item name is required",
                    ));
                }
            },
        };

        let donation = self
            .donation_repo
            .create(&CreateDonation {
                donor_id: donor.id,
                orphanage_id: orphanage.id,
                requirement_id: req.requirement_id,
                item_name,
                description: req.description,
                quantity: req.quantity,
            })
            .await?;

        info!(
            donation_id = %donation.id,
            donor_id = %donor.id,
            orphanage_id = %orphanage.id,
            "Donation pledged"
        );

        self.notify
            .donation_created(&orphanage, &donation, &donor)
            .await;

        Ok(donation)
    }

    /// Applies a status transition on a donation received by the caller's
    /// orphanage.
    ///
    /// The acceptance email to the donor fires only on the edge into
    /// `accepted` from any other status, so re-accepting a donation never
    /// re-notifies. The edge is decided from the previous status the
    /// repository returns atomically with the update, not from the earlier
    /// ownership read, so two racing accepts notify at most once.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        donation_id: Uuid,
        new_status: DonationStatus,
        proof_image: Option<String>,
    ) -> Result<Donation, AppError> {
        let donation = self
            .donation_repo
            .find_by_id(donation_id)
            .await?
            .ok_or_else(|| AppError::not_found("Donation not found"))?;

        let orphanage = self
            .orphanage_repo
            .find_by_account(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Orphanage profile not found"))?;

        if donation.orphanage_id != orphanage.id {
            return Err(AppError::forbidden(
                "This donation was not made to your orphanage",
            ));
        }

        let (updated, previous) = self
            .donation_repo
            .update_status(donation_id, new_status, proof_image.as_deref())
            .await?;

        info!(
            donation_id = %donation_id,
            from = %previous,
            to = %updated.status,
            "Donation status updated"
        );

        if updated.status.is_acceptance_edge(previous) {
            if let Some(donor) = self.donor_repo.find_by_id(updated.donor_id).await? {
                self.notify
                    .donation_accepted(&donor, &updated, &orphanage)
                    .await;
            }
        }

        Ok(updated)
    }

    /// Donations pledged by the caller's donor profile, newest first.
    pub async fn list_for_donor(&self, ctx: &RequestContext) -> Result<Vec<Donation>, AppError> {
        let donor = self
            .donor_repo
            .find_by_account(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Donor profile not found"))?;

        self.donation_repo.find_by_donor(donor.id).await
    }

    /// Donations received by the caller's orphanage, newest first.
    pub async fn list_for_orphanage(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Donation>, AppError> {
        let orphanage = self
            .orphanage_repo
            .find_by_account(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Orphanage profile not found"))?;

        self.donation_repo.find_by_orphanage(orphanage.id).await
    }
}
