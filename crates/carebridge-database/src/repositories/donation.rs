//! Donation repository.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use carebridge_core::error::{AppError, ErrorKind};
use carebridge_core::result::AppResult;
use carebridge_entity::donation::model::{CreateDonation, Donation};
use carebridge_entity::donation::status::DonationStatus;

/// Repository for donation CRUD and per-profile listings.
#[derive(Debug, Clone)]
pub struct DonationRepository {
    pool: PgPool,
}

impl DonationRepository {
    /// Create a new donation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a donation by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Donation>> {
        sqlx::query_as::<_, Donation>("SELECT * FROM donations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find donation", e))
    }

    /// All donations pledged by one donor, newest first.
    pub async fn find_by_donor(&self, donor_id: Uuid) -> AppResult<Vec<Donation>> {
        sqlx::query_as::<_, Donation>(
            "SELECT * FROM donations WHERE donor_id = $1 ORDER BY created_at DESC",
        )
        .bind(donor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list donor donations", e)
        })
    }

    /// All donations received by one orphanage, newest first.
    pub async fn find_by_orphanage(&self, orphanage_id: Uuid) -> AppResult<Vec<Donation>> {
        sqlx::query_as::<_, Donation>(
            "SELECT * FROM donations WHERE orphanage_id = $1 ORDER BY created_at DESC",
        )
        .bind(orphanage_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list received donations", e)
        })
    }

    /// Create a donation with status pending.
    pub async fn create(&self, data: &CreateDonation) -> AppResult<Donation> {
        sqlx::query_as::<_, Donation>(
            "INSERT INTO donations \
             (donor_id, orphanage_id, requirement_id, item_name, description, quantity) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.donor_id)
        .bind(data.orphanage_id)
        .bind(data.requirement_id)
        .bind(&data.item_name)
        .bind(&data.description)
        .bind(data.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create donation", e))
    }

    /// Apply a status change (and optional proof image), returning the
    /// updated row together with the status it replaced.
    ///
    /// The old row is locked and the new status applied in one statement,
    /// so of two racing transitions at most one observes any given prior
    /// status. Callers deciding edge-triggered side effects must use the
    /// returned previous status, never a separate earlier read.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: DonationStatus,
        proof_image: Option<&str>,
    ) -> AppResult<(Donation, DonationStatus)> {
        let row = sqlx::query_as::<_, StatusTransitionRow>(
            "WITH prev AS ( \
                 SELECT status FROM donations WHERE id = $1 FOR UPDATE \
             ) \
             UPDATE donations SET status = $2, proof_image = COALESCE($3, proof_image) \
             FROM prev \
             WHERE donations.id = $1 \
             RETURNING donations.*, prev.status AS previous_status",
        )
        .bind(id)
        .bind(status)
        .bind(proof_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update donation status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Donation {id} not found")))?;

        Ok((row.donation, row.previous_status))
    }
}

/// Row shape for the transition update: the updated donation plus the
/// status it replaced.
#[derive(Debug, FromRow)]
struct StatusTransitionRow {
    #[sqlx(flatten)]
    donation: Donation,
    previous_status: DonationStatus,
}
