//! Donor profile repository.

use sqlx::PgPool;
use uuid::Uuid;

use carebridge_core::error::{AppError, ErrorKind};
use carebridge_core::result::AppResult;
use carebridge_entity::donor::model::{CreateDonorProfile, DonorProfile, UpdateDonorProfile};

/// Repository for donor profile CRUD.
#[derive(Debug, Clone)]
pub struct DonorProfileRepository {
    pool: PgPool,
}

impl DonorProfileRepository {
    /// Create a new donor profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a donor profile by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DonorProfile>> {
        sqlx::query_as::<_, DonorProfile>("SELECT * FROM donor_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find donor profile", e)
            })
    }

    /// Find the donor profile owned by the given account.
    pub async fn find_by_account(&self, account_id: Uuid) -> AppResult<Option<DonorProfile>> {
        sqlx::query_as::<_, DonorProfile>("SELECT * FROM donor_profiles WHERE account_id = $1")
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find donor profile by account",
                    e,
                )
            })
    }

    /// Create a donor profile (one per account).
    pub async fn create(&self, data: &CreateDonorProfile) -> AppResult<DonorProfile> {
        sqlx::query_as::<_, DonorProfile>(
            "INSERT INTO donor_profiles \
             (account_id, full_name, contact_number, email, address, city, state, pincode, \
              occupation, organization_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(data.account_id)
        .bind(&data.full_name)
        .bind(&data.contact_number)
        .bind(&data.email)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.pincode)
        .bind(&data.occupation)
        .bind(&data.organization_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("donor_profiles_account_id_key") =>
            {
                AppError::conflict("Donor profile already exists for this account".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create donor profile", e),
        })
    }

    /// Update the profile owned by the given account.
    pub async fn update(
        &self,
        account_id: Uuid,
        data: &UpdateDonorProfile,
    ) -> AppResult<DonorProfile> {
        sqlx::query_as::<_, DonorProfile>(
            "UPDATE donor_profiles SET \
                full_name = COALESCE($2, full_name), \
                contact_number = COALESCE($3, contact_number), \
                email = COALESCE($4, email), \
                address = COALESCE($5, address), \
                city = COALESCE($6, city), \
                state = COALESCE($7, state), \
                pincode = COALESCE($8, pincode), \
                occupation = COALESCE($9, occupation), \
                organization_name = COALESCE($10, organization_name) \
             WHERE account_id = $1 RETURNING *",
        )
        .bind(account_id)
        .bind(&data.full_name)
        .bind(&data.contact_number)
        .bind(&data.email)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.pincode)
        .bind(&data.occupation)
        .bind(&data.organization_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update donor profile", e))?
        .ok_or_else(|| AppError::not_found("Donor profile not found"))
    }
}
