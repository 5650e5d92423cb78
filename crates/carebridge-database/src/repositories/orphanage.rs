//! Orphanage profile repository.

use sqlx::PgPool;
use uuid::Uuid;

use carebridge_core::error::{AppError, ErrorKind};
use carebridge_core::result::AppResult;
use carebridge_entity::orphanage::model::{
    CreateOrphanageProfile, OrphanageProfile, OrphanageSummary, UpdateOrphanageProfile,
};

/// Repository for orphanage profile CRUD and the public directory.
#[derive(Debug, Clone)]
pub struct OrphanageRepository {
    pool: PgPool,
}

impl OrphanageRepository {
    /// Create a new orphanage repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an orphanage profile by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<OrphanageProfile>> {
        sqlx::query_as::<_, OrphanageProfile>("SELECT * FROM orphanage_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find orphanage profile", e)
            })
    }

    /// Find the orphanage profile owned by the given account.
    pub async fn find_by_account(&self, account_id: Uuid) -> AppResult<Option<OrphanageProfile>> {
        sqlx::query_as::<_, OrphanageProfile>(
            "SELECT * FROM orphanage_profiles WHERE account_id = $1",
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to find orphanage profile by account",
                e,
            )
        })
    }

    /// Public directory listing, summary fields only.
    pub async fn list_summaries(&self) -> AppResult<Vec<OrphanageSummary>> {
        sqlx::query_as::<_, OrphanageSummary>(
            "SELECT id, name, city, state, total_orphans, verified, banner_image \
             FROM orphanage_profiles ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orphanages", e))
    }

    /// Create an orphanage profile (one per account).
    pub async fn create(&self, data: &CreateOrphanageProfile) -> AppResult<OrphanageProfile> {
        sqlx::query_as::<_, OrphanageProfile>(
            "INSERT INTO orphanage_profiles \
             (account_id, name, description, address, city, state, pincode, phone_number, email, \
              established_on, total_orphans, boys_count, girls_count, students_count, \
              registration_no, website, banner_image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING *",
        )
        .bind(data.account_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.pincode)
        .bind(&data.phone_number)
        .bind(&data.email)
        .bind(data.established_on)
        .bind(data.total_orphans)
        .bind(data.boys_count)
        .bind(data.girls_count)
        .bind(data.students_count)
        .bind(&data.registration_no)
        .bind(&data.website)
        .bind(&data.banner_image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("orphanage_profiles_account_id_key") =>
            {
                AppError::conflict("Orphanage profile already exists for this account".to_string())
            }
            _ => {
                AppError::with_source(ErrorKind::Database, "Failed to create orphanage profile", e)
            }
        })
    }

    /// Update the profile owned by the given account.
    pub async fn update(
        &self,
        account_id: Uuid,
        data: &UpdateOrphanageProfile,
    ) -> AppResult<OrphanageProfile> {
        sqlx::query_as::<_, OrphanageProfile>(
            "UPDATE orphanage_profiles SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                address = COALESCE($4, address), \
                city = COALESCE($5, city), \
                state = COALESCE($6, state), \
                pincode = COALESCE($7, pincode), \
                phone_number = COALESCE($8, phone_number), \
                email = COALESCE($9, email), \
                established_on = COALESCE($10, established_on), \
                total_orphans = COALESCE($11, total_orphans), \
                boys_count = COALESCE($12, boys_count), \
                girls_count = COALESCE($13, girls_count), \
                students_count = COALESCE($14, students_count), \
                registration_no = COALESCE($15, registration_no), \
                website = COALESCE($16, website), \
                banner_image = COALESCE($17, banner_image) \
             WHERE account_id = $1 RETURNING *",
        )
        .bind(account_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.pincode)
        .bind(&data.phone_number)
        .bind(&data.email)
        .bind(data.established_on)
        .bind(data.total_orphans)
        .bind(data.boys_count)
        .bind(data.girls_count)
        .bind(data.students_count)
        .bind(&data.registration_no)
        .bind(&data.website)
        .bind(&data.banner_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update orphanage profile", e)
        })?
        .ok_or_else(|| AppError::not_found("Orphanage profile not found"))
    }
}
