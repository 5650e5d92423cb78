//! Requirement repository.

use sqlx::PgPool;
use uuid::Uuid;

use carebridge_core::error::{AppError, ErrorKind};
use carebridge_core::result::AppResult;
use carebridge_entity::requirement::model::{CreateRequirement, Requirement, UpdateRequirement};

/// Repository for requirement CRUD and public listings.
#[derive(Debug, Clone)]
pub struct RequirementRepository {
    pool: PgPool,
}

impl RequirementRepository {
    /// Create a new requirement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a requirement by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Requirement>> {
        sqlx::query_as::<_, Requirement>("SELECT * FROM requirements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find requirement", e)
            })
    }

    /// All requirements posted by one orphanage, newest first.
    pub async fn find_by_orphanage(&self, orphanage_id: Uuid) -> AppResult<Vec<Requirement>> {
        sqlx::query_as::<_, Requirement>(
            "SELECT * FROM requirements WHERE orphanage_id = $1 ORDER BY posted_at DESC",
        )
        .bind(orphanage_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requirements", e))
    }

    /// All unfulfilled requirements across orphanages, newest first.
    pub async fn list_unfulfilled(&self) -> AppResult<Vec<Requirement>> {
        sqlx::query_as::<_, Requirement>(
            "SELECT * FROM requirements WHERE is_fulfilled = FALSE ORDER BY posted_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list open requirements", e)
        })
    }

    /// Unfulfilled requirements for one orphanage, newest first.
    pub async fn list_unfulfilled_by_orphanage(
        &self,
        orphanage_id: Uuid,
    ) -> AppResult<Vec<Requirement>> {
        sqlx::query_as::<_, Requirement>(
            "SELECT * FROM requirements \
             WHERE orphanage_id = $1 AND is_fulfilled = FALSE \
             ORDER BY posted_at DESC",
        )
        .bind(orphanage_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list orphanage requirements",
                e,
            )
        })
    }

    /// Post a new requirement.
    pub async fn create(&self, data: &CreateRequirement) -> AppResult<Requirement> {
        sqlx::query_as::<_, Requirement>(
            "INSERT INTO requirements \
             (orphanage_id, item_name, category, description, quantity_needed, deadline) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.orphanage_id)
        .bind(&data.item_name)
        .bind(data.category)
        .bind(&data.description)
        .bind(data.quantity_needed)
        .bind(data.deadline)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create requirement", e))
    }

    /// Update a requirement's client-writable fields.
    ///
    /// `quantity_received` and `is_fulfilled` are deliberately absent from
    /// [`UpdateRequirement`]; no API path can touch them.
    pub async fn update(&self, id: Uuid, data: &UpdateRequirement) -> AppResult<Requirement> {
        sqlx::query_as::<_, Requirement>(
            "UPDATE requirements SET \
                item_name = COALESCE($2, item_name), \
                category = COALESCE($3, category), \
                description = COALESCE($4, description), \
                quantity_needed = COALESCE($5, quantity_needed), \
                deadline = COALESCE($6, deadline) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.item_name)
        .bind(data.category)
        .bind(&data.description)
        .bind(data.quantity_needed)
        .bind(data.deadline)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update requirement", e))?
        .ok_or_else(|| AppError::not_found(format!("Requirement {id} not found")))
    }

    /// Delete a requirement by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM requirements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete requirement", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
