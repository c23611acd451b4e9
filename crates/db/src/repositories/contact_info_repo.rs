//! Repository for the `contact_info` table.

use citysync_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_info::{ContactInfo, CreateContactInfo, UpdateContactInfo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, address, phone, email";

/// Provides CRUD operations for contact records.
pub struct ContactInfoRepo;

impl ContactInfoRepo {
    /// Insert a new contact record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactInfo,
    ) -> Result<ContactInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_info (address, phone, email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a contact record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info WHERE id = $1");
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all contact records in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info ORDER BY id");
        sqlx::query_as::<_, ContactInfo>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a contact record. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContactInfo,
    ) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_info SET
                address = COALESCE($2, address),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(id)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact record by ID. Returns `true` if a row was removed.
    ///
    /// Events referencing the contact keep existing; their
    /// `contact_info_id` is cleared by the `ON DELETE SET NULL` constraint.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_info WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
