//! Repository for the `events` table.
//!
//! Every read joins the owning category in the same query (listings always
//! need the category name and slug) and LEFT JOINs the optional contact.

use citysync_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, EventRecord, UpdateEvent};

/// Joined column list shared across queries to avoid repetition.
const COLUMNS: &str = "e.id, e.title, e.description, e.category_id, \
    c.name AS category_name, c.slug AS category_slug, \
    e.location, e.date, e.image, e.admission, e.external_links, \
    e.contact_info_id, ci.address AS contact_address, \
    ci.phone AS contact_phone, ci.email AS contact_email, e.created_at";

/// Join clause matching [`COLUMNS`].
const JOINS: &str = "events e \
    JOIN categories c ON c.id = e.category_id \
    LEFT JOIN contact_info ci ON ci.id = e.contact_info_id";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row with its joined
    /// category and contact columns.
    ///
    /// If `admission` is `None`, defaults to `'Free admission'`.
    /// If `external_links` is `None`, defaults to `''`.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<EventRecord, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO events
                (title, description, category_id, location, date, image,
                 admission, external_links, contact_info_id)
             VALUES ($1, $2, $3, $4, $5, $6,
                     COALESCE($7, 'Free admission'), COALESCE($8, ''), $9)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.category)
        .bind(&input.location)
        .bind(&input.date)
        .bind(&input.image)
        .bind(&input.admission)
        .bind(&input.external_links)
        .bind(input.contact_info)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find an event by its internal ID, with its category joined.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EventRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {JOINS} WHERE e.id = $1");
        sqlx::query_as::<_, EventRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events, newest first, with their categories joined.
    ///
    /// When `category_slug` is given, only events whose category slug
    /// matches exactly are returned.
    pub async fn list(
        pool: &PgPool,
        category_slug: Option<&str>,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        match category_slug {
            Some(slug) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM {JOINS}
                     WHERE c.slug = $1
                     ORDER BY e.created_at DESC"
                );
                sqlx::query_as::<_, EventRecord>(&query)
                    .bind(slug)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM {JOINS} ORDER BY e.created_at DESC");
                sqlx::query_as::<_, EventRecord>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update an event. Only non-`None` fields in `input` are applied;
    /// `created_at` is never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<EventRecord>, sqlx::Error> {
        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category_id = COALESCE($4, category_id),
                location = COALESCE($5, location),
                date = COALESCE($6, date),
                image = COALESCE($7, image),
                admission = COALESCE($8, admission),
                external_links = COALESCE($9, external_links),
                contact_info_id = COALESCE($10, contact_info_id)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.category)
        .bind(&input.location)
        .bind(&input.date)
        .bind(&input.image)
        .bind(&input.admission)
        .bind(&input.external_links)
        .bind(input.contact_info)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(id) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
