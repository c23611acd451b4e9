//! Event entity model and DTOs.
//!
//! Events are always read joined with their category (and contact info when
//! linked), so the entity struct carries the joined columns alongside the
//! row's own fields.

use citysync_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `events` table joined with `categories` and, when a
/// contact is linked, `contact_info`.
///
/// The `contact_*` columns come from a LEFT JOIN and are `None` whenever
/// `contact_info_id` is `None`.
#[derive(Debug, Clone, FromRow)]
pub struct EventRecord {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub category_name: String,
    pub category_slug: String,
    pub location: String,
    pub date: String,
    pub image: Option<String>,
    pub admission: String,
    pub external_links: String,
    pub contact_info_id: Option<DbId>,
    pub contact_address: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: Timestamp,
}

impl std::fmt::Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

/// DTO for creating a new event.
///
/// `category` and `contact_info` are raw foreign-key identifiers, not
/// nested objects.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub category: DbId,
    pub location: String,
    pub date: String,
    /// Path relative to the media root, e.g. `events/poster.jpg`.
    pub image: Option<String>,
    /// Defaults to "Free admission" if omitted.
    pub admission: Option<String>,
    /// Defaults to empty if omitted.
    pub external_links: Option<String>,
    pub contact_info: Option<DbId>,
}

/// DTO for updating an existing event. All fields are optional; omitted
/// fields keep their stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<DbId>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub admission: Option<String>,
    pub external_links: Option<String>,
    pub contact_info: Option<DbId>,
}
