//! City-events directory constants and field validators.
//!
//! Field-shape limits mirror the column definitions in `migrations/`.
//! Validators return `CoreError::Validation` with a message naming the
//! offending field so the API layer can surface it directly.

use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidateEmail, ValidateUrl};

use crate::error::CoreError;

pub const MAX_CATEGORY_NAME_LEN: usize = 100;
pub const MAX_SLUG_LEN: usize = 100;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_LOCATION_LEN: usize = 200;
pub const MAX_DATE_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;

/// Admission text applied when an event is created without one.
pub const DEFAULT_ADMISSION: &str = "Free admission";

/// Letters, digits, hyphens, and underscores.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[-a-zA-Z0-9_]+$").expect("slug regex must compile"));

fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_max_len(field: &'static str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.len() > max {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max} characters"
        )));
    }
    Ok(())
}

/// Validate a category name is non-empty and within length limits.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    require_non_empty("Category name", name)?;
    require_max_len("Category name", name, MAX_CATEGORY_NAME_LEN)
}

/// Validate a category slug: non-empty, within length limits, and composed
/// of letters, digits, hyphens, and underscores only.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    require_non_empty("Slug", slug)?;
    require_max_len("Slug", slug, MAX_SLUG_LEN)?;
    if !SLUG_RE.is_match(slug) {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' may only contain letters, digits, hyphens, and underscores"
        )));
    }
    Ok(())
}

/// Validate an event title is non-empty and within length limits.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    require_non_empty("Title", title)?;
    require_max_len("Title", title, MAX_TITLE_LEN)
}

/// Validate an event description is non-empty.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    require_non_empty("Description", description)
}

/// Validate an event location is non-empty and within length limits.
pub fn validate_location(location: &str) -> Result<(), CoreError> {
    require_non_empty("Location", location)?;
    require_max_len("Location", location, MAX_LOCATION_LEN)
}

/// Validate an event date is non-empty and within length limits.
///
/// Dates are stored as free text ("Every Friday in June"), so no calendar
/// parsing is attempted.
pub fn validate_date(date: &str) -> Result<(), CoreError> {
    require_non_empty("Date", date)?;
    require_max_len("Date", date, MAX_DATE_LEN)
}

/// Validate a contact address is non-empty.
pub fn validate_address(address: &str) -> Result<(), CoreError> {
    require_non_empty("Address", address)
}

/// Validate a contact phone is non-empty and within length limits.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    require_non_empty("Phone", phone)?;
    require_max_len("Phone", phone, MAX_PHONE_LEN)
}

/// Validate a contact email is email-shaped.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate an external link is URL-shaped. An empty string is allowed and
/// means "no link".
pub fn validate_external_links(link: &str) -> Result<(), CoreError> {
    if link.is_empty() || link.validate_url() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("'{link}' is not a valid URL")))
    }
}
