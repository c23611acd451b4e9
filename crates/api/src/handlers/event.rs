//! Handlers for the `/events` resource.
//!
//! Events are the only resource with a derived transfer shape: responses
//! embed the owning category's name and slug, the full linked contact (when
//! present), and an image URL qualified with the requesting host.

use axum::extract::{Path, Query, State};
use axum::http::header::HOST;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use citysync_core::directory;
use citysync_core::error::CoreError;
use citysync_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

use citysync_db::models::contact_info::ContactInfo;
use citysync_db::models::event::{CreateEvent, EventRecord, UpdateEvent};
use citysync_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/events`.
#[derive(Debug, Deserialize)]
pub struct EventListParams {
    /// Category slug to filter by (exact match). Absent means all events.
    pub category: Option<String>,
}

/// Response shape for a single event.
///
/// `category` and `contact_info` stay raw foreign-key identifiers (the same
/// form create/update accept); the `*_name`, `*_slug`, `*_details`, and
/// `image_url` fields are read-only and derived at serialization time.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: DbId,
    pub category_name: String,
    pub category_slug: String,
    pub location: String,
    pub date: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub admission: String,
    pub external_links: String,
    pub contact_info: Option<DbId>,
    pub contact_info_details: Option<ContactInfo>,
    pub created_at: Timestamp,
}

impl EventResponse {
    /// Shape a joined event row for the wire.
    ///
    /// `base` is the request's `{scheme}://{host}` prefix; without it the
    /// image URL stays root-relative.
    fn from_record(record: EventRecord, base: Option<&str>) -> Self {
        let contact_info_details = match (
            record.contact_info_id,
            record.contact_address,
            record.contact_phone,
            record.contact_email,
        ) {
            (Some(id), Some(address), Some(phone), Some(email)) => Some(ContactInfo {
                id,
                address,
                phone,
                email,
            }),
            _ => None,
        };

        let image_url = record.image.as_deref().map(|image| match base {
            Some(base) => format!("{base}/media/{image}"),
            None => format!("/media/{image}"),
        });

        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            category: record.category_id,
            category_name: record.category_name,
            category_slug: record.category_slug,
            location: record.location,
            date: record.date,
            image: record.image,
            image_url,
            admission: record.admission,
            external_links: record.external_links,
            contact_info: record.contact_info_id,
            contact_info_details,
            created_at: record.created_at,
        }
    }
}

/// Derive the `{scheme}://{host}` prefix from request headers.
///
/// The scheme comes from `x-forwarded-proto` when a proxy sets it and
/// defaults to `http`. Returns `None` when no Host header is present.
fn request_base(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(HOST)?.to_str().ok()?;
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    Some(format!("{scheme}://{host}"))
}

fn validate_create(input: &CreateEvent) -> Result<(), CoreError> {
    directory::validate_title(&input.title)?;
    directory::validate_description(&input.description)?;
    directory::validate_location(&input.location)?;
    directory::validate_date(&input.date)?;
    if let Some(links) = &input.external_links {
        directory::validate_external_links(links)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateEvent) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        directory::validate_title(title)?;
    }
    if let Some(description) = &input.description {
        directory::validate_description(description)?;
    }
    if let Some(location) = &input.location {
        directory::validate_location(location)?;
    }
    if let Some(date) = &input.date {
        directory::validate_date(date)?;
    }
    if let Some(links) = &input.external_links {
        directory::validate_external_links(links)?;
    }
    Ok(())
}

/// POST /api/events
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    validate_create(&input)?;

    let record = EventRepo::create(&state.pool, &input).await?;
    tracing::info!(event_id = record.id, event = %record, "Event created");
    let base = request_base(&headers);
    Ok((
        StatusCode::CREATED,
        Json(EventResponse::from_record(record, base.as_deref())),
    ))
}

/// GET /api/events
///
/// `?category={slug}` narrows the listing to one category.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<EventListParams>,
) -> AppResult<Json<Vec<EventResponse>>> {
    let records = EventRepo::list(&state.pool, params.category.as_deref()).await?;
    let base = request_base(&headers);
    let events = records
        .into_iter()
        .map(|record| EventResponse::from_record(record, base.as_deref()))
        .collect();
    Ok(Json(events))
}

/// GET /api/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<DbId>,
) -> AppResult<Json<EventResponse>> {
    let record = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    let base = request_base(&headers);
    Ok(Json(EventResponse::from_record(record, base.as_deref())))
}

/// PUT/PATCH /api/events/{id}
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<EventResponse>> {
    validate_update(&input)?;

    let record = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    let base = request_base(&headers);
    Ok(Json(EventResponse::from_record(record, base.as_deref())))
}

/// DELETE /api/events/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(event_id = id, "Event deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Event", id }))
    }
}
