//! Handlers for the `/contact` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use citysync_core::directory;
use citysync_core::error::CoreError;
use citysync_core::types::DbId;
use citysync_db::models::contact_info::{ContactInfo, CreateContactInfo, UpdateContactInfo};
use citysync_db::repositories::ContactInfoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/contact
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactInfo>,
) -> AppResult<(StatusCode, Json<ContactInfo>)> {
    directory::validate_address(&input.address)?;
    directory::validate_phone(&input.phone)?;
    directory::validate_email(&input.email)?;

    let contact = ContactInfoRepo::create(&state.pool, &input).await?;
    tracing::info!(contact_id = contact.id, contact = %contact, "Contact record created");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contact
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ContactInfo>>> {
    let contacts = ContactInfoRepo::list(&state.pool).await?;
    Ok(Json(contacts))
}

/// GET /api/contact/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactInfo>> {
    let contact = ContactInfoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactInfo",
            id,
        }))?;
    Ok(Json(contact))
}

/// PUT/PATCH /api/contact/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactInfo>,
) -> AppResult<Json<ContactInfo>> {
    if let Some(address) = &input.address {
        directory::validate_address(address)?;
    }
    if let Some(phone) = &input.phone {
        directory::validate_phone(phone)?;
    }
    if let Some(email) = &input.email {
        directory::validate_email(email)?;
    }

    let contact = ContactInfoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactInfo",
            id,
        }))?;
    Ok(Json(contact))
}

/// DELETE /api/contact/{id}
///
/// Events referencing this contact survive; their reference is cleared.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ContactInfoRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(contact_id = id, "Contact record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ContactInfo",
            id,
        }))
    }
}
