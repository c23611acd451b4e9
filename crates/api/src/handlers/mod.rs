//! Request handlers for the directory resources.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers validate field shapes
//! via `citysync_core::directory`, delegate to the corresponding repository
//! in `citysync_db`, and map errors via [`crate::error::AppError`].

pub mod category;
pub mod contact_info;
pub mod event;
