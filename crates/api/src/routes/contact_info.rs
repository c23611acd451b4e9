//! Route definitions for the `/contact` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact_info;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact_info::list).post(contact_info::create))
        .route(
            "/{id}",
            get(contact_info::get_by_id)
                .put(contact_info::update)
                .patch(contact_info::update)
                .delete(contact_info::delete),
        )
}
