pub mod category;
pub mod contact_info;
pub mod event;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                    list, create
/// /events/{id}               get, update (PUT/PATCH), delete
/// /categories                list, create
/// /categories/{id}           get, update (PUT/PATCH), delete
/// /contact                   list, create
/// /contact/{id}              get, update (PUT/PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", event::router())
        .nest("/categories", category::router())
        .nest("/contact", contact_info::router())
}
