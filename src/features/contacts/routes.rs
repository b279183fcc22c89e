use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactService;

/// Create routes for the contacts feature
///
/// Note: the admin routes are not authenticated.
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contacts", post(handlers::submit_contact))
        .route("/api/admin/contacts", get(handlers::list_contacts))
        .route("/api/admin/contacts/{id}", get(handlers::get_contact))
        .route(
            "/api/admin/contacts/{id}/read",
            patch(handlers::mark_contact_read),
        )
        .with_state(service)
}
