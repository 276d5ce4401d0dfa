use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, DirectoryState};

pub fn doctor_routes(state: Arc<DirectoryState>) -> Router {
    Router::new()
        // Directory listing
        .route("/search", get(handlers::search_doctors).post(handlers::query_doctors))
        .route("/listing", get(handlers::get_listing))
        .route("/defaults", get(handlers::get_default_query))
        .route("/specialties", get(handlers::list_specialties))
        .route("/metadata", get(handlers::get_page_metadata))

        // Doctor profiles
        .route("/", post(handlers::create_doctor))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(state)
}
