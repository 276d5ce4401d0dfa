use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{DoctorQuery, NewDoctorRequest, SortBy};
use crate::presentation::{ListingView, PageMetadata};
use crate::services::directory::DirectoryService;

/// Shared state behind every directory route.
pub struct DirectoryState {
    pub config: Arc<AppConfig>,
    pub directory: DirectoryService,
}

impl DirectoryState {
    pub fn new(config: Arc<AppConfig>, directory: DirectoryService) -> Self {
        Self { config, directory }
    }
}

// Query parameters for GET /search and GET /listing
#[derive(Debug, Default, Deserialize)]
pub struct DoctorSearchQuery {
    pub specialty: Option<String>,
    pub experience_min: Option<u32>,
    pub experience_max: Option<u32>,
    pub fees_min: Option<f64>,
    pub fees_max: Option<f64>,
    #[serde(alias = "sortBy")]
    pub sort_by: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl DoctorSearchQuery {
    /// A range built from a single bound has one element and is ignored downstream.
    pub fn into_doctor_query(self) -> DoctorQuery {
        DoctorQuery {
            specialty: self.specialty.filter(|s| !s.is_empty()),
            experience: collect_bounds(self.experience_min, self.experience_max),
            fees: collect_bounds(self.fees_min, self.fees_max),
            sort_by: self.sort_by.map(SortBy::from).unwrap_or_default(),
            page: self.page.unwrap_or(1),
            limit: self.limit.unwrap_or(0),
        }
    }
}

fn collect_bounds<T>(min: Option<T>, max: Option<T>) -> Option<Vec<T>> {
    let bounds: Vec<T> = [min, max].into_iter().flatten().collect();
    (!bounds.is_empty()).then_some(bounds)
}

// ==============================================================================
// DIRECTORY QUERY HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn search_doctors(
    State(state): State<Arc<DirectoryState>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let result = state.directory.get_doctors(query.into_doctor_query()).await;

    Ok(Json(json!(result)))
}

#[axum::debug_handler]
pub async fn query_doctors(
    State(state): State<Arc<DirectoryState>>,
    Json(query): Json<DoctorQuery>,
) -> Result<Json<Value>, AppError> {
    let result = state.directory.get_doctors(query).await;

    Ok(Json(json!(result)))
}

#[axum::debug_handler]
pub async fn get_listing(
    State(state): State<Arc<DirectoryState>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let result = state.directory.get_doctors(query.into_doctor_query()).await;
    let listing = ListingView::from_page(&result, &state.config.currency_symbol);

    Ok(Json(json!(listing)))
}

#[axum::debug_handler]
pub async fn get_default_query(
    State(state): State<Arc<DirectoryState>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(state.directory.default_query())))
}

#[axum::debug_handler]
pub async fn list_specialties(
    State(state): State<Arc<DirectoryState>>,
) -> Result<Json<Value>, AppError> {
    let specialties = state.directory.specialties();

    Ok(Json(json!({
        "specialties": specialties,
        "total": specialties.len()
    })))
}

#[axum::debug_handler]
pub async fn get_page_metadata(
    State(state): State<Arc<DirectoryState>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(PageMetadata::general_physician(&state.config.canonical_url))))
}

// ==============================================================================
// DOCTOR PROFILE HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<DirectoryState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.directory.get_doctor(&doctor_id).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<DirectoryState>>,
    Json(request): Json<NewDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    debug!("Registering doctor: {}", request.name);

    let doctor = state.directory.add_doctor(request).await?;

    Ok((StatusCode::CREATED, Json(json!(doctor))))
}
