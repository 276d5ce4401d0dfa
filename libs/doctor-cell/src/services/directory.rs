use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_config::AppConfig;

use crate::models::{DoctorError, DoctorQuery, DoctorRecord, NewDoctorRequest, ResultPage, SortBy, Specialty};
use crate::services::catalog::Catalog;
use crate::services::query as engine;

pub const DEFAULT_EXPERIENCE_RANGE: [u32; 2] = [0, 30];
pub const DEFAULT_FEES_RANGE: [f64; 2] = [0.0, 3000.0];

/// Serves directory requests from the current catalog snapshot.
///
/// Readers clone the `Arc<Catalog>` and release the lock before querying, so a
/// concurrent `add_doctor` never changes a page that is being computed.
pub struct DirectoryService {
    catalog: RwLock<Arc<Catalog>>,
    latency: Duration,
    default_page_size: usize,
    max_page_size: usize,
}

impl DirectoryService {
    pub fn new(config: &AppConfig, catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(Arc::new(catalog)),
            latency: config.simulated_latency(),
            default_page_size: config.default_page_size.max(1),
            max_page_size: config.max_page_size.max(1),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub async fn snapshot(&self) -> Arc<Catalog> {
        self.catalog.read().await.clone()
    }

    /// Filter, sort and page the directory.
    pub async fn get_doctors(&self, query: DoctorQuery) -> ResultPage {
        self.simulate_latency().await;

        let query = self.normalize(query);
        debug!(
            "Querying doctors: specialty={:?} experience={:?} fees={:?} sort={} page={} limit={}",
            query.specialty,
            query.experience,
            query.fees,
            query.sort_by.as_str(),
            query.page,
            query.limit
        );

        let catalog = self.snapshot().await;
        let result = engine::query(catalog.doctors(), &query);

        debug!(
            "Returning {} of {} doctors (page {}/{})",
            result.doctors.len(),
            result.total,
            result.page,
            result.total_pages
        );

        result
    }

    pub async fn get_doctor(&self, doctor_id: &str) -> Result<DoctorRecord, DoctorError> {
        debug!("Fetching doctor profile: {}", doctor_id);

        self.snapshot()
            .await
            .get(doctor_id)
            .cloned()
            .ok_or_else(|| DoctorError::NotFound(doctor_id.to_string()))
    }

    /// Register a doctor and publish a new catalog snapshot containing it.
    pub async fn add_doctor(&self, request: NewDoctorRequest) -> Result<DoctorRecord, DoctorError> {
        request.validate()?;
        self.simulate_latency().await;

        let doctor = request.into_record(format!("new-{}", Uuid::new_v4()));

        let mut current = self.catalog.write().await;
        let updated = current.with_doctor(doctor.clone())?;
        *current = Arc::new(updated);

        info!("Added doctor {} ({}), catalog now holds {} doctors", doctor.id, doctor.name, current.len());

        Ok(doctor)
    }

    pub fn specialties(&self) -> &'static [Specialty] {
        Catalog::specialties()
    }

    /// Initial and reset state of the directory page.
    pub fn default_query(&self) -> DoctorQuery {
        DoctorQuery {
            specialty: Some(Specialty::GeneralPhysician.as_str().to_string()),
            experience: Some(DEFAULT_EXPERIENCE_RANGE.to_vec()),
            fees: Some(DEFAULT_FEES_RANGE.to_vec()),
            sort_by: SortBy::Relevance,
            page: 1,
            limit: self.default_page_size,
        }
    }

    /// Clamp page and limit into the range the engine expects.
    pub fn normalize(&self, mut query: DoctorQuery) -> DoctorQuery {
        if query.page == 0 {
            warn!("Page 0 requested, using page 1");
            query.page = 1;
        }
        if query.limit == 0 {
            query.limit = self.default_page_size;
        } else if query.limit > self.max_page_size {
            warn!("Limit {} exceeds maximum, using {}", query.limit, self.max_page_size);
            query.limit = self.max_page_size;
        }
        query
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
