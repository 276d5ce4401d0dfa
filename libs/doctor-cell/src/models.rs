use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use shared_models::error::AppError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "General Physician")]
    GeneralPhysician,
    Cardiologist,
    Dermatologist,
    Pediatrician,
    Orthopedic,
    Gynecologist,
}

impl Specialty {
    pub const ALL: [Specialty; 6] = [
        Specialty::GeneralPhysician,
        Specialty::Cardiologist,
        Specialty::Dermatologist,
        Specialty::Pediatrician,
        Specialty::Orthopedic,
        Specialty::Gynecologist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::GeneralPhysician => "General Physician",
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Dermatologist => "Dermatologist",
            Specialty::Pediatrician => "Pediatrician",
            Specialty::Orthopedic => "Orthopedic",
            Specialty::Gynecologist => "Gynecologist",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub next_available: DateTime<Utc>,
    pub slots: Vec<String>, // display labels, not parsed
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
    pub experience: u32, // years
    pub qualification: String,
    pub rating: f64,
    pub reviews: u32,
    pub availability: Availability,
    pub clinic_location: String,
    pub consultation_fees: f64,
    pub photo_url: String,
    pub languages: Vec<String>,
}

impl DoctorRecord {
    /// Popularity proxy used by the relevance ordering.
    pub fn relevance_score(&self) -> f64 {
        self.rating * f64::from(self.reviews)
    }
}

/// Ordering applied to the filtered records.
///
/// Deserialisation never fails: `null`, non-strings and unknown names all fall
/// back to [`SortBy::Relevance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Relevance,
    FeesLowToHigh,
    FeesHighToLow,
    Rating,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::FeesLowToHigh => "fees-low-to-high",
            SortBy::FeesHighToLow => "fees-high-to-low",
            SortBy::Rating => "rating",
        }
    }
}

impl From<&str> for SortBy {
    fn from(value: &str) -> Self {
        match value.trim() {
            "fees-low-to-high" => SortBy::FeesLowToHigh,
            "fees-high-to-low" => SortBy::FeesHighToLow,
            "rating" => SortBy::Rating,
            _ => SortBy::Relevance,
        }
    }
}

impl From<String> for SortBy {
    fn from(value: String) -> Self {
        SortBy::from(value.as_str())
    }
}

impl<'de> Deserialize<'de> for SortBy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;

        Ok(value
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(SortBy::from)
            .unwrap_or_default())
    }
}

fn default_page() -> usize {
    1
}

/// Filter, sort and page parameters for one directory request.
///
/// `experience` and `fees` are only applied when they carry exactly two bounds.
/// A `limit` of zero asks the directory service for its configured page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorQuery {
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub experience: Option<Vec<u32>>,
    #[serde(default)]
    pub fees: Option<Vec<f64>>,
    #[serde(default, alias = "sortBy")]
    pub sort_by: SortBy,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
}

impl Default for DoctorQuery {
    fn default() -> Self {
        Self {
            specialty: None,
            experience: None,
            fees: None,
            sort_by: SortBy::Relevance,
            page: 1,
            limit: 0,
        }
    }
}

impl DoctorQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn with_experience(mut self, min: u32, max: u32) -> Self {
        self.experience = Some(vec![min, max]);
        self
    }

    pub fn with_fees(mut self, min: f64, max: f64) -> Self {
        self.fees = Some(vec![min, max]);
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn at_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub doctors: Vec<DoctorRecord>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl ResultPage {
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDoctorRequest {
    pub name: String,
    pub specialty: Specialty,
    pub experience: u32,
    pub qualification: String,
    pub rating: f64,
    pub reviews: u32,
    pub availability: Availability,
    pub clinic_location: String,
    pub consultation_fees: f64,
    pub photo_url: String,
    pub languages: Vec<String>,
}

impl NewDoctorRequest {
    pub fn validate(&self) -> Result<(), DoctorError> {
        if self.name.trim().is_empty() {
            return Err(DoctorError::ValidationError("name must not be empty".to_string()));
        }
        if self.languages.is_empty() {
            return Err(DoctorError::ValidationError(
                "at least one language is required".to_string(),
            ));
        }
        if !self.consultation_fees.is_finite() || self.consultation_fees < 0.0 {
            return Err(DoctorError::ValidationError(
                "consultation fees must be a non-negative number".to_string(),
            ));
        }
        if !self.rating.is_finite() {
            return Err(DoctorError::ValidationError("rating must be a number".to_string()));
        }
        Ok(())
    }

    pub fn into_record(self, id: String) -> DoctorRecord {
        DoctorRecord {
            id,
            name: self.name,
            specialty: self.specialty,
            experience: self.experience,
            qualification: self.qualification,
            rating: self.rating,
            reviews: self.reviews,
            availability: self.availability,
            clinic_location: self.clinic_location,
            consultation_fees: self.consultation_fees,
            photo_url: self.photo_url,
            languages: self.languages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(String),

    #[error("Duplicate doctor id: {0}")]
    DuplicateId(String),

    #[error("Invalid doctor record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Doctor catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::DuplicateId(_) => AppError::Conflict(err.to_string()),
            DoctorError::InvalidRecord { .. } | DoctorError::ValidationError(_) => {
                AppError::ValidationError(err.to_string())
            }
            DoctorError::CatalogUnavailable(_) => AppError::ServiceUnavailable(
                "Failed to load doctors. Please try again later.".to_string(),
            ),
        }
    }
}
