use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info};

use crate::models::{Availability, DoctorError, DoctorRecord, Specialty};

/// Where the directory gets its records from at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<DoctorRecord>, DoctorError>;

    fn describe(&self) -> String;
}

/// Validated, immutable sequence of doctor records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    doctors: Vec<DoctorRecord>,
}

impl Catalog {
    pub fn new(doctors: Vec<DoctorRecord>) -> Result<Self, DoctorError> {
        let mut seen = HashSet::with_capacity(doctors.len());

        for doctor in &doctors {
            if doctor.id.trim().is_empty() {
                return Err(DoctorError::InvalidRecord {
                    id: doctor.id.clone(),
                    reason: "id must not be empty".to_string(),
                });
            }
            if !seen.insert(doctor.id.as_str()) {
                return Err(DoctorError::DuplicateId(doctor.id.clone()));
            }
            if doctor.languages.is_empty() {
                return Err(DoctorError::InvalidRecord {
                    id: doctor.id.clone(),
                    reason: "at least one language is required".to_string(),
                });
            }
            if !doctor.consultation_fees.is_finite() || doctor.consultation_fees < 0.0 {
                return Err(DoctorError::InvalidRecord {
                    id: doctor.id.clone(),
                    reason: "consultation fees must be a non-negative number".to_string(),
                });
            }
        }

        Ok(Self { doctors })
    }

    pub async fn from_source(source: &dyn CatalogSource) -> Result<Self, DoctorError> {
        debug!("Loading doctor catalog from {}", source.describe());
        let catalog = Self::new(source.load().await?)?;
        info!("Loaded {} doctors from {}", catalog.len(), source.describe());
        Ok(catalog)
    }

    pub fn doctors(&self) -> &[DoctorRecord] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn get(&self, doctor_id: &str) -> Option<&DoctorRecord> {
        self.doctors.iter().find(|doctor| doctor.id == doctor_id)
    }

    /// New catalog with `doctor` appended; `self` is left as is.
    pub fn with_doctor(&self, doctor: DoctorRecord) -> Result<Self, DoctorError> {
        let mut doctors = self.doctors.clone();
        doctors.push(doctor);
        Self::new(doctors)
    }

    pub fn specialties() -> &'static [Specialty] {
        &Specialty::ALL
    }
}

/// The built-in demo dataset.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<Vec<DoctorRecord>, DoctorError> {
        Ok(builtin_doctors())
    }

    fn describe(&self) -> String {
        "built-in dataset".to_string()
    }
}

/// JSON array of records on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<DoctorRecord>, DoctorError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DoctorError::CatalogUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            DoctorError::CatalogUnavailable(format!("{}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn general_physician(
    id: &str,
    name: &str,
    experience: u32,
    qualification: &str,
    rating: f64,
    reviews: u32,
    next_available: DateTime<Utc>,
    slots: &[&str],
    clinic_location: &str,
    consultation_fees: f64,
    languages: &[&str],
) -> DoctorRecord {
    DoctorRecord {
        id: id.to_string(),
        name: name.to_string(),
        specialty: Specialty::GeneralPhysician,
        experience,
        qualification: qualification.to_string(),
        rating,
        reviews,
        availability: Availability {
            next_available,
            slots: strings(slots),
        },
        clinic_location: clinic_location.to_string(),
        consultation_fees,
        photo_url: "/placeholder.svg".to_string(),
        languages: strings(languages),
    }
}

pub fn builtin_doctors() -> Vec<DoctorRecord> {
    vec![
        general_physician(
            "1",
            "Dr. Rajesh Kumar",
            15,
            "MBBS, MD (Internal Medicine)",
            4.8,
            120,
            at(2023, 5, 3, 10, 0),
            &["10:00 AM", "11:00 AM", "4:00 PM", "5:00 PM"],
            "Apollo Clinic, Sector 4, Gurgaon",
            800.0,
            &["English", "Hindi"],
        ),
        general_physician(
            "2",
            "Dr. Priya Sharma",
            8,
            "MBBS, DNB (Family Medicine)",
            4.6,
            85,
            at(2023, 5, 3, 11, 30),
            &["11:30 AM", "12:30 PM", "6:00 PM"],
            "MediCare Clinic, Connaught Place, New Delhi",
            600.0,
            &["English", "Hindi", "Punjabi"],
        ),
        general_physician(
            "3",
            "Dr. Sunil Mehta",
            20,
            "MBBS, MD (Internal Medicine), DM (Infectious Diseases)",
            4.9,
            210,
            at(2023, 5, 4, 9, 0),
            &["9:00 AM", "10:00 AM", "5:00 PM", "6:00 PM"],
            "Mehta Medical Center, Vasant Kunj, New Delhi",
            1200.0,
            &["English", "Hindi", "Gujarati"],
        ),
        general_physician(
            "4",
            "Dr. Anita Desai",
            12,
            "MBBS, MD (General Medicine)",
            4.7,
            95,
            at(2023, 5, 3, 14, 0),
            &["2:00 PM", "3:00 PM", "4:00 PM"],
            "HealthFirst Clinic, Malviya Nagar, New Delhi",
            700.0,
            &["English", "Hindi", "Marathi"],
        ),
        general_physician(
            "5",
            "Dr. Mohammad Farooq",
            18,
            "MBBS, MD (Internal Medicine), Fellowship in Diabetology",
            4.8,
            150,
            at(2023, 5, 4, 10, 30),
            &["10:30 AM", "11:30 AM", "5:30 PM", "6:30 PM"],
            "Farooq Medical Centre, Okhla, New Delhi",
            900.0,
            &["English", "Hindi", "Urdu"],
        ),
        general_physician(
            "6",
            "Dr. Kiran Reddy",
            7,
            "MBBS, DNB (Family Medicine)",
            4.5,
            65,
            at(2023, 5, 3, 16, 0),
            &["4:00 PM", "5:00 PM", "6:00 PM"],
            "CityHealth Clinic, Greater Kailash, New Delhi",
            500.0,
            &["English", "Hindi", "Telugu"],
        ),
        general_physician(
            "7",
            "Dr. Rahul Khanna",
            10,
            "MBBS, MD (Internal Medicine)",
            4.7,
            88,
            at(2023, 5, 4, 12, 0),
            &["12:00 PM", "1:00 PM", "7:00 PM"],
            "Khanna Clinic, Dwarka, New Delhi",
            650.0,
            &["English", "Hindi"],
        ),
        general_physician(
            "8",
            "Dr. Sunita Agarwal",
            25,
            "MBBS, MD (General Medicine), PhD",
            4.9,
            230,
            at(2023, 5, 5, 10, 0),
            &["10:00 AM", "11:00 AM", "4:00 PM"],
            "Agarwal Medical Institute, Rohini, New Delhi",
            1500.0,
            &["English", "Hindi"],
        ),
    ]
}
