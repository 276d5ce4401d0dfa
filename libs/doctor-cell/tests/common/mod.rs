#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use doctor_cell::handlers::DirectoryState;
use doctor_cell::models::{Availability, DoctorRecord, NewDoctorRequest, Specialty};
use doctor_cell::services::catalog::builtin_doctors;
use doctor_cell::{Catalog, DirectoryService};
use shared_utils::test_utils::TestConfig;

pub fn builtin_service() -> DirectoryService {
    service_with(builtin_doctors())
}

pub fn service_with(doctors: Vec<DoctorRecord>) -> DirectoryService {
    let config = TestConfig::default().to_app_config();
    DirectoryService::new(&config, Catalog::new(doctors).unwrap())
}

pub fn builtin_state() -> Arc<DirectoryState> {
    let config = TestConfig::default().to_arc();
    let directory = DirectoryService::new(&config, Catalog::new(builtin_doctors()).unwrap());
    Arc::new(DirectoryState::new(config, directory))
}

pub fn doctor(id: &str, specialty: Specialty, experience: u32, fees: f64, rating: f64, reviews: u32) -> DoctorRecord {
    DoctorRecord {
        id: id.to_string(),
        name: format!("Dr. Test {}", id),
        specialty,
        experience,
        qualification: "MBBS".to_string(),
        rating,
        reviews,
        availability: Availability {
            next_available: Utc.with_ymd_and_hms(2023, 5, 3, 9, 0, 0).unwrap(),
            slots: vec!["9:00 AM".to_string(), "10:00 AM".to_string()],
        },
        clinic_location: "Test Clinic, New Delhi".to_string(),
        consultation_fees: fees,
        photo_url: "/placeholder.svg".to_string(),
        languages: vec!["English".to_string()],
    }
}

/// Mixed-specialty catalog with repeated fees and ratings.
pub fn mixed_catalog() -> Vec<DoctorRecord> {
    vec![
        doctor("gp-1", Specialty::GeneralPhysician, 4, 400.0, 4.2, 40),
        doctor("card-1", Specialty::Cardiologist, 22, 2000.0, 4.9, 310),
        doctor("derm-1", Specialty::Dermatologist, 9, 900.0, 4.6, 120),
        doctor("gp-2", Specialty::GeneralPhysician, 12, 400.0, 4.7, 80),
        doctor("ped-1", Specialty::Pediatrician, 15, 1100.0, 4.6, 95),
        doctor("card-2", Specialty::Cardiologist, 30, 2500.0, 4.6, 60),
        doctor("ortho-1", Specialty::Orthopedic, 0, 0.0, 0.0, 0),
        doctor("gyn-1", Specialty::Gynecologist, 18, 1300.0, 4.8, 200),
    ]
}

pub fn new_doctor_request(name: &str) -> NewDoctorRequest {
    NewDoctorRequest {
        name: name.to_string(),
        specialty: Specialty::Cardiologist,
        experience: 11,
        qualification: "MBBS, MD, DM (Cardiology)".to_string(),
        rating: 4.4,
        reviews: 33,
        availability: Availability {
            next_available: Utc.with_ymd_and_hms(2023, 5, 6, 11, 0, 0).unwrap(),
            slots: vec!["11:00 AM".to_string(), "3:00 PM".to_string()],
        },
        clinic_location: "Heart Care, Saket, New Delhi".to_string(),
        consultation_fees: 1400.0,
        photo_url: "/placeholder.svg".to_string(),
        languages: vec!["English".to_string(), "Hindi".to_string()],
    }
}
