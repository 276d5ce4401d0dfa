//! View models for the directory page.
//!
//! Everything here is derived from a [`ResultPage`]; no formatting decision
//! feeds back into the query engine.

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{DoctorRecord, ResultPage};

/// Slots shown on a card before the overflow label kicks in.
pub const VISIBLE_SLOTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub qualification: String,
    pub photo_url: String,
    pub clinic_location: String,
    pub rating_label: String,
    pub reviews_label: String,
    pub experience_label: String,
    pub languages_label: String,
    pub next_available_label: String,
    pub visible_slots: Vec<String>,
    pub more_slots_label: Option<String>,
    pub fee_label: String,
}

impl DoctorCard {
    pub fn from_record(doctor: &DoctorRecord, currency_symbol: &str) -> Self {
        let slots = &doctor.availability.slots;
        let hidden = slots.len().saturating_sub(VISIBLE_SLOTS);

        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialty: doctor.specialty.to_string(),
            qualification: doctor.qualification.clone(),
            photo_url: doctor.photo_url.clone(),
            clinic_location: doctor.clinic_location.clone(),
            rating_label: format!("{} ★", doctor.rating),
            reviews_label: format!("({} reviews)", doctor.reviews),
            experience_label: format!("{} Years Exp", doctor.experience),
            languages_label: doctor.languages.join(", "),
            next_available_label: doctor
                .availability
                .next_available
                .format("%a, %b %-d")
                .to_string(),
            visible_slots: slots.iter().take(VISIBLE_SLOTS).cloned().collect(),
            more_slots_label: (hidden > 0).then(|| format!("+{} more", hidden)),
            fee_label: format!("{}{}", currency_symbol, doctor.consultation_fees),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub visible: bool,
    pub previous_page: usize,
    pub next_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub pages: Vec<usize>,
}

impl PaginationView {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let last = total_pages.max(1);

        Self {
            current_page,
            total_pages,
            visible: total_pages > 1,
            previous_page: current_page.saturating_sub(1).max(1),
            next_page: current_page.saturating_add(1).min(last),
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            pages: (1..=total_pages).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
    pub action_label: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "No doctors found".to_string(),
            message: "Try adjusting your filters or search criteria.".to_string(),
            action_label: "Reset Filters".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub summary: Option<String>,
    pub empty_state: Option<EmptyState>,
    pub cards: Vec<DoctorCard>,
    pub pagination: PaginationView,
    pub total: usize,
}

impl ListingView {
    pub fn from_page(page: &ResultPage, currency_symbol: &str) -> Self {
        let cards: Vec<DoctorCard> = page
            .doctors
            .iter()
            .map(|doctor| DoctorCard::from_record(doctor, currency_symbol))
            .collect();

        let (summary, empty_state) = if cards.is_empty() {
            (None, Some(EmptyState::default()))
        } else {
            (Some(format!("Showing {} of {} doctors", cards.len(), page.total)), None)
        };

        Self {
            summary,
            empty_state,
            cards,
            pagination: PaginationView::new(page.page, page.total_pages),
            total: page.total,
        }
    }
}

/// Static search-engine metadata for the directory page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub meta_tags: Vec<MetaTag>,
    pub structured_data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaTag {
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn new(key: &str, content: &str) -> Self {
        Self {
            key: key.to_string(),
            content: content.to_string(),
        }
    }
}

impl PageMetadata {
    pub fn general_physician(canonical_url: &str) -> Self {
        let title = "Find General Physicians & Internal Medicine Specialists | DoctorFinder";
        let description = "Consult with experienced General Physicians and Internal Medicine specialists. Book appointments online with top doctors for check-ups, consultations, and more.";

        Self {
            title: title.to_string(),
            description: description.to_string(),
            keywords: "general physician, internal medicine, doctor appointment, medical consultation, healthcare, specialist doctor".to_string(),
            canonical_url: canonical_url.to_string(),
            meta_tags: vec![
                MetaTag::new("og:title", title),
                MetaTag::new("og:description", description),
                MetaTag::new("og:type", "website"),
                MetaTag::new("og:url", canonical_url),
                MetaTag::new("twitter:card", "summary_large_image"),
                MetaTag::new("twitter:title", title),
                MetaTag::new("twitter:description", description),
            ],
            structured_data: json!({
                "@context": "https://schema.org",
                "@type": "MedicalSpecialty",
                "name": "General Physician & Internal Medicine",
                "description": "Find and book appointments with General Physicians and Internal Medicine specialists.",
                "medicalSpecialty": {
                    "@type": "MedicalSpecialty",
                    "name": "Internal Medicine"
                }
            }),
        }
    }
}
