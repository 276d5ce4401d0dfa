//! Filter, sort and paginate a doctor catalog.
//!
//! The engine is a pure function over a borrowed catalog: it never mutates the
//! records and keeps no state between calls.

use std::cmp::Ordering;

use crate::models::{DoctorQuery, DoctorRecord, ResultPage, SortBy};

/// Run `q` against `catalog` and return the requested page.
///
/// `page == 0` and `limit == 0` are caller contract violations. They produce an
/// empty page instead of a panic; the directory service clamps both before
/// calling.
pub fn query(catalog: &[DoctorRecord], q: &DoctorQuery) -> ResultPage {
    let mut matching: Vec<&DoctorRecord> = catalog
        .iter()
        .filter(|doctor| matches_filters(doctor, q))
        .collect();

    sort_doctors(&mut matching, q.sort_by);

    let total = matching.len();
    let doctors = page_window(&matching, q.page, q.limit)
        .iter()
        .map(|doctor| (*doctor).clone())
        .collect();

    ResultPage {
        doctors,
        total,
        page: q.page,
        limit: q.limit,
        total_pages: total_pages(total, q.limit),
    }
}

pub fn matches_filters(doctor: &DoctorRecord, q: &DoctorQuery) -> bool {
    // an empty specialty is the same as no specialty
    if let Some(specialty) = q.specialty.as_deref().filter(|s| !s.is_empty()) {
        if doctor.specialty.as_str() != specialty {
            return false;
        }
    }

    if let Some((min, max)) = q.experience.as_deref().and_then(range_bounds) {
        if doctor.experience < min || doctor.experience > max {
            return false;
        }
    }

    if let Some((min, max)) = q.fees.as_deref().and_then(range_bounds) {
        if doctor.consultation_fees < min || doctor.consultation_fees > max {
            return false;
        }
    }

    true
}

/// Only a two-element range constrains anything; other shapes mean "no filter".
fn range_bounds<T: Copy>(range: &[T]) -> Option<(T, T)> {
    match range {
        [min, max] => Some((*min, *max)),
        _ => None,
    }
}

/// Stable sort, so equal keys keep their filtered order.
pub fn sort_doctors(doctors: &mut [&DoctorRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::FeesLowToHigh => {
            doctors.sort_by(|a, b| a.consultation_fees.total_cmp(&b.consultation_fees))
        }
        SortBy::FeesHighToLow => {
            doctors.sort_by(|a, b| b.consultation_fees.total_cmp(&a.consultation_fees))
        }
        SortBy::Rating => doctors.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Relevance => doctors.sort_by(|a, b| by_relevance(a, b)),
    }
}

fn by_relevance(a: &DoctorRecord, b: &DoctorRecord) -> Ordering {
    b.relevance_score().total_cmp(&a.relevance_score())
}

fn page_window<'a, T>(items: &'a [T], page: usize, limit: usize) -> &'a [T] {
    if page == 0 || limit == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(limit);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(limit).min(items.len());

    &items[start..end]
}

/// `ceil(total / limit)`; an empty result yields zero pages.
pub fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}
