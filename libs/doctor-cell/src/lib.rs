pub mod handlers;
pub mod models;
pub mod presentation;
pub mod router;
pub mod services;

pub use models::*;
pub use presentation::{DoctorCard, ListingView, PageMetadata, PaginationView};
pub use router::doctor_routes;
pub use services::{query, Catalog, CatalogSource, DirectoryService, JsonFileCatalog, StaticCatalog};
