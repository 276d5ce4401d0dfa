pub mod catalog;
pub mod directory;
pub mod query;

pub use catalog::{Catalog, CatalogSource, JsonFileCatalog, StaticCatalog};
pub use directory::DirectoryService;
pub use query::query;
