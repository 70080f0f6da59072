//! Service catalog: the fixed list of services shown on the marketing site.

pub mod handlers;
pub mod models;

pub use handlers::ApiDoc;
pub use models::{CatalogEntry, SERVICES, ServiceOffering, list_services};
