mod fetch;
mod loader;
mod model;

pub use fetch::{DEFAULT_CATALOG_URL, fetch_catalog, parse_catalog};
pub use loader::{CatalogLoader, CatalogStatus};
pub use model::{ShowId, ShowPreview, parse_timestamp};
