pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod genre;
pub mod http;
pub mod navigation;
pub mod playback;
pub mod progress;
pub mod render;
pub mod session;

// Re-export main types for convenience
pub use card::{BrowseView, ShowCard};
pub use catalog::{
    CatalogLoader, CatalogStatus, DEFAULT_CATALOG_URL, ShowId, ShowPreview, fetch_catalog,
    parse_catalog,
};
pub use config::BrowseConfig;
pub use error::{CatalogError, InputError};
pub use filter::{DefaultOrder, FilterState, SortMode, derive_visible, filter_shows, sort_shows};
pub use genre::{GenreFilter, all_genres, genre_name, parse_genre_filter};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use navigation::{Confirm, NavigationOutcome, Navigator, Route};
pub use playback::{PlaybackGuard, UnloadDecision};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use render::{CardLayout, CarouselLayout, LayoutKind, ListLayout, render_view};
pub use session::BrowseSession;
