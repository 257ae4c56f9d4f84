use std::sync::Arc;

/// Events emitted while the catalog is being loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Catalog request is in flight
    FetchingCatalog { url: String },

    /// Catalog was fetched and decoded
    CatalogLoaded {
        /// Number of show previews received (may be zero)
        count: usize,
    },

    /// Catalog could not be fetched or decoded
    CatalogFailed { error: String },
}

/// Trait for reporting catalog loading events.
///
/// Implementations can use this to drive a loading indicator or to
/// collect events in tests.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter;

        reporter.report(ProgressEvent::FetchingCatalog {
            url: "https://example.com/shows".to_string(),
        });
        reporter.report(ProgressEvent::CatalogLoaded { count: 3 });
        reporter.report(ProgressEvent::CatalogFailed {
            error: "Connection refused".to_string(),
        });
    }
}
