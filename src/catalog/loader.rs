// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::{debug, warn};

use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};

use super::fetch::fetch_catalog;
use super::model::ShowPreview;

/// Load state of the show catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    /// Request not yet completed
    Loading,
    /// Request failed; carries a human-readable reason
    Error(String),
    /// Catalog received (possibly empty)
    Ready(Vec<ShowPreview>),
}

impl CatalogStatus {
    /// Whether the loader has reached `Ready` or `Error`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// The catalog, once ready
    pub fn shows(&self) -> Option<&[ShowPreview]> {
        match self {
            Self::Ready(shows) => Some(shows),
            _ => None,
        }
    }
}

/// Fetches the catalog exactly once and keeps the outcome.
///
/// Transitions are `Loading -> Ready` or `Loading -> Error`; both are final.
pub struct CatalogLoader<C> {
    client: C,
    endpoint: String,
    reporter: SharedProgressReporter,
    status: CatalogStatus,
}

impl<C: HttpClient> CatalogLoader<C> {
    pub fn new(client: C, endpoint: impl Into<String>, reporter: SharedProgressReporter) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            reporter,
            status: CatalogStatus::Loading,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    /// Issue the catalog request if it has not completed yet.
    ///
    /// Failures are captured into [`CatalogStatus::Error`]; this never
    /// returns an error and never issues a second request.
    pub async fn load(&mut self) -> &CatalogStatus {
        if self.status.is_terminal() {
            return &self.status;
        }

        debug!(url = %self.endpoint, "fetching catalog");
        self.reporter.report(ProgressEvent::FetchingCatalog {
            url: self.endpoint.clone(),
        });

        self.status = match fetch_catalog(&self.client, &self.endpoint).await {
            Ok(shows) => {
                debug!(count = shows.len(), "catalog loaded");
                self.reporter
                    .report(ProgressEvent::CatalogLoaded { count: shows.len() });
                CatalogStatus::Ready(shows)
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "catalog fetch failed");
                self.reporter.report(ProgressEvent::CatalogFailed {
                    error: message.clone(),
                });
                CatalogStatus::Error(message)
            }
        };

        &self.status
    }
}
