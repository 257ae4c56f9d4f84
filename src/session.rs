// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::mem;

use tracing::debug;

use crate::card::BrowseView;
use crate::catalog::{CatalogLoader, CatalogStatus, ShowId, ShowPreview};
use crate::config::BrowseConfig;
use crate::filter::{DefaultOrder, FilterState, SortMode, derive_visible};
use crate::genre::GenreFilter;
use crate::http::HttpClient;
use crate::navigation::{Confirm, NavigationOutcome, Navigator, Route};
use crate::playback::{PlaybackGuard, UnloadDecision};
use crate::progress::SharedProgressReporter;

/// State container for one browsing session.
///
/// Owns the catalog loader, the current [`FilterState`] and the playback
/// guard. The visible list is never stored; it is derived on demand.
pub struct BrowseSession<C, N> {
    loader: CatalogLoader<C>,
    filter: FilterState,
    default_order: DefaultOrder,
    playback: PlaybackGuard,
    navigator: N,
}

impl<C: HttpClient, N: Navigator> BrowseSession<C, N> {
    pub fn new(
        client: C,
        navigator: N,
        config: &BrowseConfig,
        reporter: SharedProgressReporter,
    ) -> Self {
        Self {
            loader: CatalogLoader::new(client, config.endpoint.clone(), reporter),
            filter: FilterState::new().with_sort(config.initial_sort),
            default_order: config.default_order,
            playback: PlaybackGuard::new(),
            navigator,
        }
    }

    /// Fetch the catalog; only the first call issues a request
    pub async fn load(&mut self) -> &CatalogStatus {
        self.loader.load().await
    }

    pub fn status(&self) -> &CatalogStatus {
        self.loader.status()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn default_order(&self) -> DefaultOrder {
        self.default_order
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter = mem::take(&mut self.filter).with_search_term(term);
        debug!(search = %self.filter.search_term, "search term changed");
    }

    pub fn select_genre(&mut self, genre: GenreFilter) {
        self.filter = mem::take(&mut self.filter).with_genre(genre);
        debug!(genre = %genre, "genre filter changed");
    }

    pub fn set_sort_mode(&mut self, sort: SortMode) {
        self.filter = mem::take(&mut self.filter).with_sort(sort);
        debug!(sort = sort.key(), "sort mode changed");
    }

    /// Shows to display, empty until the catalog is ready
    pub fn visible(&self) -> Vec<&ShowPreview> {
        self.loader
            .status()
            .shows()
            .map(|shows| derive_visible(shows, &self.filter, self.default_order))
            .unwrap_or_default()
    }

    pub fn view(&self) -> BrowseView {
        BrowseView::build(self.loader.status(), &self.filter, self.default_order)
    }

    pub fn playback(&self) -> &PlaybackGuard {
        &self.playback
    }

    pub fn on_playback_started(&mut self) {
        self.playback.on_playback_started();
    }

    pub fn on_playback_stopped(&mut self) {
        self.playback.on_playback_stopped();
    }

    pub fn go_to_details(&mut self, id: ShowId, confirm: &dyn Confirm) -> NavigationOutcome {
        self.navigate_guarded(Route::ShowDetails(id), confirm)
    }

    pub fn go_to_favorites(&mut self, confirm: &dyn Confirm) -> NavigationOutcome {
        self.navigate_guarded(Route::Favorites, confirm)
    }

    /// Apply the before-unload guard; true when the session may end
    pub fn request_exit(&self, confirm: &dyn Confirm) -> bool {
        match self.playback.before_unload() {
            UnloadDecision::Proceed => true,
            UnloadDecision::Prompt(message) => confirm.confirm(message),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    fn navigate_guarded(&mut self, route: Route, confirm: &dyn Confirm) -> NavigationOutcome {
        if !self.playback.allow_leave(confirm) {
            debug!(route = %route, "navigation cancelled during playback");
            return NavigationOutcome::Cancelled;
        }

        self.navigator.navigate(route.clone());
        NavigationOutcome::Navigated(route)
    }
}
