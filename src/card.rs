// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, Local, TimeZone};

use crate::catalog::{CatalogStatus, ShowId, ShowPreview};
use crate::filter::{DefaultOrder, FilterState, derive_visible};
use crate::genre::resolve_genre_names;

/// Shown when a show has no readable `updated` timestamp
pub const MISSING_DATE_PLACEHOLDER: &str = "N/A";

/// Display-ready data for one show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    pub id: ShowId,
    pub title: String,
    pub image: String,
    pub seasons: u32,
    pub genres: Vec<&'static str>,
    pub last_updated: String,
}

impl ShowCard {
    pub fn from_preview(show: &ShowPreview) -> Self {
        Self {
            id: show.id.clone(),
            title: show.title.clone(),
            image: show.image.clone(),
            seasons: show.seasons,
            genres: resolve_genre_names(show.genre_codes()),
            last_updated: format_updated(show),
        }
    }
}

/// Format the last-updated date as month/day/year in the local time zone
pub fn format_updated(show: &ShowPreview) -> String {
    show.updated_at()
        .map(|dt| format_date_in(&dt, &Local))
        .unwrap_or_else(|| MISSING_DATE_PLACEHOLDER.to_string())
}

/// Format `dt` as an unpadded month/day/year date as seen in `tz`
pub fn format_date_in<Tz: TimeZone>(dt: &DateTime<FixedOffset>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    dt.with_timezone(tz).format("%-m/%-d/%Y").to_string()
}

/// What the browser should currently display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseView {
    Loading,
    Error(String),
    /// The catalog itself has no shows
    Empty,
    /// The catalog has shows but the filters exclude all of them
    NoMatches,
    Shows(Vec<ShowCard>),
}

impl BrowseView {
    /// Build the view for a loader status and the current filter inputs
    pub fn build(status: &CatalogStatus, filter: &FilterState, default_order: DefaultOrder) -> Self {
        match status {
            CatalogStatus::Loading => Self::Loading,
            CatalogStatus::Error(message) => Self::Error(message.clone()),
            CatalogStatus::Ready(shows) if shows.is_empty() => Self::Empty,
            CatalogStatus::Ready(shows) => {
                let visible = derive_visible(shows, filter, default_order);
                if visible.is_empty() {
                    Self::NoMatches
                } else {
                    Self::Shows(visible.into_iter().map(ShowCard::from_preview).collect())
                }
            }
        }
    }
}
