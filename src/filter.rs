// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Derivation of the visible show list from the catalog and the current
//! filter inputs.
//!
//! Everything here is a pure function of its arguments: the catalog is only
//! borrowed, and every call produces a fresh list of references.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::catalog::ShowPreview;
use crate::error::InputError;
use crate::genre::GenreFilter;

/// Ordering requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// No explicit ordering; see [`DefaultOrder`]
    #[default]
    Default,
    TitleAsc,
    TitleDesc,
    DateAsc,
    DateDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        Self::Default,
        Self::TitleAsc,
        Self::TitleDesc,
        Self::DateAsc,
        Self::DateDesc,
    ];

    /// Identifier accepted by [`FromStr`]
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::DateAsc => "date-asc",
            Self::DateDesc => "date-desc",
        }
    }

    /// Human-readable label for the sort selector
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::TitleAsc => "Title A-Z",
            Self::TitleDesc => "Title Z-A",
            Self::DateAsc => "Oldest First",
            Self::DateDesc => "Newest First",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" | "none" => Ok(Self::Default),
            "title-asc" | "titleasc" | "a-z" => Ok(Self::TitleAsc),
            "title-desc" | "titledesc" | "z-a" => Ok(Self::TitleDesc),
            "date-asc" | "dateasc" | "oldest" => Ok(Self::DateAsc),
            "date-desc" | "datedesc" | "newest" => Ok(Self::DateDesc),
            _ => Err(InputError::UnknownSortMode(s.to_string())),
        }
    }
}

/// What [`SortMode::Default`] means.
///
/// One variant of the browser kept the catalog in fetch order, another
/// sorted it by title; which one applies is a configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultOrder {
    /// Keep the order in which the API returned the shows
    #[default]
    FetchOrder,
    /// Behave like [`SortMode::TitleAsc`]
    TitleAscending,
}

impl FromStr for DefaultOrder {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fetch" | "fetch-order" | "none" => Ok(Self::FetchOrder),
            "title" | "title-asc" => Ok(Self::TitleAscending),
            _ => Err(InputError::UnknownDefaultOrder(s.to_string())),
        }
    }
}

/// Current user inputs for the catalog view.
///
/// Values are never mutated in place; each `with_*` call yields a new state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub genre: GenreFilter,
    pub sort: SortMode,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search_term(self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_genre(self, genre: GenreFilter) -> Self {
        Self { genre, ..self }
    }

    #[must_use]
    pub fn with_sort(self, sort: SortMode) -> Self {
        Self { sort, ..self }
    }
}

/// Case-insensitive substring match on the title; a blank term matches all
pub fn matches_search(show: &ShowPreview, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    show.title.to_lowercase().contains(&term.to_lowercase())
}

/// Genre membership; shows without genres never match a specific genre
pub fn matches_genre(show: &ShowPreview, genre: GenreFilter) -> bool {
    match genre {
        GenreFilter::All => true,
        GenreFilter::Only(code) => show
            .genres
            .as_ref()
            .is_some_and(|genres| genres.contains(&code)),
    }
}

/// Shows satisfying both the search and the genre predicate, in input order
pub fn filter_shows<'a>(shows: &'a [ShowPreview], state: &FilterState) -> Vec<&'a ShowPreview> {
    shows
        .iter()
        .filter(|show| matches_search(show, &state.search_term) && matches_genre(show, state.genre))
        .collect()
}

/// Return a newly ordered copy of `shows`.
///
/// The sort is stable. Shows without a readable `updated` timestamp go after
/// all dated shows in both date directions.
pub fn sort_shows<'a>(
    shows: &[&'a ShowPreview],
    sort: SortMode,
    default_order: DefaultOrder,
) -> Vec<&'a ShowPreview> {
    let mut sorted = shows.to_vec();

    match sort {
        SortMode::Default => {
            if default_order == DefaultOrder::TitleAscending {
                sorted.sort_by(|a, b| compare_titles(&a.title, &b.title));
            }
        }
        SortMode::TitleAsc => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortMode::TitleDesc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        SortMode::DateAsc | SortMode::DateDesc => {
            let descending = sort == SortMode::DateDesc;
            // Parse once per show rather than once per comparison
            let mut keyed: Vec<_> = sorted.into_iter().map(|s| (s.updated_at(), s)).collect();
            keyed.sort_by(|(a, _), (b, _)| compare_dates(a.as_ref(), b.as_ref(), descending));
            sorted = keyed.into_iter().map(|(_, s)| s).collect();
        }
    }

    sorted
}

/// Filter then sort: the list that should be displayed
pub fn derive_visible<'a>(
    shows: &'a [ShowPreview],
    state: &FilterState,
    default_order: DefaultOrder,
) -> Vec<&'a ShowPreview> {
    let filtered = filter_shows(shows, state);
    sort_shows(&filtered, state.sort, default_order)
}

/// Locale-style title comparison.
///
/// Titles are compared with diacritics removed and case folded, so `Éclair`
/// sorts with the `E`s. Accents, then case, then the raw string break ties.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let base = |s: &str| -> String { s.nfd().filter(|c| !is_combining_mark(*c)).collect() };
    let (base_a, base_b) = (base(a), base(b));

    base_a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(base_b.chars().flat_map(char::to_lowercase))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| a.cmp(b))
}

fn compare_dates(
    a: Option<&DateTime<FixedOffset>>,
    b: Option<&DateTime<FixedOffset>>,
    descending: bool,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(a),
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
