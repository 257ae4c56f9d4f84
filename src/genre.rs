//! Static lookup from the catalog's integer genre codes to display names.

use std::fmt;

use crate::error::InputError;

/// Genre codes used by the catalog API, in display order
static GENRES: [(u32, &str); 9] = [
    (1, "Personal Growth"),
    (2, "Investigative Journalism"),
    (3, "History"),
    (4, "Comedy"),
    (5, "Entertainment"),
    (6, "Business"),
    (7, "Fiction"),
    (8, "News"),
    (9, "Kids and Family"),
];

/// Look up the display name for a genre code
pub fn genre_name(code: u32) -> Option<&'static str> {
    GENRES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// All known genres as `(code, name)` pairs
pub fn all_genres() -> &'static [(u32, &'static str)] {
    &GENRES
}

/// Resolve a sequence of genre codes to names, omitting unknown codes
pub fn resolve_genre_names(codes: &[u32]) -> Vec<&'static str> {
    codes.iter().filter_map(|code| genre_name(*code)).collect()
}

/// Genre selection for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreFilter {
    /// No genre filtering
    #[default]
    All,
    /// Only shows tagged with this code
    Only(u32),
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All Genres"),
            Self::Only(code) => match genre_name(*code) {
                Some(name) => write!(f, "{name}"),
                None => write!(f, "Genre {code}"),
            },
        }
    }
}

/// Parse user input into a genre filter.
///
/// Accepts `all`/`none`, a known numeric code, or a genre name
/// (case-insensitive).
pub fn parse_genre_filter(input: &str) -> Result<GenreFilter, InputError> {
    let trimmed = input.trim();

    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("all")
        || trimmed.eq_ignore_ascii_case("none")
    {
        return Ok(GenreFilter::All);
    }

    if let Ok(code) = trimmed.parse::<u32>() {
        return genre_name(code)
            .map(|_| GenreFilter::Only(code))
            .ok_or_else(|| InputError::UnknownGenre(trimmed.to_string()));
    }

    GENRES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(trimmed))
        .map(|(code, _)| GenreFilter::Only(*code))
        .ok_or_else(|| InputError::UnknownGenre(trimmed.to_string()))
}
