// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Terminal rendering of the browse view.
//!
//! State messages (loading, error, empty) are shared; how the cards
//! themselves are laid out is delegated to a [`CardLayout`].

use std::io::{self, Write};
use std::str::FromStr;

use colored::Colorize;

use crate::card::{BrowseView, ShowCard};
use crate::error::InputError;
use crate::filter::{FilterState, SortMode};
use crate::genre::all_genres;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No shows available.";
pub const NO_MATCHES_MESSAGE: &str = "No shows match the current search and genre filter.";

/// Strategy for writing a list of cards
pub trait CardLayout {
    fn render_cards(&self, cards: &[ShowCard], out: &mut dyn Write) -> io::Result<()>;
}

/// One detailed block per show
#[derive(Debug, Default, Clone, Copy)]
pub struct ListLayout;

impl CardLayout for ListLayout {
    fn render_cards(&self, cards: &[ShowCard], out: &mut dyn Write) -> io::Result<()> {
        for card in cards {
            writeln!(out, "{}", card.title.bold())?;
            writeln!(out, "  {} {}", "More Info:".dimmed(), card.id.to_string().cyan())?;
            if !card.image.is_empty() {
                writeln!(out, "  {} {}", "Image:".dimmed(), card.image)?;
            }
            writeln!(out, "  {} {}", "Seasons:".dimmed(), card.seasons)?;
            writeln!(out, "  {} {}", "Genres:".dimmed(), card.genres.join(", "))?;
            writeln!(out, "  {} {}", "Last Updated:".dimmed(), card.last_updated)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Compact slides of `per_page` shows with a page indicator
#[derive(Debug, Clone, Copy)]
pub struct CarouselLayout {
    pub per_page: usize,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self { per_page: 5 }
    }
}

impl CardLayout for CarouselLayout {
    fn render_cards(&self, cards: &[ShowCard], out: &mut dyn Write) -> io::Result<()> {
        let per_page = self.per_page.max(1);
        let pages = cards.len().div_ceil(per_page);

        for (page, slide) in cards.chunks(per_page).enumerate() {
            writeln!(out, "{}", format!("Slide {}/{}", page + 1, pages).magenta())?;
            for card in slide {
                writeln!(
                    out,
                    "  [{}] {} | {} seasons | {}",
                    card.id.to_string().cyan(),
                    card.title.bold(),
                    card.seasons,
                    card.last_updated
                )?;
            }
            writeln!(out, "  {}", page_dots(page, pages))?;
        }
        Ok(())
    }
}

fn page_dots(current: usize, total: usize) -> String {
    (0..total)
        .map(|i| if i == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Selectable layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    #[default]
    List,
    Carousel,
}

impl LayoutKind {
    pub fn build(self, per_page: usize) -> Box<dyn CardLayout> {
        match self {
            Self::List => Box::new(ListLayout),
            Self::Carousel => Box::new(CarouselLayout { per_page }),
        }
    }
}

impl FromStr for LayoutKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "carousel" | "slides" => Ok(Self::Carousel),
            _ => Err(InputError::UnknownLayout(s.to_string())),
        }
    }
}

/// Write the view; error and empty states never render cards
pub fn render_view(view: &BrowseView, layout: &dyn CardLayout, out: &mut dyn Write) -> io::Result<()> {
    match view {
        BrowseView::Loading => writeln!(out, "{}", LOADING_MESSAGE.dimmed()),
        BrowseView::Error(message) => writeln!(out, "{}", format!("Error: {message}").red()),
        BrowseView::Empty => writeln!(out, "{}", EMPTY_MESSAGE.yellow()),
        BrowseView::NoMatches => writeln!(out, "{}", NO_MATCHES_MESSAGE.yellow()),
        BrowseView::Shows(cards) => layout.render_cards(cards, out),
    }
}

/// Write the current state of the sort selector, genre selector and search box
pub fn render_controls(filter: &FilterState, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{} {}   {} {}   {} {}",
        "Sort By:".bold(),
        filter.sort.label().cyan(),
        "Filter By Genre:".bold(),
        filter.genre.to_string().cyan(),
        "Search:".bold(),
        if filter.search_term.is_empty() {
            "-".dimmed()
        } else {
            filter.search_term.as_str().cyan()
        }
    )
}

/// List the options accepted by the sort and genre selectors
pub fn render_options(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", "Sort modes:".bold())?;
    for mode in SortMode::ALL {
        writeln!(out, "  {:<12} {}", mode.key(), mode.label())?;
    }
    writeln!(out, "{}", "Genres:".bold())?;
    writeln!(out, "  {:<12} All Genres", "all")?;
    for (code, name) in all_genres() {
        writeln!(out, "  {code:<12} {name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::ShowId;
    use crate::genre::GenreFilter;

    fn card(id: i64, title: &str) -> ShowCard {
        ShowCard {
            id: ShowId::Number(id),
            title: title.to_string(),
            image: format!("https://example.com/{id}.jpg"),
            seasons: 2,
            genres: vec!["History", "News"],
            last_updated: "1/1/2024".to_string(),
        }
    }

    fn render_to_string(view: &BrowseView, layout: &dyn CardLayout) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render_view(view, layout, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn error_view_prints_single_message_without_cards() {
        let output = render_to_string(
            &BrowseView::Error("connection refused".to_string()),
            &ListLayout,
        );

        assert_eq!(output.lines().count(), 1);
        assert_eq!(output.trim(), "Error: connection refused");
    }

    #[test]
    fn empty_view_is_not_an_error() {
        let output = render_to_string(&BrowseView::Empty, &ListLayout);
        assert_eq!(output.trim(), EMPTY_MESSAGE);
        assert!(!output.contains("Error"));
    }

    #[test]
    fn loading_and_no_match_messages() {
        assert_eq!(render_to_string(&BrowseView::Loading, &ListLayout).trim(), LOADING_MESSAGE);
        assert_eq!(
            render_to_string(&BrowseView::NoMatches, &ListLayout).trim(),
            NO_MATCHES_MESSAGE
        );
    }

    #[test]
    fn list_layout_shows_card_details() {
        let output = render_to_string(&BrowseView::Shows(vec![card(1, "Alpha")]), &ListLayout);

        assert!(output.contains("Alpha"));
        assert!(output.contains("Seasons: 2"));
        assert!(output.contains("Genres: History, News"));
        assert!(output.contains("Last Updated: 1/1/2024"));
        assert!(output.contains("https://example.com/1.jpg"));
    }

    #[test]
    fn carousel_layout_pages_cards() {
        let cards: Vec<_> = (1..=5).map(|i| card(i, &format!("Show {i}"))).collect();
        let output = render_to_string(&BrowseView::Shows(cards), &CarouselLayout { per_page: 2 });

        assert!(output.contains("Slide 1/3"));
        assert!(output.contains("Slide 3/3"));
        assert!(output.contains("Show 5"));
        assert!(output.contains("● ○ ○"));
        assert!(output.contains("○ ○ ●"));
    }

    #[test]
    fn carousel_treats_zero_per_page_as_one() {
        let cards = vec![card(1, "Alpha"), card(2, "Beta")];
        let output = render_to_string(&BrowseView::Shows(cards), &CarouselLayout { per_page: 0 });
        assert!(output.contains("Slide 2/2"));
    }

    #[test]
    fn layout_kind_parses_and_builds() {
        assert_eq!("list".parse::<LayoutKind>().unwrap(), LayoutKind::List);
        assert_eq!("Carousel".parse::<LayoutKind>().unwrap(), LayoutKind::Carousel);
        assert!("grid".parse::<LayoutKind>().is_err());

        let output = render_to_string(
            &BrowseView::Shows(vec![card(1, "Alpha")]),
            LayoutKind::Carousel.build(3).as_ref(),
        );
        assert!(output.contains("Slide 1/1"));
    }

    #[test]
    fn controls_reflect_filter_state() {
        colored::control::set_override(false);
        let filter = FilterState::new()
            .with_search_term("crime")
            .with_genre(GenreFilter::Only(2))
            .with_sort(SortMode::DateDesc);

        let mut buf = Vec::new();
        render_controls(&filter, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("Sort By: Newest First"));
        assert!(output.contains("Filter By Genre: Investigative Journalism"));
        assert!(output.contains("Search: crime"));
    }

    #[test]
    fn options_list_every_sort_mode_and_genre() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render_options(&mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        for mode in SortMode::ALL {
            assert!(output.contains(mode.key()));
        }
        for (_, name) in all_genres() {
            assert!(output.contains(name));
        }
    }
}
