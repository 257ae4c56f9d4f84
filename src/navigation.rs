// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use crate::catalog::ShowId;

/// Views the browser can ask the router to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ShowDetails(ShowId),
    Favorites,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::ShowDetails(id) => format!("/showdetails/{id}"),
            Self::Favorites => "/favorites".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// External router receiving navigation requests.
///
/// Requests are fire-and-forget; the router owns history.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Result of a guarded navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Navigated(Route),
    /// The user declined to leave while audio was playing
    Cancelled,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    use std::cell::Cell;

    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        pub routes: Vec<Route>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, route: Route) {
            self.routes.push(route);
        }
    }

    /// Answers every prompt with a fixed reply and counts prompts
    #[derive(Debug)]
    pub struct FixedConfirm {
        pub answer: bool,
        pub asked: Cell<usize>,
    }

    impl FixedConfirm {
        pub fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: Cell::new(0),
            }
        }
    }

    impl Confirm for FixedConfirm {
        fn confirm(&self, _message: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(
            Route::ShowDetails(ShowId::Number(10716)).path(),
            "/showdetails/10716"
        );
        assert_eq!(
            Route::ShowDetails(ShowId::Text("abc".to_string())).to_string(),
            "/showdetails/abc"
        );
        assert_eq!(Route::Favorites.path(), "/favorites");
    }
}
