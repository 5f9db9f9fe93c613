use crate::{config::DF, domain::Route};

/// Extra data carried with a navigation, e.g. the coin name from the list so
/// the coin page can title itself before its own request finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub state: Option<NavState>,
}

/// Requests produced by views, applied by the app after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    Push(Route, Option<NavState>),
    Back,
    Forward,
}

/// Browser-style history stack.
#[derive(Debug, Clone)]
pub struct Navigator {
    entries: Vec<Location>,
    cursor: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Coins)
    }
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![Location {
                route: initial,
                state: None,
            }],
            cursor: 0,
        }
    }

    /// Start at `path`, or at the list when the path is not a known route.
    pub fn from_path(path: &str) -> Self {
        match Route::parse(path) {
            Some(route) => Self::new(route),
            None => {
                log::warn!("Unknown route '{}', starting at /", path);
                Self::default()
            }
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    pub fn route(&self) -> &Route {
        &self.current().route
    }

    pub fn state(&self) -> Option<&NavState> {
        self.current().state.as_ref()
    }

    /// Add a new entry after the current one, dropping any forward history.
    /// Pushing the current route again does nothing.
    pub fn push(&mut self, route: Route, state: Option<NavState>) {
        if *self.route() == route {
            return;
        }
        if DF.log_navigation {
            log::info!("Navigate {} -> {}", self.route(), route);
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Location { route, state });
        self.cursor = self.entries.len() - 1;
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        if DF.log_navigation {
            log::info!("Back to {}", self.route());
        }
        true
    }

    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        if DF.log_navigation {
            log::info!("Forward to {}", self.route());
        }
        true
    }

    /// Follow a location change made outside the app (browser back button,
    /// edited URL). Adjacent entries are treated as back/forward so the
    /// history keeps its shape.
    pub fn follow_external(&mut self, route: Route) {
        if *self.route() == route {
            return;
        }
        let previous = self.cursor.checked_sub(1).map(|i| &self.entries[i].route);
        let next = self.entries.get(self.cursor + 1).map(|l| &l.route);
        if previous == Some(&route) {
            self.back();
        } else if next == Some(&route) {
            self.forward();
        } else {
            self.push(route, None);
        }
    }

    pub fn apply(&mut self, request: NavRequest) {
        match request {
            NavRequest::Push(route, state) => self.push(route, state),
            NavRequest::Back => {
                self.back();
            }
            NavRequest::Forward => {
                self.forward();
            }
        }
    }
}
