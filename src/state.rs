//! Navigation state: current path and linear history.
//!
//! [`NavigationState`] is the mutable half of the runtime. It knows nothing
//! about the route table; it only records where the session has been, the way
//! a browser session backs a single-page client. The
//! [`AppRouter`](crate::router::AppRouter) global pairs it with the immutable
//! [`RouteTable`](crate::route::RouteTable).

use crate::route::normalize_segment;

/// Direction of a navigation, carried on every [`RouteChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// A new entry was pushed, or history moved toward its tip
    Forward,
    /// History moved toward its origin
    Back,
    /// The current entry was replaced in place
    Replace,
}

/// Record of one completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    /// Path before the navigation, if any navigation happened before
    pub from: Option<String>,
    /// Path after the navigation
    pub to: String,
    /// How history moved
    pub direction: NavigationDirection,
}

/// Linear navigation history with a cursor.
///
/// Paths are stored in normalized segment form. The initial entry is the
/// empty segment, meaning no route is active until the first navigation.
#[derive(Debug, Clone)]
pub struct NavigationState {
    history: Vec<String>,
    current: usize,
}

impl NavigationState {
    /// Create a fresh state with no route active.
    pub fn new() -> Self {
        Self {
            history: vec![String::new()],
            current: 0,
        }
    }

    /// The path of the current history entry.
    pub fn current_path(&self) -> &str {
        &self.history[self.current]
    }

    /// Push a new entry, discarding any forward history.
    pub fn push(&mut self, path: &str) -> RouteChangeEvent {
        let from = Some(self.current_path().to_string());
        let to = normalize_segment(path).to_string();

        self.history.truncate(self.current + 1);
        self.history.push(to.clone());
        self.current += 1;

        RouteChangeEvent {
            from,
            to,
            direction: NavigationDirection::Forward,
        }
    }

    /// Replace the current entry in place; history length is unchanged.
    pub fn replace(&mut self, path: &str) -> RouteChangeEvent {
        let from = Some(self.current_path().to_string());
        let to = normalize_segment(path).to_string();

        self.history[self.current] = to.clone();

        RouteChangeEvent {
            from,
            to,
            direction: NavigationDirection::Replace,
        }
    }

    /// Move the cursor one entry toward the origin.
    pub fn back(&mut self) -> Option<RouteChangeEvent> {
        if self.current > 0 {
            let from = Some(self.current_path().to_string());
            self.current -= 1;
            let to = self.current_path().to_string();

            Some(RouteChangeEvent {
                from,
                to,
                direction: NavigationDirection::Back,
            })
        } else {
            None
        }
    }

    /// Move the cursor one entry toward the tip.
    pub fn forward(&mut self) -> Option<RouteChangeEvent> {
        if self.current < self.history.len() - 1 {
            let from = Some(self.current_path().to_string());
            self.current += 1;
            let to = self.current_path().to_string();

            Some(RouteChangeEvent {
                from,
                to,
                direction: NavigationDirection::Forward,
            })
        } else {
            None
        }
    }

    /// Whether `back()` would move.
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Whether `forward()` would move.
    pub fn can_go_forward(&self) -> bool {
        self.current < self.history.len() - 1
    }

    /// Number of entries currently in history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
