use std::time::{Duration, Instant};

use crate::site::{self, Crumb, Route};

pub const PAGE_TRANSITION: Duration = Duration::from_millis(400);
/// Pixels a page slides up while fading in.
pub const PAGE_SLIDE: f32 = 20.0;

/// Fade and slide-in progress of the current page.
#[derive(Debug, Clone, Copy)]
pub struct PageTransition {
    started: Instant,
    duration: Duration,
}

impl PageTransition {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            duration,
        }
    }

    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        self.progress(now)
    }

    pub fn offset(&self, now: Instant) -> f32 {
        PAGE_SLIDE * (1.0 - self.progress(now))
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}

/// Page-level UI state: current location and toggles.
pub struct AppState {
    pub location: String,
    pub path_input: String,
    pub intro_expanded: bool,
    pub transition: PageTransition,
}

impl AppState {
    pub fn new(start_path: &str) -> Self {
        Self {
            location: start_path.to_string(),
            path_input: start_path.to_string(),
            intro_expanded: false,
            transition: PageTransition::start(Instant::now(), PAGE_TRANSITION),
        }
    }

    /// Move to `path`. Returns false when already there.
    pub fn navigate(&mut self, path: &str) -> bool {
        if path == self.location {
            return false;
        }
        log::debug!("Navigating from {} to {path}", self.location);
        self.location = path.to_string();
        self.path_input = path.to_string();
        self.transition = PageTransition::start(Instant::now(), PAGE_TRANSITION);
        true
    }

    pub fn route(&self) -> Option<Route> {
        site::selected_nav(&self.location)
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        site::breadcrumbs(&self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_updates_route_and_trail() {
        let mut state = AppState::new("/");
        assert_eq!(state.route(), Some(Route::Home));

        assert!(state.navigate("/skills"));
        assert_eq!(state.route(), Some(Route::Skills));
        assert_eq!(state.breadcrumbs().len(), 2);
        assert_eq!(state.path_input, "/skills");
    }

    #[test]
    fn navigating_to_the_current_path_is_a_no_op() {
        let mut state = AppState::new("/about");
        assert!(!state.navigate("/about"));
    }

    #[test]
    fn unknown_location_has_no_route() {
        let mut state = AppState::new("/");
        assert!(state.navigate("/xyz"));
        assert_eq!(state.route(), None);
        assert_eq!(state.breadcrumbs().len(), 1);
    }

    #[test]
    fn transition_fades_in_over_its_duration() {
        let start = Instant::now();
        let transition = PageTransition::start(start, PAGE_TRANSITION);

        assert_eq!(transition.opacity(start), 0.0);
        assert_eq!(transition.offset(start), PAGE_SLIDE);
        assert!(transition.is_running(start + PAGE_TRANSITION / 2));

        let done = start + PAGE_TRANSITION;
        assert_eq!(transition.opacity(done), 1.0);
        assert_eq!(transition.offset(done), 0.0);
        assert!(!transition.is_running(done + Duration::from_secs(1)));
    }

    #[test]
    fn zero_length_transition_is_complete() {
        let now = Instant::now();
        assert_eq!(PageTransition::start(now, Duration::ZERO).progress(now), 1.0);
    }
}
