//! Presentation state of the main page.

use super::{NavDrawer, ObserverReport, RevealLatches, Section};

/// State behind the page view once the splash screen is gone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// Which sections have played their entrance effect.
    pub reveal: RevealLatches,

    /// Mobile navigation overlay.
    pub drawer: NavDrawer,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a raw report from the observer script.
    ///
    /// Returns the report only when it newly set a latch; unknown ids and
    /// repeat reports yield `None`. A missing section is revealed at once,
    /// since nothing will ever report it intersecting.
    pub fn handle_report(&mut self, message: &str) -> Option<ObserverReport> {
        let report = ObserverReport::parse(message)?;
        self.reveal.reveal(report.section()).then_some(report)
    }

    /// Reveals every section still hidden, returning the ones it set.
    ///
    /// Used once the observer channel is gone, so no section stays invisible
    /// for the rest of the session.
    pub fn reveal_remaining(&mut self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| self.reveal.reveal(*section))
            .collect()
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.reveal.is_revealed(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_intersection_reveals() {
        let mut state = PageState::new();
        assert_eq!(
            state.handle_report("services"),
            Some(ObserverReport::Intersected(Section::Services))
        );
        assert!(state.is_revealed(Section::Services));
    }

    #[test]
    fn test_repeat_intersection_is_ignored() {
        let mut state = PageState::new();
        state.handle_report("about");
        assert_eq!(state.handle_report("about"), None);
        assert!(state.is_revealed(Section::About));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut state = PageState::new();
        assert_eq!(state.handle_report("pricing"), None);
        assert_eq!(state.reveal.revealed_count(), 0);
    }

    #[test]
    fn test_drawer_independent_of_reveals() {
        let mut state = PageState::new();
        state.drawer.toggle();
        state.handle_report("home");

        assert!(state.drawer.is_open());
        assert!(state.is_revealed(Section::Home));
    }

    #[test]
    fn test_missing_section_is_revealed() {
        let mut state = PageState::new();
        assert_eq!(
            state.handle_report("missing:gallery"),
            Some(ObserverReport::Missing(Section::Gallery))
        );
        assert!(state.is_revealed(Section::Gallery));

        // A late intersection for the same section changes nothing
        assert_eq!(state.handle_report("gallery"), None);
    }

    #[test]
    fn test_reveal_remaining_sets_only_hidden_sections() {
        let mut state = PageState::new();
        state.handle_report("home");
        state.handle_report("contact");

        let remaining = state.reveal_remaining();
        assert_eq!(remaining, [Section::About, Section::Services, Section::Gallery]);
        assert!(Section::ALL.iter().all(|s| state.is_revealed(*s)));
        assert_eq!(state.reveal.revealed_count(), 5);

        assert!(state.reveal_remaining().is_empty());
    }
}
