//! Mobile navigation drawer visibility.

/// Open/closed state of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flips the drawer and returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!NavDrawer::default().is_open());
    }

    #[test]
    fn test_toggle_and_close() {
        let mut drawer = NavDrawer::default();
        assert!(drawer.toggle());
        assert!(!drawer.toggle());

        drawer.toggle();
        drawer.close();
        drawer.close();
        assert!(!drawer.is_open());
    }
}
