//! Navbar Menu Visibility

/// Collapsed/expanded state of the navbar menu. Starts collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuVisibility {
    hidden: bool,
}

impl Default for MenuVisibility {
    fn default() -> Self {
        Self { hidden: true }
    }
}

impl MenuVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.hidden = !self.hidden;
    }

    /// Collapse the menu; idempotent
    pub fn close(&mut self) {
        self.hidden = true;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
