/// Navigation labels, in display order
pub const NAV_ITEMS: [&str; 5] = ["About", "Work", "Expertise", "Thinking", "Contact"];

/// Sticky header: compact style past a scroll threshold, active nav item
/// and the mobile menu overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderState {
    threshold: f32,
    scrolled: bool,
    active: usize,
    menu_open: bool,
}

impl HeaderState {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            scrolled: false,
            active: 0,
            menu_open: false,
        }
    }

    /// Returns true when the compact state flipped
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let scrolled = scroll_y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_label(&self) -> &'static str {
        NAV_ITEMS[self.active]
    }

    /// Out-of-range indices are ignored. Selecting always closes the menu.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= NAV_ITEMS.len() {
            return false;
        }
        self.active = index;
        self.menu_open = false;
        true
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_past_threshold() {
        let mut h = HeaderState::new(100.0);
        assert!(!h.on_scroll(100.0));
        assert!(!h.is_scrolled());
        assert!(h.on_scroll(101.0));
        assert!(h.is_scrolled());
        assert!(!h.on_scroll(500.0));
        assert!(h.on_scroll(0.0));
    }

    #[test]
    fn selecting_closes_menu() {
        let mut h = HeaderState::new(100.0);
        assert!(h.toggle_menu());
        assert!(h.select(3));
        assert_eq!(h.active_label(), "Thinking");
        assert!(!h.is_menu_open());
        assert!(!h.select(9));
        assert_eq!(h.active(), 3);
    }
}
