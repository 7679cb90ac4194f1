//! Page index bookkeeping.
//!
//! The index is zero-based and always lies in `0..page_count`. Requests outside
//! that range are clamped to the nearest valid page, never wrapped.

/// A single navigation request coming from the keyboard or the scroll wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
    Previous,
    Next,
    First,
    Last,
}

impl NavStep {
    /// Map a vertical scroll delta to a step.
    ///
    /// Scrolling up (positive delta) goes back one page, scrolling down goes
    /// forward. A zero delta produces nothing.
    pub fn from_scroll(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(NavStep::Previous)
        } else if delta_y < 0.0 {
            Some(NavStep::Next)
        } else {
            None
        }
    }
}

/// Current page of an open document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigator {
    current: usize,
    page_count: usize,
}

impl PageNavigator {
    /// Start at the first page. `page_count` is expected to be at least 1;
    /// a zero count is treated as a single page so clamping stays defined.
    pub fn new(page_count: usize) -> Self {
        Self {
            current: 0,
            page_count: page_count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn last_page(&self) -> usize {
        self.page_count - 1
    }

    /// `max(0, min(requested, page_count - 1))`
    pub fn clamp(&self, requested: i64) -> usize {
        if requested <= 0 {
            0
        } else {
            usize::try_from(requested)
                .map(|index| index.min(self.last_page()))
                .unwrap_or(self.last_page())
        }
    }

    /// Page a step would land on, without moving
    pub fn target(&self, step: NavStep) -> usize {
        let current = self.current as i64;
        match step {
            NavStep::Previous => self.clamp(current - 1),
            NavStep::Next => self.clamp(current + 1),
            NavStep::First => 0,
            NavStep::Last => self.last_page(),
        }
    }

    /// Commit a new index. Out-of-range values are clamped.
    pub fn set(&mut self, index: usize) {
        self.current = index.min(self.last_page());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_handles_negative_and_oversized_requests() {
        let nav = PageNavigator::new(5);
        assert_eq!(nav.clamp(-1), 0);
        assert_eq!(nav.clamp(i64::MIN), 0);
        assert_eq!(nav.clamp(3), 3);
        assert_eq!(nav.clamp(5), 4);
        assert_eq!(nav.clamp(i64::MAX), 4);
    }

    #[test]
    fn clamp_matches_min_max_formula() {
        let nav = PageNavigator::new(7);
        for requested in -20..20i64 {
            let expected = requested.min(6).max(0) as usize;
            assert_eq!(nav.clamp(requested), expected, "requested {}", requested);
        }
    }

    #[test]
    fn steps_stay_in_bounds() {
        let mut nav = PageNavigator::new(3);
        assert_eq!(nav.target(NavStep::Previous), 0);
        nav.set(nav.target(NavStep::Last));
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.target(NavStep::Next), 2);
        assert_eq!(nav.target(NavStep::First), 0);
    }

    #[test]
    fn single_page_document_never_moves() {
        let nav = PageNavigator::new(1);
        for step in [NavStep::Previous, NavStep::Next, NavStep::First, NavStep::Last] {
            assert_eq!(nav.target(step), 0);
        }
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.last_page(), 0);
    }

    #[test]
    fn scroll_direction_maps_to_steps() {
        assert_eq!(NavStep::from_scroll(12.0), Some(NavStep::Previous));
        assert_eq!(NavStep::from_scroll(-0.5), Some(NavStep::Next));
        assert_eq!(NavStep::from_scroll(0.0), None);
    }
}
