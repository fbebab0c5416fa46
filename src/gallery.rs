//! Gallery state: the photo slideshow and the tab strip.
//!
//! Ports the slideshow and tab wiring from `script.js`. Both are plain
//! index machines; the host translates them into class toggles and a
//! `translateX` on the slide strip. The host also owns the auto-advance
//! timer and simply calls [`Slideshow::next`] on each tick.

/// Auto-advance period of the slideshow, in ms.
pub const AUTO_ADVANCE_MS: u32 = 6000;

/// Cyclic slideshow position. A slideshow with zero slides is inert.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Slideshow {
    current: usize,
    len: usize,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one slide, wrapping at the end.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Go back one slide, wrapping at the start.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// `translateX` percentage for the slide strip.
    pub fn offset_percent(&self) -> i32 {
        -(self.current as i32) * 100
    }
}

/// Which gallery tab is active. Exactly one tab is active at all times.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabBar {
    active: usize,
    len: usize,
}

impl TabBar {
    /// Tab 0 starts active, matching the markup's initial `active` class.
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    /// Activate a tab. Out-of-range indices are ignored, like a click
    /// on a button with no matching panel.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slideshow_wraps_forward() {
        let mut show = Slideshow::new(3);
        show.next();
        show.next();
        assert_eq!(show.current(), 2);
        show.next();
        assert_eq!(show.current(), 0);
    }

    #[test]
    fn test_slideshow_wraps_backward() {
        let mut show = Slideshow::new(3);
        show.prev();
        assert_eq!(show.current(), 2);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        let mut show = Slideshow::new(5);
        for start in 0..5 {
            while show.current() != start {
                show.next();
            }
            show.next();
            show.prev();
            assert_eq!(show.current(), start);
        }
    }

    #[test]
    fn test_offset_percent() {
        let mut show = Slideshow::new(4);
        assert_eq!(show.offset_percent(), 0);
        show.next();
        assert_eq!(show.offset_percent(), -100);
        show.next();
        assert_eq!(show.offset_percent(), -200);
    }

    #[test]
    fn test_empty_slideshow_is_inert() {
        let mut show = Slideshow::new(0);
        show.next();
        show.prev();
        assert_eq!(show.current(), 0);
        assert_eq!(show.offset_percent(), 0);
    }

    #[test]
    fn test_tab_selection_is_exclusive() {
        let mut tabs = TabBar::new(3);
        assert!(tabs.is_active(0));
        tabs.select(2);
        assert!(tabs.is_active(2));
        assert!(!tabs.is_active(0));
        assert_eq!((0..3).filter(|&i| tabs.is_active(i)).count(), 1);
    }

    #[test]
    fn test_tab_out_of_range_ignored() {
        let mut tabs = TabBar::new(2);
        tabs.select(1);
        tabs.select(5);
        assert!(tabs.is_active(1));
    }
}
