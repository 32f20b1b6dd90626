// SPDX-License-Identifier: MPL-2.0
//! Pager geometry and focus tracking.
//!
//! The pager lays cards out in a horizontal strip, each `stride` pixels apart,
//! with enough side padding that page `p` is centered exactly when the strip
//! is scrolled to `p * stride`. All offsets below rely on that layout.

use crate::ui::design_tokens::{sizing, spacing};
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// Scroll distance (fraction of a stride) under which the pager counts as
/// already resting on a page.
pub const SNAP_EPSILON_FRACTION: f32 = 0.01;

/// Horizontal distance between the left edges of two neighboring cards.
pub const PAGE_STRIDE: f32 = sizing::CARD_WIDTH + spacing::LG;

#[derive(Debug, Clone)]
pub struct PagerState {
    page_count: usize,
    stride: f32,
    /// Horizontal scroll offset of the strip in pixels.
    scroll_x: f32,
    viewport_width: f32,
    current_page: usize,
    /// Time of the last user scroll that has not been snapped yet.
    last_scroll: Option<Instant>,
}

impl PagerState {
    /// Creates a pager over `page_count` pages resting on the first page.
    ///
    /// A zero page count is bumped to one so every index computation stays valid.
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count: page_count.max(1),
            stride: PAGE_STRIDE,
            scroll_x: 0.0,
            viewport_width: 0.0,
            current_page: 0,
            last_scroll: None,
        }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_x
    }

    #[must_use]
    pub fn stride(&self) -> f32 {
        self.stride
    }

    fn last_page(&self) -> usize {
        self.page_count - 1
    }

    /// Continuous scroll position in page units, `0.0` being the first page.
    #[must_use]
    pub fn position(&self) -> f32 {
        (self.scroll_x / self.stride).clamp(0.0, self.last_page() as f32)
    }

    /// Signed distance, in pages, between `page` and the focal point.
    ///
    /// Positive when `page` sits left of the focal point.
    #[must_use]
    pub fn page_offset(&self, page: usize) -> f32 {
        self.position() - page as f32
    }

    /// Records a scroll reported by the strip.
    ///
    /// Returns the new current page when the nearest page changed.
    pub fn on_scroll(&mut self, scroll_x: f32, now: Instant) -> Option<usize> {
        if !scroll_x.is_finite() {
            return None;
        }
        self.scroll_x = scroll_x.max(0.0);

        if !self.is_resting_on(self.nearest_page()) {
            self.last_scroll = Some(now);
        }

        self.update_current_page()
    }

    /// Records the width available to the strip.
    pub fn set_viewport_width(&mut self, width: f32) {
        if width.is_finite() && width >= 0.0 {
            self.viewport_width = width;
        }
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Padding on each side of the strip that centers the first and last card.
    #[must_use]
    pub fn side_padding(viewport_width: f32) -> f32 {
        ((viewport_width - sizing::CARD_WIDTH) / 2.0).max(0.0)
    }

    /// Whether a scroll is waiting to be snapped to a page.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.last_scroll.is_some()
    }

    /// Finishes a scroll once it has been idle for `delay`.
    ///
    /// Returns the page to snap to when the strip is not already aligned on
    /// it; the caller is expected to scroll the strip there.
    pub fn settle(&mut self, now: Instant, delay: Duration) -> Option<usize> {
        let last = self.last_scroll?;
        if now.saturating_duration_since(last) < delay {
            return None;
        }
        self.last_scroll = None;

        let target = self.nearest_page();
        if self.is_resting_on(target) {
            None
        } else {
            Some(self.go_to(target))
        }
    }

    /// Moves focus to `page` (clamped) and aligns the scroll offset on it.
    ///
    /// Returns the clamped page.
    pub fn go_to(&mut self, page: usize) -> usize {
        let page = page.min(self.last_page());
        self.scroll_x = page as f32 * self.stride;
        self.last_scroll = None;
        self.current_page = page;
        page
    }

    /// Page after the current one, if any.
    #[must_use]
    pub fn next_page(&self) -> Option<usize> {
        (self.current_page < self.last_page()).then_some(self.current_page + 1)
    }

    /// Page before the current one, if any.
    #[must_use]
    pub fn previous_page(&self) -> Option<usize> {
        self.current_page.checked_sub(1)
    }

    /// Index of the last page.
    #[must_use]
    pub fn final_page(&self) -> usize {
        self.last_page()
    }

    /// Relative scroll offset in `[0, 1]` that centers `page`.
    #[must_use]
    pub fn relative_offset_for(&self, page: usize) -> f32 {
        if self.page_count <= 1 {
            0.0
        } else {
            page.min(self.last_page()) as f32 / self.last_page() as f32
        }
    }

    /// Pages at least partially inside the viewport.
    ///
    /// Before the viewport width is known the focal page and its direct
    /// neighbors are reported.
    #[must_use]
    pub fn visible_pages(&self) -> RangeInclusive<usize> {
        let radius = if self.viewport_width > 0.0 {
            (self.viewport_width / 2.0 + sizing::CARD_WIDTH / 2.0) / self.stride
        } else {
            1.0
        };
        let position = self.position();
        let first = (position - radius).floor().max(0.0) as usize;
        let last = ((position + radius).ceil() as usize).min(self.last_page());
        first..=last
    }

    fn nearest_page(&self) -> usize {
        (self.position().round() as usize).min(self.last_page())
    }

    fn is_resting_on(&self, page: usize) -> bool {
        let target_x = page as f32 * self.stride;
        (self.scroll_x - target_x).abs() <= self.stride * SNAP_EPSILON_FRACTION
    }

    fn update_current_page(&mut self) -> Option<usize> {
        let nearest = self.nearest_page();
        if nearest == self.current_page {
            None
        } else {
            self.current_page = nearest;
            Some(nearest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const DELAY: Duration = Duration::from_millis(150);

    #[test]
    fn starts_on_first_page() {
        let pager = PagerState::new(10);
        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.page_offset(0), 0.0);
        assert!(!pager.is_settling());
    }

    #[test]
    fn zero_pages_is_bumped_to_one() {
        let pager = PagerState::new(0);
        assert_eq!(pager.page_count(), 1);
        assert_eq!(pager.relative_offset_for(3), 0.0);
    }

    #[test]
    fn page_offset_follows_scroll_position() {
        let mut pager = PagerState::new(10);
        pager.on_scroll(PAGE_STRIDE * 1.25, Instant::now());

        assert_abs_diff_eq!(pager.page_offset(1), 0.25, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pager.page_offset(2), -0.75, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pager.page_offset(0), 1.25, epsilon = F32_EPSILON);
    }

    #[test]
    fn current_page_tracks_nearest_page() {
        let mut pager = PagerState::new(10);
        let now = Instant::now();

        assert_eq!(pager.on_scroll(PAGE_STRIDE * 0.4, now), None);
        assert_eq!(pager.on_scroll(PAGE_STRIDE * 0.6, now), Some(1));
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.on_scroll(PAGE_STRIDE * 0.7, now), None);
    }

    #[test]
    fn position_is_clamped_to_page_range() {
        let mut pager = PagerState::new(10);
        pager.on_scroll(PAGE_STRIDE * 42.0, Instant::now());
        assert_eq!(pager.position(), 9.0);
        assert_eq!(pager.current_page(), 9);
    }

    #[test]
    fn non_finite_scroll_is_ignored() {
        let mut pager = PagerState::new(10);
        pager.on_scroll(PAGE_STRIDE, Instant::now());
        assert_eq!(pager.on_scroll(f32::NAN, Instant::now()), None);
        assert_eq!(pager.scroll_offset(), PAGE_STRIDE);
    }

    #[test]
    fn settle_waits_for_idle_delay() {
        let mut pager = PagerState::new(10);
        let start = Instant::now();
        pager.on_scroll(PAGE_STRIDE * 1.3, start);
        assert!(pager.is_settling());

        assert_eq!(pager.settle(start + Duration::from_millis(50), DELAY), None);
        assert!(pager.is_settling());

        assert_eq!(pager.settle(start + DELAY, DELAY), Some(1));
        assert!(!pager.is_settling());
        assert_abs_diff_eq!(pager.scroll_offset(), PAGE_STRIDE, epsilon = F32_EPSILON);
    }

    #[test]
    fn aligned_scroll_needs_no_snap() {
        let mut pager = PagerState::new(10);
        let start = Instant::now();
        pager.on_scroll(PAGE_STRIDE * 2.0, start);
        assert!(!pager.is_settling());
        assert_eq!(pager.settle(start + DELAY, DELAY), None);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn go_to_clamps_and_aligns() {
        let mut pager = PagerState::new(10);
        assert_eq!(pager.go_to(25), 9);
        assert_eq!(pager.current_page(), 9);
        assert_abs_diff_eq!(pager.scroll_offset(), 9.0 * PAGE_STRIDE, epsilon = F32_EPSILON);
        assert_eq!(pager.page_offset(9), 0.0);
    }

    #[test]
    fn neighbors_stop_at_the_ends() {
        let mut pager = PagerState::new(10);
        assert_eq!(pager.previous_page(), None);
        assert_eq!(pager.next_page(), Some(1));

        pager.go_to(9);
        assert_eq!(pager.next_page(), None);
        assert_eq!(pager.previous_page(), Some(8));
        assert_eq!(pager.final_page(), 9);
    }

    #[test]
    fn relative_offset_spans_first_to_last_page() {
        let pager = PagerState::new(10);
        assert_eq!(pager.relative_offset_for(0), 0.0);
        assert_eq!(pager.relative_offset_for(9), 1.0);
        assert_abs_diff_eq!(pager.relative_offset_for(3), 1.0 / 3.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn visible_pages_without_viewport_are_neighbors() {
        let mut pager = PagerState::new(10);
        assert_eq!(pager.visible_pages(), 0..=1);
        pager.go_to(4);
        assert_eq!(pager.visible_pages(), 3..=5);
    }

    #[test]
    fn wide_viewport_reveals_more_pages() {
        let mut pager = PagerState::new(10);
        pager.set_viewport_width(1600.0);
        pager.go_to(5);
        let visible = pager.visible_pages();
        assert!(*visible.start() <= 3);
        assert!(*visible.end() >= 7);
    }

    #[test]
    fn side_padding_centers_the_card() {
        assert_eq!(PagerState::side_padding(500.0), 100.0);
        assert_eq!(PagerState::side_padding(200.0), 0.0);
    }
}
