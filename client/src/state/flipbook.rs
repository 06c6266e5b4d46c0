//! Brochure flip-book navigation.
//!
//! In spread mode the cover is shown alone, inner pages in pairs, and the
//! back cover alone when the page count is even. Single mode shows one page
//! per step (narrow screens).

#[cfg(test)]
#[path = "flipbook_test.rs"]
mod flipbook_test;

use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlipBook {
    page_count: usize,
    spreads: bool,
    index: usize,
    /// Direction of the turn in progress, cleared when the animation ends.
    pub turning: Option<Direction>,
    /// Bumped on every successful turn.
    turn_id: u64,
}

/// Page ranges (0-based) of each spread.
#[must_use]
pub fn spreads(page_count: usize) -> Vec<Range<usize>> {
    if page_count == 0 {
        return Vec::new();
    }
    let mut out = vec![0..1];
    let mut start = 1;
    while start < page_count {
        // Even counts leave an odd tail after the cover, so the last view is
        // the back cover alone.
        let end = (start + 2).min(page_count);
        out.push(start..end);
        start = end;
    }
    out
}

impl FlipBook {
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self { page_count, spreads: true, index: 0, turning: None, turn_id: 0 }
    }

    fn views(&self) -> Vec<Range<usize>> {
        if self.spreads {
            spreads(self.page_count)
        } else {
            (0..self.page_count).map(|i| i..i + 1).collect()
        }
    }

    #[must_use]
    pub fn view_count(&self) -> usize {
        self.views().len()
    }

    /// 0-based page indices currently visible.
    #[must_use]
    pub fn visible_pages(&self) -> Range<usize> {
        self.views().get(self.index).cloned().unwrap_or(0..0)
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.index + 1 < self.view_count()
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    /// Advance one view. Returns the id of the new turn, `None` at the end.
    pub fn next(&mut self) -> Option<u64> {
        if !self.can_next() {
            return None;
        }
        self.index += 1;
        Some(self.start_turn(Direction::Forward))
    }

    pub fn prev(&mut self) -> Option<u64> {
        if !self.can_prev() {
            return None;
        }
        self.index -= 1;
        Some(self.start_turn(Direction::Backward))
    }

    fn start_turn(&mut self, direction: Direction) -> u64 {
        self.turn_id += 1;
        self.turning = Some(direction);
        self.turn_id
    }

    /// Jump to the view containing `page` (0-based, clamped).
    pub fn go_to_page(&mut self, page: usize) {
        let page = page.min(self.page_count.saturating_sub(1));
        if let Some(i) = self.views().iter().position(|r| r.contains(&page)) {
            self.index = i;
        }
    }

    /// Switch between spread and single-page mode, keeping the first visible page.
    pub fn set_spreads(&mut self, on: bool) {
        if self.spreads == on {
            return;
        }
        let first = self.visible_pages().start;
        self.spreads = on;
        self.go_to_page(first);
    }

    /// End the animation of turn `id`. Ignored when a later turn has started.
    pub fn finish_turn(&mut self, id: u64) {
        if id == self.turn_id {
            self.turning = None;
        }
    }

    /// Page indicator, 1-based: `"1 / 8"` or `"2-3 / 8"`.
    #[must_use]
    pub fn label(&self) -> String {
        let r = self.visible_pages();
        if r.is_empty() {
            return format!("0 / {}", self.page_count);
        }
        if r.len() == 1 {
            format!("{} / {}", r.start + 1, self.page_count)
        } else {
            format!("{}-{} / {}", r.start + 1, r.end, self.page_count)
        }
    }
}
