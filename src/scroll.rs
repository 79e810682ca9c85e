//! Smooth-scrolling container for the essay list
//!
//! Scroll requests name an entry, not a line: the filter asks to scroll
//! before the host has laid out the new visibility, so the target is resolved
//! against whatever layout is current when the animation ticks. A new request
//! replaces the target of one still in flight.

use crate::filter::Viewport;

/// Where the container is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Entry(usize),
}

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// First visible line
    offset: usize,
    target: Option<ScrollTarget>,
    /// First line of each entry; hidden entries share the line of the next visible one
    entry_lines: Vec<usize>,
    content_height: usize,
    viewport_height: usize,
    margin: usize,
    smooth: bool,
}

impl SmoothScroll {
    pub fn new(margin: usize, smooth: bool) -> Self {
        Self {
            offset: 0,
            target: None,
            entry_lines: Vec::new(),
            content_height: 0,
            viewport_height: 0,
            margin,
            smooth,
        }
    }

    /// Update the line layout after the host has measured the list
    pub fn set_layout(&mut self, entry_lines: Vec<usize>, content_height: usize, viewport_height: usize) {
        self.entry_lines = entry_lines;
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
        if !self.smooth {
            self.settle();
        }
    }

    /// Advance the animation one frame. Returns true while still moving.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let goal = self.resolve(target);

        if !self.smooth || self.offset == goal {
            self.offset = goal;
            self.target = None;
            return false;
        }

        let distance = goal.abs_diff(self.offset);
        let step = (distance / 2).max(1);
        if goal > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }

        if self.offset == goal {
            self.target = None;
        }
        true
    }

    /// Jump straight to the current target
    fn settle(&mut self) {
        if let Some(target) = self.target.take() {
            self.offset = self.resolve(target);
        }
    }

    /// Manual scroll by `delta` lines, cancelling any animation
    pub fn scroll_by(&mut self, delta: isize) {
        self.target = None;
        let next = self.offset.saturating_add_signed(delta);
        self.offset = next.min(self.max_offset());
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Resolved on the next `set_layout` or `tick`, in instant mode too
    fn request(&mut self, target: ScrollTarget) {
        self.target = Some(target);
    }

    fn resolve(&self, target: ScrollTarget) -> usize {
        let line = match target {
            ScrollTarget::Top => 0,
            ScrollTarget::Entry(index) => self
                .entry_lines
                .get(index)
                .copied()
                .unwrap_or(0)
                .saturating_sub(self.margin),
        };
        line.min(self.max_offset())
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }
}

impl Viewport for SmoothScroll {
    fn scroll_to_entry(&mut self, index: usize) {
        self.request(ScrollTarget::Entry(index));
    }

    fn scroll_to_top(&mut self) {
        self.request(ScrollTarget::Top);
    }
}
