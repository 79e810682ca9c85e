//! Search control: the open/closed search bar and its query input
//!
//! Handlers take the mounted [`EssayFilter`] explicitly; the control never
//! holds on to it. Every edit that changes the query text re-runs the filter
//! synchronously.

use crate::filter::{EssayFilter, Viewport};
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

/// What closing the search bar does to hidden entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseBehavior {
    /// Full reset: every entry visible again
    #[default]
    RestoreAll,
    /// Clear query and highlights only; hidden entries stay hidden until the
    /// next edit or reopen
    KeepHidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Closed,
    Open,
}

/// Query text with a byte cursor on a char boundary
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    pub text: String,
    pub cursor_pos: usize,
}

impl QueryInput {
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Returns true if a char was removed
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.text.remove(prev);
        self.cursor_pos = prev;
        true
    }

    /// Returns true if a char was removed
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor_pos);
        true
    }

    pub fn left(&mut self) {
        self.cursor_pos = self.prev_boundary();
    }

    pub fn right(&mut self) {
        if self.cursor_pos < self.text.len() {
            self.cursor_pos = self.text[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn end(&mut self) {
        self.cursor_pos = self.text.len();
    }

    /// Terminal columns between the start of the text and the cursor
    pub fn display_column(&self) -> usize {
        self.text[..self.cursor_pos].width()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_pos = 0;
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    state: ControlState,
    pub input: QueryInput,
    pub close_behavior: CloseBehavior,
    pub close_on_outside_click: bool,
}

impl SearchControl {
    pub fn new(close_behavior: CloseBehavior, close_on_outside_click: bool) -> Self {
        Self {
            state: ControlState::Closed,
            input: QueryInput::default(),
            close_behavior,
            close_on_outside_click,
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ControlState::Open
    }

    /// Open the bar and focus the query input
    pub fn open<V: Viewport>(&mut self, filter: &mut EssayFilter<V>) {
        if self.is_open() {
            return;
        }
        self.state = ControlState::Open;
        self.input.end();
        // Reopening brings back anything a KeepHidden close left hidden
        filter.restore_visibility();
        tracing::debug!("search opened");
    }

    /// Close the bar, clearing the query and its highlights
    pub fn close<V: Viewport>(&mut self, filter: &mut EssayFilter<V>) {
        if !self.is_open() {
            return;
        }
        self.state = ControlState::Closed;
        self.input.clear();
        match self.close_behavior {
            CloseBehavior::RestoreAll => filter.reset_filter(),
            CloseBehavior::KeepHidden => filter.dismiss(),
        }
        tracing::debug!(behavior = ?self.close_behavior, "search closed");
    }

    /// A pointer press landed somewhere; `inside` tells whether it hit the bar.
    /// Returns true if this closed the control.
    pub fn pointer_down<V: Viewport>(&mut self, inside: bool, filter: &mut EssayFilter<V>) -> bool {
        if inside || !self.close_on_outside_click || !self.is_open() {
            return false;
        }
        self.close(filter);
        true
    }

    pub fn insert_char<V: Viewport>(&mut self, c: char, filter: &mut EssayFilter<V>) {
        if !self.is_open() {
            return;
        }
        self.input.insert(c);
        filter.apply_filter(&self.input.text);
    }

    pub fn backspace<V: Viewport>(&mut self, filter: &mut EssayFilter<V>) {
        if self.is_open() && self.input.backspace() {
            filter.apply_filter(&self.input.text);
        }
    }

    pub fn delete<V: Viewport>(&mut self, filter: &mut EssayFilter<V>) {
        if self.is_open() && self.input.delete() {
            filter.apply_filter(&self.input.text);
        }
    }

    /// Replace the whole query, e.g. from a command-line argument
    pub fn set_query<V: Viewport>(&mut self, query: &str, filter: &mut EssayFilter<V>) {
        self.state = ControlState::Open;
        self.input.text = query.to_string();
        self.input.end();
        filter.apply_filter(query);
    }
}
