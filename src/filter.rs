//! Essay filter/search engine
//!
//! Owns the live query, the match set and the cursor for one mounted essays
//! view. Visibility and highlight markers are derived per entry and rendered
//! by the host; scrolling goes through the [`Viewport`] the host provides.
//!
//! The engine is built when the essays view mounts and dropped when it
//! unmounts, so none of its operations need to ask which page is showing.

use crate::essay::Entry;
use crate::highlight::{self, Fragment};

/// The scrollable container holding the essay list
pub trait Viewport {
    /// Animate so the entry at `index` sits near the top, offset by a small margin
    fn scroll_to_entry(&mut self, index: usize);

    /// Animate back to the top of the list
    fn scroll_to_top(&mut self);
}

/// Per-entry derived view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub visible: bool,
    pub fragments: Vec<Fragment>,
}

impl EntryView {
    fn plain(entry: &Entry) -> Self {
        Self {
            visible: true,
            fragments: vec![Fragment::Plain(entry.text.clone())],
        }
    }

    pub fn has_highlights(&self) -> bool {
        self.fragments.iter().any(Fragment::is_mark)
    }
}

/// Enablement of the previous/next match controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

pub struct EssayFilter<V: Viewport> {
    entries: Vec<Entry>,
    views: Vec<EntryView>,
    query: String,
    match_set: Vec<usize>,
    cursor: Option<usize>,
    nav: NavState,
    viewport: V,
}

impl<V: Viewport> EssayFilter<V> {
    pub fn new(entries: Vec<Entry>, viewport: V) -> Self {
        let views = entries.iter().map(EntryView::plain).collect();
        let match_set = (0..entries.len()).collect();
        tracing::info!(entries = entries.len(), "essay filter mounted");

        Self {
            entries,
            views,
            query: String::new(),
            match_set,
            cursor: None,
            nav: NavState::default(),
            viewport,
        }
    }

    /// Recompute visibility, highlights, match set and cursor for `query`
    pub fn apply_filter(&mut self, query: &str) {
        let query = query.trim();
        let search_lower = highlight::fold_case(query);
        self.query = query.to_string();

        self.clear_all_highlights();

        self.match_set.clear();
        for (idx, entry) in self.entries.iter().enumerate() {
            let is_match = entry.matches(&search_lower);
            self.views[idx].visible = is_match;
            if is_match {
                self.match_set.push(idx);
            }
        }

        if !query.is_empty() {
            for &idx in &self.match_set {
                let view = &mut self.views[idx];
                let text = highlight::plain_text(&view.fragments);
                view.fragments = highlight::highlight(&text, query);
            }
        }

        if !query.is_empty() && !self.match_set.is_empty() {
            self.cursor = Some(0);
            self.viewport.scroll_to_entry(self.match_set[0]);
        } else {
            self.cursor = None;
            if query.is_empty() {
                self.viewport.scroll_to_top();
            }
        }

        self.refresh_nav();

        tracing::debug!(
            query = %self.query,
            matches = self.match_set.len(),
            total = self.entries.len(),
            "filter applied"
        );
    }

    /// Move to the next match. Returns false (and changes nothing) at the end.
    pub fn go_to_next_match(&mut self) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        if cursor + 1 >= self.match_set.len() {
            return false;
        }

        self.move_cursor(cursor + 1);
        true
    }

    /// Move to the previous match. Returns false (and changes nothing) at the start.
    pub fn go_to_prev_match(&mut self) -> bool {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.move_cursor(cursor - 1);
                true
            }
            _ => false,
        }
    }

    /// Undo everything `apply_filter` may have left behind
    pub fn reset_filter(&mut self) {
        self.dismiss();
        for view in &mut self.views {
            view.visible = true;
        }
        self.match_set = (0..self.entries.len()).collect();
        tracing::debug!("filter reset");
    }

    /// Clear the query and highlights but leave entry visibility as it is.
    /// The match set is emptied; the next edit or [`restore_visibility`]
    /// brings hidden entries back.
    ///
    /// [`restore_visibility`]: EssayFilter::restore_visibility
    pub fn dismiss(&mut self) {
        self.query.clear();
        self.clear_all_highlights();
        self.match_set.clear();
        self.cursor = None;
        self.refresh_nav();
        self.viewport.scroll_to_top();
    }

    /// Show every entry again without touching the (empty) query
    pub fn restore_visibility(&mut self) {
        for view in &mut self.views {
            view.visible = true;
        }
        if self.query.is_empty() {
            self.match_set = (0..self.entries.len()).collect();
        }
    }

    fn move_cursor(&mut self, cursor: usize) {
        self.cursor = Some(cursor);
        let target = self.match_set[cursor];
        self.viewport.scroll_to_entry(target);
        self.refresh_nav();
        tracing::debug!(cursor, entry = target, "moved to match");
    }

    fn clear_all_highlights(&mut self) {
        for view in &mut self.views {
            highlight::clear_highlights(&mut view.fragments);
        }
    }

    fn refresh_nav(&mut self) {
        let last = self.match_set.len().saturating_sub(1);
        self.nav = match self.cursor {
            Some(cursor) => NavState {
                prev_enabled: cursor > 0,
                next_enabled: cursor < last,
            },
            None => NavState::default(),
        };
    }

    // --- Accessors ---

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn views(&self) -> &[EntryView] {
        &self.views
    }

    /// Indices into [`entries`](EssayFilter::entries), in document order
    pub fn match_set(&self) -> &[usize] {
        &self.match_set
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Cursor as a signed position, `-1` when there is no current match
    pub fn cursor_position(&self) -> isize {
        self.cursor.map_or(-1, |c| c as isize)
    }

    /// Entry index of the current match
    pub fn current_match(&self) -> Option<usize> {
        self.cursor.map(|c| self.match_set[c])
    }

    pub fn nav_state(&self) -> NavState {
        self.nav
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}

impl<V: Viewport> Drop for EssayFilter<V> {
    fn drop(&mut self) {
        tracing::info!("essay filter unmounted");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Scroll {
        Entry(usize),
        Top,
    }

    /// Records every scroll request
    #[derive(Default)]
    pub struct RecordingViewport {
        pub calls: Vec<Scroll>,
    }

    impl Viewport for RecordingViewport {
        fn scroll_to_entry(&mut self, index: usize) {
            self.calls.push(Scroll::Entry(index));
        }

        fn scroll_to_top(&mut self) {
            self.calls.push(Scroll::Top);
        }
    }

    fn sample() -> EssayFilter<RecordingViewport> {
        EssayFilter::new(
            vec![
                Entry::new("First", "Hello World", "1 Jan 2024"),
                Entry::new("Second", "Goodbye", "2 Jan 2024"),
            ],
            RecordingViewport::default(),
        )
    }

    fn visible(filter: &EssayFilter<RecordingViewport>) -> Vec<bool> {
        filter.views().iter().map(|v| v.visible).collect()
    }

    #[test]
    fn hello_matches_first_entry_only() {
        let mut filter = sample();
        filter.apply_filter("hello");

        assert_eq!(filter.match_set(), &[0]);
        assert_eq!(filter.cursor(), Some(0));
        assert_eq!(visible(&filter), vec![true, false]);
        assert_eq!(
            filter.views()[0].fragments,
            vec![
                Fragment::Mark("Hello".into()),
                Fragment::Plain(" World".into()),
            ]
        );
        assert_eq!(filter.viewport().calls, vec![Scroll::Entry(0)]);
        assert_eq!(filter.nav_state(), NavState::default());
    }

    #[test]
    fn empty_query_shows_everything_without_cursor() {
        let mut filter = sample();
        filter.apply_filter("");

        assert_eq!(filter.match_set(), &[0, 1]);
        assert_eq!(filter.cursor_position(), -1);
        assert_eq!(visible(&filter), vec![true, true]);
        assert!(filter.views().iter().all(|v| !v.has_highlights()));
        assert_eq!(filter.viewport().calls, vec![Scroll::Top]);
    }

    #[test]
    fn whitespace_query_is_empty() {
        let mut filter = sample();
        filter.apply_filter("   ");
        assert_eq!(filter.query(), "");
        assert_eq!(filter.match_set(), &[0, 1]);
        assert_eq!(filter.cursor(), None);
    }

    #[test]
    fn date_label_matches_and_next_stops_at_end() {
        let mut filter = sample();
        filter.apply_filter("2024");

        assert_eq!(filter.match_set(), &[0, 1]);
        assert_eq!(filter.cursor(), Some(0));
        assert_eq!(
            filter.nav_state(),
            NavState { prev_enabled: false, next_enabled: true }
        );
        // Date-only matches carry no highlight in the body
        assert!(!filter.views()[0].has_highlights());

        assert!(filter.go_to_next_match());
        assert_eq!(filter.cursor(), Some(1));
        assert_eq!(
            filter.nav_state(),
            NavState { prev_enabled: true, next_enabled: false }
        );

        assert!(!filter.go_to_next_match());
        assert_eq!(filter.cursor(), Some(1));
        assert_eq!(
            filter.viewport().calls,
            vec![Scroll::Entry(0), Scroll::Entry(1)]
        );
    }

    #[test]
    fn prev_stops_at_start() {
        let mut filter = sample();
        filter.apply_filter("jan");
        assert!(!filter.go_to_prev_match());
        assert_eq!(filter.cursor(), Some(0));

        filter.go_to_next_match();
        assert!(filter.go_to_prev_match());
        assert!(!filter.go_to_prev_match());
        assert_eq!(filter.cursor(), Some(0));
    }

    #[test]
    fn navigation_without_matches_is_a_no_op() {
        let mut filter = sample();
        filter.apply_filter("zzz");
        assert!(filter.match_set().is_empty());
        assert_eq!(filter.cursor(), None);
        assert!(!filter.go_to_next_match());
        assert!(!filter.go_to_prev_match());
        assert_eq!(filter.cursor(), None);
        assert_eq!(visible(&filter), vec![false, false]);
        // No matches and a non-empty query: no scroll at all
        assert!(filter.viewport().calls.is_empty());
    }

    #[test]
    fn navigation_with_empty_query_is_a_no_op() {
        let mut filter = sample();
        filter.apply_filter("");
        assert!(!filter.go_to_next_match());
        assert_eq!(filter.cursor(), None);
    }

    #[test]
    fn regex_metacharacters_match_literally() {
        let mut filter = EssayFilter::new(
            vec![
                Entry::new("a", "axbyyc", "3 Mar 2023"),
                Entry::new("b", "literal a.b*c here", "4 Mar 2023"),
            ],
            RecordingViewport::default(),
        );
        filter.apply_filter("a.b*c");
        assert_eq!(filter.match_set(), &[1]);
        assert_eq!(
            filter.views()[1].fragments[1],
            Fragment::Mark("a.b*c".into())
        );
    }

    #[test]
    fn matched_entries_always_carry_a_highlight() {
        let mut filter = EssayFilter::new(
            vec![
                Entry::new("Cities", "İstanbul", "5 May 2024"),
                Entry::new("Other", "Ankara", "6 May 2024"),
            ],
            RecordingViewport::default(),
        );
        filter.apply_filter("i\u{307}");
        assert_eq!(filter.match_set(), &[0]);
        assert_eq!(filter.views()[0].fragments[0], Fragment::Mark("İ".into()));
    }

    #[test]
    fn reset_restores_original_text() {
        let mut filter = sample();
        for q in ["hello", "o", "2024", "goodbye", "l"] {
            filter.apply_filter(q);
        }
        filter.reset_filter();

        assert_eq!(filter.query(), "");
        assert_eq!(filter.match_set(), &[0, 1]);
        assert_eq!(filter.cursor(), None);
        assert_eq!(visible(&filter), vec![true, true]);
        for (view, entry) in filter.views().iter().zip(filter.entries()) {
            assert_eq!(view.fragments, vec![Fragment::Plain(entry.text.clone())]);
        }
        assert_eq!(filter.viewport().calls.last(), Some(&Scroll::Top));
    }

    #[test]
    fn new_query_resets_cursor() {
        let mut filter = sample();
        filter.apply_filter("2024");
        filter.go_to_next_match();
        filter.apply_filter("jan");
        assert_eq!(filter.cursor(), Some(0));
        assert_eq!(filter.current_match(), Some(0));
    }

    #[test]
    fn dismiss_keeps_visibility() {
        let mut filter = sample();
        filter.apply_filter("hello");
        filter.dismiss();

        assert_eq!(filter.query(), "");
        assert!(filter.match_set().is_empty());
        assert_eq!(filter.cursor(), None);
        assert_eq!(visible(&filter), vec![true, false]);
        assert!(!filter.views()[0].has_highlights());

        filter.restore_visibility();
        assert_eq!(visible(&filter), vec![true, true]);
        assert_eq!(filter.match_set(), &[0, 1]);
    }

    #[test]
    fn empty_collection_is_fine() {
        let mut filter = EssayFilter::new(Vec::new(), RecordingViewport::default());
        filter.apply_filter("anything");
        assert!(filter.match_set().is_empty());
        assert!(!filter.go_to_next_match());
        filter.reset_filter();
        assert!(filter.match_set().is_empty());
    }
}
