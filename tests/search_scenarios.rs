use essay_search::highlight::{clear_highlights, fold_case, plain_text};
use essay_search::{Entry, EssayFilter, Fragment, SmoothScroll, Viewport};

struct NoScroll;

impl Viewport for NoScroll {
    fn scroll_to_entry(&mut self, _index: usize) {}
    fn scroll_to_top(&mut self) {}
}

fn essays() -> Vec<Entry> {
    vec![
        Entry::new("Greeting", "Hello World", "1 Jan 2024"),
        Entry::new("Farewell", "Goodbye", "2 Jan 2024"),
    ]
}

fn larger() -> Vec<Entry> {
    vec![
        Entry::new("Tools", "On tools and the hands that hold them.", "3 Mar 2023"),
        Entry::new("Regex", "Patterns like a.b*c look scary (but are not).", "9 Sep 2023"),
        Entry::new("Notes", "Notes on notes: NOTES, notes, nOtEs.", "12 Dec 2023"),
        Entry::new("Empty", "", "1 Jan 2024"),
        Entry::new("Unicode", "Café culture and naïve résumés.", "2 Feb 2024"),
    ]
}

#[test]
fn matching_entry_is_highlighted_and_others_hidden() {
    let mut filter = EssayFilter::new(essays(), NoScroll);
    filter.apply_filter("hello");

    assert_eq!(filter.match_set(), &[0]);
    assert_eq!(filter.cursor_position(), 0);
    assert!(!filter.views()[1].visible);
    assert_eq!(filter.views()[0].fragments[0], Fragment::Mark("Hello".into()));
}

#[test]
fn empty_query_matches_everything_in_order() {
    let mut filter = EssayFilter::new(essays(), NoScroll);
    filter.apply_filter("");

    assert_eq!(filter.match_set(), &[0, 1]);
    assert_eq!(filter.cursor_position(), -1);
    assert!(filter.views().iter().all(|v| v.visible && !v.has_highlights()));
}

#[test]
fn date_matches_navigate_without_wrapping() {
    let mut filter = EssayFilter::new(essays(), NoScroll);
    filter.apply_filter("2024");
    assert_eq!(filter.match_set().len(), 2);

    assert!(filter.go_to_next_match());
    assert_eq!(filter.cursor_position(), 1);
    assert!(!filter.go_to_next_match());
    assert_eq!(filter.cursor_position(), 1);
}

#[test]
fn match_set_is_the_case_insensitive_subset_in_order() {
    let entries = larger();
    let mut filter = EssayFilter::new(entries.clone(), NoScroll);

    for query in ["notes", "NOTES", "2023", "a.b*c", "(but", "café", "zzz", "o", " t "] {
        filter.apply_filter(query);
        let q = fold_case(query.trim());
        let expected: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                q.is_empty()
                    || fold_case(&e.text).contains(&q)
                    || fold_case(&e.date_label).contains(&q)
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(filter.match_set(), expected.as_slice(), "query {:?}", query);

        let expected_cursor = if !q.is_empty() && !expected.is_empty() { 0 } else { -1 };
        assert_eq!(filter.cursor_position(), expected_cursor, "query {:?}", query);

        // Every text match is visibly marked
        for &idx in filter.match_set() {
            if !q.is_empty() && fold_case(&entries[idx].text).contains(&q) {
                assert!(filter.views()[idx].has_highlights(), "query {:?} entry {}", query, idx);
            }
        }
    }
}

#[test]
fn special_characters_are_not_patterns() {
    let mut filter = EssayFilter::new(
        vec![
            Entry::new("x", "axbyyc", "1 Jan 2024"),
            Entry::new("y", "a.b*c", "1 Jan 2024"),
        ],
        NoScroll,
    );
    filter.apply_filter("a.b*c");
    assert_eq!(filter.match_set(), &[1]);
    assert!(!filter.views()[0].visible);
}

#[test]
fn reset_restores_text_byte_for_byte() {
    let entries = larger();
    let mut filter = EssayFilter::new(entries.clone(), NoScroll);

    for query in ["notes", "o", "", "a.b*c", "é", "2024", "n"] {
        filter.apply_filter(query);
        filter.go_to_next_match();
    }
    filter.reset_filter();

    assert_eq!(filter.cursor(), None);
    for (view, entry) in filter.views().iter().zip(&entries) {
        assert!(view.visible);
        assert!(!view.has_highlights());
        assert_eq!(plain_text(&view.fragments), entry.text);
    }
}

#[test]
fn highlight_removal_twice_equals_once() {
    let mut filter = EssayFilter::new(larger(), NoScroll);
    filter.apply_filter("notes");

    let mut once = filter.views()[2].fragments.clone();
    clear_highlights(&mut once);
    let mut twice = once.clone();
    clear_highlights(&mut twice);
    assert_eq!(once, twice);
    assert_eq!(plain_text(&once), "Notes on notes: NOTES, notes, nOtEs.");
}

#[test]
fn cursor_never_leaves_bounds() {
    let mut filter = EssayFilter::new(larger(), NoScroll);
    filter.apply_filter("e");
    let len = filter.match_set().len() as isize;

    for _ in 0..10 {
        filter.go_to_next_match();
        assert!((-1..len).contains(&filter.cursor_position()));
    }
    assert_eq!(filter.cursor_position(), len - 1);
    for _ in 0..10 {
        filter.go_to_prev_match();
        assert!((-1..len).contains(&filter.cursor_position()));
    }
    assert_eq!(filter.cursor_position(), 0);
}

#[test]
fn instant_viewport_follows_matches() {
    let mut filter = EssayFilter::new(essays(), SmoothScroll::new(1, false));
    filter.viewport_mut().set_layout(vec![0, 30], 60, 10);

    filter.apply_filter("2024");
    filter.go_to_next_match();
    filter.viewport_mut().tick();
    assert_eq!(filter.viewport().offset(), 29);

    filter.apply_filter("");
    filter.viewport_mut().set_layout(vec![0, 30], 60, 10);
    assert_eq!(filter.viewport().offset(), 0);
}

#[test]
fn instant_viewport_uses_the_filtered_layout() {
    let mut filter = EssayFilter::new(
        vec![
            Entry::new("Alpha", "alpha", "1 Jan 2024"),
            Entry::new("Beta", "beta", "2 Jan 2024"),
            Entry::new("Gamma", "gamma", "3 Jan 2024"),
        ],
        SmoothScroll::new(2, false),
    );
    filter.viewport_mut().set_layout(vec![0, 20, 40], 60, 10);

    filter.apply_filter("gamma");
    // The host re-measures after filtering: only the third essay remains
    filter.viewport_mut().set_layout(vec![0, 0, 0], 20, 10);
    assert_eq!(filter.viewport().offset(), 0);
    assert!(!filter.viewport().is_animating());
}
