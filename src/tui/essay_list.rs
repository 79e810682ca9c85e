use crate::filter::{EssayFilter, Viewport};
use crate::highlight::Fragment;
use crate::tui::colors;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthChar;

/// The essay list flattened into terminal lines
pub struct EssayLayout {
    pub lines: Vec<Line<'static>>,
    /// First line of each entry; hidden entries point at the next visible line
    pub entry_lines: Vec<usize>,
}

/// Lay out every visible entry at `width` columns
pub fn layout<V: Viewport>(filter: &EssayFilter<V>, width: u16) -> EssayLayout {
    let width = width.max(1) as usize;
    let current = filter.current_match();
    let mut lines = Vec::new();
    let mut entry_lines = Vec::with_capacity(filter.entries().len());

    for (idx, (entry, view)) in filter.entries().iter().zip(filter.views()).enumerate() {
        entry_lines.push(lines.len());
        if !view.visible {
            continue;
        }

        let is_current = current == Some(idx);
        let marker = if is_current { "\u{25B6} " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, colors::title_style(is_current)),
            Span::styled(entry.title.clone(), colors::title_style(is_current)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.date_label),
            colors::date_style(),
        )));
        lines.extend(wrap_fragments(&view.fragments, width, is_current));
        lines.push(Line::default());
    }

    EssayLayout { lines, entry_lines }
}

/// Hard-wrap styled fragments at `width` display columns, honouring newlines
pub fn wrap_fragments(fragments: &[Fragment], width: usize, current: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut column = 0;

    for fragment in fragments {
        let style = match fragment {
            Fragment::Plain(_) => Style::default(),
            Fragment::Mark(_) => colors::mark_style(current),
        };
        let mut run = String::new();

        for c in fragment.as_str().chars() {
            if c == '\n' {
                flush(&mut spans, &mut run, style);
                lines.push(Line::from(std::mem::take(&mut spans)));
                column = 0;
                continue;
            }

            let w = c.width().unwrap_or(0);
            if column + w > width && column > 0 {
                flush(&mut spans, &mut run, style);
                lines.push(Line::from(std::mem::take(&mut spans)));
                column = 0;
            }
            run.push(c);
            column += w;
        }
        flush(&mut spans, &mut run, style);
    }

    if !spans.is_empty() || lines.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

fn flush(spans: &mut Vec<Span<'static>>, run: &mut String, style: Style) {
    if !run.is_empty() {
        spans.push(Span::styled(std::mem::take(run), style));
    }
}
