use crate::router::Page;
use crate::tui::app::{App, EssaysView, HitAreas};
use crate::tui::colors;
use crate::tui::essay_list;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let search_open = app.essays.as_ref().is_some_and(|v| v.control.is_open());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                  // Page tabs
            Constraint::Length(if search_open { 3 } else { 0 }),    // Search bar
            Constraint::Min(3),                                     // Page content
            Constraint::Length(1),                                  // Status bar
        ])
        .split(area);

    let mut hits = HitAreas::default();
    draw_tab_strip(frame, app, chunks[0], &mut hits);

    match app.essays.as_mut() {
        Some(view) => {
            if search_open {
                draw_search_bar(frame, view, chunks[1]);
                hits.search_bar = chunks[1];
            }
            draw_essays(frame, view, chunks[2]);
            draw_essay_status(frame, view, &app.status_message, chunks[3], &mut hits);

            if search_open {
                // Border (1) + search icon " \u{1F50D} " (approx 4 display cols)
                let cursor_x = chunks[1].x + 1 + 4 + view.control.input.display_column() as u16;
                frame.set_cursor_position(Position::new(cursor_x, chunks[1].y + 1));
            }
        }
        None => {
            draw_static_page(frame, app.router.current(), app.entries.len(), chunks[2]);
            draw_status_bar(frame, &app.status_message, chunks[3]);
        }
    }

    app.hit_areas = hits;
}

fn draw_tab_strip(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitAreas) {
    let brand = " \u{270E} essays.site ";
    let current = app.router.current();

    let mut spans = vec![Span::styled(
        brand,
        Style::default()
            .fg(colors::accent_for_page(Page::Home))
            .bg(colors::BAR_BG)
            .add_modifier(Modifier::BOLD),
    )];
    let mut x = area.x + brand.chars().count() as u16;
    hits.brand = Rect::new(area.x, area.y, x - area.x, 1);

    for (i, page) in Page::ALL.iter().enumerate() {
        let label = format!(" {}:{} ", i + 1, page.title());
        let style = if *page == current {
            Style::default()
                .fg(Color::Black)
                .bg(colors::accent_for_page(*page))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(colors::BAR_BG)
        };
        let width = label.len() as u16;
        hits.tabs.push((Rect::new(x, area.y, width, 1), *page));
        x += width;
        spans.push(Span::styled(label, style));
    }

    // Fill rest with background
    let remaining = (area.x + area.width).saturating_sub(x);
    if remaining > 0 {
        spans.push(Span::styled(
            " ".repeat(remaining as usize),
            Style::default().bg(colors::BAR_BG),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_search_bar(frame: &mut Frame, view: &EssaysView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Search essays ");

    let search_text = format!(" \u{1F50D} {}", view.control.input.text);
    let paragraph = Paragraph::new(search_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_essays(frame: &mut Frame, view: &mut EssaysView, area: Rect) {
    let layout = essay_list::layout(&view.filter, area.width);
    let total = layout.lines.len();
    view.filter
        .viewport_mut()
        .set_layout(layout.entry_lines, total, area.height as usize);

    if view.filter.match_set().is_empty() && !view.filter.query().is_empty() {
        let empty = Paragraph::new("No essays match your search.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let offset = view.filter.viewport().offset();
    let visible: Vec<Line> = layout
        .lines
        .into_iter()
        .skip(offset)
        .take(area.height as usize)
        .collect();

    frame.render_widget(Paragraph::new(visible), area);
}

fn draw_essay_status(
    frame: &mut Frame,
    view: &EssaysView,
    message: &str,
    area: Rect,
    hits: &mut HitAreas,
) {
    if !view.control.is_open() {
        draw_status_bar(frame, message, area);
        return;
    }

    let nav = view.filter.nav_state();
    let prev = " \u{25C0} Prev ";
    let next = " Next \u{25B6} ";
    let left = format!(" {}", message);
    let hint = " Enter/\u{2193}:Next  \u{2191}:Prev  Esc:Close ";

    let used = left.chars().count() + prev.chars().count() + next.chars().count() + hint.chars().count();
    let padding = (area.width as usize).saturating_sub(used);

    let prev_x = area.x + left.chars().count() as u16;
    let next_x = prev_x + prev.chars().count() as u16;
    hits.prev_button = Rect::new(prev_x, area.y, prev.chars().count() as u16, 1);
    hits.next_button = Rect::new(next_x, area.y, next.chars().count() as u16, 1);

    let bar = Style::default().fg(Color::White).bg(colors::STATUS_BG);
    let line = Line::from(vec![
        Span::styled(left, bar),
        Span::styled(prev, colors::nav_style(nav.prev_enabled)),
        Span::styled(next, colors::nav_style(nav.next_enabled)),
        Span::styled(" ".repeat(padding), bar),
        Span::styled(hint, bar),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_static_page(frame: &mut Frame, page: Page, essay_count: usize, area: Rect) {
    let body = match page {
        Page::Home => format!(
            "Welcome.\n\nThis is a small collection of {} essays.\n\nPress 2 for essays, / to search once there.",
            essay_count
        ),
        Page::Projects => "Projects live elsewhere for now.".to_string(),
        Page::About => "Essays on software, tools and the people who build them.".to_string(),
        Page::Essays => String::new(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::accent_for_page(page)))
        .title(format!(" {} ", page.title()));

    let paragraph = Paragraph::new(body)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, message: &str, area: Rect) {
    let left_text = format!(" {}", message);
    let right_text = " 1-4:Pages  /:Search  Bksp:Back  h:Home  q:Quit ";

    // Build the status line: left-aligned text + padding + right-aligned text
    let available_width = area.width as usize;
    let left_len = left_text.chars().count();
    let right_len = right_text.len();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show left text
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(colors::STATUS_BG));

    frame.render_widget(status, area);
}
