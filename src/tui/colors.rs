use crate::router::Page;
use ratatui::style::{Color, Modifier, Style};

pub const BAR_BG: Color = Color::Rgb(40, 40, 50);
pub const STATUS_BG: Color = Color::Rgb(0, 95, 135);

pub fn accent_for_page(page: Page) -> Color {
    match page {
        Page::Home => Color::LightBlue,
        Page::Essays => Color::Yellow,
        Page::Projects => Color::Green,
        Page::About => Color::Magenta,
    }
}

/// Highlight marker style; the current match stands out from the rest
pub fn mark_style(current: bool) -> Style {
    if current {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Black).bg(Color::Rgb(180, 150, 60))
    }
}

pub fn title_style(current: bool) -> Style {
    let style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if current {
        style.fg(Color::Yellow)
    } else {
        style
    }
}

pub fn date_style() -> Style {
    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
}

pub fn nav_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White).bg(STATUS_BG).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(STATUS_BG).add_modifier(Modifier::DIM)
    }
}
