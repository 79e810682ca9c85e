use crate::config::AppConfig;
use crate::control::SearchControl;
use crate::essay::Entry;
use crate::filter::EssayFilter;
use crate::router::{Page, Router, Transition};
use crate::scroll::SmoothScroll;
use crate::tui::ui;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::prelude::*;
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// State that exists only while the essays page is mounted
pub struct EssaysView {
    pub filter: EssayFilter<SmoothScroll>,
    pub control: SearchControl,
}

impl EssaysView {
    pub fn mount(entries: Vec<Entry>, config: &AppConfig) -> Self {
        let viewport = SmoothScroll::new(config.scroll_margin, config.smooth_scroll);
        Self {
            filter: EssayFilter::new(entries, viewport),
            control: SearchControl::new(config.close_behavior, config.close_on_outside_click),
        }
    }

    pub fn unmount(mut self) {
        self.control.close(&mut self.filter);
    }
}

/// Clickable regions recorded during the last draw
#[derive(Default)]
pub struct HitAreas {
    pub brand: Rect,
    pub tabs: Vec<(Rect, Page)>,
    pub search_bar: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
}

pub struct App {
    pub entries: Vec<Entry>,
    pub config: AppConfig,
    pub router: Router,
    pub essays: Option<EssaysView>,
    pub hit_areas: HitAreas,
    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(entries: Vec<Entry>, config: AppConfig, initial: Page) -> Self {
        let status_message = format!("{} essays", entries.len());
        let mut app = Self {
            entries,
            config,
            router: Router::new(Page::Home),
            essays: None,
            hit_areas: HitAreas::default(),
            status_message,
            should_quit: false,
        };
        let transition = app.router.show(initial);
        app.apply_transition(transition);
        app
    }

    /// Open search with a query already typed, if the essays page is showing
    pub fn preset_query(&mut self, query: &str) {
        if let Some(view) = self.essays.as_mut() {
            view.control.set_query(query, &mut view.filter);
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_ms.max(1));
        let mut last_tick = Instant::now();

        loop {
            terminal
                .draw(|frame| ui::draw(frame, self))
                .map_err(|e| crate::EssayError::terminal("draw", e))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Ok(Event::Mouse(mouse)) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if let Some(view) = self.essays.as_mut() {
                    if view.filter.viewport().is_animating() {
                        view.filter.viewport_mut().tick();
                    }
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    // --- Navigation ---

    pub fn navigate(&mut self, page: Page) {
        let transition = self.router.show(page);
        self.apply_transition(transition);
    }

    fn apply_transition(&mut self, transition: Option<Transition>) {
        let Some(transition) = transition else {
            return;
        };

        if transition.left(Page::Essays) {
            if let Some(view) = self.essays.take() {
                view.unmount();
            }
        }
        if transition.entered(Page::Essays) {
            self.essays = Some(EssaysView::mount(self.entries.clone(), &self.config));
        }

        self.status_message = match transition.to {
            Page::Essays => format!("{} essays", self.entries.len()),
            page => page.title().to_string(),
        };
    }

    fn update_match_status(&mut self) {
        let Some(view) = self.essays.as_ref() else {
            return;
        };
        let filter = &view.filter;
        self.status_message = match filter.cursor() {
            Some(c) => format!("Match {} of {}", c + 1, filter.match_set().len()),
            None if filter.query().is_empty() => {
                let total = filter.entries().len();
                let visible = filter.views().iter().filter(|v| v.visible).count();
                if visible < total {
                    format!("{} of {} essays", visible, total)
                } else {
                    format!("{} essays", total)
                }
            }
            None => "No matches".to_string(),
        };
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('f') if ctrl => {
                if let Some(view) = self.essays.as_mut() {
                    view.control.open(&mut view.filter);
                }
                self.update_match_status();
                return;
            }
            _ => {}
        }

        let search_open = self.essays.as_ref().is_some_and(|v| v.control.is_open());
        if search_open {
            self.handle_search_key(key);
        } else {
            self.handle_page_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let Some(view) = self.essays.as_mut() else {
            return;
        };
        let EssaysView { filter, control } = view;

        match key.code {
            KeyCode::Esc => control.close(filter),
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
                filter.go_to_prev_match();
            }
            KeyCode::Enter | KeyCode::Down => {
                filter.go_to_next_match();
            }
            KeyCode::Up => {
                filter.go_to_prev_match();
            }
            KeyCode::Char(c) => control.insert_char(c, filter),
            KeyCode::Backspace => control.backspace(filter),
            KeyCode::Delete => control.delete(filter),
            KeyCode::Left => control.input.left(),
            KeyCode::Right => control.input.right(),
            KeyCode::Home => control.input.home(),
            KeyCode::End => control.input.end(),
            _ => {}
        }

        self.update_match_status();
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.router.current() == Page::Home {
                    self.should_quit = true;
                } else {
                    let transition = self.router.go_home();
                    self.apply_transition(transition);
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.navigate(Page::ALL[idx]);
            }
            KeyCode::Char('h') => {
                let transition = self.router.go_home();
                self.apply_transition(transition);
            }
            KeyCode::Backspace | KeyCode::Char('[') => {
                let transition = self.router.back();
                self.apply_transition(transition);
            }
            KeyCode::Char(']') => {
                let transition = self.router.forward();
                self.apply_transition(transition);
            }
            KeyCode::Char('/') => {
                if let Some(view) = self.essays.as_mut() {
                    view.control.open(&mut view.filter);
                }
                self.update_match_status();
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::PageDown => self.scroll_by(10),
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        if let Some(view) = self.essays.as_mut() {
            view.filter.viewport_mut().scroll_by(delta);
        }
    }

    // --- Mouse handling ---

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(pos),
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            MouseEventKind::ScrollDown => self.scroll_by(3),
            _ => {}
        }
    }

    fn handle_click(&mut self, pos: Position) {
        if let Some(view) = self.essays.as_mut() {
            let EssaysView { filter, control } = view;
            if control.is_open() {
                if self.hit_areas.prev_button.contains(pos) {
                    filter.go_to_prev_match();
                    self.update_match_status();
                    return;
                }
                if self.hit_areas.next_button.contains(pos) {
                    filter.go_to_next_match();
                    self.update_match_status();
                    return;
                }
            }
            if control.pointer_down(self.hit_areas.search_bar.contains(pos), filter) {
                self.update_match_status();
            }
        }

        if self.hit_areas.brand.contains(pos) {
            let transition = self.router.go_home();
            self.apply_transition(transition);
            return;
        }
        let tab = self
            .hit_areas
            .tabs
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, page)| *page);
        if let Some(page) = tab {
            self.navigate(page);
        }
    }
}
