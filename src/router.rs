//! Hash-style page routing
//!
//! Pages are addressed by a location hash (`#essays`). Unknown or empty
//! hashes land on the home page. History behaves like browser hash changes:
//! showing a page pushes it, back/forward walk the stack.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Essays,
    Projects,
    About,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Essays, Page::Projects, Page::About];

    /// Resolve a location hash, with or without the leading `#`
    pub fn from_hash(hash: &str) -> Page {
        let id = hash.trim().trim_start_matches('#');
        Page::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .unwrap_or(Page::Home)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Essays => "essays",
            Page::Projects => "projects",
            Page::About => "about",
        }
    }

    pub fn hash(&self) -> String {
        match self {
            Page::Home => String::new(),
            other => format!("#{}", other.id()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Essays => "Essays",
            Page::Projects => "Projects",
            Page::About => "About",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A page change, reported so the host can mount or tear down page state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Page,
    pub to: Page,
}

impl Transition {
    pub fn entered(&self, page: Page) -> bool {
        self.from != page && self.to == page
    }

    pub fn left(&self, page: Page) -> bool {
        self.from == page && self.to != page
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Page>,
    position: usize,
}

impl Router {
    pub fn new(initial: Page) -> Self {
        Self {
            history: vec![initial],
            position: 0,
        }
    }

    pub fn from_hash(hash: &str) -> Self {
        Self::new(Page::from_hash(hash))
    }

    pub fn current(&self) -> Page {
        self.history[self.position]
    }

    pub fn hash(&self) -> String {
        self.current().hash()
    }

    /// Navigate to `page`, dropping any forward history.
    /// Showing the current page again is not a transition.
    pub fn show(&mut self, page: Page) -> Option<Transition> {
        let from = self.current();
        if from == page {
            return None;
        }
        self.history.truncate(self.position + 1);
        self.history.push(page);
        self.position += 1;
        tracing::debug!(%from, to = %page, "navigate");
        Some(Transition { from, to: page })
    }

    /// The title acts as a home link
    pub fn go_home(&mut self) -> Option<Transition> {
        self.show(Page::Home)
    }

    pub fn back(&mut self) -> Option<Transition> {
        if self.position == 0 {
            return None;
        }
        let from = self.current();
        self.position -= 1;
        Some(Transition { from, to: self.current() }).filter(|t| t.from != t.to)
    }

    pub fn forward(&mut self) -> Option<Transition> {
        if self.position + 1 >= self.history.len() {
            return None;
        }
        let from = self.current();
        self.position += 1;
        Some(Transition { from, to: self.current() }).filter(|t| t.from != t.to)
    }

    /// Whether the searchable view is the one being shown
    pub fn essays_active(&self) -> bool {
        self.current() == Page::Essays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_hashes() {
        assert_eq!(Page::from_hash("#essays"), Page::Essays);
        assert_eq!(Page::from_hash("about"), Page::About);
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#"), Page::Home);
        assert_eq!(Page::from_hash("#calculator"), Page::Home);
        assert_eq!(Page::Essays.hash(), "#essays");
        assert_eq!(Page::Home.hash(), "");
    }

    #[test]
    fn show_reports_transitions() {
        let mut router = Router::new(Page::Home);
        let t = router.show(Page::Essays).unwrap();
        assert!(t.entered(Page::Essays));
        assert!(router.essays_active());
        assert!(router.show(Page::Essays).is_none());

        let t = router.show(Page::About).unwrap();
        assert!(t.left(Page::Essays));
        assert!(!router.essays_active());
    }

    #[test]
    fn back_and_forward_walk_history() {
        let mut router = Router::from_hash("#essays");
        router.show(Page::Projects);
        router.show(Page::About);

        assert_eq!(router.back().unwrap().to, Page::Projects);
        assert_eq!(router.back().unwrap().to, Page::Essays);
        assert!(router.back().is_none());
        assert_eq!(router.forward().unwrap().to, Page::Projects);

        // Navigating drops forward history
        router.go_home();
        assert!(router.forward().is_none());
        assert_eq!(router.hash(), "");
    }
}
