//! essay-search - terminal essay reader with live search
//!
//! Filters an ordered essay collection as the query is typed, marks every
//! literal occurrence of the query in matching essays, and steps through the
//! matches with a scroll-to-match container.
//!
//! # Features
//!
//! - **Live filtering**: case-insensitive substring match on body and date label
//! - **Literal highlighting**: regex metacharacters in queries are never interpreted
//! - **Match navigation**: bounded next/previous with a smooth-scrolling viewport
//! - **Page shell**: hash-routed pages with a mounted-only-when-visible essays view
//!
//! # Example
//!
//! ```
//! use essay_search::{Entry, EssayFilter, Viewport};
//!
//! struct NoScroll;
//! impl Viewport for NoScroll {
//!     fn scroll_to_entry(&mut self, _index: usize) {}
//!     fn scroll_to_top(&mut self) {}
//! }
//!
//! let entries = vec![
//!     Entry::new("Greeting", "Hello World", "1 Jan 2024"),
//!     Entry::new("Farewell", "Goodbye", "2 Jan 2024"),
//! ];
//! let mut filter = EssayFilter::new(entries, NoScroll);
//!
//! filter.apply_filter("2024");
//! assert_eq!(filter.match_set(), &[0, 1]);
//! assert!(filter.go_to_next_match());
//! assert!(!filter.go_to_next_match());
//! assert_eq!(filter.cursor(), Some(1));
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod essay;
pub mod filter;
pub mod highlight;
pub mod logging;
pub mod router;
pub mod scroll;
pub mod tui;

// Re-export main types
pub use config::AppConfig;
pub use control::{CloseBehavior, ControlState, SearchControl};
pub use error::{EssayError, Result};
pub use essay::{load_essays, Entry, Essay};
pub use filter::{EntryView, EssayFilter, NavState, Viewport};
pub use highlight::Fragment;
pub use router::{Page, Router};
pub use scroll::SmoothScroll;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
