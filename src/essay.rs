//! Essay data model
//!
//! An [`Entry`] is one searchable essay. Matching looks at the body text and
//! at the date label as it is displayed, never at the title.

use crate::error::{EssayError, Result};
use crate::highlight::fold_case;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Date format shown next to each essay, e.g. `1 Jan 2024`
pub const DATE_LABEL_FORMAT: &str = "%-d %b %Y";

/// An essay as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Essay {
    pub title: String,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    pub body: String,
}

/// One searchable unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    /// Body content used for matching
    pub text: String,
    /// Secondary matchable label (publish date as displayed)
    pub date_label: String,
}

impl Entry {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        date_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            date_label: date_label.into(),
        }
    }

    /// Case-insensitive literal containment over text and date label.
    /// `query_folded` must already have gone through [`fold_case`].
    pub fn matches(&self, query_folded: &str) -> bool {
        query_folded.is_empty()
            || fold_case(&self.text).contains(query_folded)
            || fold_case(&self.date_label).contains(query_folded)
    }
}

impl TryFrom<Essay> for Entry {
    type Error = EssayError;

    fn try_from(essay: Essay) -> Result<Self> {
        let date = NaiveDate::parse_from_str(essay.date.trim(), "%Y-%m-%d").map_err(|_| {
            EssayError::InvalidDate {
                title: essay.title.clone(),
                value: essay.date.clone(),
            }
        })?;

        Ok(Entry {
            title: essay.title,
            text: essay.body,
            date_label: format_date_label(date),
        })
    }
}

/// Format a publish date the way the essay list displays it
pub fn format_date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}

/// Parse essays from a JSON array, keeping document order
pub fn parse_essays(json: &str, origin: &Path) -> Result<Vec<Entry>> {
    let essays: Vec<Essay> = serde_json::from_str(json)
        .map_err(|e| EssayError::JsonError(origin.to_path_buf(), e))?;
    essays.into_iter().map(Entry::try_from).collect()
}

/// Load essays from a JSON file
pub fn load_essays(path: &Path) -> Result<Vec<Entry>> {
    let json = fs::read_to_string(path)
        .map_err(|e| EssayError::ReadError(path.to_path_buf(), e))?;
    let entries = parse_essays(&json, path)?;
    tracing::info!(path = %path.display(), count = entries.len(), "loaded essays");
    Ok(entries)
}
