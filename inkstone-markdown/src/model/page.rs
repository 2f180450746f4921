//! Page metadata.

use serde::{Deserialize, Serialize};

use crate::model::text::RichTextRun;

/// Page metadata as returned by the store, or an access-restricted stub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRef {
    Full(Page),
    Partial(PartialPage),
}

impl PageRef {
    pub fn as_full(&self) -> Option<&Page> {
        match self {
            PageRef::Full(page) => Some(page),
            PageRef::Partial(_) => None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            PageRef::Full(page) => &page.id,
            PageRef::Partial(partial) => &partial.id,
        }
    }
}

/// A page the store returned complete metadata for. Timestamps are kept as
/// the RFC 3339 strings the store produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub created_time: String,
    pub last_edited_time: String,
    #[serde(default)]
    pub title: Vec<RichTextRun>,
}

impl Page {
    /// The plain-text title, annotations discarded.
    pub fn plain_title(&self) -> String {
        self.title.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialPage {
    pub id: String,
}
