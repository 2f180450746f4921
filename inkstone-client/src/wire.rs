//! Request and response envelopes for the workspace API.
//!
//! Block and rich-text payloads reuse the `inkstone-markdown` model types
//! directly; only the surrounding envelopes live here.

use inkstone_markdown::model::{Block, RichTextRun};
use serde::{Deserialize, Serialize};

/// One page of a paginated child listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildrenPage {
    #[serde(default)]
    pub results: Vec<Block>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AppendChildren<'a> {
    pub children: &'a [Block],
}

#[derive(Debug, Serialize)]
pub(crate) struct ParentRef<'a> {
    pub page_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatePageRequest<'a> {
    pub parent: ParentRef<'a>,
    pub title: Vec<RichTextRun>,
    pub children: &'a [Block],
}

#[derive(Debug, Serialize)]
pub(crate) struct CommentRequest<'a> {
    pub parent: ParentRef<'a>,
    pub rich_text: Vec<RichTextRun>,
}

/// Minimal shape of any "created" response; only the id matters.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedObject {
    pub id: String,
}
