//! Metadata headers rendered ahead of page and block content.
//!
//! Frontmatter requires guaranteed-present timestamp fields, so these are
//! the only renderers that refuse partial store data instead of degrading.

use crate::error::TranscodeError;
use crate::model::{Block, PageRef};

/// Render the YAML frontmatter for a page: title plus timestamps.
///
/// Fails with [`TranscodeError::PartialData`] when the store returned only
/// a partial page object.
pub fn render_page_frontmatter(page: &PageRef) -> Result<String, TranscodeError> {
    let page = page.as_full().ok_or_else(|| {
        TranscodeError::PartialData(format!("page {} was returned without metadata", page.id()))
    })?;

    Ok(format!(
        "---\ntitle: \"{}\"\ncreatedTime: \"{}\"\nlastEditedTime: \"{}\"\n---\n\n",
        page.plain_title(),
        page.created_time,
        page.last_edited_time,
    ))
}

/// Render the YAML frontmatter for a single block: its timestamps.
///
/// Fails with [`TranscodeError::PartialData`] for partial blocks and for
/// blocks the store returned without timestamps (locally constructed
/// blocks have none).
pub fn render_block_frontmatter(block: &Block) -> Result<String, TranscodeError> {
    let full = block.as_full().ok_or_else(|| {
        TranscodeError::PartialData("block is not a full block object".to_string())
    })?;

    let (created, edited) = match (&full.created_time, &full.last_edited_time) {
        (Some(created), Some(edited)) => (created, edited),
        _ => {
            return Err(TranscodeError::PartialData(
                "block is missing timestamp fields".to_string(),
            ))
        }
    };

    Ok(format!(
        "---\ncreatedTime: \"{created}\"\nlastEditedTime: \"{edited}\"\n---\n\n"
    ))
}
