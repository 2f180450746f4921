//! Block rendering (block tree → Markdown)
//!
//! Walks root-level blocks in document order, depth-first pre-order: a
//! block's own content first, then its children, then the next sibling.
//! The layout rules per type are load-bearing — newline counts and marker
//! syntax are what round-trips through the block parser, so they must not
//! drift.
//!
//! Rendering never fails. Partial blocks and unrecognized content degrade
//! to empty output so restricted visibility somewhere in a tree cannot
//! abort rendering of its siblings. The frontmatter renderers in
//! [`frontmatter`] are the deliberate exception: metadata headers require
//! complete store data and raise [`crate::TranscodeError::PartialData`]
//! instead of fabricating fields.

pub mod frontmatter;

use crate::model::{Block, BlockContent, FullBlock, Icon};
use crate::richtext::encode_rich_text;

/// Render a sequence of root-level blocks to Markdown.
///
/// With `with_ids` set, every block whose rendering is non-empty and that
/// carries a store identifier is prefixed with an identifier comment line;
/// the flag propagates to all child renders. Blocks with empty renderings
/// never receive a comment, so no dangling identifier lines appear.
pub fn render_blocks(blocks: &[Block], with_ids: bool) -> String {
    blocks
        .iter()
        .map(|block| render_block(block, with_ids))
        .collect()
}

fn render_block(block: &Block, with_ids: bool) -> String {
    let full = match block {
        Block::Full(full) => full,
        Block::Partial(_) => return String::new(),
    };

    let body = render_content(full, with_ids);
    if with_ids && !body.is_empty() {
        if let Some(id) = &full.id {
            return format!("<!-- block_id: {id} -->\n{body}");
        }
    }
    body
}

fn render_content(block: &FullBlock, with_ids: bool) -> String {
    match &block.content {
        BlockContent::Paragraph { paragraph } => {
            let content = encode_rich_text(&paragraph.rich_text);
            if content.is_empty() {
                // An empty paragraph still holds a blank line open.
                "\n".to_string()
            } else {
                format!("{content}\n\n")
            }
        }

        BlockContent::Heading1 { heading_1 } => {
            format!("# {}\n\n", encode_rich_text(&heading_1.rich_text))
        }

        BlockContent::Heading2 { heading_2 } => {
            format!("## {}\n\n", encode_rich_text(&heading_2.rich_text))
        }

        BlockContent::Heading3 { heading_3 } => {
            format!("### {}\n\n", encode_rich_text(&heading_3.rich_text))
        }

        BlockContent::BulletedListItem { bulleted_list_item } => {
            let content = encode_rich_text(&bulleted_list_item.rich_text);
            render_list_entry(format!("- {content}"), block, with_ids)
        }

        BlockContent::NumberedListItem { numbered_list_item } => {
            let content = encode_rich_text(&numbered_list_item.rich_text);
            // The ordinal is always literal `1.`; Markdown renderers
            // renumber on display.
            render_list_entry(format!("1. {content}"), block, with_ids)
        }

        BlockContent::ToDo { to_do } => {
            let mark = if to_do.checked { 'x' } else { ' ' };
            let content = encode_rich_text(&to_do.rich_text);
            render_list_entry(format!("- [{mark}] {content}"), block, with_ids)
        }

        BlockContent::Toggle { toggle } => {
            let summary = encode_rich_text(&toggle.rich_text);
            let children = render_blocks(&block.children, with_ids);
            format!("<details>\n<summary>{summary}</summary>\n{children}</details>\n\n")
        }

        BlockContent::Code { code } => {
            let content = encode_rich_text(&code.rich_text);
            format!("```{}\n{content}\n```\n\n", code.language)
        }

        BlockContent::Quote { quote } => {
            let content = encode_rich_text(&quote.rich_text);
            let mut out = format!("> {content}");
            if !block.children.is_empty() {
                out.push('\n');
                out.push_str(&render_blocks(&block.children, with_ids));
            }
            out.push_str("\n\n");
            out
        }

        BlockContent::Divider { .. } => "---\n\n".to_string(),

        BlockContent::Callout { callout } => {
            let emoji = match &callout.icon {
                Some(Icon::Emoji { emoji }) => emoji.as_str(),
                _ => "",
            };
            let content = encode_rich_text(&callout.rich_text);
            let mut out = format!("> {emoji} {content}");
            if !block.children.is_empty() {
                out.push('\n');
                out.push_str(&render_blocks(&block.children, with_ids));
            }
            out.push_str("\n\n");
            out
        }

        BlockContent::Image { image } => {
            let caption = encode_rich_text(&image.caption);
            format!("![{caption}]({})\n\n", image.source.url())
        }

        // Unrecognized types render their children, if any, and otherwise
        // disappear.
        BlockContent::Unsupported => {
            if block.children.is_empty() {
                String::new()
            } else {
                render_blocks(&block.children, with_ids)
            }
        }
    }
}

/// Shared layout for the three list-entry shapes: the entry line, children
/// (flat, no indent) on the following lines, one trailing newline.
fn render_list_entry(line: String, block: &FullBlock, with_ids: bool) -> String {
    let mut out = line;
    if !block.children.is_empty() {
        out.push('\n');
        out.push_str(&render_blocks(&block.children, with_ids));
    }
    out.push('\n');
    out
}
