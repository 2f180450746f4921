//! Block parsing (Markdown → flat block sequence)
//!
//! Lexes the Markdown with comrak and maps each top-level node to zero or
//! more blocks ready for persistence. The output is deliberately flat:
//! list nesting in the source is not reconstructed into the `children`
//! relation — every list item (and every item of a nested sub-list)
//! becomes its own top-level block, in document order. Unrecognized node
//! kinds are dropped silently so one exotic construct never aborts the
//! rest of the document.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena};

use crate::lexer;
use crate::model::{Annotations, Block, BlockContent, RichTextRun};
use crate::richtext::{coalesce_runs, collect_runs};

/// Language tag stored when a code fence has no info string.
const DEFAULT_CODE_LANGUAGE: &str = "plain text";

/// Parse a Markdown document into a flat sequence of blocks.
///
/// Empty or whitespace-only input yields an empty sequence.
pub fn parse_markdown(markdown: &str) -> Vec<Block> {
    if markdown.trim().is_empty() {
        return Vec::new();
    }

    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &lexer::options());

    let mut blocks = Vec::new();
    for node in root.children() {
        push_blocks_for_node(node, &mut blocks);
    }
    blocks
}

fn push_blocks_for_node<'a>(node: &'a AstNode<'a>, out: &mut Vec<Block>) {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Heading(heading) => {
            out.push(Block::new(BlockContent::heading(
                heading.level,
                inline_runs(node),
            )));
        }

        NodeValue::Paragraph => {
            out.push(Block::new(BlockContent::paragraph(inline_runs(node))));
        }

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            push_list_items(node, ordered, out);
        }

        NodeValue::BlockQuote => {
            out.push(quote_block(node));
        }

        NodeValue::CodeBlock(code) => {
            // The fence literal keeps its inner newlines but not the one
            // closing the fence.
            let text = code.literal.strip_suffix('\n').unwrap_or(&code.literal);
            let language = if code.info.is_empty() {
                DEFAULT_CODE_LANGUAGE.to_string()
            } else {
                code.info.clone()
            };
            // Code content is literal: one unannotated run, no inline
            // decoding.
            out.push(Block::new(BlockContent::code(
                vec![RichTextRun::plain(text)],
                language,
            )));
        }

        NodeValue::ThematicBreak => {
            out.push(Block::new(BlockContent::divider()));
        }

        // Tables, HTML blocks, footnote definitions, ...: skipped.
        _ => {}
    }
}

/// Decode the inline content of a block-level node into runs.
fn inline_runs<'a>(node: &'a AstNode<'a>) -> Vec<RichTextRun> {
    let mut runs = Vec::new();
    for child in node.children() {
        collect_runs(child, Annotations::default(), None, &mut runs);
    }
    coalesce_runs(runs)
}

/// Emit one block per list item. Nested sub-lists are flattened: their
/// items follow the parent item as further top-level blocks.
fn push_list_items<'a>(list_node: &'a AstNode<'a>, ordered: bool, out: &mut Vec<Block>) {
    for item in list_node.children() {
        let mut runs = Vec::new();
        let mut nested = Vec::new();

        for child in item.children() {
            let child_data = child.data.borrow();
            match &child_data.value {
                NodeValue::Paragraph => {
                    if !runs.is_empty() {
                        runs.push(RichTextRun::plain("\n"));
                    }
                    for inline in child.children() {
                        collect_runs(inline, Annotations::default(), None, &mut runs);
                    }
                }
                NodeValue::List(_) => nested.push(child),
                _ => {}
            }
        }

        let content = if ordered {
            BlockContent::numbered_list_item(coalesce_runs(runs))
        } else {
            BlockContent::bulleted_list_item(coalesce_runs(runs))
        };
        out.push(Block::new(content));

        for sub_list in nested {
            push_blocks_for_node(sub_list, out);
        }
    }
}

/// Collapse a blockquote into a single quote block. Paragraph sub-nodes
/// join with a newline separator; other sub-nodes are skipped.
fn quote_block<'a>(node: &'a AstNode<'a>) -> Block {
    let mut runs = Vec::new();
    for child in node.children() {
        let child_data = child.data.borrow();
        if matches!(child_data.value, NodeValue::Paragraph) {
            if !runs.is_empty() {
                runs.push(RichTextRun::plain("\n"));
            }
            for inline in child.children() {
                collect_runs(inline, Annotations::default(), None, &mut runs);
            }
        }
    }
    Block::new(BlockContent::quote(coalesce_runs(runs)))
}
