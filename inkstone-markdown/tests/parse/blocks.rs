//! Token-to-block mapping tests.

use inkstone_markdown::model::{Block, BlockContent};
use inkstone_markdown::{parse_markdown, render_blocks, RichTextRun};

fn content(block: &Block) -> &BlockContent {
    &block.as_full().expect("parsed blocks are full").content
}

#[test]
fn heading_then_paragraph() {
    let blocks = parse_markdown("# Title\n\nSome text");
    assert_eq!(blocks.len(), 2);
    match content(&blocks[0]) {
        BlockContent::Heading1 { heading_1 } => {
            assert_eq!(heading_1.rich_text, vec![RichTextRun::plain("Title")]);
        }
        other => panic!("expected heading_1, got {other:?}"),
    }
    match content(&blocks[1]) {
        BlockContent::Paragraph { paragraph } => {
            assert_eq!(paragraph.rich_text, vec![RichTextRun::plain("Some text")]);
        }
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn empty_and_whitespace_inputs_yield_nothing() {
    assert_eq!(parse_markdown(""), vec![]);
    assert_eq!(parse_markdown("  \n \t\n"), vec![]);
}

#[test]
fn unordered_list_becomes_one_block_per_item() {
    let blocks = parse_markdown("- alpha\n- beta\n");
    assert_eq!(blocks.len(), 2);
    for (block, expected) in blocks.iter().zip(["alpha", "beta"]) {
        match content(block) {
            BlockContent::BulletedListItem { bulleted_list_item } => {
                assert_eq!(
                    bulleted_list_item.rich_text,
                    vec![RichTextRun::plain(expected)]
                );
            }
            other => panic!("expected bulleted_list_item, got {other:?}"),
        }
    }
}

#[test]
fn ordered_list_becomes_numbered_items() {
    let blocks = parse_markdown("1. one\n2. two\n");
    assert_eq!(blocks.len(), 2);
    assert!(blocks
        .iter()
        .all(|b| matches!(content(b), BlockContent::NumberedListItem { .. })));
}

#[test]
fn nested_list_items_flatten_in_document_order() {
    let blocks = parse_markdown("- outer\n  - inner\n- last\n");
    let texts: Vec<&str> = blocks
        .iter()
        .map(|b| match content(b) {
            BlockContent::BulletedListItem { bulleted_list_item } => {
                bulleted_list_item.rich_text[0].text.as_str()
            }
            other => panic!("expected bulleted_list_item, got {other:?}"),
        })
        .collect();
    assert_eq!(texts, vec!["outer", "inner", "last"]);
}

#[test]
fn blockquote_paragraphs_join_with_a_newline() {
    let blocks = parse_markdown("> first\n>\n> second\n");
    assert_eq!(blocks.len(), 1);
    match content(&blocks[0]) {
        BlockContent::Quote { quote } => {
            assert_eq!(quote.rich_text, vec![RichTextRun::plain("first\nsecond")]);
        }
        other => panic!("expected quote, got {other:?}"),
    }
}

#[test]
fn code_fence_keeps_literal_text_and_language() {
    let blocks = parse_markdown("```rust\nfn x() {}\nlet y = 2;\n```\n");
    match content(&blocks[0]) {
        BlockContent::Code { code } => {
            assert_eq!(code.language, "rust");
            assert_eq!(
                code.rich_text,
                vec![RichTextRun::plain("fn x() {}\nlet y = 2;")]
            );
            assert_eq!(code.rich_text[0].annotations, None);
        }
        other => panic!("expected code, got {other:?}"),
    }
}

#[test]
fn bare_fence_defaults_to_plain_text_language() {
    let blocks = parse_markdown("```\nanything\n```\n");
    match content(&blocks[0]) {
        BlockContent::Code { code } => assert_eq!(code.language, "plain text"),
        other => panic!("expected code, got {other:?}"),
    }
}

#[test]
fn horizontal_rule_becomes_divider() {
    let blocks = parse_markdown("above\n\n---\n\nbelow\n");
    assert_eq!(blocks.len(), 3);
    assert!(matches!(content(&blocks[1]), BlockContent::Divider { .. }));
}

#[test]
fn tables_are_dropped_silently() {
    let blocks = parse_markdown("| a | b |\n| - | - |\n| 1 | 2 |\n");
    assert_eq!(blocks, vec![]);
}

#[test]
fn inline_styling_survives_into_runs() {
    let blocks = parse_markdown("**bold** and `code`");
    match content(&blocks[0]) {
        BlockContent::Paragraph { paragraph } => {
            assert_eq!(paragraph.rich_text.len(), 3);
            assert!(paragraph.rich_text[0].styling().bold);
            assert_eq!(paragraph.rich_text[0].text, "bold");
            assert_eq!(paragraph.rich_text[1], RichTextRun::plain(" and "));
            assert!(paragraph.rich_text[2].styling().code);
            assert_eq!(paragraph.rich_text[2].text, "code");
        }
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn checkbox_syntax_stays_literal_item_text() {
    let blocks = parse_markdown("- [x] done\n");
    match content(&blocks[0]) {
        BlockContent::BulletedListItem { bulleted_list_item } => {
            assert_eq!(bulleted_list_item.rich_text[0].text, "[x] done");
        }
        other => panic!("expected bulleted_list_item, got {other:?}"),
    }
}

#[test]
fn parsed_blocks_are_ready_for_persistence() {
    // Freshly parsed blocks carry no identifiers or timestamps.
    let blocks = parse_markdown("# T\n\nbody\n");
    for block in &blocks {
        let full = block.as_full().unwrap();
        assert_eq!(full.id, None);
        assert_eq!(full.created_time, None);
        assert!(!full.has_children);
        assert!(full.children.is_empty());
    }
}

#[test]
fn rendered_output_parses_back_to_the_same_shapes() {
    let original = vec![
        Block::new(BlockContent::heading(1, vec![RichTextRun::plain("Hi")])),
        Block::new(BlockContent::paragraph(vec![RichTextRun::plain("Body")])),
        Block::new(BlockContent::divider()),
        Block::new(BlockContent::code(
            vec![RichTextRun::plain("let a = 1;")],
            "rust",
        )),
    ];
    let markdown = render_blocks(&original, false);
    let reparsed = parse_markdown(&markdown);
    assert_eq!(original, reparsed);
}
