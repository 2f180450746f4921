//! Frontmatter renderer tests: the one place partial data fails loudly.

use inkstone_markdown::model::{Block, BlockContent, Page, PageRef, PartialBlock, PartialPage};
use inkstone_markdown::{
    render_block_frontmatter, render_page_frontmatter, RichTextRun, TranscodeError,
};

use crate::common::{fetched, runs};

fn full_page() -> PageRef {
    PageRef::Full(Page {
        id: "p-1".to_string(),
        created_time: "2025-05-01T09:00:00.000Z".to_string(),
        last_edited_time: "2025-05-02T10:30:00.000Z".to_string(),
        title: vec![RichTextRun::plain("Road"), RichTextRun::plain("map")],
    })
}

#[test]
fn page_frontmatter_layout() {
    let rendered = render_page_frontmatter(&full_page()).unwrap();
    assert_eq!(
        rendered,
        "---\n\
         title: \"Roadmap\"\n\
         createdTime: \"2025-05-01T09:00:00.000Z\"\n\
         lastEditedTime: \"2025-05-02T10:30:00.000Z\"\n\
         ---\n\n"
    );
}

#[test]
fn partial_page_raises_partial_data() {
    let partial = PageRef::Partial(PartialPage {
        id: "p-2".to_string(),
    });
    match render_page_frontmatter(&partial) {
        Err(TranscodeError::PartialData(_)) => {}
        other => panic!("expected PartialData error, got {other:?}"),
    }
}

#[test]
fn block_frontmatter_layout() {
    let block = fetched("b-1", BlockContent::paragraph(runs("x")), vec![]);
    let rendered = render_block_frontmatter(&block).unwrap();
    assert_eq!(
        rendered,
        "---\n\
         createdTime: \"2025-05-01T09:00:00.000Z\"\n\
         lastEditedTime: \"2025-05-02T10:30:00.000Z\"\n\
         ---\n\n"
    );
}

#[test]
fn partial_block_raises_partial_data() {
    let partial = Block::Partial(PartialBlock {
        id: "b-2".to_string(),
    });
    assert!(matches!(
        render_block_frontmatter(&partial),
        Err(TranscodeError::PartialData(_))
    ));
}

#[test]
fn constructed_block_without_timestamps_raises_partial_data() {
    let block = Block::new(BlockContent::paragraph(runs("x")));
    assert!(matches!(
        render_block_frontmatter(&block),
        Err(TranscodeError::PartialData(_))
    ));
}
