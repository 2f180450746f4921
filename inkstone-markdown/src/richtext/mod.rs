//! Rich-text codec (annotated runs ↔ inline Markdown)
//!
//! The encoder wraps each run's text in annotation markers using one fixed
//! nesting order — code span innermost (code content must not itself be
//! scanned for emphasis markers), then strikethrough, italic, bold, and a
//! link construct outermost. Fixing the order makes encoding deterministic
//! regardless of how the flags were originally accumulated: a run that is
//! bold and italic always comes out as `***text***`.
//!
//! The decoder lexes the inline string with comrak and walks the resulting
//! tree depth-first. The set of currently active annotations is threaded
//! through the recursion as a plain value (an immutable snapshot per
//! subtree), so a flag can never leak across sibling subtrees. Every leaf
//! text node emits one run carrying the cumulative flags; link spans pass
//! their URL down to the runs they contain.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena};

use crate::lexer;
use crate::model::{Annotations, RichTextRun};

/// Encode runs as an inline Markdown string.
///
/// Runs are concatenated in order with no separator; an empty run list
/// encodes to the empty string.
pub fn encode_rich_text(runs: &[RichTextRun]) -> String {
    let mut out = String::new();
    for run in runs {
        let mut content = run.text.clone();
        let style = run.styling();
        if style.code {
            content = format!("`{content}`");
        }
        if style.strikethrough {
            content = format!("~~{content}~~");
        }
        if style.italic {
            content = format!("*{content}*");
        }
        if style.bold {
            content = format!("**{content}**");
        }
        if let Some(url) = &run.link {
            content = format!("[{content}]({url})");
        }
        out.push_str(&content);
    }
    out
}

/// Decode an inline Markdown string into annotated runs.
///
/// Empty or whitespace-only input decodes to an empty run list. Output
/// order matches left-to-right document order.
pub fn decode_rich_text(markdown: &str) -> Vec<RichTextRun> {
    if markdown.trim().is_empty() {
        return Vec::new();
    }

    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &lexer::options());

    let mut runs = Vec::new();
    for child in root.children() {
        collect_runs(child, Annotations::default(), None, &mut runs);
    }
    coalesce_runs(runs)
}

/// Walk a comrak subtree, emitting one run per leaf text node with the
/// cumulative annotation set. `active` is copied, never mutated in place.
pub(crate) fn collect_runs<'a>(
    node: &'a AstNode<'a>,
    active: Annotations,
    link: Option<&str>,
    out: &mut Vec<RichTextRun>,
) {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Text(text) => push_run(out, text, active, link),

        NodeValue::Code(code) => push_run(
            out,
            &code.literal,
            Annotations {
                code: true,
                ..active
            },
            link,
        ),

        NodeValue::Strong => {
            let active = Annotations {
                bold: true,
                ..active
            };
            for child in node.children() {
                collect_runs(child, active, link, out);
            }
        }

        NodeValue::Emph => {
            let active = Annotations {
                italic: true,
                ..active
            };
            for child in node.children() {
                collect_runs(child, active, link, out);
            }
        }

        NodeValue::Strikethrough => {
            let active = Annotations {
                strikethrough: true,
                ..active
            };
            for child in node.children() {
                collect_runs(child, active, link, out);
            }
        }

        NodeValue::Link(node_link) => {
            for child in node.children() {
                collect_runs(child, active, Some(&node_link.url), out);
            }
        }

        NodeValue::SoftBreak | NodeValue::LineBreak => push_run(out, " ", active, link),

        // Inline images carry no text content for the run model.
        NodeValue::Image(_) => {}

        // Block-level wrappers (paragraphs, headings) and anything else:
        // descend and keep collecting.
        _ => {
            for child in node.children() {
                collect_runs(child, active, link, out);
            }
        }
    }
}

fn push_run(out: &mut Vec<RichTextRun>, text: &str, active: Annotations, link: Option<&str>) {
    if text.is_empty() {
        return;
    }
    out.push(RichTextRun::styled(
        text,
        active,
        link.map(str::to_string),
    ));
}

/// Merge adjacent runs whose styling and link are identical. Soft breaks
/// and paragraph joins would otherwise fragment text the source produced
/// as a single span.
pub(crate) fn coalesce_runs(runs: Vec<RichTextRun>) -> Vec<RichTextRun> {
    let mut out: Vec<RichTextRun> = Vec::new();
    for run in runs {
        match out.last_mut() {
            Some(prev) if prev.styling() == run.styling() && prev.link == run.link => {
                prev.text.push_str(&run.text);
            }
            _ => out.push(run),
        }
    }
    out
}
