//! Encode/decode behavior of the inline codec.

use inkstone_markdown::{decode_rich_text, encode_rich_text, Annotations, RichTextRun};

fn bold() -> Annotations {
    Annotations {
        bold: true,
        ..Annotations::default()
    }
}

#[test]
fn empty_runs_encode_to_empty_string() {
    assert_eq!(encode_rich_text(&[]), "");
}

#[test]
fn runs_concatenate_without_separator() {
    let runs = vec![
        RichTextRun::plain("one "),
        RichTextRun::styled("two", bold(), None),
        RichTextRun::plain(" three"),
    ];
    assert_eq!(encode_rich_text(&runs), "one **two** three");
}

#[test]
fn bold_and_italic_nest_in_fixed_order() {
    let run = RichTextRun::styled(
        "text",
        Annotations {
            bold: true,
            italic: true,
            ..Annotations::default()
        },
        None,
    );
    assert_eq!(encode_rich_text(&[run]), "***text***");
}

#[test]
fn link_wraps_the_annotated_text() {
    let run = RichTextRun::styled("here", bold(), Some("https://example.com".to_string()));
    assert_eq!(encode_rich_text(&[run]), "[**here**](https://example.com)");
}

#[test]
fn decode_strikethrough() {
    let runs = decode_rich_text("~~gone~~");
    assert_eq!(runs.len(), 1);
    assert!(runs[0].styling().strikethrough);
    assert_eq!(runs[0].text, "gone");
}

#[test]
fn decode_code_span_sets_only_the_code_flag() {
    let runs = decode_rich_text("`let x`");
    assert_eq!(runs.len(), 1);
    assert_eq!(
        runs[0].styling(),
        Annotations {
            code: true,
            ..Annotations::default()
        }
    );
    assert_eq!(runs[0].text, "let x");
}

#[test]
fn decode_plain_run_has_no_annotations_field() {
    let runs = decode_rich_text("nothing fancy");
    assert_eq!(runs[0].annotations, None);
}

#[test]
fn decode_link_with_inner_emphasis() {
    let runs = decode_rich_text("[*em*](https://example.com/a)");
    assert_eq!(runs.len(), 1);
    assert!(runs[0].styling().italic);
    assert_eq!(runs[0].link.as_deref(), Some("https://example.com/a"));
}

/// The encoder fixes one nesting order while the decoder accepts any, so
/// string-level round-trips across mixed nesting are not guaranteed — only
/// the flag sets and text survive.
#[test]
fn mixed_nesting_round_trips_flags_not_strings() {
    let source = "**_x_**";
    let decoded = decode_rich_text(source);
    assert_eq!(decoded.len(), 1);
    let style = decoded[0].styling();
    assert!(style.bold && style.italic);

    let reencoded = encode_rich_text(&decoded);
    assert_ne!(reencoded, source);
    assert_eq!(reencoded, "***x***");

    // A second decode still sees the same flags and text.
    let redecoded = decode_rich_text(&reencoded);
    assert_eq!(redecoded, decoded);
}
