//! Shared comrak configuration for the parsing paths.
//!
//! Both the block parser and the rich-text decoder lex their input with
//! comrak. They must agree on the enabled extensions, otherwise a construct
//! the block parser skips could still leak through the inline decoder.

use comrak::ComrakOptions;

pub(crate) fn options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.strikethrough = true;
    // Tables are tokenized so they can be skipped as a unit rather than
    // degrading into pipe-delimited paragraphs.
    options.extension.table = true;
    options
}
