//! Bidirectional transcoding between workspace block trees and Markdown
//!
//!     Hosted workspace stores hold documents as trees of typed content
//!     blocks. This crate converts in both directions: a fetched block tree
//!     renders to Markdown text, and Markdown text parses back into blocks
//!     ready for persistence. Callers never manipulate the tree layout
//!     themselves; they hand blocks to the network client and strings to
//!     the user.
//!
//! Architecture
//!
//!     Three independent pieces, composed linearly by the callers:
//!
//!     - Rich-text codec (./richtext): annotated text runs ↔ inline
//!       Markdown. Leaf component, used by both paths.
//!     - Block renderer (./render): depth-first walk of a block tree
//!       producing Markdown, plus the frontmatter metadata headers.
//!     - Block parser (./parse): comrak token walk producing a flat block
//!       sequence.
//!
//!     The file structure:
//!     .
//!     ├── error.rs        # TranscodeError
//!     ├── lexer.rs        # shared comrak options
//!     ├── lib.rs
//!     ├── model           # block tree, rich-text runs, page metadata
//!     ├── parse           # Markdown → blocks
//!     ├── render          # blocks → Markdown, frontmatter
//!     └── richtext        # runs ↔ inline Markdown
//!
//! Library Choices
//!
//!     Markdown lexing is offloaded to comrak: one crate for the block
//!     lexer and the inline grammar, CommonMark compliant, with the
//!     strikethrough extension this codec needs. We never hand-roll the
//!     parsing side; the rendering side IS hand-rolled, because the layout
//!     contract (exact newline counts, bullet and fence syntax) is this
//!     crate's own bit-exact surface and no general-purpose serializer
//!     guarantees it.
//!
//! Failure Model
//!
//!     Rendering and parsing degrade rather than fail: partial blocks and
//!     unknown constructs become empty output or are dropped. Only the
//!     frontmatter renderers return errors, since fabricating metadata
//!     timestamps would be worse than failing loudly. No I/O, no async,
//!     no shared state: every call owns its input and output, so the crate
//!     is safe to call from concurrent contexts without locking.

pub mod error;
mod lexer;
pub mod model;
pub mod parse;
pub mod render;
pub mod richtext;

pub use error::TranscodeError;
pub use model::{
    Annotations, Block, BlockContent, FullBlock, Page, PageRef, PartialBlock, PartialPage,
    RichTextRun,
};
pub use parse::parse_markdown;
pub use render::frontmatter::{render_block_frontmatter, render_page_frontmatter};
pub use render::render_blocks;
pub use richtext::{decode_rich_text, encode_rich_text};
