//! Core data structures for the block document model.
//!
//! These types double as the wire shapes exchanged with the workspace
//! store: `serde` attributes reproduce the store's JSON exactly, so the
//! network client serializes and deserializes them without an intermediate
//! layer.

mod blocks;
mod page;
mod text;

pub use blocks::{
    Block, BlockContent, CalloutPayload, CodePayload, DividerPayload, ExternalFile, HostedFile,
    Icon, ImagePayload, ImageSource, FullBlock, PartialBlock, TextPayload, ToDoPayload,
};
pub use page::{Page, PageRef, PartialPage};
pub use text::{Annotations, RichTextRun};
