//! Network client for the hosted workspace block store
//!
//!     This crate is the I/O collaborator around the pure transcoding core
//!     in `inkstone-markdown`: it fetches block trees for the renderer and
//!     persists blocks produced by the parser. All conversion logic stays
//!     in the core; this crate only moves model types over HTTP.
//!
//!     Notable behavior lives in the deep child fetch: paginated listings,
//!     recursive resolution of `has_children` blocks with a concurrency
//!     limit of three child requests per level, and a hard depth bound.
//!
//!     No retries and no caching: failures surface to the caller, which
//!     owns user-facing error translation and any backoff policy.

pub mod client;
pub mod error;
pub mod wire;

pub use client::WorkspaceClient;
pub use error::ClientError;
pub use wire::ChildrenPage;
