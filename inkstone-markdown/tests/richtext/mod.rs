//! Rich-text codec tests.

mod codec;
