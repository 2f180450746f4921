//! Rich-text runs and style annotations.

use serde::{Deserialize, Serialize};

/// One contiguous span of text sharing the same style annotations.
///
/// Runs are ephemeral: they are produced by a single decode or parse call
/// and consumed by a single encode or render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextRun {
    pub text: String,
    /// Omitted on the wire when no flag is active. Absent and
    /// present-with-all-flags-false are equivalent; [`RichTextRun::styling`]
    /// resolves both to the same value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl RichTextRun {
    /// A run with no styling and no link.
    pub fn plain(text: impl Into<String>) -> Self {
        RichTextRun {
            text: text.into(),
            annotations: None,
            link: None,
        }
    }

    /// A run carrying the given annotation set, normalized so that an
    /// all-false set is stored as an absent field.
    pub fn styled(text: impl Into<String>, annotations: Annotations, link: Option<String>) -> Self {
        RichTextRun {
            text: text.into(),
            annotations: annotations.active(),
            link,
        }
    }

    /// The effective annotation set, treating an absent field as all-false.
    pub fn styling(&self) -> Annotations {
        self.annotations.unwrap_or_default()
    }
}

/// Independent style flags. Any subset may be active on one run; the set
/// records which annotations apply, not the order they were opened in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

impl Annotations {
    /// Whether any flag is set.
    pub fn any(&self) -> bool {
        self.bold || self.italic || self.strikethrough || self.code
    }

    /// `Some(self)` when any flag is set, `None` otherwise.
    pub fn active(self) -> Option<Annotations> {
        if self.any() {
            Some(self)
        } else {
            None
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
