//! Block nodes of the workspace document tree.

use serde::{Deserialize, Serialize};

use crate::model::text::RichTextRun;

/// One node of a workspace document tree.
///
/// The store returns either a complete block or an access-restricted stub
/// that carries nothing but its identifier. The two are distinct variants
/// so partial data cannot be rendered as content by accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Block {
    Full(Box<FullBlock>),
    Partial(PartialBlock),
}

impl Block {
    /// A freshly constructed block awaiting creation in the store: no
    /// identifier, no timestamps, no children.
    pub fn new(content: BlockContent) -> Self {
        Block::Full(Box::new(FullBlock {
            id: None,
            created_time: None,
            last_edited_time: None,
            has_children: false,
            content,
            children: Vec::new(),
        }))
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Block::Full(_))
    }

    pub fn as_full(&self) -> Option<&FullBlock> {
        match self {
            Block::Full(full) => Some(full),
            Block::Partial(_) => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Block::Full(full) => full.id.as_deref(),
            Block::Partial(partial) => Some(&partial.id),
        }
    }
}

/// A block for which the store returned complete data.
///
/// `has_children = true` with an empty `children` vector marks a partial
/// tree: children exist in the store but have not been resolved yet. The
/// fetch layer is responsible for resolving that before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<String>,
    #[serde(default)]
    pub has_children: bool,
    #[serde(flatten)]
    pub content: BlockContent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// An access-restricted stub: the caller can see that a block exists but
/// not what it contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialBlock {
    pub id: String,
}

/// Type-specific block content.
///
/// On the wire each variant is tagged with `"type"` and carries its payload
/// under a key of the same name, e.g.
/// `{"type": "to_do", "to_do": {"rich_text": [...], "checked": true}}`.
/// Unrecognized types deserialize into [`BlockContent::Unsupported`] so one
/// exotic block never aborts decoding a whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Paragraph {
        paragraph: TextPayload,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: TextPayload,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: TextPayload,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: TextPayload,
    },
    BulletedListItem {
        bulleted_list_item: TextPayload,
    },
    NumberedListItem {
        numbered_list_item: TextPayload,
    },
    ToDo {
        to_do: ToDoPayload,
    },
    Toggle {
        toggle: TextPayload,
    },
    Code {
        code: CodePayload,
    },
    Quote {
        quote: TextPayload,
    },
    Divider {
        divider: DividerPayload,
    },
    Callout {
        callout: CalloutPayload,
    },
    Image {
        image: ImagePayload,
    },
    #[serde(other)]
    Unsupported,
}

impl BlockContent {
    pub fn paragraph(rich_text: Vec<RichTextRun>) -> Self {
        BlockContent::Paragraph {
            paragraph: TextPayload { rich_text },
        }
    }

    /// A heading of the given level. The store supports exactly three
    /// levels; deeper levels clamp to 3.
    pub fn heading(level: u8, rich_text: Vec<RichTextRun>) -> Self {
        let payload = TextPayload { rich_text };
        match level {
            0 | 1 => BlockContent::Heading1 { heading_1: payload },
            2 => BlockContent::Heading2 { heading_2: payload },
            _ => BlockContent::Heading3 { heading_3: payload },
        }
    }

    pub fn bulleted_list_item(rich_text: Vec<RichTextRun>) -> Self {
        BlockContent::BulletedListItem {
            bulleted_list_item: TextPayload { rich_text },
        }
    }

    pub fn numbered_list_item(rich_text: Vec<RichTextRun>) -> Self {
        BlockContent::NumberedListItem {
            numbered_list_item: TextPayload { rich_text },
        }
    }

    pub fn quote(rich_text: Vec<RichTextRun>) -> Self {
        BlockContent::Quote {
            quote: TextPayload { rich_text },
        }
    }

    pub fn code(rich_text: Vec<RichTextRun>, language: impl Into<String>) -> Self {
        BlockContent::Code {
            code: CodePayload {
                rich_text,
                language: language.into(),
            },
        }
    }

    pub fn divider() -> Self {
        BlockContent::Divider {
            divider: DividerPayload {},
        }
    }
}

/// Payload for the plain text-bearing block types.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextPayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoPayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextRun>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodePayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextRun>,
    #[serde(default)]
    pub language: String,
}

/// Dividers carry no content; the empty record keeps the wire shape
/// (`"divider": {}`) intact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DividerPayload {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutPayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Block icon. Only emoji icons are modeled; uploaded icon files and the
/// like fall into the `Other` arm and render as nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    Emoji { emoji: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    #[serde(default)]
    pub caption: Vec<RichTextRun>,
    #[serde(flatten)]
    pub source: ImageSource,
}

/// An image is either hosted by the store or referenced by external URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageSource {
    External { external: ExternalFile },
    File { file: HostedFile },
}

impl ImageSource {
    pub fn url(&self) -> &str {
        match self {
            ImageSource::External { external } => &external.url,
            ImageSource::File { file } => &file.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
}
