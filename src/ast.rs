/// Document tree handed over by an upstream CommonMark parser
use serde::{Deserialize, Serialize};

use crate::references::ReferenceMap;

/// A parsed document: top-level blocks plus the link reference definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub references: ReferenceMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Vec<Inline>),
    ThematicBreak,
    Heading {
        level: u8,
        children: Vec<Inline>,
    },
    // Indented and fenced blocks share one node; only fenced ones carry an info string
    CodeBlock {
        #[serde(default)]
        info: Option<String>,
        children: Vec<Inline>,
    },
    BlockQuote(Vec<Block>),
    List {
        ordered: bool,
        children: Vec<Block>, // Contains ListItem nodes
    },
    ListItem {
        tight: bool,
        children: Vec<Block>,
    },
    HtmlBlock(Content),
}

/// Children of a block that may hold either kind of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Content {
    Blocks(Vec<Block>),
    Inlines(Vec<Inline>),
}

impl Default for Content {
    fn default() -> Self {
        Content::Inlines(Vec::new())
    }
}

/// Borrowed view of a block's children
#[derive(Debug, Clone, Copy)]
pub enum Children<'a> {
    Blocks(&'a [Block]),
    Inlines(&'a [Inline]),
    None,
}

impl Block {
    pub fn children(&self) -> Children<'_> {
        match self {
            Block::Paragraph(children)
            | Block::Heading { children, .. }
            | Block::CodeBlock { children, .. } => Children::Inlines(children),
            Block::BlockQuote(children)
            | Block::List { children, .. }
            | Block::ListItem { children, .. } => Children::Blocks(children),
            Block::HtmlBlock(Content::Blocks(children)) => Children::Blocks(children),
            Block::HtmlBlock(Content::Inlines(children)) => Children::Inlines(children),
            Block::ThematicBreak => Children::None,
        }
    }
}

/// Where a link or image points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LinkTarget {
    /// `[text](destination "title")`
    Inline {
        destination: String,
        #[serde(default)]
        title: Option<String>,
    },
    /// `[text][label]`, looked up in the document's reference map
    Reference(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    RawHtml(String),
    CharacterReference(String), // Already decoded by the parser
    SoftBreak,
    HardBreak,
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    CodeSpan(Vec<Inline>),
    Link {
        target: LinkTarget,
        children: Vec<Inline>,
    },
    Image {
        target: LinkTarget,
        children: Vec<Inline>, // Only used to build the alt text
    },
    Autolink(Vec<Inline>), // First child holds the raw destination
    Indent(usize),
    HtmlTag(Vec<Inline>),
    LinkDestination(String),
    LinkTitle(String),
    LinkLabel(String),
}

impl Inline {
    /// Literal source text of a leaf node, empty for containers and breaks
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text)
            | Inline::RawHtml(text)
            | Inline::CharacterReference(text)
            | Inline::LinkDestination(text)
            | Inline::LinkTitle(text)
            | Inline::LinkLabel(text) => text,
            _ => "",
        }
    }

    pub fn children(&self) -> &[Inline] {
        match self {
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::CodeSpan(children)
            | Inline::Link { children, .. }
            | Inline::Image { children, .. }
            | Inline::Autolink(children)
            | Inline::HtmlTag(children) => children,
            _ => &[],
        }
    }
}
