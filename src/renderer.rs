/// Token renderer for parsed CommonMark documents
use crate::alt_text::flatten_alt_text;
use crate::ast::{Block, Children, Document, Inline};
use crate::references::{ReferenceMap, resolve};
use crate::token::Token;
use crate::uri::normalize_uri;

pub struct TokenRenderer;

impl TokenRenderer {
    pub fn new() -> Self {
        TokenRenderer
    }

    /// Flatten a document into tokens in document order
    pub fn render(&self, document: &Document) -> Vec<Token> {
        let mut emitter = Emitter {
            references: &document.references,
            tokens: Vec::new(),
        };
        for block in &document.blocks {
            emitter.block(block, false);
        }
        tracing::debug!(
            blocks = document.blocks.len(),
            tokens = emitter.tokens.len(),
            "rendered document"
        );
        emitter.tokens
    }
}

impl Default for TokenRenderer {
    fn default() -> Self {
        Self::new()
    }
}

struct Emitter<'a> {
    references: &'a ReferenceMap,
    tokens: Vec<Token>,
}

impl Emitter<'_> {
    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn block(&mut self, block: &Block, tight: bool) {
        match block {
            Block::Paragraph(_) => {
                if tight {
                    self.children(block, false);
                } else {
                    self.push(Token::open("paragraph"));
                    self.children(block, false);
                    self.push(Token::close("paragraph"));
                }
            }
            Block::ThematicBreak => self.push(Token::new("thematic_break")),
            Block::Heading { level, .. } => {
                let level = level.to_string();
                self.push(Token::open("heading").with_attr("level", level.as_str()));
                self.children(block, false);
                self.push(Token::close("heading").with_attr("level", level));
            }
            Block::CodeBlock { info, .. } => {
                let mut open = Token::open("code_block");
                if let Some(word) = info.as_deref().and_then(|info| info.split_whitespace().next()) {
                    open = open.with_attr("info", word);
                }
                self.push(open);
                self.children(block, false);
                self.push(Token::close("code_block"));
            }
            Block::BlockQuote(_) => {
                self.push(Token::open("blockquote"));
                self.children(block, false);
                self.push(Token::close("blockquote"));
            }
            Block::List { ordered, .. } => {
                let list_type = if *ordered { "ordered" } else { "bullet" };
                self.push(Token::open("list").with_attr("type", list_type));
                self.children(block, false);
                self.push(Token::close("list"));
            }
            Block::ListItem { tight, .. } => {
                self.push(Token::open("list_item"));
                self.children(block, *tight);
                self.push(Token::close("list_item"));
            }
            // Raw HTML blocks leave no trace of their own in the stream
            Block::HtmlBlock(_) => self.children(block, false),
        }
    }

    fn children(&mut self, parent: &Block, tight: bool) {
        match parent.children() {
            Children::Inlines(inlines) => {
                for inline in inlines {
                    self.inline(inline);
                }
            }
            Children::Blocks(blocks) => {
                for child in blocks {
                    // Only the direct paragraph children of a tight item lose their wrapper
                    if tight && matches!(child, Block::Paragraph(_)) {
                        self.children(child, false);
                    } else {
                        self.block(child, false);
                    }
                }
            }
            Children::None => {}
        }
    }

    fn inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            self.inline(inline);
        }
    }

    fn wrapped(&mut self, kind: &str, children: &[Inline]) {
        self.push(Token::open(kind));
        self.inlines(children);
        self.push(Token::close(kind));
    }

    fn inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Text(text) | Inline::CharacterReference(text) => {
                self.push(Token::text(text.as_str()));
            }
            Inline::RawHtml(html) => self.push(Token::new("html_inline").with_value(html.as_str())),
            Inline::SoftBreak => self.push(Token::new("softbreak")),
            Inline::HardBreak => self.push(Token::new("hardbreak")),
            Inline::Emphasis(children) => self.wrapped("em", children),
            Inline::Strong(children) => self.wrapped("strong", children),
            Inline::CodeSpan(children) => self.wrapped("code_inline", children),
            Inline::Link { target, children } => {
                let resolved = resolve(target, self.references);
                let mut open = Token::open("link").with_attr("href", normalize_uri(&resolved.destination));
                if let Some(title) = resolved.title {
                    open = open.with_attr("title", title);
                }
                self.push(open);
                self.inlines(children);
                self.push(Token::close("link"));
            }
            Inline::Image { target, .. } => {
                let resolved = resolve(target, self.references);
                let mut image = Token::new("image").with_attr("src", normalize_uri(&resolved.destination));
                if let Some(title) = resolved.title {
                    image = image.with_attr("title", title);
                }
                self.push(image.with_attr("alt", flatten_alt_text(inline)));
            }
            Inline::Autolink(children) => {
                let destination = children.first().map(Inline::text).unwrap_or_default();
                self.push(Token::open("link").with_attr("href", normalize_uri(destination)));
                self.push(Token::text(destination));
                self.push(Token::close("link"));
            }
            Inline::Indent(width) => self.push(Token::text(" ".repeat(*width))),
            Inline::HtmlTag(children) => self.inlines(children),
            Inline::LinkDestination(_) | Inline::LinkTitle(_) | Inline::LinkLabel(_) => {}
        }
    }
}
