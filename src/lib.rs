/// Flattens parsed CommonMark document trees into a token stream
pub mod alt_text;
pub mod ast;
pub mod document;
pub mod error;
pub mod references;
pub mod renderer;
pub mod token;
pub mod uri;

pub use ast::{Block, Content, Document, Inline, LinkTarget};
pub use error::{Error, Result};
pub use references::{LinkDefinition, ReferenceMap};
pub use renderer::TokenRenderer;
pub use token::{Token, TokenStream};

/// Render a document into its token stream
pub fn render(document: &Document) -> Vec<Token> {
    TokenRenderer::new().render(document)
}

/// Parse a JSON document and render it
pub fn json_to_tokens(json: &str) -> Result<TokenStream> {
    let document = Document::from_json(json)?;
    Ok(TokenStream::from(render(&document)))
}
