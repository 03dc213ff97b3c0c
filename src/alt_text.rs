/// Plain-text flattening of image descriptions
use crate::ast::Inline;

/// Reduce an inline subtree to the plain text used for an image's `alt`.
///
/// Walks with an explicit stack so deeply nested input cannot exhaust the
/// call stack. Children are pushed in reverse to keep document order.
pub fn flatten_alt_text(node: &Inline) -> String {
    let mut text = String::new();
    let mut stack: Vec<&Inline> = vec![node];

    while let Some(current) = stack.pop() {
        match current {
            Inline::Text(literal) => text.push_str(literal),
            Inline::Indent(_) | Inline::SoftBreak | Inline::HardBreak => text.push(' '),
            Inline::LinkDestination(_) | Inline::LinkTitle(_) | Inline::LinkLabel(_) => {}
            _ => stack.extend(current.children().iter().rev()),
        }
    }

    text
}
