//! Reverse scanning of code fragments for editor completion.
//!
//! Given the text just before a cursor, classify what syntactic construct is being typed there
//! (a local/var, a module attribute, a dot chain, an operator, and so on), without parsing the
//! surrounding expression. The scanner walks the fragment right to left and defers every decision
//! about what a run of characters *means* to a [`TokenOracle`]; this crate only knows about
//! character classes, not about any particular host language's grammar.
//!
//! [`context`]: https://docs.rs/context (the sibling crate) adds line/column coordinates and the
//! surrounding-token span on top of the context values produced here.

pub mod charclass;
pub mod line;
pub mod oracle;
pub mod types;

mod scan;

#[cfg(test)]
mod tests;

pub use oracle::{
    DefaultOracle, IdentKind, IdentifierToken, OperatorClass, OperatorToken, TokenOracle,
};
pub use types::{CursorContext, InsideDot};

/// Classifies the text just before the cursor, given as a plain char slice (already
/// newline-selected, already restricted to the prefix before the cursor).
pub fn classify_chars(chars: &[char], oracle: &dyn TokenOracle) -> CursorContext {
    scan::reverse_scan(chars, oracle)
}

/// Selects `fragment`'s last line and classifies the text at its end.
#[tracing::instrument(skip(fragment, oracle), level = "trace")]
pub fn cursor_context(fragment: &str, oracle: &dyn TokenOracle) -> CursorContext {
    let selected = line::last_line(fragment);
    let chars: Vec<char> = selected.chars().collect();
    classify_chars(&chars, oracle)
}
