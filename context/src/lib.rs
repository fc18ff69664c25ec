//! Cursor-context and surround-context queries over code fragments, for editor completion,
//! hover, and go-to-definition.
//!
//! This crate is the public surface; the scanning engine itself lives in [`recognizer`]. Both
//! entry points default to [`recognizer::DefaultOracle`]; callers who want to plug in a real
//! host-language tokenizer should use `recognizer` directly.

mod adjuster;

use recognizer::DefaultOracle;

pub use recognizer::CursorContext;

/// Options accepted by [`cursor_context`]. Currently empty; reserved for forward compatibility
/// per the public interface contract (options are accepted and ignored today).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CursorOptions;

/// Options accepted by [`surround_context`]. Currently empty, for the same reason as
/// [`CursorOptions`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SurroundOptions;

/// A 1-based `(line, column)` position in a code fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

/// The surrounding token found by [`surround_context`], with its exact column span.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurroundRecord {
    pub context: CursorContext,
    pub begin: Position,
    pub end: Position,
}

/// Errors [`surround_context`] reports for caller contract violations, kept separate from the
/// `None`/`Expr` ambiguous-parse outcomes in [`CursorContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("line and column are 1-based; got line={line}, column={column}")]
    NonPositiveCoordinate { line: usize, column: usize },
}

/// Classifies the syntactic construct being typed at the end of `fragment`.
#[tracing::instrument(skip(fragment), level = "trace")]
pub fn cursor_context(fragment: &str, _options: CursorOptions) -> CursorContext {
    recognizer::cursor_context(fragment, &DefaultOracle)
}

/// Classifies the complete token surrounding `position` in `fragment`, along with its exact
/// begin/end columns.
///
/// Returns `Err` if `position.line` or `position.col` is `0` (coordinates are 1-based).
/// Returns `Ok(None)` if there is no line at that index, or the column points at or past the end
/// of the line (nothing to surround).
#[tracing::instrument(skip(fragment), level = "trace", fields(line = position.line, col = position.col))]
pub fn surround_context(
    fragment: &str,
    position: Position,
    _options: SurroundOptions,
) -> Result<Option<SurroundRecord>, ContextError> {
    if position.line == 0 || position.col == 0 {
        return Err(ContextError::NonPositiveCoordinate {
            line: position.line,
            column: position.col,
        });
    }

    let Some(line) = recognizer::line::select_line(fragment, position.line - 1) else {
        return Ok(None);
    };

    let Some((pre, post)) = adjuster::split_and_adjust(line, position.col - 1) else {
        return Ok(None);
    };

    let Some((context, begin, end)) = adjuster::resolve(pre, post, &DefaultOracle) else {
        return Ok(None);
    };

    Ok(Some(SurroundRecord {
        context,
        begin: Position { line: position.line, col: begin + 1 },
        end: Position { line: position.line, col: end + 1 },
    }))
}

#[cfg(test)]
mod tests;
