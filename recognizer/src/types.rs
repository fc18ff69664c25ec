//! The tagged context lattice produced by the reverse scanner.
//!
//! `CursorContext` is the full variant set served by cursor-context queries. `InsideDot` is the
//! recursive payload carried by `Dot`/`DotArity`/`DotCall` for chains like `A.b.c`; the name of
//! a nested segment never needs its own `*_arity`/`*_call` suffix, only the outermost one does.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CursorContext {
    /// Cursor is at a position that could start a fresh expression.
    Expr,
    /// No valid surface construct is being typed here.
    None,
    Alias(String),
    LocalOrVar(String),
    LocalArity(String),
    LocalCall(String),
    ModuleAttribute(String),
    UnquotedAtom(String),
    Operator(String),
    OperatorArity(String),
    OperatorCall(String),
    Dot(Box<InsideDot>, String),
    DotArity(Box<InsideDot>, String),
    DotCall(Box<InsideDot>, String),
}

/// The left-hand side of a dot chain, one segment at a time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InsideDot {
    Var(String),
    Alias(String),
    ModuleAttribute(String),
    UnquotedAtom(String),
    Dot(Box<InsideDot>, String),
}

impl CursorContext {
    /// `true` for every arity-suffixed variant (`foo/`, `A.foo/`, `+/`).
    pub fn is_arity(&self) -> bool {
        matches!(
            self,
            CursorContext::LocalArity(_) | CursorContext::DotArity(..) | CursorContext::OperatorArity(_)
        )
    }

    /// `true` for every call-suffixed variant (`foo(`, `A.foo(`, `+(`).
    pub fn is_call(&self) -> bool {
        matches!(
            self,
            CursorContext::LocalCall(_) | CursorContext::DotCall(..) | CursorContext::OperatorCall(_)
        )
    }

    /// The grapheme/char span (in the original text) covered by the token this context
    /// describes, measured from the cursor backwards. A `Dot`/`DotArity`/`DotCall` only spans
    /// its trailing segment; the qualifying left-hand side is contextual, not part of the span.
    pub fn token_char_len(&self) -> usize {
        match self {
            CursorContext::Expr | CursorContext::None => 0,
            CursorContext::Alias(a) => a.chars().count(),
            CursorContext::LocalOrVar(a) | CursorContext::LocalArity(a) | CursorContext::LocalCall(a) => {
                a.chars().count()
            }
            CursorContext::ModuleAttribute(a) => {
                if a.is_empty() { 1 } else { a.chars().count() + 1 }
            }
            CursorContext::UnquotedAtom(a) => {
                if a.is_empty() { 1 } else { a.chars().count() + 1 }
            }
            CursorContext::Operator(a) | CursorContext::OperatorArity(a) | CursorContext::OperatorCall(a) => {
                a.chars().count()
            }
            CursorContext::Dot(_, tail) | CursorContext::DotArity(_, tail) | CursorContext::DotCall(_, tail) => {
                tail.chars().count()
            }
        }
    }
}
