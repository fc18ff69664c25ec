//! The tokenizer oracle seam.
//!
//! The reverse scanner never decides on its own whether a run of characters is a legal
//! identifier, alias, atom, or operator; it always defers to a [`TokenOracle`]. In production
//! that oracle is the host language's real tokenizer; [`DefaultOracle`] is a faithful standalone
//! stand-in used when no such front-end is wired in, and a scripted stub (see the `testing`
//! module) lets the scanner's tests stay independent of either.

/// What a candidate identifier-shaped run of characters turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    Identifier,
    Alias,
    Atom,
    Other,
}

/// Result of [`TokenOracle::tokenize_identifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierToken {
    pub kind: IdentKind,
    /// Any suffix of the input the oracle could not fold into the token (empty for a clean
    /// candidate). The scanner treats a non-empty leftover the same as `IdentKind::Other`.
    pub leftover: String,
    /// `false` if any scalar in the token is outside ASCII. Aliases must be ASCII-only.
    pub ascii_only: bool,
    /// `true` if `@` appears anywhere in the token body.
    pub has_at: bool,
}

impl IdentifierToken {
    pub fn is_clean(&self) -> bool {
        self.leftover.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    Unary,
    Binary,
    Neither,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorToken {
    /// The operator text is actually an atom literal spelled with operator characters (`:<>`).
    Atom(String),
    Operator(String),
    Other,
}

/// The three oracle calls the reverse scanner is allowed to make.
///
/// Implementations must be pure and side-effect free: the scanner calls them synchronously,
/// possibly many times per line, and never retries or caches a result itself.
pub trait TokenOracle {
    fn tokenize_identifier(&self, candidate: &str) -> IdentifierToken;
    fn classify_operator(&self, op: &str) -> OperatorClass;
    fn tokenize_operator(&self, op: &str) -> OperatorToken;
}

const UNARY_OPS: &[&str] = &["+", "-", "!", "^", "not", "~~~", "~~", "~"];

const BINARY_OPS: &[&str] = &[
    "+", "-", "*", "/", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "<>", "++", "--", "and",
    "or", "in", "when", "<-", "\\\\", "::", "..", "|>", "=~", "^^^", "&&&", "|||", "<<<", ">>>",
    "~>>", "<<~", "~>", "<~", "<~>", "<|>", "=", "^^", "~~", "~",
];

fn is_known_operator_symbol(op: &str) -> bool {
    UNARY_OPS.contains(&op) || BINARY_OPS.contains(&op)
}

/// Reserved words that lex as atom literals on their own, without a leading `:`.
const RESERVED_ATOM_WORDS: &[&str] = &["true", "false", "nil"];

/// A standalone oracle grounded directly in the character-class rules from the data model,
/// used whenever no real host-language front-end is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultOracle;

impl DefaultOracle {
    fn is_identifier_shape(candidate: &str) -> bool {
        let mut chars = candidate.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !(first == '_' || first.is_alphabetic()) {
            return false;
        }
        let rest: Vec<char> = chars.collect();
        let body = match rest.last() {
            Some('?') | Some('!') => &rest[..rest.len() - 1],
            _ => rest.as_slice(),
        };
        body.iter().all(|c| *c == '_' || c.is_alphanumeric())
    }

    fn is_alias_shape(candidate: &str) -> bool {
        let mut chars = candidate.chars();
        match chars.next() {
            Some(c) if c.is_ascii_uppercase() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl TokenOracle for DefaultOracle {
    #[tracing::instrument(level = "trace", skip(self))]
    fn tokenize_identifier(&self, candidate: &str) -> IdentifierToken {
        let ascii_only = candidate.is_ascii();
        let has_at = candidate.contains('@');

        if candidate.is_empty() {
            return IdentifierToken {
                kind: IdentKind::Other,
                leftover: String::new(),
                ascii_only,
                has_at,
            };
        }

        if has_at {
            return IdentifierToken {
                kind: IdentKind::Other,
                leftover: String::new(),
                ascii_only,
                has_at,
            };
        }

        let kind = if RESERVED_ATOM_WORDS.contains(&candidate) {
            IdentKind::Atom
        } else if Self::is_alias_shape(candidate) {
            IdentKind::Alias
        } else if Self::is_identifier_shape(candidate) {
            IdentKind::Identifier
        } else {
            IdentKind::Other
        };

        IdentifierToken {
            kind,
            leftover: String::new(),
            ascii_only,
            has_at,
        }
    }

    fn classify_operator(&self, op: &str) -> OperatorClass {
        let binary = BINARY_OPS.contains(&op);
        let unary = UNARY_OPS.contains(&op);
        match (unary, binary) {
            (_, true) => OperatorClass::Binary,
            (true, false) => OperatorClass::Unary,
            (false, false) => OperatorClass::Neither,
        }
    }

    fn tokenize_operator(&self, op: &str) -> OperatorToken {
        if let Some(rest) = op.strip_prefix(':') {
            return if is_known_operator_symbol(rest) {
                OperatorToken::Atom(rest.to_string())
            } else {
                OperatorToken::Other
            };
        }

        if is_known_operator_symbol(op) {
            OperatorToken::Operator(op.to_string())
        } else {
            OperatorToken::Other
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! A scripted oracle used by recognizer and context tests, so neither crate's tests
    //! depend on [`DefaultOracle`]'s specific character-class heuristics.
    use super::{DefaultOracle, IdentifierToken, OperatorClass, OperatorToken, TokenOracle};

    /// Delegates to [`DefaultOracle`] by default; tests can wrap it to force a specific answer.
    #[derive(Debug, Default)]
    pub struct StubOracle {
        inner: DefaultOracle,
    }

    impl TokenOracle for StubOracle {
        fn tokenize_identifier(&self, candidate: &str) -> IdentifierToken {
            self.inner.tokenize_identifier(candidate)
        }

        fn classify_operator(&self, op: &str) -> OperatorClass {
            self.inner.classify_operator(op)
        }

        fn tokenize_operator(&self, op: &str) -> OperatorToken {
            self.inner.tokenize_operator(op)
        }
    }
}
