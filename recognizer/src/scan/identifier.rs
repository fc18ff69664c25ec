//! The identifier recognizer: identifiers, aliases, unquoted atoms, module attributes, and the
//! handful of punctuation-only literals that look like none of those but still have a shape.

use super::Engine;
use crate::charclass;
use crate::oracle::IdentKind;
use crate::types::CursorContext;

impl<'a> Engine<'a> {
    /// Entry point shared by the dispatcher, the call/arity suffix handlers, and the `.` chain.
    /// `call_op?` is `true` whenever the result would sit to the left of a `(`, `/`, space, or
    /// `.`, i.e. whenever a textual operator (`when`, `and`, ...) should be read as an operator
    /// rather than a plain local/var.
    pub(super) fn classify(&self, pos: usize, call_op: bool) -> CursorContext {
        if let Some(ctx) = self.literal_precheck(pos) {
            return ctx;
        }

        let (body_pos, marker) = match self.at(pos) {
            Some(c) if charclass::is_trailing_marker(c) => {
                let body_pos = pos - 1;
                if body_pos == 0 || charclass::is_non_ident(self.chars[body_pos - 1]) {
                    return self.operator_recognize(pos, call_op);
                }
                (body_pos, Some(c))
            }
            _ => (pos, None),
        };

        let mut head = body_pos;
        while head > 0 && !charclass::is_non_ident(self.chars[head - 1]) {
            head -= 1;
        }

        if head == body_pos {
            return self.operator_recognize(pos, call_op);
        }

        let mut acc: String = self.chars[head..body_pos].iter().collect();
        if let Some(m) = marker {
            acc.push(m);
        }

        if let Some(rest) = acc.strip_prefix('@') {
            return self.module_attribute(rest);
        }

        let terminator = if head > 0 { Some(self.chars[head - 1]) } else { None };

        match terminator {
            Some(':') if !(head >= 2 && self.chars[head - 2] == ':') => {
                return self.unquoted_atom_candidate(&acc);
            }
            Some('?') => return CursorContext::None,
            _ => {}
        }

        self.classify_identifier_shape(head, &acc, call_op)
    }

    fn module_attribute(&self, rest: &str) -> CursorContext {
        if rest.is_empty() {
            return CursorContext::ModuleAttribute(String::new());
        }
        let ident = self.oracle.tokenize_identifier(rest);
        if ident.has_at || !ident.is_clean() || !matches!(ident.kind, IdentKind::Identifier) {
            return CursorContext::None;
        }
        CursorContext::ModuleAttribute(rest.to_string())
    }

    fn unquoted_atom_candidate(&self, acc: &str) -> CursorContext {
        let ident = self.oracle.tokenize_identifier(acc);
        if ident.has_at || !ident.is_clean() || matches!(ident.kind, IdentKind::Other) {
            return CursorContext::None;
        }
        CursorContext::UnquotedAtom(acc.to_string())
    }

    fn classify_identifier_shape(&self, head: usize, acc: &str, call_op: bool) -> CursorContext {
        let ident = self.oracle.tokenize_identifier(acc);
        if ident.has_at || !ident.is_clean() {
            return CursorContext::None;
        }

        match ident.kind {
            IdentKind::Other => CursorContext::None,
            IdentKind::Atom => CursorContext::None,
            IdentKind::Alias => {
                if !ident.ascii_only {
                    return CursorContext::None;
                }
                match self.dot_boundary(head) {
                    Some(left_pos) => match self.classify(self.strip_spaces(left_pos), true) {
                        CursorContext::Alias(left_name) => {
                            CursorContext::Alias(format!("{left_name}.{acc}"))
                        }
                        _ => CursorContext::None,
                    },
                    None => CursorContext::Alias(acc.to_string()),
                }
            }
            IdentKind::Identifier => match self.dot_boundary(head) {
                Some(left_pos) => self.dot(left_pos, acc.to_string()),
                None if call_op && charclass::is_textual_operator(acc) => {
                    CursorContext::Operator(acc.to_string())
                }
                None => CursorContext::LocalOrVar(acc.to_string()),
            },
        }
    }

    /// The four punctuation-only literals that behave like identifiers/atoms/operators on their
    /// own, checked only when nothing precedes them in the current window (otherwise they'd
    /// swallow whatever came before, e.g. `foo...` is not the same as `...`).
    fn literal_precheck(&self, pos: usize) -> Option<CursorContext> {
        let candidate: String = self.chars[..pos].iter().collect();
        match candidate.as_str() {
            "..:" => Some(CursorContext::UnquotedAtom("..".to_string())),
            "..." => Some(CursorContext::LocalOrVar("...".to_string())),
            ".:" => Some(CursorContext::UnquotedAtom(".".to_string())),
            ".." => Some(CursorContext::Operator("..".to_string())),
            _ => None,
        }
    }
}
