//! The operator recognizer: the fallback path whenever the identifier recognizer finds zero
//! identifier characters at the cursor.

use super::Engine;
use crate::charclass;
use crate::oracle::{OperatorClass, OperatorToken};
use crate::types::CursorContext;

impl<'a> Engine<'a> {
    pub(super) fn operator_recognize(&self, pos: usize, call_op: bool) -> CursorContext {
        let mut head = pos;
        while head > 0 && charclass::is_operator_char(self.chars[head - 1]) {
            head -= 1;
        }
        if head == pos {
            return CursorContext::None;
        }
        let acc: String = self.chars[head..pos].iter().collect();

        if matches!(acc.as_str(), "^^" | "~~" | "~") {
            if let Some(left_pos) = self.dot_boundary(head) {
                return if call_op {
                    CursorContext::None
                } else {
                    self.dot(left_pos, acc)
                };
            }
        }

        match self.oracle.tokenize_operator(&acc) {
            OperatorToken::Atom(name) => CursorContext::UnquotedAtom(name),
            OperatorToken::Operator(op) => {
                if matches!(self.oracle.classify_operator(&op), OperatorClass::Neither) {
                    CursorContext::None
                } else if let Some(left_pos) = self.dot_boundary(head) {
                    self.dot(left_pos, op)
                } else {
                    CursorContext::Operator(op)
                }
            }
            OperatorToken::Other => CursorContext::None,
        }
    }
}
