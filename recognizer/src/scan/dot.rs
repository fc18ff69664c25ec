//! The `.` chain: shared by the identifier recognizer (`A.b`, nested aliases `A.B`) and the
//! operator recognizer's `~`/`~~`/`^^` special case.

use super::Engine;
use crate::types::{CursorContext, InsideDot};

impl<'a> Engine<'a> {
    /// If `head` sits directly after a lone `.` (not part of `..`), returns the position to use
    /// for the left-hand recursive scan (the dot itself excluded). Returns `None` when there's no
    /// dot there, or when the dot is actually the second half of a `..` run.
    pub(super) fn dot_boundary(&self, head: usize) -> Option<usize> {
        if head == 0 {
            return None;
        }
        if self.chars[head - 1] != '.' {
            return None;
        }
        if head >= 2 && self.chars[head - 2] == '.' {
            return None;
        }
        Some(head - 1)
    }

    /// Consumes the `.` separator (and any spaces to its left), classifies the left-hand side
    /// with `call_op?=true`, and wraps the result as `Dot(inside, tail)`. `tail` is the
    /// already-recognized right-hand identifier text (possibly empty, for a trailing `.`).
    pub(super) fn dot(&self, left_pos: usize, tail: String) -> CursorContext {
        let left_pos = self.strip_spaces(left_pos);
        let left = self.classify(left_pos, true);
        let inside = match left {
            CursorContext::LocalOrVar(name) => InsideDot::Var(name),
            CursorContext::UnquotedAtom(name) => InsideDot::UnquotedAtom(name),
            CursorContext::Alias(name) => InsideDot::Alias(name),
            CursorContext::ModuleAttribute(name) => InsideDot::ModuleAttribute(name),
            CursorContext::Dot(inside, name) => InsideDot::Dot(inside, name),
            _ => return CursorContext::None,
        };
        CursorContext::Dot(Box::new(inside), tail)
    }
}
