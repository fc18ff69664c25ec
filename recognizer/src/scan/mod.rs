//! The reverse scanner: a single right-to-left pass that classifies the fragment of code just
//! before the cursor.
//!
//! The scanner never looks past the cursor and never allocates more than the one `String` it
//! ultimately returns inside a [`CursorContext`]. It is organized as a handful of mutually
//! recursive methods on [`Engine`], split one-per-concern across this module's children:
//! identifier/alias/atom/attribute recognition lives in `identifier`, operator recognition in
//! `operator`, and the `.`-chain plumbing shared by both in `dot`.

mod dot;
mod identifier;
mod operator;

use crate::oracle::TokenOracle;
use crate::types::CursorContext;

pub(crate) struct Engine<'a> {
    chars: &'a [char],
    oracle: &'a dyn TokenOracle,
}

/// Runs the reverse scanner over `chars` (the text up to, and not including, the cursor) using
/// `oracle` to resolve identifier/operator shapes.
pub(crate) fn reverse_scan(chars: &[char], oracle: &dyn TokenOracle) -> CursorContext {
    let engine = Engine { chars, oracle };
    engine.entry(chars.len())
}

impl<'a> Engine<'a> {
    fn at(&self, pos: usize) -> Option<char> {
        if pos == 0 { None } else { Some(self.chars[pos - 1]) }
    }

    fn strip_spaces(&self, mut pos: usize) -> usize {
        while let Some(c) = self.at(pos) {
            if crate::charclass::is_space(c) {
                pos -= 1;
            } else {
                break;
            }
        }
        pos
    }

    fn ends_with_tail(&self, pos: usize, tail: &str) -> bool {
        let tail: Vec<char> = tail.chars().collect();
        let n = tail.len();
        if pos < n {
            return false;
        }
        self.chars[pos - n..pos] == tail[..]
    }

    /// The scanner's entry point: strips trailing spaces, handles the small set of tokens that
    /// can never extend an expression (`=>`, `->`, `<<`), then dispatches on the last remaining
    /// character.
    fn entry(&self, pos: usize) -> CursorContext {
        self.dispatch(pos)
    }

    fn dispatch(&self, pos: usize) -> CursorContext {
        let stripped_pos = self.strip_spaces(pos);
        let spaces_stripped = pos - stripped_pos;
        let pos = stripped_pos;

        let Some(last) = self.at(pos) else {
            return CursorContext::Expr;
        };

        if (self.ends_with_tail(pos, "=>") && !self.ends_with_tail(pos, ":=>"))
            || (self.ends_with_tail(pos, "->") && !self.ends_with_tail(pos, ":->"))
        {
            return CursorContext::Expr;
        }
        if self.ends_with_tail(pos, "<<") && !self.ends_with_tail(pos, "<<<") {
            return CursorContext::Expr;
        }

        match last {
            ':' if !self.ends_with_tail(pos, "::") => {
                return if spaces_stripped == 1 {
                    CursorContext::UnquotedAtom(String::new())
                } else {
                    CursorContext::Expr
                };
            }
            '.' => {
                if pos == 1 {
                    return CursorContext::None;
                }
                let prev = self.chars[pos - 2];
                if prev != '.' && prev != ':' {
                    return self.dot(pos - 1, String::new());
                }
                return self.classify(pos, false);
            }
            '(' => return self.call_suffix(pos - 1),
            '/' => return self.arity_suffix(pos - 1),
            c if crate::charclass::is_starter_punct(c) => return CursorContext::Expr,
            _ => {}
        }

        if spaces_stripped >= 1 {
            return self.promote_call(self.classify(pos, true));
        }

        self.classify(pos, false)
    }

    fn call_suffix(&self, pos: usize) -> CursorContext {
        let pos = self.strip_spaces(pos);
        self.promote_call(self.classify(pos, true))
    }

    fn arity_suffix(&self, pos: usize) -> CursorContext {
        let pos = self.strip_spaces(pos);
        self.promote_arity(self.classify(pos, true))
    }

    fn promote_call(&self, ctx: CursorContext) -> CursorContext {
        match ctx {
            CursorContext::LocalOrVar(a) => CursorContext::LocalCall(a),
            CursorContext::Dot(inside, a) => CursorContext::DotCall(inside, a),
            CursorContext::Operator(a) => CursorContext::OperatorCall(a),
            _ => CursorContext::None,
        }
    }

    fn promote_arity(&self, ctx: CursorContext) -> CursorContext {
        match ctx {
            CursorContext::LocalOrVar(a) => CursorContext::LocalArity(a),
            CursorContext::Dot(inside, a) => CursorContext::DotArity(inside, a),
            CursorContext::Operator(a) => CursorContext::OperatorArity(a),
            _ => CursorContext::None,
        }
    }
}
