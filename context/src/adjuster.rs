//! Surround adjuster and span builder: turns a `(line, column)` position into the complete
//! surrounding token, by splitting the line at the cursor, nudging the split around `:` and `.`,
//! collecting whatever comes after the cursor, and re-running the cursor-context scanner over
//! the reassembled text.

use recognizer::charclass;
use recognizer::{CursorContext, TokenOracle};

/// Splits `line` into `(pre, post)` char vectors at grapheme index `idx`, then nudges the split
/// point (see `adjust` below). Returns `None` if `idx` is at or past the end of the line (nothing
/// follows the cursor, so there is no token to surround).
pub(crate) fn split_and_adjust(line: &str, idx: usize) -> Option<(Vec<char>, Vec<char>)> {
    use unicode_segmentation::UnicodeSegmentation;

    let graphemes: Vec<&str> = line.graphemes(true).collect();
    if idx >= graphemes.len() {
        return None;
    }

    let mut pre: Vec<char> = graphemes[..idx].concat().chars().collect();
    let mut post: Vec<char> = graphemes[idx..].concat().chars().collect();

    adjust(&mut pre, &mut post);
    Some((pre, post))
}

/// Nudges the `pre`/`post` split point around a few patterns where a naive character-index split
/// would cut through what should read as one token: a lone `:` starting an atom, a `.` separated
/// from the cursor by spaces, and a chain of `Identifier.` segments leading up to the final token.
fn adjust(pre: &mut Vec<char>, post: &mut Vec<char>) {
    // (a) cursor sits right before a lone `:` that starts an unquoted atom: fold it backward so
    // the reverse scanner sees it as an atom prefix rather than losing it to the forward side.
    if post.first() == Some(&':') && pre.last() != Some(&':') && post.get(1) != Some(&':') {
        pre.push(post.remove(0));
    }

    // (b) cursor sits among spaces ahead of a lone `.`: step past the dot and its spaces.
    if pre.last().map(|c| charclass::is_space(*c)).unwrap_or(false) {
        let mut j = 0;
        while post.get(j).map(|c| charclass::is_space(*c)).unwrap_or(false) {
            j += 1;
        }
        if post.get(j) == Some(&'.') && post.get(j + 1) != Some(&'.') && post.get(j + 1) != Some(&':') {
            let mut k = j + 1;
            while post.get(k).map(|c| charclass::is_space(*c)).unwrap_or(false) {
                k += 1;
            }
            let moved: Vec<char> = post.drain(0..k).collect();
            pre.extend(moved);
        }
    }

    // (c) a lone `.` sits immediately left of the cursor (past any spaces): keep advancing past
    // whole `Identifier.` segments so the span ultimately lands on the final right-hand token.
    loop {
        let mut i = pre.len();
        while i > 0 && charclass::is_space(pre[i - 1]) {
            i -= 1;
        }
        if i == 0 || pre[i - 1] != '.' {
            break;
        }
        if i >= 2 && pre[i - 2] == '.' {
            break;
        }
        if post.first() == Some(&':') {
            break;
        }

        pre.truncate(i);
        while post.first().map(|c| charclass::is_space(*c)).unwrap_or(false) {
            pre.push(post.remove(0));
        }

        let mut j = 0;
        while post.get(j).map(|c| !charclass::is_non_ident(*c)).unwrap_or(false) {
            j += 1;
        }
        if j == 0 {
            break;
        }
        let mut k = j;
        while post.get(k).map(|c| charclass::is_space(*c)).unwrap_or(false) {
            k += 1;
        }
        if post.get(k) != Some(&'.') || post.get(k + 1) == Some(&'.') {
            break;
        }

        let absorbed: Vec<char> = post.drain(0..=k).collect();
        pre.extend(absorbed);
    }
}

/// Result of forward-collecting the token text after the (adjusted) cursor: the clean text to
/// append for re-scanning, and how many real characters of `post` it consumed (which may exceed
/// the clean text's length, since alias-chain continuation skips interior spaces).
pub(crate) struct Collected {
    pub(crate) taken: Vec<char>,
    pub(crate) consumed: usize,
}

pub(crate) fn collect_forward(post: &[char]) -> Collected {
    if let Some(&c) = post.first() {
        if charclass::is_trailing_marker(c) {
            return Collected { taken: vec![c], consumed: 1 };
        }
    }

    let mut i = 0;
    while i < post.len() && !charclass::is_non_ident(post[i]) {
        i += 1;
    }

    if i > 0 {
        let mut taken: Vec<char> = post[..i].to_vec();
        let mut consumed = i;
        loop {
            let mut j = consumed;
            while post.get(j).map(|c| charclass::is_space(*c)).unwrap_or(false) {
                j += 1;
            }
            if post.get(j) != Some(&'.') {
                break;
            }
            let mut k = j + 1;
            while post.get(k).map(|c| charclass::is_space(*c)).unwrap_or(false) {
                k += 1;
            }
            let Some(&uc) = post.get(k) else { break };
            if !uc.is_ascii_uppercase() {
                break;
            }
            let seg_start = k;
            let mut m = k;
            while m < post.len() && !charclass::is_non_ident(post[m]) {
                m += 1;
            }
            taken.push('.');
            taken.extend(&post[seg_start..m]);
            consumed = m;
        }
        return Collected { taken, consumed };
    }

    let mut i = 0;
    while i < post.len() && charclass::is_operator_char(post[i]) {
        i += 1;
    }
    if i > 0 {
        return Collected { taken: post[..i].to_vec(), consumed: i };
    }

    if post.first() == Some(&'.') {
        return Collected { taken: vec!['.'], consumed: 1 };
    }

    Collected { taken: Vec::new(), consumed: 0 }
}

/// Translates a raw cursor-context result into the surround lattice, using the next non-space
/// character after the collected token as look-ahead.
pub(crate) fn translate(ctx: CursorContext, rest: &[char]) -> Option<CursorContext> {
    let next_non_space = rest.iter().copied().find(|c| !charclass::is_space(*c));

    match ctx {
        CursorContext::Alias(a) => Some(CursorContext::Alias(a)),
        CursorContext::Dot(inside, a) if !a.is_empty() => Some(CursorContext::Dot(inside, a)),
        CursorContext::LocalOrVar(a) => {
            if next_non_space == Some('(') {
                Some(CursorContext::LocalCall(a))
            } else if next_non_space == Some('/') {
                Some(CursorContext::LocalArity(a))
            } else if charclass::is_textual_operator(&a) {
                Some(CursorContext::Operator(a))
            } else if charclass::is_surround_keyword(&a) {
                None
            } else {
                Some(CursorContext::LocalOrVar(a))
            }
        }
        CursorContext::ModuleAttribute(a) if a.is_empty() => {
            Some(CursorContext::Operator("@".to_string()))
        }
        CursorContext::ModuleAttribute(a) => Some(CursorContext::ModuleAttribute(a)),
        CursorContext::UnquotedAtom(a) => Some(CursorContext::UnquotedAtom(a)),
        CursorContext::Operator(a) => Some(CursorContext::Operator(a)),
        _ => None,
    }
}

/// Runs the full surround pipeline for one `(pre, post)` split and returns the translated context
/// plus the span, measured as 0-based `(begin, end)` character offsets into the original line.
pub(crate) fn resolve(pre: Vec<char>, post: Vec<char>, oracle: &dyn TokenOracle) -> Option<(CursorContext, usize, usize)> {
    let Collected { taken, consumed } = collect_forward(&post);
    let mut combined = pre.clone();
    combined.extend(taken.iter().copied());

    let raw = recognizer::classify_chars(&combined, oracle);
    let rest = &post[consumed.min(post.len())..];
    let translated = translate(raw, rest)?;

    let core_len = translated.token_char_len();
    let combined_len = combined.len();
    if core_len > combined_len {
        return None;
    }
    let begin = combined_len - core_len;
    let end = begin + core_len;
    Some((translated, begin, end))
}
