//! Character alphabet classes used by the reverse scanner.
//!
//! Each class is a closed set of ASCII characters; classification of a `char` is a cheap
//! branch, never an allocation. Non-ASCII scalars fall through to the "identifier" default
//! wherever a class doesn't claim them explicitly.

/// `\ < > + - * / : = | & ~ ^ % !`
pub const OPERATORS: &[char] = &[
    '\\', '<', '>', '+', '-', '*', '/', ':', '=', '|', '&', '~', '^', '%', '!',
];

/// `, ( [ { ;`
pub const STARTER_PUNCT: &[char] = &[',', '(', '[', '{', ';'];

/// `) ] } " ' . $`
pub const NON_STARTER_PUNCT: &[char] = &[')', ']', '}', '"', '\'', '.', '$'];

/// `?` and `!`, permitted exactly once as the last character of an identifier.
pub const TRAILING_IDENT: &[char] = &['?', '!'];

/// Reserved identifier-like words that behave syntactically as operators.
pub const TEXTUAL_OPERATORS: &[&str] = &["when", "not", "and", "or", "in"];

/// Keywords that surround mode never reports as a bare `local_or_var`.
pub const SURROUND_KEYWORDS: &[&str] = &["do", "end", "after", "else", "catch", "rescue"];

pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_operator_char(c: char) -> bool {
    OPERATORS.contains(&c)
}

pub fn is_starter_punct(c: char) -> bool {
    STARTER_PUNCT.contains(&c)
}

pub fn is_non_starter_punct(c: char) -> bool {
    NON_STARTER_PUNCT.contains(&c)
}

pub fn is_trailing_marker(c: char) -> bool {
    TRAILING_IDENT.contains(&c)
}

/// `NON_IDENT = TRAILING_IDENT ∪ OPERATORS ∪ STARTER_PUNCT ∪ NON_STARTER_PUNCT ∪ SPACE`
///
/// Anything outside this set is a legal (non-trailing) identifier character, including every
/// non-ASCII scalar value.
pub fn is_non_ident(c: char) -> bool {
    is_trailing_marker(c)
        || is_operator_char(c)
        || is_starter_punct(c)
        || is_non_starter_punct(c)
        || is_space(c)
}

pub fn is_textual_operator(word: &str) -> bool {
    TEXTUAL_OPERATORS.contains(&word)
}

pub fn is_surround_keyword(word: &str) -> bool {
    SURROUND_KEYWORDS.contains(&word)
}
