use super::*;
use recognizer::InsideDot;

fn pos(line: usize, col: usize) -> Position {
    Position { line, col }
}

#[test]
fn surround_on_a_plain_identifier() {
    let record = surround_context("foo", pos(1, 1), SurroundOptions).unwrap().unwrap();
    assert_eq!(record.context, CursorContext::LocalOrVar("foo".to_string()));
    assert_eq!(record.begin, pos(1, 1));
    assert_eq!(record.end, pos(1, 4));
}

#[test]
fn surround_past_the_end_of_the_line_is_none() {
    assert_eq!(surround_context("foo", pos(1, 4), SurroundOptions).unwrap(), None);
}

#[test]
fn surround_on_a_bare_module_attribute_sigil_reads_as_an_operator() {
    let record = surround_context("@", pos(1, 1), SurroundOptions).unwrap().unwrap();
    assert_eq!(record.context, CursorContext::Operator("@".to_string()));
    assert_eq!(record.begin, pos(1, 1));
    assert_eq!(record.end, pos(1, 2));
}

#[test]
fn surround_inside_a_nested_alias_dot_chain() {
    let record = surround_context("A.B.c", pos(1, 3), SurroundOptions).unwrap().unwrap();
    assert_eq!(
        record.context,
        CursorContext::Dot(Box::new(InsideDot::Alias("A.B".to_string())), "c".to_string())
    );
    assert_eq!(record.begin, pos(1, 5));
    assert_eq!(record.end, pos(1, 6));
}

#[test]
fn surround_is_idempotent_at_the_token_s_own_begin_column() {
    let cases: &[(&str, Position)] = &[("foo", pos(1, 1)), ("@", pos(1, 1)), ("A.B.c", pos(1, 3))];

    for (fragment, query) in cases {
        let first = surround_context(fragment, *query, SurroundOptions).unwrap().unwrap();
        let second = surround_context(fragment, first.begin, SurroundOptions).unwrap().unwrap();
        assert_eq!(first, second, "re-querying {fragment:?} at its own begin column");
    }
}

#[test]
fn surround_on_a_call_suffixed_local() {
    let record = surround_context("foo(bar)", pos(1, 1), SurroundOptions).unwrap().unwrap();
    assert_eq!(record.context, CursorContext::LocalCall("foo".to_string()));
    assert_eq!(record.begin, pos(1, 1));
    assert_eq!(record.end, pos(1, 4));
}

#[test]
fn surround_keyword_is_filtered_out() {
    assert_eq!(surround_context("do", pos(1, 1), SurroundOptions).unwrap(), None);
}

#[test]
fn non_positive_coordinates_are_rejected() {
    assert_eq!(
        surround_context("foo", pos(0, 1), SurroundOptions),
        Err(ContextError::NonPositiveCoordinate { line: 0, column: 1 })
    );
    assert_eq!(
        surround_context("foo", pos(1, 0), SurroundOptions),
        Err(ContextError::NonPositiveCoordinate { line: 1, column: 0 })
    );
}

#[test]
fn out_of_range_line_is_none() {
    assert_eq!(surround_context("foo", pos(2, 1), SurroundOptions).unwrap(), None);
}

#[test]
fn cursor_context_delegates_to_the_recognizer() {
    assert_eq!(cursor_context("foo", CursorOptions), CursorContext::LocalOrVar("foo".to_string()));
    assert_eq!(cursor_context("", CursorOptions), CursorContext::Expr);
}
