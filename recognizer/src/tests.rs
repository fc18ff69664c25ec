use crate::oracle::testing::StubOracle;
use crate::types::InsideDot;
use crate::{CursorContext, cursor_context};

fn ctx(fragment: &str) -> CursorContext {
    cursor_context(fragment, &StubOracle::default())
}

#[test]
fn concrete_scenarios_table() {
    let cases: &[(&str, CursorContext)] = &[
        ("hello_wor", CursorContext::LocalOrVar("hello_wor".to_string())),
        ("Hello.Wor", CursorContext::Alias("Hello.Wor".to_string())),
        (
            "Hello.wor",
            CursorContext::Dot(Box::new(InsideDot::Alias("Hello".to_string())), "wor".to_string()),
        ),
        ("@foo", CursorContext::ModuleAttribute("foo".to_string())),
        (":foo", CursorContext::UnquotedAtom("foo".to_string())),
        ("foo/", CursorContext::LocalArity("foo".to_string())),
        ("foo(", CursorContext::LocalCall("foo".to_string())),
        ("foo ", CursorContext::LocalCall("foo".to_string())),
        ("when ", CursorContext::OperatorCall("when".to_string())),
        ("", CursorContext::Expr),
        ("(", CursorContext::Expr),
        (".", CursorContext::None),
    ];

    for (input, expected) in cases {
        assert_eq!(&ctx(input), expected, "cursor_context({input:?})");
    }
}

#[test]
fn empty_fragment_is_expr() {
    assert_eq!(ctx(""), CursorContext::Expr);
}

#[test]
fn identifier_round_trips_as_local_or_var() {
    for s in ["x", "foo_bar", "a1", "valid?", "valid!"] {
        assert_eq!(ctx(s), CursorContext::LocalOrVar(s.to_string()));
    }
}

#[test]
fn textual_operator_alone_is_not_promoted() {
    // call_op? is false at the top level without a trailing space/paren/slash, so a bare
    // textual operator word reads as a local/var, not an operator.
    assert_eq!(ctx("when"), CursorContext::LocalOrVar("when".to_string()));
}

#[test]
fn trailing_slash_is_always_some_arity_family_or_none() {
    for s in ["foo/", "Hello.foo/", "+/", "x.y/"] {
        let result = ctx(s);
        assert!(
            result.is_arity() || matches!(result, CursorContext::None),
            "{s:?} => {result:?}"
        );
    }
}

#[test]
fn trailing_paren_is_always_some_call_family_or_expr_or_none() {
    for s in ["foo(", "Hello.foo(", "+(", "when ("] {
        let result = ctx(s);
        assert!(
            result.is_call() || matches!(result, CursorContext::Expr | CursorContext::None),
            "{s:?} => {result:?}"
        );
    }
}

#[test]
fn last_line_only_is_considered() {
    assert_eq!(ctx("foo\nbar"), ctx("bar"));
    assert_eq!(ctx("foo\nHello.bar"), ctx("Hello.bar"));
}

#[test]
fn module_attribute_alone_is_empty() {
    assert_eq!(ctx("@"), CursorContext::ModuleAttribute(String::new()));
}

#[test]
fn embedded_at_is_never_an_identifier() {
    assert_eq!(ctx("fo@o"), CursorContext::None);
}

#[test]
fn interior_question_mark_is_illegal() {
    assert_eq!(ctx("a?b"), CursorContext::None);
}

#[test]
fn double_colon_is_not_an_atom_starter() {
    // `::` is never an unquoted-atom starter; `foo` still resolves as a plain local/var, just
    // not as `UnquotedAtom("foo")`.
    assert_eq!(ctx("::foo"), CursorContext::LocalOrVar("foo".to_string()));
}

#[test]
fn nested_alias_chain() {
    assert_eq!(ctx("A.B.C"), CursorContext::Alias("A.B.C".to_string()));
}

#[test]
fn nested_alias_requires_alias_on_the_left() {
    assert_eq!(ctx("foo.Bar"), CursorContext::None);
}

#[test]
fn dot_chain_var_is_rewritten_to_var_inside_dot() {
    assert_eq!(
        ctx("foo.bar"),
        CursorContext::Dot(Box::new(InsideDot::Var("foo".to_string())), "bar".to_string())
    );
}

#[test]
fn punctuation_only_literals() {
    // Reachable directly at the top level: the last char is `.`, not `:`, so dispatch's
    // dedicated `:` handling never intercepts them.
    assert_eq!(ctx("..."), CursorContext::LocalOrVar("...".to_string()));
    assert_eq!(ctx(".."), CursorContext::Operator("..".to_string()));
}

#[test]
fn colon_terminated_literals_need_a_single_stripped_space() {
    // A bare trailing `:` is only ever `Expr` or an empty atom at the top level (dispatch's own
    // `:` case). The `.:`/`..:` literals inside `classify` never fire there; they only fire when
    // `classify` is entered directly, e.g. as the left-hand side of a dot chain.
    assert_eq!(ctx(".:"), CursorContext::Expr);
    assert_eq!(ctx("..:"), CursorContext::Expr);
    assert_eq!(
        ctx(".:.bar"),
        CursorContext::Dot(Box::new(InsideDot::UnquotedAtom(".".to_string())), "bar".to_string())
    );
}

#[test]
fn non_extending_tokens_are_expr() {
    for s in ["x =>", "x ->", "x <<"] {
        assert_eq!(ctx(s), CursorContext::Expr, "{s:?}");
    }
}

#[test]
fn starter_punctuation_is_expr() {
    for s in ["foo,", "foo[", "foo{", "foo;"] {
        assert_eq!(ctx(s), CursorContext::Expr, "{s:?}");
    }
}

#[test]
fn plain_operator_recognized() {
    assert_eq!(ctx("+"), CursorContext::Operator("+".to_string()));
    assert_eq!(ctx("x +"), CursorContext::Operator("+".to_string()));
}
