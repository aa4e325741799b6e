//! Integration tests for the rule deciding whether a parameter is set.

use paramguard::{Constraint, Parameter, constraint::require_all};
use serde_json::json;
use testlib::fixtures::{sample_context, sample_parameters};

#[test]
fn is_set_on_sample_context_follows_parameter_kind() {
    //* Given
    let ctx = sample_context();

    //* When
    let set = sample_parameters()
        .iter()
        .filter(|param| ctx.is_set(&param.name).expect("parameter is declared"))
        .map(|param| param.name.clone())
        .collect::<Vec<_>>();

    //* Then
    assert_eq!(
        set,
        ["arg1", "str_opt", "bool_opt", "flag", "mul1", "def1", "def2"]
    );
}

#[test]
fn boolean_option_set_to_false_is_set_but_flag_is_not() {
    //* Given
    let option = Parameter::option("opt");
    let flag = Parameter::flag("flag");

    //* Then
    assert!(option.is_set(&json!(false)));
    assert!(!flag.is_set(&json!(false)));
    assert!(flag.is_set(&json!(true)));
}

#[test]
fn empty_multiple_parameter_is_unset() {
    //* Given
    let ctx = sample_context();

    //* When
    let err = require_all()
        .check(&["mul1", "mul2", "tuple"], &ctx)
        .expect_err("mul2 and tuple are empty");

    //* Then
    insta::assert_snapshot!(err, @r"
    the following parameters are required:
      --mul2
      --tuple
    ");
}
