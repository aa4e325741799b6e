//! Integration tests for constraint composition, consistency and satisfaction.

use paramguard::{
    Constraint, ConstraintExt, Error, Parameter,
    constraint::{
        SetAtLeast, SetAtMost, SetExactly, all_or_none, all_unset, mutually_exclusive,
        require_any, required_mutually_exclusive,
    },
};
use testlib::{
    fakes::FakeConstraint,
    fixtures::{options_context, sample_context},
};

#[test]
fn set_at_most_on_one_required_parameter_is_consistent() {
    //* Given
    let params = [
        Parameter::argument("a").required(true),
        Parameter::flag("b"),
        Parameter::option("c").arity(paramguard::Arity::Multiple),
    ];
    let refs = [&params[0], &params[1]];

    //* When
    let result = SetAtMost::new(1).check_consistency(&refs);

    //* Then
    assert_eq!(result, Ok(()));
}

#[test]
fn set_at_most_on_two_required_parameters_is_inconsistent() {
    //* Given
    let params = [
        Parameter::argument("a").required(true),
        Parameter::flag("b").required(true),
    ];
    let refs = params.iter().collect::<Vec<_>>();

    //* When
    let err = SetAtMost::new(1)
        .check_consistency(&refs)
        .expect_err("two required parameters can't be at most one");

    //* Then
    assert_eq!(
        err.to_string(),
        "the constraint SetAtMost(1) defined on parameters [A, --b] cannot be satisfied \
         because 2 of the parameters are required"
    );
}

#[test]
fn set_at_least_on_too_few_parameters_is_inconsistent() {
    //* Given
    let params = [Parameter::option("a"), Parameter::option("b")];
    let refs = params.iter().collect::<Vec<_>>();

    //* Then
    assert!(SetAtLeast::new(2).check_consistency(&refs).is_ok());
    assert!(SetAtLeast::new(3).check_consistency(&refs).is_err());
}

#[test]
fn set_exactly_zero_behaves_like_all_unset() {
    //* Given
    let ctx = sample_context();
    let unset = ["arg2", "int_opt", "mul2"];
    let mixed = ["arg2", "str_opt"];

    //* Then
    assert_eq!(
        SetExactly::new(0).check(&unset, &ctx).is_ok(),
        all_unset().check(&unset, &ctx).is_ok()
    );
    assert!(SetExactly::new(0).check(&mixed, &ctx).is_err());
    assert!(all_unset().check(&mixed, &ctx).is_err());
}

#[test]
fn set_exactly_fails_with_more_or_fewer_set() {
    //* Given
    let ctx = sample_context();

    //* Then
    assert!(SetExactly::new(2).check(&["arg1", "str_opt", "int_opt"], &ctx).is_ok());
    assert!(SetExactly::new(2).check(&["arg1", "int_opt", "tuple"], &ctx).is_err());
    assert!(SetExactly::new(2).check(&["arg1", "str_opt", "flag"], &ctx).is_err());
}

#[test]
fn or_succeeds_if_any_operand_succeeds() {
    //* Given
    let ctx = options_context(&["a", "b"]);
    let first = FakeConstraint::violated();
    let second = FakeConstraint::satisfied();
    let constraint = first.clone().or(second.clone());

    //* When
    let result = constraint.check(&["a", "b"], &ctx);

    //* Then
    assert_eq!(result, Ok(()));
    assert_eq!(first.checked().len(), 1);
    assert_eq!(second.checked().len(), 1);
}

#[test]
fn or_failure_message_comes_from_its_help() {
    //* Given
    let ctx = options_context(&["a", "b"]);
    let constraint = FakeConstraint::violated()
        .help_text("first")
        .error_message("first error")
        .or(FakeConstraint::violated()
            .help_text("second")
            .error_message("second error"));

    //* When
    let err = constraint
        .check(&["a", "b"], &ctx)
        .expect_err("both operands fail");

    //* Then
    assert_eq!(
        err.to_string(),
        "the following constraint on parameters [--a, --b] was not satisfied: first or second"
    );
}

#[test]
fn and_stops_at_first_violation() {
    //* Given
    let ctx = options_context(&["a", "b"]);
    let last = FakeConstraint::satisfied();
    let constraint = FakeConstraint::satisfied()
        .and(FakeConstraint::violated().error_message("second error"))
        .and(last.clone());

    //* When
    let err = constraint
        .check(&["a", "b"], &ctx)
        .expect_err("the second operand fails");

    //* Then
    assert_eq!(err.to_string(), "second error");
    assert!(last.checked().is_empty());
}

#[test]
fn operators_flatten_same_kind_and_parenthesize_other_kind() {
    //* Given
    let ctx = options_context(&["a"]);
    let fake = |help: &str| FakeConstraint::satisfied().help_text(help);

    //* When
    let flat = fake("A").and(fake("B")).and(fake("C").and(fake("D")));
    let nested = fake("A").and(fake("B")).and(fake("C").or(fake("D")));

    //* Then
    assert_eq!(flat.operands().len(), 4);
    assert_eq!(flat.help(&ctx), Ok("A and B and C and D".to_string()));
    assert_eq!(nested.operands().len(), 3);
    assert_eq!(nested.help(&ctx), Ok("A and B and (C or D)".to_string()));
}

#[test]
fn named_constraints_report_their_parameters() {
    //* Given
    let ctx = sample_context();

    //* When
    let exclusive = mutually_exclusive()
        .check(&["str_opt", "flag", "int_opt"], &ctx)
        .expect_err("two parameters are set");
    let all_or_nothing = all_or_none()
        .check(&["str_opt", "int_opt"], &ctx)
        .expect_err("only one parameter is set");

    //* Then
    assert_eq!(
        exclusive.to_string(),
        "the following parameters are mutually exclusive: --str-opt, --flag, --int-opt"
    );
    assert_eq!(
        all_or_nothing.to_string(),
        "the following parameters should be provided together (or none of them should be \
         provided): --str-opt, --int-opt"
    );
}

#[test]
fn required_mutually_exclusive_requires_exactly_one() {
    //* Given
    let ctx = sample_context();

    //* Then
    assert!(required_mutually_exclusive().check(&["str_opt", "int_opt"], &ctx).is_ok());
    assert!(required_mutually_exclusive().check(&["int_opt", "tuple"], &ctx).is_err());
    assert!(require_any().check(&["int_opt", "tuple"], &ctx).is_err());
}

#[test]
fn unknown_parameter_name_is_reported() {
    //* Given
    let ctx = sample_context();

    //* When
    let result = require_any().check(&["str_opt", "nope"], &ctx);

    //* Then
    assert_eq!(result, Err(Error::UnknownParameter("nope".to_string())));
}

#[test]
fn empty_parameter_list_is_rejected() {
    //* Given
    let ctx = sample_context();

    //* When
    let result = require_any().check(&[], &ctx);

    //* Then
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}
