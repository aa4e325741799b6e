//! Integration tests for conditional constraints and predicate descriptions.

use paramguard::{
    Constraint, If, Predicate,
    constraint::{all_unset, require_all},
};
use testlib::{
    fakes::{FakeConstraint, FakePredicate},
    fixtures::{options_context, sample_context},
};

fn fake(description: &str) -> Predicate {
    Predicate::custom(FakePredicate::new(true, description))
}

#[test]
fn predicate_descriptions_parenthesize_nested_operators() {
    //* Given
    let ctx = options_context(&["a"]);
    let [a, b, c, d] = ["A", "B", "C", "D"].map(fake);

    //* When
    let or_of_and = a.clone().or(b.clone().and(c.clone()));
    let and_or = a.clone().and(b.clone()).or(c.clone());
    let and_of_ors = a.or(b).and(c.or(d));

    //* Then
    assert_eq!(or_of_and.description(&ctx), Ok("A or (B and C)".to_string()));
    assert_eq!(and_or.description(&ctx), Ok("(A and B) or C".to_string()));
    assert_eq!(
        and_of_ors.description(&ctx),
        Ok("(A or B) and (C or D)".to_string())
    );
}

#[test]
fn triggered_condition_prefixes_violation() {
    //* Given
    let ctx = options_context(&["a", "b"]);
    let constraint = If::new(Predicate::custom(FakePredicate::new(true, "the moon is full")))
        .then(FakeConstraint::violated().error_message("msg"));

    //* When
    let err = constraint
        .check(&["a", "b"], &ctx)
        .expect_err("the condition holds");

    //* Then
    assert_eq!(err.to_string(), "when the moon is full, msg");
}

#[test]
fn untriggered_condition_skips_then_branch() {
    //* Given
    let ctx = options_context(&["a", "b"]);
    let then = FakeConstraint::violated();
    let never = Predicate::custom(FakePredicate::new(false, "never"));
    let constraint = If::new(never).then(then.clone());

    //* When
    let result = constraint.check(&["a", "b"], &ctx);

    //* Then
    assert_eq!(result, Ok(()));
    assert!(then.checked().is_empty());
}

#[test]
fn else_branch_violation_uses_negated_description() {
    //* Given
    let ctx = options_context(&["a", "b"]);
    let constraint = If::new(Predicate::custom(FakePredicate::new(false, "it rains")))
        .then(FakeConstraint::satisfied())
        .else_(FakeConstraint::violated().error_message("msg"));

    //* When
    let err = constraint
        .check(&["a", "b"], &ctx)
        .expect_err("the else branch fails");

    //* Then
    assert_eq!(err.to_string(), "when not it rains, msg");
}

#[test]
fn conditional_on_sample_context_uses_labels() {
    //* Given
    let ctx = sample_context();
    let constraint = If::new(Predicate::equal("str_opt", "bar"))
        .then(require_all())
        .else_(all_unset());

    //* When
    let help = constraint.help(&ctx);
    let err = constraint
        .check(&["int_opt", "def1"], &ctx)
        .expect_err("--int-opt is not set");

    //* Then
    assert_eq!(
        help,
        Ok(r#"all required if --str-opt="bar", otherwise all forbidden"#.to_string())
    );
    assert_eq!(err.to_string(), r#"when --str-opt="bar", --int-opt is required"#);
}

#[test]
fn condition_on_several_parameters() {
    //* Given
    let ctx = sample_context();
    let condition = Predicate::all_set(["str_opt", "flag"]).expect("names given");
    let constraint = If::new(condition).then(require_all());

    //* When
    let err = constraint
        .check(&["tuple"], &ctx)
        .expect_err("--tuple is not set");

    //* Then
    insta::assert_snapshot!(err, @"when --str-opt and --flag are both set, --tuple is required");
}
