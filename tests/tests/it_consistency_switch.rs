//! Integration tests for the process-wide consistency checks switch.
//!
//! The switch is global, so these tests live in their own test binary and run sequentially.

use std::sync::Mutex;

use paramguard::{
    Constraint, Context, Error, Parameter, Parameters, Settings, consistency_checks_enabled,
    constraint::SetAtMost, set_consistency_checks,
};

static SWITCH: Mutex<()> = Mutex::new(());

fn context() -> Context {
    let params = Parameters::new("cmd")
        .param(Parameter::option("a").required(true))
        .param(Parameter::option("b").required(true));
    Context::new(params.into())
        .with_value("a", "x")
        .with_value("b", "y")
}

#[test]
fn disabled_switch_skips_consistency_checks() {
    let _guard = SWITCH.lock().expect("lock should not be poisoned");

    //* Given
    let ctx = context();
    set_consistency_checks(false);

    //* When
    let result = SetAtMost::new(1).check(&["a", "b"], &ctx);
    set_consistency_checks(true);

    //* Then
    assert!(matches!(result, Err(Error::Violated(_))));
}

#[test]
fn enabled_switch_runs_consistency_checks() {
    let _guard = SWITCH.lock().expect("lock should not be poisoned");

    //* Given
    let ctx = context();
    set_consistency_checks(true);

    //* When
    let result = SetAtMost::new(1).check(&["a", "b"], &ctx);

    //* Then
    assert!(consistency_checks_enabled());
    assert!(matches!(result, Err(Error::Unsatisfiable(_))));
}

#[test]
fn context_setting_overrides_switch() {
    let _guard = SWITCH.lock().expect("lock should not be poisoned");

    //* Given
    set_consistency_checks(false);
    let ctx = context().with_settings(Settings::default().check_consistency(true));

    //* When
    let result = SetAtMost::new(1).check(&["a", "b"], &ctx);
    set_consistency_checks(true);

    //* Then
    assert!(matches!(result, Err(Error::Unsatisfiable(_))));
}
