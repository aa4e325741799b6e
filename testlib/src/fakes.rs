//! Test doubles for constraints and predicates.

use std::sync::{Arc, Mutex};

use paramguard::{
    Condition, Constraint, ConstraintViolated, Context, Parameter, Result, UnsatisfiableConstraint,
    parameter::labels,
};

/// A constraint with configurable outcomes that records the parameters it was checked on.
#[derive(Debug, Clone)]
pub struct FakeConstraint {
    help: String,
    consistent: bool,
    satisfied: bool,
    error: String,
    checked: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeConstraint {
    /// A consistent constraint that is always satisfied.
    pub fn satisfied() -> Self {
        Self {
            help: "fake help".to_string(),
            consistent: true,
            satisfied: true,
            error: "__error__".to_string(),
            checked: Arc::default(),
        }
    }

    /// A consistent constraint that is never satisfied.
    pub fn violated() -> Self {
        Self {
            satisfied: false,
            ..Self::satisfied()
        }
    }

    /// A constraint whose consistency check always fails.
    pub fn inconsistent() -> Self {
        Self {
            consistent: false,
            ..Self::satisfied()
        }
    }

    /// Sets the help text.
    pub fn help_text(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the message of the violation.
    pub fn error_message(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    /// The names of the parameters of every `check_values` call, in order.
    pub fn checked(&self) -> Vec<Vec<String>> {
        self.checked
            .lock()
            .expect("lock should not be poisoned")
            .clone()
    }
}

impl Constraint for FakeConstraint {
    fn help(&self, _ctx: &Context) -> Result<String> {
        Ok(self.help.clone())
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        if self.consistent {
            return Ok(());
        }
        Err(UnsatisfiableConstraint::new(
            "FakeConstraint",
            labels(params),
            "it's fake",
        ))
    }

    fn check_values(&self, params: &[&Parameter], _ctx: &Context) -> Result<()> {
        self.checked
            .lock()
            .expect("lock should not be poisoned")
            .push(params.iter().map(|param| param.name.clone()).collect());
        if self.satisfied {
            return Ok(());
        }
        Err(ConstraintViolated::new(self.error.clone(), labels(params)).into())
    }
}

/// A predicate with a fixed value and description.
#[derive(Debug, Clone)]
pub struct FakePredicate {
    value: bool,
    description: String,
}

impl FakePredicate {
    pub fn new(value: bool, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

impl Condition for FakePredicate {
    fn description(&self, _ctx: &Context) -> Result<String> {
        Ok(self.description.clone())
    }

    fn negated_description(&self, _ctx: &Context) -> Result<String> {
        Ok(format!("not {}", self.description))
    }

    fn evaluate(&self, _ctx: &Context) -> Result<bool> {
        Ok(self.value)
    }
}
