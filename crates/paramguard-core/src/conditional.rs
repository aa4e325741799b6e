//! Constraints checked only when a condition holds.
//!
//! ```
//! use paramguard_core::{If, constraint::{all_unset, require_all}};
//!
//! // --b and --c are required if --a is set, forbidden otherwise.
//! let constraint = If::new("a").then(require_all()).else_(all_unset());
//! # let _ = constraint;
//! ```

use std::sync::Arc;

use crate::{
    constraint::Constraint,
    context::Context,
    error::{Error, Result, UnsatisfiableConstraint},
    parameter::Parameter,
    predicate::Predicate,
};

/// The condition of a conditional constraint.
///
/// An `If` alone is not a constraint: call [`If::then`] to attach the constraint to check when
/// the condition holds.
#[derive(Debug, Clone)]
pub struct If {
    condition: Predicate,
}

impl If {
    /// Creates the condition. Accepts a parameter name (true if it's set) or a [`Predicate`].
    pub fn new(condition: impl Into<Predicate>) -> Self {
        Self {
            condition: condition.into(),
        }
    }

    /// Creates a condition that holds when all the named parameters are set.
    ///
    /// Fails with [`Error::InvalidArgument`] if `names` is empty.
    pub fn all_set<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self> {
        Predicate::all_set(names).map(Self::new)
    }

    /// Checks `constraint` when the condition is true.
    pub fn then(self, constraint: impl Constraint + 'static) -> IfThen {
        IfThen {
            condition: self.condition,
            then: Arc::new(constraint),
        }
    }
}

/// Checks a constraint only if a condition is true.
#[derive(Debug, Clone)]
pub struct IfThen {
    condition: Predicate,
    then: Arc<dyn Constraint>,
}

impl IfThen {
    /// Checks `constraint` when the condition is false.
    pub fn else_(self, constraint: impl Constraint + 'static) -> IfThenElse {
        IfThenElse {
            if_then: self,
            otherwise: Arc::new(constraint),
        }
    }

    /// The condition.
    pub fn condition(&self) -> &Predicate {
        &self.condition
    }

    /// Checks the "then" branch if the condition holds; returns whether it did.
    fn check_triggered(&self, params: &[&Parameter], ctx: &Context) -> Result<bool> {
        if !self.condition.evaluate(ctx)? {
            return Ok(false);
        }
        match self.then.check_values(params, ctx) {
            Err(Error::Violated(err)) => {
                let condition = self.condition.description(ctx)?;
                let message = format!("when {condition}, {}", err.message());
                Err(err.rephrase(message).into())
            }
            other => other.map(|()| true),
        }
    }
}

impl Constraint for IfThen {
    fn help(&self, ctx: &Context) -> Result<String> {
        Ok(format!(
            "{} if {}",
            self.then.help(ctx)?,
            self.condition.description(ctx)?
        ))
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        self.then.check_consistency(params)
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        self.check_triggered(params, ctx).map(|_| ())
    }
}

/// Checks a constraint or another depending on a condition.
#[derive(Debug, Clone)]
pub struct IfThenElse {
    if_then: IfThen,
    otherwise: Arc<dyn Constraint>,
}

impl IfThenElse {
    /// The condition.
    pub fn condition(&self) -> &Predicate {
        self.if_then.condition()
    }
}

impl Constraint for IfThenElse {
    fn help(&self, ctx: &Context) -> Result<String> {
        Ok(format!(
            "{}, otherwise {}",
            self.if_then.help(ctx)?,
            self.otherwise.help(ctx)?
        ))
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        self.if_then.check_consistency(params)?;
        self.otherwise.check_consistency(params)
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        if self.if_then.check_triggered(params, ctx)? {
            return Ok(());
        }
        match self.otherwise.check_values(params, ctx) {
            Err(Error::Violated(err)) => {
                let message = format!(
                    "when {}, {}",
                    self.if_then.condition.negated_description(ctx)?,
                    err.message()
                );
                Err(err.rephrase(message).into())
            }
            other => other,
        }
    }
}
