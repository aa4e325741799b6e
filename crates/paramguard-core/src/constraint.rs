//! Constraints on groups of parameters.
//!
//! A [`Constraint`] is not tied to a particular list of parameters: it's parametrized only by
//! counts (e.g. "at least 2") and receives the parameters it has to check on every call. Bind it
//! to parameter names with [`BoundConstraint`](crate::BoundConstraint) or
//! [`Constraints`](crate::Constraints) to attach it to a command.
//!
//! Every constraint supports two checks:
//! - [`Constraint::check_consistency`] verifies the constraint can be satisfied at all by the
//!   declared parameters (e.g. their required-ness), independently of the values;
//! - [`Constraint::check_values`] verifies the values in a [`Context`] satisfy the constraint.

use std::{fmt, sync::Arc};

use crate::{
    context::Context,
    error::{Error, Result, UnsatisfiableConstraint},
    parameter::Parameter,
    predicate::OperatorKind,
};

pub mod operator;
pub mod primitives;
pub mod rephraser;
pub mod wrapper;

pub use self::{
    operator::{And, Or},
    primitives::{AllRequired, SetAtLeast, SetAtMost, SetBetween, SetExactly},
    rephraser::{ErrorFn, ErrorText, HelpFn, HelpText, Rephraser},
    wrapper::WrapperConstraint,
};

/// A constraint that can be checked against any group of parameters in a [`Context`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a constraint",
    label = "expected a constraint here",
    note = "if this is a bare `If`, call `.then(constraint)` on it first"
)]
pub trait Constraint: fmt::Debug + Send + Sync {
    /// A description of the constraint, shown in the command help.
    ///
    /// An empty string hides the constraint from the help.
    fn help(&self, ctx: &Context) -> Result<String>;

    /// Checks the constraint can be satisfied by `params` whatever their values.
    ///
    /// These checks only catch mistakes in the command declaration, so they can run before any
    /// parsing and can be disabled in production.
    fn check_consistency(&self, _params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        Ok(())
    }

    /// Checks the values `params` have in `ctx` satisfy the constraint.
    ///
    /// Must only be called once parsing is complete.
    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()>;

    /// Returns the operator kind and operands if this constraint is an n-ary operator.
    fn as_operator(&self) -> Option<(OperatorKind, &[Arc<dyn Constraint>])> {
        None
    }

    /// Checks the constraint on the named parameters.
    ///
    /// Runs [`check_consistency`](Constraint::check_consistency) first, unless consistency
    /// checks are disabled for the context, then [`check_values`](Constraint::check_values).
    fn check(&self, names: &[&str], ctx: &Context) -> Result<()> {
        if names.is_empty() {
            return Err(Error::InvalidArgument(
                "the list of parameters can't be empty".to_string(),
            ));
        }
        let params = ctx.parameters().get_many(names)?;
        if ctx.settings().must_check_consistency() {
            self.check_consistency(&params)?;
        }
        self.check_values(&params, ctx)
    }
}

impl<C: Constraint + ?Sized> Constraint for Arc<C> {
    fn help(&self, ctx: &Context) -> Result<String> {
        (**self).help(ctx)
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        (**self).check_consistency(params)
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        (**self).check_values(params, ctx)
    }

    fn as_operator(&self) -> Option<(OperatorKind, &[Arc<dyn Constraint>])> {
        (**self).as_operator()
    }
}

/// Combinators available on every constraint.
pub trait ConstraintExt: Constraint + Sized + 'static {
    /// A constraint satisfied if both this constraint and `other` are.
    fn and(self, other: impl Constraint + 'static) -> And {
        And::from_pair(Arc::new(self), Arc::new(other))
    }

    /// A constraint satisfied if this constraint or `other` is.
    fn or(self, other: impl Constraint + 'static) -> Or {
        Or::from_pair(Arc::new(self), Arc::new(other))
    }

    /// Overrides the help of this constraint.
    fn with_help(self, help: impl Into<String>) -> Rephraser {
        Rephraser::new(self).with_help(help)
    }

    /// Overrides the help of this constraint with a function of the context.
    fn with_help_fn<F>(self, help: F) -> Rephraser
    where
        F: Fn(&Context, &dyn Constraint) -> String + Send + Sync + 'static,
    {
        Rephraser::new(self).with_help_fn(help)
    }

    /// Overrides the error message of this constraint.
    ///
    /// The template may contain `{param_list}` and `{error}`; see [`ErrorText`].
    fn with_error(self, error: impl Into<String>) -> Rephraser {
        Rephraser::new(self).with_error(error)
    }

    /// Overrides the error message of this constraint with a function.
    fn with_error_fn<F>(self, error: F) -> Rephraser
    where
        F: Fn(&Context, &dyn Constraint, &[&Parameter]) -> String + Send + Sync + 'static,
    {
        Rephraser::new(self).with_error_fn(error)
    }

    /// Hides this constraint from the command help. It's still checked.
    fn hidden(self) -> Rephraser {
        Rephraser::new(self).with_help("")
    }

    /// Type-erases this constraint.
    fn shared(self) -> Arc<dyn Constraint> {
        Arc::new(self)
    }
}

impl<C: Constraint + 'static> ConstraintExt for C {}

/// Satisfied if all the parameters are set.
pub fn require_all() -> AllRequired {
    AllRequired
}

/// Satisfied if at least one of the parameters is set.
pub fn require_any() -> SetAtLeast {
    SetAtLeast::new(1)
}

/// Satisfied if none of the parameters is set.
pub fn all_unset() -> SetExactly {
    SetExactly::new(0)
}

/// Satisfied if either all or none of the parameters are set.
pub fn all_or_none() -> Rephraser {
    require_all()
        .or(all_unset())
        .with_help("provide all or none")
        .with_error(
            "the following parameters should be provided together (or none of them should be \
             provided): {param_list}",
        )
}

/// Satisfied if at most one of the parameters is set.
pub fn mutually_exclusive() -> Rephraser {
    SetAtMost::new(1)
        .with_help("mutually exclusive")
        .with_error("the following parameters are mutually exclusive: {param_list}")
}

/// Satisfied if exactly one of the parameters is set.
pub fn required_mutually_exclusive() -> SetExactly {
    SetExactly::new(1)
}

/// Joins the help of the operands, parenthesizing operators of a different kind.
pub(crate) fn join_help(
    operands: &[Arc<dyn Constraint>],
    kind: OperatorKind,
    ctx: &Context,
) -> Result<String> {
    let sep = match kind {
        OperatorKind::And => " and ",
        OperatorKind::Or => " or ",
    };
    let parts = operands
        .iter()
        .map(|operand| -> Result<String> {
            let help = operand.help(ctx)?;
            Ok(match operand.as_operator() {
                Some((inner, _)) if inner != kind => format!("({help})"),
                _ => help,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join(sep))
}
