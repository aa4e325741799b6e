//! Errors raised while checking constraints.
//!
//! Two kinds of failure are kept strictly apart:
//! - [`UnsatisfiableConstraint`]: the constraint can never hold for the declared parameters.
//!   This is a mistake of the CLI author and is not meant to be shown to end users.
//! - [`ConstraintViolated`]: the values given on the command line break the constraint.
//!   This is a usage error, reported to the user like any other parsing error.

use crate::format::join_labels;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// All the ways a constraint check can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The parsed values do not satisfy a constraint.
    #[error(transparent)]
    Violated(#[from] ConstraintViolated),

    /// A constraint cannot be satisfied by the declared parameters.
    #[error(transparent)]
    Unsatisfiable(#[from] UnsatisfiableConstraint),

    /// A constraint or predicate refers to a parameter the command doesn't declare.
    #[error("there's no CLI parameter named '{0}'")]
    UnknownParameter(String),

    /// A constraint or predicate was built with invalid arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a user-facing usage error.
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violated(_))
    }
}

/// The values assigned to a group of parameters don't satisfy a constraint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ConstraintViolated {
    message: String,
    params: Vec<String>,
}

impl ConstraintViolated {
    /// Creates a new violation with the given message for the parameters with the given labels.
    pub fn new(message: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            message: message.into(),
            params,
        }
    }

    /// Creates the generic violation used when no better message is available.
    pub fn with_help(help: &str, params: Vec<String>) -> Self {
        let message = format!(
            "the following constraint on parameters [{}] was not satisfied: {}",
            join_labels(&params),
            help
        );
        Self::new(message, params)
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The labels of the constrained parameters.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns a copy of this error with a different message.
    pub fn rephrase(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            params: self.params,
        }
    }
}

/// A constraint can't be satisfied by a group of parameters independently of their values,
/// e.g. "at most 1" over two required parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "the constraint {constraint} defined on parameters [{}] cannot be satisfied because {reason}",
    join_labels(.params)
)]
pub struct UnsatisfiableConstraint {
    constraint: String,
    params: Vec<String>,
    reason: String,
}

impl UnsatisfiableConstraint {
    /// Creates a new error; `constraint` is a short representation of the offending constraint.
    pub fn new(
        constraint: impl Into<String>,
        params: Vec<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            constraint: constraint.into(),
            params,
            reason: reason.into(),
        }
    }

    /// The representation of the offending constraint.
    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    /// The labels of the parameters the constraint was applied on.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Why the constraint can't be satisfied.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Re-attributes this error to a wrapping constraint, keeping the reason.
    pub fn attribute_to(self, constraint: impl Into<String>) -> Self {
        Self {
            constraint: constraint.into(),
            ..self
        }
    }
}
