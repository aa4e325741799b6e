//! # paramguard-core
//!
//! Declarative constraints on groups of command-line parameters.
//!
//! This crate provides the parsing-framework independent part of paramguard:
//! - a [`Parameter`] model with the rule deciding whether a parameter is "set";
//! - a [`Context`] holding the parsed values of one invocation;
//! - composable [`Predicate`]s and [`Constraint`]s, with two-phase checking (consistency of the
//!   declarations, then satisfaction by the values);
//! - conditional constraints ([`If`]);
//! - a [`Constraints`] registry binding constraints to parameter names.
//!
//! ```
//! use std::sync::Arc;
//!
//! use paramguard_core::{Context, Parameter, Parameters};
//! use paramguard_core::constraint::{Constraint, mutually_exclusive};
//!
//! let params = Arc::new(
//!     Parameters::new("convert")
//!         .param(Parameter::flag("json"))
//!         .param(Parameter::flag("yaml")),
//! );
//! let ctx = Context::new(params)
//!     .with_value("json", true)
//!     .with_value("yaml", true);
//!
//! let err = mutually_exclusive().check(&["json", "yaml"], &ctx).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "the following parameters are mutually exclusive: --json, --yaml"
//! );
//! ```

pub mod conditional;
pub mod constraint;
pub mod context;
pub mod error;
pub mod format;
pub mod map;
pub mod parameter;
pub mod predicate;
pub mod registry;

// Re-export main types at the crate root for convenience
pub use conditional::{If, IfThen, IfThenElse};
pub use constraint::{Constraint, ConstraintExt};
pub use context::{Context, Settings, consistency_checks_enabled, set_consistency_checks};
pub use error::{ConstraintViolated, Error, Result, UnsatisfiableConstraint};
pub use map::Map;
pub use parameter::{Arity, Parameter, ParameterKind, Parameters};
pub use predicate::{Condition, OperatorKind, Predicate};
pub use registry::{BoundConstraint, Constraints, HelpRecord, OptionGroup};
