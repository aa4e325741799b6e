//! # paramguard
//!
//! Declarative constraints on groups of command-line parameters.
//!
//! This crate provides the main API of paramguard, re-exporting all types from the
//! `paramguard-core` crate and, when the `clap` feature is enabled, the clap integration from
//! `paramguard-clap`.

// Re-export the modules for access to the constraint constructors and less common types
pub use paramguard_core::{
    conditional, constraint, context, error, format, parameter, predicate, registry,
};
// Re-export all main types at the crate root for convenience
pub use paramguard_core::{
    Arity, BoundConstraint, Condition, Constraint, ConstraintExt, ConstraintViolated, Constraints,
    Context, Error, HelpRecord, If, IfThen, IfThenElse, Map, OperatorKind, OptionGroup, Parameter,
    ParameterKind, Parameters, Predicate, Result, Settings, UnsatisfiableConstraint,
    consistency_checks_enabled, set_consistency_checks,
};
// Re-export the clap integration when the clap feature is enabled
#[cfg(feature = "clap")]
#[cfg_attr(docsrs, doc(cfg(feature = "clap")))]
pub use paramguard_clap as clap;
