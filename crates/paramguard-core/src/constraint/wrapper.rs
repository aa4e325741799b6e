//! Named constraints defined by composing other constraints.

use std::{fmt, sync::Arc};

use super::Constraint;
use crate::{
    context::Context,
    error::{Result, UnsatisfiableConstraint},
    parameter::Parameter,
};

/// Wraps a constraint and delegates everything to it.
///
/// Lets a parametric constraint be defined by composing existing ones (see
/// [`SetBetween`](super::SetBetween)) while still reporting consistency failures under its own
/// name.
#[derive(Clone)]
pub struct WrapperConstraint {
    name: String,
    inner: Arc<dyn Constraint>,
}

impl WrapperConstraint {
    /// Wraps `inner`; `name` is how the wrapper appears in error messages.
    pub fn new(name: impl Into<String>, inner: impl Constraint + 'static) -> Self {
        Self {
            name: name.into(),
            inner: Arc::new(inner),
        }
    }

    /// The wrapped constraint.
    pub fn inner(&self) -> &dyn Constraint {
        &*self.inner
    }
}

impl fmt::Debug for WrapperConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Constraint for WrapperConstraint {
    fn help(&self, ctx: &Context) -> Result<String> {
        self.inner.help(ctx)
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        self.inner
            .check_consistency(params)
            .map_err(|err| err.attribute_to(self.name.clone()))
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        self.inner.check_values(params, ctx)
    }
}
