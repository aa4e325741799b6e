//! Overriding the help and error message of a constraint.

use std::{fmt, sync::Arc};

use super::Constraint;
use crate::{
    context::Context,
    error::{Error, Result, UnsatisfiableConstraint},
    format::join_labels,
    parameter::{Parameter, labels},
};

/// A function computing the help of a rephrased constraint.
pub type HelpFn = Arc<dyn Fn(&Context, &dyn Constraint) -> String + Send + Sync>;

/// A function computing the error message of a rephrased constraint.
pub type ErrorFn = Arc<dyn Fn(&Context, &dyn Constraint, &[&Parameter]) -> String + Send + Sync>;

/// The help override of a [`Rephraser`].
#[derive(Clone)]
pub enum HelpText {
    /// A fixed string. An empty string hides the constraint from the help.
    Text(String),
    /// A function of the context and of the wrapped constraint.
    Fn(HelpFn),
}

/// The error override of a [`Rephraser`].
#[derive(Clone)]
pub enum ErrorText {
    /// A template supporting two placeholders:
    /// - `{param_list}`: the labels of the constrained parameters joined by `", "`;
    /// - `{error}`: the message of the original error.
    Template(String),
    /// A function of the context, of the wrapped constraint and of the constrained parameters.
    Fn(ErrorFn),
}

impl fmt::Debug for HelpText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => fmt::Debug::fmt(text, f),
            Self::Fn(_) => f.write_str("<fn>"),
        }
    }
}

impl fmt::Debug for ErrorText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => fmt::Debug::fmt(template, f),
            Self::Fn(_) => f.write_str("<fn>"),
        }
    }
}

/// Wraps a constraint overriding its help and/or its error message.
///
/// Built with the [`ConstraintExt`](super::ConstraintExt) methods (`with_help`, `with_error`,
/// `hidden`, ...), so it always overrides the help or the error. Without an error override the
/// original violation is propagated unchanged.
///
/// A rephraser overriding nothing can't be built:
///
/// ```compile_fail
/// use paramguard_core::constraint::{Rephraser, require_all};
///
/// let rephraser = Rephraser::new(require_all());
/// ```
#[derive(Clone)]
pub struct Rephraser {
    inner: Arc<dyn Constraint>,
    help: Option<HelpText>,
    error: Option<ErrorText>,
}

impl Rephraser {
    /// Wraps `constraint` without overriding anything yet.
    pub(crate) fn new(constraint: impl Constraint + 'static) -> Self {
        Self {
            inner: Arc::new(constraint),
            help: None,
            error: None,
        }
    }

    /// Overrides the help with a fixed string.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(HelpText::Text(help.into()));
        self
    }

    /// Overrides the help with a function.
    pub fn with_help_fn<F>(mut self, help: F) -> Self
    where
        F: Fn(&Context, &dyn Constraint) -> String + Send + Sync + 'static,
    {
        self.help = Some(HelpText::Fn(Arc::new(help)));
        self
    }

    /// Overrides the error message with a template (see [`ErrorText::Template`]).
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(ErrorText::Template(error.into()));
        self
    }

    /// Overrides the error message with a function.
    pub fn with_error_fn<F>(mut self, error: F) -> Self
    where
        F: Fn(&Context, &dyn Constraint, &[&Parameter]) -> String + Send + Sync + 'static,
    {
        self.error = Some(ErrorText::Fn(Arc::new(error)));
        self
    }

    /// Hides the constraint from the help.
    pub fn hidden(self) -> Self {
        self.with_help("")
    }

    /// The wrapped constraint.
    pub fn inner(&self) -> &dyn Constraint {
        &*self.inner
    }

    fn rephrase_error(
        &self,
        ctx: &Context,
        params: &[&Parameter],
        original: &str,
    ) -> Option<String> {
        let message = match self.error.as_ref()? {
            ErrorText::Template(template) => template
                .replace("{param_list}", &join_labels(&labels(params)))
                .replace("{error}", original),
            ErrorText::Fn(error) => error(ctx, &*self.inner, params),
        };
        (!message.is_empty()).then_some(message)
    }
}

impl fmt::Debug for Rephraser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut repr = f.debug_struct("Rephraser");
        repr.field("constraint", &self.inner);
        if let Some(help) = &self.help {
            repr.field("help", help);
        }
        if let Some(error) = &self.error {
            repr.field("error", error);
        }
        repr.finish()
    }
}

impl Constraint for Rephraser {
    fn help(&self, ctx: &Context) -> Result<String> {
        match &self.help {
            None => self.inner.help(ctx),
            Some(HelpText::Text(text)) => Ok(text.clone()),
            Some(HelpText::Fn(help)) => Ok(help(ctx, &*self.inner)),
        }
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        self.inner
            .check_consistency(params)
            .map_err(|err| err.attribute_to(format!("{self:?}")))
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        match self.inner.check_values(params, ctx) {
            Err(Error::Violated(err)) => {
                match self.rephrase_error(ctx, params, err.message()) {
                    Some(message) => Err(err.rephrase(message).into()),
                    None => Err(err.into()),
                }
            }
            other => other,
        }
    }
}
