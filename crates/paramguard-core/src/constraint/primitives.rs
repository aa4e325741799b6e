//! Counting constraints.

use std::fmt;

use super::{Constraint, ConstraintExt, WrapperConstraint};
use crate::{
    context::Context,
    error::{ConstraintViolated, Error, Result, UnsatisfiableConstraint},
    format::format_param_list,
    parameter::{Parameter, labels, required_params},
};

/// Satisfied if all the parameters are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllRequired;

impl Constraint for AllRequired {
    fn help(&self, _ctx: &Context) -> Result<String> {
        Ok("all required".to_string())
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        let mut unset = Vec::new();
        for &param in params {
            if !ctx.param_is_set(param)? {
                unset.push(param);
            }
        }
        let message = match unset.as_slice() {
            [] => return Ok(()),
            [param] => format!("{} is required", param.label()),
            _ => format!(
                "the following parameters are required:\n{}",
                format_param_list(&unset)
            ),
        };
        Err(ConstraintViolated::new(message, labels(params)).into())
    }
}

/// Satisfied if at least `n` parameters are set.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SetAtLeast {
    n: usize,
}

impl SetAtLeast {
    /// Requires at least `n` parameters to be set.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// The minimum number of parameters that must be set.
    pub fn min(&self) -> usize {
        self.n
    }
}

impl fmt::Debug for SetAtLeast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetAtLeast({})", self.n)
    }
}

impl Constraint for SetAtLeast {
    fn help(&self, _ctx: &Context) -> Result<String> {
        Ok(format!("at least {} required", self.n))
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        if params.len() < self.n {
            let reason = format!(
                "the constraint requires a minimum of {} parameters but it is applied on a \
                 group of only {} parameters",
                self.n,
                params.len()
            );
            return Err(UnsatisfiableConstraint::new(
                format!("{self:?}"),
                labels(params),
                reason,
            ));
        }
        Ok(())
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        if ctx.params_set(params)?.len() < self.n {
            let labels = labels(params);
            let message = format!(
                "at least {} of the following parameters must be set:\n{}",
                self.n,
                format_param_list(params)
            );
            return Err(ConstraintViolated::new(message, labels).into());
        }
        Ok(())
    }
}

/// Satisfied if at most `n` parameters are set.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SetAtMost {
    n: usize,
}

impl SetAtMost {
    /// Accepts at most `n` parameters to be set.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// The maximum number of parameters that can be set.
    pub fn max(&self) -> usize {
        self.n
    }
}

impl fmt::Debug for SetAtMost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetAtMost({})", self.n)
    }
}

impl Constraint for SetAtMost {
    fn help(&self, _ctx: &Context) -> Result<String> {
        Ok(format!("at most {} accepted", self.n))
    }

    // A required parameter always counts as set.
    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        let required = required_params(params).len();
        if required > self.n {
            return Err(UnsatisfiableConstraint::new(
                format!("{self:?}"),
                labels(params),
                format!("{required} of the parameters are required"),
            ));
        }
        Ok(())
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        if ctx.params_set(params)?.len() > self.n {
            let labels = labels(params);
            let message = format!(
                "no more than {} of the following parameters can be set:\n{}",
                self.n,
                format_param_list(params)
            );
            return Err(ConstraintViolated::new(message, labels).into());
        }
        Ok(())
    }
}

/// Satisfied if exactly `n` parameters are set. `SetExactly::new(0)` forbids all of them.
#[derive(Clone)]
pub struct SetExactly {
    n: usize,
    bounds: WrapperConstraint,
}

impl SetExactly {
    /// Requires exactly `n` parameters to be set.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            bounds: WrapperConstraint::new(
                format!("SetExactly({n})"),
                SetAtLeast::new(n).and(SetAtMost::new(n)),
            ),
        }
    }

    /// The number of parameters that must be set.
    pub fn count(&self) -> usize {
        self.n
    }
}

impl fmt::Debug for SetExactly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetExactly({})", self.n)
    }
}

impl Constraint for SetExactly {
    fn help(&self, _ctx: &Context) -> Result<String> {
        Ok(match self.n {
            0 => "all forbidden".to_string(),
            n => format!("exactly {n} required"),
        })
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        self.bounds.check_consistency(params)
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        if ctx.params_set(params)?.len() != self.n {
            let labels = labels(params);
            let head = match self.n {
                0 => "none of the following parameters must be set".to_string(),
                n => format!("exactly {n} of the following parameters must be set"),
            };
            let message = format!("{head}:\n{}", format_param_list(params));
            return Err(ConstraintViolated::new(message, labels).into());
        }
        Ok(())
    }
}

/// Satisfied if the number of set parameters is between `min` and `max` (included).
#[derive(Clone)]
pub struct SetBetween {
    min: usize,
    max: usize,
    bounds: WrapperConstraint,
}

impl SetBetween {
    /// Accepts between `min` and `max` set parameters. Requires `min < max`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min >= max {
            return Err(Error::InvalidArgument(format!(
                "must be: min < max (got min={min}, max={max})"
            )));
        }
        Ok(Self {
            min,
            max,
            bounds: WrapperConstraint::new(
                format!("SetBetween({min}, {max})"),
                SetAtLeast::new(min).and(SetAtMost::new(max)),
            ),
        })
    }

    /// The minimum number of set parameters.
    pub fn min(&self) -> usize {
        self.min
    }

    /// The maximum number of set parameters.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl fmt::Debug for SetBetween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetBetween({}, {})", self.min, self.max)
    }
}

impl Constraint for SetBetween {
    fn help(&self, _ctx: &Context) -> Result<String> {
        Ok(format!(
            "at least {} required, at most {} accepted",
            self.min, self.max
        ))
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        self.bounds.check_consistency(params)
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        self.bounds.check_values(params, ctx)
    }
}
