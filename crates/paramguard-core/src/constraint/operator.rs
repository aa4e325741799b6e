//! N-ary logical operators on constraints.

use std::sync::Arc;

use super::{Constraint, join_help};
use crate::{
    context::Context,
    error::{ConstraintViolated, Error, Result, UnsatisfiableConstraint},
    parameter::{Parameter, labels},
    predicate::OperatorKind,
};

/// Satisfied if all operands are satisfied.
#[derive(Debug, Clone)]
pub struct And {
    operands: Vec<Arc<dyn Constraint>>,
}

impl And {
    /// Creates a conjunction of the given constraints.
    pub fn new(operands: Vec<Arc<dyn Constraint>>) -> Self {
        Self { operands }
    }

    /// Combines two constraints, flattening nested conjunctions and keeping operands in order.
    pub fn from_pair(lhs: Arc<dyn Constraint>, rhs: Arc<dyn Constraint>) -> Self {
        let mut operands = flatten(lhs, OperatorKind::And);
        operands.extend(flatten(rhs, OperatorKind::And));
        Self { operands }
    }

    /// The operands, in order.
    pub fn operands(&self) -> &[Arc<dyn Constraint>] {
        &self.operands
    }
}

impl Constraint for And {
    fn help(&self, ctx: &Context) -> Result<String> {
        join_help(&self.operands, OperatorKind::And, ctx)
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        self.operands
            .iter()
            .try_for_each(|operand| operand.check_consistency(params))
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        self.operands
            .iter()
            .try_for_each(|operand| operand.check_values(params, ctx))
    }

    fn as_operator(&self) -> Option<(OperatorKind, &[Arc<dyn Constraint>])> {
        Some((OperatorKind::And, &self.operands))
    }
}

/// Satisfied if at least one operand is satisfied.
///
/// Operands are tried in order. If none is satisfied, the error message is built from the help
/// of the whole disjunction, not from the errors of the operands.
#[derive(Debug, Clone)]
pub struct Or {
    operands: Vec<Arc<dyn Constraint>>,
}

impl Or {
    /// Creates a disjunction of the given constraints.
    pub fn new(operands: Vec<Arc<dyn Constraint>>) -> Self {
        Self { operands }
    }

    /// Combines two constraints, flattening nested disjunctions and keeping operands in order.
    pub fn from_pair(lhs: Arc<dyn Constraint>, rhs: Arc<dyn Constraint>) -> Self {
        let mut operands = flatten(lhs, OperatorKind::Or);
        operands.extend(flatten(rhs, OperatorKind::Or));
        Self { operands }
    }

    /// The operands, in order.
    pub fn operands(&self) -> &[Arc<dyn Constraint>] {
        &self.operands
    }
}

impl Constraint for Or {
    fn help(&self, ctx: &Context) -> Result<String> {
        join_help(&self.operands, OperatorKind::Or, ctx)
    }

    fn check_consistency(&self, params: &[&Parameter]) -> Result<(), UnsatisfiableConstraint> {
        self.operands
            .iter()
            .try_for_each(|operand| operand.check_consistency(params))
    }

    fn check_values(&self, params: &[&Parameter], ctx: &Context) -> Result<()> {
        for operand in &self.operands {
            match operand.check_values(params, ctx) {
                Ok(()) => return Ok(()),
                Err(Error::Violated(err)) => {
                    tracing::trace!(error = %err, "operand of disjunction not satisfied");
                }
                Err(err) => return Err(err),
            }
        }
        let help = self.help(ctx)?;
        Err(ConstraintViolated::with_help(&help, labels(params)).into())
    }

    fn as_operator(&self) -> Option<(OperatorKind, &[Arc<dyn Constraint>])> {
        Some((OperatorKind::Or, &self.operands))
    }
}

fn flatten(constraint: Arc<dyn Constraint>, kind: OperatorKind) -> Vec<Arc<dyn Constraint>> {
    match constraint.as_operator() {
        Some((inner, operands)) if inner == kind => operands.to_vec(),
        _ => vec![constraint],
    }
}
