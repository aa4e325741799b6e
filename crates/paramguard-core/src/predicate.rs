//! Described boolean conditions over a [`Context`].
//!
//! Predicates are used as the condition of conditional constraints (see [`If`](crate::If)).
//! They are immutable values: combining two predicates builds a new one.

use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::{
    context::Context,
    error::{Error, Result},
    format::join_with_and,
};

/// A user-defined condition with a description.
///
/// Wrap an implementation with [`Predicate::custom`] to combine it with the built-in predicates.
pub trait Condition: fmt::Debug + Send + Sync {
    /// Succinct description of the condition.
    fn description(&self, ctx: &Context) -> Result<String>;

    /// Succinct description of the negation of the condition.
    fn negated_description(&self, ctx: &Context) -> Result<String> {
        Ok(format!("NOT({})", self.description(ctx)?))
    }

    /// Evaluates the condition on the given context.
    fn evaluate(&self, ctx: &Context) -> Result<bool>;
}

/// A boolean function of a [`Context`] with a description and a negated description.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// True if the parameter is set.
    IsSet(String),
    /// True if all the listed parameters are set.
    AllSet(Vec<String>),
    /// True if any of the listed parameters is set.
    AnySet(Vec<String>),
    /// True if the parameter value equals the given value.
    Equal(String, Value),
    /// True if the inner predicate is false.
    Not(Box<Predicate>),
    /// True if all operands are true.
    And(Vec<Predicate>),
    /// True if any operand is true.
    Or(Vec<Predicate>),
    /// A user-defined condition.
    Custom(Arc<dyn Condition>),
}

impl Predicate {
    /// True if the named parameter is set.
    pub fn is_set(name: impl Into<String>) -> Self {
        Self::IsSet(name.into())
    }

    /// True if all the named parameters are set. At least one name is required.
    pub fn all_set<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self> {
        non_empty(names).map(Self::AllSet)
    }

    /// True if any of the named parameters is set. At least one name is required.
    pub fn any_set<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self> {
        non_empty(names).map(Self::AnySet)
    }

    /// True if the value of the named parameter equals `value`.
    pub fn equal(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Equal(name.into(), value.into())
    }

    /// Wraps a user-defined condition.
    pub fn custom(condition: impl Condition + 'static) -> Self {
        Self::Custom(Arc::new(condition))
    }

    /// The negation of this predicate. Negating a negation gives back the original predicate.
    pub fn negate(self) -> Self {
        match self {
            Self::Not(inner) => *inner,
            other => Self::Not(Box::new(other)),
        }
    }

    /// The conjunction of this predicate and `other`.
    ///
    /// Two `IsSet` give an `AllSet`, two `AllSet` are merged and nested `And` are flattened,
    /// keeping the operands in order.
    pub fn and(self, other: impl Into<Predicate>) -> Self {
        match (self, other.into()) {
            (Self::IsSet(a), Self::IsSet(b)) => Self::AllSet(vec![a, b]),
            (Self::AllSet(mut a), Self::AllSet(b)) => {
                a.extend(b);
                Self::AllSet(a)
            }
            (Self::And(mut a), Self::And(b)) => {
                a.extend(b);
                Self::And(a)
            }
            (Self::And(mut a), other) => {
                a.push(other);
                Self::And(a)
            }
            (this, Self::And(b)) => Self::And(std::iter::once(this).chain(b).collect()),
            (this, other) => Self::And(vec![this, other]),
        }
    }

    /// The disjunction of this predicate and `other`.
    ///
    /// Two `IsSet` give an `AnySet`, two `AnySet` are merged and nested `Or` are flattened,
    /// keeping the operands in order.
    pub fn or(self, other: impl Into<Predicate>) -> Self {
        match (self, other.into()) {
            (Self::IsSet(a), Self::IsSet(b)) => Self::AnySet(vec![a, b]),
            (Self::AnySet(mut a), Self::AnySet(b)) => {
                a.extend(b);
                Self::AnySet(a)
            }
            (Self::Or(mut a), Self::Or(b)) => {
                a.extend(b);
                Self::Or(a)
            }
            (Self::Or(mut a), other) => {
                a.push(other);
                Self::Or(a)
            }
            (this, Self::Or(b)) => Self::Or(std::iter::once(this).chain(b).collect()),
            (this, other) => Self::Or(vec![this, other]),
        }
    }

    /// Evaluates the predicate on the given context.
    pub fn evaluate(&self, ctx: &Context) -> Result<bool> {
        match self {
            Self::IsSet(name) => ctx.is_set(name),
            Self::AllSet(names) => {
                for name in names {
                    if !ctx.is_set(name)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::AnySet(names) => {
                for name in names {
                    if ctx.is_set(name)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Equal(name, value) => Ok(ctx.value(name)? == value),
            Self::Not(inner) => Ok(!inner.evaluate(ctx)?),
            Self::And(operands) => {
                for operand in operands {
                    if !operand.evaluate(ctx)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Or(operands) => {
                for operand in operands {
                    if operand.evaluate(ctx)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Custom(condition) => condition.evaluate(ctx),
        }
    }

    /// Succinct description of the predicate.
    pub fn description(&self, ctx: &Context) -> Result<String> {
        match self {
            Self::IsSet(name) => Ok(format!("{} is set", ctx.label(name)?)),
            Self::AllSet(names) => {
                let labels = ctx.labels(names)?;
                Ok(match labels.as_slice() {
                    [label] => format!("{label} is set"),
                    [_, _] => format!("{} are both set", join_with_and(&labels)),
                    _ => format!("{} are all set", join_with_and(&labels)),
                })
            }
            Self::AnySet(names) => {
                let labels = ctx.labels(names)?;
                Ok(match labels.as_slice() {
                    [label] => format!("{label} is set"),
                    [a, b] => format!("either {a} or {b} is set"),
                    _ => format!("any of {} is set", join_with_and(&labels)),
                })
            }
            Self::Equal(name, value) => {
                Ok(format!("{}=\"{}\"", ctx.label(name)?, display_value(value)))
            }
            Self::Not(inner) => inner.negated_description(ctx),
            Self::And(operands) => join_operands(operands, OperatorKind::And, " and ", ctx, false),
            Self::Or(operands) => join_operands(operands, OperatorKind::Or, " or ", ctx, false),
            Self::Custom(condition) => condition.description(ctx),
        }
    }

    /// Succinct description of the negation of the predicate.
    pub fn negated_description(&self, ctx: &Context) -> Result<String> {
        match self {
            Self::IsSet(name) => Ok(format!("{} is not set", ctx.label(name)?)),
            Self::AllSet(names) => {
                let labels = ctx.labels(names)?;
                Ok(match labels.as_slice() {
                    [label] => format!("{label} is not set"),
                    [_, _] => format!("{} are not both set", join_with_and(&labels)),
                    _ => format!("{} are not all set", join_with_and(&labels)),
                })
            }
            Self::AnySet(names) => {
                let labels = ctx.labels(names)?;
                Ok(match labels.as_slice() {
                    [label] => format!("{label} is not set"),
                    [a, b] => format!("neither {a} nor {b} is set"),
                    _ => format!("none of {} is set", join_with_and(&labels)),
                })
            }
            Self::Equal(name, value) => {
                Ok(format!("{}!=\"{}\"", ctx.label(name)?, display_value(value)))
            }
            Self::Not(inner) => inner.description(ctx),
            Self::And(operands) => join_operands(operands, OperatorKind::And, " or ", ctx, true),
            Self::Or(operands) => join_operands(operands, OperatorKind::Or, " and ", ctx, true),
            Self::Custom(condition) => condition.negated_description(ctx),
        }
    }

    fn operator_kind(&self) -> Option<OperatorKind> {
        match self {
            Self::And(_) => Some(OperatorKind::And),
            Self::Or(_) => Some(OperatorKind::Or),
            _ => None,
        }
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IsSet(a), Self::IsSet(b)) => a == b,
            (Self::AllSet(a), Self::AllSet(b)) | (Self::AnySet(a), Self::AnySet(b)) => a == b,
            (Self::Equal(a, x), Self::Equal(b, y)) => a == b && x == y,
            (Self::Not(a), Self::Not(b)) => a == b,
            (Self::And(a), Self::And(b)) | (Self::Or(a), Self::Or(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Predicate {
    fn from(name: &str) -> Self {
        Self::is_set(name)
    }
}

impl From<String> for Predicate {
    fn from(name: String) -> Self {
        Self::IsSet(name)
    }
}

/// The two n-ary logical operators, shared by predicates and constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
}

fn non_empty<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Vec<String>> {
    let names = names.into_iter().map(Into::into).collect::<Vec<_>>();
    if names.is_empty() {
        return Err(Error::InvalidArgument(
            "you must provide at least one param name".to_string(),
        ));
    }
    Ok(names)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Operands that are operators of the other kind are parenthesized.
fn join_operands(
    operands: &[Predicate],
    kind: OperatorKind,
    sep: &str,
    ctx: &Context,
    negated: bool,
) -> Result<String> {
    let parts = operands
        .iter()
        .map(|operand| -> Result<String> {
            let desc = if negated {
                operand.negated_description(ctx)?
            } else {
                operand.description(ctx)?
            };
            Ok(match operand.operator_kind() {
                Some(inner) if inner != kind => format!("({desc})"),
                _ => desc,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join(sep))
}
