//! Binding constraints to the parameters of a command.
//!
//! A [`Constraints`] registry is built once per command, next to the parameter declarations,
//! and checked after every successful parse:
//!
//! ```
//! use std::sync::Arc;
//!
//! use paramguard_core::{Constraints, Context, OptionGroup, Parameter, Parameters};
//! use paramguard_core::constraint::{mutually_exclusive, require_any};
//!
//! let params = Arc::new(
//!     Parameters::new("fetch")
//!         .param(Parameter::option("url"))
//!         .param(Parameter::option("file"))
//!         .param(Parameter::flag("json"))
//!         .param(Parameter::flag("yaml")),
//! );
//! let constraints = Constraints::new()
//!     .group(
//!         OptionGroup::new("Output format")
//!             .options(["json", "yaml"])
//!             .constraint(mutually_exclusive()),
//!     )
//!     .constraint(require_any(), ["url", "file"]);
//!
//! let ctx = Context::new(params).with_value("url", "https://example.com");
//! assert!(constraints.check(&ctx).is_ok());
//! ```

use std::sync::Arc;

use crate::{
    constraint::Constraint,
    context::Context,
    error::{Error, Result},
    format::join_labels,
    parameter::{Parameter, Parameters, labels},
};

/// A constraint bound to the names of the parameters it checks.
#[derive(Debug, Clone)]
pub struct BoundConstraint {
    constraint: Arc<dyn Constraint>,
    param_names: Vec<String>,
}

impl BoundConstraint {
    /// Binds `constraint` to the named parameters.
    pub fn new<S: Into<String>>(
        constraint: impl Constraint + 'static,
        param_names: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::from_shared(Arc::new(constraint), param_names)
    }

    /// Binds an already shared constraint to the named parameters.
    pub fn from_shared<S: Into<String>>(
        constraint: Arc<dyn Constraint>,
        param_names: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            constraint,
            param_names: param_names.into_iter().map(Into::into).collect(),
        }
    }

    /// The bound constraint.
    pub fn constraint(&self) -> &dyn Constraint {
        &*self.constraint
    }

    /// The names of the bound parameters.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Checks the constraint can be satisfied by the declared parameters.
    pub fn check_consistency(&self, parameters: &Parameters) -> Result<()> {
        let params = self.resolve(parameters)?;
        Ok(self.constraint.check_consistency(&params)?)
    }

    /// Checks the values in `ctx` satisfy the constraint.
    pub fn check_values(&self, ctx: &Context) -> Result<()> {
        let params = self.resolve(ctx.parameters())?;
        self.constraint.check_values(&params, ctx)
    }

    /// Returns the entry of this constraint in the "Constraints" help section, if any.
    ///
    /// The label lists the bound parameters, e.g. `{--json, --yaml}`. Returns `None` if the
    /// constraint help is empty, i.e. the constraint is hidden.
    pub fn help_record(&self, ctx: &Context) -> Result<Option<HelpRecord>> {
        let help = self.constraint.help(ctx)?;
        if help.is_empty() {
            return Ok(None);
        }
        let params = self.resolve(ctx.parameters())?;
        Ok(Some(HelpRecord {
            label: format!("{{{}}}", join_labels(&labels(&params))),
            help,
        }))
    }

    fn resolve<'a>(&self, parameters: &'a Parameters) -> Result<Vec<&'a Parameter>> {
        if self.param_names.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "constraint {:?} is not bound to any parameter",
                self.constraint
            )));
        }
        parameters.get_many(&self.param_names)
    }
}

/// A row of the "Constraints" help section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRecord {
    pub label: String,
    pub help: String,
}

/// A titled group of options, optionally constrained as a whole.
#[derive(Debug, Clone)]
pub struct OptionGroup {
    /// The title of the group in the help.
    pub title: String,

    /// A description of the group.
    pub help: Option<String>,

    /// The names of the options in the group.
    pub options: Vec<String>,

    /// A constraint bound to all the options of the group.
    pub constraint: Option<Arc<dyn Constraint>>,

    /// Whether the group is hidden from the help.
    pub hidden: bool,
}

impl OptionGroup {
    /// Creates an empty group.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            help: None,
            options: Vec::new(),
            constraint: None,
            hidden: false,
        }
    }

    /// Sets the description of the group.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Adds an option to the group.
    pub fn option(mut self, name: impl Into<String>) -> Self {
        self.options.push(name.into());
        self
    }

    /// Adds options to the group.
    pub fn options<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.options.extend(names.into_iter().map(Into::into));
        self
    }

    /// Constrains the options of the group.
    pub fn constraint(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraint = Some(Arc::new(constraint));
        self
    }

    /// Hides the group from the help.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// The title of the group followed by the help of its constraint between brackets,
    /// e.g. `Output format [mutually exclusive]`.
    pub fn heading(&self, ctx: &Context) -> Result<String> {
        let constraint_help = match &self.constraint {
            Some(constraint) => constraint.help(ctx)?,
            None => String::new(),
        };
        if constraint_help.is_empty() {
            return Ok(self.title.clone());
        }
        Ok(format!("{} [{}]", self.title, constraint_help))
    }

    fn bound_constraint(&self) -> Option<BoundConstraint> {
        let constraint = self.constraint.as_ref()?;
        Some(BoundConstraint::from_shared(
            Arc::clone(constraint),
            self.options.iter().cloned(),
        ))
    }
}

/// The constraints of a command: option groups plus constraints bound to explicit parameters.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    groups: Vec<OptionGroup>,
    group_constraints: Vec<BoundConstraint>,
    param_constraints: Vec<BoundConstraint>,
    show_constraints: Option<bool>,
}

impl Constraints {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constraint` on the named parameters.
    pub fn constraint<S: Into<String>>(
        self,
        constraint: impl Constraint + 'static,
        param_names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.bound(BoundConstraint::new(constraint, param_names))
    }

    /// Registers an already bound constraint.
    pub fn bound(mut self, constraint: BoundConstraint) -> Self {
        self.param_constraints.push(constraint);
        self
    }

    /// Registers an option group and, if any, its constraint.
    pub fn group(mut self, group: OptionGroup) -> Self {
        if let Some(bound) = group.bound_constraint() {
            self.group_constraints.push(bound);
        }
        self.groups.push(group);
        self
    }

    /// Overrides the `show_constraints` setting of the context for this command.
    pub fn show_constraints(mut self, show: bool) -> Self {
        self.show_constraints = Some(show);
        self
    }

    /// The registered option groups.
    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// All the bound constraints, the ones of option groups first.
    pub fn iter(&self) -> impl Iterator<Item = &BoundConstraint> {
        self.group_constraints
            .iter()
            .chain(self.param_constraints.iter())
    }

    /// Returns `true` if no constraint is registered.
    pub fn is_empty(&self) -> bool {
        self.group_constraints.is_empty() && self.param_constraints.is_empty()
    }

    /// Checks every constraint can be satisfied by the declared parameters.
    pub fn check_consistency(&self, parameters: &Parameters) -> Result<()> {
        tracing::debug!(
            command = %parameters.command,
            constraints = self.group_constraints.len() + self.param_constraints.len(),
            "checking constraints consistency"
        );
        self.iter().try_for_each(|bound| {
            tracing::trace!(
                constraint = ?bound.constraint,
                params = ?bound.param_names,
                "checking consistency"
            );
            bound.check_consistency(parameters)
        })
    }

    /// Checks the values in `ctx` satisfy every constraint, stopping at the first violation.
    pub fn check_values(&self, ctx: &Context) -> Result<()> {
        tracing::debug!(command = ctx.command(), "checking constraints");
        self.iter().try_for_each(|bound| {
            tracing::trace!(
                constraint = ?bound.constraint,
                params = ?bound.param_names,
                "checking values"
            );
            bound.check_values(ctx).inspect_err(|err| {
                tracing::debug!(
                    error = %err,
                    params = ?bound.param_names,
                    "constraint not satisfied"
                );
            })
        })
    }

    /// Runs the consistency checks, if enabled for `ctx`, then the value checks.
    pub fn check(&self, ctx: &Context) -> Result<()> {
        if ctx.settings().must_check_consistency() {
            self.check_consistency(ctx.parameters())?;
        }
        self.check_values(ctx)
    }

    /// Resolves whether the "Constraints" help section must be shown.
    ///
    /// The registry setting wins over the context setting. Defaults to `false`.
    pub fn must_show_constraints(&self, ctx: &Context) -> bool {
        self.show_constraints
            .unwrap_or_else(|| ctx.settings().must_show_constraints())
    }

    /// The help records of the constraints bound to explicit parameters.
    ///
    /// Option group constraints are not included: they're shown in the group heading.
    pub fn help_records(&self, ctx: &Context) -> Result<Vec<HelpRecord>> {
        self.param_constraints
            .iter()
            .filter_map(|bound| bound.help_record(ctx).transpose())
            .collect()
    }

    /// Renders the "Constraints" help section; `None` if there's nothing to show.
    pub fn format_help(&self, ctx: &Context) -> Result<Option<String>> {
        let records = self.help_records(ctx)?;
        let Some(width) = records.iter().map(|record| record.label.chars().count()).max() else {
            return Ok(None);
        };
        let rows = records
            .iter()
            .map(|record| format!("  {:<width$}  {}\n", record.label, record.help))
            .collect::<String>();
        Ok(Some(format!("Constraints:\n{rows}")))
    }
}
