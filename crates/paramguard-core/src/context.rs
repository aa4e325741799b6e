//! The values of one command invocation, plus the settings constraints read from it.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use serde_json::Value;

use crate::{
    Map,
    error::Result,
    parameter::{Parameter, Parameters},
};

static CONSISTENCY_CHECKS: AtomicBool = AtomicBool::new(true);

/// Enables or disables consistency checks process-wide.
///
/// Consistency checks only catch mistakes in the command declaration, so they can be turned off
/// in production. A [`Settings::check_consistency`] value on the context takes precedence.
pub fn set_consistency_checks(enabled: bool) {
    CONSISTENCY_CHECKS.store(enabled, Ordering::Relaxed);
}

/// Returns the process-wide consistency checks switch (enabled by default).
pub fn consistency_checks_enabled() -> bool {
    CONSISTENCY_CHECKS.load(Ordering::Relaxed)
}

/// Settings controlling how constraints are checked and shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run consistency checks before checking values. Falls back to the process-wide switch.
    pub check_consistency: Option<bool>,

    /// Include a "Constraints" section in the command help. Defaults to `false`.
    pub show_constraints: Option<bool>,
}

impl Settings {
    /// Sets whether consistency checks run.
    pub fn check_consistency(mut self, enabled: bool) -> Self {
        self.check_consistency = Some(enabled);
        self
    }

    /// Sets whether the constraints are shown in the help.
    pub fn show_constraints(mut self, show: bool) -> Self {
        self.show_constraints = Some(show);
        self
    }

    /// Resolves whether consistency checks must run.
    pub fn must_check_consistency(&self) -> bool {
        self.check_consistency
            .unwrap_or_else(consistency_checks_enabled)
    }

    /// Resolves whether the constraints must be shown in the help.
    pub fn must_show_constraints(&self) -> bool {
        self.show_constraints.unwrap_or(false)
    }
}

/// The parsed values of all the parameters of a command, for one invocation.
#[derive(Debug, Clone)]
pub struct Context {
    parameters: Arc<Parameters>,
    values: Map<String, Value>,
    settings: Settings,
}

impl Context {
    /// Creates a context with no values for the given parameters.
    pub fn new(parameters: Arc<Parameters>) -> Self {
        Self {
            parameters,
            values: Map::new(),
            settings: Settings::default(),
        }
    }

    /// Sets the value of a parameter.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets the settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the value of a parameter in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// The name of the command being invoked.
    pub fn command(&self) -> &str {
        &self.parameters.command
    }

    /// The parameters declared by the command.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The settings of this invocation.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the declaration of a parameter.
    pub fn parameter(&self, name: &str) -> Result<&Parameter> {
        self.parameters.get(name)
    }

    /// Returns the current value of a parameter; `null` if it has none.
    ///
    /// Fails if the command doesn't declare a parameter with this name.
    pub fn value(&self, name: &str) -> Result<&Value> {
        self.parameters.get(name)?;
        Ok(self.values.get(name).unwrap_or(&Value::Null))
    }

    /// Returns `true` if the named parameter is set.
    pub fn is_set(&self, name: &str) -> Result<bool> {
        let param = self.parameters.get(name)?;
        Ok(param.is_set(self.value(name)?))
    }

    /// Returns `true` if `param` is set in this context.
    pub fn param_is_set(&self, param: &Parameter) -> Result<bool> {
        Ok(param.is_set(self.value(&param.name)?))
    }

    /// Returns the label of the named parameter.
    pub fn label(&self, name: &str) -> Result<String> {
        Ok(self.parameters.get(name)?.label())
    }

    /// Returns the labels of the named parameters, in order.
    pub fn labels<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<String>> {
        names.iter().map(|name| self.label(name.as_ref())).collect()
    }

    /// Filters `params`, returning only those whose value is set.
    pub fn params_set<'a>(&self, params: &[&'a Parameter]) -> Result<Vec<&'a Parameter>> {
        let mut set = Vec::with_capacity(params.len());
        for &param in params {
            if self.param_is_set(param)? {
                set.push(param);
            }
        }
        Ok(set)
    }
}
