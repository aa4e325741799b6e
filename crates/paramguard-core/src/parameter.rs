//! Parameter declarations and the rule deciding whether a parameter is "set".

use serde_json::Value;

use crate::{Map, error::Error, error::Result};

/// Defines a command-line parameter (argument, option or flag).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    /// The name of the parameter, unique within a command.
    pub name: String,

    /// What kind of parameter this is.
    pub kind: ParameterKind,

    /// Whether the parameter is required.
    #[serde(default)]
    pub required: bool,

    /// How many values the parameter takes.
    #[serde(default)]
    pub arity: Arity,

    /// The spellings of the parameter on the command line (e.g. `-o`, `--output`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opts: Vec<String>,

    /// The display name of a positional argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metavar: Option<String>,

    /// A description of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Parameter {
    /// Creates a new parameter of the given kind.
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            arity: Arity::Single,
            opts: Vec::new(),
            metavar: None,
            help: None,
        }
    }

    /// Creates a new positional argument.
    pub fn argument(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Argument)
    }

    /// Creates a new option (named parameter taking values).
    pub fn option(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Option)
    }

    /// Creates a new boolean flag.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Flag)
    }

    /// Sets whether the parameter is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the arity.
    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Adds a command-line spelling.
    pub fn opt(mut self, opt: impl Into<String>) -> Self {
        self.opts.push(opt.into());
        self
    }

    /// Sets all the command-line spellings.
    pub fn opts(mut self, opts: Vec<String>) -> Self {
        self.opts = opts;
        self
    }

    /// Sets the display name of a positional argument.
    pub fn metavar(mut self, metavar: impl Into<String>) -> Self {
        self.metavar = Some(metavar.into());
        self
    }

    /// Sets the description.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The label used to refer to this parameter in messages.
    ///
    /// Arguments use their display name (`metavar`, or the upper-cased name), options and flags
    /// their longest spelling (`--name` if none was declared).
    pub fn label(&self) -> String {
        match self.kind {
            ParameterKind::Argument => self
                .metavar
                .clone()
                .unwrap_or_else(|| self.name.to_uppercase()),
            ParameterKind::Option | ParameterKind::Flag => self
                .opts
                .iter()
                .max_by_key(|opt| opt.len())
                .cloned()
                .unwrap_or_else(|| format!("--{}", self.name.replace('_', "-"))),
        }
    }

    /// Returns `true` if `value` counts as "set" for this parameter.
    ///
    /// - `null` is always unset;
    /// - a boolean flag is set only if `true` (a flag that is `false` by default is unset);
    /// - an option whose value happens to be boolean is set even if `false`;
    /// - a parameter taking a tuple or multiple values is set if at least one value was collected;
    /// - anything else is set.
    pub fn is_set(&self, value: &Value) -> bool {
        match (value, self.kind, self.arity) {
            (Value::Null, _, _) => false,
            (Value::Bool(on), ParameterKind::Flag, _) => *on,
            (Value::Array(values), _, Arity::Tuple(_) | Arity::Multiple) => !values.is_empty(),
            _ => true,
        }
    }
}

/// The kind of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// Positional argument.
    Argument,
    /// Named option with value (e.g., `--output <file>`).
    Option,
    /// Boolean on/off flag (e.g., `--verbose`).
    Flag,
}

/// The number of values a parameter takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    /// Exactly one value.
    #[default]
    Single,
    /// A fixed number of values, collected as an array.
    Tuple(usize),
    /// Zero or more repeated occurrences, collected as an array.
    Multiple,
}

/// The parameters declared by a command, looked up by name.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Parameters {
    /// The name of the command declaring the parameters.
    pub command: String,

    /// The parameters keyed by name.
    pub params: Map<String, Parameter>,
}

impl Parameters {
    /// Creates an empty set of parameters for the given command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            params: Map::new(),
        }
    }

    /// Declares a parameter, replacing any parameter with the same name.
    pub fn param(mut self, param: Parameter) -> Self {
        self.insert(param);
        self
    }

    /// Declares a parameter in place.
    pub fn insert(&mut self, param: Parameter) {
        self.params.insert(param.name.clone(), param);
    }

    /// Returns the parameter with the given name.
    pub fn get(&self, name: &str) -> Result<&Parameter> {
        self.params
            .get(name)
            .ok_or_else(|| Error::UnknownParameter(name.to_string()))
    }

    /// Returns the parameters with the given names, in the given order.
    ///
    /// Fails on the first unknown name.
    pub fn get_many<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Parameter>> {
        names.iter().map(|name| self.get(name.as_ref())).collect()
    }

    /// Returns `true` if a parameter with the given name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Iterates over the declared parameters.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.values()
    }

    /// The number of declared parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if no parameter is declared.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut params = Self::default();
        for param in iter {
            params.insert(param);
        }
        params
    }
}

/// Collects the labels of the given parameters.
pub fn labels(params: &[&Parameter]) -> Vec<String> {
    params.iter().map(|param| param.label()).collect()
}

/// Returns the parameters that are required.
pub fn required_params<'a>(params: &[&'a Parameter]) -> Vec<&'a Parameter> {
    params.iter().copied().filter(|param| param.required).collect()
}
