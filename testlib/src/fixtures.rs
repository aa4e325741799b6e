//! Sample commands covering every kind of parameter.

use std::sync::Arc;

use clap::{Arg, ArgAction, Command};
use paramguard::{Arity, Context, Parameter, Parameters};
use serde_json::json;

/// A command declaring one parameter of each kind and arity.
///
/// | name       | kind     | notes                |
/// |------------|----------|----------------------|
/// | `arg1`     | argument | required             |
/// | `arg2`     | argument | tuple of 2           |
/// | `str_opt`  | option   |                      |
/// | `int_opt`  | option   |                      |
/// | `bool_opt` | option   | boolean values       |
/// | `flag`     | flag     |                      |
/// | `flag2`    | flag     |                      |
/// | `tuple`    | option   | tuple of 2           |
/// | `mul1`     | option   | multiple             |
/// | `mul2`     | option   | multiple             |
/// | `def1`     | option   | has a default value  |
/// | `def2`     | option   | has a default value  |
pub fn sample_parameters() -> Arc<Parameters> {
    Arc::new(
        Parameters::new("sample")
            .param(Parameter::argument("arg1").required(true))
            .param(Parameter::argument("arg2").arity(Arity::Tuple(2)))
            .param(Parameter::option("str_opt"))
            .param(Parameter::option("int_opt"))
            .param(Parameter::option("bool_opt"))
            .param(Parameter::flag("flag"))
            .param(Parameter::flag("flag2"))
            .param(Parameter::option("tuple").arity(Arity::Tuple(2)))
            .param(Parameter::option("mul1").arity(Arity::Multiple))
            .param(Parameter::option("mul2").arity(Arity::Multiple))
            .param(Parameter::option("def1"))
            .param(Parameter::option("def2")),
    )
}

/// A context of [`sample_parameters`] where the following are set:
/// `arg1`, `str_opt`, `bool_opt` (to `false`), `flag`, `mul1`, `def1` and `def2`.
pub fn sample_context() -> Context {
    Context::new(sample_parameters())
        .with_value("arg1", "value1")
        .with_value("arg2", json!([]))
        .with_value("str_opt", "bar")
        .with_value("bool_opt", false)
        .with_value("flag", true)
        .with_value("flag2", false)
        .with_value("tuple", json!([]))
        .with_value("mul1", json!([4, 5]))
        .with_value("mul2", json!([]))
        .with_value("def1", 1)
        .with_value("def2", "abc")
}

/// A context of a command declaring the given options, none of them set.
pub fn options_context(names: &[&str]) -> Context {
    let params = names
        .iter()
        .map(|name| Parameter::option(*name))
        .collect::<Parameters>();
    Context::new(Arc::new(params))
}

/// A clap command with an output format choice, a source choice and credentials.
pub fn fetch_command() -> Command {
    Command::new("fetch")
        .about("Fetch a document")
        .arg(Arg::new("url").long("url").help("Source URL"))
        .arg(Arg::new("file").long("file").help("Source file"))
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print as JSON"),
        )
        .arg(
            Arg::new("yaml")
                .long("yaml")
                .action(ArgAction::SetTrue)
                .help("Print as YAML"),
        )
        .arg(Arg::new("user").long("user").help("User name"))
        .arg(Arg::new("password").long("password").help("Password"))
}
