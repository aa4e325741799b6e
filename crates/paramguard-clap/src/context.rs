use std::{path::PathBuf, sync::Arc};

use clap::{ArgAction, ArgMatches, Command, parser::ValueSource};
use paramguard_core::{Arity, Context, Parameter, ParameterKind, Parameters};
use serde_json::Value;

/// Builds the context of one invocation out of the matches clap parsed.
///
/// - flags are `true` when given on the command line, whatever boolean clap stores for them, and
///   unset otherwise (counting flags read as their count);
/// - single values read as booleans, numbers or strings, depending on the value parser;
/// - tuples and repeated values read as arrays of strings;
/// - parameters without a value, not even a default one, are left unset.
///
/// `command` is the command that produced `matches`; it tells how each flag stores its value.
pub fn context_from_matches(
    command: &Command,
    parameters: Arc<Parameters>,
    matches: &ArgMatches,
) -> Context {
    let values = parameters
        .iter()
        .filter_map(|param| Some((param.name.clone(), value_of(command, param, matches)?)))
        .collect::<Vec<_>>();

    let mut ctx = Context::new(parameters);
    for (name, value) in values {
        ctx.insert(name, value);
    }
    ctx
}

fn value_of(command: &Command, param: &Parameter, matches: &ArgMatches) -> Option<Value> {
    let id = param.name.as_str();
    if !matches.try_contains_id(id).unwrap_or(false) {
        return None;
    }
    match (param.kind, param.arity) {
        (ParameterKind::Flag, _) => flag_value(command, matches, id),
        (_, Arity::Single) => single_value(matches, id),
        (_, Arity::Tuple(_) | Arity::Multiple) => raw_values(matches, id),
    }
}

fn flag_value(command: &Command, matches: &ArgMatches, id: &str) -> Option<Value> {
    // Flags always have a value in clap: the implicit default when not given
    if matches!(matches.value_source(id), None | Some(ValueSource::DefaultValue)) {
        return None;
    }
    if let Some(flag) = get_one::<bool>(matches, id) {
        let inverted = command
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .is_some_and(|arg| matches!(arg.get_action(), ArgAction::SetFalse));
        return Some(Value::Bool(flag != inverted));
    }
    match get_one::<u8>(matches, id)? {
        0 => None,
        count => Some(Value::from(count)),
    }
}

fn single_value(matches: &ArgMatches, id: &str) -> Option<Value> {
    let typed = get_one::<String>(matches, id)
        .map(Value::String)
        .or_else(|| get_one::<bool>(matches, id).map(Value::Bool))
        .or_else(|| get_one::<i64>(matches, id).map(Value::from))
        .or_else(|| get_one::<u64>(matches, id).map(Value::from))
        .or_else(|| get_one::<i32>(matches, id).map(Value::from))
        .or_else(|| get_one::<u32>(matches, id).map(Value::from))
        .or_else(|| get_one::<usize>(matches, id).map(Value::from))
        .or_else(|| get_one::<u16>(matches, id).map(Value::from))
        .or_else(|| get_one::<u8>(matches, id).map(Value::from))
        .or_else(|| get_one::<f64>(matches, id).map(Value::from))
        .or_else(|| {
            get_one::<PathBuf>(matches, id)
                .map(|path| Value::String(path.to_string_lossy().into_owned()))
        });
    typed.or_else(|| raw_values(matches, id)?.as_array()?.first().cloned())
}

fn raw_values(matches: &ArgMatches, id: &str) -> Option<Value> {
    let raw = matches.try_get_raw(id).ok()??;
    Some(Value::Array(
        raw.map(|value| Value::String(value.to_string_lossy().into_owned()))
            .collect(),
    ))
}

fn get_one<T>(matches: &ArgMatches, id: &str) -> Option<T>
where
    T: std::any::Any + Clone + Send + Sync + 'static,
{
    matches.try_get_one::<T>(id).ok().flatten().cloned()
}
