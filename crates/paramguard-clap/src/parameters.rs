use clap::{Arg, ArgAction, Command};
use paramguard_core::{Arity, Parameter, ParameterKind, Parameters};

/// Derives the parameter declarations of a command.
///
/// The help and version arguments are skipped. Clap fills in some argument settings (e.g. the
/// number of values) only when a command is built, so this builds a copy of `command` first.
pub fn parameters_from_command(command: &Command) -> Parameters {
    let mut command = command.clone();
    command.build();

    let params = command
        .get_arguments()
        .filter(|arg| !is_builtin(arg))
        .map(parameter_from_arg);
    let mut parameters = Parameters::new(command.get_name());
    for param in params {
        parameters.insert(param);
    }
    parameters
}

/// Converts a clap argument into a parameter declaration.
pub fn parameter_from_arg(arg: &Arg) -> Parameter {
    let name = arg.get_id().as_str();
    let kind = if arg.is_positional() {
        ParameterKind::Argument
    } else if matches!(
        arg.get_action(),
        ArgAction::SetTrue | ArgAction::SetFalse | ArgAction::Count
    ) {
        ParameterKind::Flag
    } else {
        ParameterKind::Option
    };

    let mut param = Parameter::new(name, kind)
        .required(arg.is_required_set())
        .arity(arity(arg));
    if let Some(short) = arg.get_short() {
        param = param.opt(format!("-{short}"));
    }
    if let Some(long) = arg.get_long() {
        param = param.opt(format!("--{long}"));
    }
    if let Some([value_name, ..]) = arg.get_value_names()
        && arg.is_positional()
    {
        param = param.metavar(value_name.as_str());
    }
    if let Some(help) = arg.get_help() {
        param = param.help(help.to_string());
    }
    param
}

fn arity(arg: &Arg) -> Arity {
    if matches!(arg.get_action(), ArgAction::Append) {
        return Arity::Multiple;
    }
    match arg.get_num_args() {
        Some(range) if range.min_values() == range.max_values() && range.max_values() > 1 => {
            Arity::Tuple(range.max_values())
        }
        Some(range) if range.max_values() > 1 => Arity::Multiple,
        _ => Arity::Single,
    }
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> Command {
        Command::new("tool")
            .version("1.0")
            .arg(Arg::new("input").required(true))
            .arg(Arg::new("files").value_name("FILE").num_args(1..))
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .help("Where to write"),
            )
            .arg(Arg::new("dry_run").long("dry-run").action(ArgAction::SetTrue))
            .arg(Arg::new("verbose").short('v').action(ArgAction::Count))
            .arg(Arg::new("tag").long("tag").action(ArgAction::Append))
            .arg(Arg::new("point").long("point").num_args(2))
    }

    #[test]
    fn parameters_from_command_skips_help_and_version() {
        //* When
        let parameters = parameters_from_command(&command());

        //* Then
        assert_eq!(parameters.command, "tool");
        assert_eq!(parameters.len(), 7);
        assert!(!parameters.contains("help"));
        assert!(!parameters.contains("version"));
    }

    #[test]
    fn positional_arguments_are_labeled_by_value_name() {
        //* When
        let parameters = parameters_from_command(&command());

        //* Then
        let input = parameters.get("input").expect("input is declared");
        assert_eq!(input.kind, ParameterKind::Argument);
        assert!(input.required);
        assert_eq!(input.label(), "INPUT");

        let files = parameters.get("files").expect("files is declared");
        assert_eq!(files.arity, Arity::Multiple);
        assert_eq!(files.label(), "FILE");
    }

    #[test]
    fn options_are_labeled_by_long_spelling() {
        //* When
        let parameters = parameters_from_command(&command());

        //* Then
        let output = parameters.get("output").expect("output is declared");
        assert_eq!(output.kind, ParameterKind::Option);
        assert_eq!(output.opts, ["-o", "--output"]);
        assert_eq!(output.label(), "--output");
        assert_eq!(output.help.as_deref(), Some("Where to write"));
        assert!(!output.required);
    }

    #[test]
    fn flag_actions_map_to_flags() {
        //* When
        let parameters = parameters_from_command(&command());

        //* Then
        let dry_run = parameters.get("dry_run").expect("dry_run is declared");
        assert_eq!(dry_run.kind, ParameterKind::Flag);
        assert_eq!(dry_run.label(), "--dry-run");

        let verbose = parameters.get("verbose").expect("verbose is declared");
        assert_eq!(verbose.kind, ParameterKind::Flag);
        assert_eq!(verbose.label(), "-v");
    }

    #[test]
    fn value_counts_map_to_arity() {
        //* When
        let parameters = parameters_from_command(&command());

        //* Then
        let arity_of = |name: &str| parameters.get(name).map(|param| param.arity);
        assert_eq!(arity_of("tag"), Ok(Arity::Multiple));
        assert_eq!(arity_of("point"), Ok(Arity::Tuple(2)));
        assert_eq!(arity_of("output"), Ok(Arity::Single));
    }
}
