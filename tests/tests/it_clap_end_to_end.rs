//! End-to-end tests running constrained clap commands.

use clap::{Arg, ArgAction, Command, error::ErrorKind};
use paramguard::{
    Constraints, If, OptionGroup, Settings,
    clap::{ConstrainedCommand, Error},
    constraint::{mutually_exclusive, require_all, require_any},
};
use testlib::fixtures::fetch_command;

fn xy_command() -> ConstrainedCommand {
    let command = Command::new("xy")
        .arg(Arg::new("x").long("x"))
        .arg(Arg::new("y").long("y"));
    let constraints = Constraints::new().constraint(mutually_exclusive(), ["x", "y"]);
    ConstrainedCommand::new(command, constraints).expect("constraints are consistent")
}

fn fetch_constraints() -> Constraints {
    Constraints::new()
        .group(
            OptionGroup::new("Output format")
                .options(["json", "yaml"])
                .constraint(mutually_exclusive()),
        )
        .constraint(require_any(), ["url", "file"])
        .constraint(mutually_exclusive(), ["url", "file"])
        .constraint(If::new("user").then(require_all()), ["password"])
}

#[test]
fn mutually_exclusive_options_both_set_is_a_usage_error() {
    //* Given
    let mut command = xy_command();

    //* When
    let result = command.try_get_matches_from(["xy", "--x", "1", "--y", "2"]);

    //* Then
    let err = match result {
        Err(Error::Usage(err)) => err,
        other => panic!("expected a usage error, got {other:?}"),
    };
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    let rendered = err.to_string();
    assert!(rendered.contains("--x"));
    assert!(rendered.contains("--y"));
}

#[test]
fn mutually_exclusive_options_one_set_succeeds() {
    //* Given
    let mut command = xy_command();

    //* When
    let result = command.try_get_matches_from(["xy", "--x", "1"]);

    //* Then
    let (matches, ctx) = result.expect("only one option is set");
    assert_eq!(
        matches.get_one::<String>("x").map(String::as_str),
        Some("1")
    );
    assert_eq!(ctx.is_set("y"), Ok(false));
}

#[test]
fn set_false_flag_counts_as_set_only_when_given() {
    //* Given
    let command = Command::new("paint")
        .arg(Arg::new("no_color").long("no-color").action(ArgAction::SetFalse))
        .arg(Arg::new("force_color").long("force-color").action(ArgAction::SetTrue));
    let constraints =
        Constraints::new().constraint(mutually_exclusive(), ["no_color", "force_color"]);
    let mut command =
        ConstrainedCommand::new(command, constraints).expect("constraints are consistent");

    //* When
    let bare = command.try_get_matches_from(["paint"]);
    let forced = command.try_get_matches_from(["paint", "--force-color"]);
    let both = command.try_get_matches_from(["paint", "--force-color", "--no-color"]);

    //* Then
    let (_, ctx) = bare.expect("no flag is given");
    assert_eq!(ctx.is_set("no_color"), Ok(false));
    let (_, ctx) = forced.expect("only --force-color is given");
    assert_eq!(ctx.is_set("no_color"), Ok(false));
    assert_eq!(ctx.is_set("force_color"), Ok(true));
    match both {
        Err(Error::Usage(err)) => assert_eq!(err.exit_code(), 2),
        other => panic!("expected a usage error, got {other:?}"),
    }
}

#[test]
fn first_violated_constraint_is_reported() {
    //* Given
    let mut command =
        ConstrainedCommand::new(fetch_command(), fetch_constraints()).expect("consistent");

    //* When
    let err = command
        .try_get_matches_from(["fetch", "--json", "--yaml", "--user", "me"])
        .expect_err("several constraints are violated");

    //* Then
    assert_eq!(err.exit_code(), 2);
    assert!(
        err.to_string()
            .contains("the following parameters are mutually exclusive: --json, --yaml")
    );
}

#[test]
fn conditional_requirement_is_checked_after_parsing() {
    //* Given
    let mut command =
        ConstrainedCommand::new(fetch_command(), fetch_constraints()).expect("consistent");

    //* When
    let missing = command.try_get_matches_from(["fetch", "--url", "u", "--user", "me"]);
    let given =
        command.try_get_matches_from(["fetch", "--url", "u", "--user", "me", "--password", "pw"]);

    //* Then
    let err = missing.expect_err("--password is missing");
    assert!(err.to_string().contains("when --user is set, --password is required"));
    assert!(given.is_ok());
}

#[test]
fn constraints_help_section_is_rendered() {
    //* Given
    let settings = Settings::default().show_constraints(true);

    //* When
    let command = ConstrainedCommand::with_settings(fetch_command(), fetch_constraints(), settings)
        .expect("consistent");

    //* Then
    let after_help = command
        .command()
        .get_after_help()
        .map(ToString::to_string)
        .unwrap_or_default();
    insta::assert_snapshot!(after_help, @r"
    Constraints:
      {--url, --file}  at least 1 required
      {--url, --file}  mutually exclusive
      {--password}     all required if --user is set
    ");
}

#[test]
fn group_heading_carries_constraint_help() {
    //* When
    let command =
        ConstrainedCommand::new(fetch_command(), fetch_constraints()).expect("consistent");

    //* Then
    let headings = command
        .command()
        .get_arguments()
        .filter_map(|arg| Some((arg.get_id().as_str(), arg.get_help_heading()?)))
        .collect::<Vec<_>>();
    assert_eq!(
        headings,
        [
            ("json", "Output format [mutually exclusive]"),
            ("yaml", "Output format [mutually exclusive]"),
        ]
    );
}
