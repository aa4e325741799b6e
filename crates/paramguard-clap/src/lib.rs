//! # paramguard-clap
//!
//! Clap integration for paramguard.
//!
//! Derives the parameter declarations of a [`clap::Command`], reads the parsed values out of
//! [`clap::ArgMatches`] and checks a [`Constraints`](paramguard_core::Constraints) registry
//! after every successful parse, reporting violations as regular clap usage errors.
//!
//! ```
//! use clap::{Arg, ArgAction, Command};
//! use paramguard_clap::ConstrainedCommand;
//! use paramguard_core::{Constraints, constraint::mutually_exclusive};
//!
//! let command = Command::new("convert")
//!     .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
//!     .arg(Arg::new("yaml").long("yaml").action(ArgAction::SetTrue));
//! let constraints = Constraints::new().constraint(mutually_exclusive(), ["json", "yaml"]);
//! let mut command = ConstrainedCommand::new(command, constraints).unwrap();
//!
//! let err = command
//!     .try_get_matches_from(["convert", "--json", "--yaml"])
//!     .unwrap_err();
//! assert_eq!(err.exit_code(), 2);
//! ```

mod command;
mod context;
mod error;
mod parameters;

pub use self::{
    command::ConstrainedCommand,
    context::context_from_matches,
    error::Error,
    parameters::{parameter_from_arg, parameters_from_command},
};
