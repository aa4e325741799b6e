use std::{ffi::OsString, sync::Arc};

use clap::{ArgMatches, Command, error::ErrorKind};
use paramguard_core::{Constraints, Context, Parameters, Settings};

use crate::{context::context_from_matches, error::Error, parameters::parameters_from_command};

/// A clap command whose parsed values are checked against a [`Constraints`] registry.
#[derive(Debug, Clone)]
pub struct ConstrainedCommand {
    command: Command,
    parameters: Arc<Parameters>,
    constraints: Constraints,
    settings: Settings,
}

impl ConstrainedCommand {
    /// Attaches `constraints` to `command` with the default settings.
    ///
    /// See [`ConstrainedCommand::with_settings`].
    pub fn new(command: Command, constraints: Constraints) -> Result<Self, Error> {
        Self::with_settings(command, constraints, Settings::default())
    }

    /// Attaches `constraints` to `command`.
    ///
    /// - If consistency checks are enabled, checks every constraint can be satisfied by the
    ///   declared arguments;
    /// - moves the options of each option group under a help heading made of the group title
    ///   and the help of its constraint, hiding the options of hidden groups;
    /// - if constraints must be shown, appends the "Constraints" section to the help.
    ///
    /// Fails with [`Error::Constraint`] if a constraint refers to an unknown argument or can't
    /// be satisfied.
    pub fn with_settings(
        command: Command,
        constraints: Constraints,
        settings: Settings,
    ) -> Result<Self, Error> {
        let parameters = Arc::new(parameters_from_command(&command));
        let ctx = Context::new(Arc::clone(&parameters)).with_settings(settings);
        tracing::debug!(
            command = %parameters.command,
            parameters = parameters.len(),
            "attaching constraints"
        );

        if settings.must_check_consistency() {
            constraints.check_consistency(&parameters)?;
        }

        let mut command = command;
        for group in constraints.groups() {
            parameters.get_many(&group.options)?;
            let heading = group.heading(&ctx)?;
            let hidden = group.hidden;
            for name in &group.options {
                let heading = heading.clone();
                command = command.mut_arg(name, move |arg| arg.help_heading(heading).hide(hidden));
            }
        }

        if constraints.must_show_constraints(&ctx)
            && let Some(section) = constraints.format_help(&ctx)?
        {
            let after_help = match command.get_after_help() {
                Some(existing) => format!("{existing}\n\n{section}"),
                None => section,
            };
            command = command.after_help(after_help);
        }

        Ok(Self {
            command,
            parameters,
            constraints,
            settings,
        })
    }

    /// The underlying clap command, with the group headings applied.
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// The parameters declared by the command.
    pub fn parameters(&self) -> &Arc<Parameters> {
        &self.parameters
    }

    /// The constraints checked after parsing.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Parses `args` and checks the constraints on the parsed values.
    ///
    /// A violated constraint is returned as a clap usage error ([`Error::Usage`]), so it is
    /// reported like any other invalid command line.
    pub fn try_get_matches_from<I, T>(&mut self, args: I) -> Result<(ArgMatches, Context), Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(args)?;
        let ctx = context_from_matches(&self.command, Arc::clone(&self.parameters), &matches)
            .with_settings(self.settings);

        match self.constraints.check_values(&ctx) {
            Ok(()) => Ok((matches, ctx)),
            Err(paramguard_core::Error::Violated(err)) => Err(self
                .command
                .error(ErrorKind::ArgumentConflict, err.message())
                .into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Like [`try_get_matches_from`](Self::try_get_matches_from), exiting the process on
    /// usage errors.
    ///
    /// # Panics
    ///
    /// Panics if a constraint is inconsistent with the command declaration.
    pub fn get_matches_from<I, T>(&mut self, args: I) -> (ArgMatches, Context)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.try_get_matches_from(args) {
            Ok(parsed) => parsed,
            Err(Error::Usage(err)) => err.exit(),
            Err(Error::Constraint(err)) => panic!("invalid constraints declaration: {err}"),
        }
    }
}
