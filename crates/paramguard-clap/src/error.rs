/// The ways parsing a constrained command can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command line is invalid: a clap parsing error or a violated constraint.
    ///
    /// Show it to the user with [`clap::Error::exit`] or [`clap::Error::print`].
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// The constraints are inconsistent with the command declaration.
    ///
    /// This is a mistake of the CLI author, not of the user.
    #[error(transparent)]
    Constraint(#[from] paramguard_core::Error),
}

impl Error {
    /// The process exit code matching this error.
    ///
    /// Usage errors follow clap (`2`, or `0` for `--help` and `--version`); declaration errors
    /// exit with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(err) => err.exit_code(),
            Self::Constraint(_) => 1,
        }
    }
}
