//! Small text helpers shared by constraint and predicate messages.

use crate::parameter::{Parameter, ParameterKind};

/// Joins parameter labels with `", "`.
pub fn join_labels<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joins strings as in `"a, b and c"`.
pub fn join_with_and<S: AsRef<str>>(strings: &[S]) -> String {
    match strings {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => format!("{} and {}", join_labels(init), last.as_ref()),
    }
}

/// Formats a parameter for a list: its label, followed by its other spellings between
/// parentheses, e.g. `--output (-o)`.
pub fn format_param(param: &Parameter) -> String {
    if param.kind == ParameterKind::Argument || param.opts.len() < 2 {
        return param.label();
    }
    let mut opts = param.opts.iter().map(String::as_str).collect::<Vec<_>>();
    opts.sort_by_key(|opt| opt.len());
    match opts.split_last() {
        Some((long, others)) => format!("{long} ({})", others.join(", ")),
        None => param.label(),
    }
}

/// Formats parameters as an indented list, one per line.
pub fn format_param_list(params: &[&Parameter]) -> String {
    params
        .iter()
        .map(|param| format!("  {}\n", format_param(param)))
        .collect()
}
