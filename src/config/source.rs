// ABOUTME: Prioritized lookup of a setting across named sources.
// ABOUTME: Command-line flags, then environment variables, then built-in defaults.

use std::fmt;

/// One place a setting may come from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// A command-line flag and the value given for it, if any.
    Flag(&'static str, Option<&'a str>),
    /// An environment variable, read through the lookup function.
    Env(&'static str),
    /// A built-in fallback.
    Default(&'static str),
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Flag(&'static str),
    Env(&'static str),
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Flag(name) => write!(f, "flag {name}"),
            Origin::Env(name) => write!(f, "environment variable {name}"),
            Origin::Default => f.write_str("default"),
        }
    }
}

/// A value together with the source that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub origin: Origin,
}

/// Return the first non-empty value among `sources`, in order.
///
/// Empty or whitespace-only values count as absent: CI systems commonly
/// export unset variables as empty strings.
pub fn lookup<E>(sources: &[Source<'_>], env: E) -> Option<Resolved>
where
    E: Fn(&str) -> Option<String>,
{
    sources.iter().find_map(|source| {
        let (value, origin) = match *source {
            Source::Flag(name, value) => (value.map(str::to_string), Origin::Flag(name)),
            Source::Env(name) => (env(name), Origin::Env(name)),
            Source::Default(value) => (Some(value.to_string()), Origin::Default),
        };
        value
            .filter(|v| !v.trim().is_empty())
            .map(|value| Resolved { value, origin })
    })
}
