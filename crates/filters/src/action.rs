use std::fmt;

/// Role a rule plays when its pattern matches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterAction {
    /// Copy the matching source file verbatim alongside its artifact.
    Include,
    /// Drop the matching entry and, for directories, everything beneath it.
    Exclude,
}

impl fmt::Display for FilterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Exclude => f.write_str("exclude"),
        }
    }
}
