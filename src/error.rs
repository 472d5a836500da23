/// Errors raised while building a matcher or rendering a template.
///
/// Scanning itself never fails: every input string is valid.
#[derive(Debug, Clone, PartialEq)]
pub enum MatcherError {
    /// An opening or closing delimiter was the empty string.
    EmptyDelimiter,
    /// The regular expression could not be compiled.
    InvalidRegex(regex::Error),
    /// The number of substitution values differs from the number of placeholders.
    ArityMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for MatcherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDelimiter => write!(f, "Surrounding delimiters must not be empty"),
            Self::InvalidRegex(err) => write!(f, "Invalid regular expression: {err}"),
            Self::ArityMismatch { expected, found } => write!(
                f,
                "Template has {expected} placeholder{} but {found} value{} supplied",
                if *expected == 1 { "" } else { "s" },
                if *found == 1 { " was" } else { "s were" },
            ),
        }
    }
}

impl std::error::Error for MatcherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for MatcherError {
    fn from(err: regex::Error) -> Self {
        Self::InvalidRegex(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_pluralises() {
        let one = MatcherError::ArityMismatch {
            expected: 1,
            found: 2,
        };
        assert_eq!(
            one.to_string(),
            "Template has 1 placeholder but 2 values were supplied"
        );
        let many = MatcherError::ArityMismatch {
            expected: 3,
            found: 1,
        };
        assert_eq!(
            many.to_string(),
            "Template has 3 placeholders but 1 value was supplied"
        );
    }

    #[test]
    fn invalid_regex_has_source() {
        let err: MatcherError = regex::Regex::new("(").unwrap_err().into();
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Invalid regular expression"));
    }
}
