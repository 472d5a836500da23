//! The [`Matcher`] trait and the literal and regex matchers.
//!
//! Every matcher returns a [`Match`], so callers can swap recognition
//! strategies freely. Any `Fn(&str) -> Match` is a matcher too.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::MatcherError;
use crate::template::Match;

/// Something that finds occurrences in a string and templates them.
pub trait Matcher {
    fn find(&self, input: &str) -> Match;
}

impl<F> Matcher for F
where
    F: Fn(&str) -> Match,
{
    fn find(&self, input: &str) -> Match {
        self(input)
    }
}

/// Non-overlapping occurrences of a literal string, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pattern: String,
    limit: Option<usize>,
}

impl Literal {
    /// Match every occurrence of `pattern`.
    ///
    /// An empty pattern matches the empty string at every char boundary.
    pub fn all(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            limit: None,
        }
    }

    /// Match only the first `n` occurrences of `pattern`.
    pub fn first(pattern: impl Into<String>, n: usize) -> Self {
        Self {
            pattern: pattern.into(),
            limit: Some(n),
        }
    }
}

impl Matcher for Literal {
    fn find(&self, input: &str) -> Match {
        let spans = input
            .match_indices(self.pattern.as_str())
            .map(|(start, text)| start..start + text.len())
            .take(self.limit.unwrap_or(usize::MAX));
        Match::from_spans(input, spans)
    }
}

/// Leftmost-first, non-overlapping matches of a regular expression.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(expr: &str) -> Result<Self, MatcherError> {
        Ok(Self {
            regex: Regex::new(expr)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl From<Regex> for RegexMatcher {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Matcher for RegexMatcher {
    fn find(&self, input: &str) -> Match {
        Match::from_spans(input, self.regex.find_iter(input).map(|m| m.range()))
    }
}

/// Text that starts with `open` and runs to the last `close` before the next
/// `open` (or the end of input). The run between them is greedy, so
/// `[a] b] [c]` yields `[a] b]` and `[c]`.
pub fn surrounded(open: &str, close: &str) -> Result<RegexMatcher, MatcherError> {
    if open.is_empty() || close.is_empty() {
        return Err(MatcherError::EmptyDelimiter);
    }
    let open = regex::escape(open);
    let close = regex::escape(close);
    RegexMatcher::new(&format!("{open}[^{open}]*{close}"))
}

static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\[]*\]").expect("valid regex pattern"));

static PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^\(]*\)").expect("valid regex pattern"));

/// Text in square brackets, e.g. `[note]`.
pub fn brackets() -> RegexMatcher {
    RegexMatcher::from(BRACKETS.clone())
}

/// Text in parentheses, e.g. `(aside)`.
pub fn parens() -> RegexMatcher {
    RegexMatcher::from(PARENS.clone())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::automaton::DaysOfWeek;

    #[test]
    fn literal_all() {
        let m = Literal::all("ab").find("ab-ab-abab");
        assert_eq!(m.template(), "%s-%s-%s%s");
        assert_eq!(m.patterns(), ["ab", "ab", "ab", "ab"]);
    }

    #[test]
    fn literal_does_not_overlap() {
        let m = Literal::all("aa").find("aaaaa");
        assert_eq!(m.template(), "%s%sa");
        assert_eq!(m.len(), 2);
    }

    #[rstest]
    #[case(0, "x.x.x", 0)]
    #[case(2, "%s.%s.x", 2)]
    #[case(5, "%s.%s.%s", 3)]
    fn literal_first_n(#[case] n: usize, #[case] template: &str, #[case] count: usize) {
        let m = Literal::first("x", n).find("x.x.x");
        assert_eq!(m.template(), template);
        assert_eq!(m.len(), count);
    }

    #[test]
    fn empty_literal_matches_every_boundary() {
        let m = Literal::all("").find("ab");
        assert_eq!(m.template(), "%sa%sb%s");
        assert_eq!(m.len(), 3);
        assert_eq!(m.reconstruct(), "ab");
    }

    #[test]
    fn regex_matches() {
        let m = RegexMatcher::new(r"\d+").unwrap().find("a1b22c333");
        assert_eq!(m.template(), "a%sb%sc%s");
        assert_eq!(m.patterns(), ["1", "22", "333"]);
    }

    #[test]
    fn invalid_regex_is_reported() {
        assert!(matches!(
            RegexMatcher::new("(unclosed"),
            Err(MatcherError::InvalidRegex(_))
        ));
    }

    #[test]
    fn brackets_and_parens() {
        let m = brackets().find("[a] and [b [c] d]");
        assert_eq!(m.patterns(), ["[a]", "[c] d]"]);
        assert_eq!(m.template(), "%s and [b %s");

        let m = parens().find("f(x) + g(y)");
        assert_eq!(m.patterns(), ["(x)", "(y)"]);
        assert_eq!(m.template(), "f%s + g%s");
    }

    #[rstest]
    #[case("[a] b] [c]", &["[a] b]", "[c]"], "%s %s")]
    #[case("[a]]]", &["[a]]]"], "%s")]
    #[case("[a] b] c", &["[a] b]"], "%s c")]
    fn surrounded_runs_to_last_close_before_next_open(
        #[case] input: &str,
        #[case] patterns: &[&str],
        #[case] template: &str,
    ) {
        let m = surrounded("[", "]").unwrap().find(input);
        assert_eq!(m.patterns(), patterns);
        assert_eq!(m.template(), template);
    }

    #[test]
    fn helpers_agree_with_surrounded() {
        assert_eq!(brackets().as_str(), surrounded("[", "]").unwrap().as_str());
        assert_eq!(parens().as_str(), surrounded("(", ")").unwrap().as_str());
    }

    #[test]
    fn surrounded_escapes_metacharacters() {
        let m = surrounded("*", "+").unwrap().find("a*b+c*+");
        assert_eq!(m.patterns(), ["*b+", "*+"]);
    }

    #[test]
    fn surrounded_rejects_empty_delimiters() {
        assert_eq!(surrounded("", ")").unwrap_err(), MatcherError::EmptyDelimiter);
        assert_eq!(surrounded("(", "").unwrap_err(), MatcherError::EmptyDelimiter);
    }

    #[test]
    fn surrounded_same_delimiter() {
        let m = surrounded("'", "'").unwrap().find("say 'hi' and 'bye'");
        assert_eq!(m.patterns(), ["'hi'", "'bye'"]);
    }

    #[test]
    fn closures_are_matchers() {
        let upper = |s: &str| Match::from_spans(s, [0..s.len().min(1)]);
        assert_eq!(upper.find("xyz").template(), "%syz");
    }

    #[test]
    fn matchers_are_interchangeable() {
        let matchers: Vec<Box<dyn Matcher>> = vec![
            Box::new(DaysOfWeek),
            Box::new(Literal::all("day")),
            Box::new(brackets()),
        ];
        let input = "[monday] is a day";
        let counts: Vec<usize> = matchers.iter().map(|m| m.find(input).len()).collect();
        assert_eq!(counts, vec![1, 2, 1]);
        for matcher in &matchers {
            assert_eq!(matcher.find(input).reconstruct(), input);
        }
    }
}
