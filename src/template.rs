//! The [`Match`] value shared by every matcher.
//!
//! A match is a *template* (the input with each matched span replaced by
//! [`PLACEHOLDER`]) plus the matched substrings in left-to-right order. All
//! offsets are **byte** offsets into the original input.

use std::ops::Range;

use crate::error::MatcherError;

/// Marker left in the template in place of each matched span.
pub const PLACEHOLDER: &str = "%s";

/// Template and ordered patterns produced by one matcher run.
///
/// The template text is never escaped, so an input that already contains
/// `%s` is kept verbatim. Placeholder positions are tracked separately which
/// keeps [`Match::reconstruct`] exact for every input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Match {
    template: String,
    patterns: Vec<String>,
    /// Byte offset of each placeholder within `template`.
    slots: Vec<usize>,
}

impl Match {
    /// A match with no occurrences: the template is the input itself.
    pub fn unmatched(input: &str) -> Self {
        Self {
            template: input.to_string(),
            patterns: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Render a match from `input` and the spans a matcher found in it.
    ///
    /// Spans must be in ascending order. A span that begins before the end of
    /// the previously accepted span, or that does not lie on `char` boundaries
    /// inside `input`, is skipped.
    pub fn from_spans<I>(input: &str, spans: I) -> Self
    where
        I: IntoIterator<Item = Range<usize>>,
    {
        let mut template = String::with_capacity(input.len());
        let mut patterns = Vec::new();
        let mut slots = Vec::new();
        let mut cursor = 0;

        for span in spans {
            if span.start < cursor || span.start > span.end {
                continue;
            }
            let (Some(before), Some(text)) = (input.get(cursor..span.start), input.get(span.clone()))
            else {
                continue;
            };
            template.push_str(before);
            slots.push(template.len());
            template.push_str(PLACEHOLDER);
            patterns.push(text.to_string());
            cursor = span.end;
        }
        // `cursor` is always a char boundary of `input` here
        template.push_str(&input[cursor..]);

        Self {
            template,
            patterns,
            slots,
        }
    }

    /// The input with every matched span replaced by [`PLACEHOLDER`].
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Matched substrings in order of appearance.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Number of matched occurrences.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Consume the match, returning `(template, patterns)`.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.template, self.patterns)
    }

    /// Fill each placeholder with its matched pattern, giving back the input.
    pub fn reconstruct(&self) -> String {
        self.fill(&self.patterns)
    }

    /// Fill the placeholders, in order, with `values`.
    pub fn substitute<I, S>(&self, values: I) -> Result<String, MatcherError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<S> = values.into_iter().collect();
        if values.len() != self.slots.len() {
            return Err(MatcherError::ArityMismatch {
                expected: self.slots.len(),
                found: values.len(),
            });
        }
        Ok(self.fill(&values))
    }

    fn fill<S: AsRef<str>>(&self, values: &[S]) -> String {
        let extra: usize = values.iter().map(|v| v.as_ref().len()).sum();
        let mut out = String::with_capacity(self.template.len() + extra);
        let mut cursor = 0;
        for (&slot, value) in self.slots.iter().zip(values) {
            out.push_str(&self.template[cursor..slot]);
            out.push_str(value.as_ref());
            cursor = slot + PLACEHOLDER.len();
        }
        out.push_str(&self.template[cursor..]);
        out
    }
}
