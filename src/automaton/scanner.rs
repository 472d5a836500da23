//! Single left-to-right scan over the immutable input.

use std::ops::Range;
use std::str::CharIndices;

use tracing::trace;

use super::state::State;
use crate::vocabulary::is_keyword;

/// Iterator over the byte spans of keyword occurrences in a string.
///
/// Spans are yielded in ascending order and never overlap.
pub struct KeywordSpans<'a> {
    input: &'a str,
    chars: CharIndices<'a>,
    state: State,
    /// Byte offset where the current candidate began.
    start: usize,
}

impl<'a> KeywordSpans<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            state: State::Start,
            start: 0,
        }
    }
}

impl Iterator for KeywordSpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        for (idx, ch) in self.chars.by_ref() {
            if self.state == State::Start {
                self.start = idx;
            }
            // On a dead end the candidate is dropped and `ch` is looked up
            // again from `Start`. Consumed characters are never revisited.
            let next = self.state.next(ch).or_else(|| {
                self.start = idx;
                State::Start.next(ch)
            });
            match next {
                Some(state) if state.is_accepting() => {
                    self.state = State::Start;
                    let span = self.start..idx + ch.len_utf8();
                    debug_assert!(is_keyword(&self.input[span.clone()]));
                    trace!(start = span.start, end = span.end, "keyword accepted");
                    return Some(span);
                }
                Some(state) => self.state = state,
                None => self.state = State::Start,
            }
        }
        None
    }
}
