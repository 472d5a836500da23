//! Day-name recognition automaton.
//!
//! A hand-minimised DFA that finds every non-overlapping occurrence of an
//! English day name in one left-to-right pass. Only the first letter of a
//! day name may be uppercase; `Monday` and `monday` match, `MONDAY` does not.
//!
//! Keywords share states wherever their remaining suffixes agree:
//!
//! | State   | Still required | Reached after                    |
//! |---------|----------------|----------------------------------|
//! | `Nday`  | `nday`         | `su`, `mo`                       |
//! | `Esday` | `esday`        | `tu`, `wedn`                     |
//! | `Sday`  | `sday`         | `tue`, `thur`                    |
//! | `Day`   | `day`          | `sun` `mon` `fri` `tues` `wednes` `thurs` `satur` |
//!
//! A dead end abandons the candidate without backtracking, so a day name
//! that begins inside an abandoned candidate (the `tuesday` in `satuesday`)
//! is not found.

mod scanner;
pub mod state;

pub use scanner::KeywordSpans;

use crate::matcher::Matcher;
use crate::template::Match;

/// Replace every day name in `input` with a placeholder.
pub fn match_keywords(input: &str) -> Match {
    Match::from_spans(input, KeywordSpans::new(input))
}

/// [`Matcher`] wrapper around [`match_keywords`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DaysOfWeek;

impl Matcher for DaysOfWeek {
    fn find(&self, input: &str) -> Match {
        match_keywords(input)
    }
}
