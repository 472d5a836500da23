//! Turn text into reusable templates by extracting the occurrences a matcher
//! recognises.
//!
//! # Example
//!
//! ```rust
//! use marker::{Matcher, match_keywords, brackets};
//!
//! let m = match_keywords("I like Tuesday and Thursday");
//! assert_eq!(m.template(), "I like %s and %s");
//! assert_eq!(m.patterns(), ["Tuesday", "Thursday"]);
//!
//! // Fill the placeholders back in, or with something else.
//! assert_eq!(m.reconstruct(), "I like Tuesday and Thursday");
//! assert_eq!(
//!     m.substitute(["tea", "cake"]).unwrap(),
//!     "I like tea and cake"
//! );
//!
//! let m = brackets().find("see [1] and [2]");
//! assert_eq!(m.template(), "see %s and %s");
//! ```

pub mod automaton;
mod error;
mod matcher;
mod template;
pub mod vocabulary;

pub use automaton::{DaysOfWeek, match_keywords};
pub use error::MatcherError;
pub use matcher::{Literal, Matcher, RegexMatcher, brackets, parens, surrounded};
pub use template::{Match, PLACEHOLDER};
