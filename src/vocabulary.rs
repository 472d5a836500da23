//! The fixed keyword vocabulary recognised by the automaton.

use phf::{Set, phf_set};

/// Canonical (lowercase) day names, Monday first.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Every accepted spelling: canonical, and with a capitalised first letter.
const KEYWORDS: Set<&'static str> = phf_set! {
    "monday", "Monday",
    "tuesday", "Tuesday",
    "wednesday", "Wednesday",
    "thursday", "Thursday",
    "friday", "Friday",
    "saturday", "Saturday",
    "sunday", "Sunday",
};

/// Test whether `word` is exactly one accepted keyword spelling.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// Both accepted spellings of a canonical keyword.
#[cfg(test)]
pub(crate) fn spellings(keyword: &str) -> [String; 2] {
    let mut chars = keyword.chars();
    let capitalised = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    [keyword.to_string(), capitalised]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_day_has_two_spellings() {
        for day in DAYS_OF_WEEK {
            for spelling in spellings(day) {
                assert!(is_keyword(&spelling), "expected keyword: {spelling}");
            }
        }
        assert_eq!(KEYWORDS.len(), DAYS_OF_WEEK.len() * 2);
    }

    #[test]
    fn other_casings_are_not_keywords() {
        assert!(!is_keyword("MONDAY"));
        assert!(!is_keyword("mOnday"));
        assert!(!is_keyword("mon"));
        assert!(!is_keyword(""));
    }

    #[test]
    fn spellings_capitalise_first_letter_only() {
        assert_eq!(spellings("wednesday"), ["wednesday", "Wednesday"]);
    }
}
