//! Profile parser — extracts name and locality from onboarding input.
//!
//! The contract: locate `"my name is"` (case-insensitive, arbitrary internal
//! spacing); everything after it up to `" and i live in"` is the name, and
//! everything after that marker is the locality. If the live-in marker is
//! absent, the remainder split at `" and "` (first segment) is the name only.
//! Extracted fields are trimmed and title-cased.

use regex::Regex;

/// Outcome of parsing one onboarding message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedProfile {
    /// Both fields extracted — onboarding can advance.
    Complete { name: String, locality: String },
    /// Name found but no locality — ask for the locality, do not advance.
    NameOnly { name: String },
    /// Neither field found — re-prompt with the expected format.
    NoMatch,
}

/// Compiled markers for the onboarding profile sentence.
pub struct ProfileParser {
    name_marker: Regex,
    live_marker: Regex,
    and_split: Regex,
}

impl ProfileParser {
    pub fn new() -> Self {
        Self {
            name_marker: Regex::new(r"(?i)my\s+name\s+is\b").unwrap(),
            live_marker: Regex::new(r"(?i)\s+and\s+i\s+live\s+in\b").unwrap(),
            and_split: Regex::new(r"(?i)\s+and\s+").unwrap(),
        }
    }

    /// Parse a raw onboarding message.
    pub fn parse(&self, text: &str) -> ParsedProfile {
        let Some(marker) = self.name_marker.find(text) else {
            return ParsedProfile::NoMatch;
        };
        let remainder = &text[marker.end()..];

        if let Some(live) = self.live_marker.find(remainder) {
            let name = title_case(remainder[..live.start()].trim());
            let locality = title_case(remainder[live.end()..].trim());
            match (name.is_empty(), locality.is_empty()) {
                (false, false) => ParsedProfile::Complete { name, locality },
                (false, true) => ParsedProfile::NameOnly { name },
                (true, _) => ParsedProfile::NoMatch,
            }
        } else {
            // No locality marker: take the text up to the first " and " as
            // the name and request the locality separately.
            let name = title_case(
                self.and_split
                    .split(remainder)
                    .next()
                    .unwrap_or("")
                    .trim(),
            );
            if name.is_empty() {
                ParsedProfile::NoMatch
            } else {
                ParsedProfile::NameOnly { name }
            }
        }
    }
}

impl Default for ProfileParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Capitalize the first letter of each whitespace-separated word and
/// lowercase the rest.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedProfile {
        ProfileParser::new().parse(text)
    }

    #[test]
    fn extracts_name_and_locality() {
        assert_eq!(
            parse("my name is Alice and I live in Bhopal, India"),
            ParsedProfile::Complete {
                name: "Alice".to_string(),
                locality: "Bhopal, India".to_string(),
            }
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            parse("MY NAME IS alice AND I LIVE IN bhopal"),
            ParsedProfile::Complete {
                name: "Alice".to_string(),
                locality: "Bhopal".to_string(),
            }
        );
    }

    #[test]
    fn tolerates_arbitrary_spacing() {
        assert_eq!(
            parse("my   name  is   mary jane   and  i  live  in   new   delhi"),
            ParsedProfile::Complete {
                name: "Mary Jane".to_string(),
                locality: "New Delhi".to_string(),
            }
        );
    }

    #[test]
    fn tolerates_surrounding_text_before_marker() {
        assert_eq!(
            parse("hello there, my name is Bob and I live in Indore"),
            ParsedProfile::Complete {
                name: "Bob".to_string(),
                locality: "Indore".to_string(),
            }
        );
    }

    #[test]
    fn title_cases_multiword_fields() {
        assert_eq!(
            parse("my name is john ronald reuel and i live in new york city"),
            ParsedProfile::Complete {
                name: "John Ronald Reuel".to_string(),
                locality: "New York City".to_string(),
            }
        );
    }

    #[test]
    fn name_without_locality_marker_yields_name_only() {
        assert_eq!(
            parse("my name is Alice"),
            ParsedProfile::NameOnly {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn name_only_splits_at_first_and() {
        assert_eq!(
            parse("my name is Alice and I like gardening"),
            ParsedProfile::NameOnly {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn missing_name_marker_yields_no_match() {
        assert_eq!(parse("I live in Bhopal"), ParsedProfile::NoMatch);
        assert_eq!(parse("hello"), ParsedProfile::NoMatch);
    }

    #[test]
    fn empty_name_yields_no_match() {
        assert_eq!(parse("my name is and i live in Bhopal"), ParsedProfile::NoMatch);
    }

    #[test]
    fn empty_locality_yields_name_only() {
        assert_eq!(
            parse("my name is Alice and I live in   "),
            ParsedProfile::NameOnly {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn title_case_basics() {
        assert_eq!(title_case("alice"), "Alice");
        assert_eq!(title_case("bhopal, india"), "Bhopal, India");
        assert_eq!(title_case("  MARY   JANE  "), "Mary Jane");
        assert_eq!(title_case(""), "");
    }
}
