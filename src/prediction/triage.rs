//! Emergency phrase detection.
//!
//! A query mentioning one of these phrases should be directed to emergency
//! services regardless of what the classifier predicts.

use lazy_static::lazy_static;
use regex::Regex;

/// Phrases that indicate an emergency.
pub const EMERGENCY_PHRASES: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "shortness of breath",
    "severe bleeding",
    "unconscious",
    "fainting",
    "severe headache",
    "stroke",
    "heart attack",
    "allergic reaction",
    "severe pain",
    "cannot breathe",
    "choking",
    "severe burn",
    "overdose",
    "suicide",
    "self harm",
    "seizure",
];

lazy_static! {
    static ref EMERGENCY_PATTERN: Option<Regex> = {
        let alternatives = EMERGENCY_PHRASES
            .iter()
            .map(|p| regex::escape(p).replace(' ', r"[\s_-]+"))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternatives})\b")).ok()
    };
}

/// The emergency phrases mentioned in `text`, in [`EMERGENCY_PHRASES`] order.
pub fn emergency_phrases(text: &str) -> Vec<&'static str> {
    let Some(pattern) = EMERGENCY_PATTERN.as_ref() else {
        return Vec::new();
    };
    let found: Vec<String> = pattern
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .to_lowercase()
                .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
                .filter(|w| !w.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    EMERGENCY_PHRASES
        .iter()
        .copied()
        .filter(|phrase| found.iter().any(|f| f == phrase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        assert!(EMERGENCY_PATTERN.is_some());
    }

    #[test]
    fn test_detects_phrases_case_insensitively() {
        assert_eq!(emergency_phrases("sudden CHEST PAIN, sweating"), vec!["chest pain"]);
        assert_eq!(emergency_phrases("chest_pain"), vec!["chest pain"]);
        assert_eq!(emergency_phrases("had a seizure"), vec!["seizure"]);
        assert!(emergency_phrases("chills, fatigue").is_empty());
    }

    #[test]
    fn test_requires_word_boundaries() {
        assert!(emergency_phrases("seizures-free checkup").is_empty());
        assert!(emergency_phrases("unstroked").is_empty());
    }

    #[test]
    fn test_lists_found_phrases_in_fixed_order() {
        assert_eq!(
            emergency_phrases("Fainting and chest  pain"),
            vec!["chest pain", "fainting"]
        );
        assert_eq!(
            emergency_phrases("chest pain, fainting, chest pain"),
            vec!["chest pain", "fainting"]
        );
        assert!(emergency_phrases("cough").is_empty());
    }
}
