// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Descriptiveness scoring for candidate descriptions
//!
//! A score is the sum of an ordered table of weighted rules, clamped to
//! `0..=10`. Each rule reports how many times it fires on the tokenised
//! candidate, so per-word bonuses and one-off penalties share the same shape.
//!
//! Generic words (`untitled`, `copy2`) earn no word credit: they are left
//! out of the length bands and the per-word bonuses, and only trigger the
//! generic penalty. Appending a meaningful word never lowers the score and
//! appending a generic word never raises it.

/// Upper bound of the score scale
pub const MAX_SCORE: u8 = 10;

const GENERIC_TERMS: &[&str] = &[
    "untitled", "document", "file", "new", "copy", "temp", "tmp", "test", "unnamed", "download",
];

const DESCRIPTIVE_TERMS: &[&str] = &[
    "report", "analysis", "summary", "guide", "manual", "proposal", "plan", "minutes", "agenda",
    "invoice", "budget", "review",
];

/// Tokenised view of a candidate description
#[derive(Debug, Clone)]
pub struct Words<'a> {
    tokens: Vec<&'a str>,
    lowered: Vec<String>,
    /// Tokens that are not generic words
    credited: Vec<&'a str>,
}

impl<'a> Words<'a> {
    /// Split on every non-alphanumeric character, matching what the name
    /// normaliser will later treat as a separator
    pub fn new(description: &'a str) -> Self {
        let tokens: Vec<&str> = description
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let credited = tokens
            .iter()
            .zip(&lowered)
            .filter(|(_, lower)| !is_generic_word(lower))
            .map(|(token, _)| *token)
            .collect();
        Self {
            tokens,
            lowered,
            credited,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn credited(&self) -> &[&'a str] {
        &self.credited
    }
}

/// A single weighted scoring rule
pub struct ScoreRule {
    pub name: &'static str,
    pub weight: i32,
    /// Number of times the rule fires (0 when it does not apply)
    pub hits: fn(&Words<'_>) -> usize,
}

/// Scoring rules in evaluation order
pub const RULES: &[ScoreRule] = &[
    ScoreRule { name: "single_word", weight: 1, hits: single_word },
    ScoreRule { name: "moderate_length", weight: 3, hits: moderate_length },
    ScoreRule { name: "long_but_usable", weight: 2, hits: long_but_usable },
    ScoreRule { name: "substantial_word", weight: 1, hits: substantial_words },
    ScoreRule { name: "alphabetic_word", weight: 1, hits: alphabetic_words },
    ScoreRule { name: "distinct_meaningful_words", weight: 1, hits: distinct_meaningful },
    ScoreRule { name: "descriptive_term", weight: 2, hits: descriptive_term },
    ScoreRule { name: "generic_term", weight: -2, hits: generic_term },
    ScoreRule { name: "lowercase_single_word", weight: -1, hits: lowercase_single_word },
];

fn single_word(words: &Words<'_>) -> usize {
    usize::from(words.credited.len() == 1)
}

fn moderate_length(words: &Words<'_>) -> usize {
    usize::from((2..=6).contains(&words.credited.len()))
}

// Overly long candidates earn less than moderate ones, but the per-word
// bonuses still outweigh the step down from the moderate band.
fn long_but_usable(words: &Words<'_>) -> usize {
    usize::from((7..=10).contains(&words.credited.len()))
}

fn substantial_words(words: &Words<'_>) -> usize {
    words.credited.iter().filter(|t| t.chars().count() >= 3).count()
}

fn alphabetic_words(words: &Words<'_>) -> usize {
    words
        .credited
        .iter()
        .filter(|t| t.chars().all(char::is_alphabetic))
        .count()
}

fn distinct_meaningful(words: &Words<'_>) -> usize {
    let mut seen: Vec<&str> = words
        .lowered
        .iter()
        .map(String::as_str)
        .filter(|w| is_meaningful_word(w))
        .collect();
    seen.sort_unstable();
    seen.dedup();
    usize::from(seen.len() >= 3)
}

fn descriptive_term(words: &Words<'_>) -> usize {
    let found = words.lowered.iter().any(|w| {
        DESCRIPTIVE_TERMS
            .iter()
            .any(|term| w == term || w.strip_suffix('s') == Some(term))
    });
    usize::from(found)
}

fn generic_term(words: &Words<'_>) -> usize {
    if words.is_empty() {
        return 0;
    }
    let generic = words.lowered.iter().any(|w| is_generic_word(w));
    let all_numeric = words
        .tokens
        .iter()
        .all(|t| t.chars().all(|c| c.is_numeric()));
    usize::from(generic || all_numeric)
}

fn lowercase_single_word(words: &Words<'_>) -> usize {
    match words.credited.as_slice() {
        [only] => usize::from(
            only.chars().any(char::is_alphabetic) && !only.chars().any(char::is_uppercase),
        ),
        _ => 0,
    }
}

/// Generic words, also with a numeric tail such as `document1` or `copy02`
pub fn is_generic_word(lowered: &str) -> bool {
    let stem = lowered.trim_end_matches(|c: char| c.is_ascii_digit());
    GENERIC_TERMS.contains(&stem)
}

/// A word that distinguishes one document from another
pub fn is_meaningful_word(lowered: &str) -> bool {
    lowered.chars().count() >= 3
        && lowered.chars().all(char::is_alphabetic)
        && !is_generic_word(lowered)
}

/// Score a candidate description on the `0..=10` scale
pub fn score(description: &str) -> u8 {
    let words = Words::new(description);
    if words.is_empty() {
        return 0;
    }
    let total: i32 = RULES.iter().map(|rule| contribution(rule, &words)).sum();
    total.clamp(0, i32::from(MAX_SCORE)) as u8
}

/// Per-rule contributions, skipping rules that did not fire
pub fn breakdown(description: &str) -> Vec<(&'static str, i32)> {
    let words = Words::new(description);
    RULES
        .iter()
        .map(|rule| (rule.name, contribution(rule, &words)))
        .filter(|(_, points)| *points != 0)
        .collect()
}

fn contribution(rule: &ScoreRule, words: &Words<'_>) -> i32 {
    let hits = i32::try_from((rule.hits)(words)).unwrap_or(i32::MAX);
    rule.weight.saturating_mul(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_good_descriptions() {
        assert!(score("Project Report Analysis") >= 7);
        assert!(score("Meeting Minutes Summary") >= 7);
        assert!(score("Financial_Report_2024") >= 7);
    }

    #[test]
    fn test_score_poor_descriptions() {
        assert!(score("untitled") <= 3);
        assert!(score("Document1") <= 3);
        assert!(score("2024") <= 3);
        assert_eq!(score(""), 0);
        assert_eq!(score("--- ..."), 0);
    }

    #[test]
    fn test_score_medium_descriptions() {
        let notes = score("Notes");
        assert!((3..=6).contains(&notes), "Notes scored {}", notes);
        let chapter = score("Chapter One");
        assert!((4..=8).contains(&chapter), "Chapter One scored {}", chapter);
    }

    #[test]
    fn test_score_is_deterministic_and_bounded() {
        let samples = [
            "a",
            "import sys",
            "The quick brown fox jumps over the lazy dog again and again today",
            "REPORT REPORT REPORT REPORT REPORT REPORT REPORT REPORT REPORT",
            "new new new new",
            "ÜBERSICHT Jahresbericht Planung",
            "12 34 56",
        ];
        for sample in samples {
            let first = score(sample);
            assert_eq!(first, score(sample));
            assert!(first <= MAX_SCORE);
        }
    }

    #[test]
    fn test_lowercase_single_word_penalised() {
        assert!(score("notes") < score("Notes"));
        assert!(score("notes") < score("meeting notes"));
    }

    #[test]
    fn test_adding_meaningful_word_never_decreases() {
        let bases = [
            "",
            "notes",
            "untitled",
            "Quarterly",
            "one two three four five six",
            "alpha beta gamma delta epsilon zeta eta theta iota kappa",
            "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu",
            "2024",
            "Document1",
        ];
        for base in bases {
            for extra in ["Budget", "harbour", "Migration"] {
                let extended = format!("{} {}", base, extra);
                assert!(
                    score(&extended) >= score(base),
                    "'{}' ({}) scored below '{}' ({})",
                    extended,
                    score(&extended),
                    base,
                    score(base)
                );
            }
        }
    }

    #[test]
    fn test_generic_pattern_never_increases() {
        let pairs = [
            ("Harbour Survey", "Harbour untitled"),
            ("alpha beta gamma", "alpha beta document"),
            ("Budget Plan", "Budget copy1"),
            ("Lighthouse", "untitled"),
            ("Spring Catalogue", "2024 0315"),
        ];
        for (meaningful, generic) in pairs {
            assert!(
                score(generic) <= score(meaningful),
                "'{}' outscored '{}'",
                generic,
                meaningful
            );
        }
        for rule in RULES.iter().filter(|r| r.name == "generic_term") {
            assert!(rule.weight < 0);
        }
    }

    #[test]
    fn test_appending_generic_word_never_increases() {
        let bases = [
            "Lighthouse",
            "Report",
            "Budget",
            "notes",
            "Harbour Survey",
            "one two three four five six",
            "alpha beta gamma delta epsilon zeta eta theta iota kappa",
            "2024",
        ];
        for base in bases {
            for generic in ["untitled", "copy", "document", "new2", "tmp"] {
                for extended in [format!("{} {}", base, generic), format!("{} {}", generic, base)] {
                    assert!(
                        score(&extended) <= score(base),
                        "'{}' ({}) outscored '{}' ({})",
                        extended,
                        score(&extended),
                        base,
                        score(base)
                    );
                }
            }
        }
        assert!(score("Untitled Report") <= score("Report"));
    }

    #[test]
    fn test_generic_words_earn_no_credit() {
        let words = Words::new("Budget copy2 untitled");
        assert_eq!(words.len(), 3);
        assert_eq!(words.credited(), &["Budget"]);
    }

    #[test]
    fn test_generic_word_detection() {
        assert!(is_generic_word("document"));
        assert!(is_generic_word("document12"));
        assert!(is_generic_word("untitled"));
        assert!(!is_generic_word("news"));
        assert!(!is_generic_word("renewal"));
    }

    #[test]
    fn test_breakdown_lists_fired_rules() {
        let rules = breakdown("untitled");
        assert_eq!(rules, vec![("generic_term", -2)]);

        let rules = breakdown("notes");
        let names: Vec<&str> = rules.iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"single_word"));
        assert!(names.contains(&"lowercase_single_word"));
        assert!(!names.contains(&"moderate_length"));
    }
}
