//! Keyword vocabularies used to classify decision and option text.
//!
//! The classification rules live here as named data so they can be unit
//! tested and swapped without touching the scorer's control flow. All
//! matching is case-insensitive substring containment over pre-lowercased
//! text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words that mark the decision itself as work/study related.
pub const WORK_CONTEXT_KEYWORDS: &[&str] = &[
    "work", "project", "job", "task", "assignment", "study", "homework", "deadline", "school",
    "college", "office",
];

/// Words that mark an option as avoidance or procrastination.
pub const AVOIDANCE_KEYWORDS: &[&str] = &[
    "sleep", "rest", "relax", "nothing", "later", "tomorrow", "skip", "ignore", "avoid",
    "procrastinate", "delay", "netflix", "game", "play", "chill",
];

/// Words that mark an option as productive.
pub const PRODUCTIVE_KEYWORDS: &[&str] = &[
    "work", "project", "study", "complete", "finish", "start", "begin", "do", "create", "build",
    "learn", "practice", "maths", "math", "graphics", "code", "write", "research", "prepare",
];

/// Positive-sentiment words, worth +5 each when present in an option.
pub const POSITIVE_SENTIMENT: &[&str] = &[
    "best", "better", "good", "great", "important", "priority", "urgent", "deadline", "required",
    "necessary",
];

/// Negative-sentiment words, worth -3 each when present in an option.
pub const NEGATIVE_SENTIMENT: &[&str] =
    &["risk", "bad", "problem", "difficult", "hard", "boring", "tedious"];

/// Patterns for boilerplate pros/cons users type without thinking.
/// Entries matching any of these are dropped before being quoted in the
/// generated reasoning.
static GENERIC_PRO_CON_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^\s*(good|bad|nice|ok|okay|fine)\s*$",
        r"(?i)^\s*(pros?|cons?)\s*$",
        r"(?i)^\s*(yes|no|maybe|idk|dunno|n/?a|none|nothing|-)\s*$",
        r"(?i)^\s*option\s*\d+\s*$",
        r"(?i)^\s*(it'?s\s+)?(good|bad)\s+(option|choice|idea)\s*$",
        r"^\s*$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("vocabulary pattern must compile"))
    .collect()
});

/// True if `text` (already lowercased) contains any of the given keywords.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Counts how many distinct keywords from the set appear in `text`.
pub fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

/// True if the phrase is boilerplate and should not be quoted verbatim.
pub fn is_generic_phrase(phrase: &str) -> bool {
    GENERIC_PRO_CON_PATTERNS.iter().any(|re| re.is_match(phrase))
}

/// Filters a pros/cons list down to phrases worth quoting.
pub fn meaningful_phrases<'a>(phrases: &'a [String]) -> Vec<&'a str> {
    phrases
        .iter()
        .map(String::as_str)
        .filter(|p| !is_generic_phrase(p))
        .collect()
}
