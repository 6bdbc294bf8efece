//! Skill Normalizer — finds vocabulary keywords in free text and reduces each
//! hit to its stem.
//!
//! Matching is literal and case-insensitive with no word boundaries, so `AI`
//! is found inside `maintain`. Overlapping candidates resolve leftmost-longest:
//! `JavaScript` wins over `Java` at the same offset.
//!
//! Stemmer: Snowball English (Porter2). Changing the algorithm changes the set
//! of stems that will compare equal, so stored skill strings are only
//! comparable with stems produced by the same algorithm.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use rust_stemmers::{Algorithm, Stemmer};

use crate::resume::fields::NOT_FOUND;

/// The closed skill vocabulary, in its canonical order. Used for both resumes
/// and job descriptions.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "SQL",
    "C++",
    "Machine Learning",
    "AI",
    "JavaScript",
    "React",
    "Angular",
    "Node.js",
    "HTML",
    "CSS",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Cloud",
    "Agile",
    "Scrum",
    "Project Management",
];

/// Separator used when a skill set is stored as a single string.
pub const SKILL_SEPARATOR: &str = ", ";

static KEYWORD_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(SKILL_VOCABULARY)
        .expect("skill vocabulary builds a valid automaton")
});

static STEMMER: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::English));

/// Reduces a raw keyword (any casing) to its stem.
pub fn stem(raw: &str) -> String {
    STEMMER.stem(&raw.to_lowercase()).into_owned()
}

/// Returns the deduplicated stems of every vocabulary keyword found in `text`.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    KEYWORD_MATCHER
        .find_iter(text)
        .map(|m| stem(&text[m.range()]))
        .collect()
}

/// Serializes a skill set for storage: sorted, `", "`-joined, or the
/// `"Not Found"` sentinel when empty.
pub fn join_skills(skills: &BTreeSet<String>) -> String {
    if skills.is_empty() {
        return NOT_FOUND.to_string();
    }
    skills
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(SKILL_SEPARATOR)
}
