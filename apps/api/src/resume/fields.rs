use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sentinel stored in place of any field the extractor could not find.
pub const NOT_FOUND: &str = "Not Found";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+ [A-Z][a-z]+").expect("valid name regex"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFields {
    pub name: String,
    pub email: String,
}

/// Pulls the first name-shaped and the first email-shaped substring out of raw
/// resume text. Later candidates in the document are ignored.
pub fn extract_fields(text: &str) -> CandidateFields {
    CandidateFields {
        name: first_match(&NAME_PATTERN, text),
        email: first_match(&EMAIL_PATTERN, text),
    }
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}
