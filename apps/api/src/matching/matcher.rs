//! Skill Matcher — overlap between a candidate's stored skills and the skills
//! a job description asks for.
//!
//! `AppState` carries an `Arc<dyn SkillMatcher>`; `StemIntersectionMatcher`
//! is the only backend and uses the same vocabulary and stemmer as resume
//! parsing, so both sides of the comparison agree on what a skill is.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::resume::skills::{extract_skills, stem};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Matched stems in ascending order.
    pub matched_skills: Vec<String>,
    pub match_count: usize,
    /// User-facing sentence describing the outcome.
    pub summary: String,
}

impl MatchReport {
    pub fn from_matches(matches: BTreeSet<String>) -> Self {
        let matched_skills: Vec<String> = matches.into_iter().collect();
        let summary = if matched_skills.is_empty() {
            "I couldn't find any matching skills between your resume and the job description. 🤔"
                .to_string()
        } else {
            format!(
                "I found the following matching skills: **{}**. Your profile looks like a good match! 🚀",
                matched_skills.join(", ")
            )
        };

        MatchReport {
            match_count: matched_skills.len(),
            matched_skills,
            summary,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait SkillMatcher: Send + Sync {
    fn match_skills(&self, candidate_skills_csv: &str, job_description: &str) -> BTreeSet<String>;

    fn report(&self, candidate_skills_csv: &str, job_description: &str) -> MatchReport {
        MatchReport::from_matches(self.match_skills(candidate_skills_csv, job_description))
    }
}

/// Stems both sides and intersects them.
pub struct StemIntersectionMatcher;

impl SkillMatcher for StemIntersectionMatcher {
    fn match_skills(&self, candidate_skills_csv: &str, job_description: &str) -> BTreeSet<String> {
        match_skills(candidate_skills_csv, job_description)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core matching
// ────────────────────────────────────────────────────────────────────────────

/// Intersects the re-stemmed candidate CSV with the skills found in the job
/// description. Either side being empty yields an empty set.
pub fn match_skills(candidate_skills_csv: &str, job_description: &str) -> BTreeSet<String> {
    let candidate = stem_csv(candidate_skills_csv);
    if candidate.is_empty() {
        return BTreeSet::new();
    }

    let wanted = extract_skills(job_description);
    candidate.intersection(&wanted).cloned().collect()
}

/// Tokens are normally stems already, but legacy or hand-entered rows may not
/// be, so every token goes through the stemmer again.
fn stem_csv(csv: &str) -> BTreeSet<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(stem)
        .collect()
}
