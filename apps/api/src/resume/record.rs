use crate::models::candidate::CandidateRecord;
use crate::resume::fields::extract_fields;
use crate::resume::skills::{extract_skills, join_skills};

/// Number of characters of raw resume text kept on the record.
pub const SNIPPET_CHARS: usize = 500;

/// Composes field extraction, skill extraction and the resume snippet into a
/// single record. Pure; persisting the result is the caller's job.
pub fn build_record(text: &str) -> CandidateRecord {
    let fields = extract_fields(text);
    let skills = extract_skills(text);

    CandidateRecord {
        name: fields.name,
        email: fields.email,
        skills: join_skills(&skills),
        parsed_resume: snippet(text),
    }
}

/// Truncates on character boundaries so multi-byte text is never split.
fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}
