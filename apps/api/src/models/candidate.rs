use serde::{Deserialize, Serialize};

/// A parsed resume, created once per upload and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    /// Sorted, `", "`-joined skill stems, or `"Not Found"`.
    pub skills: String,
    /// First 500 characters of the extracted resume text.
    pub parsed_resume: String,
}

/// A requested interview slot. Stored as given; nothing ties it to a candidate row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRequest {
    pub candidate_email: String,
    pub interview_date: String,
    pub interview_time: String,
}
