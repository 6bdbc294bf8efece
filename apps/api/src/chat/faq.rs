//! FAQ Responder — canned answers keyed by trigger phrases.
//!
//! The table is walked in declaration order and the first trigger contained in
//! the lowercased query wins, even when a later trigger would also match.

/// (trigger phrase, response). Triggers are lowercase.
pub const FAQ_TABLE: &[(&str, &str)] = &[
    (
        "what are the roles open",
        "please visit https://www.iconma.com/career for open positions",
    ),
    (
        "application status",
        "You can track your application status via our career portal or by contacting HR.",
    ),
    (
        "resume shortlisted",
        "RecruitBot will notify you once your resume is shortlisted for the next round.",
    ),
    (
        "skills required",
        "The skills vary by role, but common ones include Python, SQL, Java, and problem-solving.",
    ),
    (
        "process timeline",
        "The typical hiring process takes 2–3 weeks including interviews and feedback.",
    ),
    (
        "pay range",
        "Compensation is role-dependent. RecruitBot can provide details once you reach the HR round.",
    ),
    (
        "visa",
        "Yes, we accept H1B and OPT candidates depending on the client’s requirements.",
    ),
    (
        "client",
        "The client details will be disclosed once you progress to the next stage of hiring.",
    ),
];

pub fn respond(query: &str) -> Option<&'static str> {
    let query = query.to_lowercase();
    FAQ_TABLE
        .iter()
        .find(|(trigger, _)| query.contains(trigger))
        .map(|(_, answer)| *answer)
}
