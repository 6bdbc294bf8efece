// Job matching: candidate skills vs. a pasted job description.

pub mod handlers;
pub mod matcher;
