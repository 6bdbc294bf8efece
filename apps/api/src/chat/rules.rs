//! Chat Router — an ordered list of rules evaluated top to bottom. Each rule
//! either declines a turn (`None`) or answers it; the first answer wins.

use std::sync::Arc;

use serde::Deserialize;

use crate::chat::faq;
use crate::matching::matcher::SkillMatcher;

pub const OPENING_GREETING: &str =
    "Hi there, this is ICONMA's Recruit assist. Are you looking for a job?";

pub const FALLBACK_REPLY: &str = "I didn't understand that. Try uploading your resume, checking jobs, FAQs or I can schedule a call with the recruiter";

const HELLO_REPLY: &str = "Hello! I’m RecruitBot 👋. I can help you parse resumes, check job matches, FAQs, and schedule intial conversations with the recruiters.";
const SCHEDULE_REPLY: &str =
    "Sure! Please provide candidate email, date, and availability in the sidebar.";
const RESUME_REPLY: &str = "Please upload your resume (PDF or DOCX) using the sidebar.";
const NEED_JD_REPLY: &str =
    "Please paste the Job Description in the sidebar and I’ll compare it with your uploaded resume.";
const NEED_RESUME_REPLY: &str = "Please upload your resume first to check for job matches.";

/// One user message plus whatever the caller already knows about the session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatTurn {
    pub message: String,
    /// Skills string of the candidate's uploaded resume, if any.
    #[serde(default)]
    pub candidate_skills: Option<String>,
    /// Job description pasted by the user, if any.
    #[serde(default)]
    pub jd_text: Option<String>,
}

/// A turn with its message lowercased once for every predicate.
pub struct RuleInput<'a> {
    pub turn: &'a ChatTurn,
    pub lowered: String,
    matcher: &'a dyn SkillMatcher,
}

pub struct Rule {
    pub name: &'static str,
    pub respond: fn(&RuleInput<'_>) -> Option<String>,
}

/// Default rule order: FAQ, greeting, scheduling, job match, resume upload.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "faq",
            respond: |input| faq::respond(&input.lowered).map(str::to_string),
        },
        Rule {
            name: "hello",
            respond: |input| {
                input
                    .lowered
                    .contains("hello")
                    .then(|| HELLO_REPLY.to_string())
            },
        },
        Rule {
            name: "schedule",
            respond: |input| {
                input
                    .lowered
                    .contains("schedule")
                    .then(|| SCHEDULE_REPLY.to_string())
            },
        },
        Rule {
            name: "job_match",
            respond: |input| {
                (input.lowered.contains("job") || input.lowered.contains("jd"))
                    .then(|| job_match_reply(input))
            },
        },
        Rule {
            name: "resume",
            respond: |input| {
                input
                    .lowered
                    .contains("resume")
                    .then(|| RESUME_REPLY.to_string())
            },
        },
    ]
}

fn job_match_reply(input: &RuleInput<'_>) -> String {
    let Some(jd_text) = non_blank(input.turn.jd_text.as_deref()) else {
        return NEED_JD_REPLY.to_string();
    };
    let Some(skills) = non_blank(input.turn.candidate_skills.as_deref()) else {
        return NEED_RESUME_REPLY.to_string();
    };
    input.matcher.report(skills, jd_text).summary
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct ChatRouter {
    rules: Vec<Rule>,
    matcher: Arc<dyn SkillMatcher>,
}

impl ChatRouter {
    pub fn new(matcher: Arc<dyn SkillMatcher>) -> Self {
        Self::with_rules(default_rules(), matcher)
    }

    pub fn with_rules(rules: Vec<Rule>, matcher: Arc<dyn SkillMatcher>) -> Self {
        Self { rules, matcher }
    }

    pub fn reply(&self, turn: &ChatTurn) -> String {
        let input = RuleInput {
            turn,
            lowered: turn.message.to_lowercase(),
            matcher: self.matcher.as_ref(),
        };

        let answered = self
            .rules
            .iter()
            .find_map(|rule| (rule.respond)(&input).map(|reply| (rule.name, reply)));

        match answered {
            Some((name, reply)) => {
                tracing::debug!("Chat rule '{name}' matched");
                reply
            }
            None => FALLBACK_REPLY.to_string(),
        }
    }
}
