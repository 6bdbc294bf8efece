use std::sync::Arc;

use crate::chat::rules::ChatRouter;
use crate::config::Config;
use crate::matching::matcher::SkillMatcher;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CandidateStore>,
    pub config: Config,
    /// Pluggable matcher. Default: StemIntersectionMatcher.
    pub matcher: Arc<dyn SkillMatcher>,
    pub chat: Arc<ChatRouter>,
}
