use crate::core::Card;

pub type SearchOutcome = Result<Vec<Card>, String>;

#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Settled search; `request_id` ties it back to the submit that
    /// issued it so stale settlements can be discarded.
    SearchCompleted { request_id: u64, result: SearchOutcome },

    CardFetched(Result<Option<Card>, String>),

    /// Some(version) when the upstream database answered the probe.
    ApiStatus(Option<String>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::SearchCompleted { .. } => "search",
            TaskResult::CardFetched(_) => "card_fetch",
            TaskResult::ApiStatus(_) => "api_status",
        }
    }
}
