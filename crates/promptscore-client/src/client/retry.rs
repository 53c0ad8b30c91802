//! Compatibility retry policy.
//!
//! Backends that predate multi-language scoring reject the `lang` field with
//! 400 or 422. The policy maps such a status onto a replacement request
//! without the field, at most once.

use crate::types::ScoreRequest;

/// Declarative retry rule: status predicate, request transform, attempt cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Statuses that trigger the retry.
    pub statuses: Vec<u16>,

    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            statuses: vec![400, 422],
            max_retries: 1,
        }
    }
}

impl RetryPolicy {
    /// No retries at all.
    pub fn disabled() -> Self {
        Self {
            statuses: Vec::new(),
            max_retries: 0,
        }
    }

    /// Request to send next, if `status` on attempt number `retries_done`
    /// calls for one. Requests without a language are never retried.
    pub fn retry_for(
        &self,
        request: &ScoreRequest,
        status: u16,
        retries_done: u32,
    ) -> Option<ScoreRequest> {
        if retries_done >= self.max_retries {
            return None;
        }
        if request.lang.is_none() || !self.statuses.contains(&status) {
            return None;
        }
        Some(request.without_lang())
    }
}
