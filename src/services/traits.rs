//! Trait abstraction for the external services to enable mocking in tests

use super::ServiceError;
use crate::state::FormData;
use async_trait::async_trait;

/// Rewrites a business description via a generative text service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnhanceService: Send + Sync {
    /// Send the prompt and return the generated text. One attempt, no retry.
    async fn enhance(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Forwards a completed registration to the intake endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitService: Send + Sync {
    /// POST the full record as JSON. One attempt, no retry.
    async fn submit(&self, data: &FormData) -> Result<(), ServiceError>;
}
