//! Trait abstraction for the job-submission sink to enable mocking in tests

use crate::state::JobPost;
use anyhow::Result;
use async_trait::async_trait;

/// Sink that accepts a completed job post
///
/// The wizard hands over the record and moves on; whatever the sink does
/// with it (archive, upload) is its own business.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobSinkTrait: Send + Sync {
    async fn submit(&mut self, post: &JobPost) -> Result<()>;
}
