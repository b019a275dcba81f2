//! Status Reporter Port

use async_trait::async_trait;

use crate::domain::StatusMessage;

/// Receives the one status message produced per action
#[async_trait]
pub trait StatusReporter: Send + Sync {
    async fn report(&self, status: &StatusMessage);
}
