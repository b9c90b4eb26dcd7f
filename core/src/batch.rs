//! Polling helper for the asynchronous export, import and translation jobs.
//!
//! A batch operation is three independent calls: submit, poll status,
//! download. `wait_for_operation` covers the middle step. It re-issues the
//! same status GET until the job reports a terminal status. A non-2xx status
//! response ends the wait with that error; nothing is retried.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::ApiError;
use crate::executor::Executor;
use crate::http::HttpRequest;
use crate::types::Operation;

#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 60,
        }
    }
}

/// Poll `status_request` until the operation finishes and return its final
/// status document. A `FAILED` job is returned as `Ok`; inspect
/// [`Operation::is_failed`].
pub async fn wait_for_operation(
    executor: &Executor,
    status_request: &HttpRequest,
    options: PollOptions,
) -> Result<Operation, ApiError> {
    if options.max_attempts == 0 {
        return Err(ApiError::InvalidRequest(
            "PollOptions::max_attempts must be at least 1".into(),
        ));
    }
    for attempt in 1..=options.max_attempts {
        let response = executor.send_checked(status_request.clone()).await?;
        let operation: Operation = response.json()?;
        debug!(attempt, status = %operation.status, "polled operation");
        if operation.is_finished() {
            info!(id = %operation.id, status = %operation.status, "operation finished");
            return Ok(operation);
        }
        if attempt < options.max_attempts {
            tokio::time::sleep(options.interval).await;
        }
    }
    Err(ApiError::InvalidRequest(format!(
        "operation still running after {} status checks",
        options.max_attempts
    )))
}
