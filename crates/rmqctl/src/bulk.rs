//! Bulk deletion executor: drives the per-queue delete calls and
//! aggregates their outcomes.

use crate::error::TransportError;
use async_trait::async_trait;
use log::info;

const STATUS_NO_CONTENT: u16 = 204;

/// What came back from one delete call that reached the broker.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteResponse {
    pub status: u16,
    pub body: String,
}

/// The single capability the executor needs from the management API
/// client: attempt deletion of one named queue in one vhost.
#[async_trait]
pub trait QueueDeleter {
    async fn delete_queue(
        &self,
        vhost: &str,
        name: &str,
    ) -> Result<DeleteResponse, TransportError>;
}

/// Result of one attempted deletion. `status_code` is 0 when the
/// attempt never produced an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionOutcome {
    pub queue_name: String,
    pub succeeded: bool,
    pub status_code: u16,
    pub detail: String,
}

/// Aggregate over a whole batch, in attempt order.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkResult {
    pub outcomes: Vec<DeletionOutcome>,
    pub all_succeeded: bool,
    /// True when a transport failure stopped the batch before every
    /// name was attempted. The collected outcomes are still valid.
    pub aborted: bool,
}

impl BulkResult {
    fn collect(outcomes: Vec<DeletionOutcome>, aborted: bool) -> Self {
        let all_succeeded = outcomes.iter().all(|outcome| outcome.succeeded);
        Self {
            outcomes,
            all_succeeded,
            aborted,
        }
    }
}

/// Classification of a single attempt: a broker rejection is data and
/// the batch moves on, a transport failure stops it.
enum Attempt {
    Completed(DeletionOutcome),
    Fatal(DeletionOutcome),
}

/// Delete `names` in `vhost`, strictly in order, one call at a time.
///
/// Each name is logged before its delete call so an operator can
/// correlate a failure with the item in flight. A non-204 status is
/// recorded and the batch continues; a transport failure is recorded
/// and the batch stops, since the broker is unreachable for everything
/// that remains. No retries.
pub async fn execute(vhost: &str, names: &[String], deleter: &dyn QueueDeleter) -> BulkResult {
    let mut outcomes = Vec::with_capacity(names.len());
    let mut aborted = false;

    for name in names {
        match attempt_delete(vhost, name, deleter).await {
            Attempt::Completed(outcome) => outcomes.push(outcome),
            Attempt::Fatal(outcome) => {
                outcomes.push(outcome);
                aborted = true;
                break;
            }
        }
    }

    BulkResult::collect(outcomes, aborted)
}

async fn attempt_delete(vhost: &str, name: &str, deleter: &dyn QueueDeleter) -> Attempt {
    info!("Deleting queue '{name}' in vhost '{vhost}'");

    match deleter.delete_queue(vhost, name).await {
        Err(err) => Attempt::Fatal(DeletionOutcome {
            queue_name: name.to_string(),
            succeeded: false,
            status_code: 0,
            detail: err.to_string(),
        }),
        Ok(response) if response.status == STATUS_NO_CONTENT => {
            Attempt::Completed(DeletionOutcome {
                queue_name: name.to_string(),
                succeeded: true,
                status_code: response.status,
                detail: String::new(),
            })
        }
        Ok(response) => Attempt::Completed(DeletionOutcome {
            queue_name: name.to_string(),
            succeeded: false,
            status_code: response.status,
            detail: format!("status {}: {}", response.status, response.body),
        }),
    }
}
