/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::AccountId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Account registry errors
///
/// Balance operations on a single [`crate::Account`] never fail; these cover
/// lookup and registration through [`crate::AccountRegistry`].
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AccountError {
    #[error("Account {0} not found")]
    #[diagnostic(
        code(account::not_found),
        help("The account was never opened in this registry. Check the id.")
    )]
    NotFound(AccountId),

    #[error("Account {0} already registered")]
    #[diagnostic(
        code(account::duplicate_id),
        help("Account ids must be unique within a registry; they define lock order.")
    )]
    DuplicateId(AccountId),

    #[error("Account id space exhausted")]
    #[diagnostic(
        code(account::ids_exhausted),
        help("Every u32 account id has been issued by this registry.")
    )]
    IdsExhausted,
}

/// Estimator errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum EstimatorError {
    #[error("Worker count must be at least 1")]
    #[diagnostic(
        code(estimator::no_workers),
        help("Pass a positive worker count, e.g. the available hardware parallelism.")
    )]
    NoWorkers,

    #[error("Cannot estimate from zero trials")]
    #[diagnostic(
        code(estimator::empty_sample),
        help("The inside/total ratio is undefined without samples.")
    )]
    EmptySample,

    #[error("Worker {worker} panicked")]
    #[diagnostic(
        code(estimator::worker_panicked),
        help("A sampling worker died; the aggregate is incomplete and was discarded.")
    )]
    WorkerPanicked { worker: usize },

    #[error("Workers did not finish within {timeout:?} ({finished}/{workers} done)")]
    #[diagnostic(
        code(estimator::join_timeout),
        help("Raise the join timeout or lower the trial count. Partial results are never returned.")
    )]
    JoinTimeout {
        timeout: Duration,
        finished: usize,
        workers: usize,
    },

    #[error("Failed to spawn worker {worker}: {reason}")]
    #[diagnostic(code(estimator::spawn_failed))]
    SpawnFailed { worker: usize, reason: String },
}

/// Unified error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SyncError {
    #[error("Account error: {0}")]
    #[diagnostic(transparent)]
    Account(#[from] AccountError),

    #[error("Estimator error: {0}")]
    #[diagnostic(transparent)]
    Estimator(#[from] EstimatorError),
}
