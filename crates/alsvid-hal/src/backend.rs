//! Backend trait.
//!
//! The [`Backend`] trait defines the lifecycle for interacting with an
//! execution backend:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ submit() ──→ status() ──→ result()
//!    (sync, &ref)       (async)       (async)      (async)      (async)
//! ```
//!
//! ## Design principles
//!
//! - **Async-native**: all I/O methods are async.
//! - **Thread-safe**: `Send + Sync` bound enables shared ownership.
//! - **Infallible introspection**: `capabilities()` is synchronous and
//!   infallible — a backend that cannot report capabilities without I/O
//!   is not correctly initialized.

use std::time::Duration;

use async_trait::async_trait;

use alsvid_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Trait for execution backends.
///
/// Covers the full job lifecycle: introspection, validation, submission,
/// status polling, and result retrieval.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible. Capabilities
///   MUST be cached at construction time.
/// - `validate()` MUST check the circuit against backend constraints
///   before submission.
/// - `submit()` returns a [`JobId`] on success; a submission the service
///   does not acknowledge with a job is `HalError::SubmissionFailed`,
///   never a silent absence.
/// - `result()` MUST only be called when status is `Completed`.
/// - `wait()` has a default implementation (500ms poll, 5-minute timeout).
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Validate a circuit against backend constraints.
    ///
    /// Checks at minimum qubit count and gate-set support. The three-state
    /// result lets a caller decide to transpile and retry vs. give up.
    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult>;

    /// Submit a circuit for execution.
    ///
    /// Returns a job ID that can be used to check status and retrieve
    /// results. The job starts in `Queued` status.
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Wait for a job to complete and return its result.
    ///
    /// Default implementation polls every 500ms for up to 5 minutes.
    /// Blocks the caller until the job reaches a terminal state; any
    /// retry policy beyond this is the caller's concern.
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        use tokio::time::sleep;

        let poll_interval = Duration::from_millis(500);
        let max_polls = 600; // 5 minutes max

        for _ in 0..max_polls {
            let status = self.status(job_id).await?;

            match status {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    tracing::trace!(job = %job_id, %status, "job pending");
                    sleep(poll_interval).await;
                }
            }
        }

        Err(HalError::Timeout(job_id.0.clone()))
    }
}

/// Result of circuit validation against backend constraints.
#[derive(Debug, Clone)]
pub enum ValidationResult {
    /// Circuit is valid and can be submitted directly.
    Valid,
    /// Circuit is invalid for this backend.
    Invalid {
        /// Reasons the circuit is invalid.
        reasons: Vec<String>,
    },
    /// Circuit could run after transpilation.
    RequiresTranspilation {
        /// What transpilation is needed.
        details: String,
    },
}

impl ValidationResult {
    /// Check if the circuit is valid (can be submitted as-is).
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Shared validation logic: qubit count and gate-set membership.
///
/// Adapters call this from their `validate()` implementation so the
/// three-state classification stays consistent across backends.
pub fn validate_against(circuit: &Circuit, caps: &Capabilities) -> ValidationResult {
    let mut reasons = Vec::new();

    if circuit.num_qubits() > caps.num_qubits as usize {
        reasons.push(format!(
            "Circuit requires {} qubits but backend only has {}",
            circuit.num_qubits(),
            caps.num_qubits
        ));
    }

    let mut unsupported = Vec::new();
    for gate in circuit.gates() {
        let name = gate.name();
        if !caps.gate_set.contains(name) && !unsupported.contains(&name) {
            unsupported.push(name);
        }
    }

    if !reasons.is_empty() {
        return ValidationResult::Invalid { reasons };
    }

    if !unsupported.is_empty() {
        return ValidationResult::RequiresTranspilation {
            details: format!("unsupported gates: {}", unsupported.join(", ")),
        };
    }

    ValidationResult::Valid
}
