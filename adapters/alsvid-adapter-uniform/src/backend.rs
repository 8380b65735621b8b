//! Uniform sampler behind the HAL `Backend` trait.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};
use uuid::Uuid;

use alsvid_hal::backend::validate_against;
use alsvid_hal::{
    Backend, Capabilities, ExecutionResult, HalError, HalResult, Job, JobId, JobStatus,
    ValidationResult,
};
use alsvid_ir::Circuit;

use crate::sampler::{sample_uniform, SampleRequest};

/// Job data for the uniform backend.
struct UniformJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Synthetic uniform-sampling backend.
///
/// Ignores gate semantics entirely: every measured bit is an independent
/// fair coin. Jobs complete synchronously at submission time, so `status`
/// reports `Completed` as soon as `submit` returns.
pub struct UniformBackend {
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Completed jobs by id.
    jobs: Arc<Mutex<FxHashMap<String, UniformJob>>>,
    /// Fixed seed applied to every submission, for reproducible runs.
    seed: Option<u64>,
}

impl UniformBackend {
    /// Create a new unseeded uniform backend.
    pub fn new() -> Self {
        Self {
            capabilities: Capabilities::uniform(32),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            seed: None,
        }
    }

    /// Create a uniform backend that seeds every submission identically.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    fn run_sampling(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        // Result width is the number of classical bits measurements write.
        // A circuit without measurements falls back to its qubit count.
        let bits = match circuit.measured_width() {
            0 => circuit.num_qubits() as u32,
            w => w as u32,
        };

        let request = match self.seed {
            Some(seed) => SampleRequest::with_seed(shots, bits, seed),
            None => SampleRequest::new(shots, bits),
        };
        let counts = sample_uniform(&request);

        let elapsed = start.elapsed();
        debug!(shots, bits, ?elapsed, "uniform sampling job finished");

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

impl Default for UniformBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for UniformBackend {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        Ok(validate_against(circuit, &self.capabilities))
    }

    #[instrument(skip(self, circuit))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{} shots exceeds backend maximum {}",
                shots, self.capabilities.max_shots
            )));
        }
        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but backend only supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let result = self.run_sampling(circuit, shots);

        let job = Job::new(job_id.clone(), shots)
            .with_backend("uniform")
            .with_status(JobStatus::Completed);

        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.insert(
            job_id.0.clone(),
            UniformJob {
                job,
                result: Some(result),
            },
        );

        debug!("submitted job: {}", job_id);
        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_capabilities() {
        let backend = UniformBackend::new();
        let caps = backend.capabilities();

        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 32);
        assert_eq!(backend.name(), "uniform");
    }

    #[tokio::test]
    async fn test_bell_lifecycle() {
        let backend = UniformBackend::with_seed(42);
        let circuit = Circuit::bell().unwrap();

        assert!(backend.validate(&circuit).await.unwrap().is_valid());

        let job_id = backend.submit(&circuit, 1000).await.unwrap();
        let status = backend.status(&job_id).await.unwrap();
        assert!(status.is_success());

        let result = backend.result(&job_id).await.unwrap();
        assert_eq!(result.shots, 1000);
        assert_eq!(result.counts.total_shots(), 1000);

        // Uniform sampler knows nothing about entanglement: all four
        // outcomes appear, each with a 2-bit key.
        for (bitstring, _) in result.counts.iter() {
            assert_eq!(bitstring.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_wait_returns_result() {
        let backend = UniformBackend::with_seed(7);
        let circuit = Circuit::bell().unwrap();

        let job_id = backend.submit(&circuit, 100).await.unwrap();
        let result = backend.wait(&job_id).await.unwrap();
        assert_eq!(result.counts.total_shots(), 100);
    }

    #[tokio::test]
    async fn test_seeded_backend_reproducible() {
        let circuit = Circuit::bell().unwrap();

        let a = {
            let backend = UniformBackend::with_seed(42);
            let id = backend.submit(&circuit, 1000).await.unwrap();
            backend.result(&id).await.unwrap()
        };
        let b = {
            let backend = UniformBackend::with_seed(42);
            let id = backend.submit(&circuit, 1000).await.unwrap();
            backend.result(&id).await.unwrap()
        };

        assert_eq!(a.counts, b.counts);
    }

    #[tokio::test]
    async fn test_shots_cap() {
        let backend = UniformBackend::new();
        let circuit = Circuit::bell().unwrap();

        let err = backend.submit(&circuit, 2_000_000).await.unwrap_err();
        assert!(matches!(err, HalError::InvalidShots(_)));
    }

    #[tokio::test]
    async fn test_unknown_job() {
        let backend = UniformBackend::new();
        let err = backend.status(&JobId::from("missing")).await.unwrap_err();
        assert!(matches!(err, HalError::JobNotFound(_)));
    }
}
