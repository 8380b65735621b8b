//! Runtime service backend implementation.

use async_trait::async_trait;
use tracing::{debug, info};

use alsvid_hal::backend::validate_against;
use alsvid_hal::{
    Backend, Capabilities, ExecutionResult, HalResult, JobId, JobStatus, ValidationResult,
};
use alsvid_ir::Circuit;

use crate::api::{RuntimeClient, DEFAULT_ENDPOINT};
use crate::error::{RuntimeError, RuntimeResult};

/// Remote execution backend.
///
/// One instance targets one resolved device. Construction resolves the
/// backend identifier and caches capabilities; after that, only the job
/// lifecycle endpoints are used.
#[derive(Debug)]
pub struct RuntimeBackend {
    /// API client.
    client: RuntimeClient,
    /// Target device name.
    target: String,
    /// Cached capabilities (sync introspection).
    capabilities: Capabilities,
}

impl RuntimeBackend {
    /// Connect to the runtime service and resolve a backend identifier.
    ///
    /// Credentials come from `ALSVID_RUNTIME_TOKEN` and
    /// `ALSVID_RUNTIME_INSTANCE`; the endpoint can be overridden with
    /// `ALSVID_RUNTIME_URL`. An unresolvable identifier is
    /// [`RuntimeError::UnknownBackend`].
    pub async fn connect(target: impl Into<String>) -> RuntimeResult<Self> {
        let target = target.into();

        let token =
            std::env::var("ALSVID_RUNTIME_TOKEN").map_err(|_| RuntimeError::MissingToken)?;
        let instance =
            std::env::var("ALSVID_RUNTIME_INSTANCE").map_err(|_| RuntimeError::MissingInstance)?;
        let endpoint =
            std::env::var("ALSVID_RUNTIME_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let client = RuntimeClient::new(endpoint, &token, instance)?;

        info!(backend = %target, "resolving backend via runtime service");
        let device = client.get_backend(&target).await?;
        if !device.operational {
            return Err(RuntimeError::UnknownBackend(format!(
                "{target} (not operational)"
            )));
        }

        Ok(Self {
            client,
            capabilities: Capabilities::hardware(&device.name, device.num_qubits),
            target,
        })
    }

    /// Get the target device name.
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[async_trait]
impl Backend for RuntimeBackend {
    fn name(&self) -> &str {
        &self.target
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        Ok(validate_against(circuit, &self.capabilities))
    }

    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        let payload = serde_json::to_value(circuit).map_err(RuntimeError::from)?;

        let response = self.client.submit_job(&self.target, payload, shots).await?;

        let id = response.job_id()?;
        debug!(job = %id, backend = %self.target, shots, "job submitted");
        Ok(JobId::new(id))
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let response = self.client.job_status(&job_id.0).await?;

        let status = match response.status.as_str() {
            "queued" => JobStatus::Queued,
            "running" => JobStatus::Running,
            "completed" => JobStatus::Completed,
            "cancelled" => JobStatus::Cancelled,
            "failed" => JobStatus::Failed(
                response
                    .error
                    .unwrap_or_else(|| "no diagnostic from service".to_string()),
            ),
            other => JobStatus::Failed(format!("unrecognized status '{other}'")),
        };

        Ok(status)
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let response = self.client.job_results(&job_id.0).await?;
        Ok(ExecutionResult::new(response.to_counts(), response.shots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Network-facing paths are covered against a stub service in CI; here
    // we keep to what runs hermetically.

    #[tokio::test]
    async fn test_connect_requires_token() {
        // The token check precedes any network traffic. Scrub the variable
        // rather than assuming the ambient environment lacks it.
        // SAFETY: the only env mutation in this crate's tests, and no other
        // test reads the variable concurrently.
        unsafe { std::env::remove_var("ALSVID_RUNTIME_TOKEN") };

        let err = RuntimeBackend::connect("aurora_7").await.unwrap_err();
        assert!(matches!(err, RuntimeError::MissingToken));
    }
}
