//! Runtime service REST client.
//!
//! Wire surface, all JSON over HTTPS:
//!
//! - `GET  /v1/backends/{name}` — resolve a backend identifier
//! - `POST /v1/jobs` — submit a circuit for execution
//! - `GET  /v1/jobs/{id}` — poll job status
//! - `GET  /v1/jobs/{id}/results` — fetch counts for a completed job

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};

use alsvid_hal::Counts;

use crate::error::{RuntimeError, RuntimeResult};

/// Default runtime service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://runtime.hiq-lab.io/api";

/// User-Agent sent with requests.
const USER_AGENT: &str = concat!("alsvid/", env!("CARGO_PKG_VERSION"));

/// Runtime service API client.
pub struct RuntimeClient {
    /// HTTP client with auth headers installed.
    client: Client,
    /// API endpoint URL.
    endpoint: String,
    /// Instance identity sent with every request.
    instance: String,
}

impl fmt::Debug for RuntimeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeClient")
            .field("endpoint", &self.endpoint)
            .field("instance", &self.instance)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl RuntimeClient {
    /// Create a client with explicit endpoint, token, and instance.
    pub fn new(
        endpoint: impl Into<String>,
        token: &str,
        instance: impl Into<String>,
    ) -> RuntimeResult<Self> {
        let instance = instance.into();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| RuntimeError::InvalidToken)?,
        );
        headers.insert(
            "Runtime-Instance",
            header::HeaderValue::from_str(&instance)
                .map_err(|_| RuntimeError::MissingInstance)?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            instance,
        })
    }

    /// Resolve a backend identifier to its device descriptor.
    pub async fn get_backend(&self, name: &str) -> RuntimeResult<BackendInfo> {
        let url = format!("{}/v1/backends/{}", self.endpoint, name);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RuntimeError::UnknownBackend(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response.json().await.map_err(RuntimeError::from)
    }

    /// Submit a circuit for execution.
    pub async fn submit_job(
        &self,
        backend: &str,
        circuit: serde_json::Value,
        shots: u32,
    ) -> RuntimeResult<SubmitResponse> {
        let url = format!("{}/v1/jobs", self.endpoint);

        let body = serde_json::json!({
            "backend": backend,
            "shots": shots,
            "circuit": circuit,
        });

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response.json().await.map_err(RuntimeError::from)
    }

    /// Get job status.
    pub async fn job_status(&self, job_id: &str) -> RuntimeResult<JobStatusResponse> {
        let url = format!("{}/v1/jobs/{}", self.endpoint, job_id);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RuntimeError::JobNotFound(job_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response.json().await.map_err(RuntimeError::from)
    }

    /// Get job results.
    pub async fn job_results(&self, job_id: &str) -> RuntimeResult<JobResultResponse> {
        let url = format!("{}/v1/jobs/{}/results", self.endpoint, job_id);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RuntimeError::JobNotFound(job_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response.json().await.map_err(RuntimeError::from)
    }
}

/// Convert a non-success response into an API error.
async fn api_error(response: reqwest::Response) -> RuntimeError {
    let status = response.status();
    match response.json::<ApiErrorResponse>().await {
        Ok(err) => RuntimeError::Api {
            code: err.code,
            message: err.message,
        },
        Err(_) => RuntimeError::Api {
            code: None,
            message: format!("service returned {status}"),
        },
    }
}

/// Error payload from the service.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// Device descriptor returned by backend resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendInfo {
    /// Backend name.
    pub name: String,
    /// Number of qubits on the device.
    pub num_qubits: u32,
    /// Whether the device is currently accepting jobs.
    #[serde(default = "default_true")]
    pub operational: bool,
}

fn default_true() -> bool {
    true
}

/// Response to a job submission.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    /// Job identifier. The service may answer 2xx without one; treat that
    /// as a submission failure rather than a job handle.
    #[serde(default)]
    pub id: Option<String>,
}

impl SubmitResponse {
    /// Extract the job id, treating an absent or empty id as failure.
    pub fn job_id(self) -> RuntimeResult<String> {
        match self.id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(RuntimeError::NoJobId),
        }
    }
}

/// Job status payload.
#[derive(Debug, Deserialize)]
pub struct JobStatusResponse {
    /// Status string: queued, running, completed, failed, cancelled.
    pub status: String,
    /// Error message for failed jobs.
    #[serde(default)]
    pub error: Option<String>,
}

/// Job results payload.
#[derive(Debug, Deserialize)]
pub struct JobResultResponse {
    /// Bitstring histogram.
    pub counts: HashMap<String, u64>,
    /// Shots executed.
    pub shots: u32,
}

impl JobResultResponse {
    /// Convert the raw histogram into HAL [`Counts`].
    pub fn to_counts(&self) -> Counts {
        Counts::from_pairs(self.counts.iter().map(|(k, &v)| (k.clone(), v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_with_id() {
        let response: SubmitResponse = serde_json::from_str(r#"{"id": "job-7"}"#).unwrap();
        assert_eq!(response.job_id().unwrap(), "job-7");
    }

    #[test]
    fn test_submit_response_without_id_is_failure() {
        let response: SubmitResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.job_id(), Err(RuntimeError::NoJobId)));

        let response: SubmitResponse = serde_json::from_str(r#"{"id": ""}"#).unwrap();
        assert!(matches!(response.job_id(), Err(RuntimeError::NoJobId)));
    }

    #[test]
    fn test_result_response_to_counts() {
        let response: JobResultResponse =
            serde_json::from_str(r#"{"counts": {"00": 480, "11": 520}, "shots": 1000}"#).unwrap();

        let counts = response.to_counts();
        assert_eq!(counts.total_shots(), 1000);
        assert_eq!(counts.get("00"), 480);
        assert_eq!(counts.get("11"), 520);
    }

    #[test]
    fn test_backend_info_defaults_operational() {
        let info: BackendInfo =
            serde_json::from_str(r#"{"name": "aurora_7", "num_qubits": 127}"#).unwrap();
        assert!(info.operational);
    }
}
