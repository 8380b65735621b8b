//! Alsvid Runtime Service Adapter
//!
//! HAL backend for a remote execution service. The adapter resolves a
//! backend identifier to a device, submits JSON-serialized circuits, and
//! polls for results. Everything quantum happens on the other side of the
//! wire; this crate only speaks the job protocol.
//!
//! # Credentials
//!
//! Read from the environment at connect time, never validated beyond
//! presence:
//!
//! - `ALSVID_RUNTIME_TOKEN` — API bearer token
//! - `ALSVID_RUNTIME_INSTANCE` — instance identity (project/allocation)
//! - `ALSVID_RUNTIME_URL` — optional endpoint override
//!
//! # Example
//!
//! ```ignore
//! use alsvid_adapter_runtime::RuntimeBackend;
//! use alsvid_hal::Backend;
//! use alsvid_ir::Circuit;
//!
//! let backend = RuntimeBackend::connect("aurora_7").await?;
//! let job_id = backend.submit(&Circuit::bell()?, 1000).await?;
//! let result = backend.wait(&job_id).await?;
//! ```

mod api;
mod backend;
mod error;

pub use api::{RuntimeClient, DEFAULT_ENDPOINT};
pub use backend::RuntimeBackend;
pub use error::{RuntimeError, RuntimeResult};
