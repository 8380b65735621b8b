//! Real-backend execution path.

use anyhow::Result;
use console::style;
use tracing::info;

use alsvid_adapter_runtime::RuntimeBackend;
use alsvid_adapter_uniform::UniformBackend;
use alsvid_compile::transpile;
use alsvid_hal::{Backend, HalError, ValidationResult};
use alsvid_ir::Circuit;

use crate::report::print_report;

/// Execute a circuit on a named backend and report the counts.
///
/// The full delegated pipeline: resolve the backend identifier, validate,
/// transpile when the target basis requires it, submit, block on the
/// result. A submission the service does not acknowledge surfaces as
/// [`HalError::SubmissionFailed`] so the caller can map it to the distinct
/// exit status.
pub async fn execute(name: &str, circuit: &Circuit, shots: u32) -> Result<()> {
    println!(
        "\n{} Executing on {} ({} shots)",
        style("→").cyan().bold(),
        style(name).yellow(),
        shots
    );

    let backend: Box<dyn Backend> = match name {
        "uniform" | "synthetic" => Box::new(UniformBackend::new()),
        other => {
            println!("  Connecting to runtime service...");
            Box::new(RuntimeBackend::connect(other).await.map_err(HalError::from)?)
        }
    };

    let circuit = match backend.validate(circuit).await? {
        ValidationResult::Valid => circuit.clone(),
        ValidationResult::RequiresTranspilation { details } => {
            info!(backend = backend.name(), details, "transpiling circuit");
            println!("  Transpiling for {}", style(backend.name()).yellow());
            transpile(circuit, backend.capabilities()).map_err(HalError::from)?
        }
        ValidationResult::Invalid { reasons } => {
            anyhow::bail!(
                "circuit is invalid for backend '{}': {}",
                backend.name(),
                reasons.join("; ")
            );
        }
    };

    let job_id = backend.submit(&circuit, shots).await?;
    println!("  Job submitted: {job_id}");
    println!("  Waiting for results...");

    let result = backend.wait(&job_id).await?;

    print_report(
        &result.counts,
        &format!("Backend results ({} shots):", result.shots),
    );

    if let Some(ms) = result.execution_time_ms {
        println!("  Execution time: {} ms", style(ms).yellow());
    }

    Ok(())
}
