//! Alsvid Command-Line Interface
//!
//! Builds a fixed Bell circuit and reports measurement statistics, either
//! from the synthetic uniform sampler (always, as a demonstration of the
//! aggregation and reporting path) or additionally from a real backend
//! when one is named on the command line.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

mod mode;
mod report;
mod run;

use alsvid_adapter_uniform::{sample_uniform, SampleRequest};
use alsvid_hal::HalError;
use alsvid_ir::Circuit;
use mode::ExecutionMode;
use report::print_report;

/// Demo seed: fixed so the synthetic report is reproducible run to run.
const DEMO_SEED: u64 = 42;

/// Exit status when job submission is not acknowledged with a job.
const EXIT_SUBMISSION_FAILED: i32 = 2;

/// Alsvid - Bell circuit sampling demo
#[derive(Parser)]
#[command(name = "alsvid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend to execute on (omit for synthetic sampling only)
    backend: Option<String>,

    /// Number of shots
    #[arg(short, long, default_value = "1000")]
    shots: u32,

    /// Seed for the synthetic sampler
    #[arg(long, default_value_t = DEMO_SEED)]
    seed: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    if let Err(e) = execute(cli).await {
        eprintln!("{} {e:#}", style("Error:").red().bold());
        std::process::exit(exit_code(&e));
    }
}

/// Map a top-level error to the process exit status.
///
/// An unacknowledged submission anywhere in the chain gets its own status
/// so callers can tell it apart from a generic failure.
fn exit_code(e: &anyhow::Error) -> i32 {
    let submission_failed = e
        .chain()
        .any(|c| matches!(c.downcast_ref::<HalError>(), Some(HalError::SubmissionFailed(_))));
    if submission_failed {
        EXIT_SUBMISSION_FAILED
    } else {
        1
    }
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
    let mode = ExecutionMode::from_arg(cli.backend);

    println!("{}", style("Bell circuit demo").bold());

    let circuit = Circuit::bell()?;
    println!(
        "  Circuit: {} qubits, {} classical bits, gates: H(q0), CX(q0, q1)",
        circuit.num_qubits(),
        circuit.num_clbits()
    );

    // The synthetic path always runs: it exercises aggregation and
    // reporting with no backend, credentials, or network.
    let request = SampleRequest::with_seed(cli.shots, circuit.measured_width() as u32, cli.seed);
    let counts = sample_uniform(&request);
    print_report(
        &counts,
        &format!("Uniform sampler results ({} shots):", cli.shots),
    );
    println!("  Note: uniform sampling ignores gate semantics entirely.");
    println!("  A real Bell-state backend reports ~50% 00 and ~50% 11.");

    match mode {
        ExecutionMode::Synthetic => {
            println!("\nNo backend named; skipping real execution.");
            println!("To execute remotely: alsvid <backend_name>");
            println!("  (requires ALSVID_RUNTIME_TOKEN and ALSVID_RUNTIME_INSTANCE)");
        }
        ExecutionMode::Real(name) => {
            run::execute(&name, &circuit, cli.shots).await?;
        }
    }

    Ok(())
}
