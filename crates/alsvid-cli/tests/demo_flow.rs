//! End-to-end tests for the demo flow.
//!
//! These drive the same components the binary wires together: the Bell
//! circuit, the uniform sampler, the HAL job lifecycle, and the
//! transpiler, without any network or credentials.

use alsvid_adapter_uniform::{sample_uniform, SampleRequest, UniformBackend};
use alsvid_compile::transpile;
use alsvid_hal::{Backend, Capabilities, ValidationResult};
use alsvid_ir::Circuit;

/// The demo configuration: 1000 shots, 2 bits, seed 42.
#[test]
fn test_demo_sampling_scenario() {
    let circuit = Circuit::bell().unwrap();
    let request = SampleRequest::with_seed(1000, circuit.measured_width() as u32, 42);

    let counts = sample_uniform(&request);

    assert_eq!(counts.total_shots(), 1000);
    assert!(counts.len() <= 4);
    for (bitstring, &count) in counts.iter() {
        assert_eq!(bitstring.len(), 2);
        assert!(bitstring.chars().all(|c| c == '0' || c == '1'));
        assert!((150..=350).contains(&count), "{bitstring}: {count}");
    }

    // Reproducible: the demo prints the same table on every run.
    assert_eq!(counts, sample_uniform(&request));
}

/// Submitting the Bell circuit through the full HAL lifecycle.
#[tokio::test]
async fn test_uniform_backend_round_trip() {
    let backend = UniformBackend::with_seed(42);
    let circuit = Circuit::bell().unwrap();

    assert!(backend.validate(&circuit).await.unwrap().is_valid());

    let job_id = backend.submit(&circuit, 1000).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    assert_eq!(result.shots, 1000);
    assert_eq!(result.counts.total_shots(), 1000);
}

/// The real path transpiles for a hardware basis before submission.
#[tokio::test]
async fn test_transpile_then_submit() {
    let circuit = Circuit::bell().unwrap();
    let hw_caps = Capabilities::hardware("aurora_7", 127);

    let adapted = transpile(&circuit, &hw_caps).unwrap();
    assert!(adapted.gates().all(|g| hw_caps.gate_set.contains(g.name())));

    // The adapted circuit still runs fine on the uniform backend.
    let backend = UniformBackend::with_seed(7);
    match backend.validate(&adapted).await.unwrap() {
        ValidationResult::Invalid { reasons } => panic!("unexpectedly invalid: {reasons:?}"),
        _ => {}
    }

    let job_id = backend.submit(&adapted, 500).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();
    assert_eq!(result.counts.total_shots(), 500);

    // Measurement width is preserved by the rewrite.
    for (bitstring, _) in result.counts.iter() {
        assert_eq!(bitstring.len(), 2);
    }
}
