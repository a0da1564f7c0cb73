use std::io::Cursor;
use std::path::PathBuf;

use ldev_mcmc::prompt::read_run_spec;
use ldev_mcmc::{ActionConfig, EnsembleConfig};

fn parse(tokens: &str) -> Result<ldev_mcmc::RunSpec, ldev_core::LdevError> {
    let mut cursor = Cursor::new(tokens.as_bytes().to_vec());
    read_run_spec(&mut cursor)
}

#[test]
fn er_simple_sampling_sequence() {
    let spec = parse("n n results 100 0 1337 0 0 1.5 0 5000").unwrap();
    assert!(!spec.graph.directed);
    assert!(!spec.graph.loops_allowed);
    assert_eq!(spec.output_directory, PathBuf::from("results"));
    assert_eq!(spec.graph.vertices, 100);
    assert_eq!(spec.graph.seed, 1337);
    assert_eq!(
        spec.graph.ensemble,
        EnsembleConfig::Er { connectivity: 1.5 }
    );
    assert_eq!(spec.action, ActionConfig::SimpleSampling { samples: 5000 });
}

#[test]
fn sbm_wang_landau_sequence_across_lines() {
    let spec = parse("y y\nout\n30\n0 7 0\n1 0.1 5.0 2\n3 5 15 1000 1e-6\n").unwrap();
    assert!(spec.graph.directed);
    assert!(spec.graph.loops_allowed);
    assert_eq!(
        spec.graph.ensemble,
        EnsembleConfig::Sbm {
            inter_connectivity: 0.1,
            intra_connectivity: 5.0,
            blocks: 2,
        }
    );
    assert_eq!(
        spec.action,
        ActionConfig::WangLandau {
            lower: 5,
            upper: 15,
            sweeps_to_evaluate: 1000,
            final_factor: 1e-6,
            canonical_acceptance: false,
        }
    );
}

#[test]
fn metropolis_and_equilibration_sequences() {
    let metropolis = parse("n n out 10 0 1 0 0 1.0 1 0.5 200 50").unwrap();
    assert_eq!(
        metropolis.action,
        ActionConfig::Metropolis {
            temperature: 0.5,
            sweeps: 200,
            equilibration_sweeps: 50,
        }
    );

    let probe = parse("n n out 10 0 1 0 0 1.0 2 -2.0 100").unwrap();
    assert_eq!(
        probe.action,
        ActionConfig::Equilibration {
            temperature: -2.0,
            sweeps: 100,
        }
    );
}

#[test]
fn malformed_answers_are_fatal() {
    assert_eq!(
        parse("maybe").unwrap_err().info().code,
        "invalid-answer"
    );
    assert_eq!(
        parse("n n out ten").unwrap_err().info().code,
        "invalid-number"
    );
    assert_eq!(parse("n n out 10 0 1 0").unwrap_err().info().code, "missing-token");
}

#[test]
fn unsupported_selectors_are_fatal() {
    assert_eq!(
        parse("n n out 10 3 1 0 0 1.0 0 10").unwrap_err().info().code,
        "unsupported-generator"
    );
    assert_eq!(
        parse("n n out 10 0 1 4 0 1.0 0 10").unwrap_err().info().code,
        "unsupported-value"
    );
    assert_eq!(
        parse("n n out 10 0 1 0 2 1.0 0 10").unwrap_err().info().code,
        "unsupported-graph"
    );
    assert_eq!(
        parse("n n out 10 0 1 0 0 1.0 9 10").unwrap_err().info().code,
        "unsupported-action"
    );
}

#[test]
fn seed_is_read_as_u16() {
    let err = parse("n n out 10 0 70000 0 0 1.0 0 10").unwrap_err();
    assert_eq!(err.info().code, "invalid-number");
}
