use std::path::PathBuf;

use ldev_mcmc::{ActionConfig, EnsembleConfig, GraphConfig, RunSpec};

fn base_spec(action: ActionConfig) -> RunSpec {
    RunSpec {
        graph: GraphConfig {
            directed: false,
            loops_allowed: false,
            vertices: 20,
            seed: 42,
            ensemble: EnsembleConfig::Sbm {
                inter_connectivity: 0.1,
                intra_connectivity: 5.0,
                blocks: 2,
            },
        },
        output_directory: PathBuf::from("out"),
        action,
    }
}

#[test]
fn yaml_roundtrip_preserves_the_spec() {
    let spec = base_spec(ActionConfig::WangLandau {
        lower: 5,
        upper: 15,
        sweeps_to_evaluate: 1000,
        final_factor: 1e-6,
        canonical_acceptance: false,
    });
    let rendered = serde_yaml::to_string(&spec).unwrap();
    let restored: RunSpec = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(spec, restored);
}

#[test]
fn kebab_case_tags_are_accepted() {
    let document = "
graph:
  vertices: 10
  ensemble:
    type: er
    connectivity: 1.0
output_directory: out
action:
  type: simple-sampling
  samples: 100
";
    let spec: RunSpec = serde_yaml::from_str(document).unwrap();
    assert!(!spec.graph.directed);
    assert_eq!(spec.graph.seed, 1);
    assert_eq!(
        spec.action,
        ActionConfig::SimpleSampling { samples: 100 }
    );
    spec.validate().unwrap();
}

#[test]
fn zero_temperature_is_rejected() {
    let spec = base_spec(ActionConfig::Metropolis {
        temperature: 0.0,
        sweeps: 10,
        equilibration_sweeps: 1,
    });
    let err = spec.validate().unwrap_err();
    assert_eq!(err.info().code, "zero-temperature");
}

#[test]
fn wang_landau_window_must_fit_the_graph() {
    let inverted = base_spec(ActionConfig::WangLandau {
        lower: 8,
        upper: 5,
        sweeps_to_evaluate: 10,
        final_factor: 1e-3,
        canonical_acceptance: false,
    });
    assert_eq!(inverted.validate().unwrap_err().info().code, "bad-window");

    let oversized = base_spec(ActionConfig::WangLandau {
        lower: 5,
        upper: 25,
        sweeps_to_evaluate: 10,
        final_factor: 1e-3,
        canonical_acceptance: false,
    });
    assert_eq!(oversized.validate().unwrap_err().info().code, "bad-window");
}

#[test]
fn wang_landau_needs_a_positive_final_factor() {
    let spec = base_spec(ActionConfig::WangLandau {
        lower: 5,
        upper: 15,
        sweeps_to_evaluate: 10,
        final_factor: 0.0,
        canonical_acceptance: false,
    });
    assert_eq!(
        spec.validate().unwrap_err().info().code,
        "bad-final-factor"
    );
}

#[test]
fn zero_blocks_are_rejected() {
    let mut spec = base_spec(ActionConfig::SimpleSampling { samples: 1 });
    spec.graph.ensemble = EnsembleConfig::Sbm {
        inter_connectivity: 0.1,
        intra_connectivity: 5.0,
        blocks: 0,
    };
    assert_eq!(spec.validate().unwrap_err().info().code, "no-blocks");
}
