#![deny(missing_docs)]

//! Sampling engine for the distribution of the largest connected component
//! in random graphs: simple sampling for the bulk, Metropolis importance
//! sampling and Wang–Landau flat-histogram sampling for the far tails.

pub mod config;
pub mod density;
pub mod driver;
pub mod histogram;
pub mod observable;
pub mod output;
pub mod prompt;
mod wang_landau;

pub use config::{ActionConfig, EnsembleConfig, GraphConfig, RunSpec};
pub use density::LogDensity;
pub use driver::{Simulation, StartCondition};
pub use histogram::Histogram;
pub use observable::{LargestComponent, Observable, ObservableStats};
pub use output::{RunManifest, RunSink};
