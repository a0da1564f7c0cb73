#![deny(missing_docs)]

//! Graph substrate for the largedev sampler: a dense graph state with
//! reversible single-vertex re-randomization moves, the ensemble policies
//! that drive them, and component analysis of the resulting states.

pub mod components;
pub mod ensemble;
pub mod graphviz;
pub mod rollback;
pub mod state;

pub use components::ComponentStats;
pub use ensemble::{EnsemblePolicy, ErPolicy, SbmPolicy};
pub use graphviz::write_graphviz;
pub use rollback::MoveUndo;
pub use state::GraphState;
