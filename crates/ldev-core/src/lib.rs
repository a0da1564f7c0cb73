#![deny(missing_docs)]

//! Error and randomness primitives for the largedev sampler.

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, LdevError};
pub use rng::RngHandle;
