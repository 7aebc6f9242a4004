//! Infrastructure layer: historian backends and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod historian;
pub mod traits;

pub use error::{HistorianError, HistorianResult, InfraError, InfraResult};
