//! Application layer: services and use cases
//!
//! This layer turns parsed options into historian requests and depends on
//! the `HistorianClient` boundary trait.

pub mod error;
pub mod options;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use options::{CheckOptions, FetchOptions, ServerOptions};
