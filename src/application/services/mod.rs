//! Application services
//!
//! Concrete service implementations, one per subcommand.
//! Services depend on the `HistorianClient` boundary trait
//! but are themselves concrete structs, not traits.

mod check;
mod fetch;

pub use check::{CheckOutcome, TagCheckService};
pub use fetch::{FetchOutcome, FetchService};
