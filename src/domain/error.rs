//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid request construction.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("query request needs at least one tag")]
    EmptyTagCollection,
}
