//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;

use crate::domain::{Document, QueryRequest, ServerConnection};
use crate::infrastructure::HistorianResult;

/// Historian client abstraction.
///
/// One call per invocation; connections are passed by reference and never
/// cached by the client.
pub trait HistorianClient: Send + Sync {
    /// Fetch row data for every tag in `request` and return the result document.
    fn fetch_row_data(
        &self,
        connection: &ServerConnection,
        request: &QueryRequest,
    ) -> HistorianResult<Document>;

    /// Resolve `tag` to its canonical name.
    ///
    /// Returns an empty string when the tag is unknown and
    /// `HistorianError::Connection` when the server cannot be reached.
    fn resolve_tag_name(&self, connection: &ServerConnection, tag: &str)
        -> HistorianResult<String>;
}

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
