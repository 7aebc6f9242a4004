//! Client used when no historian backend is configured

use tracing::debug;

use crate::domain::{Document, QueryRequest, ServerConnection};
use crate::infrastructure::traits::HistorianClient;
use crate::infrastructure::{HistorianError, HistorianResult};

/// Fails every call with a connection error naming the missing backend.
#[derive(Debug, Default)]
pub struct DisconnectedHistorian;

impl DisconnectedHistorian {
    fn refuse(connection: &ServerConnection) -> HistorianError {
        debug!(hostname = connection.hostname(), "no historian backend configured");
        HistorianError::connection(format!(
            "cannot reach {}:{}: no historian backend configured (set historian.replay_file)",
            connection.hostname(),
            connection.port()
        ))
    }
}

impl HistorianClient for DisconnectedHistorian {
    fn fetch_row_data(
        &self,
        connection: &ServerConnection,
        _request: &QueryRequest,
    ) -> HistorianResult<Document> {
        Err(Self::refuse(connection))
    }

    fn resolve_tag_name(
        &self,
        connection: &ServerConnection,
        _tag: &str,
    ) -> HistorianResult<String> {
        Err(Self::refuse(connection))
    }
}
