//! Row data fetch (`getdata`)

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, FetchOptions};
use crate::domain::{Document, QueryRequest, Tag, Tags};
use crate::infrastructure::traits::HistorianClient;

/// Result of a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The historian returned a document
    Fetched(Document),
    /// No tag was supplied, nothing was queried
    NoTag,
}

/// Fetches row data for a single tag.
pub struct FetchService {
    client: Arc<dyn HistorianClient>,
}

impl FetchService {
    pub fn new(client: Arc<dyn HistorianClient>) -> Self {
        Self { client }
    }

    /// Query the historian for one tag over the configured window.
    ///
    /// An empty tag skips the query and reports [`FetchOutcome::NoTag`].
    /// Client errors are not recovered.
    #[instrument(skip(self, options), fields(tag = %options.tag))]
    pub fn fetch(&self, options: FetchOptions) -> ApplicationResult<FetchOutcome> {
        let connection = options.server.into_connection();

        if options.tag.is_empty() {
            debug!("no tag supplied, skipping query");
            return Ok(FetchOutcome::NoTag);
        }

        let mut tags = Tags::new();
        tags.add(Tag::new(options.tag));
        let request = QueryRequest::new(
            tags,
            options.start_time,
            options.end_time,
            options.frequency,
        )?;

        debug!(
            hostname = connection.hostname(),
            port = connection.port(),
            start = %request.start_time,
            end = %request.end_time,
            frequency = request.sample_frequency,
            raw = request.is_raw(),
            "fetching row data"
        );
        let document = self.client.fetch_row_data(&connection, &request)?;
        debug!(bytes = document.xml().len(), "received document");

        Ok(FetchOutcome::Fetched(document))
    }
}
