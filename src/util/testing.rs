//! Test support: logging setup and a recording historian client

use std::env;
use std::sync::{Mutex, Once, PoisonError};

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{Document, QueryRequest, ServerConnection};
use crate::infrastructure::traits::HistorianClient;
use crate::infrastructure::HistorianResult;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Connection as seen by the client, without the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedConnection {
    pub hostname: String,
    pub username: String,
    pub port_override: Option<u16>,
}

impl From<&ServerConnection> for RecordedConnection {
    fn from(connection: &ServerConnection) -> Self {
        Self {
            hostname: connection.hostname().to_string(),
            username: connection.username().to_string(),
            port_override: connection.port_override(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    FetchRowData {
        connection: RecordedConnection,
        request: QueryRequest,
    },
    ResolveTagName {
        connection: RecordedConnection,
        tag: String,
    },
}

/// Historian double with scripted responses that records every call.
pub struct RecordingHistorian {
    fetch_response: HistorianResult<Document>,
    resolve_response: HistorianResult<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for RecordingHistorian {
    fn default() -> Self {
        Self {
            fetch_response: Ok(Document::new("")),
            resolve_response: Ok(String::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl RecordingHistorian {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetch_response(mut self, response: HistorianResult<Document>) -> Self {
        self.fetch_response = response;
        self
    }

    pub fn with_resolve_response(mut self, response: HistorianResult<String>) -> Self {
        self.resolve_response = response;
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl HistorianClient for RecordingHistorian {
    fn fetch_row_data(
        &self,
        connection: &ServerConnection,
        request: &QueryRequest,
    ) -> HistorianResult<Document> {
        self.record(RecordedCall::FetchRowData {
            connection: connection.into(),
            request: request.clone(),
        });
        self.fetch_response.clone()
    }

    fn resolve_tag_name(
        &self,
        connection: &ServerConnection,
        tag: &str,
    ) -> HistorianResult<String> {
        self.record(RecordedCall::ResolveTagName {
            connection: connection.into(),
            tag: tag.to_string(),
        });
        self.resolve_response.clone()
    }
}
