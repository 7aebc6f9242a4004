//! Tag existence check (`checktag`)

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, CheckOptions};
use crate::domain::TagCheckRequest;
use crate::exitcode;
use crate::infrastructure::traits::HistorianClient;
use crate::infrastructure::HistorianError;

/// Result of a tag check. `Display` renders the user-facing status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Found { tag: String, canonical: String },
    NotFound { tag: String },
    ConnectionFailed { message: String },
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckOutcome::Found { .. } => exitcode::OK,
            CheckOutcome::NotFound { .. } | CheckOutcome::ConnectionFailed { .. } => {
                exitcode::FAILURE
            }
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Found { tag, .. } => write!(f, "{} found", tag),
            CheckOutcome::NotFound { tag } => write!(f, "{} does not exist in system", tag),
            CheckOutcome::ConnectionFailed { message } => {
                write!(f, "Server Connection Failed Check Details: {}", message)
            }
        }
    }
}

/// Checks whether a tag resolves on the historian.
pub struct TagCheckService {
    client: Arc<dyn HistorianClient>,
}

impl TagCheckService {
    pub fn new(client: Arc<dyn HistorianClient>) -> Self {
        Self { client }
    }

    /// Resolve the tag once.
    ///
    /// Connection failures become [`CheckOutcome::ConnectionFailed`];
    /// every other client error propagates.
    #[instrument(skip(self, options), fields(tag = %options.tag))]
    pub fn check(&self, options: CheckOptions) -> ApplicationResult<CheckOutcome> {
        let connection = options.server.into_connection();
        let request = TagCheckRequest {
            tag_name: options.tag,
        };

        match self
            .client
            .resolve_tag_name(&connection, &request.tag_name)
        {
            Ok(canonical) if canonical.is_empty() => Ok(CheckOutcome::NotFound {
                tag: request.tag_name,
            }),
            Ok(canonical) => {
                debug!(%canonical, "tag resolved");
                Ok(CheckOutcome::Found {
                    tag: request.tag_name,
                    canonical,
                })
            }
            Err(HistorianError::Connection { message }) => {
                info!(hostname = connection.hostname(), %message, "server connection failed");
                Ok(CheckOutcome::ConnectionFailed { message })
            }
            Err(e) => Err(e.into()),
        }
    }
}
