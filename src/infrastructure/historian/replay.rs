//! Replay historian: serves recorded responses from a TOML file
//!
//! ```toml
//! [[server]]
//! hostname = "MALSHW1"
//! port = 3000
//! username = "operator"
//! password = "secret"
//!
//! [[server.tag]]
//! name = "A.RL_AI7361.BATCH"
//! canonical = "A.RL_AI7361.BATCH"
//! document = "<NewDataSet>...</NewDataSet>"
//! ```
//!
//! Host and tag names match case-insensitively, like the historian itself.
//! Time range and sample frequency are not interpreted.

use std::path::{Path, PathBuf};

use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::{Document, QueryRequest, ServerConnection, DEFAULT_PORT};
use crate::infrastructure::traits::{FileSystem, HistorianClient};
use crate::infrastructure::{HistorianError, HistorianResult, InfraError, InfraResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReplayFile {
    #[serde(default, rename = "server")]
    servers: Vec<ReplayServer>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReplayServer {
    hostname: String,
    #[serde(default = "default_port")]
    port: u16,
    /// When set, the connection must present these credentials
    username: Option<String>,
    #[serde(default)]
    password: String,
    #[serde(default, rename = "tag")]
    tags: Vec<ReplayTag>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReplayTag {
    name: String,
    canonical: Option<String>,
    #[serde(default)]
    document: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ReplayServer {
    fn find_tag(&self, name: &str) -> Option<&ReplayTag> {
        self.tags.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

/// Historian client backed by a replay file.
#[derive(Debug)]
pub struct ReplayHistorian {
    path: PathBuf,
    servers: Vec<ReplayServer>,
}

impl ReplayHistorian {
    /// Load a replay file through the filesystem abstraction.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> InfraResult<Self> {
        let content = fs
            .read_to_string(path)
            .map_err(|e| InfraError::io(format!("read replay file {}", path.display()), e))?;
        Self::parse(&content, path)
    }

    /// Parse replay file content; `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> InfraResult<Self> {
        let file: ReplayFile = toml::from_str(content).map_err(|e| InfraError::Replay {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(
            path = %path.display(),
            servers = file.servers.len(),
            "loaded replay file"
        );
        Ok(Self {
            path: path.to_path_buf(),
            servers: file.servers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self, connection: &ServerConnection) -> HistorianResult<&ReplayServer> {
        let server = self
            .servers
            .iter()
            .find(|s| {
                s.hostname.eq_ignore_ascii_case(connection.hostname())
                    && s.port == connection.port()
            })
            .ok_or_else(|| {
                HistorianError::connection(format!(
                    "unable to connect to {}:{}",
                    connection.hostname(),
                    connection.port()
                ))
            })?;

        if let Some(username) = &server.username {
            if connection.is_anonymous() {
                return Err(HistorianError::connection(format!(
                    "login failed: {} requires credentials",
                    server.hostname
                )));
            }
            let password_matches = connection.password().expose_secret() == server.password;
            if connection.username() != username || !password_matches {
                return Err(HistorianError::connection(format!(
                    "login failed for user '{}' on {}",
                    connection.username(),
                    server.hostname
                )));
            }
        }
        Ok(server)
    }
}

impl HistorianClient for ReplayHistorian {
    #[instrument(level = "debug", skip(self, request), fields(hostname = connection.hostname()))]
    fn fetch_row_data(
        &self,
        connection: &ServerConnection,
        request: &QueryRequest,
    ) -> HistorianResult<Document> {
        let server = self.connect(connection)?;
        debug!(
            start = %request.start_time,
            end = %request.end_time,
            frequency = request.sample_frequency,
            "replaying row data"
        );

        let documents = request
            .tags()
            .iter()
            .map(|tag| {
                server
                    .find_tag(tag.name())
                    .map(|t| t.document.as_str())
                    .ok_or_else(|| {
                        HistorianError::query(format!(
                            "tag '{}' not found on {}",
                            tag,
                            server.hostname
                        ))
                    })
            })
            .collect::<HistorianResult<Vec<_>>>()?;

        Ok(Document::new(documents.join("\n")))
    }

    #[instrument(level = "debug", skip(self), fields(hostname = connection.hostname()))]
    fn resolve_tag_name(
        &self,
        connection: &ServerConnection,
        tag: &str,
    ) -> HistorianResult<String> {
        let server = self.connect(connection)?;
        Ok(server
            .find_tag(tag)
            .map(|t| t.canonical.clone().unwrap_or_else(|| t.name.clone()))
            .unwrap_or_default())
    }
}
