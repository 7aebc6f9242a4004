//! Service container for dependency injection
//!
//! Wires the configured historian client into the services.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{FetchService, TagCheckService};
use crate::config::Settings;
use crate::infrastructure::historian::{DisconnectedHistorian, ReplayHistorian};
use crate::infrastructure::traits::{FileSystem, HistorianClient, RealFileSystem};
use crate::infrastructure::InfraResult;

/// Container holding the historian client.
pub struct ServiceContainer {
    /// Historian client shared by all services
    pub client: Arc<dyn HistorianClient>,
}

impl ServiceContainer {
    /// Create a container with the backend selected by `settings`.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        Self::with_fs(settings, &RealFileSystem)
    }

    /// Create a container, reading backend files through `fs`.
    pub fn with_fs(settings: Settings, fs: &dyn FileSystem) -> InfraResult<Self> {
        let client: Arc<dyn HistorianClient> = match &settings.historian.replay_file {
            Some(path) => {
                debug!(path = %path.display(), "using replay historian");
                Arc::new(ReplayHistorian::load(fs, path)?)
            }
            None => {
                debug!("no historian backend configured");
                Arc::new(DisconnectedHistorian)
            }
        };
        Ok(Self::with_deps(client))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(client: Arc<dyn HistorianClient>) -> Self {
        Self { client }
    }

    pub fn fetch_service(&self) -> FetchService {
        FetchService::new(Arc::clone(&self.client))
    }

    pub fn tag_check_service(&self) -> TagCheckService {
        TagCheckService::new(Arc::clone(&self.client))
    }
}
