//! Listening socket, accept loop and the state shared by connections.

pub mod listener;
pub mod spawner;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::metrics::Metrics;

pub use spawner::{Spawner, TokioSpawner};

/// State handed to every connection.
///
/// Cloning is cheap; all clones share the same `Metrics`.
#[derive(Debug, Clone)]
pub struct ServerContext {
    metrics: Arc<Metrics>,
    document_root: Arc<PathBuf>,
}

impl ServerContext {
    /// A context with fresh counters serving static files from `document_root`.
    pub fn new(document_root: impl Into<PathBuf>) -> Self {
        Self {
            metrics: Arc::new(Metrics::new()),
            document_root: Arc::new(document_root.into()),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn document_root(&self) -> &Path {
        &self.document_root
    }
}

impl Default for ServerContext {
    /// Serves from the process working directory.
    fn default() -> Self {
        Self::new(".")
    }
}
