use std::sync::Arc;

use innkeep_store::{RecordStore, UploadStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// JSON-per-hotel record store.
    pub records: Arc<RecordStore>,
    /// Uploaded-image placement and reference paths.
    pub uploads: Arc<UploadStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
