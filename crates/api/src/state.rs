use std::sync::Arc;

use sheetstack_catalog::TemplateStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store holds only a path and a policy, the
/// config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Read-only query interface over the template data directory.
    pub store: TemplateStore,
    /// Server configuration (admin gate, base URL, CORS).
    pub config: Arc<ServerConfig>,
}
