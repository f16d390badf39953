use crate::config::Config;
use crate::gateway::AiGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub gateway: AiGateway,
    pub config: Config,
}
