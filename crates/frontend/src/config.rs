//! Build-time client configuration.

use project_client::ClientConfig;

/// Client config for this build.
///
/// `PROJECT_BOARD_API_BASE` points the client at another origin;
/// unset means same origin.
pub fn client_config() -> ClientConfig {
    match option_env!("PROJECT_BOARD_API_BASE") {
        Some(base) if !base.is_empty() => ClientConfig::with_base_url(base),
        _ => ClientConfig::default(),
    }
}
