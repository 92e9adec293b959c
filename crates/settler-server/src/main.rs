//! Settler Server — application entry point.

use std::sync::Arc;

use settler_auth::{AuthConfig, AuthService};
use settler_directory::AccountDirectory;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("settler=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting Settler server...");

    let directory = Arc::new(AccountDirectory::new());
    directory.seed_samples();

    let auth = match AuthService::new(Arc::clone(&directory), AuthConfig::default()) {
        Ok(service) => service,
        Err(err) => {
            tracing::error!(error = %err, "invalid authentication configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        accounts = directory.len(),
        max_attempts = auth.config().max_attempts,
        session_timeout_mins = auth.config().session_timeout.num_minutes(),
        "authentication service ready"
    );

    // TODO: wire the scheduler, emergency, and inventory collaborators
    // once their services land.

    tracing::info!("Settler server stopped.");
}
