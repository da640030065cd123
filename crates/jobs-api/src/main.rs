//! Jobs API server entry point
//!
//! ```bash
//! cargo run -p jobs-api
//! ```
//!
//! Configuration comes from the environment, with `.env` loaded first.

use jobs_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting Jobs API server"
    );

    if let Err(e) = jobs_api::run(config).await {
        error!(error = %e, "Server stopped with an error");
        std::process::exit(1);
    }
}
