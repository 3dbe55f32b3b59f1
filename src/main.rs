use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use mergington_activities::config::ServerConfig;
use mergington_activities::services::registry::ActivityRegistry;
use mergington_activities::{telemetry, web};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    telemetry::init();

    let config = ServerConfig::from_env();
    let registry = Arc::new(ActivityRegistry::seeded());
    info!(
        activities = registry.list_activities().len(),
        static_dir = %config.static_dir.display(),
        "activity registry seeded"
    );

    let app = web::router(registry, &config.static_dir);

    let addr = config.addr().context("invalid HOST/PORT")?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("🚀 Serving on http://{}", bound_addr);
    info!("📍 Open http://{}/ for the activities page", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
