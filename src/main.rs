use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agriadvisor_backend::config::Config;
use agriadvisor_backend::datasources::SimulatedWeather;
use agriadvisor_backend::logic::confidence::FieldCoverageConfidence;
use agriadvisor_backend::logic::YieldEstimator;
use agriadvisor_backend::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agriadvisor_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting AgriAdvisor server");

    let state = AppState {
        config: Arc::new(config.clone()),
        weather: Arc::new(SimulatedWeather),
        estimator: Arc::new(YieldEstimator::new(Arc::new(FieldCoverageConfidence))),
    };

    let app = create_app(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
