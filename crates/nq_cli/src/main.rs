use anyhow::Result;
use nq_core::Dataset;
use nq_web::{create_app, AppState};
use tracing::info;

/// The dataset ships with the binary; a load failure is a startup failure
/// and the process never serves traffic.
const DATASET_JSON: &str = include_str!("../../../data/newslight.json");

const LISTEN_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let dataset = Dataset::from_json_str(DATASET_JSON)?;
    info!("Loaded {} articles", dataset.len());

    let app = create_app(AppState::new(dataset));
    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
