use quipdeck::app::App;
use quipdeck::config::ApiConfig;
use quipdeck::{logging, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ApiConfig::load()?;
    match logging::init_or_continue(&config.log_level) {
        Some(log_path) => tracing::info!(log = %log_path.display(), "starting quipdeck"),
        None => tracing::info!("starting quipdeck without a log file"),
    }

    let mut app = App::new(config)?;
    app.init()?;

    let outcome = app.run().await;
    app.shutdown()?;

    if let Err(e) = &outcome {
        tracing::error!(error = %e, "application error");
    }
    outcome
}
