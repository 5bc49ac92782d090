//! HTTP boundary.
//!
//! - `GET /` serves the dashboard page.
//! - `POST /analyze` accepts `{"text": "..."}` and returns the classifier's
//!   outcome as JSON.

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{AnalyzeRequest, AppState, router};

use std::sync::Arc;

use log::{info, warn};
use tokio::net::TcpListener;

use crate::classifier::AnalysisClassifier;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::language;

/// Run the server until Ctrl-C is received.
pub async fn serve(config: ServerConfig) -> Result<()> {
    config.validate()?;
    language::warm_up();

    let classifier = AnalysisClassifier::with_config(config.classifier.clone())?;
    info!("classifier ready: {classifier:?}");
    let state = AppState::new(Arc::new(classifier), config.max_input_chars);

    let listener = TcpListener::bind(&config.bind).await?;
    info!("Sentix listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!("cannot listen for Ctrl-C, running until killed: {e}");
            std::future::pending::<()>().await;
        }
    }
}
