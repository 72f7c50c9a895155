use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use snip_core::UrlStore;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::GatewaySettings;
use crate::handlers::{
    create_url_handler, health_handler, missing_short_code_handler, redirect_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", post(create_url_handler).get(missing_short_code_handler))
            .route("/health", get(health_handler))
            .route("/{short_code}", get(redirect_handler))
            .layer(CatchPanicLayer::new())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Binds `settings.listen_addr` and serves until a shutdown signal arrives.
    pub async fn serve(settings: GatewaySettings, store: Arc<dyn UrlStore>) -> std::io::Result<()> {
        let listener = TcpListener::bind(settings.listen_addr).await?;
        info!(
            listen_addr = %listener.local_addr()?,
            base_url = %settings.base_url,
            "starting gateway server"
        );

        let state = AppState::new(store, settings.base_url);
        axum::serve(listener, Self::router(state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
