use crate::config::{Config, FragmentPolicy};
use crate::endpoints::handlers::{traffic_handler, view_handler};
use crate::endpoints::page::PageRenderer;
use crate::models::view::MapViewRequest;
use crate::reader::LocalFragment;
use crate::traits::FragmentSource;
use crate::utils::status::print_view_summary;
use crate::utils::urls::parse_base_url;
use anyhow::Context;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Read-only state shared by every request.
pub struct AppState {
    pub renderer: PageRenderer,
    pub view: MapViewRequest,
    pub fragment: Arc<dyn FragmentSource>,
    pub fragment_policy: FragmentPolicy,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_fragment(config, Arc::new(LocalFragment::new(&config.fragment)))
    }

    pub fn with_fragment(config: &Config, fragment: Arc<dyn FragmentSource>) -> Self {
        AppState {
            renderer: PageRenderer {
                base_url: config.base_url.clone(),
                title: config.title.clone(),
                heading: config.heading.clone(),
                refresh_secs: config.refresh_secs,
            },
            view: config.view,
            fragment,
            fragment_policy: config.fragment_policy,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/traffic", get(traffic_handler))
        .route("/traffic.php", get(traffic_handler))
        .route("/traffic/view.json", get(view_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct TrafficServer {
    config: Config,
    state: AppState,
}

impl TrafficServer {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.view.validate()?;
        parse_base_url(&config.base_url)?;
        if let Some(message) = missing_fragment_warning(&config) {
            tracing::warn!("{}", message);
        }
        let state = AppState::new(&config);
        Ok(Self { config, state })
    }

    pub async fn start(self) -> anyhow::Result<()> {
        let app = router(Arc::new(self.state));
        let addr = SocketAddr::new(self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        print_view_summary(&self.config);
        println!(
            r#"
    🚀 trafficmap serving on {}

    🗺️ Traffic map (refreshes every {}s)
       → http://{}/traffic

    📍 Configured view (JSON)
       → http://{}/traffic/view.json
            "#,
            addr, self.config.refresh_secs, addr, addr
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        tracing::info!("👋 trafficmap stopped");
        Ok(())
    }
}

fn missing_fragment_warning(config: &Config) -> Option<String> {
    if config.fragment.exists() {
        return None;
    }
    let outcome = match config.fragment_policy {
        FragmentPolicy::Blank => "pages render without it",
        FragmentPolicy::Fail => "every page request answers 500 until it appears",
    };
    Some(format!(
        "⚠️ Fragment {} not found, {}",
        config.fragment.display(),
        outcome
    ))
}

/// Resolves on Ctrl-C, or SIGHUP on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let hangup = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::hangup()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGHUP: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let hangup = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl-C received, shutting down"),
        _ = hangup => tracing::info!("SIGHUP received, shutting down"),
    }
}
