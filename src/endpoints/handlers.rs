use crate::config::FragmentPolicy;
use crate::endpoints::server::AppState;
use crate::error::TrafficError;
use crate::utils::urls::{embed_url, large_map_url};
use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct ViewResponse {
    bbox: String,
    lat: f64,
    lon: f64,
    embed_url: String,
    large_map_url: String,
}

pub async fn traffic_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, TrafficError> {
    let fragment = match state.fragment.load().await {
        Ok(fragment) => fragment,
        Err(err) => match state.fragment_policy {
            FragmentPolicy::Blank => {
                tracing::warn!("⚠️ {} -> rendering without it", err);
                String::new()
            }
            FragmentPolicy::Fail => return Err(err),
        },
    };

    Ok(Html(state.renderer.render(&state.view, &fragment)))
}

pub async fn view_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let base = &state.renderer.base_url;
    Json(ViewResponse {
        bbox: state.view.bbox.to_string(),
        lat: state.view.lat,
        lon: state.view.lon,
        embed_url: embed_url(base, &state.view),
        large_map_url: large_map_url(base, &state.view),
    })
}
