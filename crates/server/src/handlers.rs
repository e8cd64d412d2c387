//! HTTP handlers

use crate::page::render_index;
use crate::urls::static_url;
use crate::AppState;
use poem::http::StatusCode;
use poem::web::{Data, Html, Json, Path};
use poem::handler;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Single folder entry returned by `/latest-images/:name`
#[derive(Debug, Serialize)]
pub struct ImageEntry {
    pub name: String,
    /// `None` when the current path is outside the static root
    pub url: Option<String>,
}

// GET /
#[handler]
pub fn index(state: Data<&Arc<AppState>>) -> Html<String> {
    let snapshot = state.registry.get_all();
    Html(render_index(&state.static_root, &snapshot))
}

// GET /latest-images
//
// Folder name -> URL of its latest image. Entries that cannot be served
// from the static root are left out.
#[handler]
pub fn latest_images(state: Data<&Arc<AppState>>) -> Json<BTreeMap<String, String>> {
    let urls = state
        .registry
        .get_all()
        .into_iter()
        .filter_map(|(name, path)| match static_url(&state.static_root, &path) {
            Some(url) => Some((name, url)),
            None => {
                debug!("{} is outside the static root, omitting {}", path.display(), name);
                None
            }
        })
        .collect();

    Json(urls)
}

// GET /latest-images/:name
#[handler]
pub fn latest_image(
    Path(name): Path<String>,
    state: Data<&Arc<AppState>>,
) -> Result<Json<ImageEntry>, StatusCode> {
    let path = state.registry.get(&name).ok_or(StatusCode::NOT_FOUND)?;
    let url = static_url(&state.static_root, &path);
    Ok(Json(ImageEntry { name, url }))
}

// GET /health
#[handler]
pub fn health() -> &'static str {
    "ok"
}
