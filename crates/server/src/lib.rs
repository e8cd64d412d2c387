//! HTTP read path for imagewall
//!
//! Routes:
//! - `GET /` - the image wall page
//! - `GET /latest-images` - `{ folder: url }` for every servable entry
//! - `GET /latest-images/:name` - one folder's entry, 404 if unknown
//! - `GET /static/*` - files under the static root
//! - `GET /health`

pub mod handlers;
pub mod page;
pub mod urls;

use imagewall_core::LatestImageRegistry;
use poem::endpoint::StaticFilesEndpoint;
use poem::listener::TcpListener;
use poem::middleware::Tracing;
use poem::{get, Endpoint, EndpointExt, Route, Server};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// State shared by all handlers
pub struct AppState {
    pub registry: Arc<LatestImageRegistry>,
    /// Directory served under `/static`; registry paths are made relative to it
    pub static_root: PathBuf,
}

impl AppState {
    pub fn new(registry: Arc<LatestImageRegistry>, static_root: PathBuf) -> Self {
        Self {
            registry,
            static_root,
        }
    }
}

/// Build the route tree
pub fn app(state: AppState) -> impl Endpoint {
    let static_files = StaticFilesEndpoint::new(&state.static_root);

    Route::new()
        .at("/", get(handlers::index))
        .at("/latest-images", get(handlers::latest_images))
        .at("/latest-images/:name", get(handlers::latest_image))
        .at("/health", get(handlers::health))
        .nest(urls::STATIC_PREFIX, static_files)
        .data(Arc::new(state))
        .with(Tracing)
}

/// Serve until `shutdown` resolves
///
/// In-flight requests get `grace` to finish once shutdown starts.
pub async fn serve<F>(state: AppState, addr: &str, shutdown: F, grace: Duration) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let app = app(state);
    info!("Listening on http://{}", addr);

    Server::new(TcpListener::bind(addr))
        .run_with_graceful_shutdown(app, shutdown, Some(grace))
        .await
}
