pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod routing;
pub mod source;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use error::ViewerError;
pub use loader::{load, LayoutData, LoadError, Loaded, PageData};
pub use model::*;
pub use routing::{Endpoint, PageAction, Route};
pub use source::{CacheSource, HttpCacheSource, SourceError};

use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Build the viewer application for a configuration: HTTP source, router and
/// static assets.
pub fn build_app(config: &config::AppConfig) -> anyhow::Result<Router> {
    let source = HttpCacheSource::new(config.upstream_url()?, config.upstream_timeout())?;

    Ok(routes::create_router::<HttpCacheSource>()
        .nest_service("/assets", ServeDir::new(&config.assets.dir))
        .with_state(Arc::new(source)))
}
