use std::sync::Arc;

use anyhow::Context as _;
use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::config::ServiceConfig;
use crate::foundation::error::OgError;
use crate::metadata::detail::MetadataSource;
use crate::render::images::ImageLoader;
use crate::service::pipeline::OgService;

/// Route serving every card variant.
pub const OG_IMAGE_PATH: &str = "/ogimage";

pub fn router<S, L>(service: Arc<OgService<S, L>>) -> Router
where
    S: MetadataSource + 'static,
    L: ImageLoader + 'static,
{
    Router::new()
        .route(OG_IMAGE_PATH, get(og_image::<S, L>))
        .with_state(service)
}

async fn og_image<S, L>(
    State(service): State<Arc<OgService<S, L>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response
where
    S: MetadataSource + 'static,
    L: ImageLoader + 'static,
{
    match query {
        Ok(Query(pairs)) => service.respond(&pairs).await,
        Err(rejection) => OgError::invalid_request(rejection.body_text()).into_response(),
    }
}

/// Bind `config.listen` and serve until Ctrl+C.
pub async fn serve(config: &ServiceConfig) -> anyhow::Result<()> {
    let service = Arc::new(OgService::from_config(config)?);
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("bind {}", config.listen))?;
    tracing::info!(listen = %config.listen, "og image service listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

