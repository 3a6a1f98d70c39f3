use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use axum::response::Response;

use crate::config::{DEFAULT_FETCH_TIMEOUT_MS, ServiceConfig};
use crate::foundation::error::OgResult;
use crate::metadata::detail::{ImageResolver, MetadataSource};
use crate::metadata::tmdb::TmdbClient;
use crate::render::images::{HttpImageLoader, ImageLoader, ImageSet};
use crate::render::raster::{EncodedImage, Rasterizer};
use crate::scene::compose::compose;
use crate::service::response;
use crate::template::resolved::ResolvedTemplate;
use crate::template::selector::TemplateSelector;
use crate::text::metrics::{FontMetrics, StaticMetrics};

/// The whole request pipeline: select -> compose -> prefetch artwork -> rasterize.
///
/// Holds only shared, read-only collaborators; every request owns its own template, scene and
/// image set.
pub struct OgService<S, L> {
    metadata: S,
    loader: L,
    images: ImageResolver,
    rasterizer: Arc<Rasterizer>,
    metrics: Arc<dyn FontMetrics>,
    fetch_timeout: Duration,
}

impl OgService<TmdbClient, HttpImageLoader> {
    /// Production wiring: TMDB metadata, HTTP artwork, fonts from `config.font_dirs`.
    pub fn from_config(config: &ServiceConfig) -> OgResult<Self> {
        let timeout = config.fetch_timeout();
        let metadata = TmdbClient::new(
            config.tmdb_api_base.clone(),
            config.tmdb_api_key.clone(),
            timeout,
        )?;
        let loader = HttpImageLoader::new(timeout)?;
        Ok(Self::new(metadata, loader, Rasterizer::new(&config.font_dirs))
            .with_image_resolver(ImageResolver::new(config.image_base.clone()))
            .with_fetch_timeout(timeout))
    }
}

impl<S: MetadataSource, L: ImageLoader> OgService<S, L> {
    pub fn new(metadata: S, loader: L, rasterizer: Rasterizer) -> Self {
        Self {
            metadata,
            loader,
            images: ImageResolver::default(),
            rasterizer: Arc::new(rasterizer),
            metrics: Arc::new(StaticMetrics),
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        }
    }

    pub fn with_image_resolver(mut self, images: ImageResolver) -> Self {
        self.images = images;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn FontMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn metadata(&self) -> &S {
        &self.metadata
    }

    /// Render the card for raw query `pairs`.
    pub async fn render(&self, pairs: &[(String, String)]) -> OgResult<EncodedImage> {
        let template = TemplateSelector::new(&self.metadata, &self.images, self.fetch_timeout)
            .resolve(pairs)
            .await?;
        self.render_template(template).await
    }

    /// Render an already resolved template.
    #[tracing::instrument(skip_all, fields(kind = template.kind().as_str()))]
    pub async fn render_template(&self, template: ResolvedTemplate) -> OgResult<EncodedImage> {
        let doc = compose(&template, self.metrics.as_ref());
        let images = ImageSet::prefetch(&doc, &self.loader, self.fetch_timeout).await;

        let rasterizer = Arc::clone(&self.rasterizer);
        tokio::task::spawn_blocking(move || rasterizer.rasterize(&doc, &images))
            .await
            .context("join rasterizer task")?
    }

    /// [`render`](Self::render) followed by the response builder.
    pub async fn respond(&self, pairs: &[(String, String)]) -> Response {
        response::build(self.render(pairs).await)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/service/pipeline.rs"]
mod tests;
