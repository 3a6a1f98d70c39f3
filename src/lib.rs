//! nexus-og renders Open Graph preview cards (1200x630 PNG) for the NEXUS media catalog.
//!
//! A request flows through four stages:
//!
//! - Resolve query parameters into a [`ResolvedTemplate`] (detail card or section banner)
//! - Compose the template into a back-to-front [`SceneDocument`]
//! - Rasterize the scene with [`Rasterizer`] into an [`EncodedImage`]
//! - Wrap the image (or the error) into an HTTP response
//!
//! [`OgService`] wires the stages together; [`service::http::router`] exposes it over axum.
#![forbid(unsafe_code)]

mod foundation;

/// Command-line and environment configuration.
pub mod config;
/// Media metadata collaborators.
pub mod metadata;
pub mod render;
pub mod scene;
pub mod service;
pub mod template;
/// Text measurement, line breaking and display formatting.
pub mod text;

pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
pub use crate::foundation::error::{OgError, OgResult};

pub use crate::config::ServiceConfig;
pub use crate::metadata::detail::{ImageResolver, MediaDetail, MediaKind, MetadataSource};
pub use crate::metadata::tmdb::TmdbClient;
pub use crate::render::images::{
    DirImageLoader, HttpImageLoader, ImageLoader, ImageSet, MemoryImageLoader,
};
pub use crate::render::raster::{EncodedImage, Rasterizer};
pub use crate::scene::compose::compose;
pub use crate::scene::model::SceneDocument;
pub use crate::service::pipeline::OgService;
pub use crate::template::request::SceneRequest;
pub use crate::template::resolved::ResolvedTemplate;
pub use crate::text::metrics::{FontMetrics, StaticMetrics};
