//! Rasterization: artwork loading, font database and scene -> PNG.

/// Font database construction and font selection.
pub mod fonts;
/// Artwork loaders and per-scene image prefetch.
pub mod images;
pub mod raster;
