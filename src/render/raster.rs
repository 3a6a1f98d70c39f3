use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use base64::Engine as _;
use usvg::fontdb;

use crate::foundation::core::Canvas;
use crate::foundation::error::{OgError, OgResult};
use crate::render::fonts::{build_fontdb, font_resolver};
use crate::render::images::{ImageSet, cover_png};
use crate::scene::model::{SceneDocument, SceneNode};
use crate::scene::svg::write_svg;

/// MIME type of every image this crate produces.
pub const PNG_MIME: &str = "image/png";

/// An encoded raster image. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl EncodedImage {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mime(&self) -> &'static str {
        PNG_MIME
    }
}

/// Scene -> PNG.
///
/// Holds only the font database, which is shared read-only between concurrent renders; every
/// call allocates its own pixmap.
#[derive(Clone, Debug)]
pub struct Rasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl Rasterizer {
    /// Load system fonts plus the fonts found in `font_dirs`.
    pub fn new(font_dirs: &[PathBuf]) -> Self {
        Self::with_fontdb(build_fontdb(font_dirs))
    }

    pub fn with_fontdb(fontdb: Arc<fontdb::Database>) -> Self {
        Self { fontdb }
    }

    pub fn fontdb(&self) -> &Arc<fontdb::Database> {
        &self.fontdb
    }

    /// Render `doc` at exactly its canvas size.
    ///
    /// Image nodes whose bytes are missing from `images` or fail to decode are left out, unless
    /// the node is `required`, in which case the whole render fails.
    #[tracing::instrument(skip_all, fields(nodes = doc.len(), images = images.len()))]
    pub fn rasterize(&self, doc: &SceneDocument, images: &ImageSet) -> OgResult<EncodedImage> {
        let embedded = embed_images(doc, images)?;
        let svg = write_svg(doc, &|idx, _| embedded.get(&idx).cloned());
        self.rasterize_svg(&svg, doc.canvas())
    }

    /// Render an SVG document into a `canvas`-sized PNG, scaling it to fit.
    pub fn rasterize_svg(&self, svg: &str, canvas: Canvas) -> OgResult<EncodedImage> {
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            font_resolver: font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| OgError::render(format!("parse scene svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| OgError::render("failed to allocate pixmap"))?;
        let sx = canvas.width as f32 / tree.size().width();
        let sy = canvas.height as f32 / tree.size().height();
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        let rgba: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        let bytes = encode_png(canvas, rgba)?;
        tracing::debug!(bytes = bytes.len(), "png encoded");

        Ok(EncodedImage {
            bytes,
            width: canvas.width,
            height: canvas.height,
        })
    }
}

fn embed_images(doc: &SceneDocument, images: &ImageSet) -> OgResult<BTreeMap<usize, String>> {
    let mut out = BTreeMap::new();
    for (idx, item) in doc.nodes().iter().enumerate() {
        let SceneNode::Image(img) = &item.node else {
            continue;
        };
        let fitted = images
            .get(idx)
            .ok_or_else(|| OgError::render("artwork unavailable"))
            .and_then(|bytes| cover_png(bytes, img.rect));
        match fitted {
            Ok(png) => {
                out.insert(idx, png_data_uri(&png));
            }
            Err(err) if img.required => {
                return Err(OgError::render(format!(
                    "required image '{}': {err}",
                    img.href
                )));
            }
            Err(err) => tracing::warn!(href = %img.href, %err, "omitting artwork"),
        }
    }
    Ok(out)
}

fn png_data_uri(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

fn encode_png(canvas: Canvas, rgba: Vec<u8>) -> OgResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(canvas.width, canvas.height, rgba)
        .ok_or_else(|| OgError::render("pixel buffer does not match canvas size"))?;
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
