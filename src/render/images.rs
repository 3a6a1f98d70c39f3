use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use futures_util::future::join_all;

use crate::foundation::core::Rect;
use crate::foundation::error::{OgError, OgResult};
use crate::scene::model::{SceneDocument, SceneNode};

/// Upper bound on a single artwork download.
pub const MAX_IMAGE_BYTES: usize = 8 * 1024 * 1024;

/// Source of encoded artwork bytes, keyed by the `href` of an image node.
pub trait ImageLoader: Send + Sync {
    fn load(&self, href: &str) -> impl Future<Output = OgResult<Vec<u8>>> + Send;
}

/// Fetches artwork over HTTP(S).
#[derive(Clone, Debug)]
pub struct HttpImageLoader {
    http: reqwest::Client,
    max_bytes: usize,
}

impl HttpImageLoader {
    pub fn new(timeout: Duration) -> OgResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build artwork http client")?;
        Ok(Self {
            http,
            max_bytes: MAX_IMAGE_BYTES,
        })
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

impl ImageLoader for HttpImageLoader {
    async fn load(&self, href: &str) -> OgResult<Vec<u8>> {
        let mut resp = self
            .http
            .get(href)
            .send()
            .await
            .map_err(|e| OgError::upstream(format!("GET {href}: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(OgError::upstream(format!("GET {href}: status {status}")));
        }
        if resp
            .content_length()
            .is_some_and(|len| len > self.max_bytes as u64)
        {
            return Err(OgError::upstream(format!(
                "GET {href}: body exceeds {} bytes",
                self.max_bytes
            )));
        }

        let mut body = Vec::new();
        while let Some(chunk) = resp
            .chunk()
            .await
            .map_err(|e| OgError::upstream(format!("GET {href}: read body: {e}")))?
        {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(OgError::upstream(format!(
                    "GET {href}: body exceeds {} bytes",
                    self.max_bytes
                )));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

/// Reads artwork from a local directory; `href` is a relative path below `root`.
#[derive(Clone, Debug)]
pub struct DirImageLoader {
    root: PathBuf,
}

impl DirImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageLoader for DirImageLoader {
    async fn load(&self, href: &str) -> OgResult<Vec<u8>> {
        let rel = normalize_rel_path(href)?;
        let path = self.root.join(rel);
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("read artwork from '{}'", path.display()))?;
        Ok(bytes)
    }
}

/// Normalize a loader-relative artwork path: `/` separators, no `.` segments, and no absolute
/// paths, URLs or parent traversals.
pub fn normalize_rel_path(href: &str) -> OgResult<String> {
    let s = href.replace('\\', "/");
    if s.starts_with('/') || s.contains("://") {
        return Err(OgError::invalid_request(format!(
            "artwork path '{href}' must be relative"
        )));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(OgError::invalid_request(format!(
                "artwork path '{href}' must not contain '..'"
            )));
        }
        out.push(part);
    }
    if out.is_empty() {
        return Err(OgError::invalid_request("artwork path must name a file"));
    }
    Ok(out.join("/"))
}

/// In-memory artwork keyed by href, for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct MemoryImageLoader {
    images: HashMap<String, Vec<u8>>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, href: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(href, bytes);
        self
    }

    pub fn insert(&mut self, href: impl Into<String>, bytes: Vec<u8>) {
        self.images.insert(href.into(), bytes);
    }
}

impl ImageLoader for MemoryImageLoader {
    async fn load(&self, href: &str) -> OgResult<Vec<u8>> {
        self.images
            .get(href)
            .cloned()
            .ok_or_else(|| OgError::not_found(format!("artwork '{href}'")))
    }
}

/// Encoded artwork for a scene, keyed by image node index.
///
/// Nodes without an entry failed to load; the rasterizer omits them (or fails, for required
/// nodes).
#[derive(Clone, Debug, Default)]
pub struct ImageSet {
    bytes: BTreeMap<usize, Vec<u8>>,
}

impl ImageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every image node of `doc` concurrently, each bounded by `timeout`.
    ///
    /// Never fails: a failed or timed out fetch leaves that node without bytes.
    #[tracing::instrument(skip_all, fields(images = doc.images().count()))]
    pub async fn prefetch<L: ImageLoader>(
        doc: &SceneDocument,
        loader: &L,
        timeout: Duration,
    ) -> Self {
        let jobs = doc
            .nodes()
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| match &item.node {
                SceneNode::Image(img) => Some((idx, img.href.as_str())),
                _ => None,
            })
            .map(|(idx, href)| async move {
                let outcome = tokio::time::timeout(timeout, loader.load(href)).await;
                (idx, href, outcome)
            });

        let mut set = Self::new();
        for (idx, href, outcome) in join_all(jobs).await {
            match outcome {
                Ok(Ok(bytes)) => {
                    tracing::debug!(href, bytes = bytes.len(), "artwork fetched");
                    set.insert(idx, bytes);
                }
                Ok(Err(err)) => tracing::warn!(href, %err, "artwork fetch failed"),
                Err(_) => tracing::warn!(href, ?timeout, "artwork fetch timed out"),
            }
        }
        set
    }

    pub fn insert(&mut self, node_index: usize, bytes: Vec<u8>) {
        self.bytes.insert(node_index, bytes);
    }

    pub fn get(&self, node_index: usize) -> Option<&[u8]> {
        self.bytes.get(&node_index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Decode `bytes` and scale-and-crop them to exactly cover `rect`, centered with the aspect ratio
/// preserved. Returns the result as PNG.
pub fn cover_png(bytes: &[u8], rect: Rect) -> OgResult<Vec<u8>> {
    let width = rect.width().round().max(1.0) as u32;
    let height = rect.height().round().max(1.0) as u32;

    let decoded = image::load_from_memory(bytes).context("decode artwork")?;
    let fitted = decoded.resize_to_fill(width, height, image::imageops::FilterType::Triangle);

    let mut out = Vec::new();
    fitted
        .to_rgba8()
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode fitted artwork")?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/images.rs"]
mod tests;
