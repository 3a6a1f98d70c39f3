use std::future::Future;

use crate::foundation::error::{OgError, OgResult};

/// Media family addressed by a detail-card request (`mt=movie|tv`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Feature film.
    Movie,
    /// TV show.
    Tv,
}

impl MediaKind {
    /// Parse the `mt` query value.
    pub fn parse(s: &str) -> OgResult<Self> {
        match s {
            "movie" => Ok(Self::Movie),
            "tv" => Ok(Self::Tv),
            other => Err(OgError::invalid_request(format!(
                "unknown media type \"{other}\" (expected movie or tv)"
            ))),
        }
    }

    /// Path segment used by the metadata API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

/// Movie detail fields consumed by the detail card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieDetail {
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    /// Genre names in upstream order.
    pub genres: Vec<String>,
    /// `YYYY-MM-DD` as returned upstream; may be empty or malformed.
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    /// Production company names in upstream order.
    pub production_companies: Vec<String>,
}

/// TV show detail fields consumed by the detail card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowDetail {
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    pub genres: Vec<String>,
    pub first_air_date: Option<String>,
    pub number_of_episodes: Option<u32>,
    pub number_of_seasons: Option<u32>,
    pub production_companies: Vec<String>,
}

/// Detail object resolved once at the selector boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaDetail {
    Movie(MovieDetail),
    Show(ShowDetail),
}

impl MediaDetail {
    /// Media family of this detail.
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Movie(_) => MediaKind::Movie,
            Self::Show(_) => MediaKind::Tv,
        }
    }
}

/// Read-only source of media details.
///
/// Implementations report a missing item as [`OgError::NotFound`] and transport or decoding
/// failures as [`OgError::UpstreamFetch`]. Retry policy, if any, belongs to the implementation.
pub trait MetadataSource: Send + Sync {
    /// Fetch the detail object for `id` of the given media family.
    fn detail(
        &self,
        id: u64,
        kind: MediaKind,
    ) -> impl Future<Output = OgResult<MediaDetail>> + Send;
}

/// Base URL of the public TMDB image CDN.
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
/// Size bucket used for poster artwork.
pub const POSTER_SIZE: &str = "w342";
/// Size bucket used for backdrop artwork.
pub const BACKDROP_SIZE: &str = "w1280";

/// Maps raw artwork paths (`/abc.jpg`) to fully qualified URLs for a size bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageResolver {
    base_url: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

impl ImageResolver {
    /// Create a resolver rooted at `base_url` (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Resolve `path` for the size bucket `size`. Blank paths resolve to `None`.
    pub fn url(&self, path: &str, size: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let sep = if path.starts_with('/') { "" } else { "/" };
        Some(format!("{}/{size}{sep}{path}", self.base_url))
    }

    /// Poster URL (`w342`).
    pub fn poster_url(&self, path: &str) -> Option<String> {
        self.url(path, POSTER_SIZE)
    }

    /// Backdrop URL (`w1280`).
    pub fn backdrop_url(&self, path: &str) -> Option<String> {
        self.url(path, BACKDROP_SIZE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/detail.rs"]
mod tests;
