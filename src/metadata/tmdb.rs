use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;

use crate::foundation::error::{OgError, OgResult};
use crate::metadata::detail::{MediaDetail, MediaKind, MetadataSource, MovieDetail, ShowDetail};

/// Default TMDB v3 API root.
pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Deserialize)]
struct Named {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireMovie {
    #[serde(default)]
    title: String,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    vote_average: Option<f64>,
    #[serde(default)]
    genres: Vec<Named>,
    release_date: Option<String>,
    runtime: Option<u32>,
    #[serde(default)]
    production_companies: Vec<Named>,
}

#[derive(Debug, Deserialize)]
struct WireShow {
    #[serde(default)]
    name: String,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    vote_average: Option<f64>,
    #[serde(default)]
    genres: Vec<Named>,
    first_air_date: Option<String>,
    number_of_episodes: Option<u32>,
    number_of_seasons: Option<u32>,
    #[serde(default)]
    production_companies: Vec<Named>,
}

fn names(v: Vec<Named>) -> Vec<String> {
    v.into_iter().map(|n| n.name).collect()
}

impl From<WireMovie> for MovieDetail {
    fn from(w: WireMovie) -> Self {
        Self {
            title: w.title,
            poster_path: w.poster_path,
            backdrop_path: w.backdrop_path,
            vote_average: w.vote_average,
            genres: names(w.genres),
            release_date: w.release_date,
            runtime: w.runtime,
            production_companies: names(w.production_companies),
        }
    }
}

impl From<WireShow> for ShowDetail {
    fn from(w: WireShow) -> Self {
        Self {
            name: w.name,
            poster_path: w.poster_path,
            backdrop_path: w.backdrop_path,
            vote_average: w.vote_average,
            genres: names(w.genres),
            first_air_date: w.first_air_date,
            number_of_episodes: w.number_of_episodes,
            number_of_seasons: w.number_of_seasons,
            production_companies: names(w.production_companies),
        }
    }
}

/// Decode a TMDB detail payload of the given media family.
pub(crate) fn parse_detail(kind: MediaKind, body: &[u8]) -> OgResult<MediaDetail> {
    let detail = match kind {
        MediaKind::Movie => MediaDetail::Movie(
            serde_json::from_slice::<WireMovie>(body)
                .context("decode tmdb movie detail")?
                .into(),
        ),
        MediaKind::Tv => MediaDetail::Show(
            serde_json::from_slice::<WireShow>(body)
                .context("decode tmdb tv detail")?
                .into(),
        ),
    };
    Ok(detail)
}

/// [`MetadataSource`] backed by the TMDB REST API.
#[derive(Clone, Debug)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl TmdbClient {
    /// Build a client whose requests are bounded by `timeout`.
    pub fn new(
        api_base: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> OgResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build tmdb http client")?;
        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_owned(),
            api_key,
        })
    }
}

impl MetadataSource for TmdbClient {
    async fn detail(&self, id: u64, kind: MediaKind) -> OgResult<MediaDetail> {
        let url = format!("{}/{}/{id}", self.api_base, kind.as_str());
        let mut req = self.http.get(&url);
        if let Some(key) = &self.api_key {
            req = req.query(&[("api_key", key.as_str())]);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| OgError::upstream(format!("GET {url}: {e}")))?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(OgError::not_found(format!("{} {id}", kind.as_str())));
        }
        if !status.is_success() {
            return Err(OgError::upstream(format!("GET {url}: status {status}")));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| OgError::upstream(format!("GET {url}: read body: {e}")))?;
        tracing::debug!(%url, bytes = body.len(), "tmdb detail fetched");
        parse_detail(kind, &body).map_err(|e| OgError::upstream(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/tmdb.rs"]
mod tests;
