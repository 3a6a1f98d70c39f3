use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::metadata::detail::DEFAULT_IMAGE_BASE;
use crate::metadata::tmdb::DEFAULT_API_BASE;

/// Default bound on every outbound fetch (metadata and artwork).
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";

/// Service configuration. Every flag can also be set from the environment.
#[derive(clap::Args, Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[arg(long, env = "NEXUS_OG_LISTEN", default_value = DEFAULT_LISTEN)]
    pub listen: SocketAddr,

    /// TMDB v3 API root.
    #[arg(long, env = "TMDB_API_BASE", default_value = DEFAULT_API_BASE)]
    pub tmdb_api_base: String,

    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub tmdb_api_key: Option<String>,

    /// Artwork CDN root; size buckets and paths are appended.
    #[arg(long, env = "TMDB_IMAGE_BASE", default_value = DEFAULT_IMAGE_BASE)]
    pub image_base: String,

    #[arg(long, env = "NEXUS_OG_FETCH_TIMEOUT_MS", default_value_t = DEFAULT_FETCH_TIMEOUT_MS)]
    pub fetch_timeout_ms: u64,

    /// Extra font directories, loaded on top of the system fonts.
    #[arg(
        long = "font-dir",
        env = "NEXUS_OG_FONT_DIRS",
        value_delimiter = ','
    )]
    pub font_dirs: Vec<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            tmdb_api_base: DEFAULT_API_BASE.to_owned(),
            tmdb_api_key: None,
            image_base: DEFAULT_IMAGE_BASE.to_owned(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            font_dirs: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Fetch timeout as a [`Duration`]; zero is clamped to one millisecond.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms.max(1))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
