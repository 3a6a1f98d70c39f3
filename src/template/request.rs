use crate::foundation::core::Rgba8;
use crate::foundation::error::{OgError, OgResult};
use crate::metadata::detail::MediaKind;

/// Which variant a raw query addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestKey {
    /// `m=<id>&mt=movie|tv`
    Media { id: u64, kind: MediaKind },
    /// `it=<sectionKey>`
    Section(String),
}

impl RequestKey {
    /// Parse query pairs. Exactly one variant's parameters must be present.
    ///
    /// Empty values count as absent. Only the first occurrence of a key is considered.
    pub fn parse(pairs: &[(String, String)]) -> OgResult<Self> {
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.trim())
                .filter(|v| !v.is_empty())
        };

        match (get("m"), get("mt"), get("it")) {
            (Some(m), Some(mt), None) => {
                let kind = MediaKind::parse(mt)?;
                let id = m
                    .parse::<u64>()
                    .ok()
                    .filter(|id| *id > 0)
                    .ok_or_else(|| OgError::invalid_request(format!("invalid media id \"{m}\"")))?;
                Ok(Self::Media { id, kind })
            }
            (None, None, Some(it)) => Ok(Self::Section(it.to_owned())),
            (None, None, None) => Err(OgError::invalid_request(
                "expected either m and mt, or it",
            )),
            _ => Err(OgError::invalid_request(
                "m and mt must be given together and never with it",
            )),
        }
    }
}

/// Two-tone color mapping applied over a banner background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Duotone {
    /// Color mapped to the darkest tones.
    pub shadow: Rgba8,
    /// Color mapped to the brightest tones.
    pub highlight: Rgba8,
}

/// Media-specific card fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailCard {
    pub media: MediaKind,
    #[serde(default)]
    pub title: String,
    /// Poster image reference (URL or loader-relative path).
    #[serde(default)]
    pub poster: Option<String>,
    /// Backdrop image reference.
    #[serde(default)]
    pub backdrop: Option<String>,
    /// Raw score, formatted at resolve time.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Genre names; only the first four are rendered.
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    /// Shows only.
    #[serde(default)]
    pub episode_count: Option<u32>,
    /// Shows only.
    #[serde(default)]
    pub season_count: Option<u32>,
    /// Movies only.
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub studio: Option<String>,
}

/// Generic section banner fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionBanner {
    pub title: String,
    pub background: String,
    /// Solid fill painted under the background. Without it the background is mandatory.
    #[serde(default)]
    pub fallback_color: Option<Rgba8>,
    #[serde(default)]
    pub duotone: Option<Duotone>,
}

/// Exactly one preview variant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneRequest {
    DetailCard(DetailCard),
    SectionBanner(SectionBanner),
}

impl SceneRequest {
    /// Parse a JSON request (as used by the `render` CLI command) and validate it.
    pub fn from_json(bytes: &[u8]) -> OgResult<Self> {
        let req: Self = serde_json::from_slice(bytes)
            .map_err(|e| OgError::invalid_request(format!("scene request: {e}")))?;
        req.validate()?;
        Ok(req)
    }

    /// Reject media-family fields that do not belong to the card's media kind.
    pub fn validate(&self) -> OgResult<()> {
        let Self::DetailCard(card) = self else {
            return Ok(());
        };
        match card.media {
            MediaKind::Movie if card.episode_count.is_some() || card.season_count.is_some() => {
                Err(OgError::invalid_request(
                    "episode/season counts are only valid for tv",
                ))
            }
            MediaKind::Tv if card.runtime_minutes.is_some() => Err(OgError::invalid_request(
                "runtime is only valid for movies",
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/request.rs"]
mod tests;
