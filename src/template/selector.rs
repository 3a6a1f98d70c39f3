use std::time::Duration;

use crate::foundation::error::{OgError, OgResult};
use crate::metadata::detail::{ImageResolver, MediaDetail, MetadataSource};
use crate::template::request::{DetailCard, RequestKey, SceneRequest};
use crate::template::resolved::{MAX_GENRES, ResolvedTemplate};
use crate::template::sections::lookup_section;
use crate::text::format::parse_release_year;

/// Resolves raw request parameters into a [`ResolvedTemplate`].
///
/// The detail-card path performs exactly one metadata fetch, bounded by `fetch_timeout`; the
/// section-banner path performs none.
pub struct TemplateSelector<'a, S> {
    source: &'a S,
    images: &'a ImageResolver,
    fetch_timeout: Duration,
}

impl<'a, S: MetadataSource> TemplateSelector<'a, S> {
    pub fn new(source: &'a S, images: &'a ImageResolver, fetch_timeout: Duration) -> Self {
        Self {
            source,
            images,
            fetch_timeout,
        }
    }

    /// Parse `pairs`, fetch metadata if needed and apply defaults.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, pairs: &[(String, String)]) -> OgResult<ResolvedTemplate> {
        let request = match RequestKey::parse(pairs)? {
            RequestKey::Media { id, kind } => {
                let detail = tokio::time::timeout(self.fetch_timeout, self.source.detail(id, kind))
                    .await
                    .map_err(|_| {
                        OgError::upstream(format!(
                            "{} {id}: metadata fetch timed out after {:?}",
                            kind.as_str(),
                            self.fetch_timeout
                        ))
                    })??;
                scene_request_from_detail(detail, self.images)
            }
            RequestKey::Section(key) => {
                let entry = lookup_section(Some(&key));
                tracing::debug!(requested = %key, resolved = entry.key, "section banner");
                SceneRequest::SectionBanner(entry.to_banner())
            }
        };
        ResolvedTemplate::from_request(request)
    }
}

/// Map a detail object onto the detail-card request.
pub fn scene_request_from_detail(detail: MediaDetail, images: &ImageResolver) -> SceneRequest {
    let media = detail.kind();
    let card = match detail {
        MediaDetail::Movie(m) => DetailCard {
            media,
            title: m.title,
            poster: m.poster_path.as_deref().and_then(|p| images.poster_url(p)),
            backdrop: m.backdrop_path.as_deref().and_then(|p| images.backdrop_url(p)),
            rating: m.vote_average,
            genres: m.genres.into_iter().take(MAX_GENRES).collect(),
            release_year: m.release_date.as_deref().and_then(parse_release_year),
            episode_count: None,
            season_count: None,
            runtime_minutes: m.runtime,
            studio: m.production_companies.into_iter().next(),
        },
        MediaDetail::Show(s) => DetailCard {
            media,
            title: s.name,
            poster: s.poster_path.as_deref().and_then(|p| images.poster_url(p)),
            backdrop: s.backdrop_path.as_deref().and_then(|p| images.backdrop_url(p)),
            rating: s.vote_average,
            genres: s.genres.into_iter().take(MAX_GENRES).collect(),
            release_year: s.first_air_date.as_deref().and_then(parse_release_year),
            episode_count: s.number_of_episodes,
            season_count: s.number_of_seasons,
            runtime_minutes: None,
            studio: s.production_companies.into_iter().next(),
        },
    };
    SceneRequest::DetailCard(card)
}

#[cfg(test)]
#[path = "../../tests/unit/template/selector.rs"]
mod tests;
