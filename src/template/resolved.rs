use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::OgResult;
use crate::metadata::detail::MediaKind;
use crate::template::request::{DetailCard, Duotone, SceneRequest, SectionBanner};
use crate::template::sections::default_section;
use crate::text::format::{
    format_episodes, format_rating, format_runtime, format_seasons, meta_line, strip_unprintable,
};

/// Maximum number of genre pills on a detail card.
pub const MAX_GENRES: usize = 4;

/// Title used when a detail object has no usable title.
pub const UNTITLED: &str = "Untitled";

/// Layout identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    DetailCard,
    SectionBanner,
}

impl TemplateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DetailCard => "detail_card",
            Self::SectionBanner => "section_banner",
        }
    }

    /// Fixed canvas of the template family.
    pub fn canvas(self) -> Canvas {
        Canvas::OPEN_GRAPH
    }
}

/// Defaulted detail-card fields; numeric values are already formatted for display.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailCardFields {
    pub media: MediaKind,
    pub title: String,
    pub poster: Option<String>,
    pub backdrop: Option<String>,
    /// One-decimal rating, e.g. `8.2`.
    pub rating: Option<String>,
    /// At most [`MAX_GENRES`] names, upstream order.
    pub genres: Vec<String>,
    /// Year and runtime (movie) or season/episode counts (tv).
    pub meta_line: Option<String>,
    pub studio: Option<String>,
}

/// Defaulted section-banner fields.
#[derive(Clone, Debug, PartialEq)]
pub struct BannerFields {
    pub title: String,
    pub background: String,
    pub fallback_color: Option<Rgba8>,
    pub duotone: Option<Duotone>,
}

/// Chosen layout plus its fully defaulted field set.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedTemplate {
    DetailCard(DetailCardFields),
    SectionBanner(BannerFields),
}

/// Trimmed value with unprintable characters removed; `None` when nothing is left.
fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| strip_unprintable(&s).trim().to_owned())
        .filter(|s| !s.is_empty())
}

impl ResolvedTemplate {
    /// Validate `req` and replace missing optional fields with variant defaults.
    pub fn from_request(req: SceneRequest) -> OgResult<Self> {
        req.validate()?;
        Ok(match req {
            SceneRequest::DetailCard(card) => Self::DetailCard(detail_fields(card)),
            SceneRequest::SectionBanner(banner) => Self::SectionBanner(banner_fields(banner)),
        })
    }

    pub fn kind(&self) -> TemplateKind {
        match self {
            Self::DetailCard(_) => TemplateKind::DetailCard,
            Self::SectionBanner(_) => TemplateKind::SectionBanner,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.kind().canvas()
    }

    pub fn title(&self) -> &str {
        match self {
            Self::DetailCard(f) => &f.title,
            Self::SectionBanner(f) => &f.title,
        }
    }
}

fn detail_fields(card: DetailCard) -> DetailCardFields {
    let title = non_blank(Some(card.title)).unwrap_or_else(|| UNTITLED.to_owned());
    let genres = card
        .genres
        .into_iter()
        .map(|g| strip_unprintable(&g).trim().to_owned())
        .filter(|g| !g.is_empty())
        .take(MAX_GENRES)
        .collect();

    let year = card.release_year.map(|y| y.to_string());
    let meta = match card.media {
        MediaKind::Movie => meta_line([year, card.runtime_minutes.and_then(format_runtime)]),
        MediaKind::Tv => meta_line([
            year,
            card.season_count.and_then(format_seasons),
            card.episode_count.and_then(format_episodes),
        ]),
    };

    DetailCardFields {
        media: card.media,
        title,
        poster: non_blank(card.poster),
        backdrop: non_blank(card.backdrop),
        rating: card.rating.and_then(format_rating),
        genres,
        meta_line: meta,
        studio: non_blank(card.studio),
    }
}

fn banner_fields(banner: SectionBanner) -> BannerFields {
    let default = default_section();
    BannerFields {
        title: non_blank(Some(banner.title)).unwrap_or_else(|| default.title.to_owned()),
        background: non_blank(Some(banner.background))
            .unwrap_or_else(|| default.background.to_owned()),
        fallback_color: banner.fallback_color,
        duotone: banner.duotone,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/resolved.rs"]
mod tests;
