use crate::foundation::core::Rgba8;
use crate::template::request::{Duotone, SectionBanner};

/// One row of the section-banner table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub background: &'static str,
    pub fallback_color: Option<Rgba8>,
    pub duotone: Option<Duotone>,
}

impl SectionEntry {
    /// Banner request for this section.
    pub fn to_banner(&self) -> SectionBanner {
        SectionBanner {
            title: self.title.to_owned(),
            background: self.background.to_owned(),
            fallback_color: self.fallback_color,
            duotone: self.duotone,
        }
    }
}

const PURPLE: Duotone = Duotone {
    shadow: Rgba8::rgb(0x19, 0x02, 0x35),
    highlight: Rgba8::rgb(0xad, 0x47, 0xdd),
};

const BLUE: Duotone = Duotone {
    shadow: Rgba8::rgb(0x00, 0x19, 0x2f),
    highlight: Rgba8::rgb(0x00, 0xba, 0xff),
};

/// Key of the entry used for unknown or missing section keys.
pub const DEFAULT_SECTION_KEY: &str = "home";

/// Known sections. The default entry has no fallback fill: its background is mandatory.
pub static SECTIONS: [SectionEntry; 6] = [
    SectionEntry {
        key: "home",
        title: "NEXUS",
        background: "https://raw.githubusercontent.com/Khanhtran47/AnimeNexus/master/app/assets/images/background-default.jpg",
        fallback_color: None,
        duotone: None,
    },
    SectionEntry {
        key: "movies",
        title: "NEXUS Movies",
        background: "https://image.tmdb.org/t/p/w1280_filter(duotone,190235,ad47dd)/lXhgCODAbBXL5buk9yEmTpOoOgR.jpg",
        fallback_color: Some(PURPLE.shadow),
        duotone: Some(PURPLE),
    },
    SectionEntry {
        key: "tvshows",
        title: "NEXUS TV Shows",
        background: "https://image.tmdb.org/t/p/w1280_filter(duotone,00192f,00baff)/etj8E2o0Bud0HkONVQPjyCkIvpv.jpg",
        fallback_color: Some(BLUE.shadow),
        duotone: Some(BLUE),
    },
    SectionEntry {
        key: "people",
        title: "NEXUS People",
        background: "https://image.tmdb.org/t/p/w1280_filter(duotone,190235,ad47dd)/uDgy6hyPd82kOHh6I95FLtLnj6p.jpg",
        fallback_color: Some(PURPLE.shadow),
        duotone: Some(PURPLE),
    },
    SectionEntry {
        key: "anime",
        title: "NEXUS Anime",
        background: "https://image.tmdb.org/t/p/w1280_filter(duotone,00192f,00baff)/rqbCbjB19amtOtFQbb3K2lgm2zv.jpg",
        fallback_color: Some(BLUE.shadow),
        duotone: Some(BLUE),
    },
    SectionEntry {
        key: "search",
        title: "NEXUS Search",
        background: "https://image.tmdb.org/t/p/w1280_filter(duotone,00192f,00baff)/Vq4L8A88fNQxBqM27xHtDi4DrL.jpg",
        fallback_color: Some(BLUE.shadow),
        duotone: Some(BLUE),
    },
];

/// Entry for `key`, or the default entry when the key is unknown or absent.
pub fn lookup_section(key: Option<&str>) -> &'static SectionEntry {
    let key = key.unwrap_or(DEFAULT_SECTION_KEY);
    SECTIONS
        .iter()
        .find(|e| e.key == key)
        .unwrap_or_else(default_section)
}

/// The designated default entry.
pub fn default_section() -> &'static SectionEntry {
    &SECTIONS[0]
}

#[cfg(test)]
#[path = "../../tests/unit/template/sections.rs"]
mod tests;
