use super::*;

fn movie_card() -> DetailCard {
    DetailCard {
        media: MediaKind::Movie,
        title: "The Matrix".to_owned(),
        poster: None,
        backdrop: None,
        rating: Some(8.2),
        genres: vec!["Action".to_owned(), "Science Fiction".to_owned()],
        release_year: Some(1999),
        episode_count: None,
        season_count: None,
        runtime_minutes: Some(136),
        studio: None,
    }
}

#[test]
fn movie_fields_are_formatted() {
    let t = ResolvedTemplate::from_request(SceneRequest::DetailCard(movie_card())).unwrap();
    assert_eq!(t.kind(), TemplateKind::DetailCard);
    let ResolvedTemplate::DetailCard(f) = t else {
        panic!("expected detail card");
    };
    assert_eq!(f.title, "The Matrix");
    assert_eq!(f.rating.as_deref(), Some("8.2"));
    assert_eq!(f.meta_line.as_deref(), Some("1999 \u{2022} 136 min"));
    assert_eq!(f.studio, None);
}

#[test]
fn show_meta_line_lists_seasons_then_episodes() {
    let card = DetailCard {
        media: MediaKind::Tv,
        runtime_minutes: None,
        season_count: Some(5),
        episode_count: Some(62),
        release_year: Some(2008),
        ..movie_card()
    };
    let ResolvedTemplate::DetailCard(f) =
        ResolvedTemplate::from_request(SceneRequest::DetailCard(card)).unwrap()
    else {
        panic!("expected detail card");
    };
    assert_eq!(
        f.meta_line.as_deref(),
        Some("2008 \u{2022} 5 seasons \u{2022} 62 episodes")
    );
}

#[test]
fn genres_are_capped_in_order_and_blanks_dropped() {
    let card = DetailCard {
        genres: ["Drama", " ", "Crime", "Thriller", "Mystery", "Action"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect(),
        ..movie_card()
    };
    let ResolvedTemplate::DetailCard(f) =
        ResolvedTemplate::from_request(SceneRequest::DetailCard(card)).unwrap()
    else {
        panic!("expected detail card");
    };
    assert_eq!(f.genres, vec!["Drama", "Crime", "Thriller", "Mystery"]);
}

#[test]
fn blank_optional_fields_are_omitted() {
    let card = DetailCard {
        title: "  ".to_owned(),
        poster: Some(String::new()),
        studio: Some(" ".to_owned()),
        rating: Some(0.0),
        release_year: None,
        runtime_minutes: None,
        ..movie_card()
    };
    let ResolvedTemplate::DetailCard(f) =
        ResolvedTemplate::from_request(SceneRequest::DetailCard(card)).unwrap()
    else {
        panic!("expected detail card");
    };
    assert_eq!(f.title, UNTITLED);
    assert_eq!(f.poster, None);
    assert_eq!(f.studio, None);
    assert_eq!(f.rating, None);
    assert_eq!(f.meta_line, None);
}

#[test]
fn banner_defaults_come_from_default_section() {
    let banner = SectionBanner {
        title: String::new(),
        background: String::new(),
        fallback_color: None,
        duotone: None,
    };
    let t = ResolvedTemplate::from_request(SceneRequest::SectionBanner(banner)).unwrap();
    assert_eq!(t.kind(), TemplateKind::SectionBanner);
    assert_eq!(t.title(), "NEXUS");
    assert_eq!(t.canvas(), Canvas::OPEN_GRAPH);
}

#[test]
fn control_characters_never_reach_the_fields() {
    let card = DetailCard {
        title: "Bad\u{1}Title".to_owned(),
        genres: vec!["Act\u{b}ion".to_owned(), "\u{1f}".to_owned()],
        studio: Some("S\u{1f}tudio".to_owned()),
        ..movie_card()
    };
    let ResolvedTemplate::DetailCard(f) =
        ResolvedTemplate::from_request(SceneRequest::DetailCard(card)).unwrap()
    else {
        panic!("expected detail card");
    };
    assert_eq!(f.title, "BadTitle");
    assert_eq!(f.genres, vec!["Action"]);
    assert_eq!(f.studio.as_deref(), Some("Studio"));
}
