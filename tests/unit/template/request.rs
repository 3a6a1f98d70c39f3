use super::*;

fn pairs(kv: &[(&str, &str)]) -> Vec<(String, String)> {
    kv.iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn media_pair_parses() {
    let key = RequestKey::parse(&pairs(&[("m", "603"), ("mt", "movie")])).unwrap();
    assert_eq!(
        key,
        RequestKey::Media {
            id: 603,
            kind: MediaKind::Movie
        }
    );
}

#[test]
fn section_key_parses() {
    let key = RequestKey::parse(&pairs(&[("it", "movies")])).unwrap();
    assert_eq!(key, RequestKey::Section("movies".to_owned()));
}

#[test]
fn both_or_neither_is_invalid() {
    for kv in [
        vec![],
        vec![("m", "603"), ("mt", "movie"), ("it", "home")],
        vec![("m", "603"), ("it", "home")],
        vec![("m", "603")],
        vec![("mt", "tv")],
        vec![("m", ""), ("mt", ""), ("it", "")],
    ] {
        let err = RequestKey::parse(&pairs(&kv)).unwrap_err();
        assert!(matches!(err, OgError::InvalidRequest(_)), "{kv:?}");
    }
}

#[test]
fn empty_values_count_as_absent() {
    let key = RequestKey::parse(&pairs(&[("m", ""), ("mt", ""), ("it", "home")])).unwrap();
    assert_eq!(key, RequestKey::Section("home".to_owned()));
}

#[test]
fn bad_id_or_type_is_invalid() {
    for kv in [
        vec![("m", "abc"), ("mt", "movie")],
        vec![("m", "0"), ("mt", "movie")],
        vec![("m", "-4"), ("mt", "tv")],
        vec![("m", "603"), ("mt", "book")],
    ] {
        assert!(matches!(
            RequestKey::parse(&pairs(&kv)),
            Err(OgError::InvalidRequest(_))
        ));
    }
}

#[test]
fn json_request_rejects_mixed_variant_fields() {
    let mixed = br#"{"kind":"detail_card","media":"movie","title":"X","background":"bg.jpg"}"#;
    assert!(matches!(
        SceneRequest::from_json(mixed),
        Err(OgError::InvalidRequest(_))
    ));

    let banner = br##"{"kind":"section_banner","title":"NEXUS","background":"bg.jpg","fallback_color":"#000000"}"##;
    let req = SceneRequest::from_json(banner).unwrap();
    assert!(matches!(req, SceneRequest::SectionBanner(_)));
}

#[test]
fn validate_rejects_foreign_media_fields() {
    let movie_with_seasons = br#"{"kind":"detail_card","media":"movie","title":"X","season_count":2}"#;
    assert!(SceneRequest::from_json(movie_with_seasons).is_err());

    let show_with_runtime = br#"{"kind":"detail_card","media":"tv","title":"X","runtime_minutes":50}"#;
    assert!(SceneRequest::from_json(show_with_runtime).is_err());

    let show = br#"{"kind":"detail_card","media":"tv","title":"X","season_count":2,"episode_count":20}"#;
    assert!(SceneRequest::from_json(show).is_ok());
}
