use super::*;

#[test]
fn known_keys_resolve_to_their_entry() {
    assert_eq!(lookup_section(Some("movies")).title, "NEXUS Movies");
    assert_eq!(lookup_section(Some("tvshows")).title, "NEXUS TV Shows");
    assert_eq!(lookup_section(Some("search")).title, "NEXUS Search");
}

#[test]
fn unknown_and_missing_keys_fall_back_to_default() {
    assert_eq!(lookup_section(Some("bogus")), default_section());
    assert_eq!(lookup_section(None), default_section());
    assert_eq!(default_section().key, DEFAULT_SECTION_KEY);
    assert_eq!(default_section().title, "NEXUS");
}

#[test]
fn keys_are_unique() {
    for (i, a) in SECTIONS.iter().enumerate() {
        for b in &SECTIONS[i + 1..] {
            assert_ne!(a.key, b.key);
        }
    }
}

#[test]
fn duotone_sections_carry_a_fallback_fill() {
    for e in &SECTIONS {
        if let Some(d) = e.duotone {
            assert_eq!(e.fallback_color, Some(d.shadow), "{}", e.key);
        }
    }
}
