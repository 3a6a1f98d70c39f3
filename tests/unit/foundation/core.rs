use super::*;

#[test]
fn open_graph_canvas_rect_matches_size() {
    let r = Canvas::OPEN_GRAPH.rect();
    assert_eq!(r.width(), 1200.0);
    assert_eq!(r.height(), 630.0);
    assert_eq!(r.origin(), Point::ZERO);
}

#[test]
fn hex_parse_rgb_and_rgba() {
    assert_eq!(Rgba8::from_hex("#190235").unwrap(), Rgba8::rgb(0x19, 0x02, 0x35));
    assert_eq!(
        Rgba8::from_hex("00BAFF80").unwrap(),
        Rgba8::rgb(0x00, 0xba, 0xff).with_alpha(0x80)
    );
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zz0000").is_err());
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_str("\"#ad47dd\"").unwrap();
    assert_eq!(c, Rgba8::rgb(0xad, 0x47, 0xdd));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ad47dd\"");

    let translucent = c.with_alpha(0x40);
    assert_eq!(
        serde_json::to_string(&translucent).unwrap(),
        "\"#ad47dd40\""
    );
}
