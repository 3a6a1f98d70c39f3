use clap::Parser;

use super::*;

#[derive(Parser, Debug)]
struct Harness {
    #[command(flatten)]
    config: ServiceConfig,
}

#[test]
fn defaults_match_parsed_empty_command_line() {
    let parsed = Harness::try_parse_from(["nexus-og"]).unwrap();
    // Environment overrides would make this comparison meaningless.
    if std::env::vars().any(|(k, _)| k.starts_with("NEXUS_OG_") || k.starts_with("TMDB_")) {
        return;
    }
    assert_eq!(parsed.config, ServiceConfig::default());
    assert_eq!(parsed.config.fetch_timeout(), Duration::from_secs(3));
}

#[test]
fn flags_override_defaults() {
    let parsed = Harness::try_parse_from([
        "nexus-og",
        "--listen",
        "127.0.0.1:9000",
        "--fetch-timeout-ms",
        "250",
        "--font-dir",
        "/a",
        "--font-dir",
        "/b",
        "--tmdb-api-key",
        "secret",
    ])
    .unwrap();
    let c = parsed.config;
    assert_eq!(c.listen, "127.0.0.1:9000".parse().unwrap());
    assert_eq!(c.fetch_timeout(), Duration::from_millis(250));
    assert_eq!(c.font_dirs, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    assert_eq!(c.tmdb_api_key.as_deref(), Some("secret"));
}

#[test]
fn zero_timeout_is_clamped() {
    let c = ServiceConfig {
        fetch_timeout_ms: 0,
        ..ServiceConfig::default()
    };
    assert_eq!(c.fetch_timeout(), Duration::from_millis(1));
}
