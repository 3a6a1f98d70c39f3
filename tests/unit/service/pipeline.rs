use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::{StatusCode, header};

use super::*;
use crate::foundation::error::OgError;
use crate::metadata::detail::{MediaDetail, MediaKind, MovieDetail};
use crate::render::images::MemoryImageLoader;

struct CountingSource {
    calls: AtomicUsize,
}

impl MetadataSource for CountingSource {
    async fn detail(&self, _id: u64, _kind: MediaKind) -> OgResult<MediaDetail> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(MediaDetail::Movie(MovieDetail {
            title: "The Matrix".to_owned(),
            poster_path: Some("/p.png".to_owned()),
            vote_average: Some(8.2),
            release_date: Some("1999-03-31".to_owned()),
            ..MovieDetail::default()
        }))
    }
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([90, 30, 160, 255]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn service(loader: MemoryImageLoader) -> OgService<CountingSource, MemoryImageLoader> {
    let source = CountingSource {
        calls: AtomicUsize::new(0),
    };
    let rasterizer = Rasterizer::with_fontdb(Arc::new(usvg::fontdb::Database::new()));
    OgService::new(source, loader, rasterizer)
        .with_image_resolver(ImageResolver::new("https://img.test"))
        .with_fetch_timeout(Duration::from_millis(500))
}

fn q(kv: &[(&str, &str)]) -> Vec<(String, String)> {
    kv.iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[tokio::test]
async fn detail_card_renders_with_one_fetch() {
    let loader = MemoryImageLoader::new().with("https://img.test/w342/p.png", png(500, 750));
    let svc = service(loader);

    let out = svc.render(&q(&[("m", "603"), ("mt", "movie")])).await.unwrap();
    assert_eq!((out.width(), out.height()), (1200, 630));
    assert_eq!(svc.metadata().calls.load(Ordering::SeqCst), 1);

    let again = svc.render(&q(&[("m", "603"), ("mt", "movie")])).await.unwrap();
    assert_eq!(out, again);
}

#[tokio::test]
async fn home_banner_without_artwork_is_a_render_failure() {
    let svc = service(MemoryImageLoader::new());
    let err = svc.render(&q(&[("it", "home")])).await.unwrap_err();
    assert!(matches!(err, OgError::Render(_)));
    assert_eq!(svc.metadata().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn duotone_banner_degrades_to_its_fallback_fill() {
    let svc = service(MemoryImageLoader::new());
    let out = svc.render(&q(&[("it", "movies")])).await.unwrap();
    assert_eq!((out.width(), out.height()), (1200, 630));
}

#[tokio::test]
async fn respond_sets_success_and_error_headers() {
    let svc = service(MemoryImageLoader::new());

    let ok = svc.respond(&q(&[("it", "anime")])).await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(ok.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(
        ok.headers()[header::CACHE_CONTROL],
        "public, max-age=31536000, immutable"
    );

    let bad = svc.respond(&q(&[])).await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    assert_eq!(bad.headers()[header::CACHE_CONTROL], "no-store");
}

/// Delegates to [`StaticMetrics`] and counts calls.
#[derive(Default)]
struct CountingMetrics {
    calls: AtomicUsize,
}

impl FontMetrics for CountingMetrics {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StaticMetrics.measure(text, font_size)
    }
}

#[tokio::test]
async fn custom_metrics_drive_layout() {
    let metrics = Arc::new(CountingMetrics::default());
    let svc = service(MemoryImageLoader::new()).with_metrics(metrics.clone());

    let out = svc.render(&q(&[("it", "people")])).await.unwrap();
    assert_eq!((out.width(), out.height()), (1200, 630));
    assert!(metrics.calls.load(Ordering::SeqCst) > 0);
}
