use crate::foundation::core::{Point, Rect, Rgba8};
use crate::scene::model::{
    BadgeNode, GradientStop, ImageNode, Layer, Paint, SceneDocument, SceneNode, TextAnchor,
    TextNode,
};
use crate::template::resolved::{BannerFields, DetailCardFields, ResolvedTemplate};
use crate::text::layout::{LINE_HEIGHT_FACTOR, LayoutBox, TextRun, layout};
use crate::text::metrics::FontMetrics;

const MARGIN: f64 = 60.0;
const BACKGROUND: Rgba8 = Rgba8::rgb(0x0b, 0x0b, 0x14);
const WHITE: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);

// Detail card geometry.
const POSTER_W: f64 = 340.0;
const POSTER_H: f64 = 510.0;
const POSTER_RADIUS: f64 = 16.0;
const COLUMN_GAP: f64 = 40.0;

const TITLE_TOP: f64 = 136.0;
const TITLE_SIZE: f64 = 56.0;
const TITLE_LINES: usize = 3;
const META_SIZE: f64 = 28.0;
const META_FILL: Rgba8 = Rgba8::rgb(0xd4, 0xd4, 0xd8);

const GENRE_SIZE: f64 = 22.0;
const GENRE_HEIGHT: f64 = 44.0;
const GENRE_PAD_X: f64 = 20.0;
const GENRE_GAP: f64 = 12.0;

const RATING_W: f64 = 132.0;
const RATING_H: f64 = 56.0;
const RATING_SIZE: f64 = 30.0;
const RATING_FILL: Rgba8 = Rgba8::rgb(0xf5, 0xc5, 0x18);

const STUDIO_TOP: f64 = 526.0;
const STUDIO_SIZE: f64 = 26.0;
const STUDIO_FILL: Rgba8 = Rgba8::rgb(0xa1, 0xa1, 0xaa);

// Section banner geometry.
const BANNER_TITLE_SIZE: f64 = 96.0;
const BANNER_TITLE_LINES: usize = 2;
const BANNER_SIDE: f64 = 100.0;

/// Build the scene for `template`.
///
/// Nodes are pushed strictly back to front: background fill and image, legibility overlay,
/// artwork, then text and badges. Absent optional data produces no node at all.
#[tracing::instrument(skip_all, fields(kind = template.kind().as_str()))]
pub fn compose(template: &ResolvedTemplate, metrics: &dyn FontMetrics) -> SceneDocument {
    let mut doc = SceneDocument::new(template.canvas());
    match template {
        ResolvedTemplate::DetailCard(fields) => compose_detail(&mut doc, fields, metrics),
        ResolvedTemplate::SectionBanner(fields) => compose_banner(&mut doc, fields, metrics),
    }
    tracing::debug!(nodes = doc.len(), "scene composed");
    doc
}

fn text_node(
    run: TextRun,
    origin: Point,
    bx: &LayoutBox,
    weight: u16,
    fill: Rgba8,
    anchor: TextAnchor,
) -> SceneNode {
    SceneNode::Text(TextNode {
        run,
        origin,
        font_size: bx.font_size(),
        line_height: bx.line_height(),
        weight,
        fill,
        anchor,
    })
}

fn compose_detail(doc: &mut SceneDocument, f: &DetailCardFields, metrics: &dyn FontMetrics) {
    let canvas = doc.canvas();
    let bleed = canvas.rect();
    let right = f64::from(canvas.width) - MARGIN;

    doc.push(
        Layer::Background,
        SceneNode::Fill {
            rect: bleed,
            paint: Paint::Solid(BACKGROUND),
        },
    );
    if let Some(backdrop) = &f.backdrop {
        doc.push(
            Layer::Background,
            SceneNode::Image(ImageNode {
                href: backdrop.clone(),
                rect: bleed,
                corner_radius: 0.0,
                required: false,
            }),
        );
        doc.push(
            Layer::Overlay,
            SceneNode::Fill {
                rect: bleed,
                paint: Paint::Linear {
                    from: Point::new(0.0, 0.0),
                    to: Point::new(1.0, 0.0),
                    stops: vec![
                        GradientStop {
                            offset: 0.0,
                            color: BACKGROUND.with_alpha(0xf2),
                        },
                        GradientStop {
                            offset: 0.45,
                            color: BACKGROUND.with_alpha(0xcc),
                        },
                        GradientStop {
                            offset: 1.0,
                            color: BACKGROUND.with_alpha(0x66),
                        },
                    ],
                },
            },
        );
    }

    let column_x = match &f.poster {
        Some(poster) => {
            let rect = Rect::new(MARGIN, MARGIN, MARGIN + POSTER_W, MARGIN + POSTER_H);
            doc.push(
                Layer::Artwork,
                SceneNode::Image(ImageNode {
                    href: poster.clone(),
                    rect,
                    corner_radius: POSTER_RADIUS,
                    required: false,
                }),
            );
            rect.x1 + COLUMN_GAP
        }
        None => MARGIN,
    };
    let column_w = right - column_x;

    let mut cursor = TITLE_TOP;
    let title_box = LayoutBox::for_lines(column_x, cursor, column_w, TITLE_SIZE, TITLE_LINES);
    let title = layout(&f.title, &title_box, metrics);
    if !title.is_empty() {
        cursor += title.lines().len() as f64 * title_box.line_height() + 20.0;
        let origin = title_box.rect().origin();
        doc.push(
            Layer::Text,
            text_node(title, origin, &title_box, 700, WHITE, TextAnchor::Start),
        );
    }

    if let Some(meta) = &f.meta_line {
        let meta_box = LayoutBox::for_lines(column_x, cursor, column_w, META_SIZE, 1);
        let run = layout(meta, &meta_box, metrics);
        if !run.is_empty() {
            cursor += meta_box.line_height() + 24.0;
            let origin = meta_box.rect().origin();
            doc.push(
                Layer::Text,
                text_node(run, origin, &meta_box, 500, META_FILL, TextAnchor::Start),
            );
        }
    }

    push_genre_pills(doc, &f.genres, column_x, right, cursor, metrics);

    if let Some(rating) = &f.rating {
        doc.push(
            Layer::Text,
            SceneNode::Badge(BadgeNode {
                rect: Rect::new(right - RATING_W, MARGIN, right, MARGIN + RATING_H),
                radius: RATING_H / 2.0,
                fill: RATING_FILL,
                stroke: None,
                label: rating.clone(),
                font_size: RATING_SIZE,
                weight: 800,
                text_fill: Rgba8::rgb(0, 0, 0),
            }),
        );
    }

    if let Some(studio) = &f.studio {
        let studio_box = LayoutBox::for_lines(column_x, STUDIO_TOP, column_w, STUDIO_SIZE, 1);
        let run = layout(studio, &studio_box, metrics);
        if !run.is_empty() {
            let origin = studio_box.rect().origin();
            doc.push(
                Layer::Text,
                text_node(run, origin, &studio_box, 500, STUDIO_FILL, TextAnchor::Start),
            );
        }
    }
}

/// Lay genre pills out left to right, stopping before one would cross `right`.
fn push_genre_pills(
    doc: &mut SceneDocument,
    genres: &[String],
    left: f64,
    right: f64,
    top: f64,
    metrics: &dyn FontMetrics,
) {
    let mut x = left;
    for genre in genres {
        let label_box = LayoutBox::for_lines(
            0.0,
            0.0,
            (right - x - 2.0 * GENRE_PAD_X).max(0.0),
            GENRE_SIZE,
            1,
        );
        let run = layout(genre, &label_box, metrics);
        let Some(line) = run.lines().first().filter(|l| !l.text.is_empty()) else {
            break;
        };
        let pill_w = line.width + 2.0 * GENRE_PAD_X;
        if x + pill_w > right {
            break;
        }
        doc.push(
            Layer::Text,
            SceneNode::Badge(BadgeNode {
                rect: Rect::new(x, top, x + pill_w, top + GENRE_HEIGHT),
                radius: GENRE_HEIGHT / 2.0,
                fill: WHITE.with_alpha(0x26),
                stroke: Some(WHITE.with_alpha(0x59)),
                label: line.text.clone(),
                font_size: GENRE_SIZE,
                weight: 600,
                text_fill: WHITE,
            }),
        );
        x += pill_w + GENRE_GAP;
    }
}

fn compose_banner(doc: &mut SceneDocument, f: &BannerFields, metrics: &dyn FontMetrics) {
    let canvas = doc.canvas();
    let bleed = canvas.rect();

    if let Some(color) = f.fallback_color {
        doc.push(
            Layer::Background,
            SceneNode::Fill {
                rect: bleed,
                paint: Paint::Solid(color),
            },
        );
    }
    doc.push(
        Layer::Background,
        SceneNode::Image(ImageNode {
            href: f.background.clone(),
            rect: bleed,
            corner_radius: 0.0,
            required: f.fallback_color.is_none(),
        }),
    );

    let (from, to, stops) = match f.duotone {
        Some(d) => (
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            vec![
                GradientStop {
                    offset: 0.0,
                    color: d.shadow.with_alpha(0xb3),
                },
                GradientStop {
                    offset: 1.0,
                    color: d.highlight.with_alpha(0x59),
                },
            ],
        ),
        None => (
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            vec![
                GradientStop {
                    offset: 0.0,
                    color: Rgba8::rgb(0, 0, 0).with_alpha(0x33),
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgba8::rgb(0, 0, 0).with_alpha(0x99),
                },
            ],
        ),
    };
    doc.push(
        Layer::Overlay,
        SceneNode::Fill {
            rect: bleed,
            paint: Paint::Linear { from, to, stops },
        },
    );

    let width = f64::from(canvas.width) - 2.0 * BANNER_SIDE;
    let block_h = BANNER_TITLE_SIZE * LINE_HEIGHT_FACTOR * BANNER_TITLE_LINES as f64;
    let top = (f64::from(canvas.height) - block_h) / 2.0;
    let title_box = LayoutBox::for_lines(
        BANNER_SIDE,
        top,
        width,
        BANNER_TITLE_SIZE,
        BANNER_TITLE_LINES,
    );
    let run = layout(&f.title, &title_box, metrics);
    if run.is_empty() {
        return;
    }
    let used = run.lines().len() as f64 * title_box.line_height();
    let rect = title_box.rect();
    let origin = Point::new(rect.center().x, rect.y0 + (rect.height() - used) / 2.0);
    doc.push(
        Layer::Text,
        text_node(run, origin, &title_box, 800, WHITE, TextAnchor::Middle),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
