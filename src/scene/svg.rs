use std::fmt::Write as _;

use crate::foundation::core::{Rect, Rgba8};
use crate::scene::model::{
    BadgeNode, ImageNode, Paint, SceneDocument, SceneNode, TextAnchor, TextNode,
};
use crate::text::format::is_xml_char;

/// Font stack written on every text element.
pub const FONT_FAMILY: &str = "Inter, 'Helvetica Neue', Helvetica, Arial, sans-serif";

/// Cap height as a fraction of the font size, used to center glyphs in their line box.
const CAP_HEIGHT: f64 = 0.7;

impl SceneDocument {
    /// Serialize the scene; image nodes reference their original `href`.
    pub fn to_svg(&self) -> String {
        write_svg(self, &|_, img| Some(img.href.clone()))
    }
}

/// Serialize `doc`, mapping each image node (by node index) to the href actually written.
///
/// Returning `None` from `href_for` omits that image node; every other node is written in
/// paint order.
pub(crate) fn write_svg(
    doc: &SceneDocument,
    href_for: &dyn Fn(usize, &ImageNode) -> Option<String>,
) -> String {
    let canvas = doc.canvas();
    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    );

    for (idx, item) in doc.nodes().iter().enumerate() {
        match &item.node {
            SceneNode::Fill { rect, paint } => write_fill(&mut out, idx, *rect, paint),
            SceneNode::Image(img) => {
                if let Some(href) = href_for(idx, img) {
                    write_image(&mut out, idx, img, &href);
                }
            }
            SceneNode::Text(text) => write_text(&mut out, text),
            SceneNode::Badge(badge) => write_badge(&mut out, badge),
        }
    }

    out.push_str("</svg>");
    out
}

fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

fn rect_attrs(rect: Rect) -> String {
    format!(
        r#"x="{}" y="{}" width="{}" height="{}""#,
        num(rect.x0),
        num(rect.y0),
        num(rect.width()),
        num(rect.height())
    )
}

fn paint_attrs(attr: &str, c: Rgba8) -> String {
    if c.a == 255 {
        format!(r#"{attr}="{}""#, c.to_hex_rgb())
    } else {
        format!(
            r#"{attr}="{}" {attr}-opacity="{}""#,
            c.to_hex_rgb(),
            num(c.opacity())
        )
    }
}

fn write_fill(out: &mut String, idx: usize, rect: Rect, paint: &Paint) {
    match paint {
        Paint::Solid(c) => {
            let _ = write!(out, "<rect {} {}/>", rect_attrs(rect), paint_attrs("fill", *c));
        }
        Paint::Linear { from, to, stops } => {
            let id = format!("g{idx}");
            let _ = write!(
                out,
                r#"<defs><linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y)
            );
            for stop in stops {
                let _ = write!(
                    out,
                    r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                    num(stop.offset.clamp(0.0, 1.0)),
                    stop.color.to_hex_rgb(),
                    num(stop.color.opacity())
                );
            }
            let _ = write!(
                out,
                r#"</linearGradient></defs><rect {} fill="url(#{id})"/>"#,
                rect_attrs(rect)
            );
        }
    }
}

fn write_image(out: &mut String, idx: usize, img: &ImageNode, href: &str) {
    let clip = if img.corner_radius > 0.0 {
        let id = format!("c{idx}");
        let r = num(img.corner_radius);
        let _ = write!(
            out,
            r#"<defs><clipPath id="{id}"><rect {} rx="{r}" ry="{r}"/></clipPath></defs>"#,
            rect_attrs(img.rect)
        );
        format!(r#" clip-path="url(#{id})""#)
    } else {
        String::new()
    };
    let _ = write!(
        out,
        r#"<image {} preserveAspectRatio="xMidYMid slice" href="{}"{clip}/>"#,
        rect_attrs(img.rect),
        escape(href)
    );
}

fn write_text(out: &mut String, text: &TextNode) {
    if text.run.is_empty() {
        return;
    }
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
    };
    let _ = write!(
        out,
        r#"<text font-family="{}" font-size="{}" font-weight="{}" text-anchor="{anchor}" {}>"#,
        FONT_FAMILY,
        num(text.font_size),
        text.weight,
        paint_attrs("fill", text.fill)
    );
    for (i, line) in text.run.lines().iter().enumerate() {
        let top = text.origin.y + (i as f64) * text.line_height;
        let baseline = top + (text.line_height + CAP_HEIGHT * text.font_size) / 2.0;
        let _ = write!(
            out,
            r#"<tspan x="{}" y="{}">{}</tspan>"#,
            num(text.origin.x),
            num(baseline),
            escape(&line.text)
        );
    }
    out.push_str("</text>");
}

fn write_badge(out: &mut String, badge: &BadgeNode) {
    let r = num(badge.radius);
    let stroke = badge
        .stroke
        .map(|c| format!(r#" {} stroke-width="2""#, paint_attrs("stroke", c)))
        .unwrap_or_default();
    let _ = write!(
        out,
        r#"<rect {} rx="{r}" ry="{r}" {}{stroke}/>"#,
        rect_attrs(badge.rect),
        paint_attrs("fill", badge.fill)
    );

    let center = badge.rect.center();
    let baseline = center.y + CAP_HEIGHT * badge.font_size / 2.0;
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="middle" {}>{}</text>"#,
        num(center.x),
        num(baseline),
        FONT_FAMILY,
        num(badge.font_size),
        badge.weight,
        paint_attrs("fill", badge.text_fill),
        escape(&badge.label)
    );
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
