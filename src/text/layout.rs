use crate::foundation::core::Rect;
use crate::text::metrics::FontMetrics;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Marker appended to a line that was cut to fit.
pub const ELLIPSIS: &str = "\u{2026}";

/// Immutable text region: rectangle, font size and maximum line count.
///
/// Layout only decides how text is broken and clipped inside the box; it never moves or resizes
/// the rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBox {
    rect: Rect,
    font_size: f64,
    max_lines: usize,
}

impl LayoutBox {
    /// Create a box at `(x, y)` with the given size.
    pub fn new(x: f64, y: f64, width: f64, height: f64, font_size: f64, max_lines: usize) -> Self {
        Self {
            rect: Rect::new(x, y, x + width.max(0.0), y + height.max(0.0)),
            font_size,
            max_lines,
        }
    }

    /// Box sized to hold exactly `max_lines` lines at `font_size`.
    pub fn for_lines(x: f64, y: f64, width: f64, font_size: f64, max_lines: usize) -> Self {
        let height = font_size * LINE_HEIGHT_FACTOR * (max_lines as f64);
        Self::new(x, y, width, height, font_size, max_lines)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn line_height(&self) -> f64 {
        self.font_size * LINE_HEIGHT_FACTOR
    }

    /// Lines that fit both the line budget and the box height.
    pub fn line_capacity(&self) -> usize {
        let lh = self.line_height();
        if lh <= 0.0 || !lh.is_finite() {
            return 0;
        }
        let by_height = (self.rect.height() / lh + 1e-9).floor();
        let by_height = if by_height.is_finite() && by_height > 0.0 {
            by_height as usize
        } else {
            0
        };
        self.max_lines.min(by_height)
    }
}

/// One wrapped line and its measured width.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f64,
}

/// Result of laying out a string inside a [`LayoutBox`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextRun {
    lines: Vec<TextLine>,
    truncated: bool,
}

impl TextRun {
    /// Wrapped lines in reading order.
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// `true` when content was cut; the last line then ends with [`ELLIPSIS`].
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Widest line width.
    pub fn max_width(&self) -> f64 {
        self.lines.iter().map(|l| l.width).fold(0.0, f64::max)
    }

    /// Concatenated text of all lines (space separated).
    pub fn joined(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lay out `text` inside `bx` with greedy word wrapping.
///
/// Words are appended to the current line while it still fits the box width. A word wider than
/// the box is broken at character boundaries. When more lines are produced than the box can
/// hold, the last kept line is shortened and suffixed with [`ELLIPSIS`] so its measured width
/// stays within the box.
///
/// A box with no line capacity yields an empty, untruncated run. A single glyph wider than the
/// box still gets its own line, so that line is the one case that can exceed the box width.
pub fn layout(text: &str, bx: &LayoutBox, metrics: &dyn FontMetrics) -> TextRun {
    let capacity = bx.line_capacity();
    if capacity == 0 {
        return TextRun::default();
    }
    let size = bx.font_size();
    let max_w = bx.width();
    let measure = |s: &str| metrics.measure(s, size);

    let mut raw = Vec::<String>::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate) <= max_w {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            raw.push(std::mem::take(&mut current));
        }
        current = word.to_owned();
        while measure(&current) > max_w {
            let (head, tail) = split_to_fit(&current, max_w, &measure);
            raw.push(head);
            current = tail;
        }
    }
    if !current.is_empty() {
        raw.push(current);
    }

    let truncated = raw.len() > capacity;
    if truncated {
        raw.truncate(capacity);
        if let Some(last) = raw.last_mut() {
            *last = ellipsize(last, max_w, &measure);
        }
    }

    let lines = raw
        .into_iter()
        .map(|text| {
            let width = measure(&text);
            TextLine { text, width }
        })
        .collect();
    TextRun { lines, truncated }
}

/// Split `word` into the longest prefix that fits `max_w` (at least one char) and the rest.
fn split_to_fit(word: &str, max_w: f64, measure: &dyn Fn(&str) -> f64) -> (String, String) {
    let mut end = 0;
    for (idx, ch) in word.char_indices() {
        let next = idx + ch.len_utf8();
        if end > 0 && measure(&word[..next]) > max_w {
            break;
        }
        end = next;
    }
    (word[..end].to_owned(), word[end..].to_owned())
}

/// Shorten `line` until `line + …` fits `max_w`.
fn ellipsize(line: &str, max_w: f64, measure: &dyn Fn(&str) -> f64) -> String {
    let mut base = line.trim_end().to_owned();
    loop {
        let candidate = format!("{base}{ELLIPSIS}");
        if measure(&candidate) <= max_w {
            return candidate;
        }
        if base.pop().is_none() {
            // Not even the marker fits; an empty line keeps the width bound.
            return String::new();
        }
        let trimmed = base.trim_end().len();
        base.truncate(trimmed);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
