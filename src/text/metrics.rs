/// Text measurement capability used by the layout engine.
///
/// Measurement is kept behind a trait so layout can be exercised without a rasterizer or any
/// font files.
pub trait FontMetrics: Send + Sync {
    /// Advance width of `text` set at `font_size` pixels.
    fn measure(&self, text: &str, font_size: f64) -> f64;
}

/// Advance widths of a bold grotesque sans in 1/1000 em, for ASCII `0x20..=0x7e`.
const ASCII_ADVANCES: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a..m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n..z
    389, 280, 389, 584, // {..~
];

const ELLIPSIS_ADVANCE: u16 = 1000;
const WIDE_ADVANCE: u16 = 1000;
const FALLBACK_ADVANCE: u16 = 667;

/// Fixed-table metrics; no font loading.
///
/// Widths are em-relative and scale linearly with the font size. Characters outside the table
/// use a conservative fallback so measured widths err on the wide side of real glyphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticMetrics;

impl StaticMetrics {
    fn advance_milli_em(ch: char) -> u16 {
        match ch {
            ' '..='~' => ASCII_ADVANCES[(ch as usize) - 0x20],
            '\u{2026}' => ELLIPSIS_ADVANCE,
            '\u{2022}' => 350,
            '\u{1100}'..='\u{115f}'
            | '\u{2e80}'..='\u{a4cf}'
            | '\u{ac00}'..='\u{d7a3}'
            | '\u{f900}'..='\u{faff}'
            | '\u{ff00}'..='\u{ff60}' => WIDE_ADVANCE,
            c if c.is_control() => 0,
            _ => FALLBACK_ADVANCE,
        }
    }
}

impl FontMetrics for StaticMetrics {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        let milli: u64 = text
            .chars()
            .map(|c| u64::from(Self::advance_milli_em(c)))
            .sum();
        (milli as f64) * font_size / 1000.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
