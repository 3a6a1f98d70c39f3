use super::*;
use crate::text::metrics::StaticMetrics;

/// Every char advances `font_size / 2`.
struct Mono;

impl FontMetrics for Mono {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size / 2.0
    }
}

fn mono_box(chars_per_line: usize, max_lines: usize) -> LayoutBox {
    // font 20 -> 10px per char
    LayoutBox::for_lines(0.0, 0.0, chars_per_line as f64 * 10.0, 20.0, max_lines)
}

#[test]
fn empty_and_whitespace_input_yield_empty_run() {
    let bx = mono_box(10, 2);
    for s in ["", "   ", "\n\t"] {
        let run = layout(s, &bx, &Mono);
        assert!(run.is_empty());
        assert!(!run.is_truncated());
    }
}

#[test]
fn greedy_wrap_fills_lines_in_order() {
    let run = layout("aaa bbb ccc ddd", &mono_box(7, 3), &Mono);
    let texts: Vec<_> = run.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["aaa bbb", "ccc ddd"]);
    assert!(!run.is_truncated());
    assert_eq!(run.lines()[0].width, 70.0);
}

#[test]
fn overflow_truncates_with_ellipsis_within_width() {
    let bx = mono_box(7, 2);
    let run = layout("aaa bbb ccc ddd eee fff", &bx, &Mono);
    assert!(run.is_truncated());
    assert_eq!(run.lines().len(), 2);

    let last = run.lines().last().unwrap();
    assert!(last.text.ends_with(ELLIPSIS));
    assert!(last.width <= bx.width());
    assert_eq!(last.text, format!("ccc dd{ELLIPSIS}"));
}

#[test]
fn long_word_is_hard_broken() {
    let run = layout("abcdefghijkl", &mono_box(5, 4), &Mono);
    let texts: Vec<_> = run.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["abcde", "fghij", "kl"]);
}

#[test]
fn capacity_is_bounded_by_box_height() {
    // Room for 3 lines by budget but only 1 by height.
    let bx = LayoutBox::new(0.0, 0.0, 50.0, 30.0, 20.0, 3);
    assert_eq!(bx.line_capacity(), 1);
    let run = layout("aaa bbb ccc", &bx, &Mono);
    assert_eq!(run.lines().len(), 1);
    assert!(run.is_truncated());
}

#[test]
fn layout_never_moves_the_box() {
    let bx = LayoutBox::for_lines(440.0, 130.0, 700.0, 56.0, 3);
    let before = bx.rect();
    let _ = layout("The Lord of the Rings: The Fellowship of the Ring", &bx, &StaticMetrics);
    assert_eq!(bx.rect(), before);
    assert_eq!(bx.rect().x0, 440.0);
    assert_eq!(bx.rect().y0, 130.0);
}

#[test]
fn static_metrics_title_truncation_keeps_width_bound() {
    let bx = LayoutBox::for_lines(0.0, 0.0, 300.0, 56.0, 2);
    let title = "Dr. Strangelove or: How I Learned to Stop Worrying and Love the Bomb";
    let run = layout(title, &bx, &StaticMetrics);
    assert!(run.is_truncated());
    assert_eq!(run.lines().len(), 2);
    for line in run.lines() {
        assert!(line.width <= bx.width(), "{} > {}", line.width, bx.width());
    }
    assert!(run.lines()[1].text.ends_with(ELLIPSIS));
}

#[test]
fn zero_capacity_box_yields_untruncated_empty_run() {
    let no_lines = mono_box(10, 0);
    let too_short = LayoutBox::new(0.0, 0.0, 100.0, 5.0, 20.0, 3);
    for bx in [no_lines, too_short] {
        let run = layout("some words here", &bx, &Mono);
        assert!(run.is_empty());
        assert!(!run.is_truncated());
    }
}

#[test]
fn glyph_wider_than_box_gets_its_own_line() {
    // 10px per char, 5px box: each char is forced onto its own line.
    let bx = LayoutBox::for_lines(0.0, 0.0, 5.0, 20.0, 3);
    let run = layout("ab", &bx, &Mono);
    let texts: Vec<_> = run.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
    assert!(!run.is_truncated());
}
