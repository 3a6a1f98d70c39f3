//! Numeric fields are turned into display strings here, before any layout happens.

/// Separator between metadata-line parts.
pub const META_SEPARATOR: &str = " \u{2022} ";

/// Rating with one decimal (`8.2`).
///
/// TMDB reports `0` for titles nobody has voted on yet, so zero, negative and non-finite scores
/// all mean "unrated" and produce no badge.
pub fn format_rating(score: f64) -> Option<String> {
    (score.is_finite() && score > 0.0).then(|| format!("{score:.1}"))
}

/// `true` for characters XML 1.0 can carry: tab, LF, CR and everything from U+0020 except
/// U+FFFE and U+FFFF.
pub fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r') || (ch >= ' ' && ch != '\u{fffe}' && ch != '\u{ffff}')
}

/// Drop characters that cannot be drawn (see [`is_xml_char`]).
pub fn strip_unprintable(s: &str) -> String {
    s.chars().filter(|&ch| is_xml_char(ch)).collect()
}

/// Runtime with a fixed minute suffix (`136 min`).
pub fn format_runtime(minutes: u32) -> Option<String> {
    (minutes > 0).then(|| format!("{minutes} min"))
}

/// Season count (`1 season`, `5 seasons`).
pub fn format_seasons(count: u32) -> Option<String> {
    format_count(count, "season", "seasons")
}

/// Episode count (`1 episode`, `62 episodes`).
pub fn format_episodes(count: u32) -> Option<String> {
    format_count(count, "episode", "episodes")
}

fn format_count(count: u32, singular: &str, plural: &str) -> Option<String> {
    match count {
        0 => None,
        1 => Some(format!("1 {singular}")),
        n => Some(format!("{n} {plural}")),
    }
}

/// Year component of a `YYYY-MM-DD` (or bare `YYYY`) date; `None` when unparsable.
pub fn parse_release_year(date: &str) -> Option<i32> {
    let mut parts = date.trim().split('-');
    let year = parts.next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;

    let ranges = [1..=12u32, 1..=31u32];
    for range in ranges {
        match parts.next() {
            None => break,
            Some(p) => {
                let v: u32 = p.parse().ok()?;
                if !range.contains(&v) {
                    return None;
                }
            }
        }
    }
    if parts.next().is_some() {
        return None;
    }
    Some(year)
}

/// Join the present metadata parts into one line; `None` when nothing is present.
pub fn meta_line<I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let parts: Vec<String> = parts.into_iter().flatten().collect();
    (!parts.is_empty()).then(|| parts.join(META_SEPARATOR))
}

#[cfg(test)]
#[path = "../../tests/unit/text/format.rs"]
mod tests;
