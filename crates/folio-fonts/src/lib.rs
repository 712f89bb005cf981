//! Block glyph font for the folio about-section counters.

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Compact 5-row digits, 4 cells wide.
pub const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["▄▀▀▄", "█  █", "█  █", "█  █", "▀▄▄▀"],
    [" ▄█ ", "  █ ", "  █ ", "  █ ", " ▄█▄"],
    ["▄▀▀▄", "   █", " ▄▀ ", "▄▀  ", "█▄▄▄"],
    ["▄▀▀▄", "   █", " ▀▀▄", "   █", "▀▄▄▀"],
    ["█  █", "█  █", "▀▀▀█", "   █", "   █"],
    ["█▀▀▀", "█▄▄ ", "   █", "   █", "▀▄▄▀"],
    ["▄▀▀ ", "█▄▄ ", "█  █", "█  █", "▀▄▄▀"],
    ["▀▀▀█", "   █", "  █ ", " █  ", " █  "],
    ["▄▀▀▄", "▀▄▄▀", "█  █", "█  █", "▀▄▄▀"],
    ["▄▀▀▄", "█  █", "▀▄▄█", "   █", " ▄▄▀"],
];

/// Plus sign suffix, 3 cells wide.
pub const PLUS: [&str; GLYPH_HEIGHT] = ["   ", " █ ", "▀█▀", " ▀ ", "   "];

/// Narrow blank used for characters the font does not cover.
pub const BLANK: [&str; GLYPH_HEIGHT] = ["  ", "  ", "  ", "  ", "  "];

fn glyph(ch: char) -> &'static [&'static str; GLYPH_HEIGHT] {
    match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        '+' => &PLUS,
        _ => &BLANK,
    }
}

/// Build block art for a short counter such as `"50+"`.
///
/// Glyphs are separated by one blank column. Returns [`GLYPH_HEIGHT`] lines
/// of equal display width.
pub fn build_counter_art(text: &str) -> Vec<String> {
    let mut lines = vec![String::new(); GLYPH_HEIGHT];
    for (idx, ch) in text.chars().enumerate() {
        let glyph = glyph(ch);
        for (line, row) in lines.iter_mut().zip(glyph.iter()) {
            if idx > 0 {
                line.push(' ');
            }
            line.push_str(row);
        }
    }
    lines
}

/// Display width, in cells, of the art [`build_counter_art`] produces.
pub fn counter_width(text: &str) -> usize {
    let glyphs: usize = text.chars().map(|ch| glyph(ch)[0].chars().count()).sum();
    glyphs + text.chars().count().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_rows_share_width() {
        for digit in DIGITS.iter().chain([&PLUS, &BLANK]) {
            let width = digit[0].chars().count();
            assert!(digit.iter().all(|row| row.chars().count() == width));
        }
    }

    #[test]
    fn test_counter_art_has_glyph_height() {
        let art = build_counter_art("50+");
        assert_eq!(art.len(), GLYPH_HEIGHT);
    }

    #[test]
    fn test_counter_width_matches_art() {
        for text in ["50+", "5+", "30+", "1", ""] {
            let art = build_counter_art(text);
            for line in &art {
                assert_eq!(line.chars().count(), counter_width(text), "{text:?}");
            }
        }
    }

    #[test]
    fn test_unknown_chars_render_blank() {
        let art = build_counter_art("k");
        assert!(art.iter().all(|line| line.trim().is_empty()));
    }
}
