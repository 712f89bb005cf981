//! Terminal views for each part of the portfolio.
//!
//! Sections render into an offscreen [`Document`] as tall as the whole
//! page; the visible window is copied to the frame at the scroll offset.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod home;
pub mod notices;
pub mod projects;
pub mod skills;

use folio_core::ColorTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest the readable content column gets.
pub const MAX_CONTENT_WIDTH: u16 = 100;

/// Colours shared by every view.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub theme: ColorTheme,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub subtle: Color,
    pub success: Color,
    pub failure: Color,
}

impl Palette {
    pub fn new(theme: ColorTheme) -> Self {
        Self {
            theme,
            accent: theme.color(),
            text: Color::White,
            muted: Color::Gray,
            subtle: Color::DarkGray,
            success: Color::Rgb(34, 197, 94),
            failure: Color::Rgb(239, 68, 68),
        }
    }

    pub fn accent_bold(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

/// Centred column of at most [`MAX_CONTENT_WIDTH`] cells with a small margin.
pub fn content_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Greedy word wrap by display columns. Words wider than `width` are
/// split.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for mut word in text.split_whitespace() {
        while word.width() > width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let (head, rest) = split_at_width(word, width);
            lines.push(head.to_string());
            word = rest;
        }
        let word_width = word.width();
        let needed = if current_width == 0 { word_width } else { current_width + 1 + word_width };
        if needed > width && current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current_width += word_width;
        current.push_str(word);
    }
    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split `text` after at most `width` columns. A leading character wider
/// than `width` is still taken so callers always make progress.
pub fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            let end = if idx == 0 { ch.len_utf8() } else { idx };
            return text.split_at(end);
        }
        used += ch_width;
    }
    (text, "")
}

/// Rows taken by [`render_heading`] at `width`.
pub fn heading_height(subtitle: Option<&str>, width: u16) -> u16 {
    let subtitle_rows = subtitle.map_or(0, |s| wrap(s, width).len() as u16 + 1);
    // badge, gap, title, gap + subtitle
    4 + subtitle_rows
}

/// Badge, title and optional subtitle at the top of a section. Returns the
/// rows used.
pub fn render_heading(
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    badge: &str,
    title: &str,
    subtitle: Option<&str>,
) -> u16 {
    let mut lines = vec![
        Line::from(Span::styled(format!(" {badge} "), Style::new().fg(palette.accent).add_modifier(Modifier::REVERSED))),
        Line::default(),
        Line::from(Span::styled(
            title.to_string(),
            Style::new().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    if let Some(subtitle) = subtitle {
        lines.extend(
            wrap(subtitle, area.width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::new().fg(palette.muted)))),
        );
        lines.push(Line::default());
    }
    let height = heading_height(subtitle, area.width).min(area.height);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(Rect { height, ..area }, buf);
    height
}

/// An offscreen buffer holding the whole scrollable page.
#[derive(Debug)]
pub struct Document {
    buf: Buffer,
}

impl Document {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buf: Buffer::empty(Rect::new(0, 0, width, height)),
        }
    }

    pub fn height(&self) -> u16 {
        self.buf.area.height
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buf
    }

    /// Full-width slice of the document starting at row `top`.
    pub fn rows(&self, top: u16, height: u16) -> Rect {
        let area = self.buf.area;
        Rect::new(0, top, area.width, height).intersection(area)
    }

    /// Copy the rows starting at `scroll` into `target`.
    pub fn blit(&self, scroll: u16, target: Rect, out: &mut Buffer) {
        for y in 0..target.height {
            let Some(src_y) = scroll.checked_add(y) else {
                break;
            };
            if src_y >= self.height() {
                break;
            }
            for x in 0..target.width {
                let (Some(src), Some(dst)) = (
                    self.buf.cell((x, src_y)),
                    out.cell_mut((target.x + x, target.y + y)),
                ) else {
                    continue;
                };
                *dst = src.clone();
            }
        }
    }
}

/// Largest scroll offset that still fills the viewport.
pub fn max_scroll(document_height: u16, viewport: u16) -> u16 {
    document_height.saturating_sub(viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij kl", 4), vec!["abcd", "efgh", "ij", "kl"]);
    }

    #[test]
    fn test_wrap_counts_wide_characters_as_two_columns() {
        let lines = wrap("漢字漢字漢字", 5);
        assert_eq!(lines, vec!["漢字", "漢字", "漢字"]);
        assert!(wrap("日本 語の 文章です", 6).iter().all(|l| l.width() <= 6));
    }

    #[test]
    fn test_split_at_width_always_progresses() {
        assert_eq!(split_at_width("漢字", 1), ("漢", "字"));
        assert_eq!(split_at_width("ab漢", 3), ("ab", "漢"));
        assert_eq!(split_at_width("abc", 5), ("abc", ""));
    }

    #[test]
    fn test_wrap_empty_text_is_one_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn test_heading_height_counts_subtitle_rows() {
        assert_eq!(heading_height(None, 40), 4);
        assert_eq!(heading_height(Some("short"), 40), 6);
        assert_eq!(heading_height(Some("one two three four"), 8), 4 + 3 + 1);
    }

    #[test]
    fn test_blit_copies_scrolled_window() {
        let mut doc = Document::new(4, 10);
        for y in 0..10 {
            doc.buffer_mut()[(0, y)].set_char(char::from(b'0' + y as u8));
        }
        let target = Rect::new(1, 1, 4, 3);
        let mut out = Buffer::empty(Rect::new(0, 0, 6, 5));
        doc.blit(5, target, &mut out);
        assert_eq!(out[(1, 1)].symbol(), "5");
        assert_eq!(out[(1, 3)].symbol(), "7");
        assert_eq!(out[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_blit_stops_at_document_end() {
        let mut doc = Document::new(2, 3);
        doc.buffer_mut()[(0, 2)].set_char('z');
        let mut out = Buffer::empty(Rect::new(0, 0, 2, 4));
        doc.blit(2, out.area, &mut out);
        assert_eq!(out[(0, 0)].symbol(), "z");
        assert_eq!(out[(0, 1)].symbol(), " ");
    }

    #[test]
    fn test_max_scroll() {
        assert_eq!(max_scroll(100, 30), 70);
        assert_eq!(max_scroll(10, 30), 0);
    }

    #[test]
    fn test_content_rect_is_centred_and_capped() {
        let rect = content_rect(Rect::new(0, 0, 200, 10));
        assert_eq!(rect.width, MAX_CONTENT_WIDTH);
        assert_eq!(rect.x, 50);
        let rect = content_rect(Rect::new(0, 0, 40, 10));
        assert_eq!(rect.width, 36);
        assert_eq!(rect.x, 2);
    }
}
