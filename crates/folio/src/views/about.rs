//! About section: bio, headline counters and social links.

use folio_core::content::{ABOUT_BIO, ABOUT_HEADLINE, SOCIAL_LINKS, STATS};
use folio_fonts::{GLYPH_HEIGHT, build_counter_art};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{Palette, content_rect, heading_height, render_heading, wrap};

const BADGE: &str = "About Me";
const TITLE: &str = "Crafting Digital Experiences";

/// Counter art plus its label.
const STAT_HEIGHT: u16 = GLYPH_HEIGHT as u16 + 1;

fn bio_width(width: u16) -> u16 {
    width.min(76)
}

pub fn height(width: u16) -> u16 {
    let width = content_rect(Rect::new(0, 0, width, 1)).width;
    let bio = wrap(ABOUT_BIO, bio_width(width)).len() as u16;
    // top pad, heading, headline, gap, bio, gap, stats, gap, "Follow Me", links, bottom pad
    1 + heading_height(None, width) + 2 + bio + 1 + STAT_HEIGHT + 1 + 1 + SOCIAL_LINKS.len() as u16 + 2
}

pub fn render(area: Rect, buf: &mut Buffer, palette: &Palette) {
    let area = content_rect(area);
    let mut y = area.y + 1;

    y += render_heading(
        Rect::new(area.x, y, area.width, area.bottom().saturating_sub(y)),
        buf,
        palette,
        BADGE,
        TITLE,
        None,
    );

    let bio = wrap(ABOUT_BIO, bio_width(area.width));
    let mut lines = vec![
        Line::from(Span::styled(ABOUT_HEADLINE, palette.accent_bold())),
        Line::default(),
    ];
    lines.extend(
        bio.into_iter()
            .map(|row| Line::from(Span::styled(row, Style::new().fg(palette.muted)))),
    );
    let text_height = lines.len() as u16;
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(clamp(area, y, text_height), buf);
    y += text_height + 1;

    render_stats(clamp(area, y, STAT_HEIGHT), buf, palette);
    y += STAT_HEIGHT + 1;

    let mut links = vec![Line::from(Span::styled(
        "Follow Me",
        Style::new().fg(palette.text).add_modifier(Modifier::BOLD),
    ))];
    links.extend(SOCIAL_LINKS.iter().map(|link| {
        Line::from(vec![
            Span::styled(format!("{:<10}", link.label), Style::new().fg(palette.accent)),
            Span::styled(link.value, Style::new().fg(palette.muted)),
        ])
    }));
    let links_height = links.len() as u16;
    Paragraph::new(links)
        .alignment(Alignment::Center)
        .render(clamp(area, y, links_height), buf);
}

fn render_stats(area: Rect, buf: &mut Buffer, palette: &Palette) {
    let columns = Layout::horizontal(STATS.iter().map(|_| Constraint::Fill(1))).split(area);
    for (stat, column) in STATS.iter().zip(columns.iter()) {
        let mut lines: Vec<Line> = build_counter_art(stat.value)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::new().fg(palette.accent))))
            .collect();
        lines.push(Line::from(Span::styled(stat.label, Style::new().fg(palette.muted))));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(*column, buf);
    }
}

/// Rows `[y, y + height)` of `area`, clipped to it.
fn clamp(area: Rect, y: u16, height: u16) -> Rect {
    Rect::new(area.x, y, area.width, height).intersection(area)
}
