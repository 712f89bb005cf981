//! Skill categories with proficiency bars that fill in once the section
//! has been seen.

use std::time::Duration;

use folio_core::content::{SKILL_CATEGORIES, SkillCategory, TOOLS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use unicode_width::UnicodeWidthStr;

use super::{Palette, content_rect, heading_height, render_heading, wrap};

const BADGE: &str = "Skills & Expertise";
const TITLE: &str = "My Technical Skills";
const SUBTITLE: &str = "A showcase of my technical expertise and proficiency in various technologies and tools.";
const TOOLS_TITLE: &str = "Tools & Technologies";

/// How long the bars take to fill.
pub const FILL_DURATION: Duration = Duration::from_millis(1000);
/// Content width from which categories sit side by side.
const TWO_COLUMN_WIDTH: u16 = 70;
const COLUMN_GAP: u16 = 4;

const FULL: char = '█';
const EMPTY: char = '░';

fn columns(width: u16) -> u16 {
    if width >= TWO_COLUMN_WIDTH { 2 } else { 1 }
}

fn block_height(category: &SkillCategory) -> u16 {
    // title, gap, name + bar per skill, gap
    2 + category.skills.len() as u16 * 2 + 1
}

fn grid_height(width: u16) -> u16 {
    SKILL_CATEGORIES
        .chunks(usize::from(columns(width)))
        .map(|row| row.iter().map(block_height).max().unwrap_or(0))
        .sum()
}

fn tools_text() -> String {
    TOOLS.join("  ·  ")
}

/// Cubic ease-out of `t` in `0.0..=1.0`.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Filled cells of a bar `width` wide at `ratio` of the way through its
/// level and `progress` of the way through the fill animation.
pub fn filled_cells(width: u16, ratio: f32, progress: f32) -> u16 {
    let fill = ratio.clamp(0.0, 1.0) * ease_out(progress);
    (f32::from(width) * fill).round() as u16
}

pub fn height(width: u16) -> u16 {
    let width = content_rect(Rect::new(0, 0, width, 1)).width;
    let tools = wrap(&tools_text(), width).len() as u16;
    // top pad, heading, grid, tools title + gap + tools, bottom pad
    1 + heading_height(Some(SUBTITLE), width) + grid_height(width) + 2 + tools + 2
}

/// `progress` is the fill animation's raw progress, `1.0` once finished.
pub fn render(area: Rect, buf: &mut Buffer, palette: &Palette, progress: f32) {
    let area = content_rect(area);
    let mut y = area.y + 1;
    y += render_heading(
        Rect::new(area.x, y, area.width, area.bottom().saturating_sub(y)),
        buf,
        palette,
        BADGE,
        TITLE,
        Some(SUBTITLE),
    );

    let cols = columns(area.width);
    let col_width = (area.width.saturating_sub(COLUMN_GAP * (cols - 1))) / cols;
    for row in SKILL_CATEGORIES.chunks(usize::from(cols)) {
        let row_height = row.iter().map(block_height).max().unwrap_or(0);
        for (i, category) in row.iter().enumerate() {
            let x = area.x + i as u16 * (col_width + COLUMN_GAP);
            let block = Rect::new(x, y, col_width, row_height).intersection(area);
            render_category(block, buf, palette, category, progress);
        }
        y += row_height;
    }

    let mut lines = vec![
        Line::from(Span::styled(TOOLS_TITLE, palette.accent_bold())),
        Line::default(),
    ];
    lines.extend(
        wrap(&tools_text(), area.width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::new().fg(palette.muted)))),
    );
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y, area.width, area.bottom().saturating_sub(y)), buf);
}

fn render_category(area: Rect, buf: &mut Buffer, palette: &Palette, category: &SkillCategory, progress: f32) {
    let mut lines = vec![
        Line::from(Span::styled(
            category.title,
            Style::new().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for skill in category.skills {
        let percent = format!("{}%", skill.level);
        let pad = usize::from(area.width).saturating_sub(skill.name.width() + percent.len());
        lines.push(Line::from(vec![
            Span::styled(skill.name, Style::new().fg(palette.muted)),
            Span::raw(" ".repeat(pad)),
            Span::styled(percent, Style::new().fg(palette.accent)),
        ]));

        let filled = filled_cells(area.width, skill.ratio(), progress);
        let empty = area.width.saturating_sub(filled);
        lines.push(Line::from(vec![
            Span::styled(FULL.to_string().repeat(usize::from(filled)), Style::new().fg(palette.accent)),
            Span::styled(EMPTY.to_string().repeat(usize::from(empty)), Style::new().fg(palette.subtle)),
        ]));
    }
    Paragraph::new(lines).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ColorTheme;

    fn count(buf: &Buffer, symbol: &str) -> usize {
        buf.content().iter().filter(|c| c.symbol() == symbol).count()
    }

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_filled_cells_tracks_level_and_progress() {
        assert_eq!(filled_cells(40, 0.9, 1.0), 36);
        assert_eq!(filled_cells(40, 0.9, 0.0), 0);
        assert!(filled_cells(40, 0.9, 0.3) < 36);
        assert_eq!(filled_cells(40, 1.5, 1.0), 40);
    }

    #[test]
    fn test_layout_switches_to_two_columns() {
        assert_eq!(columns(69), 1);
        assert_eq!(columns(70), 2);
        assert!(height(60) > height(120));
    }

    #[test]
    fn test_bars_empty_before_seen() {
        let area = Rect::new(0, 0, 100, height(100));
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &Palette::new(ColorTheme::Purple), 0.0);
        assert_eq!(count(&buf, "█"), 0);
        assert!(count(&buf, "░") > 0);
    }

    #[test]
    fn test_bars_fill_when_done() {
        let area = Rect::new(0, 0, 100, height(100));
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &Palette::new(ColorTheme::Purple), 1.0);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(count(&buf, "█") > count(&buf, "░"));
        assert!(text.contains("PostgreSQL"));
        assert!(text.contains("Cypress"));
    }
}
