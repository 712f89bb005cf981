//! Top bar with the site name and section navigation.

use folio_core::Section;
use folio_core::content::SITE_NAME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Palette;

/// Nav row plus the divider row.
pub const HEIGHT: u16 = 2;

/// Which nav entry is highlighted and whether the page has scrolled.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderState {
    pub active: Option<Section>,
    pub scrolled: bool,
    /// The projects page has no sections to navigate.
    pub projects_page: bool,
}

fn nav_spans(palette: &Palette, state: HeaderState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, section) in Section::NAV.into_iter().enumerate() {
        let active = !state.projects_page && state.active == Some(section);
        let style = if active {
            Style::new()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::new().fg(palette.muted)
        };
        spans.push(Span::styled(format!("{} ", i + 1), Style::new().fg(palette.subtle)));
        spans.push(Span::styled(section.label(), style));
        spans.push(Span::raw("   "));
    }
    let style = if state.projects_page { palette.accent_bold() } else { Style::new().fg(palette.muted) };
    spans.push(Span::styled("p ", Style::new().fg(palette.subtle)));
    spans.push(Span::styled("All Projects", style));
    spans
}

pub fn render(area: Rect, buf: &mut Buffer, palette: &Palette, state: HeaderState) {
    if area.height == 0 {
        return;
    }
    let brand = Line::from(vec![
        Span::styled("</> ", palette.accent_bold()),
        Span::styled(SITE_NAME, Style::new().fg(palette.text).add_modifier(Modifier::BOLD)),
    ]);
    let row = Rect { height: 1, ..area };
    Paragraph::new(brand).render(Rect { x: row.x + 1, width: row.width.saturating_sub(1), ..row }, buf);

    let nav = Line::from(nav_spans(palette, state));
    let nav_width = nav.width() as u16;
    let brand_width = SITE_NAME.len() as u16 + 6;
    // Drop the nav rather than overlap the brand on narrow terminals
    if nav_width + brand_width < area.width {
        let x = area.right() - nav_width - 1;
        Paragraph::new(nav).render(Rect::new(x, row.y, nav_width, 1), buf);
    }

    if state.scrolled && area.height > 1 {
        let divider = "─".repeat(usize::from(area.width));
        buf.set_string(area.x, area.y + 1, divider, Style::new().fg(palette.subtle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ColorTheme;

    fn draw(width: u16, state: HeaderState) -> Buffer {
        let area = Rect::new(0, 0, width, HEIGHT);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &Palette::new(ColorTheme::Purple), state);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_active_section_is_underlined() {
        let buf = draw(120, HeaderState { active: Some(Section::Skills), ..Default::default() });
        let line = row(&buf, 0);
        let x = line.find("Skills").expect("nav drawn");
        // byte offset equals column here: everything before is ASCII
        let cell = &buf[(x as u16, 0)];
        assert!(cell.modifier.contains(Modifier::UNDERLINED));
        let x = line.find("About").expect("nav drawn");
        assert!(!buf[(x as u16, 0)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_divider_only_after_scrolling() {
        let buf = draw(80, HeaderState::default());
        assert!(!row(&buf, 1).contains('─'));
        let buf = draw(80, HeaderState { scrolled: true, ..Default::default() });
        assert!(row(&buf, 1).starts_with('─'));
    }

    #[test]
    fn test_narrow_header_keeps_brand() {
        let buf = draw(30, HeaderState::default());
        let line = row(&buf, 0);
        assert!(line.contains("</> tirsasaki"));
        assert!(!line.contains("About"));
    }
}
