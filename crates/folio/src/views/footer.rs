use chrono::{Datelike, Local};
use folio_core::content::AUTHOR;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Palette;

pub const HEIGHT: u16 = 3;

pub fn render(area: Rect, buf: &mut Buffer, palette: &Palette) {
    render_for_year(area, buf, palette, Local::now().year());
}

fn render_for_year(area: Rect, buf: &mut Buffer, palette: &Palette, year: i32) {
    let line = Line::from(vec![
        Span::styled(format!("© {year} Built with "), Style::new().fg(palette.muted)),
        Span::styled("♥", Style::new().fg(palette.accent)),
        Span::styled(format!(" by {AUTHOR}"), Style::new().fg(palette.muted)),
    ]);
    let row = Rect::new(area.x, area.y + 1, area.width, 1).intersection(area);
    Paragraph::new(line).alignment(Alignment::Center).render(row, buf);
}
