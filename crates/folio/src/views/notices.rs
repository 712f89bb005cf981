//! Toasts stacked in the top-right corner.

use std::time::Instant;

use folio_core::{NoticeKind, Notices};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

use unicode_width::UnicodeWidthStr;

use super::Palette;

const TOAST_HEIGHT: u16 = 3;
const MAX_TOAST_WIDTH: u16 = 48;

pub fn render(area: Rect, buf: &mut Buffer, palette: &Palette, notices: &Notices, now: Instant) {
    let mut y = area.y;
    for notice in notices.active(now) {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let (icon, color) = match notice.kind {
            NoticeKind::Success => ("✓", palette.success),
            NoticeKind::Failure => ("✗", palette.failure),
        };
        let text_width = notice.text.width() as u16;
        let width = (text_width + 6).min(MAX_TOAST_WIDTH).min(area.width);
        let toast = Rect::new(area.right() - width, y, width, TOAST_HEIGHT);

        Clear.render(toast, buf);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(color));
        let line = Line::from(vec![
            Span::styled(format!("{icon} "), Style::new().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(notice.text.as_str(), Style::new().fg(palette.text)),
        ]);
        Paragraph::new(line).block(block).render(toast, buf);
        y += TOAST_HEIGHT;
    }
}
