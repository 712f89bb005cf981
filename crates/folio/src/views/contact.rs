//! Contact section: details on one side, the message form on the other.

use folio_core::content::{CONTACT_INFO, SOCIAL_LINKS};
use folio_core::{ContactForm, Field};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use unicode_width::UnicodeWidthChar;

use super::{Palette, content_rect, heading_height, render_heading, wrap};

const BADGE: &str = "Get In Touch";
const TITLE: &str = "Let's Work Together";
const SUBTITLE: &str = "Have a project in mind? I'd love to help you bring it to life. \
Let's create something amazing together.";

const SIDE_BY_SIDE_WIDTH: u16 = 70;
const MESSAGE_ROWS: u16 = 4;
const CURSOR: char = '▌';

fn info_height() -> u16 {
    // title, gap, details, gap, "Follow Me", links
    2 + CONTACT_INFO.len() as u16 + 1 + 1 + SOCIAL_LINKS.len() as u16
}

fn input_height(field: Field) -> u16 {
    let inner = if field == Field::Message { MESSAGE_ROWS } else { 1 };
    // label and bordered box
    1 + inner + 2
}

fn form_height() -> u16 {
    let inputs: u16 = Field::ALL.iter().map(|&f| input_height(f) + 1).sum();
    // inputs, button, gap, hint
    inputs + 3
}

pub fn height(width: u16) -> u16 {
    let width = content_rect(Rect::new(0, 0, width, 1)).width;
    let body = if width >= SIDE_BY_SIDE_WIDTH {
        info_height().max(form_height())
    } else {
        info_height() + 1 + form_height()
    };
    1 + heading_height(Some(SUBTITLE), width) + body + 2
}

/// `active` is true while keystrokes go to the form.
pub fn render(area: Rect, buf: &mut Buffer, palette: &Palette, form: &ContactForm, active: bool) {
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

    let body = Rect::new(area.x, y, area.width, area.bottom().saturating_sub(y));
    let (info, form_area) = if area.width >= SIDE_BY_SIDE_WIDTH {
        let [info, _, form_area] = Layout::horizontal([
            Constraint::Percentage(35),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(body);
        (info, form_area)
    } else {
        let info = Rect { height: info_height().min(body.height), ..body };
        let top = body.y + info_height() + 1;
        let form_area = Rect::new(body.x, top, body.width, body.bottom().saturating_sub(top));
        (info, form_area)
    };

    render_info(info, buf, palette);
    render_form(form_area, buf, palette, form, active);
}

fn render_info(area: Rect, buf: &mut Buffer, palette: &Palette) {
    let label_width = CONTACT_INFO
        .iter()
        .chain(SOCIAL_LINKS)
        .map(|l| l.label.len())
        .max()
        .unwrap_or(0)
        + 2;

    let mut lines = vec![
        Line::from(Span::styled("Contact Information", palette.accent_bold())),
        Line::default(),
    ];
    let row = |label: &'static str, value: &'static str| {
        Line::from(vec![
            Span::styled(format!("{label:<label_width$}"), Style::new().fg(palette.subtle)),
            Span::styled(value, Style::new().fg(palette.text)),
        ])
    };
    lines.extend(CONTACT_INFO.iter().map(|l| row(l.label, l.value)));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Follow Me",
        Style::new().fg(palette.text).add_modifier(Modifier::BOLD),
    )));
    lines.extend(SOCIAL_LINKS.iter().map(|l| row(l.label, l.value)));
    Paragraph::new(lines).render(area, buf);
}

/// The last `rows` lines of `value` wrapped to `width` columns, with a
/// cursor when focused.
fn input_lines(value: &str, width: u16, rows: u16, focused: bool) -> Vec<String> {
    let mut text = value.to_string();
    if focused {
        text.push(CURSOR);
    }
    let mut lines = if rows == 1 {
        // single-line inputs scroll horizontally
        vec![tail_within(&text, usize::from(width)).to_string()]
    } else {
        wrap(&text, width)
    };
    let skip = lines.len().saturating_sub(usize::from(rows));
    lines.drain(..skip);
    lines
}

/// The longest suffix of `text` that fits in `width` columns.
fn tail_within(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = idx;
    }
    &text[start..]
}

fn render_input(area: Rect, buf: &mut Buffer, palette: &Palette, form: &ContactForm, field: Field, active: bool) {
    let focused = active && form.focus() == field;
    let border = if focused { palette.accent } else { palette.subtle };

    Paragraph::new(Span::styled(field.label(), Style::new().fg(palette.muted)))
        .render(Rect { height: 1.min(area.height), ..area }, buf);

    let box_area = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1));
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(border));
    let inner = block.inner(box_area);
    block.render(box_area, buf);

    let value = form.field(field);
    let lines: Vec<Line> = if value.is_empty() && !focused {
        vec![Line::from(Span::styled(field.placeholder(), Style::new().fg(palette.subtle)))]
    } else {
        let rows = input_height(field) - 3;
        input_lines(value, inner.width, rows, focused)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::new().fg(palette.text))))
            .collect()
    };
    Paragraph::new(lines).render(inner, buf);
}

fn render_form(area: Rect, buf: &mut Buffer, palette: &Palette, form: &ContactForm, active: bool) {
    let mut y = area.y;
    for field in Field::ALL {
        let height = input_height(field);
        let input = Rect::new(area.x, y, area.width, height).intersection(area);
        render_input(input, buf, palette, form, field, active);
        y += height + 1;
    }

    let button = if form.is_submitting() {
        Span::styled(" Sending... ", Style::new().fg(palette.muted).add_modifier(Modifier::REVERSED))
    } else if form.can_submit() {
        Span::styled(
            " Send Message ",
            Style::new()
                .fg(palette.accent)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD),
        )
    } else {
        Span::styled(" Send Message ", Style::new().fg(palette.subtle).add_modifier(Modifier::REVERSED))
    };
    Paragraph::new(Line::from(button))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y, area.width, 1).intersection(area), buf);
    y += 2;

    let hint = if active {
        "Tab/Shift-Tab move · Enter send · Esc leave form"
    } else {
        "Tab to write a message"
    };
    Paragraph::new(Span::styled(hint, Style::new().fg(palette.subtle)))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y, area.width, 1).intersection(area), buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ColorTheme;
    use unicode_width::UnicodeWidthStr;

    fn render_text(width: u16, form: &ContactForm, active: bool) -> String {
        let area = Rect::new(0, 0, width, height(width));
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &Palette::new(ColorTheme::Purple), form, active);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_stacked_layout_is_taller() {
        assert!(height(60) > height(120));
    }

    #[test]
    fn test_placeholders_shown_when_empty() {
        let text = render_text(100, &ContactForm::new(), false);
        assert!(text.contains("Your name"));
        assert!(text.contains("your@email.com"));
        assert!(text.contains("Send Message"));
        assert!(text.contains("Tab to write a message"));
    }

    #[test]
    fn test_submitting_shows_sending_label() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Message, "hello");
        form.begin_submit().unwrap();
        let text = render_text(60, &form, true);
        assert!(text.contains("Sending..."));
        assert!(!text.contains("Send Message"));
    }

    #[test]
    fn test_input_lines_keep_tail_in_view() {
        let lines = input_lines("abcdefghij", 4, 1, true);
        assert_eq!(lines, vec!["hij▌"]);
        let lines = input_lines("one two three four five six", 5, 2, false);
        assert_eq!(lines, vec!["five", "six"]);
    }

    #[test]
    fn test_wide_input_scrolls_by_columns() {
        let lines = input_lines("漢字漢字漢字漢字", 10, 1, true);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].width() <= 10, "{:?} overflows", lines[0]);
        assert_eq!(lines[0], "漢字漢字▌");

        let lines = input_lines("漢字漢字漢字漢字", 6, 4, false);
        assert!(lines.iter().all(|l| l.width() <= 6));
    }
}
