//! Project cards, the home page showcase and the all-projects page.

use folio_core::content::{CategoryFilter, ProjectRecord, featured_projects, filtered_projects};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use super::{Palette, content_rect, heading_height, render_heading, wrap};

const SHOWCASE_BADGE: &str = "My Work";
const SHOWCASE_TITLE: &str = "Featured Projects";
const SHOWCASE_SUBTITLE: &str = "Here are some of my favorite projects that showcase my skills and \
passion for building exceptional digital experiences.";

const PAGE_BADGE: &str = "Projects";
const PAGE_TITLE: &str = "My Projects";
const PAGE_SUBTITLE: &str = "A collection of my work, side projects, and experiments";

const EMPTY_FILTER: &str = "No projects in this category yet.";

/// Inner text width of a card inside a content column.
fn card_inner_width(width: u16) -> u16 {
    width.saturating_sub(4).max(1)
}

fn card_body(project: &ProjectRecord, detailed: bool) -> &'static str {
    if detailed { project.description } else { project.summary }
}

/// Rows taken by one card.
pub fn card_height(project: &ProjectRecord, width: u16, detailed: bool) -> u16 {
    let body = wrap(card_body(project, detailed), card_inner_width(width)).len() as u16;
    let meta = u16::from(detailed);
    // borders, gap, body, gap, tags, links (+ meta line)
    2 + 1 + body + 1 + 1 + 1 + meta
}

/// Draw one project card.
pub fn render_card(area: Rect, buf: &mut Buffer, palette: &Palette, project: &ProjectRecord, detailed: bool) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(palette.subtle))
        .title(Span::styled(format!(" {} ", project.title), palette.accent_bold()));
    let inner = block.inner(area);
    block.render(area, buf);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    let mut lines = Vec::new();
    if detailed {
        lines.push(Line::from(vec![
            Span::styled(project.year, Style::new().fg(palette.muted)),
            Span::styled("  ·  ", Style::new().fg(palette.subtle)),
            Span::styled(project.category.label(), Style::new().fg(palette.accent)),
            Span::styled("  ·  ", Style::new().fg(palette.subtle)),
            Span::styled(project.image, Style::new().fg(palette.subtle)),
        ]));
    }
    lines.push(Line::default());
    lines.extend(
        wrap(card_body(project, detailed), inner.width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::new().fg(palette.text)))),
    );
    lines.push(Line::default());

    let mut tags = Vec::new();
    for tag in project.tags {
        tags.push(Span::styled(format!("#{tag}"), Style::new().fg(palette.accent)));
        tags.push(Span::raw("  "));
    }
    lines.push(Line::from(tags));
    lines.push(Line::from(vec![
        Span::styled("code ", Style::new().fg(palette.subtle)),
        Span::styled(project.source_url, Style::new().fg(palette.muted)),
        Span::raw("   "),
        Span::styled("demo ", Style::new().fg(palette.subtle)),
        Span::styled(project.demo_url, Style::new().fg(palette.muted)),
    ]));

    Paragraph::new(lines).render(inner, buf);
}

fn cards_height<'a>(projects: impl Iterator<Item = &'a ProjectRecord>, width: u16, detailed: bool) -> u16 {
    projects.map(|p| card_height(p, width, detailed) + 1).sum()
}

/// Height of the home page showcase.
pub fn showcase_height(width: u16) -> u16 {
    let width = content_rect(Rect::new(0, 0, width, 1)).width;
    // top pad, heading, cards, link, bottom pad
    1 + heading_height(Some(SHOWCASE_SUBTITLE), width) + cards_height(featured_projects(), width, false) + 1 + 2
}

/// The home page showcase of featured projects.
pub fn render_showcase(area: Rect, buf: &mut Buffer, palette: &Palette) {
    let area = content_rect(area);
    let mut y = area.y + 1;
    y += render_heading(
        Rect::new(area.x, y, area.width, area.bottom().saturating_sub(y)),
        buf,
        palette,
        SHOWCASE_BADGE,
        SHOWCASE_TITLE,
        Some(SHOWCASE_SUBTITLE),
    );

    for project in featured_projects() {
        let height = card_height(project, area.width, false);
        let card = Rect::new(area.x, y, area.width, height).intersection(area);
        render_card(card, buf, palette, project, false);
        y += height + 1;
    }

    let link = Line::from(vec![
        Span::styled("[p]", palette.accent_bold()),
        Span::styled(" View All Projects →", Style::new().fg(palette.text)),
    ]);
    Paragraph::new(link)
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y, area.width, 1).intersection(area), buf);
}

/// Height of the all-projects page body.
pub fn page_height(width: u16, filter: CategoryFilter) -> u16 {
    let width = content_rect(Rect::new(0, 0, width, 1)).width;
    let cards = match cards_height(filtered_projects(filter), width, true) {
        0 => 2,
        n => n,
    };
    // top pad, heading, filter bar, gap, cards, bottom pad
    1 + heading_height(Some(PAGE_SUBTITLE), width) + 2 + cards + 1
}

/// The all-projects page with its category filter.
pub fn render_page(area: Rect, buf: &mut Buffer, palette: &Palette, filter: CategoryFilter) {
    let area = content_rect(area);
    let mut y = area.y + 1;
    y += render_heading(
        Rect::new(area.x, y, area.width, area.bottom().saturating_sub(y)),
        buf,
        palette,
        PAGE_BADGE,
        PAGE_TITLE,
        Some(PAGE_SUBTITLE),
    );

    let mut bar = vec![Span::styled("[f] ", palette.accent_bold())];
    for option in CategoryFilter::options() {
        let style = if option == filter {
            Style::new()
                .fg(palette.accent)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::new().fg(palette.muted)
        };
        bar.push(Span::styled(format!(" {} ", option.label()), style));
        bar.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(bar))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y, area.width, 1).intersection(area), buf);
    y += 2;

    let mut any = false;
    for project in filtered_projects(filter) {
        any = true;
        let height = card_height(project, area.width, true);
        let card = Rect::new(area.x, y, area.width, height).intersection(area);
        render_card(card, buf, palette, project, true);
        y += height + 1;
    }
    if !any {
        Paragraph::new(Span::styled(EMPTY_FILTER, Style::new().fg(palette.muted)))
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, y, area.width, 1).intersection(area), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ColorTheme;
    use folio_core::content::{PROJECTS, ProjectCategory};

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_card_height_counts_wrapped_body() {
        let project = &PROJECTS[0];
        assert_eq!(
            card_height(project, 80, true),
            7 + wrap(project.description, card_inner_width(80)).len() as u16
        );
        assert_eq!(
            card_height(project, 80, false),
            6 + wrap(project.summary, card_inner_width(80)).len() as u16
        );
    }

    #[test]
    fn test_showcase_lists_featured_projects() {
        let width = 100;
        let area = Rect::new(0, 0, width, showcase_height(width));
        let mut buf = Buffer::empty(area);
        render_showcase(area, &mut buf, &Palette::new(ColorTheme::Purple));
        let text = text(&buf);
        for project in featured_projects() {
            assert!(text.contains(project.title));
        }
        assert!(text.contains("View All Projects"));
    }

    #[test]
    fn test_page_filter_hides_other_categories() {
        let width = 100;
        let filter = CategoryFilter(Some(ProjectCategory::Design));
        let area = Rect::new(0, 0, width, page_height(width, filter));
        let mut buf = Buffer::empty(area);
        render_page(area, &mut buf, &Palette::new(ColorTheme::Purple), filter);
        let text = text(&buf);
        assert!(text.contains(EMPTY_FILTER));
        assert!(!text.contains("Kasa Blog Astro"));
    }

    #[test]
    fn test_page_shows_matching_projects() {
        let width = 100;
        let filter = CategoryFilter(Some(ProjectCategory::WebApp));
        let area = Rect::new(0, 0, width, page_height(width, filter));
        let mut buf = Buffer::empty(area);
        render_page(area, &mut buf, &Palette::new(ColorTheme::Purple), filter);
        assert!(text(&buf).contains("Kasa Blog Astro"));
    }
}
