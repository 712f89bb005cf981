//! The home page: every section stacked into one scrollable document.

use std::time::Instant;

use folio_core::{ContactForm, Section, SectionSpan};
use super::hero::{self, HeroView};
use super::{Document, Palette, about, contact, footer, projects, skills};

/// Section positions within the home document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    pub spans: Vec<SectionSpan>,
    /// Sections plus the footer.
    pub height: u16,
}

/// Stack the sections for a terminal `width` wide with `viewport` rows of
/// body.
pub fn layout(width: u16, viewport: u16) -> HomeLayout {
    let heights = [
        (Section::Hero, hero::height(viewport)),
        (Section::About, about::height(width)),
        (Section::Projects, projects::showcase_height(width)),
        (Section::Skills, skills::height(width)),
        (Section::Contact, contact::height(width)),
    ];
    let mut spans = Vec::with_capacity(heights.len());
    let mut top: u16 = 0;
    for (section, height) in heights {
        spans.push(SectionSpan::new(section, top, height));
        top = top.saturating_add(height);
    }
    HomeLayout {
        spans,
        height: top.saturating_add(footer::HEIGHT),
    }
}

/// Per-frame inputs the sections read.
pub struct HomeFrame<'a> {
    pub palette: Palette,
    pub form: &'a ContactForm,
    pub form_active: bool,
    /// Raw progress of the skill bar animation.
    pub skills_progress: f32,
    pub now: Instant,
}

/// Draw every section into a fresh document.
pub fn render(width: u16, layout: &HomeLayout, hero: &mut HeroView, frame: &HomeFrame) -> Document {
    let mut doc = Document::new(width, layout.height);
    let palette = &frame.palette;

    for span in &layout.spans {
        let area = doc.rows(span.top, span.height);
        let buf = doc.buffer_mut();
        match span.section {
            Section::Hero => hero.render(area, buf, palette, frame.now),
            Section::About => about::render(area, buf, palette),
            Section::Projects => projects::render_showcase(area, buf, palette),
            Section::Skills => skills::render(area, buf, palette, frame.skills_progress),
            Section::Contact => contact::render(area, buf, palette, frame.form, frame.form_active),
        }
    }

    let footer_top = layout.height - footer::HEIGHT;
    let area = doc.rows(footer_top, footer::HEIGHT);
    footer::render(area, doc.buffer_mut(), palette);
    doc
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use folio_core::{ColorTheme, DeviceTier, MotionGate};
    use ratatui::layout::Rect;

    fn span(layout: &HomeLayout, section: Section) -> SectionSpan {
        *layout.spans.iter().find(|s| s.section == section).unwrap()
    }

    #[test]
    fn test_sections_are_contiguous() {
        let layout = layout(100, 30);
        assert_eq!(layout.spans.len(), Section::ALL.len());
        assert_eq!(layout.spans[0].top, 0);
        for pair in layout.spans.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        let last = layout.spans.last().unwrap();
        assert_eq!(layout.height, last.bottom() + footer::HEIGHT);
    }

    #[test]
    fn test_hero_fills_viewport() {
        let layout = layout(100, 40);
        assert_eq!(span(&layout, Section::Hero).height, 40);
        let layout = super::layout(100, 5);
        assert_eq!(span(&layout, Section::Hero).height, hero::MIN_HERO_HEIGHT);
    }

    #[test]
    fn test_render_places_each_section() {
        let now = Instant::now();
        let layout = layout(100, 30);
        let mut hero = HeroView::mount(MotionGate::new(true), DeviceTier::Medium, Duration::from_millis(100), None, now);
        let form = ContactForm::new();
        let frame = HomeFrame {
            palette: Palette::new(ColorTheme::Green),
            form: &form,
            form_active: false,
            skills_progress: 1.0,
            now,
        };
        let doc = render(100, &layout, &mut hero, &frame);
        assert_eq!(doc.height(), layout.height);

        let mut out = ratatui::buffer::Buffer::empty(Rect::new(0, 0, 100, 30));
        let contact = span(&layout, Section::Contact);
        doc.blit(contact.top, out.area, &mut out);
        let text: String = out.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Let's Work Together"));
    }
}
