//! Page sections and scroll-driven navigation state.

use std::time::{Duration, Instant};

/// Lines above a section's top at which it already counts as active.
pub const NAV_MARGIN: u16 = 3;

/// Sections of the home page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Sections linked from the header, in display order.
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Skills => 3,
            Section::Contact => 4,
        }
    }
}

/// Where a section sits in the scrollable document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn new(section: Section, top: u16, height: u16) -> Self {
        Self {
            section,
            top,
            height,
        }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Whether any row of the span lies in `[offset, offset + viewport)`.
    pub fn intersects(&self, offset: u16, viewport: u16) -> bool {
        self.top < offset.saturating_add(viewport) && self.bottom() > offset
    }
}

/// The section the header should highlight at a scroll offset. Later
/// sections win when ranges overlap.
pub fn active_section(offset: u16, spans: &[SectionSpan]) -> Option<Section> {
    let offset = i32::from(offset);
    spans
        .iter()
        .filter(|span| {
            let top = i32::from(span.top) - i32::from(NAV_MARGIN);
            offset > top && offset <= top + i32::from(span.height)
        })
        .map(|span| span.section)
        .last()
}

/// Scroll offset that brings a section to the top of the viewport.
pub fn section_top(section: Section, spans: &[SectionSpan]) -> Option<u16> {
    spans.iter().find(|s| s.section == section).map(|s| s.top)
}

/// Remembers when each section first scrolled into view, so in-view
/// animations run once.
#[derive(Debug, Default, Clone)]
pub struct SeenSections {
    first_seen: [Option<Instant>; Section::ALL.len()],
}

impl SeenSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every span visible in the viewport.
    pub fn observe(&mut self, offset: u16, viewport: u16, spans: &[SectionSpan], now: Instant) {
        for span in spans.iter().filter(|s| s.intersects(offset, viewport)) {
            self.first_seen[span.section.index()].get_or_insert(now);
        }
    }

    pub fn first_seen(&self, section: Section) -> Option<Instant> {
        self.first_seen[section.index()]
    }

    /// Linear progress of an in-view animation, 0.0 before the section is
    /// seen and 1.0 once `duration` has passed.
    pub fn progress(&self, section: Section, now: Instant, duration: Duration) -> f32 {
        let Some(seen) = self.first_seen(section) else {
            return 0.0;
        };
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(seen).as_secs_f32();
        (elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new(Section::Hero, 0, 30),
            SectionSpan::new(Section::About, 30, 20),
            SectionSpan::new(Section::Projects, 50, 15),
            SectionSpan::new(Section::Skills, 65, 25),
            SectionSpan::new(Section::Contact, 90, 22),
        ]
    }

    #[test]
    fn test_active_section_follows_offset() {
        let spans = spans();
        assert_eq!(active_section(0, &spans), Some(Section::Hero));
        assert_eq!(active_section(10, &spans), Some(Section::Hero));
        assert_eq!(active_section(28, &spans), Some(Section::About));
        assert_eq!(active_section(55, &spans), Some(Section::Projects));
        assert_eq!(active_section(100, &spans), Some(Section::Contact));
    }

    #[test]
    fn test_nothing_active_past_the_end() {
        assert_eq!(active_section(200, &spans()), None);
    }

    #[test]
    fn test_section_top_lookup() {
        assert_eq!(section_top(Section::Skills, &spans()), Some(65));
    }

    #[test]
    fn test_seen_sections_record_first_sighting_only() {
        let spans = spans();
        let start = Instant::now();
        let mut seen = SeenSections::new();
        seen.observe(0, 35, &spans, start);
        assert_eq!(seen.first_seen(Section::Hero), Some(start));
        assert_eq!(seen.first_seen(Section::About), Some(start));
        assert_eq!(seen.first_seen(Section::Skills), None);

        let later = start + Duration::from_secs(3);
        seen.observe(0, 35, &spans, later);
        assert_eq!(seen.first_seen(Section::About), Some(start));
    }

    #[test]
    fn test_progress_ramps_once_seen() {
        let spans = spans();
        let start = Instant::now();
        let mut seen = SeenSections::new();
        let second = Duration::from_secs(1);
        assert_eq!(seen.progress(Section::Skills, start, second), 0.0);

        seen.observe(60, 20, &spans, start);
        let half = seen.progress(Section::Skills, start + second / 2, second);
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(seen.progress(Section::Skills, start + second * 2, second), 1.0);
    }
}
