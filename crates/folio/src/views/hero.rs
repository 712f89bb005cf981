//! Hero banner: typed title over a glowing backdrop and drifting particles.

use std::time::{Duration, Instant};

use folio_background::{ParticleField, render_backdrop};
use folio_core::content::{HERO_BADGE, HERO_PROOF, HERO_TAGLINE, HERO_TITLE};
use folio_core::{DeviceTier, MotionGate, TypingEffect, particle_budget};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{Palette, wrap};

/// The hero never gets shorter than this.
pub const MIN_HERO_HEIGHT: u16 = 18;

/// How long the GitHub button shows its check mark after a copy.
const COPIED_FLASH: Duration = Duration::from_secs(2);
/// Cursor blink half-period.
const CURSOR_BLINK_MS: u64 = 530;

// Entrance delays, in milliseconds after mount
const BADGE_DELAY_MS: u64 = 200;
const TAGLINE_DELAY_MS: u64 = 1000;
const ACTIONS_DELAY_MS: u64 = 1500;
const PROOF_DELAY_MS: u64 = 2000;

/// Height of the hero for a viewport.
pub fn height(viewport: u16) -> u16 {
    viewport.max(MIN_HERO_HEIGHT)
}

/// Mounted hero state. Dropping it tears down the typing timer.
#[derive(Debug)]
pub struct HeroView {
    typing: TypingEffect,
    particles: ParticleField,
    gate: MotionGate,
    tier: DeviceTier,
    particle_override: Option<usize>,
    mounted_at: Instant,
    copied_until: Option<Instant>,
}

impl HeroView {
    pub fn mount(
        gate: MotionGate,
        tier: DeviceTier,
        typing_delay: Duration,
        particle_override: Option<usize>,
        now: Instant,
    ) -> Self {
        tracing::debug!(
            tier = tier.label(),
            reduced_motion = gate.reduced_motion(),
            "hero mounted"
        );
        Self {
            typing: TypingEffect::mount(HERO_TITLE, typing_delay, gate, now),
            particles: ParticleField::new(),
            gate,
            tier,
            particle_override,
            mounted_at: now,
            copied_until: None,
        }
    }

    /// Advance time-driven state.
    pub fn update(&mut self, now: Instant) {
        self.typing.update(now);
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    /// Flash the check mark on the GitHub button.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_until = Some(now + COPIED_FLASH);
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// Particles this hero asks for at a given width.
    pub fn particle_target(&self, width: u16) -> usize {
        let requested = self
            .particle_override
            .unwrap_or_else(|| particle_budget(self.tier, width));
        self.gate.particle_count(requested)
    }

    fn since_mount_ms(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.mounted_at).as_millis() as u64
    }

    fn shown(&self, delay_ms: u64, now: Instant) -> bool {
        self.gate.reduced_motion() || self.since_mount_ms(now) >= delay_ms
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, palette: &Palette, now: Instant) {
        let elapsed_ms = self.since_mount_ms(now);
        let hue = palette.theme.hue();

        render_backdrop(area, buf, elapsed_ms, hue, self.gate.allows_motion());

        // Regenerates only when the target changes (resize or tier)
        let target = self.particle_target(area.width);
        if self.particles.sync(target, &mut rand::rng()) {
            tracing::debug!(count = target, "generated hero particles");
        }
        if self.gate.allows_motion() {
            self.particles.render(area, buf, elapsed_ms, hue);
        }

        self.render_content(area, buf, palette, now);
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer, palette: &Palette, now: Instant) {
        let width = area.width.saturating_sub(4).min(72);
        let tagline = wrap(HERO_TAGLINE, width);
        let mut lines: Vec<Line> = Vec::new();

        lines.push(if self.shown(BADGE_DELAY_MS, now) {
            Line::from(Span::styled(
                format!("( {HERO_BADGE} )"),
                Style::new().fg(palette.accent),
            ))
        } else {
            Line::default()
        });
        lines.push(Line::default());
        lines.push(self.title_line(palette, now));
        lines.push(Line::default());

        for row in tagline {
            lines.push(if self.shown(TAGLINE_DELAY_MS, now) {
                Line::from(Span::styled(row, Style::new().fg(palette.muted)))
            } else {
                Line::default()
            });
        }
        lines.push(Line::default());

        lines.push(if self.shown(ACTIONS_DELAY_MS, now) {
            self.actions_line(palette)
        } else {
            Line::default()
        });
        lines.push(Line::default());

        lines.push(if self.shown(PROOF_DELAY_MS, now) {
            Line::from(vec![
                Span::styled("●●● ", Style::new().fg(palette.accent)),
                Span::styled(HERO_PROOF, Style::new().fg(palette.muted)),
            ])
        } else {
            Line::default()
        });

        let content_height = (lines.len() as u16).min(area.height);
        let top = area.y + area.height.saturating_sub(content_height) / 2;
        let content = Rect::new(area.x, top, area.width, content_height);
        // Only the text rows are cleared so the backdrop shows around them
        for line_area in content.rows() {
            for x in line_area.left()..line_area.right() {
                if let Some(cell) = buf.cell_mut((x, line_area.y)) {
                    cell.set_char(' ');
                }
            }
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(content, buf);

        if self.shown(PROOF_DELAY_MS, now) && area.height > 2 {
            self.render_scroll_hint(area, buf, palette, now);
        }
    }

    fn title_line(&self, palette: &Palette, now: Instant) -> Line<'static> {
        let title = self.typing.visible();
        let total = HERO_TITLE.chars().count().max(1);
        let mut spans: Vec<Span> = title
            .chars()
            .enumerate()
            .map(|(idx, ch)| {
                let t = idx as f32 / total as f32;
                Span::styled(
                    ch.to_string(),
                    Style::new()
                        .fg(blend(Color::Rgb(255, 255, 255), palette.accent, t))
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();

        let cursor_on = self.gate.reduced_motion()
            || (self.since_mount_ms(now) / CURSOR_BLINK_MS) % 2 == 0;
        spans.push(Span::styled(
            if cursor_on { "▌" } else { " " },
            Style::new().fg(palette.accent),
        ));
        Line::from(spans)
    }

    fn actions_line(&self, palette: &Palette) -> Line<'static> {
        let key = Style::new().fg(palette.accent).add_modifier(Modifier::BOLD);
        let (mark, mark_style) = if self.is_copied() {
            ("✓", Style::new().fg(palette.success))
        } else {
            ("⧉", Style::new().fg(palette.muted))
        };
        Line::from(vec![
            Span::styled("[p]", key),
            Span::styled(" View Projects → ", Style::new().fg(palette.text)),
            Span::raw("   "),
            Span::styled("[g]", key),
            Span::styled(" GitHub ", Style::new().fg(palette.text)),
            Span::styled(mark, mark_style),
        ])
    }

    fn render_scroll_hint(&self, area: Rect, buf: &mut Buffer, palette: &Palette, now: Instant) {
        let bounce = if self.gate.allows_motion() {
            ((self.since_mount_ms(now) / 500) % 2) as u16
        } else {
            0
        };
        let y = area.bottom().saturating_sub(2 - bounce.min(1));
        let x = area.x + area.width / 2;
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char('↓').set_fg(palette.accent);
        }
    }
}

#[cfg(test)]
impl HeroView {
    pub fn title(&self) -> &str {
        self.typing.visible()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_running()
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }
}

impl Drop for HeroView {
    fn drop(&mut self) {
        self.typing.cancel();
        self.particles.clear();
        tracing::debug!("hero unmounted");
    }
}

/// Linear blend between two RGB colours.
fn blend(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ColorTheme;
    use folio_core::typing::DEFAULT_TYPING_DELAY;

    fn mount(reduced: bool, now: Instant) -> HeroView {
        HeroView::mount(
            MotionGate::new(reduced),
            DeviceTier::High,
            DEFAULT_TYPING_DELAY,
            None,
            now,
        )
    }

    fn render(hero: &mut HeroView, width: u16, now: Instant) -> Buffer {
        let area = Rect::new(0, 0, width, 24);
        let mut buf = Buffer::empty(area);
        hero.render(area, &mut buf, &Palette::new(ColorTheme::Purple), now);
        buf
    }

    #[test]
    fn test_title_types_out_over_time() {
        let start = Instant::now();
        let mut hero = mount(false, start);
        assert_eq!(hero.title(), "");
        hero.update(start + DEFAULT_TYPING_DELAY * 8);
        assert_eq!(hero.title(), "Creative");
        hero.update(start + DEFAULT_TYPING_DELAY * 200);
        assert_eq!(hero.title(), HERO_TITLE);
        assert!(!hero.is_typing());
    }

    #[test]
    fn test_reduced_motion_is_static() {
        let start = Instant::now();
        let mut hero = mount(true, start);
        assert_eq!(hero.title(), HERO_TITLE);
        assert!(!hero.is_typing());
        assert_eq!(hero.particle_target(120), 0);

        let first = render(&mut hero, 120, start);
        assert!(hero.particles().is_empty());
        assert_eq!(hero.particles().generations(), 0);
        let later = render(&mut hero, 120, start + Duration::from_millis(1700));
        assert_eq!(first, later);
    }

    #[test]
    fn test_particles_follow_tier_and_width() {
        let start = Instant::now();
        let mut hero = mount(false, start);
        render(&mut hero, 120, start);
        assert_eq!(hero.particles().len(), 20);
        render(&mut hero, 120, start + Duration::from_millis(33));
        assert_eq!(hero.particles().generations(), 1);

        render(&mut hero, 60, start + Duration::from_millis(66));
        assert_eq!(hero.particles().len(), 10);
        assert_eq!(hero.particles().generations(), 2);
    }

    #[test]
    fn test_override_count_still_gated() {
        let start = Instant::now();
        let hero = HeroView::mount(
            MotionGate::new(true),
            DeviceTier::Low,
            DEFAULT_TYPING_DELAY,
            Some(40),
            start,
        );
        assert_eq!(hero.particle_target(120), 0);
    }

    #[test]
    fn test_copied_flash_expires() {
        let start = Instant::now();
        let mut hero = mount(false, start);
        hero.mark_copied(start);
        assert!(hero.is_copied());
        hero.update(start + COPIED_FLASH);
        assert!(!hero.is_copied());
    }

    #[test]
    fn test_blend_endpoints() {
        let white = Color::Rgb(255, 255, 255);
        let purple = Color::Rgb(168, 85, 247);
        assert_eq!(blend(white, purple, 0.0), white);
        assert_eq!(blend(white, purple, 1.0), purple);
    }
}
