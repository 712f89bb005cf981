//! Particle field state: owns one generated batch and replays it.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::chars::PARTICLE_CHARS;
use crate::color::hsl_to_rgb;
use crate::particles::{ParticleDescriptor, generate};

/// Pixels of travel per terminal column.
const PX_PER_COL: f32 = 10.0;
/// Pixels of travel per terminal row (cells are roughly twice as tall as wide).
const PX_PER_ROW: f32 = 20.0;

/// A batch of particles bound to one configuration.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<ParticleDescriptor>,
    /// Number of batches generated so far.
    generations: u32,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the batch holds `count` particles, regenerating only when
    /// the count changed. Returns whether a new batch was generated.
    pub fn sync<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> bool {
        if count == self.particles.len() {
            return false;
        }
        if count == 0 {
            self.clear();
            return false;
        }
        self.particles = generate(count, rng);
        self.generations += 1;
        true
    }

    /// Drop the current batch.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[ParticleDescriptor] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn generations(&self) -> u32 {
        self.generations
    }

    /// Draw every particle at its position `elapsed_ms` into its loop.
    /// Particles that drift outside `area` are skipped.
    pub fn render(&self, area: Rect, buf: &mut Buffer, elapsed_ms: u64, hue: f32) {
        if area.is_empty() {
            return;
        }
        let span_x = f32::from(area.width.saturating_sub(1));
        let span_y = f32::from(area.height.saturating_sub(1));

        for particle in &self.particles {
            let sample = particle.sample(elapsed_ms);
            let x = particle.left_pct / 100.0 * span_x + sample.dx / PX_PER_COL;
            let y = particle.top_pct / 100.0 * span_y + sample.dy / PX_PER_ROW;
            let (x, y) = (x.round(), y.round());
            if x < 0.0 || y < 0.0 || x > span_x || y > span_y {
                continue;
            }

            let glyph = if sample.scale < 0.85 {
                PARTICLE_CHARS[0]
            } else if sample.scale < 1.2 {
                PARTICLE_CHARS[1]
            } else {
                PARTICLE_CHARS[2]
            };
            let color = hsl_to_rgb(hue, 0.8, 0.2 + sample.opacity * 0.6);

            let position = (area.x + x as u16, area.y + y as u16);
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(glyph).set_fg(color);
            }
        }
    }
}
