//! Particle descriptors (generated once, replayed forever).

use std::ops::RangeInclusive;

use rand::Rng;

/// Travel offset range, in pixels, on each axis.
pub const OFFSET_RANGE: RangeInclusive<f32> = -200.0..=200.0;
/// Final scale range.
pub const SCALE_RANGE: RangeInclusive<f32> = 0.5..=1.5;
/// Loop duration range, in seconds.
pub const DURATION_RANGE: RangeInclusive<f32> = 2.0..=5.0;
/// Origin position range, in percent of the hero area.
pub const POSITION_RANGE: RangeInclusive<f32> = 0.0..=100.0;

/// Opacity at the start and end of a loop.
const OPACITY_EDGE: f32 = 0.2;
/// Opacity at the middle of a loop.
const OPACITY_PEAK: f32 = 0.5;

/// Randomised animation parameters for one decorative particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleDescriptor {
    /// Unique within one generated batch.
    pub id: usize,
    /// Horizontal travel over one loop, in pixels.
    pub offset_x: f32,
    /// Vertical travel over one loop, in pixels.
    pub offset_y: f32,
    /// Scale reached at the end of a loop (starts at 1.0).
    pub scale: f32,
    /// Origin as a percentage of the area width.
    pub left_pct: f32,
    /// Origin as a percentage of the area height.
    pub top_pct: f32,
    /// Seconds per loop.
    pub duration_secs: f32,
}

/// Where a particle is at one instant of its loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSample {
    /// Horizontal displacement from the origin, in pixels.
    pub dx: f32,
    /// Vertical displacement from the origin, in pixels.
    pub dy: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl ParticleDescriptor {
    /// Sample the loop at `elapsed_ms` since the animation started.
    pub fn sample(&self, elapsed_ms: u64) -> ParticleSample {
        let duration_ms = (self.duration_secs * 1000.0).max(1.0);
        let t = (elapsed_ms as f32 % duration_ms) / duration_ms;

        // Linear 0.2 -> 0.5 -> 0.2 across the loop
        let opacity = if t < 0.5 {
            OPACITY_EDGE + (OPACITY_PEAK - OPACITY_EDGE) * (t * 2.0)
        } else {
            OPACITY_PEAK - (OPACITY_PEAK - OPACITY_EDGE) * ((t - 0.5) * 2.0)
        };

        ParticleSample {
            dx: self.offset_x * t,
            dy: self.offset_y * t,
            scale: 1.0 + (self.scale - 1.0) * t,
            opacity,
        }
    }
}

/// Generate `count` particle descriptors from the given random source.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ParticleDescriptor> {
    (0..count)
        .map(|id| ParticleDescriptor {
            id,
            offset_x: rng.random_range(OFFSET_RANGE),
            offset_y: rng.random_range(OFFSET_RANGE),
            scale: rng.random_range(SCALE_RANGE),
            left_pct: rng.random_range(POSITION_RANGE),
            top_pct: rng.random_range(POSITION_RANGE),
            duration_secs: rng.random_range(DURATION_RANGE),
        })
        .collect()
}
