//! Hero backdrop and particle animations for folio.
//!
//! Particles are generated once per configuration from an injected random
//! source and then replayed every frame from elapsed time alone. The
//! backdrop glow is stateless. Both render nothing that moves when the
//! motion gate asks for reduced motion.

mod backdrop;
mod chars;
mod color;
mod field;
mod particles;

pub use backdrop::render_backdrop;
pub use color::hsl_to_rgb;
pub use field::ParticleField;
pub use particles::{
    DURATION_RANGE, OFFSET_RANGE, ParticleDescriptor, ParticleSample, SCALE_RANGE, generate,
};
