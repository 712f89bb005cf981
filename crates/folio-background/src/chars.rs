//! Character constants for hero animations.

/// Particle glyphs from smallest to largest scale.
pub const PARTICLE_CHARS: &[char] = &['·', '•', '●'];

/// Backdrop shading from faint to dense.
pub const GLOW_CHARS: &[char] = &[' ', '░', '▒'];
