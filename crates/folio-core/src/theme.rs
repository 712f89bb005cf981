//! Accent colour themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Accent colour used for headings, badges and highlights.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Purple,
    Cyan,
    Green,
    Amber,
    Rose,
}

impl ColorTheme {
    /// All themes in cycle order.
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Purple,
        ColorTheme::Cyan,
        ColorTheme::Green,
        ColorTheme::Amber,
        ColorTheme::Rose,
    ];

    /// The accent colour for this theme.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Purple => Color::Rgb(168, 85, 247),
            ColorTheme::Cyan => Color::Rgb(34, 211, 238),
            ColorTheme::Green => Color::Rgb(74, 222, 128),
            ColorTheme::Amber => Color::Rgb(251, 191, 36),
            ColorTheme::Rose => Color::Rgb(251, 113, 133),
        }
    }

    /// Hue in degrees, used by the backdrop and particles.
    pub fn hue(self) -> f32 {
        match self {
            ColorTheme::Purple => 271.0,
            ColorTheme::Cyan => 188.0,
            ColorTheme::Green => 142.0,
            ColorTheme::Amber => 43.0,
            ColorTheme::Rose => 351.0,
        }
    }

    /// The next theme in the cycle.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Purple => "purple",
            ColorTheme::Cyan => "cyan",
            ColorTheme::Green => "green",
            ColorTheme::Amber => "amber",
            ColorTheme::Rose => "rose",
        }
    }
}
