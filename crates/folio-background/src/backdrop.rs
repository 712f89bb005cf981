//! Hero backdrop: a glow spreading from the top centre (stateless).

use ratatui::{buffer::Buffer, layout::Rect};

use crate::chars::GLOW_CHARS;
use crate::color::hsl_to_rgb;

/// One full breath of the glow, in milliseconds.
const BREATH_PERIOD_MS: u64 = 6000;

/// Paint the backdrop glow into `area`. With `animate` false the glow is
/// drawn at its resting size and never changes between frames.
pub fn render_backdrop(area: Rect, buf: &mut Buffer, elapsed_ms: u64, hue: f32, animate: bool) {
    if area.is_empty() {
        return;
    }

    let breath = if animate {
        let phase = (elapsed_ms % BREATH_PERIOD_MS) as f32 / BREATH_PERIOD_MS as f32;
        (phase * 2.0 * std::f32::consts::PI).sin() * 0.08
    } else {
        0.0
    };

    let width = f32::from(area.width);
    let height = f32::from(area.height);

    for y in 0..area.height {
        for x in 0..area.width {
            // Ellipse anchored at the top edge; rows count double for the
            // terminal aspect ratio
            let dx = (f32::from(x) - width / 2.0) / (width / 2.0).max(1.0);
            let dy = f32::from(y) / height.max(1.0) * 1.6;
            let dist = (dx * dx + dy * dy).sqrt();

            // Fade to black towards the bottom, like a gradient overlay
            let bottom_fade = 1.0 - (f32::from(y) / height.max(1.0)).powi(2);
            let intensity = ((1.0 - dist + breath) * bottom_fade).clamp(0.0, 1.0);

            let ch = if intensity < 0.2 {
                GLOW_CHARS[0]
            } else if intensity < 0.55 {
                GLOW_CHARS[1]
            } else {
                GLOW_CHARS[2]
            };
            if ch == ' ' {
                continue;
            }

            let color = hsl_to_rgb(hue, 0.6, 0.06 + intensity * 0.16);
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_char(ch).set_fg(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(elapsed_ms: u64, animate: bool) -> Buffer {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        render_backdrop(area, &mut buf, elapsed_ms, 271.0, animate);
        buf
    }

    #[test]
    fn test_static_backdrop_does_not_change() {
        assert_eq!(snapshot(0, false), snapshot(1500, false));
    }

    #[test]
    fn test_animated_backdrop_breathes() {
        assert_ne!(snapshot(0, true), snapshot(1500, true));
    }

    #[test]
    fn test_glow_is_brightest_at_top_centre() {
        let buf = snapshot(0, false);
        assert_ne!(buf[(30, 0)].symbol(), " ");
        assert_eq!(buf[(0, 19)].symbol(), " ");
    }
}
