//! Decorative page effects: mouse-tilt math and the click heart burst.
//!
//! Ports `init3DTilt()` and the hearts spawner from `script.js`. Only the
//! numbers live here; the JS host applies them to element styles and owns
//! element creation and removal.

use crate::rng::GameRng;
use serde::Serialize;

/// Perspective depth used by every tilt transform, in px.
pub const PERSPECTIVE_PX: u32 = 1200;

/// Z-lift applied while tilting, in px.
pub const TRANSLATE_Z_PX: u32 = 10;

/// Max tilt of the hero card, in degrees.
pub const HERO_MAX_DEG: f32 = 10.0;

/// Max tilt of the valentine card, in degrees.
pub const CARD_MAX_DEG: f32 = 6.0;

/// Glyphs the heart burst picks from.
pub const HEART_GLYPHS: [&str; 5] = ["\u{2764}\u{fe0f}", "\u{1f495}", "\u{1f496}", "\u{1f497}", "\u{2665}\u{fe0f}"];

/// How long a spawned heart lives before the host removes it, in ms.
pub const HEART_LIFETIME_MS: u32 = 2600;

/// Horizontal drift span of a heart, in px (drift is centered on zero).
pub const HEART_DRIFT_SPAN_PX: f32 = 120.0;

/// A tilt pose for a card under the cursor.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Tilt {
    /// The CSS transform string the host assigns to `style.transform`.
    pub fn css(&self) -> String {
        // Midline cursors yield -0.0, which Rust formats as "-0" but JS
        // string conversion renders as "0". Adding 0.0 normalizes the sign.
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            PERSPECTIVE_PX,
            self.rotate_x_deg + 0.0,
            self.rotate_y_deg + 0.0,
            TRANSLATE_Z_PX
        )
    }
}

/// Tilt for a cursor at (x, y), both normalized to [0, 1] over the
/// element's bounding box. The card leans toward the cursor: x past the
/// middle yaws right, y past the middle pitches up.
pub fn tilt_at(x: f32, y: f32, max_deg: f32) -> Tilt {
    Tilt {
        rotate_x_deg: (y - 0.5) * -2.0 * max_deg,
        rotate_y_deg: (x - 0.5) * 2.0 * max_deg,
    }
}

/// One heart of a click burst.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Heart {
    /// Which glyph to render.
    pub glyph: &'static str,
    /// Horizontal drift over the float animation, in px.
    pub drift_px: f32,
}

/// Spawn a burst of 4-6 hearts with random glyphs and drifts.
pub fn heart_burst(rng: &mut GameRng) -> Vec<Heart> {
    let count = 4 + rng.gen_range(3);
    (0..count)
        .map(|_| Heart {
            glyph: HEART_GLYPHS[rng.gen_range(HEART_GLYPHS.len())],
            drift_px: (rng.unit_f32() - 0.5) * HEART_DRIFT_SPAN_PX,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_centered_is_flat() {
        let tilt = tilt_at(0.5, 0.5, HERO_MAX_DEG);
        assert_eq!(tilt.rotate_x_deg, 0.0);
        assert_eq!(tilt.rotate_y_deg, 0.0);
    }

    #[test]
    fn test_tilt_corners_hit_max() {
        // Top-left corner: pitch fully toward the viewer, yaw fully left.
        let tilt = tilt_at(0.0, 0.0, 8.0);
        assert_eq!(tilt.rotate_x_deg, 8.0);
        assert_eq!(tilt.rotate_y_deg, -8.0);

        let tilt = tilt_at(1.0, 1.0, 8.0);
        assert_eq!(tilt.rotate_x_deg, -8.0);
        assert_eq!(tilt.rotate_y_deg, 8.0);
    }

    #[test]
    fn test_tilt_css_shape() {
        let css = tilt_at(1.0, 0.5, 10.0).css();
        assert_eq!(
            css,
            "perspective(1200px) rotateX(0deg) rotateY(10deg) translateZ(10px)"
        );
    }

    #[test]
    fn test_tilt_css_never_renders_negative_zero() {
        // A cursor on either axis midline produces -0.0 in the math;
        // the string must show a plain 0 like the JS template literal.
        for tilt in [
            tilt_at(0.5, 0.5, HERO_MAX_DEG),
            tilt_at(0.5, 0.0, CARD_MAX_DEG),
            tilt_at(1.0, 0.5, CARD_MAX_DEG),
        ] {
            assert!(!tilt.css().contains("-0deg"), "css: {}", tilt.css());
        }
    }

    #[test]
    fn test_heart_burst_count_and_drift() {
        let mut rng = GameRng::from_seed(3);
        for _ in 0..100 {
            let burst = heart_burst(&mut rng);
            assert!((4..=6).contains(&burst.len()));
            for heart in &burst {
                assert!(HEART_GLYPHS.contains(&heart.glyph));
                assert!(heart.drift_px.abs() <= HEART_DRIFT_SPAN_PX / 2.0);
            }
        }
    }

    #[test]
    fn test_heart_burst_seeded_reproducible() {
        let mut rng1 = GameRng::from_seed(11);
        let mut rng2 = GameRng::from_seed(11);
        assert_eq!(heart_burst(&mut rng1), heart_burst(&mut rng2));
    }
}
