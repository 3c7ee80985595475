//! Declarative animation parameters.
//!
//! Entrances are one-shot fade/slide-ins played by the `fade-up` keyframes in
//! [`crate::styles::LANDING_CSS`]. Each element carries its own delay, offset
//! and duration as inline CSS so the stylesheet stays generic.

/// Default entrance duration, in seconds.
pub const DEFAULT_DURATION: f32 = 0.3;

/// Delay between consecutive grid cards, in seconds.
pub const GRID_STAGGER: f32 = 0.2;

/// A fade-in that optionally slides up from `offset_y` pixels below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub delay: f32,
    pub offset_y: f32,
    pub duration: f32,
}

impl Entrance {
    pub const HERO: Entrance = Entrance::slide(0.0, 20.0).with_duration(0.6);
    pub const HEADING: Entrance = Entrance::slide(0.2, 20.0);
    pub const SUBHEADING: Entrance = Entrance::slide(0.3, 20.0);
    pub const CTA: Entrance = Entrance::slide(0.4, 10.0);
    pub const FOOTER: Entrance = Entrance::fade(0.5);

    pub const fn slide(delay: f32, offset_y: f32) -> Self {
        Self {
            delay,
            offset_y,
            duration: DEFAULT_DURATION,
        }
    }

    pub const fn fade(delay: f32) -> Self {
        Self::slide(delay, 0.0)
    }

    pub const fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Entrance for grid card `index`, staggered after the grid reveals.
    pub fn grid_item(index: usize) -> Self {
        Self::slide(GRID_STAGGER * index as f32, 20.0)
    }

    /// Inline style consumed by the `.enter` class.
    pub fn style(&self) -> String {
        format!(
            "--enter-offset: {}px; animation-delay: {}s; animation-duration: {}s;",
            self.offset_y,
            round_ms(self.delay),
            round_ms(self.duration)
        )
    }
}

/// Pointer-driven transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverMotion {
    /// Scale while hovered.
    pub scale: f32,
    /// Scale while pressed, if the element reacts to presses.
    pub press_scale: Option<f32>,
    /// Upward lift while hovered, in pixels.
    pub lift: f32,
}

impl HoverMotion {
    pub const CARD: HoverMotion = HoverMotion {
        scale: 1.05,
        press_scale: None,
        lift: 10.0,
    };

    pub const CTA: HoverMotion = HoverMotion {
        scale: 1.02,
        press_scale: Some(0.98),
        lift: 0.0,
    };
}

/// Icon wiggle played on the hovered card: rotation keyframes in degrees.
pub const WIGGLE_KEYFRAMES: [f32; 4] = [0.0, -10.0, 10.0, 0.0];
pub const WIGGLE_DURATION: f32 = 0.5;

// Stagger multiplication leaves float noise (0.6000001); three decimals is
// all CSS needs.
fn round_ms(secs: f32) -> f32 {
    (secs * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_sequence_is_ordered() {
        let delays = [
            Entrance::HERO.delay,
            Entrance::HEADING.delay,
            Entrance::SUBHEADING.delay,
            Entrance::CTA.delay,
            Entrance::FOOTER.delay,
        ];
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn hero_container_runs_longer() {
        assert_eq!(Entrance::HERO.duration, 0.6);
        assert_eq!(Entrance::HEADING.duration, DEFAULT_DURATION);
    }

    #[test]
    fn footer_only_fades() {
        assert_eq!(Entrance::FOOTER.offset_y, 0.0);
    }

    #[test]
    fn grid_items_are_staggered() {
        assert_eq!(Entrance::grid_item(0).delay, 0.0);
        assert_eq!(
            Entrance::grid_item(3).style(),
            "--enter-offset: 20px; animation-delay: 0.6s; animation-duration: 0.3s;"
        );
    }

    #[test]
    fn style_renders_css() {
        assert_eq!(
            Entrance::CTA.style(),
            "--enter-offset: 10px; animation-delay: 0.4s; animation-duration: 0.3s;"
        );
    }

    #[test]
    fn wiggle_returns_to_rest() {
        assert_eq!(WIGGLE_KEYFRAMES.first(), WIGGLE_KEYFRAMES.last());
    }
}
