//! Motion presets for entrance effects.
//!
//! Presets are immutable `Copy` values. Sections receive them as props and
//! turn them into inline CSS; the browser engine runs the actual transition.

/// A single fade/slide/scale entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPreset {
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Vertical offset in pixels while hidden.
    pub offset_y_px: i32,
    /// Scale factor while hidden.
    pub scale_from: f32,
    pub easing: &'static str,
}

impl MotionPreset {
    /// Fade in while rising 20px.
    pub const FADE_IN_UP: MotionPreset = MotionPreset {
        duration_ms: 600,
        delay_ms: 0,
        offset_y_px: 20,
        scale_from: 1.0,
        easing: "ease-out",
    };

    /// Whole-page fade after the splash screen.
    pub const PAGE_FADE: MotionPreset = MotionPreset {
        duration_ms: 500,
        delay_ms: 0,
        offset_y_px: 0,
        scale_from: 1.0,
        easing: "ease-out",
    };

    /// Returns a copy with a different base delay.
    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    fn hidden_transform(&self) -> String {
        match (self.offset_y_px, self.scale_from == 1.0) {
            (0, true) => "none".to_string(),
            (0, false) => format!("scale({})", self.scale_from),
            (y, true) => format!("translateY({y}px)"),
            (y, false) => format!("translateY({y}px) scale({})", self.scale_from),
        }
    }

    /// Inline style for a transition-driven entrance.
    ///
    /// `extra_delay_ms` is added to the preset delay, used for staggering.
    pub fn transition_style(&self, visible: bool, extra_delay_ms: u32) -> String {
        let delay = self.delay_ms + extra_delay_ms;
        let (opacity, transform) = if visible {
            (1, "none".to_string())
        } else {
            (0, self.hidden_transform())
        };
        format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            d = self.duration_ms,
            e = self.easing,
        )
    }

    /// Inline style running a named CSS keyframe animation once.
    pub fn animation_style(&self, keyframes: &str) -> String {
        format!(
            "animation: {keyframes} {}ms {} {}ms both;",
            self.duration_ms, self.easing, self.delay_ms
        )
    }
}

/// Delay between consecutive children of a staggered group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u32,
}

impl Stagger {
    pub const DEFAULT: Stagger = Stagger { step_ms: 100 };

    /// Extra delay for the child at `index`.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.step_ms.saturating_mul(index as u32)
    }
}

/// Presets handed to each page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub fade_in_up: MotionPreset,
    pub stagger: Stagger,
    pub page_fade: MotionPreset,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            fade_in_up: MotionPreset::FADE_IN_UP,
            stagger: Stagger::DEFAULT,
            page_fade: MotionPreset::PAGE_FADE,
        }
    }
}

/// Presets for the splash screen's staged entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashMotion {
    pub logo: MotionPreset,
    pub title: MotionPreset,
    pub bar: MotionPreset,
    /// Progress fill from empty to full.
    pub progress: MotionPreset,
}

impl Default for SplashMotion {
    fn default() -> Self {
        let pop = MotionPreset {
            duration_ms: 500,
            delay_ms: 0,
            offset_y_px: 0,
            scale_from: 0.8,
            easing: "ease-out",
        };
        Self {
            logo: pop.with_delay(200),
            title: MotionPreset::FADE_IN_UP.with_delay(400),
            bar: pop.with_delay(600),
            progress: MotionPreset {
                duration_ms: 1000,
                delay_ms: 800,
                offset_y_px: 0,
                scale_from: 1.0,
                easing: "ease-in-out",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_fade_in_up_is_offset() {
        let style = MotionPreset::FADE_IN_UP.transition_style(false, 0);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translateY(20px)"));
        assert!(style.contains("600ms ease-out 0ms"));
    }

    #[test]
    fn test_visible_style_clears_transform() {
        let style = MotionPreset::FADE_IN_UP.transition_style(true, 300);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("ease-out 300ms"));
    }

    #[test]
    fn test_scale_only_transform() {
        let splash = SplashMotion::default();
        let style = splash.logo.transition_style(false, 0);
        assert!(style.contains("transform: scale(0.8);"));
        assert!(style.contains("ease-out 200ms"));
    }

    #[test]
    fn test_stagger_delays() {
        let stagger = Stagger::DEFAULT;
        assert_eq!(stagger.delay_for(0), 0);
        assert_eq!(stagger.delay_for(5), 500);
    }

    #[test]
    fn test_progress_animation_style() {
        let splash = SplashMotion::default();
        assert_eq!(
            splash.progress.animation_style("progress-fill"),
            "animation: progress-fill 1000ms ease-in-out 800ms both;"
        );
    }
}
