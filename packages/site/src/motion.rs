//! # Motion model
//!
//! Entrance and loop animations described as data. The UI renders a [`Motion`]
//! as two inline styles: the starting pose while the element is hidden, and the
//! rest pose with a CSS transition once its [`Trigger`] fires. Browsers do the
//! tweening, so nothing here runs per frame.
//!
//! Units: offsets in pixels, rotation in degrees, times in seconds.

/// A transform state an element can be in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
    pub opacity: f32,
}

impl Pose {
    /// Identity transform at full opacity.
    pub const REST: Pose = Pose {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        opacity: 1.0,
    };

    /// Fully transparent, otherwise at rest.
    pub const INVISIBLE: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    pub fn is_rest(&self) -> bool {
        *self == Pose::REST
    }

    /// CSS `transform` value, `none` for an identity transform.
    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// Inline style declarations for this pose.
    pub fn style(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform(), self.opacity)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

/// Timing curve of a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
    /// Quadratic ease-out
    Power2Out,
    /// Overshoots slightly before settling
    BackOut,
    /// Springy overshoot for pops and icon entrances
    Spring,
}

impl Ease {
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Ease::EaseInOut => "ease-in-out",
            Ease::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
            Ease::Spring => "cubic-bezier(0.5, 1.8, 0.6, 0.9)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: 0.8,
            delay: 0.0,
            ease: Ease::EaseOut,
        }
    }
}

impl Transition {
    /// CSS `transition` value covering transform and opacity.
    pub fn css(&self) -> String {
        let timing = format!("{}s {} {}s", self.duration, self.ease.css(), self.delay);
        format!("transform {timing}, opacity {timing}")
    }
}

/// When a reveal plays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// As soon as the element is mounted.
    Mount,
    /// When the element top crosses `start` of the viewport height.
    /// With `once == false` the reveal reverses when the element drops back
    /// below that line.
    InView { start: f32, once: bool },
}

impl Trigger {
    pub fn is_mount(&self) -> bool {
        matches!(self, Trigger::Mount)
    }
}

/// An entrance animation from `from` to [`Pose::REST`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub transition: Transition,
    pub trigger: Trigger,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            from: Pose::INVISIBLE,
            transition: Transition::default(),
            trigger: Trigger::InView {
                start: 0.85,
                once: true,
            },
        }
    }
}

impl Motion {
    /// Fade in while moving up by `dy` pixels.
    pub fn fade_up(dy: f32) -> Self {
        Self {
            from: Pose {
                y: dy,
                ..Pose::INVISIBLE
            },
            ..Self::default()
        }
    }

    /// Fade in while sliding horizontally from `dx` pixels.
    pub fn slide_x(dx: f32) -> Self {
        Self {
            from: Pose {
                x: dx,
                ..Pose::INVISIBLE
            },
            ..Self::default()
        }
    }

    /// Fade in while growing from `scale`.
    pub fn pop(scale: f32) -> Self {
        Self {
            from: Pose {
                scale,
                ..Pose::INVISIBLE
            },
            transition: Transition {
                duration: 0.5,
                ease: Ease::Spring,
                ..Transition::default()
            },
            ..Self::default()
        }
    }

    pub fn fade() -> Self {
        Self::default()
    }

    pub fn from_pose(mut self, from: Pose) -> Self {
        self.from = from;
        self
    }

    pub fn rotate(mut self, degrees: f32) -> Self {
        self.from.rotate = degrees;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.from.scale = scale;
        self
    }

    pub fn on_mount(mut self) -> Self {
        self.trigger = Trigger::Mount;
        self
    }

    pub fn in_view(mut self, start: f32) -> Self {
        let once = match self.trigger {
            Trigger::InView { once, .. } => once,
            Trigger::Mount => true,
        };
        self.trigger = Trigger::InView {
            start: start_line(start),
            once,
        };
        self
    }

    /// Play again in reverse when scrolled back out of view.
    pub fn reversible(mut self) -> Self {
        if let Trigger::InView { start, .. } = self.trigger {
            self.trigger = Trigger::InView { start, once: false };
        }
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.transition.delay = seconds;
        self
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.transition.duration = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.transition.ease = ease;
        self
    }

    /// Add the delay of the `index`-th item of a list staggered by `step`.
    pub fn stagger(mut self, index: usize, step: f32) -> Self {
        self.transition.delay += Stagger::new(0.0, step).delay(index);
        self
    }

    /// Play at `speed` times the authored pace.
    pub fn scaled(mut self, speed: f32) -> Self {
        if speed.is_finite() && speed > 0.0 {
            self.transition.duration /= speed;
            self.transition.delay /= speed;
        }
        self
    }

    /// Style while waiting for the trigger.
    pub fn hidden_style(&self) -> String {
        format!("{} will-change: transform, opacity;", self.from.style())
    }

    /// Style once the trigger fired. Leaving the transition in place makes the
    /// reverse play when a reversible reveal goes back to hidden.
    pub fn visible_style(&self) -> String {
        format!("{} transition: {};", Pose::REST.style(), self.transition.css())
    }

    /// IntersectionObserver `rootMargin` matching the trigger start line.
    pub fn root_margin(&self) -> String {
        match self.trigger {
            Trigger::InView { start, .. } => {
                let bottom = ((1.0 - start_line(start)) * 100.0).round();
                format!("0px 0px -{bottom}% 0px")
            }
            Trigger::Mount => "0px".to_string(),
        }
    }
}

/// Default viewport fraction for in-view triggers ("top 80%").
pub const DEFAULT_START: f32 = 0.8;

/// Clamp a start line into the viewport, falling back to [`DEFAULT_START`]
/// for NaN or infinite values.
fn start_line(start: f32) -> f32 {
    if start.is_finite() {
        start.clamp(0.0, 1.0)
    } else {
        DEFAULT_START
    }
}

/// Delay schedule for list items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base: f32,
    pub step: f32,
}

impl Stagger {
    pub fn new(base: f32, step: f32) -> Self {
        Self { base, step }
    }

    pub fn delay(&self, index: usize) -> f32 {
        self.base + self.step * index as f32
    }
}

/// Split `text` into characters paired with their staggered delays. Spaces
/// become non-breaking spaces so inline-block letters keep the gap.
pub fn letters(text: &str, stagger: Stagger) -> Vec<(char, f32)> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let c = if c == ' ' { '\u{00A0}' } else { c };
            (c, stagger.delay(i))
        })
        .collect()
}

/// An endless back-and-forth drift for decorative elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Float {
    pub dx: f32,
    pub dy: f32,
    pub rotate: f32,
    pub duration: f32,
    pub delay: f32,
}

impl Float {
    /// Deterministic pseudo-random drift for the `index`-th element.
    ///
    /// dy in [-20, 20], dx in [-10, 10], rotate in [-5, 5], duration in [3, 6].
    pub fn scattered(index: usize) -> Self {
        let unit = |salt: u64| -> f32 {
            let mut h = (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ salt;
            h ^= h >> 33;
            h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
            h ^= h >> 33;
            (h % 10_000) as f32 / 9_999.0
        };
        Self {
            dy: unit(1) * 40.0 - 20.0,
            dx: unit(2) * 20.0 - 10.0,
            rotate: unit(3) * 10.0 - 5.0,
            duration: 3.0 + unit(4) * 3.0,
            delay: unit(5) * 2.0,
        }
    }

    /// Inline style driving the `float` keyframes through custom properties.
    pub fn style(&self) -> String {
        format!(
            "--float-x: {:.1}px; --float-y: {:.1}px; --float-rotate: {:.1}deg; \
             animation: float {:.2}s ease-in-out {:.2}s infinite alternate;",
            self.dx, self.dy, self.rotate, self.duration, self.delay
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose_style() {
        assert_eq!(Pose::REST.style(), "transform: none; opacity: 1;");
        assert!(Pose::REST.is_rest());
    }

    #[test]
    fn test_pose_transform_parts() {
        let pose = Pose {
            x: -50.0,
            y: 0.0,
            scale: 0.8,
            rotate: -10.0,
            opacity: 0.0,
        };
        assert_eq!(
            pose.transform(),
            "translate(-50px, 0px) scale(0.8) rotate(-10deg)"
        );
    }

    #[test]
    fn test_fade_up_hidden_and_visible() {
        let motion = Motion::fade_up(50.0);
        assert!(motion
            .hidden_style()
            .starts_with("transform: translate(0px, 50px); opacity: 0;"));
        let visible = motion.visible_style();
        assert!(visible.starts_with("transform: none; opacity: 1;"));
        assert!(visible.contains("transition: transform 0.8s"));
    }

    #[test]
    fn test_stagger_adds_to_delay() {
        let motion = Motion::fade_up(50.0).delay(0.2).stagger(3, 0.15);
        assert!((motion.transition.delay - 0.65).abs() < 1e-6);
        assert_eq!(Stagger::new(1.0, 0.1).delay(0), 1.0);
        assert!((Stagger::new(1.0, 0.1).delay(4) - 1.4).abs() < 1e-6);
    }

    #[test]
    fn test_root_margin_from_start() {
        assert_eq!(Motion::fade_up(10.0).in_view(0.8).root_margin(), "0px 0px -20% 0px");
        assert_eq!(Motion::fade_up(10.0).in_view(0.85).root_margin(), "0px 0px -15% 0px");
    }

    #[test]
    fn test_non_finite_start_falls_back_to_default() {
        for start in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let motion = Motion::fade_up(10.0).in_view(start);
            assert_eq!(
                motion.trigger,
                Trigger::InView {
                    start: DEFAULT_START,
                    once: true
                }
            );
            assert_eq!(motion.root_margin(), "0px 0px -20% 0px");
        }
        let unchecked = Motion {
            trigger: Trigger::InView {
                start: f32::NAN,
                once: true,
            },
            ..Motion::default()
        };
        assert_eq!(unchecked.root_margin(), "0px 0px -20% 0px");
        assert_eq!(Motion::fade_up(10.0).on_mount().root_margin(), "0px");
    }

    #[test]
    fn test_reversible_only_changes_in_view() {
        let motion = Motion::fade_up(100.0).in_view(0.8).reversible();
        assert_eq!(
            motion.trigger,
            Trigger::InView {
                start: 0.8,
                once: false
            }
        );
        let mounted = Motion::fade_up(100.0).on_mount().reversible();
        assert!(mounted.trigger.is_mount());
    }

    #[test]
    fn test_in_view_keeps_once_flag() {
        let motion = Motion::fade_up(1.0).in_view(0.5).reversible().in_view(0.9);
        assert_eq!(
            motion.trigger,
            Trigger::InView {
                start: 0.9,
                once: false
            }
        );
    }

    #[test]
    fn test_scaled_speed() {
        let motion = Motion::fade_up(10.0).duration(1.0).delay(0.5).scaled(2.0);
        assert_eq!(motion.transition.duration, 0.5);
        assert_eq!(motion.transition.delay, 0.25);
        let unchanged = Motion::fade_up(10.0).duration(1.0).scaled(0.0);
        assert_eq!(unchanged.transition.duration, 1.0);
    }

    #[test]
    fn test_letters_use_nbsp_and_stagger() {
        let out = letters("A B", Stagger::new(1.0, 0.1));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], ('A', 1.0));
        assert_eq!(out[1].0, '\u{00A0}');
        assert!((out[2].1 - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_float_scattered_ranges_and_determinism() {
        for i in 0..64 {
            let f = Float::scattered(i);
            assert!((-20.0..=20.0).contains(&f.dy));
            assert!((-10.0..=10.0).contains(&f.dx));
            assert!((-5.0..=5.0).contains(&f.rotate));
            assert!((3.0..=6.0).contains(&f.duration));
            assert_eq!(f, Float::scattered(i));
        }
        assert_ne!(Float::scattered(0), Float::scattered(1));
    }

    #[test]
    fn test_float_style_mentions_keyframes() {
        let style = Float::scattered(2).style();
        assert!(style.contains("animation: float"));
        assert!(style.contains("infinite alternate"));
    }

    #[test]
    fn test_float_style_exact() {
        let float = Float {
            dx: 4.0,
            dy: -12.5,
            rotate: 3.0,
            duration: 4.5,
            delay: 0.25,
        };
        assert_eq!(
            float.style(),
            "--float-x: 4.0px; --float-y: -12.5px; --float-rotate: 3.0deg; \
             animation: float 4.50s ease-in-out 0.25s infinite alternate;"
        );
    }
}
