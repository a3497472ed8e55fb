//! # Site configuration — `portfolio.toml`
//!
//! Presentation settings read once at startup by the web launcher. The file is
//! embedded in the binary, so a change requires a rebuild.
//!
//! ## Structure
//!
//! ```toml
//! [motion]
//! enabled = true   # false renders every element at rest
//! speed = 1.0      # 2.0 plays animations twice as fast
//!
//! [reveal]
//! start = 0.8      # fraction of the viewport a section top must cross
//! reverse = true   # hide sections again when scrolled back above the line
//!
//! [projects]
//! initial_visible = 3
//! ```
//!
//! All structs derive `Default`, so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

use crate::motion::{Ease, Motion, DEFAULT_START};

/// Top-level configuration stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Playback speed multiplier. Values <= 0 are treated as 1.
    #[serde(default = "default_speed")]
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_start")]
    pub start: f32,
    #[serde(default = "default_true")]
    pub reverse: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectsConfig {
    #[serde(default = "default_initial_visible")]
    pub initial_visible: usize,
}

fn default_true() -> bool {
    true
}

fn default_speed() -> f32 {
    1.0
}

fn default_start() -> f32 {
    DEFAULT_START
}

fn default_initial_visible() -> usize {
    3
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: default_speed(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            reverse: true,
        }
    }
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            initial_visible: default_initial_visible(),
        }
    }
}

impl MotionConfig {
    /// Speed multiplier safe to divide by.
    pub fn effective_speed(&self) -> f32 {
        if self.speed.is_finite() && self.speed > 0.0 {
            self.speed
        } else {
            1.0
        }
    }
}

impl RevealConfig {
    /// Scroll reveal applied to whole page sections.
    pub fn section_motion(&self) -> Motion {
        let motion = Motion::fade_up(100.0)
            .duration(1.0)
            .ease(Ease::Power2Out)
            .in_view(self.start);
        if self.reverse {
            motion.reversible()
        } else {
            motion
        }
    }
}

impl PortfolioConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to turn animations off.
    pub fn without_motion(mut self) -> Self {
        self.motion.enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = PortfolioConfig::from_toml("").unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert!(config.motion.enabled);
        assert_eq!(config.reveal.start, 0.8);
        assert!(config.reveal.reverse);
        assert_eq!(config.projects.initial_visible, 3);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = PortfolioConfig::from_toml("[motion]\nspeed = 2.0\n").unwrap();
        assert!(config.motion.enabled);
        assert_eq!(config.motion.speed, 2.0);
        assert_eq!(config.projects, ProjectsConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PortfolioConfig::default().without_motion();
        let text = config.to_toml().unwrap();
        let parsed = PortfolioConfig::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(PortfolioConfig::from_toml("[projects]\ninitial_visible = \"three\"").is_err());
    }

    #[test]
    fn test_section_motion_follows_reveal_settings() {
        use crate::motion::Trigger;

        let reveal = RevealConfig::default();
        assert_eq!(
            reveal.section_motion().trigger,
            Trigger::InView {
                start: 0.8,
                once: false
            }
        );

        let reveal = RevealConfig {
            start: 0.6,
            reverse: false,
        };
        assert_eq!(
            reveal.section_motion().trigger,
            Trigger::InView {
                start: 0.6,
                once: true
            }
        );
    }

    #[test]
    fn test_nan_start_keeps_observer_margin_valid() {
        let config = PortfolioConfig::from_toml("[reveal]\nstart = nan\n").unwrap();
        assert!(config.reveal.start.is_nan());
        let motion = config.reveal.section_motion();
        assert_eq!(motion.root_margin(), "0px 0px -20% 0px");
    }

    #[test]
    fn test_effective_speed_guards_zero() {
        let mut motion = MotionConfig::default();
        motion.speed = 0.0;
        assert_eq!(motion.effective_speed(), 1.0);
        motion.speed = -3.0;
        assert_eq!(motion.effective_speed(), 1.0);
        motion.speed = 1.5;
        assert_eq!(motion.effective_speed(), 1.5);
    }
}
