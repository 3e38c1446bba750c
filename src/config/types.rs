use serde::{Deserialize, Serialize};

use crate::carousel::gesture::CancelPolicy;
use crate::carousel::CarouselOptions;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub autoplay: AutoplayConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
    /// Slides shown when none are given on the command line.
    #[serde(default)]
    pub slides: Vec<SlideConfig>,
}

/// Automatic advancement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Milliseconds between automatic advances (default: 3000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

/// Pointer swipe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Horizontal travel a drag must exceed to count as a swipe (default: 40).
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    /// Pointer units per terminal column (default: 8).
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    /// Evaluate cancelled gestures like releases instead of dropping them.
    #[serde(default)]
    pub cancel_navigates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityConfig {
    /// Never start autoplay.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Title shown on the carousel region.
    #[serde(default = "default_region_label")]
    pub region_label: String,
}

/// One slide defined inline in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

fn default_interval_ms() -> u64 {
    3000
}

fn default_swipe_threshold() -> f64 {
    40.0
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_region_label() -> String {
    "Slides".to_string()
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            cell_width: default_cell_width(),
            cancel_navigates: false,
        }
    }
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            region_label: default_region_label(),
        }
    }
}

impl GestureConfig {
    pub fn cancel_policy(&self) -> CancelPolicy {
        if self.cancel_navigates {
            CancelPolicy::Evaluate
        } else {
            CancelPolicy::Discard
        }
    }
}

impl Config {
    /// Carousel options for this config with an already-resolved
    /// reduced-motion preference.
    pub fn carousel_options(&self, reduced_motion: bool) -> CarouselOptions {
        CarouselOptions {
            interval: Duration::from_millis(self.autoplay.interval_ms),
            swipe_threshold: self.gesture.swipe_threshold,
            cancel_policy: self.gesture.cancel_policy(),
            reduced_motion,
        }
    }
}
