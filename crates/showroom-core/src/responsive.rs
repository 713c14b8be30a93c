//! Viewport width to model scale selection

use serde::{Deserialize, Serialize};

/// Discrete model scale picked from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportScale {
    /// Phones
    Compact,
    /// Tablets and narrow windows
    Medium,
    #[default]
    Full,
}

impl ViewportScale {
    /// Select a scale using the default breakpoints
    pub fn from_width(width: f32) -> Self {
        ScaleThresholds::default().select(width)
    }

    /// Model scale factor under the default breakpoints
    pub fn factor(self) -> f32 {
        ScaleThresholds::default().factor(self)
    }
}

/// Breakpoints and the scale factor used on each side of them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleThresholds {
    /// Widths strictly below this are `Compact`
    #[serde(default = "default_compact_below")]
    pub compact_below: f32,
    /// Widths strictly below this (and not compact) are `Medium`
    #[serde(default = "default_medium_below")]
    pub medium_below: f32,
    #[serde(default = "default_compact_scale")]
    pub compact_scale: f32,
    #[serde(default = "default_medium_scale")]
    pub medium_scale: f32,
    #[serde(default = "default_full_scale")]
    pub full_scale: f32,
}

impl Default for ScaleThresholds {
    fn default() -> Self {
        Self {
            compact_below: default_compact_below(),
            medium_below: default_medium_below(),
            compact_scale: default_compact_scale(),
            medium_scale: default_medium_scale(),
            full_scale: default_full_scale(),
        }
    }
}

fn default_compact_below() -> f32 {
    600.0
}

fn default_medium_below() -> f32 {
    900.0
}

fn default_compact_scale() -> f32 {
    0.12
}

fn default_medium_scale() -> f32 {
    0.18
}

fn default_full_scale() -> f32 {
    0.2
}

impl ScaleThresholds {
    pub fn select(&self, width: f32) -> ViewportScale {
        if width < self.compact_below {
            ViewportScale::Compact
        } else if width < self.medium_below {
            ViewportScale::Medium
        } else {
            ViewportScale::Full
        }
    }

    pub fn factor(&self, scale: ViewportScale) -> f32 {
        match scale {
            ViewportScale::Compact => self.compact_scale,
            ViewportScale::Medium => self.medium_scale,
            ViewportScale::Full => self.full_scale,
        }
    }
}
