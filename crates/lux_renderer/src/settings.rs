//! Render configuration.

use std::fmt;
use std::str::FromStr;

use lux_math::{colors, Color};
use serde::{Deserialize, Serialize};

use crate::renderer::RenderError;

/// Default offset for shadow ray origins and their lower bound.
pub const DEFAULT_SHADOW_EPSILON: f32 = 1e-4;

/// What each unoccluded light adds to a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LightingMode {
    /// Lambert cosine only, as gray
    ObservedArea,
    /// Incident radiance only
    Radiance,
    /// Material BRDF only
    #[serde(rename = "brdf")]
    Brdf,
    /// Radiance * BRDF * cosine
    #[default]
    Combined,
}

impl LightingMode {
    pub const ALL: [LightingMode; 4] = [
        LightingMode::ObservedArea,
        LightingMode::Radiance,
        LightingMode::Brdf,
        LightingMode::Combined,
    ];

    /// The next mode, wrapping from `Combined` back to `ObservedArea`.
    pub fn cycle(self) -> Self {
        match self {
            LightingMode::ObservedArea => LightingMode::Radiance,
            LightingMode::Radiance => LightingMode::Brdf,
            LightingMode::Brdf => LightingMode::Combined,
            LightingMode::Combined => LightingMode::ObservedArea,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LightingMode::ObservedArea => "observed-area",
            LightingMode::Radiance => "radiance",
            LightingMode::Brdf => "brdf",
            LightingMode::Combined => "combined",
        }
    }
}

impl fmt::Display for LightingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LightingMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LightingMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RenderError::UnknownLightingMode(s.to_string()))
    }
}

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub lighting_mode: LightingMode,
    /// When false every light contributes regardless of occluders
    pub shadows_enabled: bool,
    /// Color for rays that hit nothing
    pub background: Color,
    /// Shadow ray origin offset along the normal, also used as the ray's `min`
    pub shadow_epsilon: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::default(),
            shadows_enabled: true,
            background: colors::BLACK,
            shadow_epsilon: DEFAULT_SHADOW_EPSILON,
        }
    }
}

impl RenderSettings {
    pub fn toggle_shadows(&mut self) {
        self.shadows_enabled = !self.shadows_enabled;
    }

    pub fn cycle_lighting_mode(&mut self) {
        self.lighting_mode = self.lighting_mode.cycle();
    }
}
