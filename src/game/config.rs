// game/config.rs

use bevy::prelude::Resource;
use serde::Deserialize;

const WIDGET_JSON: &str = include_str!("../../assets/evasion.json");

/// Tuning for the evasive button, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EvasionTuning {
    /// Inset kept free on every container edge
    pub padding: f32,
    /// Extra reserve on the right edge, on top of `padding`
    pub right_margin: f32,
    /// Per-axis distance under which the button teleports
    pub teleport_radius: f32,
    /// Per-axis distance under which the button is pushed away
    pub nudge_radius: f32,
    /// Nudge displacement is `-distance / repulsion_divisor`
    pub repulsion_divisor: f32,
    /// Gap between the confirm button and the evasive button at mount
    pub placement_gap: f32,
}

impl Default for EvasionTuning {
    fn default() -> Self {
        Self {
            padding: 10.0,
            right_margin: 0.0,
            teleport_radius: 50.0,
            nudge_radius: 100.0,
            repulsion_divisor: 1.5,
            placement_gap: 4.0,
        }
    }
}

impl EvasionTuning {
    fn validate(&self) -> Result<(), String> {
        if self.padding < 0.0 || self.right_margin < 0.0 || self.placement_gap < 0.0 {
            return Err(format!(
                "padding ({}), right_margin ({}) and placement_gap ({}) must not be negative",
                self.padding, self.right_margin, self.placement_gap
            ));
        }
        if self.repulsion_divisor <= 0.0 {
            return Err(format!(
                "repulsion_divisor must be positive, got {}",
                self.repulsion_divisor
            ));
        }
        if self.teleport_radius < 0.0 || self.teleport_radius > self.nudge_radius {
            return Err(format!(
                "expected 0 <= teleport_radius ({}) <= nudge_radius ({})",
                self.teleport_radius, self.nudge_radius
            ));
        }
        Ok(())
    }
}

/// Purely visual flavor for the evasive button
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub max_tilt_degrees: f32,
    pub scale: f32,
    /// How long the button takes to slide to a new spot (display only)
    pub slide_seconds: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            max_tilt_degrees: 5.0,
            scale: 1.1,
            slide_seconds: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub question: String,
    pub confirm_label: String,
    pub evasive_label: String,
    pub confirm_message: String,
    pub evasive_message: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            question: "Do you like me?".to_string(),
            confirm_label: "Yes".to_string(),
            evasive_label: "No".to_string(),
            confirm_message: "I knew it!".to_string(),
            evasive_message: "The feeling is mutual...".to_string(),
        }
    }
}

/// Everything the widget reads at mount time
#[derive(Resource, Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub evasion: EvasionTuning,
    pub style: StyleConfig,
    pub text: TextConfig,
}

impl WidgetConfig {
    /// Load the embedded configuration, falling back to defaults if it is broken
    pub fn load() -> Self {
        match Self::from_json(WIDGET_JSON) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring embedded widget config: {err}");
                Self::default()
            }
        }
    }

    /// Parse and validate a configuration document
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: WidgetConfig =
            serde_json::from_str(json).map_err(|e| format!("Parse error: {e}"))?;

        config.evasion.validate()?;

        if config.style.max_tilt_degrees < 0.0 || config.style.slide_seconds < 0.0 {
            return Err(format!(
                "max_tilt_degrees ({}) and slide_seconds ({}) must not be negative",
                config.style.max_tilt_degrees, config.style.slide_seconds
            ));
        }

        Ok(config)
    }
}
