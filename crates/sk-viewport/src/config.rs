//! Viewport configuration
//!
//! Settings for the camera and the transform gizmo that can be serialized
//! and loaded from RON files. Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{camera, gizmo};

/// Errors that can occur while loading configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(String),
    /// The file is not valid RON for the config schema
    #[error("Parse error: {0}")]
    Parse(String),
    /// A value is outside its allowed range
    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Per-axis and highlight colors (RGB)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GizmoColors {
    /// X axis color
    pub x_axis: [f32; 3],
    /// Y axis color
    pub y_axis: [f32; 3],
    /// Z axis color
    pub z_axis: [f32; 3],
    /// Color of the hovered or dragged part
    pub highlight: [f32; 3],
}

impl Default for GizmoColors {
    fn default() -> Self {
        Self {
            x_axis: gizmo::colors::X_AXIS,
            y_axis: gizmo::colors::Y_AXIS,
            z_axis: gizmo::colors::Z_AXIS,
            highlight: gizmo::colors::HIGHLIGHT,
        }
    }
}

impl GizmoColors {
    /// Color for an axis by index (0 = X, 1 = Y, 2 = Z)
    pub fn axis(&self, index: usize) -> [f32; 3] {
        match index {
            0 => self.x_axis,
            1 => self.y_axis,
            _ => self.z_axis,
        }
    }
}

/// Transform gizmo sizes and tolerances
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GizmoConfig {
    /// Shaft length in world units
    pub axis_length: f32,
    /// Rotation ring radius in world units
    pub ring_radius: f32,
    /// Shaft thickness in pixels
    pub line_width_px: f32,
    /// Tip quad edge length in pixels
    pub tip_size_px: f32,
    /// Ring thickness in pixels
    pub ring_width_px: f32,
    /// Extra pick tolerance in pixels
    pub pick_slack_px: f32,
    /// Segments per rotation ring
    pub ring_segments: u32,
    /// Smallest scale a scale drag may produce
    pub scale_floor: f32,
    /// Colors
    pub colors: GizmoColors,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            axis_length: gizmo::AXIS_LENGTH,
            ring_radius: gizmo::RING_RADIUS,
            line_width_px: gizmo::LINE_WIDTH_PX,
            tip_size_px: gizmo::TIP_SIZE_PX,
            ring_width_px: gizmo::RING_WIDTH_PX,
            pick_slack_px: gizmo::PICK_SLACK_PX,
            ring_segments: gizmo::RING_SEGMENTS,
            scale_floor: sk_core::constants::SCALE_FLOOR,
            colors: GizmoColors::default(),
        }
    }
}

impl GizmoConfig {
    /// Pixel radius around a tip center that grabs the tip
    pub fn tip_pick_radius_px(&self) -> f32 {
        self.tip_size_px * 0.5 + self.pick_slack_px
    }

    /// Pixel distance from a shaft that grabs the shaft
    pub fn shaft_pick_radius_px(&self) -> f32 {
        self.line_width_px * 0.5 + self.pick_slack_px
    }

    /// Pixel distance from a ring that grabs the ring
    pub fn ring_pick_radius_px(&self) -> f32 {
        self.ring_width_px * 0.5 + self.pick_slack_px
    }

    /// Scale floor actually applied by drags. Unusable values fall back
    /// to the default floor so scale never reaches zero.
    pub fn effective_scale_floor(&self) -> f32 {
        if self.scale_floor.is_finite() && self.scale_floor > 0.0 {
            self.scale_floor
        } else {
            sk_core::constants::SCALE_FLOOR
        }
    }

    /// Check values that would break gizmo invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale_floor.is_finite() && self.scale_floor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "gizmo.scale_floor must be positive, got {}",
                self.scale_floor
            )));
        }
        Ok(())
    }
}

/// Orbit camera settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Degrees of orbit per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Radius change per scroll step
    pub scroll_speed: f32,
    /// Orbit center
    pub target: [f32; 3],
    /// Initial distance from the target
    pub radius: f32,
    /// Initial yaw in degrees
    pub yaw: f32,
    /// Initial pitch in degrees
    pub pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: camera::FOV_DEGREES,
            near: camera::NEAR,
            far: camera::FAR,
            mouse_sensitivity: camera::MOUSE_SENSITIVITY,
            scroll_speed: camera::SCROLL_SPEED,
            target: [0.0; 3],
            radius: camera::RADIUS,
            yaw: camera::YAW,
            pitch: camera::PITCH,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Gizmo settings
    pub gizmo: GizmoConfig,
    /// Camera settings
    pub camera: CameraConfig,
}

impl EditorConfig {
    /// Parse from a RON string
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.gizmo.validate()?;
        Ok(config)
    }

    /// Load from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_ron_str(&source)?;
        tracing::info!("Loaded editor config from {:?}", path);
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
