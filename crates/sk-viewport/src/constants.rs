//! Default values for viewport configuration

/// Camera defaults
pub mod camera {
    /// Vertical field of view in degrees
    pub const FOV_DEGREES: f32 = 45.0;
    /// Near clipping plane
    pub const NEAR: f32 = 0.1;
    /// Far clipping plane
    pub const FAR: f32 = 100.0;
    /// Degrees of orbit per pixel of mouse motion
    pub const MOUSE_SENSITIVITY: f32 = 0.1;
    /// Orbit radius change per scroll step
    pub const SCROLL_SPEED: f32 = 0.5;
    /// Initial distance from the target
    pub const RADIUS: f32 = 3.0;
    /// Smallest orbit radius
    pub const MIN_RADIUS: f32 = 0.1;
    /// Initial yaw in degrees
    pub const YAW: f32 = -135.0;
    /// Initial pitch in degrees
    pub const PITCH: f32 = 20.0;
    /// Pitch limit in degrees
    pub const PITCH_LIMIT: f32 = 89.0;
}

/// Gizmo defaults
pub mod gizmo {
    /// Shaft length in world units
    pub const AXIS_LENGTH: f32 = 1.0;
    /// Ring radius in world units
    pub const RING_RADIUS: f32 = 1.0;
    /// Shaft thickness in pixels
    pub const LINE_WIDTH_PX: f32 = 4.0;
    /// Tip quad edge in pixels
    pub const TIP_SIZE_PX: f32 = 14.0;
    /// Ring thickness in pixels
    pub const RING_WIDTH_PX: f32 = 4.0;
    /// Extra pick tolerance in pixels
    pub const PICK_SLACK_PX: f32 = 3.0;
    /// Segments per rotation ring
    pub const RING_SEGMENTS: u32 = 64;

    /// Axis colors
    pub mod colors {
        /// X axis color (red)
        pub const X_AXIS: [f32; 3] = [0.9, 0.2, 0.2];
        /// Y axis color (green)
        pub const Y_AXIS: [f32; 3] = [0.2, 0.85, 0.2];
        /// Z axis color (blue)
        pub const Z_AXIS: [f32; 3] = [0.2, 0.4, 1.0];
        /// Hovered or dragged part
        pub const HIGHLIGHT: [f32; 3] = [1.0, 0.85, 0.1];
    }
}
