//! Global constants for sk-core

/// Smallest scale component a gizmo drag may produce
pub const SCALE_FLOOR: f32 = 0.001;

/// Rays whose direction is this close to parallel with a plane miss it
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Unit mesh dimensions every primitive kind is authored at
pub mod unit {
    /// Cube edge length
    pub const CUBE_EDGE: f32 = 1.0;
    /// Sphere, cone, cylinder, prism and disc radius
    pub const RADIUS: f32 = 0.5;
    /// Cone, cylinder and prism height along Y
    pub const HEIGHT: f32 = 1.0;
    /// Torus major radius (center to tube center)
    pub const TORUS_MAJOR: f32 = 0.5;
    /// Torus minor radius (tube)
    pub const TORUS_MINOR: f32 = 0.2;
}

/// Tessellation of the shared unit meshes
pub mod tessellation {
    /// Latitude bands of the unit sphere
    pub const SPHERE_STACKS: u32 = 24;
    /// Longitude segments of the unit sphere
    pub const SPHERE_SLICES: u32 = 36;
    /// Segments around the torus ring
    pub const TORUS_MAJOR_SEGMENTS: u32 = 48;
    /// Segments around the torus tube
    pub const TORUS_MINOR_SEGMENTS: u32 = 24;
    /// Segments around cone and cylinder
    pub const ROUND_SEGMENTS: u32 = 32;
    /// Segments around the disc
    pub const DISC_SEGMENTS: u32 = 64;
    /// Sides of the prism unit mesh
    pub const PRISM_SIDES: u32 = 3;
}
