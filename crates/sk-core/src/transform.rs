//! Object transform: translation, XYZ Euler rotation in degrees, scale
//!
//! The model matrix is `T · R · S` acting on column vectors, with
//! `R = Rx · Ry · Rz`.

use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Placement of an object in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// XYZ Euler angles in degrees
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Rotation matrix `Rx · Ry · Rz`
    pub fn rotation_matrix(&self) -> Mat3 {
        euler_xyz_to_matrix(self.rotation)
    }

    /// Model matrix `T · R · S`
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_mat3(self.rotation_matrix())
            * Mat4::from_scale(self.scale)
    }

    /// Normalized object-local axes in world space.
    ///
    /// Degenerate columns (zero scale on that axis) fall back to the
    /// unscaled rotation column.
    pub fn world_basis(&self) -> [Vec3; 3] {
        let m = self.model_matrix();
        let r = self.rotation_matrix();
        [
            m.x_axis.truncate().try_normalize().unwrap_or(r.x_axis),
            m.y_axis.truncate().try_normalize().unwrap_or(r.y_axis),
            m.z_axis.truncate().try_normalize().unwrap_or(r.z_axis),
        ]
    }

    /// Copy with zero scale components replaced by 1
    pub fn with_nonzero_scale(mut self) -> Self {
        for i in 0..3 {
            if self.scale[i] == 0.0 {
                self.scale[i] = 1.0;
            }
        }
        self
    }

    /// Replace the rotation from a matrix, keeping each angle on the
    /// branch closest to its current value.
    pub fn set_rotation_from_matrix(&mut self, r: &Mat3) {
        let extracted = matrix_to_euler_xyz(r);
        self.rotation = Vec3::new(
            unwrap_degrees(extracted.x, self.rotation.x),
            unwrap_degrees(extracted.y, self.rotation.y),
            unwrap_degrees(extracted.z, self.rotation.z),
        );
    }
}

/// Build `Rx · Ry · Rz` from XYZ Euler angles in degrees
pub fn euler_xyz_to_matrix(degrees: Vec3) -> Mat3 {
    let r = degrees * (std::f32::consts::PI / 180.0);
    Mat3::from_rotation_x(r.x) * Mat3::from_rotation_y(r.y) * Mat3::from_rotation_z(r.z)
}

/// Extract XYZ Euler angles in degrees from `Rx · Ry · Rz`.
///
/// Near gimbal lock (`|r02| ≈ 1`) the Z angle is pinned to zero and the
/// whole residual rotation is assigned to X.
pub fn matrix_to_euler_xyz(m: &Mat3) -> Vec3 {
    // glam is column-major: rij lives in column j, row i
    let r00 = m.x_axis.x;
    let r01 = m.y_axis.x;
    let r02 = m.z_axis.x;
    let r11 = m.y_axis.y;
    let r12 = m.z_axis.y;
    let r21 = m.y_axis.z;
    let r22 = m.z_axis.z;

    let ry = r02.clamp(-1.0, 1.0).asin();
    let (rx, rz) = if r02.abs() < 0.999_999 {
        ((-r12).atan2(r22), (-r01).atan2(r00))
    } else {
        (r21.atan2(r11), 0.0)
    };

    Vec3::new(rx.to_degrees(), ry.to_degrees(), rz.to_degrees())
}

/// Wrap an angle difference into `[-180, 180]` degrees
pub fn wrap_degrees(delta: f32) -> f32 {
    delta - 360.0 * (delta / 360.0).round()
}

/// Shift `new` by a multiple of 360 so it lands closest to `old`
pub fn unwrap_degrees(new: f32, old: f32) -> f32 {
    old + wrap_degrees(new - old)
}
