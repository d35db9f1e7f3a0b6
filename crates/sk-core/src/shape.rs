//! Shape kinds and creation parameters
//!
//! Every primitive is drawn from one shared unit mesh; creation parameters
//! only set the initial scale.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::constants::unit;

/// Built-in primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Cube,
    Sphere,
    Torus,
    Plane,
    Cone,
    Cylinder,
    Prism,
    Circle,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Cube,
        PrimitiveKind::Sphere,
        PrimitiveKind::Torus,
        PrimitiveKind::Plane,
        PrimitiveKind::Cone,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Prism,
        PrimitiveKind::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Cube => "Cube",
            PrimitiveKind::Sphere => "Sphere",
            PrimitiveKind::Torus => "Torus",
            PrimitiveKind::Plane => "Plane",
            PrimitiveKind::Cone => "Cone",
            PrimitiveKind::Cylinder => "Cylinder",
            PrimitiveKind::Prism => "Prism",
            PrimitiveKind::Circle => "Circle",
        }
    }

    /// Fixed local bounds of the unit mesh
    pub fn local_bounds(self) -> BoundingBox {
        let r = unit::RADIUS;
        match self {
            PrimitiveKind::Plane | PrimitiveKind::Circle => {
                BoundingBox::symmetric(Vec3::new(r, 0.0, r))
            }
            PrimitiveKind::Torus => {
                let xz = unit::TORUS_MAJOR + unit::TORUS_MINOR;
                BoundingBox::symmetric(Vec3::new(xz, unit::TORUS_MINOR, xz))
            }
            PrimitiveKind::Cube
            | PrimitiveKind::Sphere
            | PrimitiveKind::Cone
            | PrimitiveKind::Cylinder
            | PrimitiveKind::Prism => BoundingBox::symmetric(Vec3::splat(0.5)),
        }
    }
}

/// Index into the store's custom mesh table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomMeshIndex(pub usize);

/// What an object is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Primitive(PrimitiveKind),
    Custom(CustomMeshIndex),
}

impl ShapeKind {
    pub fn primitive(&self) -> Option<PrimitiveKind> {
        match self {
            ShapeKind::Primitive(kind) => Some(*kind),
            ShapeKind::Custom(_) => None,
        }
    }
}

impl From<PrimitiveKind> for ShapeKind {
    fn from(kind: PrimitiveKind) -> Self {
        ShapeKind::Primitive(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeParams {
    pub size: f32,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            size: unit::CUBE_EDGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    pub radius: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: unit::RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusParams {
    pub major_radius: f32,
    pub minor_radius: f32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_radius: unit::TORUS_MAJOR,
            minor_radius: unit::TORUS_MINOR,
        }
    }
}

/// Flat rectangle in XZ; `height` is the Z extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneParams {
    pub width: f32,
    pub height: f32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeParams {
    pub radius: f32,
    pub height: f32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: unit::RADIUS,
            height: unit::HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    pub radius: f32,
    pub height: f32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: unit::RADIUS,
            height: unit::HEIGHT,
        }
    }
}

/// Prism parameters. `sides` is accepted but has no effect: every prism
/// shares the triangular unit mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrismParams {
    pub sides: u32,
    pub radius: f32,
    pub height: f32,
}

impl Default for PrismParams {
    fn default() -> Self {
        Self {
            sides: 3,
            radius: unit::RADIUS,
            height: unit::HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscParams {
    pub radius: f32,
}

impl Default for DiscParams {
    fn default() -> Self {
        Self {
            radius: unit::RADIUS,
        }
    }
}

/// Primitive kind together with its creation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PrimitiveShape {
    Cube(CubeParams),
    Sphere(SphereParams),
    Torus(TorusParams),
    Plane(PlaneParams),
    Cone(ConeParams),
    Cylinder(CylinderParams),
    Prism(PrismParams),
    Circle(DiscParams),
}

impl PrimitiveShape {
    /// Default parameters for a kind (scale factor 1)
    pub fn unit(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Cube => PrimitiveShape::Cube(CubeParams::default()),
            PrimitiveKind::Sphere => PrimitiveShape::Sphere(SphereParams::default()),
            PrimitiveKind::Torus => PrimitiveShape::Torus(TorusParams::default()),
            PrimitiveKind::Plane => PrimitiveShape::Plane(PlaneParams::default()),
            PrimitiveKind::Cone => PrimitiveShape::Cone(ConeParams::default()),
            PrimitiveKind::Cylinder => PrimitiveShape::Cylinder(CylinderParams::default()),
            PrimitiveKind::Prism => PrimitiveShape::Prism(PrismParams::default()),
            PrimitiveKind::Circle => PrimitiveShape::Circle(DiscParams::default()),
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveShape::Cube(_) => PrimitiveKind::Cube,
            PrimitiveShape::Sphere(_) => PrimitiveKind::Sphere,
            PrimitiveShape::Torus(_) => PrimitiveKind::Torus,
            PrimitiveShape::Plane(_) => PrimitiveKind::Plane,
            PrimitiveShape::Cone(_) => PrimitiveKind::Cone,
            PrimitiveShape::Cylinder(_) => PrimitiveKind::Cylinder,
            PrimitiveShape::Prism(_) => PrimitiveKind::Prism,
            PrimitiveShape::Circle(_) => PrimitiveKind::Circle,
        }
    }

    /// Per-axis factor that stretches the unit mesh to these parameters.
    /// Unusable dimensions leave their axis at 1.
    pub fn scale_factors(&self) -> Vec3 {
        let r = unit::RADIUS;
        match *self {
            PrimitiveShape::Cube(p) => Vec3::splat(ratio(p.size, unit::CUBE_EDGE)),
            PrimitiveShape::Sphere(p) => Vec3::splat(ratio(p.radius, r)),
            PrimitiveShape::Plane(p) => Vec3::new(ratio(p.width, 1.0), 1.0, ratio(p.height, 1.0)),
            PrimitiveShape::Cone(ConeParams { radius, height })
            | PrimitiveShape::Cylinder(CylinderParams { radius, height })
            | PrimitiveShape::Prism(PrismParams { radius, height, .. }) => {
                let s = ratio(radius, r);
                Vec3::new(s, ratio(height, unit::HEIGHT), s)
            }
            PrimitiveShape::Circle(p) => {
                let s = ratio(p.radius, r);
                Vec3::new(s, 1.0, s)
            }
            PrimitiveShape::Torus(p) => {
                let xz = ratio(
                    p.major_radius + p.minor_radius,
                    unit::TORUS_MAJOR + unit::TORUS_MINOR,
                );
                Vec3::new(xz, ratio(p.minor_radius, unit::TORUS_MINOR), xz)
            }
        }
    }
}

impl From<PrimitiveKind> for PrimitiveShape {
    fn from(kind: PrimitiveKind) -> Self {
        PrimitiveShape::unit(kind)
    }
}

macro_rules! impl_from_params {
    ($($params:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$params> for PrimitiveShape {
                fn from(params: $params) -> Self {
                    PrimitiveShape::$variant(params)
                }
            }
        )*
    };
}

impl_from_params! {
    CubeParams => Cube,
    SphereParams => Sphere,
    TorusParams => Torus,
    PlaneParams => Plane,
    ConeParams => Cone,
    CylinderParams => Cylinder,
    PrismParams => Prism,
    DiscParams => Circle,
}

fn ratio(value: f32, base: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value / base
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_params_scale_one() {
        for kind in PrimitiveKind::ALL {
            let s = PrimitiveShape::unit(kind).scale_factors();
            assert_relative_eq!(s.x, 1.0, epsilon = 1e-6);
            assert_relative_eq!(s.y, 1.0, epsilon = 1e-6);
            assert_relative_eq!(s.z, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_scale_mapping() {
        let sphere = PrimitiveShape::Sphere(SphereParams { radius: 2.0 });
        assert_eq!(sphere.scale_factors(), Vec3::splat(4.0));

        let plane = PrimitiveShape::Plane(PlaneParams {
            width: 3.0,
            height: 2.0,
        });
        assert_eq!(plane.scale_factors(), Vec3::new(3.0, 1.0, 2.0));

        let cyl = PrimitiveShape::Cylinder(CylinderParams {
            radius: 1.0,
            height: 3.0,
        });
        assert_eq!(cyl.scale_factors(), Vec3::new(2.0, 3.0, 2.0));

        let torus = PrimitiveShape::Torus(TorusParams {
            major_radius: 1.0,
            minor_radius: 0.4,
        });
        let s = torus.scale_factors();
        assert_relative_eq!(s.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(s.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_invalid_params_fall_back() {
        let cone = PrimitiveShape::Cone(ConeParams {
            radius: -1.0,
            height: f32::NAN,
        });
        assert_eq!(cone.scale_factors(), Vec3::ONE);

        let cube = PrimitiveShape::Cube(CubeParams { size: 0.0 });
        assert_eq!(cube.scale_factors(), Vec3::ONE);
    }

    #[test]
    fn test_prism_sides_ignored() {
        let a = PrimitiveShape::Prism(PrismParams {
            sides: 3,
            ..Default::default()
        });
        let b = PrimitiveShape::Prism(PrismParams {
            sides: 8,
            ..Default::default()
        });
        assert_eq!(a.scale_factors(), b.scale_factors());
    }

    #[test]
    fn test_local_bounds() {
        let plane = PrimitiveKind::Plane.local_bounds();
        assert_eq!(plane.size().y, 0.0);
        assert_eq!(PrimitiveKind::Circle.local_bounds(), plane);

        let torus = PrimitiveKind::Torus.local_bounds();
        assert_relative_eq!(torus.max.x, 0.7, epsilon = 1e-6);
        assert_relative_eq!(torus.max.y, 0.2, epsilon = 1e-6);

        for kind in [PrimitiveKind::Cube, PrimitiveKind::Cone, PrimitiveKind::Prism] {
            assert_eq!(kind.local_bounds().size(), Vec3::ONE);
        }
    }
}
