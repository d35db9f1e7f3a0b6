//! Gizmo geometry generation
//!
//! Produces plain vertex data for the renderer each frame. Shafts and rings
//! are emitted as screen-space-thick line quads that a vertex shader expands
//! by `width_px`; tips are quads expanded by `size_px` around their center.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::{Axis, GizmoFrame, GizmoMode, GizmoPart};
use crate::config::GizmoConfig;

/// Corner of a billboarded line quad
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Segment start in world space
    pub start: [f32; 3],
    /// Segment end in world space
    pub end: [f32; 3],
    /// 0 at the start edge, 1 at the end edge
    pub side: f32,
    /// -1 or +1 across the line
    pub corner: f32,
    /// RGB
    pub color: [f32; 3],
    /// Thickness in pixels
    pub width_px: f32,
}

/// Corner of a tip quad
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TipVertex {
    /// Tip center in world space
    pub center: [f32; 3],
    /// Corner offset in units of half the tip size
    pub corner: [f32; 2],
    /// RGB
    pub color: [f32; 3],
    /// Edge length in pixels
    pub size_px: f32,
}

/// Indexed triangle lists for one frame of gizmo drawing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GizmoGeometry {
    /// Line quad corners
    pub lines: Vec<LineVertex>,
    /// Triangles over `lines`
    pub line_indices: Vec<u32>,
    /// Tip quad corners
    pub tips: Vec<TipVertex>,
    /// Triangles over `tips`
    pub tip_indices: Vec<u32>,
}

impl GizmoGeometry {
    /// True when nothing would be drawn
    pub fn is_empty(&self) -> bool {
        self.line_indices.is_empty() && self.tip_indices.is_empty()
    }

    /// Number of line segments
    pub fn segment_count(&self) -> usize {
        self.lines.len() / 4
    }

    /// Number of tips
    pub fn tip_count(&self) -> usize {
        self.tips.len() / 4
    }

    fn push_segment(&mut self, start: Vec3, end: Vec3, color: [f32; 3], width_px: f32) {
        let base = self.lines.len() as u32;
        for (side, corner) in [(0.0, -1.0), (0.0, 1.0), (1.0, 1.0), (1.0, -1.0)] {
            self.lines.push(LineVertex {
                start: start.to_array(),
                end: end.to_array(),
                side,
                corner,
                color,
                width_px,
            });
        }
        self.line_indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn push_tip(&mut self, center: Vec3, color: [f32; 3], size_px: f32) {
        let base = self.tips.len() as u32;
        for corner in [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]] {
            self.tips.push(TipVertex {
                center: center.to_array(),
                corner,
                color,
                size_px,
            });
        }
        self.tip_indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Build the gizmo for `mode` at `frame`. `highlight` recolors one part.
pub fn build_gizmo_geometry(
    mode: GizmoMode,
    frame: &GizmoFrame,
    config: &GizmoConfig,
    highlight: Option<GizmoPart>,
) -> GizmoGeometry {
    let mut geometry = GizmoGeometry::default();
    let color = |part: GizmoPart| {
        if highlight == Some(part) {
            config.colors.highlight
        } else {
            config.colors.axis(part.axis().index())
        }
    };

    match mode {
        GizmoMode::None => {}
        GizmoMode::Translate | GizmoMode::Scale => {
            for axis in Axis::ALL {
                let end = frame.origin + frame.axis(axis) * config.axis_length;
                geometry.push_segment(
                    frame.origin,
                    end,
                    color(GizmoPart::Move(axis)),
                    config.line_width_px,
                );
                if mode == GizmoMode::Scale {
                    geometry.push_tip(end, color(GizmoPart::Tip(axis)), config.tip_size_px);
                }
            }
        }
        GizmoMode::Rotate => {
            let segments = config.ring_segments.max(3);
            for axis in Axis::ALL {
                let ring_color = color(GizmoPart::Rotate(axis));
                let points = ring_points(frame.origin, frame.axis(axis), config.ring_radius, segments);
                for i in 0..points.len() {
                    let next = points[(i + 1) % points.len()];
                    geometry.push_segment(points[i], next, ring_color, config.ring_width_px);
                }
            }
        }
    }

    geometry
}

/// Closed polyline of a circle around `normal`
fn ring_points(center: Vec3, normal: Vec3, radius: f32, segments: u32) -> Vec<Vec3> {
    let n = normal.normalize_or_zero();
    let u = if n.z.abs() < 0.9 { n.cross(Vec3::Z) } else { n.cross(Vec3::Y) }.normalize_or_zero();
    let v = n.cross(u);

    (0..segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * std::f32::consts::TAU;
            center + (u * t.cos() + v * t.sin()) * radius
        })
        .collect()
}
