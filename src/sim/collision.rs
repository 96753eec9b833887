//! Convex polygon collision via the separating axis theorem
//!
//! The player is an inverted trapezoid, so a plain bounding-box test would
//! report hits in the empty corners beside its narrow bottom. Instead every
//! edge normal of both shapes is tried as a candidate separating axis.
//!
//! Touching counts as overlap: projections sharing a single endpoint collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Corner points: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
            Vec2::new(self.x, self.y + self.height),
        ]
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Scalar range of a polygon projected onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f32,
    pub max: f32,
}

impl Projection {
    /// Inclusive overlap test
    #[inline]
    pub fn overlaps(&self, other: &Projection) -> bool {
        self.max >= other.min && other.max >= self.min
    }
}

/// Project every vertex onto `axis` and keep the extremes
pub fn project_polygon(axis: Vec2, polygon: &[Vec2]) -> Projection {
    polygon.iter().fold(
        Projection {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        },
        |acc, vertex| {
            let p = vertex.dot(axis);
            Projection {
                min: acc.min.min(p),
                max: acc.max.max(p),
            }
        },
    )
}

/// Perpendiculars of each edge (i -> i+1, wrapping), unnormalized
pub fn edge_normals(polygon: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| {
        let edge = polygon[(i + 1) % n] - polygon[i];
        edge.perp()
    })
}

/// Whether two convex polygons intersect
///
/// Returns `false` as soon as one separating axis is found.
pub fn polygons_intersect(a: &[Vec2], b: &[Vec2]) -> bool {
    edge_normals(a).chain(edge_normals(b)).all(|axis| {
        let pa = project_polygon(axis, a);
        let pb = project_polygon(axis, b);
        pa.overlaps(&pb)
    })
}

/// Whether a convex polygon intersects an axis-aligned rectangle
pub fn polygon_rect_collision(polygon: &[Vec2], rect: &Rect) -> bool {
    polygons_intersect(polygon, &rect.corners())
}
