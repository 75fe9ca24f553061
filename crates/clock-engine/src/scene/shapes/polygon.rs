use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// One polygon corner with its own color.
///
/// Colors are interpolated across the filled interior, which is how shaded
/// (gradient) shapes are expressed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolygonVertex {
    pub pos: Vec2,
    pub color: Color,
}

impl PolygonVertex {
    #[inline]
    pub const fn new(pos: Vec2, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Filled polygon draw payload (logical pixels).
///
/// The outline is filled as a triangle fan around the vertex centroid, so the
/// polygon must be star-shaped with respect to that centroid. Every clock shape
/// (circles, rounded squares, hands, dial marks, menu boxes) satisfies this.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub vertices: Vec<PolygonVertex>,
}

impl PolygonCmd {
    /// Average position and color of the outline.
    pub fn centroid(&self) -> PolygonVertex {
        let n = self.vertices.len().max(1) as f32;
        let (mut px, mut py) = (0.0f32, 0.0f32);
        let mut c = [0.0f32; 4];
        for v in &self.vertices {
            px += v.pos.x;
            py += v.pos.y;
            c[0] += v.color.r;
            c[1] += v.color.g;
            c[2] += v.color.b;
            c[3] += v.color.a;
        }
        PolygonVertex::new(
            Vec2::new(px / n, py / n),
            Color { r: c[0] / n, g: c[1] / n, b: c[2] / n, a: c[3] / n },
        )
    }

    /// Number of triangles produced by [`triangles`](Self::triangles).
    #[inline]
    pub fn triangle_count(&self) -> usize {
        if self.vertices.len() < 3 { 0 } else { self.vertices.len() }
    }

    /// Fan triangulation around the centroid, one triangle per outline edge.
    ///
    /// Degenerate outlines (fewer than 3 vertices) produce nothing.
    pub fn triangles(&self) -> impl Iterator<Item = [PolygonVertex; 3]> + '_ {
        let n = self.triangle_count();
        let center = self.centroid();
        (0..n).map(move |i| [center, self.vertices[i], self.vertices[(i + 1) % n]])
    }
}

impl DrawList {
    /// Records a polygon with per-vertex colors.
    #[inline]
    pub fn push_shaded_polygon(&mut self, z: ZIndex, vertices: Vec<PolygonVertex>) {
        self.push(z, DrawCmd::Polygon(PolygonCmd { vertices }));
    }

    /// Records a single-color polygon.
    pub fn push_polygon(&mut self, z: ZIndex, points: &[Vec2], color: Color) {
        let vertices = points.iter().map(|&p| PolygonVertex::new(p, color)).collect();
        self.push_shaded_polygon(z, vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PolygonCmd {
        let c = Color::gray(1.0);
        PolygonCmd {
            vertices: vec![
                PolygonVertex::new(Vec2::new(0.0, 0.0), c),
                PolygonVertex::new(Vec2::new(2.0, 0.0), c),
                PolygonVertex::new(Vec2::new(2.0, 2.0), c),
                PolygonVertex::new(Vec2::new(0.0, 2.0), c),
            ],
        }
    }

    #[test]
    fn centroid_of_square_is_center() {
        assert_eq!(square().centroid().pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn fan_has_one_triangle_per_edge() {
        let sq = square();
        let tris: Vec<_> = sq.triangles().collect();
        assert_eq!(tris.len(), 4);
        // Last triangle closes the outline back to the first vertex.
        assert_eq!(tris[3][1].pos, Vec2::new(0.0, 2.0));
        assert_eq!(tris[3][2].pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn degenerate_outline_yields_nothing() {
        let line = PolygonCmd {
            vertices: vec![
                PolygonVertex::new(Vec2::zero(), Color::gray(0.0)),
                PolygonVertex::new(Vec2::new(1.0, 1.0), Color::gray(0.0)),
            ],
        };
        assert_eq!(line.triangles().count(), 0);
    }

    #[test]
    fn centroid_blends_vertex_colors() {
        let cmd = PolygonCmd {
            vertices: vec![
                PolygonVertex::new(Vec2::zero(), Color::gray(0.0)),
                PolygonVertex::new(Vec2::new(1.0, 0.0), Color::gray(1.0)),
            ],
        };
        assert_eq!(cmd.centroid().color, Color::gray(0.5));
    }
}
