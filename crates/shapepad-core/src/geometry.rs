//! Integer geometry primitives and containment tests.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point translated by the given deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance to another point: `max(|dx|, |dy|)`.
    ///
    /// This is the drag-to-size metric: the bounding square of a shape being
    /// created follows the larger axis delta, so sizing behaves the same in
    /// every direction.
    pub fn chebyshev_distance(self, other: Point) -> i32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }

    /// Euclidean distance to another point.
    pub fn euclidean_distance(self, other: Point) -> f64 {
        f64::from(other.x - self.x).hypot(f64::from(other.y - self.y))
    }
}

/// An axis-aligned bounding box with inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// The square of side `2 * radius` centered at `center`.
    pub fn centered(center: Point, radius: i32) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Containment test, inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// Even-odd ray-casting point-in-polygon test.
///
/// For each edge straddling the point's scanline, the edge's X intercept is
/// computed by linear interpolation; every intercept left of the point toggles
/// the inside flag. Degenerate input (fewer than 3 vertices) is never
/// contained.
pub fn polygon_contains(vertices: &[Point], point: Point) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;

    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y < point.y && vj.y >= point.y) || (vj.y < point.y && vi.y >= point.y) {
            let t = f64::from(point.y - vi.y) / f64::from(vj.y - vi.y);
            let intercept = f64::from(vi.x) + t * f64::from(vj.x - vi.x);
            if intercept < f64::from(point.x) {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Vertices of the triangle inscribed in the bounding square: apex at the top
/// center, base corners at the bottom.
pub fn triangle_vertices(center: Point, radius: i32) -> [Point; 3] {
    [
        Point::new(center.x, center.y - radius),
        Point::new(center.x - radius, center.y + radius),
        Point::new(center.x + radius, center.y + radius),
    ]
}

/// Vertices of the regular hexagon at `i * 60°` steps, truncated to integer
/// coordinates.
pub fn hexagon_vertices(center: Point, radius: i32) -> [Point; 6] {
    let mut vertices = [Point::ZERO; 6];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle = i as f64 * PI / 3.0;
        *vertex = Point::new(
            (f64::from(center.x) + f64::from(radius) * angle.cos()) as i32,
            (f64::from(center.y) + f64::from(radius) * angle.sin()) as i32,
        );
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_distance() {
        let origin = Point::new(100, 100);
        assert_eq!(origin.chebyshev_distance(Point::new(103, 100)), 3);
        assert_eq!(origin.chebyshev_distance(Point::new(110, 100)), 10);
        assert_eq!(origin.chebyshev_distance(Point::new(90, 95)), 10);
        assert_eq!(origin.chebyshev_distance(origin), 0);
    }

    #[test]
    fn test_bounds_inclusive_edges() {
        let bounds = Bounds::centered(Point::new(50, 50), 10);
        assert!(bounds.contains(Point::new(40, 40)));
        assert!(bounds.contains(Point::new(60, 60)));
        assert!(bounds.contains(Point::new(40, 60)));
        assert!(!bounds.contains(Point::new(39, 50)));
        assert!(!bounds.contains(Point::new(50, 61)));
    }

    #[test]
    fn test_polygon_degenerate_input() {
        assert!(!polygon_contains(&[], Point::ZERO));
        assert!(!polygon_contains(&[Point::ZERO], Point::ZERO));
        assert!(!polygon_contains(
            &[Point::new(0, 0), Point::new(10, 10)],
            Point::new(5, 5)
        ));
    }

    #[test]
    fn test_polygon_contains_square() {
        let square = [
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        assert!(polygon_contains(&square, Point::new(5, 5)));
        assert!(!polygon_contains(&square, Point::new(15, 5)));
        assert!(!polygon_contains(&square, Point::new(5, -1)));
    }

    #[test]
    fn test_triangle_vertices() {
        let vertices = triangle_vertices(Point::new(100, 100), 10);
        assert_eq!(vertices[0], Point::new(100, 90));
        assert_eq!(vertices[1], Point::new(90, 110));
        assert_eq!(vertices[2], Point::new(110, 110));
    }

    #[test]
    fn test_hexagon_vertices_truncated() {
        let vertices = hexagon_vertices(Point::new(0, 0), 10);
        assert_eq!(vertices[0], Point::new(10, 0));
        assert_eq!(vertices[1], Point::new(5, 8));
        assert_eq!(vertices[3], Point::new(-10, 0));
        assert_eq!(vertices[5], Point::new(5, -8));
    }

    #[test]
    fn test_hexagon_first_vertex_contained() {
        let center = Point::new(200, 200);
        let vertices = hexagon_vertices(center, 10);
        assert!(polygon_contains(&vertices, vertices[0]));
        assert!(polygon_contains(&vertices, center));
        // Inside the bounding square but above the hexagon's top edge.
        assert!(!polygon_contains(&vertices, Point::new(200, 190)));
    }
}
