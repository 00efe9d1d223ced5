/// Wireframe geometry: object-space vertices, edge topology, projected segments
use nalgebra::{Point2, Vector3};

use crate::error::WireframeError;
use crate::projection::Projector;
use crate::transform::RotationState;

/// A pair of vertex indices joined by a line
pub type Edge = (usize, usize);

/// Corners of the unit cube, coordinates in {-1, +1}
pub const CUBE_VERTICES: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
];

/// Cube edges in draw order
pub const CUBE_EDGES: [Edge; 12] = [
    // Front face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // Back face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // Connecting edges
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// A projected edge in display space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Point2<i32>,
    pub to: Point2<i32>,
}

impl Segment {
    pub fn new(from: Point2<i32>, to: Point2<i32>) -> Self {
        Self { from, to }
    }
}

/// A polyhedron outline: fixed vertices plus the edges connecting them
#[derive(Debug, Clone)]
pub struct Wireframe {
    vertices: Vec<Vector3<f32>>,
    edges: Vec<Edge>,
}

impl Wireframe {
    /// Build a wireframe, checking that every edge references a real vertex
    pub fn new(vertices: Vec<Vector3<f32>>, edges: Vec<Edge>) -> Result<Self, WireframeError> {
        let vertex_count = vertices.len();
        for (index, &(a, b)) in edges.iter().enumerate() {
            if let Some(&vertex) = [a, b].iter().find(|&&v| v >= vertex_count) {
                return Err(WireframeError::EdgeOutOfRange {
                    edge: index,
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(Self { vertices, edges })
    }

    /// The unit cube centered at the origin
    pub fn cube() -> Self {
        Self {
            vertices: CUBE_VERTICES.iter().map(|&v| Vector3::from(v)).collect(),
            edges: CUBE_EDGES.to_vec(),
        }
    }

    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Base vertices rotated by X, then Y, then Z
    pub fn rotated(&self, rotation: &RotationState) -> Vec<Vector3<f32>> {
        self.vertices.iter().map(|&v| rotation.apply(v)).collect()
    }

    /// Rotated vertices projected to display space, in vertex order
    pub fn project(&self, rotation: &RotationState, projector: &Projector) -> Vec<Point2<i32>> {
        self.rotated(rotation)
            .iter()
            .map(|v| projector.project(v))
            .collect()
    }

    /// Pair projected points into segments following the edge table.
    /// `points` holds one entry per vertex, as `project` returns.
    fn connect(&self, points: &[Point2<i32>]) -> Vec<Segment> {
        debug_assert_eq!(points.len(), self.vertices.len());
        self.edges
            .iter()
            .map(|&(a, b)| Segment::new(points[a], points[b]))
            .collect()
    }

    /// One segment per edge for the given orientation
    pub fn segments(&self, rotation: &RotationState, projector: &Projector) -> Vec<Segment> {
        self.connect(&self.project(rotation, projector))
    }
}
