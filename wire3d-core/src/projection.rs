/// Orthogonal projection from object space to display space
use nalgebra::{Point2, Vector3};

/// Maps object-space points onto integer display coordinates.
///
/// The projection is orthogonal: z is dropped, there is no perspective
/// divide. Display x grows to the right, y grows downward as on most
/// raster surfaces, but the mapping itself is a plain scale-and-offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub center: Point2<i32>,
    pub scale: f32,
}

impl Projector {
    pub fn new(center: Point2<i32>, scale: f32) -> Self {
        Self { center, scale }
    }

    /// Project a 3D point to 2D display space
    pub fn project(&self, point: &Vector3<f32>) -> Point2<i32> {
        Point2::new(
            self.center
                .x
                .saturating_add((point.x * self.scale).round() as i32),
            self.center
                .y
                .saturating_add((point.y * self.scale).round() as i32),
        )
    }
}
