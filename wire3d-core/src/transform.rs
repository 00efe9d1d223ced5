/// Single-axis rotations and rotation state
use nalgebra::Vector3;
use std::f32::consts::TAU;
use std::fmt;

/// Coordinate axis a rotation is applied about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axes in the order rotations are composed
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Rotate a point about the X axis (right-handed, radians)
pub fn rotate_x(point: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(
        point.x,
        point.y * cos - point.z * sin,
        point.y * sin + point.z * cos,
    )
}

/// Rotate a point about the Y axis (right-handed, radians)
pub fn rotate_y(point: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(
        point.x * cos + point.z * sin,
        point.y,
        -point.x * sin + point.z * cos,
    )
}

/// Rotate a point about the Z axis (right-handed, radians)
pub fn rotate_z(point: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(
        point.x * cos - point.y * sin,
        point.x * sin + point.y * cos,
        point.z,
    )
}

/// Rotate a point about the given axis
pub fn rotate(point: Vector3<f32>, axis: Axis, angle: f32) -> Vector3<f32> {
    match axis {
        Axis::X => rotate_x(point, angle),
        Axis::Y => rotate_y(point, angle),
        Axis::Z => rotate_z(point, angle),
    }
}

/// Bring an angle back into [0, 2π) after a step smaller than a full turn
pub fn wrap_angle(angle: f32) -> f32 {
    if angle >= TAU {
        angle - TAU
    } else if angle < 0.0 {
        let wrapped = angle + TAU;
        // -1e-9 + TAU rounds to TAU in f32
        if wrapped >= TAU {
            0.0
        } else {
            wrapped
        }
    } else {
        angle
    }
}

/// Rotation angles around three axes (in radians)
///
/// Also used for the per-step deltas that advance a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Angle about a single axis
    pub fn angle(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Add one step to every angle, then wrap each into [0, 2π).
    ///
    /// Each step component must be smaller than a full turn in magnitude,
    /// otherwise a single wrap is not enough.
    pub fn advance(&mut self, step: &RotationState) {
        self.x = wrap_angle(self.x + step.x);
        self.y = wrap_angle(self.y + step.y);
        self.z = wrap_angle(self.z + step.z);
    }

    /// Rotate a point by X, then Y, then Z
    pub fn apply(&self, point: Vector3<f32>) -> Vector3<f32> {
        Axis::ALL
            .iter()
            .fold(point, |p, &axis| rotate(p, axis, self.angle(axis)))
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}
