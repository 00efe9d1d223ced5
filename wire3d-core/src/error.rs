/// Errors reported when building renderer configuration and geometry
use crate::transform::Axis;

/// Invalid construction parameters for a cube renderer
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("scale must be positive, got {0}")]
    NonPositiveScale(f32),
    #[error("scale must be finite")]
    NonFiniteScale,
    #[error("scale {scale} reaches past the i32 display range from center ({x}, {y})")]
    ScaleTooLarge { scale: f32, x: i32, y: i32 },
    #[error("{axis} step of {delta} rad is a full turn or more")]
    StepTooLarge { axis: Axis, delta: f32 },
    #[error("{axis} step must be finite")]
    NonFiniteStep { axis: Axis },
}

/// Inconsistent vertex/edge tables
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireframeError {
    #[error("edge {edge} references vertex {vertex}, but only {vertex_count} vertices exist")]
    EdgeOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
}
