/// wire3d core library - a rotating wireframe cube
///
/// Holds a fixed cube, rotates it about three axes, projects it
/// orthogonally onto display space and issues line/erase primitives to a
/// caller-supplied display surface.

pub mod cube;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod render;
pub mod transform;

// Re-export commonly used types
pub use cube::{CubeConfig, CubeRenderer, Phase};
pub use error::{ConfigError, WireframeError};
pub use geometry::{Edge, Segment, Wireframe, CUBE_EDGES, CUBE_VERTICES};
pub use projection::Projector;
pub use render::{erase_radius, CommandLog, DisplaySurface, DrawCommand, Palette, RenderDriver};
pub use transform::{rotate, rotate_x, rotate_y, rotate_z, Axis, RotationState};
