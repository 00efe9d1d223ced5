/// Rotating cube: configuration, lifecycle and the update step
use nalgebra::Point2;
use std::f32::consts::TAU;

use crate::error::ConfigError;
use crate::geometry::{Segment, Wireframe};
use crate::projection::Projector;
use crate::render::{erase_radius, DisplaySurface, Palette, RenderDriver};
use crate::transform::{Axis, RotationState};

/// Construction parameters, fixed for the lifetime of a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeConfig {
    /// Display coordinates the cube is centered on
    pub center: Point2<i32>,
    /// Display units per object-space unit; an unrotated face spans `2 * scale`
    pub scale: f32,
    /// Angle added about each axis on every update (radians)
    pub step: RotationState,
}

impl CubeConfig {
    pub fn new(center: Point2<i32>, scale: f32) -> Self {
        Self {
            center,
            scale,
            ..Self::default()
        }
    }

    /// Fit the cube and its erase circle inside a `width x height` surface
    pub fn centered_in(width: u32, height: u32) -> Self {
        let scale = (width.min(height) as f32 / 4.0).max(1.0);
        let center = Point2::new((width / 2) as i32, (height / 2) as i32);
        Self::new(center, scale)
    }

    pub fn with_step(mut self, step: RotationState) -> Self {
        self.step = step;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() {
            return Err(ConfigError::NonFiniteScale);
        }
        if self.scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(self.scale));
        }
        // Every projected point and the erase circle stay within center ± radius
        let radius = i64::from(erase_radius(self.scale));
        let reach = i64::from(self.center.x.unsigned_abs().max(self.center.y.unsigned_abs()));
        if radius >= i64::from(i32::MAX) || reach + radius > i64::from(i32::MAX) {
            return Err(ConfigError::ScaleTooLarge {
                scale: self.scale,
                x: self.center.x,
                y: self.center.y,
            });
        }
        for axis in Axis::ALL {
            let delta = self.step.angle(axis);
            if !delta.is_finite() {
                return Err(ConfigError::NonFiniteStep { axis });
            }
            if delta.abs() >= TAU {
                return Err(ConfigError::StepTooLarge { axis, delta });
            }
        }
        Ok(())
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            center: Point2::new(40, 40),
            scale: 20.0,
            step: RotationState::new(0.01, 0.02, 0.03),
        }
    }
}

/// Where a renderer is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, nothing drawn yet
    Idle,
    /// First frame drawn at the initial angles
    Rendering,
    /// Driven by `update`
    Stepping,
}

/// A wireframe cube bound to a display surface.
///
/// Owns its rotation state; every instance rotates independently.
/// `update` takes `&mut self`, so one caller drives it at a time.
pub struct CubeRenderer<D: DisplaySurface> {
    wireframe: Wireframe,
    rotation: RotationState,
    step: RotationState,
    projector: Projector,
    driver: RenderDriver<D>,
    phase: Phase,
}

impl<D: DisplaySurface> CubeRenderer<D> {
    /// Build a renderer without checking `config`.
    ///
    /// The scale must be positive and each step smaller than a full turn;
    /// use [`CubeRenderer::try_new`] when the values come from outside.
    pub fn new(config: CubeConfig, surface: D, palette: Palette<D::Color>) -> Self {
        tracing::debug!(
            center = ?config.center,
            scale = config.scale,
            erase_radius = erase_radius(config.scale),
            step = ?config.step,
            "cube renderer created"
        );
        Self {
            wireframe: Wireframe::cube(),
            rotation: RotationState::zero(),
            step: config.step,
            projector: Projector::new(config.center, config.scale),
            driver: RenderDriver::new(surface, palette),
            phase: Phase::Idle,
        }
    }

    pub fn try_new(
        config: CubeConfig,
        surface: D,
        palette: Palette<D::Color>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, surface, palette))
    }

    /// Draw the cube at the current angles
    pub fn draw(&mut self) {
        self.render_current();
        if self.phase == Phase::Idle {
            self.phase = Phase::Rendering;
        }
    }

    /// Erase the previous frame, advance the angles by one step, redraw
    pub fn update(&mut self) {
        let _span = tracing::trace_span!("cube_update").entered();

        self.driver
            .erase_region(self.projector.center, self.projector.scale);
        self.rotation.advance(&self.step);
        tracing::trace!(
            x = self.rotation.x,
            y = self.rotation.y,
            z = self.rotation.z,
            "rotation advanced"
        );

        self.render_current();
        self.phase = Phase::Stepping;
    }

    /// Segments for the current angles, in edge-table order
    pub fn compute_frame(&self) -> Vec<Segment> {
        self.wireframe.segments(&self.rotation, &self.projector)
    }

    /// Current vertices in display space, in vertex order
    pub fn projected_vertices(&self) -> Vec<Point2<i32>> {
        self.wireframe.project(&self.rotation, &self.projector)
    }

    fn render_current(&mut self) {
        let segments = self.compute_frame();
        let color = self.driver.palette().foreground;
        self.driver.draw_frame(&segments, color);
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn step(&self) -> &RotationState {
        &self.step
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn wireframe(&self) -> &Wireframe {
        &self.wireframe
    }

    pub fn erase_radius(&self) -> i32 {
        erase_radius(self.projector.scale)
    }

    pub fn surface(&self) -> &D {
        self.driver.surface()
    }

    pub fn surface_mut(&mut self) -> &mut D {
        self.driver.surface_mut()
    }

    pub fn into_surface(self) -> D {
        self.driver.into_surface()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandLog, DrawCommand};

    fn renderer() -> CubeRenderer<CommandLog<u16>> {
        CubeRenderer::new(
            CubeConfig::default(),
            CommandLog::new(),
            Palette::new(0xFFFF, 0x0000),
        )
    }

    #[test]
    fn test_starts_idle_at_zero() {
        let cube = renderer();
        assert_eq!(cube.phase(), Phase::Idle);
        assert_eq!(*cube.rotation(), RotationState::zero());
        assert!(cube.surface().commands().is_empty());
    }

    #[test]
    fn test_draw_renders_twelve_lines() {
        let mut cube = renderer();
        cube.draw();
        assert_eq!(cube.phase(), Phase::Rendering);
        assert_eq!(*cube.rotation(), RotationState::zero());

        let commands = cube.surface().commands();
        assert_eq!(commands.len(), 12);
        assert!(commands
            .iter()
            .all(|c| matches!(c, DrawCommand::Line { color: 0xFFFF, .. })));
        assert_eq!(
            commands[0],
            DrawCommand::Line {
                from: Point2::new(20, 20),
                to: Point2::new(20, 60),
                color: 0xFFFF,
            }
        );
    }

    #[test]
    fn test_update_erases_then_draws() {
        let mut cube = renderer();
        cube.draw();
        cube.surface_mut().take();

        cube.update();
        assert_eq!(cube.phase(), Phase::Stepping);

        let commands = cube.surface_mut().take();
        assert_eq!(commands.len(), 13);
        assert_eq!(
            commands[0],
            DrawCommand::FillCircle {
                center: Point2::new(40, 40),
                radius: 38,
                color: 0x0000,
            }
        );
        let drawn: Vec<Segment> = commands[1..]
            .iter()
            .map(|c| match *c {
                DrawCommand::Line { from, to, .. } => Segment::new(from, to),
                other => panic!("unexpected command {other}"),
            })
            .collect();
        assert_eq!(drawn, cube.compute_frame());
    }

    #[test]
    fn test_draw_after_update_keeps_stepping() {
        let mut cube = renderer();
        cube.update();
        cube.draw();
        assert_eq!(cube.phase(), Phase::Stepping);
    }

    #[test]
    fn test_update_advances_by_step() {
        let mut cube = renderer();
        cube.update();
        cube.update();
        let rotation = cube.rotation();
        assert!((rotation.x - 0.02).abs() < 1e-6);
        assert!((rotation.y - 0.04).abs() < 1e-6);
        assert!((rotation.z - 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_instances_rotate_independently() {
        let mut a = renderer();
        let b = renderer();
        a.update();
        assert_ne!(a.rotation(), b.rotation());
        assert_eq!(*b.rotation(), RotationState::zero());
    }

    #[test]
    fn test_centered_in() {
        let config = CubeConfig::centered_in(160, 128);
        assert_eq!(config.center, Point2::new(80, 64));
        assert_eq!(config.scale, 32.0);
        assert!(config.validate().is_ok());

        let tiny = CubeConfig::centered_in(2, 2);
        assert_eq!(tiny.scale, 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let zero = CubeConfig::new(Point2::new(0, 0), 0.0);
        assert_eq!(zero.validate(), Err(ConfigError::NonPositiveScale(0.0)));

        let negative = CubeConfig::new(Point2::new(0, 0), -3.0);
        assert_eq!(negative.validate(), Err(ConfigError::NonPositiveScale(-3.0)));

        let nan = CubeConfig::new(Point2::new(0, 0), f32::NAN);
        assert_eq!(nan.validate(), Err(ConfigError::NonFiniteScale));
    }

    #[test]
    fn test_validate_bounds_scale_by_display_range() {
        let huge = CubeConfig::new(Point2::new(40, 40), 3.0e9);
        assert_eq!(
            huge.validate(),
            Err(ConfigError::ScaleTooLarge {
                scale: 3.0e9,
                x: 40,
                y: 40,
            })
        );
        assert!(CubeRenderer::try_new(huge, CommandLog::<u16>::new(), Palette::new(1, 0)).is_err());

        // Fits near the origin, not next to the edge of the i32 range
        let large = CubeConfig::new(Point2::new(0, 0), 1.0e6);
        assert!(large.validate().is_ok());
        let offset = CubeConfig::new(Point2::new(0, i32::MAX - 1000), 1.0e6);
        assert!(matches!(
            offset.validate(),
            Err(ConfigError::ScaleTooLarge { .. })
        ));
    }

    #[test]
    fn test_large_valid_scale_draws() {
        let config = CubeConfig::new(Point2::new(0, 0), 1.0e6);
        assert!(config.validate().is_ok());
        let mut cube = CubeRenderer::new(config, CommandLog::<u16>::new(), Palette::new(1, 0));
        cube.draw();
        cube.update();
        let radius = i64::from(cube.erase_radius());
        for p in cube.projected_vertices() {
            assert!(i64::from(p.x).abs() <= radius && i64::from(p.y).abs() <= radius);
        }
    }

    #[test]
    fn test_validate_rejects_bad_step() {
        let config = CubeConfig::default().with_step(RotationState::new(0.01, 7.0, 0.03));
        assert_eq!(
            config.validate(),
            Err(ConfigError::StepTooLarge {
                axis: Axis::Y,
                delta: 7.0,
            })
        );

        let config = CubeConfig::default().with_step(RotationState::new(0.01, 0.02, f32::INFINITY));
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteStep { axis: Axis::Z })
        );
    }

    #[test]
    fn test_try_new() {
        let bad = CubeRenderer::try_new(
            CubeConfig::new(Point2::new(10, 10), -1.0),
            CommandLog::<u16>::new(),
            Palette::new(1, 0),
        );
        assert!(bad.is_err());

        let good = CubeRenderer::try_new(
            CubeConfig::default(),
            CommandLog::<u16>::new(),
            Palette::new(1, 0),
        );
        assert!(good.is_ok());
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::StepTooLarge {
            axis: Axis::X,
            delta: 6.5,
        };
        assert_eq!(err.to_string(), "x step of 6.5 rad is a full turn or more");
        assert_eq!(
            ConfigError::NonPositiveScale(-2.0).to_string(),
            "scale must be positive, got -2"
        );
    }
}
