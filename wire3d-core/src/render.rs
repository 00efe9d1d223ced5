/// Render driver: turns projected segments and erase requests into
/// primitive calls on an injected display surface.
use nalgebra::Point2;
use std::f32::consts::SQRT_2;
use std::fmt;

use crate::geometry::Segment;

/// Minimal drawing contract a display has to offer.
///
/// Calls are fire-and-forget: the renderer never inspects whether a
/// primitive actually reached the hardware.
pub trait DisplaySurface {
    type Color: Copy;

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Self::Color);

    fn fill_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: Self::Color);
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    type Color = S::Color;

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Self::Color) {
        (**self).draw_line(x1, y1, x2, y2, color)
    }

    fn fill_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: Self::Color) {
        (**self).fill_circle(center_x, center_y, radius, color)
    }
}

/// Foreground and background colors of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C> {
    pub foreground: C,
    pub background: C,
}

impl<C> Palette<C> {
    pub fn new(foreground: C, background: C) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

/// Radius of the circle that clears any frame drawn at `scale`.
///
/// Nominally `floor(scale·√2) + floor(scale/2)`. For small scales that
/// falls short of the farthest pixel a rotated cube can light up
/// (half-diagonal `scale·√3`, plus half a pixel of projection rounding and
/// half a pixel of line stepping), so the larger of the two is used.
pub fn erase_radius(scale: f32) -> i32 {
    let nominal = ((scale * SQRT_2).floor() as i32).saturating_add((scale / 2.0).floor() as i32);
    let reach = (scale * 3f32.sqrt() + 1.5).ceil() as i32;
    nominal.max(reach)
}

/// Issues line and circle primitives on a display surface
pub struct RenderDriver<D: DisplaySurface> {
    surface: D,
    palette: Palette<D::Color>,
}

impl<D: DisplaySurface> RenderDriver<D> {
    pub fn new(surface: D, palette: Palette<D::Color>) -> Self {
        Self { surface, palette }
    }

    /// Draw every segment, in order, with one line call each
    pub fn draw_frame(&mut self, segments: &[Segment], color: D::Color) {
        for segment in segments {
            self.surface.draw_line(
                segment.from.x,
                segment.from.y,
                segment.to.x,
                segment.to.y,
                color,
            );
        }
    }

    /// Clear the whole area a cube of this scale can cover
    pub fn erase_region(&mut self, center: Point2<i32>, scale: f32) {
        let radius = erase_radius(scale);
        self.surface
            .fill_circle(center.x, center.y, radius, self.palette.background);
    }

    pub fn palette(&self) -> &Palette<D::Color> {
        &self.palette
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn into_surface(self) -> D {
        self.surface
    }
}

/// A primitive call captured by [`CommandLog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand<C> {
    Line {
        from: Point2<i32>,
        to: Point2<i32>,
        color: C,
    },
    FillCircle {
        center: Point2<i32>,
        radius: i32,
        color: C,
    },
}

impl<C: fmt::Debug> fmt::Display for DrawCommand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Line { from, to, color } => write!(
                f,
                "line ({}, {}) -> ({}, {}) {:?}",
                from.x, from.y, to.x, to.y, color
            ),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => write!(
                f,
                "fill_circle ({}, {}) r={} {:?}",
                center.x, center.y, radius, color
            ),
        }
    }
}

/// Surface that records primitives instead of drawing them
#[derive(Debug, Clone)]
pub struct CommandLog<C> {
    commands: Vec<DrawCommand<C>>,
}

impl<C> CommandLog<C> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand<C>] {
        &self.commands
    }

    /// Hand over everything recorded so far and start empty
    pub fn take(&mut self) -> Vec<DrawCommand<C>> {
        std::mem::take(&mut self.commands)
    }
}

impl<C> Default for CommandLog<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy> DisplaySurface for CommandLog<C> {
    type Color = C;

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: C) {
        self.commands.push(DrawCommand::Line {
            from: Point2::new(x1, y1),
            to: Point2::new(x2, y2),
            color,
        });
    }

    fn fill_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: C) {
        self.commands.push(DrawCommand::FillCircle {
            center: Point2::new(center_x, center_y),
            radius,
            color,
        });
    }
}
