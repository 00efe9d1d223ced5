/// Character-grid display surface for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::DisplaySurface;

/// One character cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: Color::Reset,
    };

    pub fn is_blank(&self) -> bool {
        self.glyph == ' '
    }
}

/// Rasterizes lines and filled circles into a grid of terminal cells
pub struct AsciiSurface {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl AsciiSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Cell at a grid position, `None` outside the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Positions of every non-blank cell
    pub fn lit_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_blank())
            .map(move |(idx, _)| ((idx % self.width) as i32, (idx / self.width) as i32))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    fn plot(&mut self, x: i64, y: i64, cell: Cell) {
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return;
        };
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Cut a segment down to the part inside the grid (Liang-Barsky)
    fn clip(&self, from: (i64, i64), to: (i64, i64)) -> Option<((i64, i64), (i64, i64))> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let (max_x, max_y) = (self.width as i64 - 1, self.height as i64 - 1);
        let inside = |(x, y): (i64, i64)| (0..=max_x).contains(&x) && (0..=max_y).contains(&y);
        if inside(from) && inside(to) {
            return Some((from, to));
        }

        let (x1, y1) = (from.0 as f64, from.1 as f64);
        let (dx, dy) = ((to.0 - from.0) as f64, (to.1 - from.1) as f64);
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        for (p, q) in [
            (-dx, x1),
            (dx, max_x as f64 - x1),
            (-dy, y1),
            (dy, max_y as f64 - y1),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return None;
                    }
                    t0 = t0.max(r);
                } else {
                    if r < t0 {
                        return None;
                    }
                    t1 = t1.min(r);
                }
            }
        }

        let point = |t: f64| {
            (
                ((x1 + t * dx).round() as i64).clamp(0, max_x),
                ((y1 + t * dy).round() as i64).clamp(0, max_y),
            )
        };
        Some((point(t0), point(t1)))
    }

    /// Queue the whole grid, row by row, to a writer
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in self.cells.chunks(self.width.max(1)) {
            let mut current = None;
            for cell in row {
                if current != Some(cell.color) {
                    writer.queue(SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.glyph))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    /// Render the grid as plain text, one line per row
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|cell| cell.glyph));
            out.push('\n');
        }
        out
    }
}

/// Glyph that best follows a line's direction (y grows downward)
fn line_glyph(dx: i64, dy: i64) -> char {
    if dx == 0 && dy == 0 {
        return '+';
    }
    let (ax, ay) = (dx.abs(), dy.abs());
    if ay * 2 <= ax {
        '-'
    } else if ax * 2 <= ay {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

impl DisplaySurface for AsciiSurface {
    type Color = Color;

    /// Bresenham line, clipped to the grid
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let (from, to) = ((i64::from(x1), i64::from(y1)), (i64::from(x2), i64::from(y2)));
        let cell = Cell {
            glyph: line_glyph(to.0 - from.0, to.1 - from.1),
            color,
        };
        let Some(((x1, y1), (x2, y2))) = self.clip(from, to) else {
            return;
        };

        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            self.plot(x, y, cell);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Blank every cell within `radius` of the center
    fn fill_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: Color) {
        if radius < 0 || self.width == 0 || self.height == 0 {
            return;
        }
        let cell = Cell { glyph: ' ', color };
        let (cx, cy, r) = (i64::from(center_x), i64::from(center_y), i64::from(radius));
        let r2 = r * r;
        let (max_x, max_y) = (self.width as i64 - 1, self.height as i64 - 1);

        // Only the part of the disc that overlaps the grid
        for dy in (-r).max(-cy)..=r.min(max_y - cy) {
            for dx in (-r).max(-cx)..=r.min(max_x - cx) {
                if dx * dx + dy * dy <= r2 {
                    self.plot(cx + dx, cy + dy, cell);
                }
            }
        }
    }
}
