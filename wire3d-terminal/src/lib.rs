/// Terminal frontend: drives a rotating wireframe cube on a character grid
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{CubeConfig, CubeRenderer, Palette};

pub mod renderer;

pub use renderer::{AsciiSurface, Cell};

/// Colors used on the terminal: white edges over the default background
pub const TERMINAL_PALETTE: Palette<Color> = Palette {
    foreground: Color::White,
    background: Color::Reset,
};

/// Main application struct for terminal rendering
pub struct TerminalApp {
    cube: CubeRenderer<AsciiSurface>,
    frame_time: Duration,
    running: bool,
    paused: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    /// Build an app for a grid of the given size
    ///
    /// The top row is reserved for the status line.
    pub fn new(width: usize, height: usize, config: CubeConfig, fps: u32) -> Self {
        let surface = AsciiSurface::new(width, height.saturating_sub(1));
        Self {
            cube: CubeRenderer::new(config, surface, TERMINAL_PALETTE),
            frame_time: Duration::from_millis(1000 / u64::from(fps.max(1))),
            running: true,
            paused: false,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn cube(&self) -> &CubeRenderer<AsciiSurface> {
        &self.cube
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        tracing::info!(frame_time = ?self.frame_time, "starting render loop");
        self.cube.draw();

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            if !self.paused {
                self.cube.update();
            }

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        tracing::info!("render loop stopped");
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if kind == KeyEventKind::Release {
                return Ok(());
            }
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char(' ') | KeyCode::Char('p') => {
                    self.paused = !self.paused;
                    tracing::debug!(paused = self.paused, "toggled pause");
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 1))?;
        self.cube.surface().draw(&mut stdout)?;

        // Status line
        let rotation = self.cube.rotation();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "wire3d | FPS: {:.1} | x {:.2} y {:.2} z {:.2}{} | Space=Pause Q=Quit",
                self.fps,
                rotation.x,
                rotation.y,
                rotation.z,
                if self.paused { " (paused)" } else { "" }
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
