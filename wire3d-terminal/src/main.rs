/// wire3d terminal demo - rotating wireframe cube
///
/// Controls:
///   - Space / P: Pause
///   - Q/ESC: Quit
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wire3d_core::{CommandLog, CubeConfig, CubeRenderer, Palette, RotationState};
use wire3d_terminal::TerminalApp;

#[derive(Parser)]
#[command(name = "wire3d-terminal", about = "Rotating wireframe cube in the terminal")]
struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Display units per object-space unit (default: fit the screen)
    #[arg(long, global = true)]
    scale: Option<f32>,

    /// Rotation added about X on every update, in radians
    #[arg(long, global = true, default_value = "0.01", allow_hyphen_values = true)]
    step_x: f32,

    /// Rotation added about Y on every update, in radians
    #[arg(long, global = true, default_value = "0.02", allow_hyphen_values = true)]
    step_y: f32,

    /// Rotation added about Z on every update, in radians
    #[arg(long, global = true, default_value = "0.03", allow_hyphen_values = true)]
    step_z: f32,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the cube interactively (default)
    Run {
        /// Target updates per second
        #[arg(long, default_value = "30")]
        fps: u32,
    },
    /// Print the draw commands of the first frames without a terminal
    Trace {
        /// Number of updates after the first frame
        #[arg(short, long, default_value = "1")]
        frames: u32,
    },
}

impl Cli {
    fn step(&self) -> RotationState {
        RotationState::new(self.step_x, self.step_y, self.step_z)
    }

    fn config(&self, fitted: CubeConfig) -> anyhow::Result<CubeConfig> {
        let mut config = fitted.with_step(self.step());
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        config.validate().context("invalid cube configuration")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Some(Commands::Trace { frames }) => {
            let config = cli.config(CubeConfig::default())?;
            let mut cube = CubeRenderer::new(config, CommandLog::new(), Palette::new("white", "black"));
            cube.draw();
            print_commands(0, cube.surface_mut());
            for frame in 1..=*frames {
                cube.update();
                print_commands(frame, cube.surface_mut());
            }
        }
        Some(Commands::Run { fps }) => run(&cli, *fps)?,
        None => run(&cli, 30)?,
    }

    Ok(())
}

fn run(cli: &Cli, fps: u32) -> anyhow::Result<()> {
    let (width, height) = crossterm::terminal::size().context("failed to query terminal size")?;
    // Top row is the status line
    let fitted = CubeConfig::centered_in(u32::from(width), u32::from(height.saturating_sub(1)));
    let config = cli.config(fitted)?;
    tracing::debug!(width, height, ?config, "starting terminal renderer");

    let mut app = TerminalApp::new(usize::from(width), usize::from(height), config, fps);
    app.run().context("terminal renderer failed")?;
    Ok(())
}

fn print_commands(frame: u32, log: &mut CommandLog<&'static str>) {
    println!("# frame {frame}");
    for command in log.take() {
        println!("{command}");
    }
}
