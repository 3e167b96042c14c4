use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use blockwave::field::BlockField;
use blockwave::render::{run_render, RenderArgs};
use blockwave::scene::load_scene_or_default;

fn version_string() -> String {
    match option_env!("BLOCKWAVE_GIT_HASH") {
        Some(hash) => format!("{} ({hash})", env!("CARGO_PKG_VERSION")),
        None => env!("CARGO_PKG_VERSION").to_owned(),
    }
}

#[derive(Debug, Parser)]
#[command(name = "blockwave")]
#[command(about = "Staggered reroll animation for a grid of extruded blocks")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a scene file and print a summary.
    Check {
        scene: PathBuf,
    },
    /// Render a frame sequence to PNG files without a window.
    Render {
        scene: Option<PathBuf>,
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
        #[arg(long = "frames", default_value_t = 240)]
        frames: u32,
        /// Reroll cadence in frames (first reroll fires on frame 0).
        #[arg(long = "reroll-every")]
        reroll_every: Option<u32>,
    },
    /// Open an interactive preview window (Space rerolls, drag orbits).
    #[cfg(feature = "play")]
    Play {
        scene: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { scene } => run_check(&scene),
        Commands::Render {
            scene,
            output,
            frames,
            reroll_every,
        } => run_render(
            scene.as_deref(),
            &RenderArgs {
                output_dir: output,
                frames,
                reroll_every,
            },
        ),
        #[cfg(feature = "play")]
        Commands::Play { scene } => blockwave::play::run_play(scene.as_deref()),
    }
}

fn run_check(scene_path: &Path) -> Result<()> {
    let scene = load_scene_or_default(Some(scene_path))?;
    let field = BlockField::new(&scene);

    println!(
        "OK: {} ({}x{} grid, {} cells, seed {})",
        scene_path.display(),
        scene.grid.row_length,
        scene.grid.row_length,
        field.cell_count(),
        scene.seed
    );
    println!(
        "Animation: max_delay {}, time_factor {}, heights {}..{}",
        scene.animation.max_delay, scene.animation.time_factor, scene.heights.min, scene.heights.max
    );
    println!(
        "Output: {}x{} @ {} fps",
        scene.output.resolution.width, scene.output.resolution.height, scene.output.fps
    );
    Ok(())
}
