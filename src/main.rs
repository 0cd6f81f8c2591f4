use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use gridscan::error::{IndexError, LoadError, NumberOverflow};
use gridscan::schematic::Schematic;
use gridscan::{Coord, Grid};

#[derive(Parser)]
#[command(name = "gridscan")]
#[command(version)]
#[command(about = "Load character grids and answer questions about them")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter used when RUST_LOG is not set (e.g. warn, debug, gridscan=trace)
    #[arg(long, global = true, env = "GRIDSCAN_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the dimensions and contents of a grid
    Show {
        path: PathBuf,
        /// Transform the grid before printing it
        #[arg(short, long)]
        transform: Option<Transform>,
    },
    /// Print the (row, col) coordinate of a linear cell index
    Locate { path: PathBuf, index: usize },
    /// Print the linear cell index of a (row, col) coordinate
    Index { path: PathBuf, row: usize, col: usize },
    /// Print the part number sum and the gear ratio sum of an engine schematic
    Schematic { path: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Transform {
    Transpose,
    RotateCw,
    RotateCcw,
    MirrorRows,
    MirrorCols,
    Flip,
}

impl Transform {
    fn apply(self, grid: &Grid) -> Grid {
        match self {
            Transform::Transpose => grid.transpose(),
            Transform::RotateCw => grid.rotate_clockwise(),
            Transform::RotateCcw => grid.rotate_counterclockwise(),
            Transform::MirrorRows => grid.mirror_rows(),
            Transform::MirrorCols => grid.mirror_cols(),
            Transform::Flip => grid.flip(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Schematic(#[from] NumberOverflow),
}

fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Show { path, transform } => {
            let mut grid = Grid::from_file(&path)?;
            if let Some(transform) = transform {
                tracing::debug!(?transform, "transforming grid");
                grid = transform.apply(&grid);
            }
            println!("{} x {}", grid.rows(), grid.cols());
            println!("{}", grid);
        }
        Command::Locate { path, index } => {
            let grid = Grid::from_file(&path)?;
            let coord = grid.index_to_coord(index)?;
            println!("{} {}", coord.row, coord.col);
        }
        Command::Index { path, row, col } => {
            let grid = Grid::from_file(&path)?;
            let index = grid.coord_to_index(Coord::new(row, col))?;
            println!("{}", index);
        }
        Command::Schematic { path } => {
            let schematic = Schematic::new(Grid::from_file(&path)?)?;
            println!("{}", schematic.part_number_sum());
            println!("{}", schematic.gear_ratio_sum());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {}", err);
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
