//! Command-line arguments and the resolved run configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use kroute_core::Position;

/// Shortest route plus k alternatives through a grid maze.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of routes to enumerate (official route included)
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    pub k: u32,

    /// Start cell as ROW COL
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["ROW", "COL"],
        default_values_t = [1, 0],
        allow_negative_numbers = true
    )]
    pub start: Vec<i32>,

    /// Maze file: `.json` array of rows, otherwise one line of digits per row
    #[arg(short, long, value_name = "FILE", conflicts_with = "random")]
    pub grid: Option<PathBuf>,

    /// Generate a random maze of WIDTHxHEIGHT cells
    #[arg(short, long, value_name = "WxH")]
    pub random: Option<Size>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Skip the self-checks
    #[arg(long)]
    pub no_tests: bool,

    /// Print timing and explored-node metrics
    #[arg(long)]
    pub metrics: bool,

    /// Print the routes as JSON instead of maps
    #[arg(long)]
    pub json: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Maze dimensions given as `WxH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| format!("invalid dimension `{v}` in `{s}`"))
        };
        Ok(Self {
            width: parse(w)?,
            height: parse(h)?,
        })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Where the maze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeSource {
    /// The built-in demonstration labyrinth.
    Builtin,
    /// A maze file.
    File(PathBuf),
    /// A random maze; an unseeded one draws from the OS.
    Random { size: Size, seed: Option<u64> },
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub k: usize,
    pub start: Position,
    pub source: MazeSource,
    pub checks: bool,
    pub metrics: bool,
    pub json: bool,
    pub color: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            k: 4,
            start: crate::maze::LABYRINTH_START,
            source: MazeSource::Builtin,
            checks: true,
            metrics: false,
            json: false,
            color: true,
        }
    }
}

impl Args {
    /// Log filter implied by the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl From<Args> for SolveConfig {
    fn from(args: Args) -> Self {
        let start = match args.start.as_slice() {
            [row, col] => Position::new(*row, *col),
            _ => crate::maze::LABYRINTH_START,
        };
        let source = match (args.grid, args.random) {
            (Some(path), _) => MazeSource::File(path),
            (None, Some(size)) => MazeSource::Random {
                size,
                seed: args.seed,
            },
            (None, None) => MazeSource::Builtin,
        };
        Self {
            k: args.k as usize,
            start,
            source,
            checks: !args.no_tests,
            metrics: args.metrics,
            json: args.json,
            color: !args.no_color,
        }
    }
}
