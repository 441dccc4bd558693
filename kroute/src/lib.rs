//! The `kroute` application: load a maze, enumerate the k shortest routes
//! from a start cell to its exit, and report them.

pub mod config;
pub mod mapgen;
pub mod maze;
pub mod metrics;
pub mod render;
pub mod sanity;

use std::error::Error;
use std::io;

use kroute_core::{Grid, Position};
use kroute_paths::{KShortestPaths, moves};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::Serialize;

use config::{MazeSource, SolveConfig};
use mapgen::MazeGen;
use metrics::Metrics;
use render::{Palette, RouteReport};

/// Share of a random maze carved free.
const RANDOM_FILL: f64 = 0.45;

#[derive(Serialize)]
struct JsonRoute<'a> {
    moves: usize,
    cells: &'a [Position],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start: Position,
    goal: Option<Position>,
    routes: Vec<JsonRoute<'a>>,
}

/// Build the maze described by `source`, returning it with the start cell
/// to use (random mazes clamp the start into their bounds).
pub fn load_maze(source: &MazeSource, start: Position) -> Result<(Grid, Position), Box<dyn Error>> {
    match source {
        MazeSource::Builtin => Ok((maze::builtin()?, start)),
        MazeSource::File(path) => Ok((maze::load(path)?, start)),
        MazeSource::Random { size, seed } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            log::info!("random maze {size} with seed {seed}");
            let start = Position::new(
                start.row.clamp(0, size.height as i32 - 1),
                start.col.clamp(0, size.width as i32 - 1),
            );
            let grid = MazeGen::new(StdRng::seed_from_u64(seed)).random_walk(
                size.height,
                size.width,
                start,
                RANDOM_FILL,
            )?;
            Ok((grid, start))
        }
    }
}

/// Run one solve and write everything it produces to `out`.
pub fn run(config: &SolveConfig, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
    let (grid, start) = load_maze(&config.source, config.start)?;
    let goal = grid.locate_exit().ok();
    if goal.is_none() {
        log::warn!("maze has no exit");
    }

    let mut ksp = KShortestPaths::new(&grid);
    let routes = ksp.enumerate(start, config.k);
    log::info!(
        "found {} route(s) with {} searches",
        routes.len(),
        ksp.stats().searches
    );

    if config.json {
        let report = JsonReport {
            start,
            goal,
            routes: routes
                .iter()
                .map(|r| JsonRoute {
                    moves: moves(r),
                    cells: r,
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        let palette = if config.color {
            Palette::COLOR
        } else {
            Palette::PLAIN
        };
        write!(
            out,
            "{}",
            RouteReport {
                grid: &grid,
                routes: &routes,
                palette,
            }
        )?;
    }

    if config.checks {
        write!(out, "{}", sanity::check(&grid, start, config.k))?;
    }
    if config.metrics {
        match Metrics::collect(&grid, start, config.k) {
            Some(m) => write!(out, "{m}")?,
            None => writeln!(out, "No metrics: the maze has no exit.")?,
        }
    }
    Ok(())
}
