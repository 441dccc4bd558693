//! Text rendering of mazes and routes.
//!
//! Everything here implements [`fmt::Display`], so the same output can go to
//! a terminal, a file, or a test assertion.

use std::collections::HashMap;
use std::fmt;

use crossterm::style::{Color, Stylize, style};
use kroute_core::{Cell, Direction, Grid, Position};
use kroute_paths::moves;

const RULE_WIDE: usize = 48;
const RULE_NARROW: usize = 36;
const ARROWS_PER_LINE: usize = 40;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// What a piece of output represents, for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Wall,
    Step,
    Endpoint,
    Heading,
}

/// Optional terminal colouring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    pub const PLAIN: Self = Self { color: false };
    pub const COLOR: Self = Self { color: true };

    /// Wrap already-padded `text` in the colour for `role`.
    fn paint(self, text: &str, role: Role) -> String {
        if !self.color {
            return text.to_string();
        }
        let content = style(text);
        let styled = match role {
            Role::Wall => content.with(Color::DarkGrey),
            Role::Step => content.with(Color::Yellow),
            Role::Endpoint => content.with(Color::Green).bold(),
            Role::Heading => content.bold(),
        };
        styled.to_string()
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// The direction of every move along `path`.
pub fn directions(path: &[Position]) -> Vec<Direction> {
    path.windows(2)
        .filter_map(|w| Direction::between(w[0], w[1]))
        .collect()
}

/// Run-length compress a direction list: `→x3 ↓x2`.
pub fn compress_directions(dirs: &[Direction]) -> String {
    let mut runs: Vec<(Direction, usize)> = Vec::new();
    for &d in dirs {
        match runs.last_mut() {
            Some((last, n)) if *last == d => *n += 1,
            _ => runs.push((d, 1)),
        }
    }
    runs.iter()
        .map(|(d, n)| format!("{}x{n}", d.arrow()))
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Grid overlay
// ---------------------------------------------------------------------------

/// The maze with a route's step indices drawn on it.
pub struct GridView<'a> {
    pub grid: &'a Grid,
    pub path: &'a [Position],
    pub palette: Palette,
}

impl GridView<'_> {
    /// Column width: wide enough for the last step index, at least 3.
    fn cell_width(&self) -> usize {
        moves(self.path).to_string().len().max(3)
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.cell_width();
        let step: HashMap<Position, usize> =
            self.path.iter().enumerate().map(|(i, &p)| (p, i)).collect();
        let start = self.path.first().copied();
        let cols = self.grid.cols();

        let header: Vec<String> = (0..cols).map(|c| format!("{c:0w$}")).collect();
        writeln!(f, "   {}", header.join(" "))?;
        writeln!(f, "   {}", "-".repeat(cols as usize * (w + 1) - 1))?;

        for r in 0..self.grid.rows() {
            let cells: Vec<String> = (0..cols)
                .map(|c| {
                    let p = Position::new(r, c);
                    let cell = self.grid.at(p).unwrap_or(Cell::Wall);
                    if Some(p) == start {
                        self.palette.paint(&format!("{:>w$}", "S"), Role::Endpoint)
                    } else if cell == Cell::Exit {
                        self.palette.paint(&format!("{:>w$}", "E"), Role::Endpoint)
                    } else if cell == Cell::Wall {
                        self.palette.paint(&"█".repeat(w), Role::Wall)
                    } else if let Some(i) = step.get(&p) {
                        self.palette.paint(&format!("{i:0w$}"), Role::Step)
                    } else {
                        format!("{:>w$}", ".")
                    }
                })
                .collect();
            writeln!(f, "{r:02}| {}", cells.join(" "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Route details
// ---------------------------------------------------------------------------

/// Step-by-step listing, arrows, compressed arrows and summary of one route.
pub struct RouteDetails<'a> {
    pub path: &'a [Position],
    pub palette: Palette,
}

impl fmt::Display for RouteDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(first), Some(last)) = (self.path.first(), self.path.last()) else {
            return Ok(());
        };
        let rule = "-".repeat(RULE_NARROW);

        writeln!(f, "\n{}", self.palette.paint("Route to the exit (step by step):", Role::Heading))?;
        writeln!(f, "{rule}")?;
        for (i, p) in self.path.iter().enumerate() {
            writeln!(f, "Step {:02} | row {:02} | col {:02}", i + 1, p.row, p.col)?;
        }

        let dirs = directions(self.path);
        writeln!(f, "\n{}", self.palette.paint("Directions:", Role::Heading))?;
        writeln!(f, "{rule}")?;
        for chunk in dirs.chunks(ARROWS_PER_LINE) {
            let line: Vec<String> = chunk.iter().map(|d| d.arrow().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }

        writeln!(f, "\n{}", self.palette.paint("Compressed directions:", Role::Heading))?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{}", compress_directions(&dirs))?;

        writeln!(f, "\n{}", self.palette.paint("Summary:", Role::Heading))?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Start: {first}")?;
        writeln!(f, "Exit: {last}")?;
        writeln!(f, "Cells visited: {}", self.path.len())?;
        writeln!(f, "Moves: {}", moves(self.path))
    }
}

// ---------------------------------------------------------------------------
// Full report
// ---------------------------------------------------------------------------

/// The official (shortest) route in full, followed by the alternatives as
/// maps only.
pub struct RouteReport<'a> {
    pub grid: &'a Grid,
    pub routes: &'a [Vec<Position>],
    pub palette: Palette,
}

impl fmt::Display for RouteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((official, options)) = self.routes.split_first() else {
            return writeln!(f, "No route to the exit was found.");
        };
        let wide = "=".repeat(RULE_WIDE);
        let thin = "-".repeat(RULE_WIDE);
        let pal = self.palette;

        writeln!(f, "\n{wide}")?;
        writeln!(f, "{}", pal.paint("OFFICIAL SOLUTION + ALTERNATIVES", Role::Heading))?;
        writeln!(f, "{wide}")?;

        writeln!(f, "\n{}", pal.paint("OFFICIAL SOLUTION (SHORTEST ROUTE):", Role::Heading))?;
        writeln!(f, "{thin}")?;
        writeln!(f, "Moves: {} | Cells: {}\n", moves(official), official.len())?;
        write!(
            f,
            "{}",
            GridView {
                grid: self.grid,
                path: official,
                palette: pal,
            }
        )?;
        write!(
            f,
            "{}",
            RouteDetails {
                path: official,
                palette: pal,
            }
        )?;

        if options.is_empty() {
            writeln!(f, "\nNo alternative routes available.")?;
        } else {
            writeln!(f, "\n{wide}")?;
            writeln!(f, "{}", pal.paint("ALTERNATIVE ROUTES", Role::Heading))?;
            writeln!(f, "{wide}")?;
            for (i, route) in options.iter().enumerate() {
                writeln!(f, "\n{}", pal.paint(&format!("OPTION {}:", i + 1), Role::Heading))?;
                writeln!(f, "{thin}")?;
                writeln!(f, "Moves: {} | Cells: {}\n", moves(route), route.len())?;
                write!(
                    f,
                    "{}",
                    GridView {
                        grid: self.grid,
                        path: route,
                        palette: pal,
                    }
                )?;
            }
        }

        writeln!(f, "\n{wide}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn corridor() -> Grid {
        Grid::from_rows(vec![vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 9]]).unwrap()
    }

    fn corridor_route() -> Vec<Position> {
        vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]
    }

    #[test]
    fn directions_from_deltas() {
        let dirs = directions(&corridor_route());
        assert_eq!(
            dirs,
            vec![Direction::Right, Direction::Right, Direction::Down, Direction::Down]
        );
        assert!(directions(&[p(0, 0)]).is_empty());
    }

    #[test]
    fn compression() {
        use Direction::*;
        assert_eq!(compress_directions(&[Right, Right, Down, Down]), "→x2 ↓x2");
        assert_eq!(compress_directions(&[Up, Left, Up]), "↑x1 ←x1 ↑x1");
        assert_eq!(compress_directions(&[]), "");
    }

    #[test]
    fn grid_overlay() {
        let g = corridor();
        let route = corridor_route();
        let view = GridView {
            grid: &g,
            path: &route,
            palette: Palette::PLAIN,
        };
        let expected = "   000 001 002\n   -----------\n00|   S 001 002\n01| ███ ███ 003\n02|   .   .   E\n";
        assert_eq!(view.to_string(), expected);
    }

    #[test]
    fn overlay_widens_for_long_routes() {
        let row: Vec<i32> = vec![0; 1200].into_iter().chain([9]).collect();
        let g = Grid::from_rows(vec![row]).unwrap();
        let route: Vec<Position> = (0..=1200).map(|c| p(0, c)).collect();
        let view = GridView {
            grid: &g,
            path: &route,
            palette: Palette::PLAIN,
        };
        let text = view.to_string();
        let row = text.lines().nth(2).unwrap();
        assert!(row.starts_with("00|    S 0001 0002"));
        assert!(row.ends_with("1199    E"));
    }

    #[test]
    fn route_details() {
        let route = corridor_route();
        let text = RouteDetails {
            path: &route,
            palette: Palette::PLAIN,
        }
        .to_string();
        assert!(text.contains("Step 01 | row 00 | col 00\n"));
        assert!(text.contains("Step 05 | row 02 | col 02\n"));
        assert!(text.contains("→ → ↓ ↓\n"));
        assert!(text.contains("→x2 ↓x2\n"));
        assert!(text.contains("Start: (0, 0)\n"));
        assert!(text.contains("Exit: (2, 2)\n"));
        assert!(text.contains("Cells visited: 5\n"));
        assert!(text.ends_with("Moves: 4\n"));
    }

    #[test]
    fn arrows_wrap_at_forty() {
        let route: Vec<Position> = (0..=45).map(|c| p(0, c)).collect();
        let text = RouteDetails {
            path: &route,
            palette: Palette::PLAIN,
        }
        .to_string();
        let full = vec!["→"; 40].join(" ");
        let rest = vec!["→"; 5].join(" ");
        assert!(text.contains(&format!("{full}\n{rest}\n")));
    }

    #[test]
    fn report_without_routes() {
        let g = corridor();
        let text = RouteReport {
            grid: &g,
            routes: &[],
            palette: Palette::PLAIN,
        }
        .to_string();
        assert_eq!(text, "No route to the exit was found.\n");
    }

    #[test]
    fn report_lists_alternatives() {
        let g = Grid::from_rows(vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 9]]).unwrap();
        let routes = kroute_paths::k_shortest_paths(&g, p(0, 0), 4);
        let text = RouteReport {
            grid: &g,
            routes: &routes,
            palette: Palette::PLAIN,
        }
        .to_string();
        assert!(text.contains("OFFICIAL SOLUTION (SHORTEST ROUTE):"));
        assert!(text.contains("ALTERNATIVE ROUTES"));
        assert!(text.contains("OPTION 1:"));
        assert!(!text.contains("OPTION 2:"));

        let single = RouteReport {
            grid: &g,
            routes: &routes[..1],
            palette: Palette::PLAIN,
        }
        .to_string();
        assert!(single.contains("No alternative routes available."));
    }

    #[test]
    fn colour_only_adds_escapes() {
        let g = corridor();
        let route = corridor_route();
        let plain = GridView {
            grid: &g,
            path: &route,
            palette: Palette::PLAIN,
        }
        .to_string();
        let colored = GridView {
            grid: &g,
            path: &route,
            palette: Palette::COLOR,
        }
        .to_string();
        assert!(colored.contains('\u{1b}'));
        assert!(!plain.contains('\u{1b}'));
    }
}
