//! Command-line interface for deciding one packing task or a batch of grids

use crate::algorithm::catalog::ShapeCatalog;
use crate::algorithm::solver::{PackingSolver, SearchStats, SolverState};
use crate::algorithm::task::PackingTask;
use crate::io::configuration::{
    COUNT_DELIMITER, DEFAULT_LOG_LEVEL, FILLED_MARKER, GRID_COUNTS_SEPARATOR, GRID_SIZE_SEPARATOR,
};
use crate::io::error::{PackingError, Result, WithPath, invalid_parameter};
use crate::io::progress::SearchProgress;
use crate::spatial::grid::GridState;
use crate::spatial::symmetry::TransformSet;
use clap::Parser;
use log::{LevelFilter, debug, info};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "polypack")]
#[command(
    author,
    version,
    about = "Decide whether a multiset of shapes packs into a rectangular grid"
)]
/// Command-line arguments for the packing tool
// Rotation, mirror and quiet switches are independent user choices
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Shape file holding one rectangular block; repeat for more shapes (ids count up from 0)
    #[arg(short = 's', long = "shape", value_name = "FILE", required = true)]
    pub shapes: Vec<PathBuf>,

    /// Grid height in cells
    #[arg(short = 'H', long, required_unless_present = "grids")]
    pub height: Option<usize>,

    /// Grid width in cells
    #[arg(short = 'w', long, required_unless_present = "grids")]
    pub width: Option<usize>,

    /// Required count per shape id, in id order
    #[arg(
        short,
        long,
        value_delimiter = COUNT_DELIMITER,
        num_args = 1..,
        required_unless_present = "grids"
    )]
    pub counts: Vec<usize>,

    /// Grid of a batch as HEIGHTxWIDTH:COUNTS; repeat for more grids
    #[arg(
        short,
        long = "grid",
        value_name = "HxW:N,N,...",
        conflicts_with_all = ["height", "width", "counts"]
    )]
    pub grids: Vec<GridSpec>,

    /// Character marking a filled cell in shape files
    #[arg(short, long, default_value_t = FILLED_MARKER)]
    pub marker: char,

    /// Disable quarter-turn rotations of shapes
    #[arg(long)]
    pub no_rotate: bool,

    /// Disable mirror images of shapes
    #[arg(long)]
    pub no_mirror: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log verbosity
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = DEFAULT_LOG_LEVEL
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Transformations shapes may undergo
    pub const fn transforms(&self) -> TransformSet {
        TransformSet {
            rotations: !self.no_rotate,
            reflections: !self.no_mirror,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grids to decide, in command-line order
    ///
    /// `--grid` values win; otherwise `--height`, `--width` and `--counts`
    /// describe a single grid.
    ///
    /// # Errors
    ///
    /// Returns an error if neither form gives grid dimensions
    pub fn grid_specs(&self) -> Result<Vec<GridSpec>> {
        if !self.grids.is_empty() {
            return Ok(self.grids.clone());
        }

        match (self.height, self.width) {
            (Some(height), Some(width)) => Ok(vec![GridSpec {
                height,
                width,
                counts: self.counts.clone(),
            }]),
            _ => Err(invalid_parameter(
                "grid",
                &"",
                &"give --grid or both --height and --width",
            )),
        }
    }
}

/// One grid to decide: dimensions plus the required count per shape id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    /// Grid height in cells
    pub height: usize,
    /// Grid width in cells
    pub width: usize,
    /// Required count of `ShapeId(i)` at position `i`
    pub counts: Vec<usize>,
}

impl FromStr for GridSpec {
    type Err = PackingError;

    /// Parse `HEIGHTxWIDTH:N,N,...`, e.g. `4x4:0,0,0,0,2,0`
    fn from_str(value: &str) -> Result<Self> {
        let invalid = |reason: String| invalid_parameter("grid", &value, &reason);

        let (size, counts) = value
            .split_once(GRID_COUNTS_SEPARATOR)
            .ok_or_else(|| invalid(format!("missing '{GRID_COUNTS_SEPARATOR}' before counts")))?;
        let (height, width) = size
            .split_once(GRID_SIZE_SEPARATOR)
            .ok_or_else(|| invalid(format!("missing '{GRID_SIZE_SEPARATOR}' in grid size")))?;

        let parse = |field: &str, text: &str| {
            text.trim()
                .parse::<usize>()
                .map_err(|err| invalid(format!("{field} '{text}': {err}")))
        };

        let counts = counts
            .split(COUNT_DELIMITER)
            .map(|count| parse("count", count))
            .collect::<Result<Vec<usize>>>()?;

        Ok(Self {
            height: parse("height", height)?,
            width: parse("width", width)?,
            counts,
        })
    }
}

/// Outcome of deciding one grid
#[derive(Debug)]
pub struct Report {
    /// Grid height in cells
    pub height: usize,
    /// Grid width in cells
    pub width: usize,
    /// Terminal solver state
    pub state: SolverState,
    /// Search counters
    pub stats: SearchStats,
    /// Filled grid when a packing was found
    pub layout: Option<GridState>,
}

impl Report {
    /// Test whether a packing was found
    pub const fn is_solvable(&self) -> bool {
        matches!(self.state, SolverState::Solved(_))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            SolverState::Solved(phase) => write!(f, "solvable ({phase})"),
            SolverState::Unsolvable(reason) => write!(f, "unsolvable ({reason})"),
            other => write!(f, "undecided ({other:?})"),
        }
    }
}

/// Outcome of one command-line run over every requested grid
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One report per grid, in command-line order
    pub reports: Vec<Report>,
}

impl BatchReport {
    /// Count grids that have a packing
    pub fn solvable_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.is_solvable())
            .count()
    }

    /// Number of grids decided
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Test for a run without grids
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [single] = self.reports.as_slice() {
            return write!(f, "{single}");
        }

        for (index, report) in self.reports.iter().enumerate() {
            writeln!(
                f,
                "grid {index} ({}x{}): {report}",
                report.height, report.width
            )?;
        }
        write!(
            f,
            "{} of {} grids solvable",
            self.solvable_count(),
            self.len()
        )
    }
}

/// Loads shapes, builds the tasks and runs the solver for parsed arguments
pub struct PackRunner {
    cli: Cli,
}

impl PackRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read every shape file into a catalog with sequential ids
    ///
    /// Blank lines are ignored; every other line is one row of the block.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or holds an invalid block
    pub fn load_catalog(&self) -> Result<ShapeCatalog> {
        let mut catalog = ShapeCatalog::new(self.cli.marker, self.cli.transforms());

        for path in &self.cli.shapes {
            let content = std::fs::read_to_string(path).with_path(path, "read shape file")?;
            let lines: Vec<&str> = content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .collect();

            let id = catalog.push_lines(&lines)?;
            if let Some(shape) = catalog.get(id) {
                debug!(
                    "shape {id} from '{}': area {}, box {}x{}, {} variations",
                    path.display(),
                    shape.area(),
                    shape.height(),
                    shape.width(),
                    shape.variations().len()
                );
            }
        }

        Ok(catalog)
    }

    /// Build one packing task per requested grid
    ///
    /// # Errors
    ///
    /// Returns an error if a count refers to a missing shape, a dimension is
    /// too large, or no grid is given
    pub fn build_tasks(&self, catalog: &ShapeCatalog) -> Result<Vec<PackingTask>> {
        self.cli
            .grid_specs()?
            .iter()
            .map(|spec| PackingTask::from_counts(spec.height, spec.width, &spec.counts, catalog))
            .collect()
    }

    /// Decide one task, drawing a spinner unless quiet
    pub fn solve(&self, task: &PackingTask) -> Report {
        let start_time = Instant::now();
        let mut progress = if self.cli.should_show_progress() {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        };

        let mut solver = PackingSolver::new(task);
        solver.solve_with(&mut progress);
        progress.finish(solver.state());

        let state = solver.state();
        let stats = solver.stats();
        info!(
            "{}x{} grid, {} instances: {state:?} after {} placements in {:.2?}",
            task.height(),
            task.width(),
            task.len(),
            stats.total_placements(),
            start_time.elapsed()
        );

        Report {
            height: task.height(),
            width: task.width(),
            state,
            stats,
            layout: solver.into_layout(),
        }
    }

    /// Load, build and solve every grid
    ///
    /// All tasks are built before the first search, so a configuration
    /// problem in any grid stops the run early.
    ///
    /// # Errors
    ///
    /// Returns an error on any configuration problem; an unsolvable grid is a
    /// normal [`Report`]
    pub fn run(&self) -> Result<BatchReport> {
        let catalog = self.load_catalog()?;
        let tasks = self.build_tasks(&catalog)?;

        let reports: Vec<Report> = tasks.iter().map(|task| self.solve(task)).collect();
        let batch = BatchReport { reports };
        info!(
            "{} of {} grids solvable",
            batch.solvable_count(),
            batch.len()
        );
        Ok(batch)
    }
}
