//! Two-phase backtracking search for a packing task
//!
//! 1. Area gate: if the instances cover more cells than the grid has, stop.
//! 2. Bounding-box phase (only when the bounding boxes fit by area): place each
//!    instance's given orientation and reserve its whole bounding box. Fast,
//!    but it can miss packings that need interlocking or rotated shapes.
//! 3. Exhaustive phase: every variation of every instance at every origin.
//!
//! Both phases take the first unplaced instance in task order and scan
//! origins row-major, so the search is deterministic for a given task. The
//! exhaustive phase has no iteration cap and is exponential in the worst case.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::algorithm::mask::PlacementMask;
use crate::algorithm::task::PackingTask;
use crate::spatial::grid::GridState;
use crate::spatial::shape::Shape;

/// Search phase that produced or is producing a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Whole bounding boxes reserved, given orientation only
    BoundingBox,
    /// Every symmetry variation at every origin
    Exhaustive,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundingBox => write!(f, "bounding-box search"),
            Self::Exhaustive => write!(f, "exhaustive search"),
        }
    }
}

/// Why a task has no packing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Infeasibility {
    /// Instance areas add up to more than the grid area
    InsufficientArea,
    /// The exhaustive phase tried everything
    SearchExhausted,
}

impl fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientArea => write!(f, "insufficient area"),
            Self::SearchExhausted => write!(f, "search exhausted"),
        }
    }
}

/// Lifecycle of one solve attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverState {
    /// `solve` has not run yet
    Unattempted,
    /// Inside the bounding-box phase
    BoundingBoxSearching,
    /// Inside the exhaustive phase
    ExhaustiveSearching,
    /// Every instance is on the grid
    Solved(Phase),
    /// No packing exists (or none was found by a complete search)
    Unsolvable(Infeasibility),
}

impl SolverState {
    /// Test for `Solved` or `Unsolvable`
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved(_) | Self::Unsolvable(_))
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Placements committed during the bounding-box phase
    pub bounding_box_placements: u64,
    /// Placements committed during the exhaustive phase
    pub exhaustive_placements: u64,
    /// Placements undone after a failed recursion
    pub backtracks: u64,
}

impl SearchStats {
    /// Placements committed across both phases
    pub const fn total_placements(&self) -> u64 {
        self.bounding_box_placements + self.exhaustive_placements
    }
}

/// Receives search events, e.g. to drive a progress display
///
/// All methods default to doing nothing.
pub trait SearchObserver {
    /// A phase is about to start on an empty grid
    fn phase_started(&mut self, _phase: Phase) {}

    /// An instance was committed; `depth` is the number now placed
    fn placed(&mut self, _depth: usize) {}

    /// A committed instance was undone; `depth` is the number still placed
    fn backtracked(&mut self, _depth: usize) {}
}

impl SearchObserver for () {}

/// Solver owning the grid and mask for one task
#[derive(Debug)]
pub struct PackingSolver<'t> {
    task: &'t PackingTask,
    grid: GridState,
    mask: PlacementMask,
    state: SolverState,
    stats: SearchStats,
}

impl<'t> PackingSolver<'t> {
    /// Prepare a solver with an empty grid sized to the task
    pub fn new(task: &'t PackingTask) -> Self {
        Self {
            task,
            grid: GridState::new(task.height(), task.width()),
            mask: PlacementMask::new(task.len()),
            state: SolverState::Unattempted,
            stats: SearchStats::default(),
        }
    }

    /// Run the search without observing it
    pub fn solve(&mut self) -> bool {
        self.solve_with(&mut ())
    }

    /// Run the search, reporting events to `observer`
    ///
    /// Returns whether a packing was found. Once the state is terminal,
    /// further calls return the same verdict without searching again.
    pub fn solve_with<O: SearchObserver>(&mut self, observer: &mut O) -> bool {
        match self.state {
            SolverState::Solved(_) => return true,
            SolverState::Unsolvable(_) => return false,
            _ => {}
        }

        let capacity = self.task.grid_area();
        let total_area = self.task.total_area();
        if self.task.exceeds_grid() {
            debug!("area gate: {total_area} cells required, {capacity} available");
            self.state = SolverState::Unsolvable(Infeasibility::InsufficientArea);
            return false;
        }

        let bounding_area = self.task.total_bounding_area();
        if bounding_area <= capacity {
            debug!(
                "bounding-box phase: {} instances, {bounding_area}/{capacity} cells",
                self.task.len()
            );
            self.state = SolverState::BoundingBoxSearching;
            observer.phase_started(Phase::BoundingBox);

            if self.search(observer).bounding_boxes() {
                debug!("solved by {}", Phase::BoundingBox);
                self.grid.clear_filler();
                self.state = SolverState::Solved(Phase::BoundingBox);
                return true;
            }
        } else {
            debug!("bounding-box phase skipped: {bounding_area}/{capacity} cells");
        }

        self.grid.reset();
        self.mask.reset();
        self.state = SolverState::ExhaustiveSearching;
        observer.phase_started(Phase::Exhaustive);

        if self.search(observer).exhaustive() {
            debug!("solved by {}", Phase::Exhaustive);
            self.state = SolverState::Solved(Phase::Exhaustive);
            true
        } else {
            debug!(
                "search exhausted after {} placements",
                self.stats.total_placements()
            );
            self.state = SolverState::Unsolvable(Infeasibility::SearchExhausted);
            false
        }
    }

    fn search<'s, O: SearchObserver>(&'s mut self, observer: &'s mut O) -> Search<'s, O> {
        Search {
            instances: self.task.instances(),
            grid: &mut self.grid,
            mask: &mut self.mask,
            stats: &mut self.stats,
            observer,
        }
    }

    /// Task being solved
    pub const fn task(&self) -> &PackingTask {
        self.task
    }

    /// Current state of the solve attempt
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// Grid as left by the search
    ///
    /// Holds the layout when solved, with bounding-box filler already cleared,
    /// and is empty otherwise.
    pub const fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Placement mask as left by the search
    pub const fn mask(&self) -> &PlacementMask {
        &self.mask
    }

    /// Counters collected so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Consume the solver, keeping the layout only if one was found
    pub fn into_layout(self) -> Option<GridState> {
        matches!(self.state, SolverState::Solved(_)).then_some(self.grid)
    }
}

/// Exclusive borrow of the solver's mutable state for one phase
struct Search<'s, O> {
    instances: &'s [Arc<Shape>],
    grid: &'s mut GridState,
    mask: &'s mut PlacementMask,
    stats: &'s mut SearchStats,
    observer: &'s mut O,
}

impl<O: SearchObserver> Search<'_, O> {
    fn bounding_boxes(&mut self) -> bool {
        let Some(index) = self.mask.first_unplaced() else {
            return true;
        };
        let instances = self.instances;
        let Some(shape) = instances.get(index) else {
            return false;
        };

        let (height, width) = (shape.height(), shape.width());
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        if height > rows || width > cols {
            return false;
        }

        for row in 0..=rows - height {
            for col in 0..=cols - width {
                if !self.grid.can_place_rectangle(row, col, height, width) {
                    continue;
                }

                self.grid.place_rectangle_filler(
                    row,
                    col,
                    height,
                    width,
                    shape.footprint(),
                    shape.id(),
                );
                self.stats.bounding_box_placements += 1;
                self.commit(index);

                if self.bounding_boxes() {
                    return true;
                }

                self.grid.remove_rectangle_filler(
                    row,
                    col,
                    height,
                    width,
                    shape.footprint(),
                    shape.id(),
                );
                self.retract(index);
            }
        }

        false
    }

    fn exhaustive(&mut self) -> bool {
        let Some(index) = self.mask.first_unplaced() else {
            return true;
        };
        let instances = self.instances;
        let Some(shape) = instances.get(index) else {
            return false;
        };

        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        for variation in shape.variations() {
            let (height, width) = (variation.height(), variation.width());
            if height > rows || width > cols {
                continue;
            }

            for row in 0..=rows - height {
                for col in 0..=cols - width {
                    if !self.grid.can_place_shape(row, col, variation) {
                        continue;
                    }

                    self.grid.place(row, col, variation, shape.id());
                    self.stats.exhaustive_placements += 1;
                    self.commit(index);

                    if self.exhaustive() {
                        return true;
                    }

                    self.grid.remove(row, col, variation, shape.id());
                    self.retract(index);
                }
            }
        }

        false
    }

    fn commit(&mut self, index: usize) {
        self.mask.place(index);
        self.observer.placed(self.mask.placed_count());
    }

    fn retract(&mut self, index: usize) {
        self.mask.unplace(index);
        self.stats.backtracks += 1;
        let depth = self.mask.placed_count();
        trace!("backtrack instance {index} at depth {depth}");
        self.observer.backtracked(depth);
    }
}
