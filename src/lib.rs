//! Exact packing of polyomino-style shapes into a rectangular grid
//!
//! Shapes are normalized from text blocks, expanded under rotation and
//! reflection, and placed by a two-phase backtracking search: a fast
//! bounding-box pass followed, when needed, by an exhaustive cell-level pass.

#![forbid(unsafe_code)]

/// Shape catalog, task building, placement bookkeeping and the solver
pub mod algorithm;
/// Command line, progress display, configuration and error handling
pub mod io;
/// Shapes, symmetry variations and grid state
pub mod spatial;

pub use algorithm::catalog::ShapeCatalog;
pub use algorithm::solver::{PackingSolver, SolverState};
pub use algorithm::task::PackingTask;
pub use io::error::{PackingError, Result};
