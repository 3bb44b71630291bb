//! Search machinery: catalog, task building, placement bookkeeping and the solver

/// Shape registry shared by packing tasks
pub mod catalog;
/// Per-instance placement bookkeeping
pub mod mask;
/// Two-phase backtracking solver and search observation
pub mod solver;
/// Packing task construction and instance ordering
pub mod task;
