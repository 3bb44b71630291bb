//! Spatial data structures for shapes and the packing grid
//!
//! This module contains spatial-related functionality including:
//! - Shape normalization into canonical footprints
//! - Symmetry expansion under rotation and reflection
//! - Grid state with exact-inverse placement operations

/// Grid state management and placement primitives
pub mod grid;
/// Shape identifiers, canonical footprints and text block normalization
pub mod shape;
/// Rotation and reflection variations of footprints
pub mod symmetry;

pub use grid::{Cell, GridState};
pub use shape::{Footprint, Shape, ShapeId};
pub use symmetry::TransformSet;
