//! Registry of normalized shapes keyed by their stable identifier

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::io::configuration::FILLED_MARKER;
use crate::io::error::{PackingError, Result};
use crate::spatial::shape::{Shape, ShapeId};
use crate::spatial::symmetry::TransformSet;

/// Shapes available to packing tasks
///
/// Shapes are shared behind [`Arc`] so every task instance of an id points
/// at the same symmetry data, and tasks built from one catalog may be solved
/// on separate threads.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    shapes: BTreeMap<ShapeId, Arc<Shape>>,
    marker: char,
    transforms: TransformSet,
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new(FILLED_MARKER, TransformSet::FULL)
    }
}

impl ShapeCatalog {
    /// Create an empty catalog reading literals with `marker` as the filled cell
    pub const fn new(marker: char, transforms: TransformSet) -> Self {
        Self {
            shapes: BTreeMap::new(),
            marker,
            transforms,
        }
    }

    /// Register an already built shape under its own identifier
    ///
    /// # Errors
    ///
    /// Returns [`PackingError::DuplicateShape`] if the id is taken
    pub fn insert(&mut self, shape: Shape) -> Result<ShapeId> {
        let id = shape.id();
        if self.shapes.contains_key(&id) {
            return Err(PackingError::DuplicateShape { id });
        }
        self.shapes.insert(id, Arc::new(shape));
        Ok(id)
    }

    /// Normalize a text block and register it under `id`
    ///
    /// # Errors
    ///
    /// Returns an error if the block is ragged or empty, or the id is taken
    pub fn insert_lines<S: AsRef<str>>(&mut self, id: ShapeId, lines: &[S]) -> Result<ShapeId> {
        if self.shapes.contains_key(&id) {
            return Err(PackingError::DuplicateShape { id });
        }
        let shape = Shape::from_lines(id, lines, self.marker, self.transforms)?;
        self.insert(shape)
    }

    /// Normalize a text block and register it under the next free sequential id
    ///
    /// # Errors
    ///
    /// Returns an error if the block is ragged or empty
    pub fn push_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<ShapeId> {
        self.insert_lines(self.next_id(), lines)
    }

    /// Identifier one past the largest registered id
    pub fn next_id(&self) -> ShapeId {
        self.shapes
            .last_key_value()
            .map_or(ShapeId(0), |(id, _)| ShapeId(id.0 + 1))
    }

    /// Look up a shape
    pub fn get(&self, id: ShapeId) -> Option<&Arc<Shape>> {
        self.shapes.get(&id)
    }

    /// Look up a shape that a task requires
    ///
    /// # Errors
    ///
    /// Returns [`PackingError::UnknownShape`] if the id was never registered
    pub fn require(&self, id: ShapeId) -> Result<&Arc<Shape>> {
        self.get(id).ok_or(PackingError::UnknownShape { id })
    }

    /// Number of registered shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Test for an empty catalog
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in ascending id order
    pub fn shapes(&self) -> impl Iterator<Item = &Arc<Shape>> {
        self.shapes.values()
    }

    /// Marker character used for filled cells
    pub const fn marker(&self) -> char {
        self.marker
    }

    /// Transformations applied to newly registered shapes
    pub const fn transforms(&self) -> TransformSet {
        self.transforms
    }
}
