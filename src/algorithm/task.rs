//! Packing task construction
//!
//! Expands `(shape, count)` requirements into a flat list of instances and
//! orders them largest-first. The sort is stable, so instances of equal area
//! keep their requirement order; this fixes which layout the search finds
//! first without affecting whether one is found.
//!
//! Demand is totalled before any instance is built. A task whose shapes
//! cannot fit by area keeps no instances at all, so arbitrarily large counts
//! cost nothing and still reach the solver's area gate.

use std::cmp::Reverse;
use std::sync::Arc;

use crate::algorithm::catalog::ShapeCatalog;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::shape::{Shape, ShapeId};

/// Grid dimensions plus the ordered instances that must all be placed
#[derive(Debug, Clone)]
pub struct PackingTask {
    height: usize,
    width: usize,
    instances: Vec<Arc<Shape>>,
    required_area: usize,
    required_bounding_area: usize,
}

impl PackingTask {
    /// Build a task from explicit `(shape id, count)` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A dimension exceeds [`MAX_GRID_DIMENSION`]
    /// - A referenced id is missing from the catalog
    pub fn new(
        height: usize,
        width: usize,
        requirements: &[(ShapeId, usize)],
        catalog: &ShapeCatalog,
    ) -> Result<Self> {
        validate_dimension("height", height)?;
        validate_dimension("width", width)?;

        let mut shapes = Vec::with_capacity(requirements.len());
        let mut required_area = 0_usize;
        let mut required_bounding_area = 0_usize;
        for &(id, count) in requirements {
            let shape = catalog.require(id)?;
            required_area = required_area.saturating_add(shape.area().saturating_mul(count));
            required_bounding_area =
                required_bounding_area.saturating_add(shape.bounding_area().saturating_mul(count));
            shapes.push((shape, count));
        }

        // Every shape covers at least one cell, so a fitting task has at most
        // `height * width` instances
        let mut instances = Vec::new();
        if required_area <= height * width {
            for (shape, count) in shapes {
                instances.extend(std::iter::repeat_n(shape, count).map(Arc::clone));
            }
            instances.sort_by_key(|shape| Reverse(shape.area()));
        }

        Ok(Self {
            height,
            width,
            instances,
            required_area,
            required_bounding_area,
        })
    }

    /// Build a task where `counts[i]` is the required count of `ShapeId(i)`
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`PackingTask::new`]
    pub fn from_counts(
        height: usize,
        width: usize,
        counts: &[usize],
        catalog: &ShapeCatalog,
    ) -> Result<Self> {
        let requirements: Vec<(ShapeId, usize)> = counts
            .iter()
            .enumerate()
            .map(|(index, &count)| (ShapeId(index), count))
            .collect();
        Self::new(height, width, &requirements, catalog)
    }

    /// Grid height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of grid cells
    pub const fn grid_area(&self) -> usize {
        self.height * self.width
    }

    /// Instances in placement order
    ///
    /// Empty when [`PackingTask::exceeds_grid`] holds.
    pub fn instances(&self) -> &[Arc<Shape>] {
        &self.instances
    }

    /// Number of instances built for placement
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Test for a task with nothing to place
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Sum of all required instance areas, saturating at `usize::MAX`
    pub const fn total_area(&self) -> usize {
        self.required_area
    }

    /// Sum of all required bounding-box areas, saturating at `usize::MAX`
    pub const fn total_bounding_area(&self) -> usize {
        self.required_bounding_area
    }

    /// Test whether the required area is larger than the grid
    pub const fn exceeds_grid(&self) -> bool {
        self.required_area > self.grid_area()
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
