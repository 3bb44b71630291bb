//! Mutable grid of cell markers shared by one in-flight search
//!
//! Every placement has an exact inverse. Callers gate writes with
//! [`GridState::can_place_rectangle`] or [`GridState::can_place_shape`];
//! a write that would leave the grid or overwrite a non-empty cell means the
//! gating is broken, so it panics instead of corrupting the layout.

use ndarray::Array2;

use crate::spatial::shape::{Footprint, ShapeId};

/// Marker stored in a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Free for any placement
    #[default]
    Empty,
    /// Covered by a committed instance of the shape
    Occupied(ShapeId),
    /// Reserved bounding-box interior during the bounding-box phase
    Filler,
}

/// Rectangular matrix of cell markers indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cells: Array2<Cell>,
}

impl GridState {
    /// Create an all-empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Empty),
        }
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Marker at a position, `None` when out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    /// Read-only view of the whole matrix
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Clear every cell back to empty
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Turn every filler cell back into an empty one, keeping committed shapes
    pub fn clear_filler(&mut self) {
        self.cells.mapv_inplace(|cell| match cell {
            Cell::Filler => Cell::Empty,
            other => other,
        });
    }

    /// Test whether no cell carries a marker
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| *cell == Cell::Empty)
    }

    /// Count cells covered by any shape
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Occupied(_)))
            .count()
    }

    /// Count cells covered by instances of one shape
    pub fn count_of(&self, id: ShapeId) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(id))
            .count()
    }

    /// Test whether the `height x width` rectangle at the origin lies inside the grid and is empty
    pub fn can_place_rectangle(
        &self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> bool {
        if row + height > self.rows() || col + width > self.cols() {
            return false;
        }

        (row..row + height)
            .all(|r| (col..col + width).all(|c| self.cell(r, c) == Some(Cell::Empty)))
    }

    /// Test whether every offset of the footprint lands on an in-bounds empty cell
    pub fn can_place_shape(&self, row: usize, col: usize, footprint: &Footprint) -> bool {
        footprint
            .cells()
            .iter()
            .all(|&(dr, dc)| self.cell(row + dr, col + dc) == Some(Cell::Empty))
    }

    /// Mark the footprint's cells at the origin as occupied by `id`
    ///
    /// # Panics
    ///
    /// Panics if a target cell is out of range or not empty
    pub fn place(&mut self, row: usize, col: usize, footprint: &Footprint, id: ShapeId) {
        for &(dr, dc) in footprint.cells() {
            self.write(row + dr, col + dc, Cell::Empty, Cell::Occupied(id));
        }
    }

    /// Exact inverse of [`GridState::place`]
    ///
    /// # Panics
    ///
    /// Panics if a target cell is not occupied by `id`
    pub fn remove(&mut self, row: usize, col: usize, footprint: &Footprint, id: ShapeId) {
        for &(dr, dc) in footprint.cells() {
            self.write(row + dr, col + dc, Cell::Occupied(id), Cell::Empty);
        }
    }

    /// Mark the footprint's cells as occupied by `id` and the rest of its rectangle as filler
    ///
    /// # Panics
    ///
    /// Panics if a target cell is out of range or not empty
    pub fn place_rectangle_filler(
        &mut self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        footprint: &Footprint,
        id: ShapeId,
    ) {
        for dr in 0..height {
            for dc in 0..width {
                let marker = if footprint.contains(dr, dc) {
                    Cell::Occupied(id)
                } else {
                    Cell::Filler
                };
                self.write(row + dr, col + dc, Cell::Empty, marker);
            }
        }
    }

    /// Exact inverse of [`GridState::place_rectangle_filler`]
    ///
    /// # Panics
    ///
    /// Panics if a rectangle cell does not hold the marker the placement wrote
    pub fn remove_rectangle_filler(
        &mut self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        footprint: &Footprint,
        id: ShapeId,
    ) {
        for dr in 0..height {
            for dc in 0..width {
                let marker = if footprint.contains(dr, dc) {
                    Cell::Occupied(id)
                } else {
                    Cell::Filler
                };
                self.write(row + dr, col + dc, marker, Cell::Empty);
            }
        }
    }

    fn write(&mut self, row: usize, col: usize, expected: Cell, marker: Cell) {
        let slot = self.cells.get_mut((row, col));
        assert!(
            slot.as_deref() == Some(&expected),
            "grid invariant violated at ({row}, {col}): expected {expected:?}, found {:?}",
            slot.as_deref()
        );
        if let Some(cell) = slot {
            *cell = marker;
        }
    }
}
