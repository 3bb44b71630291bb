//! Shape normalization from rectangular text blocks
//!
//! A shape is stored as its canonical footprint: the filled cells translated so
//! that the smallest row and the smallest column are both zero. Cells need not
//! be edge-connected.

use std::fmt;

use crate::io::error::{PackingError, Result};
use crate::spatial::symmetry::{TransformSet, expand};

/// Stable identifier of a shape, shared by every instance of it in a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub usize);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical set of `(row, col)` offsets covered by a shape
///
/// Offsets are sorted and unique, so structural equality and ordering are
/// those of the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Footprint {
    cells: Vec<(usize, usize)>,
}

impl Footprint {
    /// Translate arbitrary signed points so their minimum row and column are zero
    ///
    /// Duplicate points collapse. An empty input yields an empty footprint.
    pub fn canonicalize<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        let points: Vec<(isize, isize)> = points.into_iter().collect();

        let (Some(min_row), Some(min_col)) = (
            points.iter().map(|&(r, _)| r).min(),
            points.iter().map(|&(_, c)| c).min(),
        ) else {
            return Self::default();
        };

        let mut cells: Vec<(usize, usize)> = points
            .iter()
            .map(|&(r, c)| ((r - min_row) as usize, (c - min_col) as usize))
            .collect();
        cells.sort_unstable();
        cells.dedup();

        Self { cells }
    }

    /// Offsets in ascending row-major order
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Offsets widened to signed coordinates for geometric transforms
    pub fn signed_cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.cells.iter().map(|&(r, c)| (r as isize, c as isize))
    }

    /// Number of covered cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Test for a footprint covering nothing
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding-box height (max row + 1), zero when empty
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0)
    }

    /// Bounding-box width (max col + 1), zero when empty
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0)
    }

    /// Area of the bounding box
    pub fn bounding_area(&self) -> usize {
        self.height() * self.width()
    }

    /// Test whether the offset is covered
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.binary_search(&(row, col)).is_ok()
    }
}

/// Immutable shape with its cached symmetry variations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    id: ShapeId,
    footprint: Footprint,
    variations: Vec<Footprint>,
    height: usize,
    width: usize,
}

impl Shape {
    /// Build a shape from an already computed footprint
    ///
    /// # Errors
    ///
    /// Returns [`PackingError::EmptyShape`] if the footprint covers no cells
    pub fn new(id: ShapeId, footprint: Footprint, transforms: TransformSet) -> Result<Self> {
        if footprint.is_empty() {
            return Err(PackingError::EmptyShape { id });
        }

        let variations = expand(&footprint, transforms);
        let height = footprint.height();
        let width = footprint.width();

        Ok(Self {
            id,
            footprint,
            variations,
            height,
            width,
        })
    }

    /// Normalize a rectangular block of text lines into a shape
    ///
    /// Cells equal to `marker` are filled; any other character is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lines differ in length ([`PackingError::RaggedShape`])
    /// - No cell carries the marker ([`PackingError::EmptyShape`])
    pub fn from_lines<S: AsRef<str>>(
        id: ShapeId,
        lines: &[S],
        marker: char,
        transforms: TransformSet,
    ) -> Result<Self> {
        let expected = lines.first().map_or(0, |line| line.as_ref().chars().count());

        let mut points = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != expected {
                return Err(PackingError::RaggedShape {
                    id,
                    row,
                    expected,
                    found,
                });
            }

            points.extend(
                line.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == marker)
                    .map(|(col, _)| (row as isize, col as isize)),
            );
        }

        Self::new(id, Footprint::canonicalize(points), transforms)
    }

    /// Catalog identifier
    pub const fn id(&self) -> ShapeId {
        self.id
    }

    /// Canonical footprint in the orientation the shape was given in
    pub const fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Distinct canonical images under the shape's transform set
    pub fn variations(&self) -> &[Footprint] {
        &self.variations
    }

    /// Number of filled cells
    pub fn area(&self) -> usize {
        self.footprint.area()
    }

    /// Bounding-box height of the given orientation
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounding-box width of the given orientation
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Bounding-box area of the given orientation
    pub const fn bounding_area(&self) -> usize {
        self.height * self.width
    }
}
