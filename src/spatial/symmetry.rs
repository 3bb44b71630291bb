//! Dihedral symmetry expansion of shape footprints
//!
//! Generates the images of a footprint under quarter turns and a mirror,
//! re-canonicalizes each one and deduplicates them. Variations come back in
//! ascending order of their canonical form so the search visits them in a
//! reproducible order.

use std::collections::BTreeSet;

use crate::spatial::shape::Footprint;

/// Which transformations a shape may undergo when placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformSet {
    /// Allow quarter-turn rotations (90°, 180°, 270°)
    pub rotations: bool,
    /// Allow the horizontal mirror image
    pub reflections: bool,
}

impl TransformSet {
    /// Full dihedral group of order 8
    pub const FULL: Self = Self {
        rotations: true,
        reflections: true,
    };

    /// Identity only
    pub const FIXED: Self = Self {
        rotations: false,
        reflections: false,
    };
}

impl Default for TransformSet {
    fn default() -> Self {
        Self::FULL
    }
}

/// Quarter turn: `(r, c) -> (c, -r)`
fn rotate_90(points: &[(isize, isize)]) -> Vec<(isize, isize)> {
    points.iter().map(|&(r, c)| (c, -r)).collect()
}

/// Horizontal mirror: `(r, c) -> (r, -c)`
fn mirror(points: &[(isize, isize)]) -> Vec<(isize, isize)> {
    points.iter().map(|&(r, c)| (r, -c)).collect()
}

/// Expand a footprint into its distinct canonical variations
///
/// The working set accumulates rotations without being re-canonicalized in
/// between; only the images added to the result are canonicalized. With the
/// full group the result holds 1, 2, 4 or 8 footprints.
pub fn expand(footprint: &Footprint, transforms: TransformSet) -> Vec<Footprint> {
    let turns = if transforms.rotations { 4 } else { 1 };

    let mut unique = BTreeSet::new();
    let mut current: Vec<(isize, isize)> = footprint.signed_cells().collect();

    for _ in 0..turns {
        unique.insert(Footprint::canonicalize(current.iter().copied()));

        if transforms.reflections {
            unique.insert(Footprint::canonicalize(mirror(&current)));
        }

        current = rotate_90(&current);
    }

    unique.into_iter().collect()
}
