use bitvec::prelude::*;
use std::fmt;

/// Per-instance placed/unplaced bookkeeping driving the backtracking search
///
/// Bit `i` is set exactly while instance `i` of the task is committed to the
/// grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementMask {
    bits: BitVec,
}

impl PlacementMask {
    /// Create a mask with every instance unplaced
    pub fn new(instance_count: usize) -> Self {
        Self {
            bits: bitvec![0; instance_count],
        }
    }

    /// Number of instances tracked
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test for a mask tracking no instances
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Mark an instance as committed
    ///
    /// # Panics
    ///
    /// Panics if `instance` is not tracked by the mask
    pub fn place(&mut self, instance: usize) {
        self.write(instance, true);
    }

    /// Mark an instance as no longer committed
    ///
    /// # Panics
    ///
    /// Panics if `instance` is not tracked by the mask
    pub fn unplace(&mut self, instance: usize) {
        self.write(instance, false);
    }

    /// Test instance placement
    pub fn is_placed(&self, instance: usize) -> bool {
        self.bits.get(instance).as_deref() == Some(&true)
    }

    /// Lowest-indexed instance not yet placed
    pub fn first_unplaced(&self) -> Option<usize> {
        self.bits.first_zero()
    }

    /// Test whether every instance is placed
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }

    /// Count placed instances
    pub fn placed_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Unplace every instance
    pub fn reset(&mut self) {
        self.bits.fill(false);
    }

    fn write(&mut self, instance: usize, placed: bool) {
        let len = self.bits.len();
        assert!(
            instance < len,
            "placement mask index {instance} out of range for {len} instances"
        );
        self.bits.set(instance, placed);
    }
}

impl fmt::Display for PlacementMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlacementMask({}/{} placed)",
            self.placed_count(),
            self.len()
        )
    }
}
