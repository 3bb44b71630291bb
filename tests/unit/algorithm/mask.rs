//! Tests for `PlacementMask` bookkeeping

#[cfg(test)]
mod tests {
    use polypack::algorithm::mask::PlacementMask;

    // Verifies a new mask has nothing placed
    // Verified by initializing every bit to 1
    #[test]
    fn test_new_mask_is_unplaced() {
        let mask = PlacementMask::new(4);
        assert_eq!(mask.len(), 4);
        assert_eq!(mask.placed_count(), 0);
        assert_eq!(mask.first_unplaced(), Some(0));
        assert!(!mask.is_complete());
    }

    // Tests the first unplaced instance skips placed ones
    // Verified by returning the first set bit instead of the first clear one
    #[test]
    fn test_first_unplaced_follows_order() {
        let mut mask = PlacementMask::new(3);
        mask.place(0);
        mask.place(2);
        assert_eq!(mask.first_unplaced(), Some(1));
        assert!(mask.is_placed(2));
        assert!(!mask.is_placed(1));

        mask.unplace(0);
        assert_eq!(mask.first_unplaced(), Some(0));
    }

    // Tests completion once every instance is placed
    // Verified by checking any() instead of all()
    #[test]
    fn test_complete_and_reset() {
        let mut mask = PlacementMask::new(2);
        mask.place(0);
        mask.place(1);
        assert!(mask.is_complete());
        assert_eq!(mask.first_unplaced(), None);

        mask.reset();
        assert_eq!(mask.placed_count(), 0);
    }

    // Tests an empty mask is trivially complete
    // Verified by treating an empty mask as incomplete
    #[test]
    fn test_empty_mask_is_complete() {
        let mask = PlacementMask::new(0);
        assert!(mask.is_empty());
        assert!(mask.is_complete());
        assert_eq!(mask.first_unplaced(), None);
    }

    // Tests committing an instance the task does not have halts the search
    // Verified by silently ignoring out-of-range indices in place
    #[test]
    #[should_panic(expected = "placement mask index 5 out of range")]
    fn test_place_out_of_range_panics() {
        let mut mask = PlacementMask::new(2);
        mask.place(5);
    }

    // Tests undoing an instance the task does not have halts the search
    // Verified by silently ignoring out-of-range indices in unplace
    #[test]
    #[should_panic(expected = "placement mask index 2 out of range")]
    fn test_unplace_out_of_range_panics() {
        let mut mask = PlacementMask::new(2);
        mask.unplace(2);
    }

    // Tests placement queries outside the mask read as unplaced
    // Verified by treating unknown indices as placed
    #[test]
    fn test_is_placed_out_of_range() {
        let mask = PlacementMask::new(2);
        assert!(!mask.is_placed(5));
    }

    // Tests display shows placed and total counts
    // Verified by printing only the total
    #[test]
    fn test_display() {
        let mut mask = PlacementMask::new(3);
        mask.place(1);
        assert_eq!(mask.to_string(), "PlacementMask(1/3 placed)");
    }
}
