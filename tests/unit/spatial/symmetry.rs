//! Tests for rotation and reflection expansion of footprints

#[cfg(test)]
mod tests {
    use polypack::spatial::shape::Footprint;
    use polypack::spatial::symmetry::{TransformSet, expand};

    fn footprint(lines: &[&str]) -> Footprint {
        Footprint::canonicalize(lines.iter().enumerate().flat_map(|(r, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == '#')
                .map(move |(c, _)| (r as isize, c as isize))
        }))
    }

    // Tests a fully symmetric square collapses to one variation
    // Verified by skipping deduplication
    #[test]
    fn test_square_has_one_variation() {
        let square = footprint(&["##", "##"]);
        assert_eq!(expand(&square, TransformSet::FULL), vec![square]);
    }

    // Tests a straight bar has exactly two orientations
    // Verified by removing the rotation step
    #[test]
    fn test_bar_has_two_variations() {
        let bar = footprint(&["###"]);
        let variations = expand(&bar, TransformSet::FULL);
        assert_eq!(variations.len(), 2);
        assert!(variations.contains(&footprint(&["#", "#", "#"])));
    }

    // Tests the L-tromino's diagonal mirror symmetry halves its images
    // Verified by using (r, c) -> (-c, r) rotation with a broken mirror
    #[test]
    fn test_l_tromino_has_four_variations() {
        let l = footprint(&["#.", "##"]);
        assert_eq!(expand(&l, TransformSet::FULL).len(), 4);
    }

    // Tests a shape without any symmetry yields the full group of eight
    // Verified by dropping the mirror image from the result
    #[test]
    fn test_asymmetric_shape_has_eight_variations() {
        let l = footprint(&["#.", "#.", "##"]);
        let variations = expand(&l, TransformSet::FULL);
        assert_eq!(variations.len(), 8);
        assert!(variations.contains(&footprint(&["###", "#.."])));
        assert!(variations.contains(&footprint(&[".#", ".#", "##"])));
    }

    // Tests chiral tetrominoes only double under mirroring
    // Verified by inserting unmirrored images twice under different keys
    #[test]
    fn test_s_and_t_tetromino_variations() {
        assert_eq!(expand(&footprint(&[".##", "##."]), TransformSet::FULL).len(), 4);
        assert_eq!(expand(&footprint(&["###", ".#."]), TransformSet::FULL).len(), 4);
    }

    // Tests restricted transform sets produce the matching subgroups
    // Verified by always running four quarter turns
    #[test]
    fn test_restricted_transform_sets() {
        let l = footprint(&["#.", "#.", "##"]);
        let rotations = TransformSet {
            rotations: true,
            reflections: false,
        };
        let reflections = TransformSet {
            rotations: false,
            reflections: true,
        };

        assert_eq!(expand(&l, rotations).len(), 4);
        assert_eq!(expand(&l, reflections).len(), 2);
        assert_eq!(expand(&l, TransformSet::FIXED), vec![l.clone()]);
    }

    // Tests every variation is canonical, keeps the area and comes out sorted
    // Verified by returning variations in insertion order
    #[test]
    fn test_variations_are_canonical_and_ordered() {
        let z = footprint(&["##.", ".#.", ".##"]);
        let variations = expand(&z, TransformSet::FULL);

        for variation in &variations {
            assert_eq!(variation.area(), z.area());
            assert_eq!(variation.cells().iter().map(|&(r, _)| r).min(), Some(0));
            assert_eq!(variation.cells().iter().map(|&(_, c)| c).min(), Some(0));
            assert_eq!(&Footprint::canonicalize(variation.signed_cells()), variation);
        }
        assert!(variations.windows(2).all(|pair| pair.first() < pair.last()));
    }

    // Tests the full group is the default
    // Verified by defaulting to the identity only
    #[test]
    fn test_default_is_full_group() {
        assert_eq!(TransformSet::default(), TransformSet::FULL);
    }
}
