//! Property-based tests for the codec, bounds checks and equality.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::vec::Vec;

    use crate::validation::{cell_index, check_range};
    use crate::{equality, Coordinate, ListView, Result, SparseMatrix};

    /// Grid backed by a validity mask and a value buffer
    #[derive(Debug, Clone)]
    struct MaskGrid {
        width: usize,
        height: usize,
        cells: Vec<Option<u8>>,
    }

    impl SparseMatrix for MaskGrid {
        type Element = u8;

        fn max_width(&self) -> usize {
            self.width
        }

        fn max_height(&self) -> usize {
            self.height
        }

        fn validator(&self, x: usize, y: usize) -> bool {
            self.cells[x + y * self.width].is_some()
        }

        fn read_cell(&self, x: usize, y: usize) -> Result<u8> {
            Ok(self.cells[x + y * self.width].unwrap_or_default())
        }
    }

    struct VecView(Vec<i32>);

    impl ListView for VecView {
        type Item = i32;

        fn len(&self) -> usize {
            self.0.len()
        }

        fn get(&self, index: usize) -> Result<i32> {
            crate::validation::check_index(index, self.0.len())?;
            Ok(self.0[index])
        }
    }

    // Strategy for generating small sparse grids
    fn mask_grid() -> impl Strategy<Value = MaskGrid> {
        (0usize..6, 0usize..6).prop_flat_map(|(width, height)| {
            proptest::collection::vec(proptest::option::of(0u8..4), width * height).prop_map(
                move |cells| MaskGrid {
                    width,
                    height,
                    cells,
                },
            )
        })
    }

    proptest! {
        // Coordinate codec

        #[test]
        fn coordinate_round_trip(x in i16::MIN as i32..=i16::MAX as i32, y in i16::MIN as i32..=i16::MAX as i32) {
            let pos = Coordinate::new(x, y);
            prop_assert_eq!(pos.x(), x);
            prop_assert_eq!(pos.y(), y);
            prop_assert_eq!(Coordinate::from_packed(pos.packed()), pos);
        }

        // Bounds

        #[test]
        fn cell_index_matches_range(x in -10i32..10, y in -10i32..10, w in 0usize..8, h in 0usize..8) {
            let inside = x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h;
            prop_assert_eq!(cell_index(x, y, w, h).is_some(), inside);
        }

        #[test]
        fn is_valid_agrees_with_validator(grid in mask_grid(), x in -2i32..8, y in -2i32..8) {
            let expected = match cell_index(x, y, grid.width, grid.height) {
                Some((cx, cy)) => grid.validator(cx, cy),
                None => false,
            };
            prop_assert_eq!(grid.is_valid(x, y), expected);
            prop_assert_eq!(grid.get(x, y).is_ok(), expected);
        }

        // Sublists

        #[test]
        fn sublist_defined_exactly_on_ordered_bounds(
            data in proptest::collection::vec(any::<i32>(), 0..12),
            from in 0usize..14,
            to in 0usize..14,
        ) {
            let view = VecView(data);
            let n = view.len();
            let sub = view.sublist(from, to);
            prop_assert_eq!(sub.is_ok(), from <= to && to <= n);
            prop_assert_eq!(check_range(from, to, n).is_ok(), sub.is_ok());
            if let Ok(sub) = sub {
                prop_assert_eq!(sub.len(), to - from);
                for k in 0..sub.len() {
                    prop_assert_eq!(sub.get(k), view.get(from + k));
                }
            }
        }

        // Equality

        #[test]
        fn content_equals_reflexive(grid in mask_grid()) {
            prop_assert!(equality::content_equals(&grid, &grid));
            prop_assert!(grid.content_equals(&grid.copy_of()));
        }

        #[test]
        fn content_equals_symmetric(a in mask_grid(), b in mask_grid()) {
            prop_assert_eq!(a.content_equals(&b), b.content_equals(&a));
        }

        #[test]
        fn indices_are_row_major_and_valid(grid in mask_grid()) {
            let positions: Vec<Coordinate> = grid.indices().collect();
            let expected = grid.cells.iter().filter(|c| c.is_some()).count();
            prop_assert_eq!(positions.len(), expected);
            for pair in positions.windows(2) {
                prop_assert!((pair[0].y(), pair[0].x()) < (pair[1].y(), pair[1].x()));
            }
            for pos in &positions {
                prop_assert!(grid.is_valid_at(*pos));
            }
            prop_assert_eq!(grid.iter().count(), expected);
        }
    }
}
