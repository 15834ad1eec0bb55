use std::collections::HashSet;

use crate::curve::{ccw_shift, cw_shift, Curve};

impl Curve {
    /// Whitney index (turning number) of the curve.
    ///
    /// The walk starts just after an edge touching the outer face, whose
    /// side fixes the initial contribution. Every crossing is then met
    /// twice; the second pass finds the first pass's vertex order rotated
    /// one step clockwise (+1) or counter-clockwise (-1).
    pub fn whitney(&self) -> i64 {
        let n = self.len();
        let Some(start) = self.iter().position(|edge| edge.touches_out()) else {
            return 0;
        };
        let seed = self.at(start);
        let mut index = if seed.left.is_out() { -1 } else { 1 };

        let mut seen = HashSet::with_capacity(n);
        for step in 1..=n {
            let order = self.vertex_order(start + step);
            if seen.contains(&cw_shift(order)) {
                index += 1;
            } else if seen.contains(&ccw_shift(order)) {
                index -= 1;
            } else {
                seen.insert(order);
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_loops_have_unit_index() {
        assert_eq!(Curve::from_pairs([(0, -1)]).whitney(), 1);
        assert_eq!(Curve::from_pairs([(-1, 0)]).whitney(), -1);
        assert_eq!(Curve::from_pairs([(0, -1), (-1, 1)]).whitney(), 0);
    }

    #[test]
    fn index_does_not_depend_on_start() {
        let curve = Curve::from_pairs([
            (1, -1),
            (0, 2),
            (3, -1),
            (0, 1),
            (4, 0),
            (0, 1),
            (2, -1),
            (0, 3),
        ]);
        for shift in 0..curve.len() {
            assert_eq!(curve.rotated(shift).whitney(), 3);
        }
        assert_eq!(curve.reversed().whitney(), -3);
    }
}
