use ipc_core::Move;

use crate::curve::{splice, Curve, Edge};

impl Curve {
    /// Grafts a one-crossing loop onto every edge, on either side.
    ///
    /// The loop on the left adds a new face beside the left face and raises
    /// the Whitney index (`R1_CCW_ADD`); the loop on the right lowers it
    /// (`R1_CW_ADD`). The primitive loops map to fixed canonical curves.
    pub fn increasing_r1_neighbors(&self) -> impl Iterator<Item = (Move, Curve)> + '_ {
        let primitive = if self.len() == 1 {
            if self.whitney() > 0 {
                vec![
                    (Move::R1CcwAdd, Curve::canonical(2)),
                    (Move::R1CwAdd, Curve::canonical(0)),
                ]
            } else {
                vec![
                    (Move::R1CcwAdd, Curve::canonical(0)),
                    (Move::R1CwAdd, Curve::canonical(-2)),
                ]
            }
        } else {
            Vec::new()
        };
        let grafts = if self.len() == 1 { 0 } else { self.len() };
        let fresh = self.fresh_face();

        primitive.into_iter().chain((0..grafts).flat_map(move |position| {
            let edge = self.edges()[position];
            let outward = [edge, Edge::new(fresh, edge.left), edge];
            let inward = [edge, Edge::new(edge.right, fresh), edge];
            [
                (
                    Move::R1CcwAdd,
                    Curve::new(splice(self.edges(), &[(position, &outward[..])])),
                ),
                (
                    Move::R1CwAdd,
                    Curve::new(splice(self.edges(), &[(position, &inward[..])])),
                ),
            ]
        }))
    }

    /// Removes every empty one-crossing loop.
    ///
    /// A loop is found as three consecutive edges whose outer two coincide
    /// and whose middle one encloses a face other than `OUT`. Curves with at
    /// most one crossing collapse onto the primitive loops directly.
    pub fn decreasing_r1_neighbors(&self) -> impl Iterator<Item = (Move, Curve)> + '_ {
        let small = if matches!(self.len(), 1 | 2) {
            match self.whitney() {
                -2 => vec![(Move::R1CwRemove, Curve::canonical(-1))],
                2 => vec![(Move::R1CcwRemove, Curve::canonical(1))],
                0 => vec![
                    (Move::R1CwRemove, Curve::canonical(1)),
                    (Move::R1CcwRemove, Curve::canonical(-1)),
                ],
                _ => Vec::new(),
            }
        } else {
            Vec::new()
        };
        let scanned = if self.len() <= 2 { 0 } else { self.len() };

        small
            .into_iter()
            .chain((0..scanned).filter_map(move |position| {
                let kind = self.empty_loop_at(position)?;
                let after = self.next_position(position);
                let remaining = self
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != position && *i != after)
                    .map(|(_, edge)| *edge);
                Some((kind, Curve::new(remaining)))
            }))
    }

    fn empty_loop_at(&self, position: usize) -> Option<Move> {
        let before = self.at(self.prev_position(position));
        let inner = self.at(position);
        let after = self.at(self.next_position(position));
        if before != after {
            return None;
        }
        if before.left == inner.right && !inner.left.is_out() {
            Some(Move::R1CcwRemove)
        } else if before.right == inner.left && !inner.right.is_out() {
            Some(Move::R1CwRemove)
        } else {
            None
        }
    }
}
