//! Generators of combinatorially adjacent curves.
//!
//! Each generator lazily yields `(Move, Curve)` pairs and leaves the
//! receiver untouched. Decreasing moves come before increasing ones in
//! [`Curve::neighbors`].

mod j;
mod r1;
mod strange;

use ipc_core::Move;

use crate::curve::Curve;

impl Curve {
    /// Every neighbour reachable by one move: R1 removals, J removals,
    /// triangle moves, J additions, then R1 additions.
    ///
    /// The face index is computed once and shared by the face-based
    /// generators.
    pub fn neighbors(&self) -> impl Iterator<Item = (Move, Curve)> + '_ {
        let index = self.face_index();
        self.decreasing_r1_neighbors()
            .chain(self.decreasing_j_neighbors_with(&index))
            .chain(self.strange_neighbors_with(&index))
            .chain(self.increasing_j_neighbors_with(&index))
            .chain(self.increasing_r1_neighbors())
    }
}
