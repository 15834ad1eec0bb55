use std::collections::BTreeSet;

use ipc_core::{FaceId, Move};

use crate::curve::{Curve, Occurrence};
use crate::face::{FaceIndex, VertexOrders};

impl Curve {
    /// Inverts every triangle. Builds the face index on the fly.
    pub fn strange_neighbors(&self) -> impl Iterator<Item = (Move, Curve)> + '_ {
        let index = self.face_index();
        self.strange_neighbors_with(&index)
    }

    /// Same as [`Curve::strange_neighbors`] with a precomputed index.
    ///
    /// A triangle is a bounded face with three sides whose positions are
    /// pairwise at least two apart, so its corners are three distinct
    /// crossings. Each side is pushed through the opposite corner: its
    /// faces swap and the triangle label is replaced by the face lying
    /// beyond that corner. The tag records the triangle orientation and
    /// how many sides agree with it.
    pub fn strange_neighbors_with(
        &self,
        index: &FaceIndex,
    ) -> impl Iterator<Item = (Move, Curve)> + '_ {
        let triangles: Vec<[Occurrence; 3]> = index
            .bounded_faces_of_size(3)
            .into_iter()
            .filter_map(|sides| <[Occurrence; 3]>::try_from(sides).ok())
            .filter(|tri| {
                (0..3).all(|k| {
                    self.index_distance(tri[k].position, tri[(k + 1) % 3].position) > 1
                })
            })
            .collect();
        let orders = if triangles.is_empty() {
            VertexOrders::default()
        } else {
            self.vertex_orders()
        };

        triangles
            .into_iter()
            .filter_map(move |tri| self.invert_triangle(&orders, tri))
    }

    fn invert_triangle(&self, orders: &VertexOrders, tri: [Occurrence; 3]) -> Option<(Move, Curve)> {
        // Faces flanking each side just before and after it.
        let outsides: Vec<BTreeSet<FaceId>> = tri
            .iter()
            .map(|occ| {
                let across = occ.side.opposite();
                BTreeSet::from([
                    self.at(self.prev_position(occ.position)).face(across),
                    self.at(self.next_position(occ.position)).face(across),
                ])
            })
            .collect();

        let mut replacements = [FaceId::OUT; 3];
        for k in 0..3 {
            let mut beyond: BTreeSet<FaceId> = outsides[(k + 1) % 3]
                .intersection(&outsides[(k + 2) % 3])
                .copied()
                .collect();
            if beyond.len() > 1 {
                beyond = beyond.difference(&outsides[k]).copied().collect();
            }
            let mut faces = beyond.into_iter();
            match (faces.next(), faces.next()) {
                (Some(face), None) => replacements[k] = face,
                _ => return None,
            }
        }

        let walk: Vec<usize> = self
            .face_walk_with(orders, tri[0])
            .map(|occ| occ.position)
            .collect();
        let &[a, b, c] = walk.as_slice() else {
            return None;
        };
        let orientation = self.triple_sign(a, b, c);
        let agreeing = tri
            .iter()
            .filter(|occ| occ.side.sign() == orientation)
            .count();
        let tag = Move::strange(agreeing, orientation > 0)?;

        let mut edges = self.edges().to_vec();
        for (occ, face) in tri.iter().zip(replacements) {
            let edge = &mut edges[occ.position];
            *edge = edge.flipped().with_face(occ.side, face);
        }
        Some((tag, Curve::new(edges)))
    }
}
