use ipc_core::{FaceId, Move};

use crate::canonical::{eight_inside, triple_eight};
use crate::curve::{splice, swap_out, Curve, Edge, Occurrence, Side};
use crate::face::{FaceIndex, VertexOrders};

/// Reverses a run of edges and flips each, so it reads the same when the
/// neighbouring face sits on the other side.
fn backwards(run: [Edge; 3]) -> [Edge; 3] {
    let [a, b, c] = run;
    [c.flipped(), b.flipped(), a.flipped()]
}

/// The linked curve, followed by its copy with `split` and `OUT` exchanged
/// when the split face is the outer one.
fn with_swapped_out(tag: Move, edges: Vec<Edge>, split: FaceId, new: FaceId) -> Vec<(Move, Curve)> {
    if split.is_out() {
        let swapped = swap_out(&edges, new);
        vec![(tag, Curve::new(edges)), (tag, Curve::new(swapped))]
    } else {
        vec![(tag, Curve::new(edges))]
    }
}

impl Curve {
    /// Pushes one edge across another bordering the same face, creating a
    /// bigon. Builds the face index on the fly.
    pub fn increasing_j_neighbors(&self) -> impl Iterator<Item = (Move, Curve)> + '_ {
        let index = self.face_index();
        self.increasing_j_neighbors_with(&index)
    }

    /// Same as [`Curve::increasing_j_neighbors`] with a precomputed index.
    ///
    /// Every unordered pair of sides of a face is linked, a side with
    /// itself included. When the split face is `OUT`, both halves may
    /// become the new outer face, so a second variant swaps them.
    pub fn increasing_j_neighbors_with(
        &self,
        index: &FaceIndex,
    ) -> impl Iterator<Item = (Move, Curve)> + '_ {
        let primitive = if self.len() == 1 {
            let (outer, inner) = if self.whitney() > 0 {
                (triple_eight(), eight_inside())
            } else {
                (triple_eight().reversed(), eight_inside().reversed())
            };
            vec![
                (Move::JMinusAdd, outer),
                (Move::JMinusAdd, inner.clone()),
                (Move::JMinusAdd, inner),
            ]
        } else {
            Vec::new()
        };

        let mut links = Vec::new();
        if self.len() > 1 {
            for (_, sides) in index.iter() {
                for (k, first) in sides.iter().enumerate() {
                    for second in &sides[k..] {
                        links.push((*first, *second));
                    }
                }
            }
        }
        let orders = if links.is_empty() {
            VertexOrders::default()
        } else {
            self.vertex_orders()
        };
        let fresh = self.fresh_face();

        primitive.into_iter().chain(
            links
                .into_iter()
                .flat_map(move |(first, second)| self.link_sides(&orders, fresh, first, second)),
        )
    }

    fn link_sides(
        &self,
        orders: &VertexOrders,
        fresh: FaceId,
        first: Occurrence,
        second: Occurrence,
    ) -> Vec<(Move, Curve)> {
        let (c, d) = (fresh, fresh.succ());
        if first == second {
            let edge = self.at(first.position);
            let a = edge.face(first.side);
            let b = edge.face(first.side.opposite());
            let mut gadget = [
                Edge::new(a, b),
                Edge::new(b, c),
                Edge::new(d, b),
                Edge::new(b, c),
                Edge::new(a, b),
            ];
            if first.side == Side::Right {
                gadget = gadget.map(Edge::flipped);
            }
            let edges = splice(self.edges(), &[(first.position, &gadget[..])]);
            return with_swapped_out(Move::JMinusAdd, edges, a, d);
        }

        let f0 = self.at(first.position).face(first.side);
        let f1 = self.at(first.position).face(first.side.opposite());
        let f2 = self.at(second.position).face(second.side.opposite());

        let mut run1 = [Edge::new(f1, f0), Edge::new(c, f2), Edge::new(f1, d)];
        let mut run2 = [Edge::new(f0, f2), Edge::new(f1, c), Edge::new(d, f2)];
        if first.side != Side::Right {
            run1 = backwards(run1);
        }
        if second.side != Side::Left {
            run2 = backwards(run2);
        }

        // The part of f0 met walking from the second side back to the
        // first one becomes d.
        let mut edges = self.edges().to_vec();
        for occ in self.face_walk_with(orders, second) {
            if occ == first {
                break;
            }
            let edge = &mut edges[occ.position];
            *edge = edge.with_face(occ.side, d);
        }
        let edges = splice(&edges, &[(first.position, &run1[..]), (second.position, &run2[..])]);

        let tag = if first.side == second.side {
            Move::JMinusAdd
        } else {
            Move::JPlusAdd
        };
        with_swapped_out(tag, edges, f0, d)
    }

    /// Collapses every bigon. Builds the face index on the fly.
    pub fn decreasing_j_neighbors(&self) -> impl Iterator<Item = (Move, Curve)> + '_ {
        let index = self.face_index();
        self.decreasing_j_neighbors_with(&index)
    }

    /// Same as [`Curve::decreasing_j_neighbors`] with a precomputed index.
    ///
    /// A bigon is a bounded face with two sides. Removing it deletes its
    /// two crossings and merges the faces flanking it; `OUT` absorbs the
    /// other face when it is one of them. Two-crossing curves are matched
    /// against the known J images of the primitive loops instead.
    pub fn decreasing_j_neighbors_with(
        &self,
        index: &FaceIndex,
    ) -> impl Iterator<Item = (Move, Curve)> + '_ {
        let mut small = Vec::new();
        let mut bigons = Vec::new();
        if self.len() > 2 {
            bigons = index.bounded_faces_of_size(2);
            if self.len() == 4 {
                if !bigons.is_empty() {
                    small = self.collapse_two_crossings();
                }
                bigons.clear();
            }
        }

        small.into_iter().chain(
            bigons
                .into_iter()
                .map(move |sides| self.collapse_bigon(sides[0], sides[1])),
        )
    }

    fn collapse_two_crossings(&self) -> Vec<(Move, Curve)> {
        let (outer, inner) = (triple_eight(), eight_inside());
        if *self == outer || *self == inner {
            vec![(Move::JMinusRemove, Curve::canonical(1))]
        } else if *self == outer.reversed() || *self == inner.reversed() {
            vec![(Move::JMinusRemove, Curve::canonical(-1))]
        } else {
            Vec::new()
        }
    }

    fn collapse_bigon(&self, first: Occurrence, second: Occurrence) -> (Move, Curve) {
        let across = first.side.opposite();
        let mut old = self.at(self.prev_position(first.position)).face(across);
        let mut new = self.at(self.next_position(first.position)).face(across);
        if old.is_out() {
            std::mem::swap(&mut old, &mut new);
        }

        let dropped = [
            first.position,
            self.prev_position(first.position),
            second.position,
            self.prev_position(second.position),
        ];
        let remaining = self
            .iter()
            .enumerate()
            .filter(|(position, _)| !dropped.contains(position))
            .map(|(_, edge)| edge.relabeled(|face| if face == old { new } else { face }));

        let tag = if first.side == second.side {
            Move::JMinusRemove
        } else {
            Move::JPlusRemove
        };
        (tag, Curve::new(remaining))
    }
}
