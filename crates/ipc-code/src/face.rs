//! Face structure inferred on demand from the cyclic code.
//!
//! No mesh is stored: the boundary of a face is recovered by matching each
//! crossing's rotated quadruple against the quadruple recorded at the other
//! pass through the same crossing.

use std::borrow::Cow;
use std::collections::HashMap;

use indexmap::IndexMap;
use ipc_core::FaceId;

use crate::curve::{ccw_shift, cw_shift, Curve, Occurrence, Quadruple, Side};

/// Every face of a curve with the edge sides bordering it, in code order.
#[derive(Debug, Clone, Default)]
pub struct FaceIndex {
    faces: IndexMap<FaceId, Vec<Occurrence>>,
}

impl FaceIndex {
    /// Builds the index by scanning the code once.
    pub fn build(curve: &Curve) -> Self {
        let mut faces: IndexMap<FaceId, Vec<Occurrence>> = IndexMap::new();
        for (position, edge) in curve.iter().enumerate() {
            faces
                .entry(edge.left)
                .or_default()
                .push(Occurrence::new(position, Side::Left));
            faces
                .entry(edge.right)
                .or_default()
                .push(Occurrence::new(position, Side::Right));
        }
        Self { faces }
    }

    /// Number of distinct faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns whether the index holds no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Edge sides bordering `face`, empty for unknown labels.
    pub fn occurrences(&self, face: FaceId) -> &[Occurrence] {
        self.faces.get(&face).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edge sides bordering `face`.
    pub fn boundary_len(&self, face: FaceId) -> usize {
        self.occurrences(face).len()
    }

    /// Iterates faces in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &[Occurrence])> {
        self.faces.iter().map(|(face, occ)| (*face, occ.as_slice()))
    }

    /// Bounded faces whose boundary has exactly `sides` edge sides.
    pub(crate) fn bounded_faces_of_size(&self, sides: usize) -> Vec<Vec<Occurrence>> {
        self.faces
            .iter()
            .filter(|(face, occ)| !face.is_out() && occ.len() == sides)
            .map(|(_, occ)| occ.clone())
            .collect()
    }
}

/// Position of every crossing pass, keyed by its vertex order.
#[derive(Debug, Clone, Default)]
pub struct VertexOrders {
    positions: HashMap<Quadruple, usize>,
}

impl VertexOrders {
    /// Records the vertex order at the start of every edge.
    pub fn build(curve: &Curve) -> Self {
        let positions = (0..curve.len())
            .map(|position| (curve.vertex_order(position), position))
            .collect();
        Self { positions }
    }

    /// Position whose vertex order equals `order`.
    pub fn position(&self, order: &Quadruple) -> Option<usize> {
        self.positions.get(order).copied()
    }
}

/// Walk around the boundary of one face, starting from a given edge side.
///
/// Yields each bordering edge side once and stops on returning to the
/// starting position.
#[derive(Debug, Clone)]
pub struct FaceWalk<'a> {
    curve: &'a Curve,
    orders: Cow<'a, VertexOrders>,
    start: usize,
    next: Option<Occurrence>,
    budget: usize,
}

impl<'a> FaceWalk<'a> {
    pub(crate) fn new(curve: &'a Curve, orders: Cow<'a, VertexOrders>, start: Occurrence) -> Self {
        Self {
            curve,
            orders,
            start: start.position,
            next: Some(start),
            budget: 2 * curve.len(),
        }
    }

    fn step(&self, from: Occurrence) -> Option<Occurrence> {
        let curve = self.curve;
        let order = match from.side {
            Side::Left => {
                let prev = curve.at(from.position);
                let next = curve.at(curve.next_position(from.position));
                [next.left, next.right, prev.right, prev.left]
            }
            Side::Right => {
                let prev = curve.at(curve.prev_position(from.position));
                let next = curve.at(from.position);
                [prev.right, prev.left, next.left, next.right]
            }
        };
        if let Some(position) = self.orders.position(&cw_shift(order)) {
            return Some(Occurrence::new(position, Side::Left));
        }
        self.orders
            .position(&ccw_shift(order))
            .map(|position| Occurrence::new(curve.prev_position(position), Side::Right))
    }
}

impl Iterator for FaceWalk<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        let current = self.next.take()?;
        if self.budget == 0 {
            return None;
        }
        self.budget -= 1;
        let start = self.start;
        self.next = self.step(current).filter(|occ| occ.position != start);
        Some(current)
    }
}

impl Curve {
    /// Groups the edge sides of the code by face.
    pub fn face_index(&self) -> FaceIndex {
        FaceIndex::build(self)
    }

    /// Vertex orders of every position, for repeated face walks.
    pub fn vertex_orders(&self) -> VertexOrders {
        VertexOrders::build(self)
    }

    /// Walks the boundary of the face lying on `start`.
    pub fn face_walk(&self, start: Occurrence) -> FaceWalk<'_> {
        FaceWalk::new(self, Cow::Owned(self.vertex_orders()), start)
    }

    /// Same as [`Curve::face_walk`] but reuses precomputed vertex orders.
    pub fn face_walk_with<'a>(&'a self, orders: &'a VertexOrders, start: Occurrence) -> FaceWalk<'a> {
        FaceWalk::new(self, Cow::Borrowed(orders), start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_around_outer_face_of_nested_loops() {
        let curve = Curve::canonical(4);
        assert_eq!(curve.at(0).left.as_raw(), 0);
        assert!(curve.at(0).right.is_out());
        let walk: Vec<Occurrence> = curve.face_walk(Occurrence::new(0, Side::Left)).collect();
        let expected: Vec<Occurrence> = (0..6)
            .map(|i| Occurrence::new(i, if i % 2 == 0 { Side::Left } else { Side::Right }))
            .collect();
        assert_eq!(walk, expected);
    }

    #[test]
    fn index_groups_sides_by_face() {
        let curve = Curve::from_pairs([(1, -1), (-1, 0), (2, -1), (-1, 0)]);
        let index = curve.face_index();
        assert_eq!(index.len(), 4);
        assert_eq!(index.boundary_len(FaceId::OUT), 4);
        assert_eq!(
            index.occurrences(FaceId::from_raw(0)),
            &[Occurrence::new(1, Side::Right), Occurrence::new(3, Side::Right)]
        );
        assert_eq!(index.bounded_faces_of_size(2).len(), 1);
        assert!(index.occurrences(FaceId::from_raw(9)).is_empty());
    }

    #[test]
    fn walk_visits_every_side_of_a_bigon() {
        let curve = Curve::from_pairs([(1, -1), (-1, 0), (2, -1), (-1, 0)]);
        let orders = curve.vertex_orders();
        let walk: Vec<usize> = curve
            .face_walk_with(&orders, Occurrence::new(1, Side::Right))
            .map(|occ| occ.position)
            .collect();
        assert_eq!(walk.len(), 2);
        assert!(walk.contains(&1) && walk.contains(&3));
    }
}
