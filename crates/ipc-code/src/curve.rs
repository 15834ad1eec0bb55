use std::collections::BTreeSet;
use std::fmt;

use ipc_core::errors::{ErrorInfo, IpcError};
use ipc_core::FaceId;
use serde::{Deserialize, Serialize};

/// Side of an edge relative to the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The face to the left of the curve.
    Left,
    /// The face to the right of the curve.
    Right,
}

impl Side {
    /// Returns the other side.
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// `+1` for the left side, `-1` for the right side.
    pub const fn sign(self) -> i64 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }
}

/// One arc of the curve, recorded as the faces on either side of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Face to the left of the direction of travel.
    pub left: FaceId,
    /// Face to the right of the direction of travel.
    pub right: FaceId,
}

impl Edge {
    /// Creates an edge from its two faces.
    pub const fn new(left: FaceId, right: FaceId) -> Self {
        Self { left, right }
    }

    /// Returns the face on the given side.
    pub const fn face(&self, side: Side) -> FaceId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Returns a copy with the face on `side` replaced.
    pub const fn with_face(self, side: Side, face: FaceId) -> Edge {
        match side {
            Side::Left => Edge::new(face, self.right),
            Side::Right => Edge::new(self.left, face),
        }
    }

    /// Swaps the two faces, as seen when travelling the edge backwards.
    pub const fn flipped(self) -> Edge {
        Edge::new(self.right, self.left)
    }

    /// Returns whether either side is the outer face.
    pub const fn touches_out(&self) -> bool {
        self.left.is_out() || self.right.is_out()
    }

    /// Applies a face relabeling to both sides.
    pub fn relabeled(self, map: impl Fn(FaceId) -> FaceId) -> Edge {
        Edge::new(map(self.left), map(self.right))
    }
}

impl From<(i64, i64)> for Edge {
    fn from((left, right): (i64, i64)) -> Self {
        Edge::new(FaceId::from_raw(left), FaceId::from_raw(right))
    }
}

/// A face bordering an edge: the edge position and the side it lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    /// Position of the edge in the cyclic code.
    pub position: usize,
    /// Side of the edge the face lies on.
    pub side: Side,
}

impl Occurrence {
    /// Creates an occurrence.
    pub const fn new(position: usize, side: Side) -> Self {
        Self { position, side }
    }
}

/// The four faces meeting at a crossing, listed in rotational order.
pub type Quadruple = [FaceId; 4];

/// Rotates a quadruple one step clockwise: `(a, b, c, d) -> (d, a, b, c)`.
pub const fn cw_shift(q: Quadruple) -> Quadruple {
    [q[3], q[0], q[1], q[2]]
}

/// Rotates a quadruple one step counter-clockwise: `(a, b, c, d) -> (b, c, d, a)`.
pub const fn ccw_shift(q: Quadruple) -> Quadruple {
    [q[1], q[2], q[3], q[0]]
}

/// Cyclic code of a generic immersed closed curve.
///
/// The code lists, for every edge in travel order, the faces on its left and
/// right. Its starting point carries no meaning: equality and hashing are
/// invariant under rotation and under consistent relabeling of faces. A
/// curve is never mutated once built; every move produces a fresh value.
#[derive(Clone)]
pub struct Curve {
    edges: Vec<Edge>,
}

impl Curve {
    /// Builds a curve from edges without validation.
    ///
    /// Intended for codes produced by the engine itself; external input
    /// should go through [`Curve::try_from_pairs`].
    pub fn new(edges: impl IntoIterator<Item = Edge>) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    /// Builds a curve from raw `(left, right)` pairs without validation.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, i64)>) -> Self {
        Self::new(pairs.into_iter().map(Edge::from))
    }

    /// Builds a curve from raw `(left, right)` pairs, rejecting codes that
    /// cannot describe a curve.
    ///
    /// Shape errors keep their own codes. Codes whose crossings do not pair
    /// up fail with `malformed-curve-code`, carrying the failed check.
    pub fn try_from_pairs(pairs: impl IntoIterator<Item = (i64, i64)>) -> Result<Self, IpcError> {
        let curve = Self::from_pairs(pairs);
        curve.check_shape()?;
        crate::invariants::verify(&curve).map_err(|err| {
            let info = err.info();
            let mut malformed = ErrorInfo::new(
                "malformed-curve-code",
                "faces of the code do not close up around its crossings",
            )
            .with_context("check", &info.code);
            for (key, value) in &info.context {
                malformed = malformed.with_context(key.as_str(), value);
            }
            IpcError::Code(malformed)
        })?;
        Ok(curve)
    }

    fn check_shape(&self) -> Result<(), IpcError> {
        let n = self.edges.len();
        if n == 0 {
            return Err(IpcError::Code(ErrorInfo::new(
                "empty-code",
                "a curve code needs at least one edge",
            )));
        }
        if n != 1 && n % 2 == 1 {
            return Err(IpcError::Code(
                ErrorInfo::new("odd-length", "curve codes have one edge or an even count")
                    .with_context("length", n),
            ));
        }
        if let Some(position) = self.edges.iter().position(|e| e.left == e.right) {
            return Err(IpcError::Code(
                ErrorInfo::new("degenerate-edge", "edge borders the same face on both sides")
                    .with_context("position", position)
                    .with_context("face", self.edges[position].left),
            ));
        }
        if !self.edges.iter().any(Edge::touches_out) {
            return Err(IpcError::Code(
                ErrorInfo::new("missing-outer-face", "no edge borders the outer face")
                    .with_hint("the unbounded face must be labelled -1"),
            ));
        }
        Ok(())
    }

    /// Number of edges in the code.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the code has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of double points.
    pub fn num_vertices(&self) -> usize {
        self.edges.len() / 2
    }

    /// Edges in the current cyclic order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates the edges in the current cyclic order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Edge at a position, read cyclically.
    pub fn at(&self, position: usize) -> Edge {
        self.edges[position % self.edges.len()]
    }

    pub(crate) fn prev_position(&self, position: usize) -> usize {
        let n = self.edges.len();
        (position + n - 1) % n
    }

    pub(crate) fn next_position(&self, position: usize) -> usize {
        (position + 1) % self.edges.len()
    }

    /// Returns the raw `(left, right)` pairs.
    pub fn to_pairs(&self) -> Vec<(i64, i64)> {
        self.edges
            .iter()
            .map(|e| (e.left.as_raw(), e.right.as_raw()))
            .collect()
    }

    /// The mirror-image curve: the same diagram travelled backwards.
    pub fn reversed(&self) -> Curve {
        Curve::new(self.edges.iter().rev().map(|e| e.flipped()))
    }

    /// The same code read from `start` onwards.
    pub fn rotated(&self, start: usize) -> Curve {
        let n = self.edges.len();
        Curve::new((0..n).map(|k| self.edges[(start + k) % n]))
    }

    /// Every face label used by the code.
    pub fn faces(&self) -> BTreeSet<FaceId> {
        self.edges.iter().flat_map(|e| [e.left, e.right]).collect()
    }

    /// Faces meeting where edge `position - 1` runs into edge `position`,
    /// as `pair(position - 1) + reverse(pair(position))`.
    pub fn source_quadruple(&self, position: usize) -> Quadruple {
        let prev = self.at(self.prev_position(position));
        let cur = self.at(position);
        [prev.left, prev.right, cur.right, cur.left]
    }

    /// Faces meeting at the start of edge `position`, as
    /// `pair(position) + reverse(pair(position - 1))`.
    pub fn vertex_order(&self, position: usize) -> Quadruple {
        let prev = self.at(self.prev_position(position));
        let cur = self.at(position);
        [cur.left, cur.right, prev.right, prev.left]
    }

    /// Forward distance from `from` to `to` along the cycle.
    pub fn index_displacement(&self, from: usize, to: usize) -> usize {
        let n = self.edges.len();
        (to % n + n - from % n) % n
    }

    /// Shortest cyclic distance between two positions.
    pub fn index_distance(&self, a: usize, b: usize) -> usize {
        self.index_displacement(a, b)
            .min(self.index_displacement(b, a))
    }

    /// Orientation of three distinct positions met in the order given:
    /// `+1` if they follow the direction of travel, `-1` otherwise.
    pub fn triple_sign(&self, first: usize, second: usize, third: usize) -> i64 {
        let total = self.index_displacement(first, second)
            + self.index_displacement(second, third)
            + self.index_displacement(third, first);
        if total == self.edges.len() {
            1
        } else {
            -1
        }
    }

    /// Smallest label not yet used by any face.
    pub(crate) fn fresh_face(&self) -> FaceId {
        self.edges
            .iter()
            .flat_map(|e| [e.left, e.right])
            .max()
            .unwrap_or(FaceId::OUT)
            .succ()
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Curve({:?})", self.to_pairs())
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Replaces single positions of `edges` by runs of new edges.
pub(crate) fn splice(edges: &[Edge], patches: &[(usize, &[Edge])]) -> Vec<Edge> {
    let extra: usize = patches.iter().map(|(_, run)| run.len()).sum();
    let mut out = Vec::with_capacity(edges.len() + extra);
    for (position, edge) in edges.iter().enumerate() {
        match patches.iter().find(|(at, _)| *at == position) {
            Some((_, run)) => out.extend_from_slice(run),
            None => out.push(*edge),
        }
    }
    out
}

/// Exchanges the outer face with `other`.
pub(crate) fn swap_out(edges: &[Edge], other: FaceId) -> Vec<Edge> {
    edges
        .iter()
        .map(|e| {
            e.relabeled(|face| {
                if face.is_out() {
                    other
                } else if face == other {
                    FaceId::OUT
                } else {
                    face
                }
            })
        })
        .collect()
}
