#![deny(missing_docs)]
#![doc = "Combinatorial engine for generic immersed plane curves: face-pair codes, identity up to rotation and relabeling, Whitney index, local moves and invariant diagnostics."]

mod canonical;
/// Face-pair codes, edges, sides and crossing quadruples.
pub mod curve;
/// Face index and on-demand face boundary walks.
pub mod face;
/// Seeded random walks over increasing moves.
pub mod generators;
/// Gauss-code planarity decision.
pub mod gauss;
mod identity;
/// Structural invariant checks run on demand.
pub mod invariants;
mod moves;
/// Storage rows and JSON/bincode round-trips.
pub mod serialization;
mod whitney;

pub use curve::{ccw_shift, cw_shift, Curve, Edge, Occurrence, Quadruple, Side};
pub use face::{FaceIndex, FaceWalk, VertexOrders};
pub use gauss::GaussCode;
pub use generators::{random_curve, random_walk};
pub use ipc_core::{FaceId, Move, MoveFamily};
pub use serialization::{
    curve_from_bytes, curve_from_json, curve_from_pairs_json, curve_from_rows, curve_to_bytes,
    curve_to_json, curve_to_rows, CurveRow,
};
