#![deny(missing_docs)]
#![doc = "Core identifiers, move tags and error types shared by the immersed plane curve crates."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod moves;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, IpcError};
pub use moves::{Move, MoveFamily};
pub use provenance::SchemaVersion;
pub use rng::RngHandle;

/// Label of a region of the plane cut out by a curve.
///
/// Labels are only meaningful within a single curve code: two codes that
/// differ by a consistent relabeling describe the same diagram. The label
/// [`FaceId::OUT`] is reserved for the unbounded face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceId(i64);

impl FaceId {
    /// The unbounded outer face.
    pub const OUT: FaceId = FaceId(-1);

    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> i64 {
        self.0
    }

    /// Returns whether this is the unbounded outer face.
    pub const fn is_out(&self) -> bool {
        self.0 == Self::OUT.0
    }

    /// Returns the label directly following this one.
    pub const fn succ(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_out() {
            write!(f, "OUT")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<i64> for FaceId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
