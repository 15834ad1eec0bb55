//! Persisted forms of a curve code: storage rows, JSON and bincode.

use ipc_core::errors::{ErrorInfo, IpcError};
use ipc_core::SchemaVersion;
use serde::{Deserialize, Serialize};

use crate::curve::Curve;

/// One stored edge of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurveRow {
    /// Position of the edge in the cyclic code.
    pub position: usize,
    /// Face on the left of the edge.
    pub left_face: i64,
    /// Face on the right of the edge.
    pub right_face: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableCurve {
    schema_version: SchemaVersion,
    whitney: i64,
    code: Vec<(i64, i64)>,
}

/// Flattens a curve into one row per edge.
pub fn curve_to_rows(curve: &Curve) -> Vec<CurveRow> {
    curve
        .iter()
        .enumerate()
        .map(|(position, edge)| CurveRow {
            position,
            left_face: edge.left.as_raw(),
            right_face: edge.right.as_raw(),
        })
        .collect()
}

/// Rebuilds a curve from its rows, in any order.
///
/// Positions must cover `0..rows.len()` exactly once; the resulting code is
/// then checked like any external input.
pub fn curve_from_rows(rows: &[CurveRow]) -> Result<Curve, IpcError> {
    let mut slots: Vec<Option<(i64, i64)>> = vec![None; rows.len()];
    for row in rows {
        let slot = slots.get_mut(row.position).ok_or_else(|| {
            IpcError::Code(
                ErrorInfo::new("missing-position", "row position lies beyond the stored length")
                    .with_context("position", row.position)
                    .with_context("rows", rows.len()),
            )
        })?;
        if slot.is_some() {
            return Err(IpcError::Code(
                ErrorInfo::new("duplicate-position", "two rows share a position")
                    .with_context("position", row.position),
            ));
        }
        *slot = Some((row.left_face, row.right_face));
    }
    // Every slot is filled once positions are unique and in range.
    let pairs: Vec<(i64, i64)> = slots.into_iter().flatten().collect();
    Curve::try_from_pairs(pairs)
}

/// Serializes a curve to a JSON document.
pub fn curve_to_json(curve: &Curve) -> Result<String, IpcError> {
    let payload = SerializableCurve {
        schema_version: SchemaVersion::default(),
        whitney: curve.whitney(),
        code: curve.to_pairs(),
    };
    serde_json::to_string_pretty(&payload)
        .map_err(|err| IpcError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a curve from a JSON document written by [`curve_to_json`].
pub fn curve_from_json(data: &str) -> Result<Curve, IpcError> {
    let payload: SerializableCurve = serde_json::from_str(data)
        .map_err(|err| IpcError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    let current = SchemaVersion::default();
    if !current.reads(&payload.schema_version) {
        return Err(IpcError::Serde(
            ErrorInfo::new("schema-version", "document was written by an incompatible schema")
                .with_context("found", format!("{:?}", payload.schema_version))
                .with_context("expected", format!("{current:?}")),
        ));
    }
    Curve::try_from_pairs(payload.code)
}

/// Serializes a curve into a binary blob.
pub fn curve_to_bytes(curve: &Curve) -> Result<Vec<u8>, IpcError> {
    let json = curve_to_json(curve)?;
    bincode::serialize(&json)
        .map_err(|err| IpcError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a curve from a blob written by [`curve_to_bytes`].
pub fn curve_from_bytes(bytes: &[u8]) -> Result<Curve, IpcError> {
    let json: String = bincode::deserialize(bytes)
        .map_err(|err| IpcError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    curve_from_json(&json)
}

/// Parses a bare JSON list of `[left, right]` pairs, as typed on a command
/// line.
pub fn curve_from_pairs_json(data: &str) -> Result<Curve, IpcError> {
    let pairs: Vec<(i64, i64)> = serde_json::from_str(data)
        .map_err(|err| IpcError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    Curve::try_from_pairs(pairs)
}
