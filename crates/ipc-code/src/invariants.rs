//! Optional diagnostic pass over a curve code.
//!
//! The generators assume well-formed input and never call into this module.
//! [`Curve::try_from_pairs`] runs it on every externally supplied code, and
//! the explorer can run it on freshly produced curves.

use std::collections::HashMap;

use ipc_core::errors::{ErrorInfo, IpcError};

use crate::curve::{ccw_shift, cw_shift, Curve};

/// Checks the structural invariants of a curve code.
///
/// A single edge must border `OUT` on exactly one side. Longer codes must
/// have even length and every source quadruple must be free of equal
/// cyclic neighbours, unique, and paired with exactly one other quadruple
/// through a clockwise or counter-clockwise shift. The two passes through
/// a crossing sit an odd number of positions apart.
pub fn verify(curve: &Curve) -> Result<(), IpcError> {
    let n = curve.len();
    if n == 0 {
        return Err(IpcError::Code(ErrorInfo::new(
            "empty-code",
            "a curve code needs at least one edge",
        )));
    }
    if n == 1 {
        let edge = curve.at(0);
        if edge.left.is_out() == edge.right.is_out() {
            return Err(IpcError::Code(
                ErrorInfo::new(
                    "primitive-loop",
                    "a single edge must border the outer face on exactly one side",
                )
                .with_context("left", edge.left)
                .with_context("right", edge.right),
            ));
        }
        return Ok(());
    }
    if n % 2 == 1 {
        return Err(IpcError::Code(
            ErrorInfo::new("odd-length", "curve codes have one edge or an even count")
                .with_context("length", n),
        ));
    }

    let mut positions = HashMap::with_capacity(n);
    for position in 0..n {
        let q = curve.source_quadruple(position);
        if q[0] == q[1] || q[1] == q[2] || q[2] == q[3] || q[3] == q[0] {
            return Err(IpcError::Code(
                ErrorInfo::new("degenerate-crossing", "neighbouring faces at a crossing coincide")
                    .with_context("position", position),
            ));
        }
        if let Some(earlier) = positions.insert(q, position) {
            return Err(IpcError::Code(
                ErrorInfo::new("repeated-crossing", "two passes share the same quadruple")
                    .with_context("position", position)
                    .with_context("earlier", earlier),
            ));
        }
    }

    for position in 0..n {
        let q = curve.source_quadruple(position);
        let partner = match (positions.get(&cw_shift(q)), positions.get(&ccw_shift(q))) {
            (Some(p), None) | (None, Some(p)) => *p,
            (found_cw, found_ccw) => {
                return Err(IpcError::Code(
                    ErrorInfo::new("unpaired-crossing", "crossing pass has no unique partner")
                        .with_context("position", position)
                        .with_context("cw", found_cw.is_some())
                        .with_context("ccw", found_ccw.is_some()),
                ));
            }
        };
        if position.abs_diff(partner) % 2 == 0 {
            return Err(IpcError::Code(
                ErrorInfo::new("even-separation", "passes through a crossing are an even distance apart")
                    .with_context("position", position)
                    .with_context("partner", partner),
            ));
        }
    }
    Ok(())
}
