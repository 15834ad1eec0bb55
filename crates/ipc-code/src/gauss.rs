//! Planarity of signed Gauss codes.
//!
//! Independent of the face-pair engine: a Gauss code lists the crossings
//! met along a closed curve, each label once with a positive sign and once
//! with a negative one, and the question is whether some plane curve
//! realizes it.

use std::collections::HashMap;

use ipc_core::errors::{ErrorInfo, IpcError};
use serde::{Deserialize, Serialize};

/// A validated signed Gauss code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaussCode {
    labels: Vec<i64>,
}

impl GaussCode {
    /// Validates that every label is nonzero and appears exactly once with
    /// each sign.
    pub fn new(labels: Vec<i64>) -> Result<Self, IpcError> {
        if let Some(position) = labels.iter().position(|label| *label == 0) {
            return Err(IpcError::Gauss(
                ErrorInfo::new("zero-label", "zero is reserved for the base point")
                    .with_context("position", position),
            ));
        }
        let mut seen: HashMap<i64, usize> = HashMap::with_capacity(labels.len());
        for (position, label) in labels.iter().enumerate() {
            if let Some(earlier) = seen.insert(*label, position) {
                return Err(IpcError::Gauss(
                    ErrorInfo::new("repeated-label", "signed label occurs twice")
                        .with_context("label", label)
                        .with_context("position", position)
                        .with_context("earlier", earlier),
                ));
            }
        }
        if let Some(label) = labels.iter().find(|label| !seen.contains_key(&-**label)) {
            return Err(IpcError::Gauss(
                ErrorInfo::new("unpaired-label", "label lacks its oppositely signed twin")
                    .with_context("label", label)
                    .with_hint("every crossing is passed once over each sign"),
            ));
        }
        Ok(Self { labels })
    }

    /// Signed labels in travel order.
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Number of crossings described.
    pub fn num_crossings(&self) -> usize {
        self.labels.len() / 2
    }

    /// Decides whether a plane curve realizes the code.
    ///
    /// The code is framed by a base point at both ends. Positions are
    /// highlighted in order until one meets an already highlighted twin;
    /// from there the boundary of the enclosed region is traced by turning
    /// onto highlighted paths. Returning to the starting position means the
    /// region cannot be closed off and the code is not planar.
    pub fn is_planar(&self) -> bool {
        let framed: Vec<i64> = std::iter::once(0)
            .chain(self.labels.iter().copied())
            .chain(std::iter::once(0))
            .collect();
        let len = framed.len() as isize;
        let last = len - 1;

        let positions: HashMap<i64, isize> = framed
            .iter()
            .enumerate()
            .skip(1)
            .take(self.labels.len())
            .map(|(i, label)| (*label, i as isize))
            .collect();
        let mut twin: Vec<isize> = vec![0; framed.len()];
        twin[0] = last;
        twin[last as usize] = 0;
        for i in 1..last {
            twin[i as usize] = positions.get(&-framed[i as usize]).copied().unwrap_or(i);
        }
        let sign = |i: isize| -> isize {
            if i == 0 {
                1
            } else if i == last {
                -1
            } else {
                framed[i as usize].signum() as isize
            }
        };

        let mut i: isize = -1;
        loop {
            // Highlight forward until hitting a position whose twin came first.
            loop {
                i += 1;
                if i == len {
                    return true;
                }
                if i > twin[i as usize] {
                    break;
                }
            }

            // Trace the region behind the wall just hit.
            let mut step: isize = -1;
            let mut j = i;
            loop {
                j += step;
                if j == i || j >= len {
                    return false;
                }
                if j == -1 {
                    step = -step;
                } else if twin[j as usize] < i {
                    step *= sign(j);
                    j = twin[j as usize];
                } else if j == twin[i as usize] && step == sign(i) {
                    break;
                }
            }
        }
    }
}
