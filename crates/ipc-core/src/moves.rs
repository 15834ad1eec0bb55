//! Tags for the local moves connecting curve diagrams.
//!
//! Every move has a stable integer code and name used by the storage layer,
//! and a syntactic inverse given by an explicit table. Applying a move and
//! then its inverse on the result reproduces the original diagram.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, IpcError};

/// The three families of local moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveFamily {
    /// Addition or removal of a one-crossing loop.
    R1,
    /// Splitting or merging of faces through a bigon.
    J,
    /// Inversion of a triangle formed by three distinct crossings.
    Strange,
}

/// A tagged local move together with its orientation or variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Grafts a loop that raises the Whitney index by one.
    #[serde(rename = "R1_CCW_ADD")]
    R1CcwAdd,
    /// Removes a loop, lowering the Whitney index by one.
    #[serde(rename = "R1_CCW_REMOVE")]
    R1CcwRemove,
    /// Grafts a loop that lowers the Whitney index by one.
    #[serde(rename = "R1_CW_ADD")]
    R1CwAdd,
    /// Removes a loop, raising the Whitney index by one.
    #[serde(rename = "R1_CW_REMOVE")]
    R1CwRemove,
    /// Creates a bigon whose sides run in opposite directions.
    #[serde(rename = "J_PLUS_ADD")]
    JPlusAdd,
    /// Removes a bigon whose sides run in opposite directions.
    #[serde(rename = "J_PLUS_REMOVE")]
    JPlusRemove,
    /// Creates a bigon whose sides run in the same direction.
    #[serde(rename = "J_MINUS_ADD")]
    JMinusAdd,
    /// Removes a bigon whose sides run in the same direction.
    #[serde(rename = "J_MINUS_REMOVE")]
    JMinusRemove,
    /// Counter-clockwise triangle with no side agreeing with its orientation.
    #[serde(rename = "S_0_to_3_CCW")]
    S0To3Ccw,
    /// Counter-clockwise triangle with all sides agreeing with its orientation.
    #[serde(rename = "S_3_to_0_CCW")]
    S3To0Ccw,
    /// Counter-clockwise triangle with one side agreeing with its orientation.
    #[serde(rename = "S_1_to_2_CCW")]
    S1To2Ccw,
    /// Counter-clockwise triangle with two sides agreeing with its orientation.
    #[serde(rename = "S_2_to_1_CCW")]
    S2To1Ccw,
    /// Clockwise triangle with no side agreeing with its orientation.
    #[serde(rename = "S_0_to_3_CW")]
    S0To3Cw,
    /// Clockwise triangle with all sides agreeing with its orientation.
    #[serde(rename = "S_3_to_0_CW")]
    S3To0Cw,
    /// Clockwise triangle with one side agreeing with its orientation.
    #[serde(rename = "S_1_to_2_CW")]
    S1To2Cw,
    /// Clockwise triangle with two sides agreeing with its orientation.
    #[serde(rename = "S_2_to_1_CW")]
    S2To1Cw,
}

impl Move {
    /// Every move tag in persisted-code order.
    pub const ALL: [Move; 16] = [
        Move::R1CcwAdd,
        Move::R1CcwRemove,
        Move::R1CwAdd,
        Move::R1CwRemove,
        Move::JPlusAdd,
        Move::JPlusRemove,
        Move::JMinusAdd,
        Move::JMinusRemove,
        Move::S0To3Ccw,
        Move::S3To0Ccw,
        Move::S1To2Ccw,
        Move::S2To1Ccw,
        Move::S0To3Cw,
        Move::S3To0Cw,
        Move::S1To2Cw,
        Move::S2To1Cw,
    ];

    /// Returns the stable integer code stored by the persistence layer.
    pub const fn code(self) -> u16 {
        match self {
            Move::R1CcwAdd => 101,
            Move::R1CcwRemove => 102,
            Move::R1CwAdd => 103,
            Move::R1CwRemove => 104,
            Move::JPlusAdd => 201,
            Move::JPlusRemove => 202,
            Move::JMinusAdd => 203,
            Move::JMinusRemove => 204,
            Move::S0To3Ccw => 301,
            Move::S3To0Ccw => 302,
            Move::S1To2Ccw => 303,
            Move::S2To1Ccw => 304,
            Move::S0To3Cw => 305,
            Move::S3To0Cw => 306,
            Move::S1To2Cw => 307,
            Move::S2To1Cw => 308,
        }
    }

    /// Resolves a persisted integer code.
    pub fn from_code(code: u16) -> Result<Move, IpcError> {
        Move::ALL
            .iter()
            .copied()
            .find(|mv| mv.code() == code)
            .ok_or_else(|| {
                IpcError::Move(
                    ErrorInfo::new("unknown-move", "no move is stored under this code")
                        .with_context("code", code),
                )
            })
    }

    /// Returns the stable display name stored alongside the code.
    pub const fn name(self) -> &'static str {
        match self {
            Move::R1CcwAdd => "R1_CCW_ADD",
            Move::R1CcwRemove => "R1_CCW_REMOVE",
            Move::R1CwAdd => "R1_CW_ADD",
            Move::R1CwRemove => "R1_CW_REMOVE",
            Move::JPlusAdd => "J_PLUS_ADD",
            Move::JPlusRemove => "J_PLUS_REMOVE",
            Move::JMinusAdd => "J_MINUS_ADD",
            Move::JMinusRemove => "J_MINUS_REMOVE",
            Move::S0To3Ccw => "S_0_to_3_CCW",
            Move::S3To0Ccw => "S_3_to_0_CCW",
            Move::S1To2Ccw => "S_1_to_2_CCW",
            Move::S2To1Ccw => "S_2_to_1_CCW",
            Move::S0To3Cw => "S_0_to_3_CW",
            Move::S3To0Cw => "S_3_to_0_CW",
            Move::S1To2Cw => "S_1_to_2_CW",
            Move::S2To1Cw => "S_2_to_1_CW",
        }
    }

    /// Resolves a display name produced by [`Move::name`].
    pub fn from_name(name: &str) -> Result<Move, IpcError> {
        Move::ALL
            .iter()
            .copied()
            .find(|mv| mv.name() == name)
            .ok_or_else(|| {
                IpcError::Move(
                    ErrorInfo::new("unknown-move", "no move carries this name")
                        .with_context("name", name),
                )
            })
    }

    /// Returns the move that undoes this one.
    pub const fn inverse(self) -> Move {
        match self {
            Move::R1CcwAdd => Move::R1CcwRemove,
            Move::R1CcwRemove => Move::R1CcwAdd,
            Move::R1CwAdd => Move::R1CwRemove,
            Move::R1CwRemove => Move::R1CwAdd,
            Move::JPlusAdd => Move::JPlusRemove,
            Move::JPlusRemove => Move::JPlusAdd,
            Move::JMinusAdd => Move::JMinusRemove,
            Move::JMinusRemove => Move::JMinusAdd,
            Move::S0To3Ccw => Move::S3To0Ccw,
            Move::S3To0Ccw => Move::S0To3Ccw,
            Move::S1To2Ccw => Move::S2To1Ccw,
            Move::S2To1Ccw => Move::S1To2Ccw,
            Move::S0To3Cw => Move::S3To0Cw,
            Move::S3To0Cw => Move::S0To3Cw,
            Move::S1To2Cw => Move::S2To1Cw,
            Move::S2To1Cw => Move::S1To2Cw,
        }
    }

    /// Returns the family this move belongs to.
    pub const fn family(self) -> MoveFamily {
        match self {
            Move::R1CcwAdd | Move::R1CcwRemove | Move::R1CwAdd | Move::R1CwRemove => {
                MoveFamily::R1
            }
            Move::JPlusAdd | Move::JPlusRemove | Move::JMinusAdd | Move::JMinusRemove => {
                MoveFamily::J
            }
            _ => MoveFamily::Strange,
        }
    }

    /// Returns whether the move adds crossings.
    pub const fn is_increasing(self) -> bool {
        matches!(
            self,
            Move::R1CcwAdd | Move::R1CwAdd | Move::JPlusAdd | Move::JMinusAdd
        )
    }

    /// Returns whether the move removes crossings.
    pub const fn is_decreasing(self) -> bool {
        matches!(
            self,
            Move::R1CcwRemove | Move::R1CwRemove | Move::JPlusRemove | Move::JMinusRemove
        )
    }

    /// Change of the Whitney index caused by the move.
    pub const fn whitney_delta(self) -> i64 {
        match self {
            Move::R1CcwAdd | Move::R1CwRemove => 1,
            Move::R1CwAdd | Move::R1CcwRemove => -1,
            _ => 0,
        }
    }

    /// Tags a triangle move from the number of sides agreeing with the
    /// triangle orientation and the orientation sign itself.
    ///
    /// Returns `None` when `agreeing > 3`.
    pub const fn strange(agreeing: usize, orientation_positive: bool) -> Option<Move> {
        let mv = match (agreeing, orientation_positive) {
            (0, true) => Move::S0To3Ccw,
            (3, true) => Move::S3To0Ccw,
            (1, true) => Move::S1To2Ccw,
            (2, true) => Move::S2To1Ccw,
            (0, false) => Move::S0To3Cw,
            (3, false) => Move::S3To0Cw,
            (1, false) => Move::S1To2Cw,
            (2, false) => Move::S2To1Cw,
            _ => return None,
        };
        Some(mv)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_an_involution() {
        for mv in Move::ALL {
            assert_ne!(mv, mv.inverse());
            assert_eq!(mv, mv.inverse().inverse());
            assert_eq!(mv.family(), mv.inverse().family());
        }
    }

    #[test]
    fn inverse_negates_whitney_delta() {
        for mv in Move::ALL {
            assert_eq!(mv.whitney_delta(), -mv.inverse().whitney_delta());
        }
    }

    #[test]
    fn strange_tags_pair_complementary_counts() {
        for positive in [true, false] {
            for agreeing in 0..=3 {
                let mv = Move::strange(agreeing, positive).unwrap();
                assert_eq!(mv.inverse(), Move::strange(3 - agreeing, positive).unwrap());
            }
        }
        assert_eq!(Move::strange(4, true), None);
    }
}
