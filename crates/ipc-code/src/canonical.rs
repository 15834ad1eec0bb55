//! Minimal-crossing representatives of every Whitney index.

use crate::curve::Curve;

impl Curve {
    /// The unique curve with Whitney index `w` and the fewest crossings.
    ///
    /// `w = ±1` is a plain loop (one edge, no crossing), `w = 0` the figure
    /// eight, and `|w| >= 2` a loop carrying `|w| - 1` inner kinks. Negative
    /// indices are the mirror images of positive ones.
    pub fn canonical(w: i64) -> Curve {
        match w {
            1 => Curve::from_pairs([(0, -1)]),
            0 => Curve::from_pairs([(0, -1), (-1, 1)]),
            w if w >= 2 => Curve::from_pairs((1..w).flat_map(|kink| [(0, -1), (kink, 0)])),
            w => Curve::canonical(w.saturating_neg()).reversed(),
        }
    }
}

/// Figure eight with a third lobe, both lobes outside: the J-move image of
/// the positive loop through the outer face.
pub(crate) fn triple_eight() -> Curve {
    Curve::from_pairs([(0, -1), (-1, 1), (2, -1), (-1, 1)])
}

/// Figure eight drawn inside the positive loop.
pub(crate) fn eight_inside() -> Curve {
    Curve::from_pairs([(0, -1), (1, 0), (0, 2), (1, 0)])
}
