#![allow(dead_code)]

use ipc_code::Curve;

/// Trefoil carrying one extra kink.
pub fn trefoil_with_kink() -> Curve {
    Curve::from_pairs([
        (1, -1),
        (0, 2),
        (3, -1),
        (0, 1),
        (4, 0),
        (0, 1),
        (2, -1),
        (0, 3),
    ])
}

/// Asymmetric curve with seven triangles, two empty bigons and one empty
/// one-crossing loop.
pub fn asymmetric() -> Curve {
    Curve::from_pairs([
        (1, -1),
        (2, 8),
        (7, 3),
        (4, 9),
        (11, 5),
        (-1, 10),
        (9, 5),
        (4, 11),
        (7, -1),
        (6, 1),
        (7, 2),
        (3, 8),
        (9, -1),
        (-1, 12),
        (9, -1),
        (5, 10),
        (11, -1),
        (4, 7),
        (9, 3),
        (-1, 8),
        (1, 2),
        (6, 7),
    ])
}

/// Two crossings around a three-sided face whose corners repeat.
pub fn three_sided_non_triangle() -> Curve {
    Curve::from_pairs([(0, -1), (-1, 2), (0, -1), (1, 0)])
}

/// Figure eight with a third lobe.
pub fn triple_eight() -> Curve {
    Curve::from_pairs([(1, -1), (-1, 0), (2, -1), (-1, 0)])
}

pub fn test_curves() -> Vec<Curve> {
    vec![
        trefoil_with_kink(),
        asymmetric(),
        three_sided_non_triangle(),
        triple_eight(),
    ]
}

/// The named fixtures followed by the canonical curves of index -5..=5.
pub fn diverse_curves() -> Vec<Curve> {
    let mut curves = test_curves();
    curves.extend((-5..=5).map(Curve::canonical));
    curves
}
