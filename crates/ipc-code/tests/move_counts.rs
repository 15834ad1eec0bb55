mod common;

use std::collections::HashSet;

use ipc_code::{Curve, FaceId, Move};

use common::{asymmetric, diverse_curves, three_sided_non_triangle, trefoil_with_kink, triple_eight};

#[derive(Debug, PartialEq, Eq)]
struct Counts {
    r1_remove: usize,
    j_remove: usize,
    strange: usize,
    j_add: usize,
    r1_add: usize,
    all: usize,
}

fn counts(curve: &Curve) -> Counts {
    Counts {
        r1_remove: curve.decreasing_r1_neighbors().count(),
        j_remove: curve.decreasing_j_neighbors().count(),
        strange: curve.strange_neighbors().count(),
        j_add: curve.increasing_j_neighbors().count(),
        r1_add: curve.increasing_r1_neighbors().count(),
        all: curve.neighbors().count(),
    }
}

fn expect(r1_remove: usize, j_remove: usize, strange: usize, j_add: usize, r1_add: usize) -> Counts {
    Counts {
        r1_remove,
        j_remove,
        strange,
        j_add,
        r1_add,
        all: r1_remove + j_remove + strange + j_add + r1_add,
    }
}

#[test]
fn named_fixtures_have_known_move_counts() {
    assert_eq!(counts(&trefoil_with_kink()), expect(1, 2, 1, 40, 16));
    assert_eq!(counts(&asymmetric()), expect(1, 2, 7, 151, 44));
    assert_eq!(counts(&three_sided_non_triangle()), expect(2, 0, 0, 20, 8));
    assert_eq!(counts(&triple_eight()), expect(2, 1, 0, 25, 8));
}

#[test]
fn canonical_curves_have_known_move_counts() {
    for sign in [1, -1] {
        assert_eq!(counts(&Curve::canonical(5 * sign)), expect(4, 0, 0, 60, 16));
        assert_eq!(counts(&Curve::canonical(4 * sign)), expect(3, 0, 0, 36, 12));
        assert_eq!(counts(&Curve::canonical(3 * sign)), expect(2, 0, 0, 18, 8));
        assert_eq!(counts(&Curve::canonical(2 * sign)), expect(1, 0, 0, 6, 4));
        assert_eq!(counts(&Curve::canonical(sign)), expect(0, 0, 0, 3, 2));
    }
    assert_eq!(counts(&Curve::canonical(0)), expect(2, 0, 0, 8, 4));
}

#[test]
fn empty_code_has_no_neighbours() {
    let empty = Curve::new(Vec::new());
    assert_eq!(counts(&empty), expect(0, 0, 0, 0, 0));
    assert_eq!(empty.neighbors().count(), 0);
}

#[test]
fn trefoil_moves_carry_expected_tags() {
    let curve = trefoil_with_kink();
    let strange: Vec<Move> = curve.strange_neighbors().map(|(mv, _)| mv).collect();
    assert_eq!(strange, vec![Move::S2To1Cw]);
    let bigons: Vec<Move> = curve.decreasing_j_neighbors().map(|(mv, _)| mv).collect();
    assert_eq!(bigons, vec![Move::JPlusRemove, Move::JPlusRemove]);
    let loops: Vec<Move> = curve.decreasing_r1_neighbors().map(|(mv, _)| mv).collect();
    assert_eq!(loops, vec![Move::R1CcwRemove]);
}

#[test]
fn j_additions_count_pairs_of_face_sides() {
    for curve in diverse_curves() {
        let index = curve.face_index();
        let pairs = |p: usize| p * (p + 1) / 2;
        let per_face: usize = index.iter().map(|(_, sides)| pairs(sides.len())).sum();
        // Linking through OUT also emits the variant with the halves swapped.
        let expected = per_face + pairs(index.boundary_len(FaceId::OUT));
        assert_eq!(
            curve.increasing_j_neighbors().count(),
            expected,
            "{curve:?}"
        );
    }
}

#[test]
fn neighbours_follow_generator_order() {
    let curve = trefoil_with_kink();
    let families: Vec<Move> = curve.neighbors().map(|(mv, _)| mv).collect();
    assert_eq!(families[0], Move::R1CcwRemove);
    assert!(families[1..3].iter().all(|mv| *mv == Move::JPlusRemove));
    assert_eq!(families[3], Move::S2To1Cw);
    assert!(families[4..44].iter().all(|mv| matches!(mv, Move::JPlusAdd | Move::JMinusAdd)));
    assert!(families[44..].iter().all(|mv| matches!(mv, Move::R1CcwAdd | Move::R1CwAdd)));
}

#[test]
fn distinct_neighbours_of_small_curves() {
    let distinct = |curve: Curve| -> usize {
        curve
            .neighbors()
            .map(|(_, next)| next)
            .collect::<HashSet<Curve>>()
            .len()
    };
    assert_eq!(distinct(Curve::canonical(1)), 4);
    assert_eq!(distinct(Curve::canonical(0)), 12);
}

#[test]
fn generators_leave_the_receiver_untouched() {
    let curve = asymmetric();
    let before = curve.to_pairs();
    let _ = curve.neighbors().count();
    assert_eq!(curve.to_pairs(), before);
}
