use ipc_core::{Move, RngHandle};
use rand::seq::SliceRandom;

use crate::curve::Curve;

/// Walks `steps` increasing moves from `start`, picking uniformly among the
/// R1 and J additions available at each step.
///
/// Returns every visited curve together with the move that produced it.
pub fn random_walk(start: &Curve, steps: usize, rng: &mut RngHandle) -> Vec<(Move, Curve)> {
    let mut path: Vec<(Move, Curve)> = Vec::with_capacity(steps);
    let mut current = start.clone();
    for _ in 0..steps {
        let candidates: Vec<(Move, Curve)> = current
            .increasing_j_neighbors()
            .chain(current.increasing_r1_neighbors())
            .collect();
        let Some((mv, next)) = candidates.choose(rng).cloned() else {
            break;
        };
        current = next.clone();
        path.push((mv, next));
    }
    path
}

/// Seeded random curve reached from the positive loop in `steps` moves.
pub fn random_curve(steps: usize, rng: &mut RngHandle) -> Curve {
    let start = Curve::canonical(1);
    random_walk(&start, steps, rng)
        .pop()
        .map(|(_, curve)| curve)
        .unwrap_or(start)
}
