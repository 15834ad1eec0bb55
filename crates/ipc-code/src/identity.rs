//! Rotation- and relabeling-invariant identity of curve codes.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::{Hash, Hasher};

use ipc_core::FaceId;
use siphasher::sip::SipHasher13;

use crate::curve::Curve;

impl Curve {
    /// Returns whether `other`, read from `shift` positions further along
    /// this code, matches it under a bijection of face labels fixing `OUT`.
    fn matches_at_shift(&self, other: &Curve, shift: usize) -> bool {
        let n = self.len();
        let mut forward: HashMap<FaceId, FaceId> = HashMap::from([(FaceId::OUT, FaceId::OUT)]);
        let mut image: HashSet<FaceId> = HashSet::from([FaceId::OUT]);
        for k in 0..n {
            let ours = self.at(k + shift);
            let theirs = other.at(k);
            for (from, to) in [(ours.left, theirs.left), (ours.right, theirs.right)] {
                match forward.get(&from) {
                    Some(mapped) if *mapped != to => return false,
                    Some(_) => {}
                    None => {
                        if !image.insert(to) {
                            return false;
                        }
                        forward.insert(from, to);
                    }
                }
            }
        }
        true
    }

    /// Stable structural hash, invariant under rotation and face relabeling.
    ///
    /// Each face is summarised by how often it appears on the left and on
    /// the right (the outer face carries an extra marker), each edge by the
    /// pair of its face summaries, and the curve by the multiset of all
    /// cyclic windows of three consecutive edge summaries. SipHash-1-3 with
    /// zero keys keeps the value identical across runs and platforms.
    pub fn fingerprint(&self) -> u64 {
        let n = self.len();
        if n == 0 {
            return sip(|_| {});
        }
        let mut lefts: HashMap<FaceId, u64> = HashMap::new();
        let mut rights: HashMap<FaceId, u64> = HashMap::new();
        for edge in self {
            *lefts.entry(edge.left).or_default() += 1;
            *rights.entry(edge.right).or_default() += 1;
        }
        let face_code = |face: FaceId| {
            sip(|h| {
                h.write_u64(lefts.get(&face).copied().unwrap_or(0));
                h.write_u64(rights.get(&face).copied().unwrap_or(0));
                if face.is_out() {
                    h.write_i64(-1);
                }
            })
        };
        let edge_codes: Vec<u64> = self
            .iter()
            .map(|edge| {
                let (left, right) = (face_code(edge.left), face_code(edge.right));
                sip(|h| {
                    h.write_u64(left);
                    h.write_u64(right);
                })
            })
            .collect();

        let mut windows: BTreeMap<[u64; 3], u64> = BTreeMap::new();
        for i in 0..n {
            let window = [
                edge_codes[(i + 2 * n - 2) % n],
                edge_codes[(i + n - 1) % n],
                edge_codes[i],
            ];
            *windows.entry(window).or_default() += 1;
        }

        sip(|h| {
            h.write_usize(windows.len());
            for (window, count) in &windows {
                for code in window {
                    h.write_u64(*code);
                }
                h.write_u64(*count);
            }
        })
    }
}

fn sip(feed: impl FnOnce(&mut SipHasher13)) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    feed(&mut hasher);
    hasher.finish()
}

/// Two codes are equal when some rotation of one matches the other under a
/// bijection of face labels that fixes the outer face. Mirror images are
/// not identified.
impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        (0..self.len()).any(|shift| self.matches_at_shift(other, shift))
    }
}

impl Eq for Curve {}

impl Hash for Curve {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabeled_rotations_are_equal() {
        let curve = Curve::from_pairs([(0, -1), (1, 0), (0, -1), (2, 0)]);
        let relabeled = Curve::from_pairs([(5, 7), (7, -1), (3, 7), (7, -1)]);
        assert_eq!(curve, relabeled);
        assert_eq!(curve.fingerprint(), relabeled.fingerprint());
    }

    #[test]
    fn outer_face_is_never_relabeled() {
        let curve = Curve::from_pairs([(0, -1), (-1, 1)]);
        let swapped = Curve::from_pairs([(-1, 0), (0, 1)]);
        assert_ne!(curve, swapped);
    }

    #[test]
    fn mirror_images_differ() {
        let curve = Curve::canonical(3);
        assert_ne!(curve, curve.reversed());
        assert_ne!(curve.fingerprint(), curve.reversed().fingerprint());
    }

    #[test]
    fn empty_codes_equal_each_other() {
        let empty = Curve::new(Vec::new());
        assert_eq!(empty, Curve::new(Vec::new()));
        assert_ne!(empty, Curve::canonical(1));
    }

    #[test]
    fn lengths_must_agree() {
        assert_ne!(Curve::canonical(2), Curve::canonical(3));
    }
}
