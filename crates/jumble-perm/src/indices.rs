// In-place lexicographic index permutation driver.

/// An ordering of the indices `0..N`, advanced in place through every
/// distinct permutation in lexicographic order.
///
/// The buffer starts at the identity ordering (the lexicographic minimum),
/// so callers consume the current ordering first and call [`advance`]
/// afterwards. Each index appears exactly once at all times; the driver
/// never allocates after construction.
///
/// [`advance`]: IndexPermutation::advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPermutation {
    indices: Vec<usize>,
}

impl IndexPermutation {
    /// Create a driver over `len` indices, at the identity ordering.
    pub fn new(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    /// Reset to the identity ordering over `len` indices.
    ///
    /// Reuses the existing buffer when the length is unchanged.
    pub fn reset(&mut self, len: usize) {
        self.indices.clear();
        self.indices.extend(0..len);
    }

    /// Advance to the lexicographically next ordering.
    ///
    /// Returns `true` if the buffer now holds a further ordering, `false`
    /// when it was already at the final (fully descending) ordering. Once
    /// descending, the buffer has no successor and every further call
    /// returns `false` without mutating it.
    pub fn advance(&mut self) -> bool {
        let a = &mut self.indices;
        if a.len() < 2 {
            return false;
        }

        // Largest i with a[i - 1] < a[i]; none exists iff fully descending.
        let mut i = a.len() - 1;
        while a[i - 1] >= a[i] {
            i -= 1;
            if i == 0 {
                return false;
            }
        }
        let pivot = i - 1;

        // Largest j > pivot with a[j] > a[pivot]. Guaranteed to exist since
        // a[i] already qualifies.
        let mut j = a.len() - 1;
        while a[j] <= a[pivot] {
            j -= 1;
        }

        a.swap(pivot, j);
        a[i..].reverse();
        true
    }

    /// The current ordering.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Number of indices in the ordering.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` for a zero-length ordering.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial(n: usize) -> usize {
        (1..=n).product()
    }

    /// Collect every ordering the driver visits, identity included.
    fn all_orderings(len: usize) -> Vec<Vec<usize>> {
        let mut perm = IndexPermutation::new(len);
        let mut seen = vec![perm.as_slice().to_vec()];
        while perm.advance() {
            seen.push(perm.as_slice().to_vec());
        }
        seen
    }

    #[test]
    fn starts_at_identity() {
        let perm = IndexPermutation::new(4);
        assert_eq!(perm.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn three_indices_visit_all_six_orderings() {
        let orderings = all_orderings(3);
        assert_eq!(
            orderings,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn ordering_count_is_factorial() {
        for len in 0..=6 {
            assert_eq!(all_orderings(len).len(), factorial(len));
        }
    }

    #[test]
    fn orderings_strictly_increase() {
        let orderings = all_orderings(5);
        for pair in orderings.windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn advance_false_is_sticky() {
        let mut perm = IndexPermutation::new(3);
        while perm.advance() {}
        assert_eq!(perm.as_slice(), &[2, 1, 0]);
        assert!(!perm.advance());
        assert!(!perm.advance());
        assert_eq!(perm.as_slice(), &[2, 1, 0]);
    }

    #[test]
    fn trivial_lengths_have_single_ordering() {
        let mut empty = IndexPermutation::new(0);
        assert!(!empty.advance());

        let mut single = IndexPermutation::new(1);
        assert_eq!(single.as_slice(), &[0]);
        assert!(!single.advance());
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut perm = IndexPermutation::new(3);
        perm.advance();
        perm.advance();
        perm.reset(3);
        assert_eq!(perm.as_slice(), &[0, 1, 2]);

        perm.reset(5);
        assert_eq!(perm.as_slice(), &[0, 1, 2, 3, 4]);
    }
}
