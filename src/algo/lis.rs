//! Longest increasing subsequence over old-position values
//!
//! Given the old positions of the reusable items, in the order those items
//! occupy the new sequence, the longest strictly increasing subsequence is
//! exactly the largest set of items already in relative order, the items
//! that need no move. Everything outside it is the move set.
//!
//! # Algorithm
//!
//! Patience sorting with binary search:
//! - `tails[len]` holds the index (into the input) of the smallest possible
//!   tail value for an increasing run of length `len + 1` found so far
//! - `predecessor[i]` links each element to the one before it in the run
//!   that ends at `i`
//! - values greater than the current best tail extend the longest run;
//!   anything else overwrites the leftmost tail slot whose value is `>= v`
//! - backtracking from the last tail through the predecessor links recovers
//!   one maximal subsequence
//!
//! Input values are distinct old positions (key uniqueness upstream), so
//! the `>= v` rule is only ever exercised for strict replacement.
//!
//! # Complexity
//!
//! - Time: O(m log m) for m input values
//! - Space: O(m) for the predecessor links

/// Find the indices of a longest strictly increasing subsequence.
///
/// Returns indices **into `positions`**, ascending; the referenced values
/// are strictly increasing. For reconciliation these mark the reusable
/// items whose relative order already matches, i.e. the stable set.
///
/// An empty input yields an empty result; a single element is always
/// stable on its own.
pub fn find_stable_indices(positions: &[usize]) -> Vec<usize> {
    if positions.is_empty() {
        return Vec::new();
    }

    // tails[len] = index of the smallest tail closing a run of len + 1
    let mut tails: Vec<usize> = Vec::with_capacity(positions.len());
    let mut predecessor: Vec<Option<usize>> = vec![None; positions.len()];

    for (i, &value) in positions.iter().enumerate() {
        match tails.last().copied() {
            Some(last) if positions[last] < value => {
                // Extends the longest run found so far.
                predecessor[i] = Some(last);
                tails.push(i);
            }
            Some(_) => {
                // Leftmost slot whose tail value is >= value; overwriting it
                // keeps that run length alive with a smaller tail.
                let slot = tails.partition_point(|&t| positions[t] < value);
                if slot > 0 {
                    predecessor[i] = Some(tails[slot - 1]);
                }
                tails[slot] = i;
            }
            None => tails.push(i),
        }
    }

    // Walk predecessor links back from the tail of the longest run.
    let mut stable = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        stable.push(i);
        cursor = predecessor[i];
    }
    stable.reverse();
    stable
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// O(2^n) reference: maximum length over every strictly increasing
    /// subsequence. Only usable for small n.
    fn brute_force_lis_len(values: &[usize]) -> usize {
        let n = values.len();
        let mut best = 0;
        for mask in 0u32..(1 << n) {
            let picked: Vec<usize> = (0..n)
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| values[i])
                .collect();
            if picked.windows(2).all(|w| w[0] < w[1]) {
                best = best.max(picked.len());
            }
        }
        best
    }

    /// Assert the result is a valid strictly increasing subsequence of
    /// maximal length.
    fn check_stable(values: &[usize]) {
        let stable = find_stable_indices(values);

        assert!(
            stable.windows(2).all(|w| w[0] < w[1]),
            "indices not ascending for {values:?}: {stable:?}"
        );
        assert!(
            stable.windows(2).all(|w| values[w[0]] < values[w[1]]),
            "values not strictly increasing for {values:?}: {stable:?}"
        );
        assert_eq!(
            stable.len(),
            brute_force_lis_len(values),
            "not maximal for {values:?}: {stable:?}"
        );
    }

    fn permutations(current: &mut Vec<usize>, remaining: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if remaining.is_empty() {
            out.push(current.clone());
            return;
        }
        for i in 0..remaining.len() {
            let v = remaining.remove(i);
            current.push(v);
            permutations(current, remaining, out);
            current.pop();
            remaining.insert(i, v);
        }
    }

    #[test]
    fn test_empty() {
        assert!(find_stable_indices(&[]).is_empty());
    }

    #[test]
    fn test_single_element() {
        assert_eq!(find_stable_indices(&[7]), vec![0]);
    }

    #[test]
    fn test_already_sorted() {
        let positions = [0, 1, 2, 3, 4];
        assert_eq!(find_stable_indices(&positions), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reversed() {
        // No pair in order: any single element is maximal.
        let stable = find_stable_indices(&[4, 3, 2, 1, 0]);
        assert_eq!(stable.len(), 1);
    }

    #[test]
    fn test_adjacent_swap() {
        // [1, 0]: either element alone is maximal, length 1.
        let stable = find_stable_indices(&[1, 0]);
        assert_eq!(stable.len(), 1);
    }

    #[test]
    fn test_rotation() {
        // [3, 0, 1]: the [0, 1] suffix is stable, the 3 must move.
        assert_eq!(find_stable_indices(&[3, 0, 1]), vec![1, 2]);
    }

    #[test]
    fn test_known_sequence() {
        // Classic: LIS of [10,9,2,5,3,7,101,18] has length 4.
        let values = [10, 9, 2, 5, 3, 7, 101, 18];
        let stable = find_stable_indices(&values);
        assert_eq!(stable.len(), 4);
        assert!(stable.windows(2).all(|w| values[w[0]] < values[w[1]]));
    }

    #[test]
    fn test_interleaved() {
        // [1, 4, 0, 3, 2]: maximal runs have length 2.
        let stable = find_stable_indices(&[1, 4, 0, 3, 2]);
        assert_eq!(stable.len(), 2);
    }

    #[test]
    fn test_partial_shuffle() {
        // [0, 3, 1, 2, 5, 4, 6, 8, 7, 9]: seven elements already ordered.
        let values = [0, 3, 1, 2, 5, 4, 6, 8, 7, 9];
        let stable = find_stable_indices(&values);
        assert_eq!(stable.len(), 7);
        check_stable(&values);
    }

    #[test]
    fn test_all_permutations_up_to_seven() {
        for n in 0..=7 {
            let mut remaining: Vec<usize> = (0..n).collect();
            let mut all = Vec::new();
            permutations(&mut Vec::new(), &mut remaining, &mut all);
            for perm in all {
                check_stable(&perm);
            }
        }
    }

    #[test]
    fn test_sparse_values_cross_checked() {
        // Distinct but non-contiguous old positions, up to the brute-force
        // limit of 12 elements.
        let cases: [&[usize]; 6] = [
            &[5, 19, 3, 8, 11, 2, 14, 7, 21, 9, 0, 16],
            &[40, 1, 33, 2, 27, 3, 25, 4, 12, 5, 11, 6],
            &[9, 1, 8, 2, 7, 3, 6, 4, 5],
            &[2, 4, 6, 8, 1, 3, 5, 7],
            &[13, 0, 12, 1, 11, 2],
            &[100, 200, 50, 150, 250, 25],
        ];
        for case in cases {
            check_stable(case);
        }
    }
}
