/// Iterator over all 5-element index subsets of `0..n`, in lexicographic order.
///
/// Yields C(n,5) items: 1 for n=5, 6 for n=6, 21 for n=7. Nothing for n < 5.
pub struct FiveOf {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl FiveOf {
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], done: n < 5 }
    }
}

impl Iterator for FiveOf {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.indices;

        // Advance the rightmost index that still has room, then pack the tail.
        let mut i = 5;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - (5 - i) {
                self.indices[i] += 1;
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts_match_binomials() {
        assert_eq!(FiveOf::new(4).count(), 0);
        assert_eq!(FiveOf::new(5).count(), 1);
        assert_eq!(FiveOf::new(6).count(), 6);
        assert_eq!(FiveOf::new(7).count(), 21);
    }

    #[test]
    fn first_and_last_of_seven() {
        let combos: Vec<[usize; 5]> = FiveOf::new(7).collect();
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn subsets_are_valid_unique_and_ordered() {
        let combos: Vec<[usize; 5]> = FiveOf::new(7).collect();
        let mut seen = HashSet::new();
        for c in &combos {
            assert!(c.iter().all(|&i| i < 7));
            assert!(c.windows(2).all(|w| w[0] < w[1]));
            assert!(seen.insert(*c), "duplicate {c:?}");
        }
        assert!(combos.windows(2).all(|w| w[0] < w[1]), "not lexicographic");
    }

    #[test]
    fn stays_exhausted() {
        let mut it = FiveOf::new(6);
        for _ in 0..6 {
            assert!(it.next().is_some());
        }
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
