//! Disjoint-set (Union-Find) data structure.
//!
//! Maintains a collection of disjoint sets over elements `0..n` with
//! near-constant-time union and find operations. The forest is a flat
//! arena of parent indices owned by a single [`UnionFind`] value; there is
//! no shared or global state between instances.
//!
//! # Algorithm
//!
//! Uses **path compression** during `find` and **union by rank** during
//! `union` to achieve amortized O(α(n)) per operation, where α is the
//! inverse Ackermann function.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

use std::cmp::Ordering;

use crate::error::PercolationError;

/// Disjoint-set forest with path compression and union by rank.
///
/// Every operation that takes an element id checks it against `len()` and
/// reports [`PercolationError::OutOfRange`] instead of panicking.
///
/// # Examples
/// ```
/// use percolation::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// uf.union(0, 1).unwrap();
/// uf.union(2, 3).unwrap();
/// assert_eq!(uf.component_count(), 3);
///
/// assert!(uf.connected(0, 1).unwrap());
/// assert!(!uf.connected(0, 2).unwrap());
/// assert!(uf.find(7).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `count` singleton sets `{0}, {1}, ..., {count-1}`.
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            rank: vec![0; count],
            size: vec![1; count],
            components: count,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, x: usize) -> Result<(), PercolationError> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(PercolationError::out_of_range(
                "element",
                x,
                0,
                self.parent.len().saturating_sub(1),
            ))
        }
    }

    /// Finds the representative (root) of the set containing `x`.
    ///
    /// Two passes: walk up to the root, then re-point every node on the
    /// path directly at it.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn find(&mut self, x: usize) -> Result<usize, PercolationError> {
        self.check(x)?;

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Read-only variant of [`find`](Self::find) that leaves the forest
    /// untouched. With union by rank the walk is at most O(log n).
    pub fn root(&self, x: usize) -> Result<usize, PercolationError> {
        self.check(x)?;
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        Ok(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// # Returns
    /// `true` if `x` and `y` were in different sets (and are now merged),
    /// `false` if they were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, PercolationError> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        let (child, parent) = match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => (root_x, root_y),
            Ordering::Greater => (root_y, root_x),
            Ordering::Equal => {
                self.rank[root_x] += 1;
                (root_y, root_x)
            }
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];

        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, PercolationError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the size of the set containing `x`.
    pub fn component_size(&mut self, x: usize) -> Result<usize, PercolationError> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Naive labelling used as an oracle: relabel every member on merge.
    fn naive_labels(n: usize, ops: &[(usize, usize)]) -> Vec<usize> {
        let mut label: Vec<usize> = (0..n).collect();
        for &(x, y) in ops {
            let (lx, ly) = (label[x], label[y]);
            if lx != ly {
                for l in label.iter_mut() {
                    if *l == ly {
                        *l = lx;
                    }
                }
            }
        }
        label
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn connectivity_matches_naive_oracle(
            n in 1_usize..30,
            raw in proptest::collection::vec((0_usize..30, 0_usize..30), 0..60),
        ) {
            let ops: Vec<(usize, usize)> =
                raw.into_iter().filter(|&(x, y)| x < n && y < n).collect();
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                uf.union(x, y).unwrap();
            }
            let labels = naive_labels(n, &ops);
            for x in 0..n {
                for y in 0..n {
                    prop_assert_eq!(uf.connected(x, y).unwrap(), labels[x] == labels[y]);
                }
            }
        }

        #[test]
        fn component_count_invariant(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n);
            let mut expected_components = n;

            for &(x, y) in &ops {
                if x < n && y < n && uf.union(x, y).unwrap() {
                    expected_components -= 1;
                }
            }

            prop_assert_eq!(uf.component_count(), expected_components);
        }

        #[test]
        fn component_sizes_sum_to_n(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..30),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y).unwrap();
                }
            }

            let mut total = 0;
            for i in 0..n {
                if uf.find(i).unwrap() == i {
                    total += uf.component_size(i).unwrap();
                }
            }
            prop_assert_eq!(total, n);
        }
    }
}
