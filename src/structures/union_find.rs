//! Disjoint-set forest over `0..n`
//!
//! Path compression in [`UnionFind::find`] and union by rank in
//! [`UnionFind::union`]. The parent mapping never contains a cycle other than
//! a root pointing at itself, so `find` always terminates.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl UnionFind {
    /// Create `n` singleton sets
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Compress the path
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets of `x` and `y`; false if they were already joined
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.components -= 1;
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Current partition, each component sorted ascending and the list
    /// ordered by smallest member.
    pub fn components(&mut self) -> Vec<Vec<usize>> {
        let mut by_root: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for x in 0..self.len() {
            let root = self.find(x);
            by_root.entry(root).or_default().push(x);
        }
        let mut groups: Vec<Vec<usize>> = by_root.into_values().collect();
        groups.sort_by_key(|group| group[0]);
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_union_and_components() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.component_count(), 5);
        assert!(uf.union(0, 1));
        assert!(uf.union(3, 4));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.component_count(), 3);
        assert_eq!(uf.components(), vec![vec![0, 1], vec![2], vec![3, 4]]);
    }

    #[test]
    fn test_find_is_idempotent_after_compression() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(1, 3);
        let root = uf.find(3);
        assert_eq!(uf.find(3), root);
        assert_eq!(uf.find(0), root);
    }

    proptest! {
        #[test]
        fn union_find_transitivity(
            n in 2_usize..12,
            ops in proptest::collection::vec((0_usize..12, 0_usize..12), 0..30),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y);
                }
            }
            for x in 0..n {
                for y in 0..n {
                    for z in 0..n {
                        if uf.connected(x, y) && uf.connected(y, z) {
                            prop_assert!(uf.connected(x, z));
                        }
                    }
                }
            }
            prop_assert_eq!(uf.components().len(), uf.component_count());
        }
    }
}
