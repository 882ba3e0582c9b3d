//! Union-find (disjoint set union) over the nodes of a graph, with path compression and
//! union by rank.

use super::*;

#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<Node>,
    rank: Vec<u8>,
    num_sets: NumNodes,
}

impl DisjointSet {
    /// Creates `n` singleton sets `{0}, ..., {n-1}`.
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_sets: n,
        }
    }

    /// Returns the representative of the set containing `node`.
    /// ** Panics if `node >= n` **
    pub fn find(&mut self, mut node: Node) -> Node {
        let mut root = node;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        while self.parent[node as usize] != node {
            let parent = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets of `left` and `right`. Returns *false* if they were already the same set.
    pub fn union(&mut self, left: Node, right: Node) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }

        let left_rank = self.rank[left as usize];
        let right_rank = self.rank[right as usize];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right as usize] = left;
        if left_rank == right_rank {
            self.rank[left as usize] = left_rank.saturating_add(1);
        }

        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `left` and `right` belong to the same set.
    pub fn same_set(&mut self, left: Node, right: Node) -> bool {
        self.find(left) == self.find(right)
    }

    /// Returns the number of disjoint sets.
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn union_and_find() {
        let mut sets = DisjointSet::new(6);
        assert_eq!(sets.number_of_sets(), 6);

        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));

        assert!(sets.same_set(0, 3));
        assert!(!sets.same_set(0, 4));
        assert_eq!(sets.number_of_sets(), 3);
    }

    #[test]
    fn long_chain_is_compressed() {
        let mut sets = DisjointSet::new(1000);
        for u in 1..1000 {
            sets.union(u - 1, u);
        }

        let root = sets.find(999);
        assert_eq!(sets.find(0), root);
        assert_eq!(sets.parent[0], root);
        assert_eq!(sets.number_of_sets(), 1);
    }
}
