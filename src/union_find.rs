//! Weighted union-find (disjoint set) with full path compression.
//!
//! Grounded on `toolbox_rs::union_find::UnionFind`, generalized from union
//! by rank with lazy (grandparent-only) compression to union by size with
//! full compression, and extended with `reset`, `connected`,
//! `component_size` and `component_count` so one instance can be reused
//! across repeated Kruskal runs (see [`crate::kruskal::build_mst`]).

/// Disjoint-set forest over `[0, len)`.
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    component_count: usize,
}

impl UnionFind {
    /// Builds a union-find over `len` singleton components.
    ///
    /// # Panics
    ///
    /// Panics if `len == 0`.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "union-find must have at least one element");
        let mut uf = Self {
            parent: Vec::with_capacity(len),
            size: Vec::with_capacity(len),
            component_count: 0,
        };
        uf.reset_to(len);
        uf
    }

    fn reset_to(&mut self, len: usize) {
        self.parent.clear();
        self.parent.extend(0..len);
        self.size.clear();
        self.size.resize(len, 1);
        self.component_count = len;
    }

    /// Restores every node to its own singleton component.
    pub fn reset(&mut self) {
        let len = self.parent.len();
        self.reset_to(len);
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the root of `x`'s component, compressing every node on the
    /// path from `x` to the root to point directly at the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut curr = x;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }
        root
    }

    /// Unites the components of `x` and `y`. No-op if already connected.
    /// The smaller tree is attached under the larger; ties attach `y`'s
    /// root under `x`'s root.
    pub fn union(&mut self, x: usize, y: usize) {
        let x_root = self.find(x);
        let y_root = self.find(y);

        if x_root == y_root {
            return;
        }

        if self.size[x_root] < self.size[y_root] {
            self.parent[x_root] = y_root;
            self.size[y_root] += self.size[x_root];
        } else {
            self.parent[y_root] = x_root;
            self.size[x_root] += self.size[y_root];
        }
        self.component_count -= 1;
    }

    /// Whether `x` and `y` are in the same component.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the component containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Current number of distinct components.
    pub fn component_count(&self) -> usize {
        self.component_count
    }
}
