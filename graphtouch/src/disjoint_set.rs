//! Union-find over arbitrary hashable labels.
//!
//! Labels are interned into an arena on `make_set`; `find` compresses paths
//! and `union` merges by rank. Kruskal uses it to keep the growing forest
//! acyclic.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct DisjointSetForest<T> {
    index: HashMap<T, usize>,
    labels: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl<T> Default for DisjointSetForest<T> {
    fn default() -> Self {
        DisjointSetForest {
            index: HashMap::new(),
            labels: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            components: 0,
        }
    }
}

impl<T: Eq + Hash + Clone> DisjointSetForest<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `x` as a singleton; false if it was already known.
    pub fn make_set(&mut self, x: T) -> bool {
        if self.index.contains_key(&x) {
            return false;
        }
        let slot = self.labels.len();
        self.index.insert(x.clone(), slot);
        self.labels.push(x);
        self.parent.push(slot);
        self.rank.push(0);
        self.components += 1;
        true
    }

    /// Representative label of the set containing `x`.
    pub fn find(&mut self, x: &T) -> Option<T> {
        let slot = *self.index.get(x)?;
        let root = self.root(slot);
        Some(self.labels[root].clone())
    }

    pub fn same_set(&mut self, x: &T, y: &T) -> bool {
        match (self.index.get(x).copied(), self.index.get(y).copied()) {
            (Some(a), Some(b)) => self.root(a) == self.root(b),
            _ => false,
        }
    }

    /// Merges the sets of `x` and `y`. Returns false if either is unknown or
    /// both already share a set.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        let (Some(a), Some(b)) = (self.index.get(x).copied(), self.index.get(y).copied()) else {
            return false;
        };
        let mut a = self.root(a);
        let mut b = self.root(b);
        if a == b {
            return false;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] = self.rank[a].saturating_add(1);
        }
        self.components -= 1;
        true
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    /// Number of disjoint sets currently tracked.
    pub fn component_count(&self) -> usize {
        self.components
    }

    fn root(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[slot] != root {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }
        root
    }
}
