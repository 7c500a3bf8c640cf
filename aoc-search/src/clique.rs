//! Undirected graphs over interned labels and clique search
//!
//! Labels are interned to dense vertex indices in first-seen order, and each
//! vertex stores its neighbourhood as a bitset over those indices. The graph is
//! immutable once built.

use bitvec::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

/// Undirected simple graph
#[derive(Debug, Clone)]
pub struct Graph<L> {
    labels: Vec<L>,
    index: HashMap<L, usize>,
    adjacency: Vec<BitVec>,
}

impl<L> Graph<L>
where
    L: Clone + Eq + Hash,
{
    /// Build a graph from an edge list
    ///
    /// Duplicate edges collapse into one and self-loops are dropped (the
    /// vertex itself is still added).
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_search::Graph;
    ///
    /// let graph = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
    /// assert_eq!(graph.len(), 4);
    /// assert!(graph.contains_edge(&"a", &"c"));
    /// assert_eq!(graph.max_clique().len(), 3);
    /// ```
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L)>,
    {
        let mut labels = Vec::new();
        let mut index = HashMap::new();
        let mut intern = |label: L| -> usize {
            *index.entry(label.clone()).or_insert_with(|| {
                labels.push(label);
                labels.len() - 1
            })
        };

        let pairs: Vec<(usize, usize)> = edges
            .into_iter()
            .map(|(a, b)| (intern(a), intern(b)))
            .collect();

        let n = labels.len();
        let mut adjacency = vec![bitvec![0; n]; n];
        for (a, b) in pairs {
            if a != b {
                adjacency[a].set(b, true);
                adjacency[b].set(a, true);
            }
        }

        Self {
            labels,
            index,
            adjacency,
        }
    }

    /// Vertex index of `label`
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Whether `a` and `b` are adjacent
    pub fn contains_edge(&self, a: &L, b: &L) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => self.adjacency[a][b],
            _ => false,
        }
    }

    /// Labels adjacent to `label`, empty for an unknown label
    pub fn neighbors(&self, label: &L) -> impl Iterator<Item = &L> + '_ {
        self.index_of(label)
            .into_iter()
            .flat_map(|v| self.adjacency[v].iter_ones())
            .map(|u| &self.labels[u])
    }
}

impl<L> Graph<L> {
    /// Number of vertices
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of vertex `v`
    pub fn label(&self, v: usize) -> Option<&L> {
        self.labels.get(v)
    }

    /// Every 3-clique, each reported once with vertices in index order
    pub fn triangles(&self) -> Vec<[&L; 3]> {
        let mut found = Vec::new();
        for a in 0..self.len() {
            for b in self.adjacency[a].iter_ones().filter(|&b| b > a) {
                let mut common = self.adjacency[a].clone();
                common &= &self.adjacency[b];
                for c in common.iter_ones().filter(|&c| c > b) {
                    found.push([&self.labels[a], &self.labels[b], &self.labels[c]]);
                }
            }
        }
        found
    }

    /// A maximum clique, found with pivoting Bron–Kerbosch
    ///
    /// Any maximum clique may be returned when several exist; for a fixed
    /// construction order the answer is deterministic. Labels come back in
    /// vertex-index order. An empty graph yields an empty clique.
    pub fn max_clique(&self) -> Vec<&L> {
        let n = self.len();
        let mut best = Vec::new();
        self.expand(&mut Vec::new(), bitvec![1; n], bitvec![0; n], &mut best);
        best.sort_unstable();
        best.into_iter().map(|v| &self.labels[v]).collect()
    }

    fn expand(&self, r: &mut Vec<usize>, mut p: BitVec, mut x: BitVec, best: &mut Vec<usize>) {
        // Even taking all of P cannot beat the best clique so far
        if r.len() + p.count_ones() <= best.len() {
            return;
        }

        let Some(pivot) = p.first_one().or_else(|| x.first_one()) else {
            // P and X both empty: R is maximal
            best.clone_from(r);
            return;
        };

        let pivot_adj = &self.adjacency[pivot];
        let candidates: Vec<usize> = p.iter_ones().filter(|&v| !pivot_adj[v]).collect();

        for v in candidates {
            let adj = &self.adjacency[v];
            let mut next_p = p.clone();
            next_p &= adj;
            let mut next_x = x.clone();
            next_x &= adj;

            r.push(v);
            self.expand(r, next_p, next_x, best);
            r.pop();

            p.set(v, false);
            x.set(v, true);
        }
    }
}
