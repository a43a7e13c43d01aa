/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GraphError, check_arc};
use crate::traits::Digraph;

/// A [`Digraph`] storing weights in a row-major *n* × *n* matrix.
///
/// Adjacency and weight lookups are O(1); enumerating the successors or the
/// predecessors of a node is O(*n*). The graph is write-once: arcs can be
/// inserted (or have their weight replaced), but not removed.
///
/// # Examples
///
/// ```
/// use weighted_pagerank::graphs::dense_graph::DenseGraph;
/// use weighted_pagerank::traits::Digraph;
///
/// let g = DenseGraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)])?;
/// assert!(g.is_adjacent(0, 1));
/// assert!(!g.is_adjacent(1, 0));
/// assert_eq!(g.weight(2, 0), 1.0);
/// assert_eq!(g.num_arcs(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DenseGraph {
    num_nodes: usize,
    num_arcs: usize,
    weights: Box<[f64]>,
}

impl DenseGraph {
    /// Creates a new graph with `n` nodes and no arcs.
    pub fn new(n: usize) -> Self {
        Self {
            num_nodes: n,
            num_arcs: 0,
            weights: vec![0.0; n * n].into_boxed_slice(),
        }
    }

    /// Creates a graph with `n` nodes from an [`IntoIterator`] of pairs of
    /// nodes, each arc having weight one.
    ///
    /// Duplicate arcs are inserted once.
    pub fn from_arcs(
        n: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        Self::from_weighted_arcs(n, arcs.into_iter().map(|(u, v)| (u, v, 1.0)))
    }

    /// Creates a graph with `n` nodes from an [`IntoIterator`] of triples
    /// `(from, to, weight)`.
    pub fn from_weighted_arcs(
        n: usize,
        arcs: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self, GraphError> {
        let mut g = Self::new(n);
        for (u, v, w) in arcs {
            g.insert_arc(u, v, w)?;
        }
        Ok(g)
    }

    /// Inserts an arc with the given weight, returning whether the arc is
    /// new.
    ///
    /// If the arc already exists its weight is replaced. Inserting a zero
    /// weight does nothing.
    pub fn insert_arc(&mut self, from: usize, to: usize, weight: f64) -> Result<bool, GraphError> {
        check_arc(self.num_nodes, from, to, weight)?;
        if weight == 0.0 {
            return Ok(false);
        }
        let cell = &mut self.weights[from * self.num_nodes + to];
        let new = *cell == 0.0;
        *cell = weight;
        if new {
            self.num_arcs += 1;
        }
        Ok(new)
    }

    #[inline(always)]
    fn check_node(&self, node: usize) {
        assert!(
            node < self.num_nodes,
            "Node {node} does not exist (the graph has {} nodes)",
            self.num_nodes
        );
    }
}

impl Digraph for DenseGraph {
    type Neighbors<'a> = Neighbors<'a>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    #[inline(always)]
    fn weight(&self, from: usize, to: usize) -> f64 {
        self.check_node(from);
        self.check_node(to);
        self.weights[from * self.num_nodes + to]
    }

    fn successors(&self, node: usize) -> Neighbors<'_> {
        self.check_node(node);
        Neighbors {
            weights: &self.weights,
            start: node * self.num_nodes,
            stride: 1,
            pos: 0,
            len: self.num_nodes,
        }
    }

    fn predecessors(&self, node: usize) -> Neighbors<'_> {
        self.check_node(node);
        Neighbors {
            weights: &self.weights,
            start: node,
            stride: self.num_nodes,
            pos: 0,
            len: self.num_nodes,
        }
    }

    fn reweight(&self, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let n = self.num_nodes;
        let mut weights = vec![0.0; n * n].into_boxed_slice();
        let mut num_arcs = 0;
        for (cell, (j, &w)) in weights.iter_mut().zip(self.weights.iter().enumerate()) {
            if w != 0.0 {
                *cell = f(j / n, j % n);
                if *cell != 0.0 {
                    num_arcs += 1;
                }
            }
        }
        Self {
            num_nodes: n,
            num_arcs,
            weights,
        }
    }
}

/// Iterator over a row (successors) or a column (predecessors) of a
/// [`DenseGraph`], skipping zero entries.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    weights: &'a [f64],
    start: usize,
    stride: usize,
    pos: usize,
    len: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.len {
            let node = self.pos;
            self.pos += 1;
            let w = self.weights[self.start + node * self.stride];
            if w != 0.0 {
                return Some((node, w));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.len - self.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert() {
        let mut g = DenseGraph::new(3);
        assert_eq!(g.insert_arc(0, 1, 1.0), Ok(true));
        assert_eq!(g.insert_arc(0, 1, 2.0), Ok(false));
        assert_eq!(g.weight(0, 1), 2.0);
        assert_eq!(g.insert_arc(1, 2, 0.0), Ok(false));
        assert!(!g.is_adjacent(1, 2));
        assert_eq!(g.num_arcs(), 1);
    }

    #[test]
    fn test_errors() {
        let mut g = DenseGraph::new(3);
        assert_eq!(
            g.insert_arc(1, 1, 1.0),
            Err(GraphError::SelfLoop { node: 1 })
        );
        assert_eq!(
            g.insert_arc(0, 3, 1.0),
            Err(GraphError::NodeOutOfRange {
                node: 3,
                num_nodes: 3
            })
        );
        assert!(matches!(
            g.insert_arc(0, 2, f64::NAN),
            Err(GraphError::InvalidWeight { from: 0, to: 2, .. })
        ));
        assert_eq!(g.num_arcs(), 0);
    }

    #[test]
    fn test_neighbors() {
        let g = DenseGraph::from_arcs(4, [(0, 1), (0, 3), (2, 1), (3, 1)]).unwrap();
        assert_eq!(
            g.successors(0).collect::<Vec<_>>(),
            vec![(1, 1.0), (3, 1.0)]
        );
        assert_eq!(
            g.predecessors(1).map(|(j, _)| j).collect::<Vec<_>>(),
            vec![0, 2, 3]
        );
        assert_eq!(g.outdegree(1), 0);
        assert_eq!(g.indegree(1), 3);
    }

    #[test]
    fn test_reweight() {
        let g = DenseGraph::from_arcs(3, [(0, 1), (1, 2)]).unwrap();
        let h = g.reweight(|j, i| (10 * j + i) as f64);
        assert_eq!(h.weight(0, 1), 1.0);
        assert_eq!(h.weight(1, 2), 12.0);
        assert_eq!(h.weight(2, 0), 0.0);
        assert_eq!(h.num_arcs(), 2);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range() {
        DenseGraph::new(2).weight(0, 2);
    }
}
