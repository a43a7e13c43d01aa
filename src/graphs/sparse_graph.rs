/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GraphError, check_arc};
use crate::traits::Digraph;
use core::iter::Copied;
use core::slice::Iter;

/// A [`Digraph`] based on sorted vectors of successors and predecessors.
///
/// Each arc is stored twice, once in the successor list of its source and
/// once in the predecessor list of its target, so that both directions can
/// be enumerated in time proportional to the degree. Weight lookups are
/// logarithmic in the outdegree.
///
/// This implementation has exactly the same behavior as
/// [`DenseGraph`](super::dense_graph::DenseGraph), but its memory occupancy
/// is linear in the number of arcs.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SparseGraph {
    num_arcs: usize,
    succ: Vec<Vec<(usize, f64)>>,
    pred: Vec<Vec<(usize, f64)>>,
}

impl SparseGraph {
    /// Creates a new graph with `n` nodes and no arcs.
    pub fn new(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
            pred: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Creates a graph with `n` nodes from an [`IntoIterator`] of pairs of
    /// nodes, each arc having weight one.
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
        check_arc(self.succ.len(), from, to, weight)?;
        if weight == 0.0 {
            return Ok(false);
        }
        let new = upsert(&mut self.succ[from], to, weight);
        upsert(&mut self.pred[to], from, weight);
        if new {
            self.num_arcs += 1;
        }
        Ok(new)
    }
}

/// Inserts or replaces `(node, weight)` in a list sorted by node.
fn upsert(list: &mut Vec<(usize, f64)>, node: usize, weight: f64) -> bool {
    match list.binary_search_by_key(&node, |&(v, _)| v) {
        Ok(pos) => {
            list[pos].1 = weight;
            false
        }
        Err(pos) => {
            list.insert(pos, (node, weight));
            true
        }
    }
}

impl Digraph for SparseGraph {
    type Neighbors<'a> = Copied<Iter<'a, (usize, f64)>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    fn weight(&self, from: usize, to: usize) -> f64 {
        assert!(
            to < self.succ.len(),
            "Node {to} does not exist (the graph has {} nodes)",
            self.succ.len()
        );
        let succ = &self.succ[from];
        succ.binary_search_by_key(&to, |&(v, _)| v)
            .map_or(0.0, |pos| succ[pos].1)
    }

    fn successors(&self, node: usize) -> Self::Neighbors<'_> {
        self.succ[node].iter().copied()
    }

    fn predecessors(&self, node: usize) -> Self::Neighbors<'_> {
        self.pred[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    #[inline(always)]
    fn indegree(&self, node: usize) -> usize {
        self.pred[node].len()
    }

    fn reweight(&self, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let succ: Vec<Vec<(usize, f64)>> = self
            .succ
            .iter()
            .enumerate()
            .map(|(j, s)| {
                s.iter()
                    .map(|&(i, _)| (i, f(j, i)))
                    .filter(|&(_, w)| w != 0.0)
                    .collect()
            })
            .collect();

        let mut pred = Vec::from_iter((0..succ.len()).map(|_| Vec::new()));
        // Scanning sources in increasing order keeps predecessor lists sorted
        for (j, s) in succ.iter().enumerate() {
            for &(i, w) in s {
                pred[i].push((j, w));
            }
        }

        Self {
            num_arcs: succ.iter().map(Vec::len).sum(),
            succ,
            pred,
        }
    }
}
