/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The [`Digraph`] trait.

/// A directed graph with real-valued arc weights.
///
/// Nodes are the integers in [0 . . [`num_nodes`](Digraph::num_nodes)).
/// A weight of zero means that there is no arc: implementations never
/// enumerate zero-weight arcs, and [`weight`](Digraph::weight) returns zero
/// for missing arcs. Self-loops are never present.
///
/// Both [successors](Digraph::successors) and
/// [predecessors](Digraph::predecessors) are available, as the ranking
/// engine needs to enumerate the arcs entering a node, while degree
/// statistics are naturally computed on the arcs leaving it.
pub trait Digraph {
    /// The type of the iterator over the neighbors of a node.
    type Neighbors<'a>: Iterator<Item = (usize, f64)>
    where
        Self: 'a;

    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs (i.e., of pairs with nonzero weight).
    fn num_arcs(&self) -> usize;

    /// Returns the weight of the arc from `from` to `to`, or zero if there is
    /// no such arc.
    ///
    /// # Panics
    ///
    /// Panics if either node is out of range.
    fn weight(&self, from: usize, to: usize) -> f64;

    /// Returns whether there is an arc from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either node is out of range.
    #[inline(always)]
    fn is_adjacent(&self, from: usize, to: usize) -> bool {
        self.weight(from, to) != 0.0
    }

    /// Returns the successors of `node` with the associated weights, in
    /// increasing order.
    fn successors(&self, node: usize) -> Self::Neighbors<'_>;

    /// Returns the predecessors of `node` with the associated weights, in
    /// increasing order.
    fn predecessors(&self, node: usize) -> Self::Neighbors<'_>;

    /// Returns the number of successors of `node`.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).count()
    }

    /// Returns the number of predecessors of `node`.
    fn indegree(&self, node: usize) -> usize {
        self.predecessors(node).count()
    }

    /// Returns a graph of the same type and with the same arcs, in which
    /// the arc from `j` to `i` has weight `f(j, i)`.
    ///
    /// Arcs for which `f` returns zero are dropped, so the caller must
    /// guarantee that `f` is nonzero on every arc if the shape has to be
    /// preserved.
    fn reweight(&self, f: impl FnMut(usize, usize) -> f64) -> Self
    where
        Self: Sized;
}
