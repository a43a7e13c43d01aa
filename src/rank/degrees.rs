/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Digraph;

/// Indegrees and outdegrees of the nodes of a graph.
///
/// Degrees are stored as doubles because they are only used as factors in
/// weight computations, where nodes without successors count as having
/// [half a successor](Degrees::DANGLING_OUTDEGREE).
#[derive(Debug, Clone, PartialEq)]
pub struct Degrees {
    outdegrees: Box<[f64]>,
    indegrees: Box<[f64]>,
}

impl Degrees {
    /// The outdegree used in weight computations for nodes without
    /// successors.
    pub const DANGLING_OUTDEGREE: f64 = 0.5;

    /// Computes the degrees of all nodes with a single scan of the arcs of
    /// `graph`.
    pub fn new(graph: &impl Digraph) -> Self {
        let n = graph.num_nodes();
        let mut outdegrees = vec![0.0; n].into_boxed_slice();
        let mut indegrees = vec![0.0; n].into_boxed_slice();
        for (j, outdegree) in outdegrees.iter_mut().enumerate() {
            for (k, _) in graph.successors(j) {
                *outdegree += 1.0;
                indegrees[k] += 1.0;
            }
        }
        Self {
            outdegrees,
            indegrees,
        }
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.outdegrees.len()
    }

    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> f64 {
        self.outdegrees[node]
    }

    #[inline(always)]
    pub fn indegree(&self, node: usize) -> f64 {
        self.indegrees[node]
    }

    /// Returns the outdegree of `node`, or
    /// [`DANGLING_OUTDEGREE`](Self::DANGLING_OUTDEGREE) if the node has no
    /// successors.
    #[inline(always)]
    pub fn effective_outdegree(&self, node: usize) -> f64 {
        let d = self.outdegrees[node];
        if d == 0.0 { Self::DANGLING_OUTDEGREE } else { d }
    }

    pub fn outdegrees(&self) -> &[f64] {
        &self.outdegrees
    }

    pub fn indegrees(&self) -> &[f64] {
        &self.indegrees
    }

    /// Returns the number of nodes without successors.
    pub fn num_dangling(&self) -> usize {
        self.outdegrees.iter().filter(|&&d| d == 0.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::dense_graph::DenseGraph;

    #[test]
    fn test_degrees() {
        // 0 → 1, 0 → 2, 2 → 0, 3 isolated
        let g = DenseGraph::from_arcs(4, [(0, 1), (0, 2), (2, 0)]).unwrap();
        let d = Degrees::new(&g);
        assert_eq!(d.outdegrees(), &[2.0, 0.0, 1.0, 0.0]);
        assert_eq!(d.indegrees(), &[1.0, 1.0, 1.0, 0.0]);
        assert_eq!(d.effective_outdegree(0), 2.0);
        assert_eq!(d.effective_outdegree(1), 0.5);
        assert_eq!(d.num_dangling(), 2);
        assert_eq!(d.num_nodes(), 4);
    }

    #[test]
    fn test_weights_ignored() {
        let g = DenseGraph::from_weighted_arcs(2, [(0, 1, 3.5)]).unwrap();
        let d = Degrees::new(&g);
        assert_eq!(d.outdegree(0), 1.0);
        assert_eq!(d.indegree(1), 1.0);
    }
}
