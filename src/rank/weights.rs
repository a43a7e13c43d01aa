/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Degree-based arc weights.
//!
//! Given an arc *j* → *i*, its *incoming weight* is
//!
//! > *W*ᵢₙ(*j*, *i*) = *I*(*i*) / ∑_(*j* → *k*) *I*(*k*),
//!
//! where *I*(*x*) is the indegree of *x*, and its *outgoing weight* is
//!
//! > *W*ₒᵤₜ(*j*, *i*) = *O*(*i*) / ∑_(*j* → *k*) *O*(*k*),
//!
//! where *O*(*x*) is the outdegree of *x*, or ½ if *x* has no successors
//! (see [`Degrees::effective_outdegree`]). In both cases the denominator,
//! the _mass_ of the successors of *j*, is replaced by ½ if it is zero.
//!
//! For a graph without self-loops the mass is never zero, as every
//! successor of *j* has indegree at least one and effective outdegree at
//! least ½, so every weight is finite and positive. Weights that are not
//! are reported as [`RankError::DegenerateWeight`].
//!
//! Weights depend only on the structure of the graph, so they are computed
//! once, before iterating, and stored in a graph of the same type and with
//! the same arcs as the original one.

use super::{Degrees, RankError};
use crate::traits::Digraph;
use std::fmt::Display;

/// The weight matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matrix {
    /// Incoming weights, based on indegrees.
    In,
    /// Outgoing weights, based on effective outdegrees.
    Out,
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matrix::In => f.write_str("W_in"),
            Matrix::Out => f.write_str("W_out"),
        }
    }
}

/// Returns a graph with the same arcs as `graph` whose weights are the
/// incoming weights.
pub fn w_in<G: Digraph>(graph: &G, degrees: &Degrees) -> Result<G, RankError> {
    reweight(graph, Matrix::In, |x| degrees.indegree(x))
}

/// Returns a graph with the same arcs as `graph` whose weights are the
/// outgoing weights.
pub fn w_out<G: Digraph>(graph: &G, degrees: &Degrees) -> Result<G, RankError> {
    reweight(graph, Matrix::Out, |x| degrees.effective_outdegree(x))
}

fn reweight<G: Digraph>(
    graph: &G,
    matrix: Matrix,
    mass: impl Fn(usize) -> f64,
) -> Result<G, RankError> {
    let masses: Box<[f64]> = (0..graph.num_nodes())
        .map(|j| {
            let m: f64 = graph.successors(j).map(|(k, _)| mass(k)).sum();
            if m == 0.0 {
                Degrees::DANGLING_OUTDEGREE
            } else {
                m
            }
        })
        .collect();

    let mut degenerate = None;
    let weights = graph.reweight(|j, i| {
        let w = mass(i) / masses[j];
        if !(w.is_finite() && w > 0.0) {
            degenerate.get_or_insert((j, i));
        }
        w
    });

    match degenerate {
        Some((from, to)) => Err(RankError::DegenerateWeight { matrix, from, to }),
        None => Ok(weights),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::dense_graph::DenseGraph;
    use crate::graphs::sparse_graph::SparseGraph;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1E-12, "{a} != {b}");
    }

    #[test]
    fn test_single_arc() {
        let g = DenseGraph::from_arcs(2, [(0, 1)]).unwrap();
        let d = Degrees::new(&g);
        let w_in = w_in(&g, &d).unwrap();
        let w_out = w_out(&g, &d).unwrap();
        assert_eq!(w_in.weight(0, 1), 1.0);
        assert_eq!(w_out.weight(0, 1), 1.0);
        assert_eq!(w_in.num_arcs(), 1);
        assert_eq!(w_out.weight(1, 0), 0.0);
    }

    #[test]
    fn test_dangling_target() {
        // 0 → 1, 0 → 2, 2 → 0; node 1 has no successors
        let g = DenseGraph::from_arcs(3, [(0, 1), (0, 2), (2, 0)]).unwrap();
        let d = Degrees::new(&g);
        let w_out = w_out(&g, &d).unwrap();
        assert_close(w_out.weight(0, 1), 0.5 / 1.5);
        assert_close(w_out.weight(0, 2), 1.0 / 1.5);
        assert_close(w_out.weight(2, 0), 1.0);
        let w_in = w_in(&g, &d).unwrap();
        assert_close(w_in.weight(0, 1), 0.5);
        assert_close(w_in.weight(0, 2), 0.5);
        assert_close(w_in.weight(2, 0), 1.0);
    }

    #[test]
    fn test_rows_sum_to_one() {
        let arcs = [(0, 1), (0, 2), (0, 3), (1, 2), (2, 0), (3, 2), (4, 0)];
        let g = SparseGraph::from_arcs(5, arcs).unwrap();
        let d = Degrees::new(&g);
        for w in [w_in(&g, &d).unwrap(), w_out(&g, &d).unwrap()] {
            for j in 0..5 {
                let sum: f64 = w.successors(j).map(|(_, w)| w).sum();
                assert_close(sum, 1.0);
            }
        }
    }

    #[test]
    fn test_degenerate() {
        let g = DenseGraph::from_arcs(2, [(0, 1)]).unwrap();
        let d = Degrees::new(&DenseGraph::new(2));
        assert_eq!(
            w_in(&g, &d).unwrap_err(),
            RankError::DegenerateWeight {
                matrix: Matrix::In,
                from: 0,
                to: 1
            }
        );
    }
}
