/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use weighted_pagerank::prelude::*;
use weighted_pagerank::rank::weights;

fn random_arcs(n: usize, p: f64, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut arcs = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.random_bool(p) {
                arcs.push((u, v));
            }
        }
    }
    arcs
}

/// Checks that successors and predecessors describe the same arcs.
fn check_consistency(g: &impl Digraph) {
    let n = g.num_nodes();
    let mut num_arcs = 0;
    for u in 0..n {
        let succ = g.successors(u).collect::<Vec<_>>();
        assert!(succ.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(succ.len(), g.outdegree(u));
        for (v, w) in succ {
            assert_ne!(w, 0.0);
            assert_eq!(g.weight(u, v), w);
            assert!(g.is_adjacent(u, v));
            assert!(g.predecessors(v).any(|(x, y)| x == u && y == w));
            num_arcs += 1;
        }
        let pred = g.predecessors(u).collect::<Vec<_>>();
        assert!(pred.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(pred.len(), g.indegree(u));
    }
    assert_eq!(num_arcs, g.num_arcs());
}

#[test]
fn test_dense_sparse_same_arcs() -> Result<()> {
    for seed in 0..10 {
        let n = 25;
        let arcs = random_arcs(n, 0.2, seed);
        let dense = DenseGraph::from_arcs(n, arcs.iter().copied())?;
        let sparse = SparseGraph::from_arcs(n, arcs.iter().copied())?;
        check_consistency(&dense);
        check_consistency(&sparse);
        assert_eq!(dense.num_arcs(), arcs.len());
        assert_eq!(sparse.num_arcs(), arcs.len());
        for u in 0..n {
            assert!(dense.successors(u).eq(sparse.successors(u)));
            assert!(dense.predecessors(u).eq(sparse.predecessors(u)));
        }
    }
    Ok(())
}

#[test]
fn test_duplicates() -> Result<()> {
    let arcs = [(0, 1), (1, 2), (0, 1), (2, 0), (1, 2)];
    let dense = DenseGraph::from_arcs(3, arcs)?;
    let sparse = SparseGraph::from_arcs(3, arcs)?;
    assert_eq!(dense.num_arcs(), 3);
    assert_eq!(sparse.num_arcs(), 3);
    Ok(())
}

#[test]
fn test_insertion_errors() -> Result<()> {
    let mut dense = DenseGraph::new(3);
    let mut sparse = SparseGraph::new(3);
    for (from, to, weight, err) in [
        (1, 1, 1.0, GraphError::SelfLoop { node: 1 }),
        (
            0,
            3,
            1.0,
            GraphError::NodeOutOfRange {
                node: 3,
                num_nodes: 3,
            },
        ),
        (
            0,
            1,
            f64::INFINITY,
            GraphError::InvalidWeight {
                from: 0,
                to: 1,
                weight: f64::INFINITY,
            },
        ),
    ] {
        assert_eq!(dense.insert_arc(from, to, weight), Err(err));
        assert_eq!(sparse.insert_arc(from, to, weight), Err(err));
    }
    assert_eq!(dense.num_arcs(), 0);
    assert_eq!(sparse.num_arcs(), 0);

    assert!(DenseGraph::from_arcs(2, [(0, 1), (1, 1)]).is_err());
    assert!(SparseGraph::from_arcs(2, [(0, 1), (0, 2)]).is_err());
    Ok(())
}

#[test]
fn test_weights_are_distributions() -> Result<()> {
    for seed in 0..5 {
        let n = 30;
        let g = SparseGraph::from_arcs(n, random_arcs(n, 0.1, seed))?;
        let degrees = Degrees::new(&g);
        let w_in = weights::w_in(&g, &degrees)?;
        let w_out = weights::w_out(&g, &degrees)?;
        check_consistency(&w_in);
        check_consistency(&w_out);
        assert_eq!(w_in.num_arcs(), g.num_arcs());
        assert_eq!(w_out.num_arcs(), g.num_arcs());

        for j in 0..n {
            let in_sum: f64 = w_in.successors(j).map(|(_, w)| w).sum();
            let out_sum: f64 = w_out.successors(j).map(|(_, w)| w).sum();
            if g.outdegree(j) == 0 {
                assert_eq!(in_sum, 0.0);
                assert_eq!(out_sum, 0.0);
            } else {
                assert!((in_sum - 1.0).abs() < 1E-12);
                assert!((out_sum - 1.0).abs() < 1E-12);
            }
            for (i, w) in w_out.successors(j) {
                assert!(w > 0.0 && w <= 1.0);
                assert!(w_in.is_adjacent(j, i));
            }
        }
    }
    Ok(())
}

#[test]
fn test_weights_dense_sparse() -> Result<()> {
    let n = 20;
    let arcs = random_arcs(n, 0.25, 3);
    let dense = DenseGraph::from_arcs(n, arcs.iter().copied())?;
    let sparse = SparseGraph::from_arcs(n, arcs.iter().copied())?;
    let degrees = Degrees::new(&dense);
    assert_eq!(degrees, Degrees::new(&sparse));

    let dense_in = weights::w_in(&dense, &degrees)?;
    let sparse_in = weights::w_in(&sparse, &degrees)?;
    let dense_out = weights::w_out(&dense, &degrees)?;
    let sparse_out = weights::w_out(&sparse, &degrees)?;
    for &(u, v) in &arcs {
        assert_eq!(dense_in.weight(u, v), sparse_in.weight(u, v));
        assert_eq!(dense_out.weight(u, v), sparse_out.weight(u, v));
    }
    Ok(())
}
