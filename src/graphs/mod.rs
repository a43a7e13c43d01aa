/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph implementations.
//!
//! [`DenseGraph`](dense_graph::DenseGraph) stores weights in an *n* × *n*
//! matrix and is the natural choice for the small graphs this crate is
//! meant for; [`SparseGraph`](sparse_graph::SparseGraph) stores sorted
//! lists of successors and predecessors, and scales to larger graphs with
//! the same contract.

pub mod dense_graph;
pub mod sparse_graph;

/// Errors returned when inserting arcs into a graph.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum GraphError {
    #[error("Self-loops are not allowed (node {node})")]
    SelfLoop { node: usize },
    #[error("Node {node} does not exist (the graph has {num_nodes} nodes)")]
    NodeOutOfRange { node: usize, num_nodes: usize },
    #[error("Invalid weight {weight} for arc ({from}, {to})")]
    InvalidWeight { from: usize, to: usize, weight: f64 },
}

/// Checks that an arc can be inserted in a graph with `num_nodes` nodes.
pub(crate) fn check_arc(
    num_nodes: usize,
    from: usize,
    to: usize,
    weight: f64,
) -> Result<(), GraphError> {
    let max = from.max(to);
    if max >= num_nodes {
        return Err(GraphError::NodeOutOfRange {
            node: max,
            num_nodes,
        });
    }
    if from == to {
        return Err(GraphError::SelfLoop { node: from });
    }
    if !weight.is_finite() {
        return Err(GraphError::InvalidWeight { from, to, weight });
    }
    Ok(())
}
