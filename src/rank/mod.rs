/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Degree-weighted PageRank.

mod degrees;
pub use degrees::Degrees;

pub mod preds;
pub mod weights;

mod weighted_pagerank;
pub use weighted_pagerank::{State, WeightedPageRank};

use weights::Matrix;

/// Errors reported by the ranking engine.
///
/// All of them but [`DegenerateWeight`](RankError::DegenerateWeight) are
/// configuration errors, and they are reported before any update.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum RankError {
    #[error("The graph has no nodes")]
    EmptyGraph,
    #[error("The maximum number of iterations must be positive")]
    ZeroMaxIter,
    #[error("The threshold must be positive, got {0}")]
    InvalidThreshold(f64),
    #[error("The damping factor must be in [0 . . 1], got {0}")]
    InvalidDamping(f64),
    #[error("Degenerate {matrix} weight for arc ({from}, {to})")]
    DegenerateWeight {
        matrix: Matrix,
        from: usize,
        to: usize,
    },
}
