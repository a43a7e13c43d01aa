/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod graphs;
pub mod node_labels;
pub mod rank;
pub mod traits;
pub mod utils;

/// Prelude module to import everything from this crate.
pub mod prelude {
    pub use crate::graphs::GraphError;
    pub use crate::graphs::dense_graph::DenseGraph;
    pub use crate::graphs::sparse_graph::SparseGraph;
    pub use crate::node_labels::{LabelError, NodeLabels, RankedNode};
    pub use crate::rank::preds::{L1Norm, MaxIter};
    pub use crate::rank::{Degrees, RankError, State, WeightedPageRank};
    pub use crate::traits::*;
    pub use crate::utils::*;
}
