/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Labels of documents, and the projection of ranks onto them.
//!
//! Computation never looks at labels: nodes are identified by their index.
//! [`NodeLabels`] is the boundary with the code reading documents and
//! printing results. It assigns indices to labels in appearance order,
//! turns links between labels into arcs between indices, and pairs a final
//! rank vector with the labels.
//!
//! # Examples
//!
//! ```
//! use weighted_pagerank::graphs::dense_graph::DenseGraph;
//! use weighted_pagerank::node_labels::NodeLabels;
//! use weighted_pagerank::traits::Digraph;
//!
//! let labels = NodeLabels::new(["url11", "url21", "url22"])?;
//! // Self-loops and links to unknown documents are dropped
//! let arcs = labels.resolve([
//!     ("url11", "url21"),
//!     ("url21", "url21"),
//!     ("url21", "url22"),
//!     ("url22", "url99"),
//! ]);
//! assert_eq!(arcs, vec![(0, 1), (1, 2)]);
//! let graph = DenseGraph::from_arcs(labels.len(), arcs)?;
//! assert_eq!(graph.num_arcs(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashMap;

/// Errors related to node labels.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Duplicate label {label:?} (at indices {first} and {second})")]
    DuplicateLabel {
        label: String,
        first: usize,
        second: usize,
    },
    #[error("Different number of labels and ranks: {labels} != {ranks}")]
    LengthMismatch { labels: usize, ranks: usize },
}

/// A final rank associated with its node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedNode<'a> {
    pub index: usize,
    pub label: &'a str,
    pub rank: f64,
}

/// A bijection between labels and the indices in [0 . . *n*).
#[derive(Debug, Clone, Default)]
pub struct NodeLabels {
    labels: Box<[String]>,
    index: HashMap<String, usize>,
}

impl NodeLabels {
    /// Creates the labels of a set of nodes; the *i*-th label is assigned
    /// index *i*.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Result<Self, LabelError> {
        let labels: Box<[String]> = labels.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if let Some(first) = index.insert(label.clone(), i) {
                return Err(LabelError::DuplicateLabel {
                    label: label.clone(),
                    first,
                    second: i,
                });
            }
        }
        Ok(Self { labels, index })
    }

    /// Returns the number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label of a node.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Returns the index of a label, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns an iterator over the pairs `(label, index)`, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
    }

    /// Turns links between labels into a sorted list of distinct arcs.
    ///
    /// Links whose endpoints are not both known, and links from a document
    /// to itself, are discarded.
    pub fn resolve<S: AsRef<str>, T: AsRef<str>>(
        &self,
        links: impl IntoIterator<Item = (S, T)>,
    ) -> Vec<(usize, usize)> {
        let mut arcs = Vec::new();
        let mut discarded = 0_usize;
        for (src, dst) in links {
            match (self.index_of(src.as_ref()), self.index_of(dst.as_ref())) {
                (Some(u), Some(v)) if u != v => arcs.push((u, v)),
                (Some(_), Some(_)) => {
                    log::debug!("Discarding self-loop on {:?}", src.as_ref());
                    discarded += 1;
                }
                _ => {
                    log::debug!(
                        "Discarding link {:?} -> {:?} to or from an unknown document",
                        src.as_ref(),
                        dst.as_ref()
                    );
                    discarded += 1;
                }
            }
        }
        arcs.sort_unstable();
        arcs.dedup();
        if discarded != 0 {
            log::info!("{} links discarded", discarded);
        }
        arcs
    }

    /// Pairs a rank vector, in index order, with the labels.
    ///
    /// The result is in index order: sorting it is up to the caller.
    pub fn ranked<'a>(&'a self, rank: &[f64]) -> Result<Vec<RankedNode<'a>>, LabelError> {
        if rank.len() != self.labels.len() {
            return Err(LabelError::LengthMismatch {
                labels: self.labels.len(),
                ranks: rank.len(),
            });
        }
        Ok(self
            .labels
            .iter()
            .zip(rank)
            .enumerate()
            .map(|(index, (label, &rank))| RankedNode {
                index,
                label,
                rank,
            })
            .collect())
    }
}
