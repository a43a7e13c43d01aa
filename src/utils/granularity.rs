/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Relative or absolute specification of the granularity of parallel tasks.
///
/// This enum provides a simple (and possibly size-independent) way of
/// specifying how many nodes are updated by a single Rayon task during a
/// rank iteration. The method [`Granularity::node_granularity`] will return
/// an appropriate value depending on the variant, on the number of nodes
/// and on the number of threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Granularity {
    /// Absolute granularity.
    Absolute(usize),
    /// Relative granularity.
    ///
    /// Granularity will be first determined by the number of nodes, divided
    /// by the number of threads multiplied by the slack; then, the resulting
    /// granularity will be clamped between a minimum and a maximum value.
    Relative {
        slack: f64,
        min_len: usize,
        max_len: usize,
    },
}

impl core::default::Default for Granularity {
    /// Returns a default relative granularity with slack factor 4,
    /// minimum length 1000, and maximum length 1000000.
    ///
    /// With these values graphs with less than a thousand nodes are
    /// updated by a single task.
    fn default() -> Self {
        Self::Relative {
            slack: 4.0,
            min_len: 1000,
            max_len: 1000000,
        }
    }
}

impl Granularity {
    /// Returns a granularity for a given number of nodes and threads.
    ///
    /// * [`Granularity::Absolute`]: granularity is just the fixed value.
    /// * [`Granularity::Relative`]: granularity will be first given by the
    ///   number of nodes divided by the number of threads multiplied by the
    ///   slack; then, the resulting granularity will be clamped between a
    ///   minimum and a maximum value.
    ///
    /// The result is always at least one.
    pub fn node_granularity(&self, num_nodes: usize, num_threads: usize) -> usize {
        match *self {
            Granularity::Absolute(fixed) => fixed.max(1),
            Granularity::Relative {
                slack,
                min_len,
                max_len,
            } => {
                let tasks = ((num_threads as f64 * slack) as usize).max(1);
                (num_nodes / tasks).max(min_len).min(max_len).max(1)
            }
        }
    }
}
