/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Weighted PageRank.
//!
//! # The formula
//!
//! In the classical formulation of PageRank the rank of a node is split
//! evenly among its successors. Here, instead, the contribution of an arc
//! *j* → *i* is scaled by the product of its [incoming and outgoing
//! weights](super::weights), which favor targets that are, respectively,
//! more linked to and more linking than the other successors of *j*.
//!
//! If we denote with *n* the number of nodes and with *d* the damping
//! factor, the rank vector **x** is the fixed point of
//!
//! > *xᵢ* = (1 − *d*) / *n* + *d* ∑_(*j* → *i*) *xⱼ* · *W*ₒᵤₜ(*j*, *i*) · *W*ᵢₙ(*j*, *i*),
//!
//! which we approximate by Jacobi iteration starting from the uniform
//! vector.
//!
//! Since ∑_*i* *W*ᵢₙ(*j*, *i*) = ∑_*i* *W*ₒᵤₜ(*j*, *i*) = 1 for every node
//! *j* with successors, the 𝓁₁ norm of the difference between successive
//! approximations shrinks at each update by a factor at most *d*. The
//! vector, however, is not stochastic in general.
//!
//! # Iteration
//!
//! Each update first takes a snapshot of the current rank vector, and then
//! computes every new rank from the snapshot only. New ranks can thus be
//! computed in any order, and they are computed in parallel using Rayon;
//! the result does not depend on the number of threads.
//!
//! After each update the 𝓁₁ norm of the difference between the new rank
//! vector and the snapshot is computed, and two [predicates](super::preds)
//! are evaluated: the computation [converges](State::Converged) if the norm
//! is below the [threshold](WeightedPageRank::threshold), and it is
//! [exhausted](State::Exhausted) when the iteration counter, which starts
//! at one, reaches the [maximum number of
//! iterations](WeightedPageRank::max_iter). At least one update is always
//! performed.

use super::preds::{L1Norm, MaxIter, PredParams};
use super::{Degrees, RankError, weights};
use crate::traits::Digraph;
use crate::utils::Granularity;
use dsi_progress_logger::{ProgressLog, no_logging};
use kahan::KahanSum;
use predicates::Predicate;
use rayon::prelude::*;

/// The state of a [`WeightedPageRank`] computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// No update has been performed yet.
    #[default]
    Init,
    /// Some update has been performed, but no stopping condition has been
    /// met.
    Iterating,
    /// The norm delta fell below the threshold.
    Converged,
    /// The maximum number of iterations was reached first.
    Exhausted,
}

impl State {
    /// Returns true if the computation has terminated normally.
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Converged | State::Exhausted)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Init => f.write_str("initialized"),
            State::Iterating => f.write_str("iterating"),
            State::Converged => f.write_str("converged"),
            State::Exhausted => f.write_str("exhausted"),
        }
    }
}

/// Structural data computed once at initialization.
struct Weights<G> {
    degrees: Degrees,
    w_in: G,
    w_out: G,
}

/// Computes weighted PageRank by Jacobi iteration.
///
/// The struct is configured via setters and then executed via
/// [`run`](Self::run). After completion the rank vector is available via the
/// [`rank`](Self::rank) method. Alternatively, updates can be driven
/// manually using [`step`](Self::step).
///
/// # Examples
///
/// ```
/// use weighted_pagerank::graphs::dense_graph::DenseGraph;
/// use weighted_pagerank::rank::{State, WeightedPageRank};
///
/// // A directed 3-cycle: 0 → 1 → 2 → 0
/// let g = DenseGraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)])?;
///
/// let mut pr = WeightedPageRank::new(&g);
/// pr.damping(0.85).threshold(1E-4).max_iter(100);
/// assert_eq!(pr.run()?, State::Converged);
///
/// for &r in pr.rank() {
///     assert!((r - 1.0 / 3.0).abs() < 1E-9);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct WeightedPageRank<'a, G: Digraph + Sync> {
    graph: &'a G,
    damping: f64,
    threshold: f64,
    max_iter: usize,
    granularity: Granularity,
    weights: Option<Weights<G>>,

    rank: Box<[f64]>,
    prev_rank: Box<[f64]>,
    norm_delta: f64,
    iteration: usize,
    state: State,
}

impl<G: Digraph + Sync> std::fmt::Debug for WeightedPageRank<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedPageRank")
            .field("damping", &self.damping)
            .field("threshold", &self.threshold)
            .field("max_iter", &self.max_iter)
            .field("granularity", &self.granularity)
            .field("norm_delta", &self.norm_delta)
            .field("iteration", &self.iteration)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'a, G: Digraph + Sync> WeightedPageRank<'a, G> {
    pub const DEFAULT_DAMPING: f64 = 0.85;

    /// Creates a new weighted PageRank computation with default parameters.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            damping: Self::DEFAULT_DAMPING,
            threshold: L1Norm::DEFAULT_THRESHOLD,
            max_iter: MaxIter::DEFAULT_MAX_ITER,
            granularity: Granularity::default(),
            weights: None,
            rank: Box::default(),
            prev_rank: Box::default(),
            norm_delta: f64::INFINITY,
            iteration: 0,
            state: State::Init,
        }
    }

    /// Sets the damping factor.
    ///
    /// The value is checked at initialization, and it must be in
    /// [0 . . 1]. With damping factor zero all ranks become 1/*n* after one
    /// update; with damping factor one there is no teleportation.
    pub fn damping(&mut self, damping: f64) -> &mut Self {
        self.damping = damping;
        self
    }

    /// Sets the threshold for the 𝓁₁ norm of the difference between
    /// successive approximations below which the computation stops.
    ///
    /// The value is checked at initialization, and it must be positive.
    pub fn threshold(&mut self, threshold: f64) -> &mut Self {
        self.threshold = threshold;
        self
    }

    /// Sets the maximum number of iterations.
    ///
    /// The value is checked at initialization, and it must be positive. See
    /// [`MaxIter`] for the exact semantics.
    pub fn max_iter(&mut self, max_iter: usize) -> &mut Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the parallel task granularity.
    ///
    /// The granularity expresses how many
    /// [nodes](Granularity::node_granularity) will be updated by a Rayon task
    /// at a time.
    pub fn granularity(&mut self, granularity: Granularity) -> &mut Self {
        self.granularity = granularity;
        self
    }

    /// Returns the rank vector, in node order.
    ///
    /// The vector is empty before initialization.
    pub fn rank(&self) -> &[f64] {
        &self.rank
    }

    /// Returns the rank vector before the last update.
    pub fn prev_rank(&self) -> &[f64] {
        &self.prev_rank
    }

    /// Returns the number of updates performed since the last
    /// initialization.
    pub fn iterations(&self) -> usize {
        self.iteration
    }

    /// Returns the 𝓁₁ norm of the difference between the last two rank
    /// vectors, or infinity if no update has been performed.
    pub fn norm_delta(&self) -> f64 {
        self.norm_delta
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the degrees of the graph, if already computed.
    pub fn degrees(&self) -> Option<&Degrees> {
        self.weights.as_ref().map(|w| &w.degrees)
    }

    /// Returns the graph of [incoming weights](super::weights), if already
    /// computed.
    pub fn w_in(&self) -> Option<&G> {
        self.weights.as_ref().map(|w| &w.w_in)
    }

    /// Returns the graph of [outgoing weights](super::weights), if already
    /// computed.
    pub fn w_out(&self) -> Option<&G> {
        self.weights.as_ref().map(|w| &w.w_out)
    }

    fn check_damping(&self) -> Result<(), RankError> {
        // Also rejects NaN
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(RankError::InvalidDamping(self.damping));
        }
        Ok(())
    }

    /// Checks the configuration, computes degrees and weights if needed,
    /// and resets the rank vector to the uniform distribution.
    ///
    /// Calling this method explicitly is only necessary to inspect the
    /// initial state, as both [`run`](Self::run) and the first call to
    /// [`step`](Self::step) initialize the computation.
    pub fn init(&mut self) -> Result<(), RankError> {
        self.init_with_logging(no_logging![]).map(|_| ())
    }

    fn init_with_logging(
        &mut self,
        pl: &mut impl ProgressLog,
    ) -> Result<(L1Norm, MaxIter), RankError> {
        let n = self.graph.num_nodes();
        if n == 0 {
            return Err(RankError::EmptyGraph);
        }
        self.check_damping()?;
        let converged = L1Norm::try_from(self.threshold)?;
        let exhausted = MaxIter::try_from(self.max_iter)?;

        if self.weights.is_none() {
            pl.info(format_args!("Computing degrees..."));
            let degrees = Degrees::new(self.graph);
            log::info!("{} dangling nodes", degrees.num_dangling());
            pl.info(format_args!("Computing weights..."));
            let w_in = weights::w_in(self.graph, &degrees)?;
            let w_out = weights::w_out(self.graph, &degrees)?;
            self.weights = Some(Weights {
                degrees,
                w_in,
                w_out,
            });
        }

        self.rank = vec![1.0 / n as f64; n].into_boxed_slice();
        self.prev_rank = vec![0.0; n].into_boxed_slice();
        self.norm_delta = f64::INFINITY;
        self.iteration = 0;
        self.state = State::Init;

        Ok((converged, exhausted))
    }

    /// Performs a single update, returning the norm delta.
    ///
    /// The computation is initialized if necessary. Stopping conditions are
    /// not evaluated, and the [state](Self::state) is not changed, except
    /// for passing from [`Init`](State::Init) to
    /// [`Iterating`](State::Iterating): it is thus possible to force updates
    /// after termination.
    pub fn step(&mut self) -> Result<f64, RankError> {
        if self.rank.is_empty() {
            self.init()?;
        }
        self.check_damping()?;

        let Some(Weights { w_in, w_out, .. }) = &self.weights else {
            unreachable!("weights are computed at initialization");
        };
        let n = self.rank.len();
        let damping = self.damping;
        let teleport = (1.0 - damping) / n as f64;
        let node_granularity = self
            .granularity
            .node_granularity(n, rayon::current_num_threads());

        // Snapshot: every new rank is computed from prev_rank only, and every
        // entry of rank is overwritten.
        std::mem::swap(&mut self.rank, &mut self.prev_rank);
        let prev_rank = &self.prev_rank;

        self.rank
            .par_iter_mut()
            .with_min_len(node_granularity)
            .enumerate()
            .for_each(|(i, rank)| {
                let mut sigma = KahanSum::<f64>::new();
                // Weight graphs have the same arcs, enumerated in the same order
                for ((j, in_weight), (_, out_weight)) in
                    w_in.predecessors(i).zip(w_out.predecessors(i))
                {
                    sigma += prev_rank[j] * out_weight * in_weight;
                }
                *rank = teleport + damping * sigma.sum();
            });

        let mut norm_delta = KahanSum::<f64>::new();
        for (x, y) in self.rank.iter().zip(self.prev_rank.iter()) {
            norm_delta += (x - y).abs();
        }
        self.norm_delta = norm_delta.sum();
        self.iteration += 1;
        if self.state == State::Init {
            self.state = State::Iterating;
        }

        Ok(self.norm_delta)
    }

    /// Runs the computation until convergence or exhaustion.
    ///
    /// Configuration errors are reported before any update, and the rank
    /// vector is left untouched in that case.
    pub fn run(&mut self) -> Result<State, RankError> {
        self.run_with_logging(no_logging![])
    }

    /// Runs the computation until convergence or exhaustion, logging
    /// progress.
    ///
    /// `pl` is a [`ProgressLog`] used to count iterations. Its options will
    /// be preserved, making thus possible to customize the logs.
    pub fn run_with_logging(&mut self, pl: &mut impl ProgressLog) -> Result<State, RankError> {
        let (converged, exhausted) = self.init_with_logging(pl)?;

        log::info!("Damping factor: {}", self.damping);
        log::info!("Stopping criterion: {} or {}", converged, exhausted);

        pl.item_name("iteration");
        pl.expected_updates(Some(self.max_iter.saturating_sub(1).max(1)));
        pl.start(format!(
            "Computing weighted PageRank (damping={})...",
            self.damping
        ));

        loop {
            self.step()?;

            log::info!(
                "Iteration {}: norm delta = {}",
                self.iteration,
                self.norm_delta
            );

            pl.update_and_display();

            let pred_params = PredParams {
                iteration: self.iteration,
                norm_delta: self.norm_delta,
            };
            if converged.eval(&pred_params) {
                self.state = State::Converged;
                break;
            }
            if exhausted.eval(&pred_params) {
                self.state = State::Exhausted;
                break;
            }
        }

        pl.done();

        log::info!(
            "Computation {} after {} iteration(s), norm delta = {}",
            self.state,
            self.iteration,
            self.norm_delta
        );

        Ok(self.state)
    }
}
