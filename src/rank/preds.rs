/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Predicates implementing stopping conditions.
//!
//! The [weighted PageRank](super::WeightedPageRank) engine stops as soon as
//! one of two predicates becomes true: [`L1Norm`], which signals
//! convergence, and [`MaxIter`], which signals exhaustion. They evaluate to
//! true if the computation should be stopped.
//!
//! The predicates can be combined with the `and` and `or` methods provided
//! by the [`Predicate`] trait.
//!
//! # Examples
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use predicates::prelude::*;
//! use weighted_pagerank::rank::preds::{L1Norm, MaxIter, PredParams};
//!
//! let predicate = L1Norm::try_from(1E-4)?.or(MaxIter::try_from(100_usize)?);
//! assert!(predicate.eval(&PredParams { iteration: 3, norm_delta: 1E-5 }));
//! assert!(predicate.eval(&PredParams { iteration: 99, norm_delta: 1.0 }));
//! assert!(!predicate.eval(&PredParams { iteration: 98, norm_delta: 1.0 }));
//! #     Ok(())
//! # }
//! ```

use super::RankError;
use predicates::{Predicate, reflection::PredicateReflection};
use std::fmt::Display;

/// This structure is passed to stopping predicates to provide the
/// information that is needed to evaluate them.
#[derive(Debug, Clone, Copy)]
pub struct PredParams {
    /// The number of updates performed so far.
    pub iteration: usize,
    /// The 𝓁₁ norm of the difference between the last two rank vectors.
    pub norm_delta: f64,
}

/// Stops when the iteration counter reaches the provided value.
///
/// The iteration counter starts at one, and it is incremented after each
/// update; thus, at most `max_iter` − 1 updates are performed. Since the
/// engine always performs at least one update, a limit of one or two yields
/// exactly one update.
#[derive(Debug, Clone)]
pub struct MaxIter {
    max_iter: usize,
}

impl MaxIter {
    pub const DEFAULT_MAX_ITER: usize = 100;
}

impl TryFrom<usize> for MaxIter {
    type Error = RankError;
    fn try_from(max_iter: usize) -> Result<Self, RankError> {
        if max_iter == 0 {
            return Err(RankError::ZeroMaxIter);
        }
        Ok(MaxIter { max_iter })
    }
}

impl Default for MaxIter {
    fn default() -> Self {
        MaxIter {
            max_iter: Self::DEFAULT_MAX_ITER,
        }
    }
}

impl Display for MaxIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("(max iter: {})", self.max_iter))
    }
}

impl PredicateReflection for MaxIter {}

impl Predicate<PredParams> for MaxIter {
    fn eval(&self, pred_params: &PredParams) -> bool {
        pred_params.iteration + 1 >= self.max_iter
    }
}

/// Stops when the 𝓁₁ norm of the difference between successive
/// approximations falls strictly below a given threshold.
#[derive(Debug, Clone)]
pub struct L1Norm {
    threshold: f64,
}

impl L1Norm {
    pub const DEFAULT_THRESHOLD: f64 = 1E-6;
}

impl TryFrom<f64> for L1Norm {
    type Error = RankError;
    fn try_from(threshold: f64) -> Result<Self, RankError> {
        if threshold.is_nan() || threshold <= 0.0 {
            return Err(RankError::InvalidThreshold(threshold));
        }
        Ok(L1Norm { threshold })
    }
}

impl Default for L1Norm {
    fn default() -> Self {
        L1Norm {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl Display for L1Norm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("(norm: {})", self.threshold))
    }
}

impl PredicateReflection for L1Norm {}

impl Predicate<PredParams> for L1Norm {
    fn eval(&self, pred_params: &PredParams) -> bool {
        pred_params.norm_delta < self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(iteration: usize, norm_delta: f64) -> PredParams {
        PredParams {
            iteration,
            norm_delta,
        }
    }

    #[test]
    fn test_max_iter() {
        assert_eq!(MaxIter::try_from(0_usize).unwrap_err(), RankError::ZeroMaxIter);
        let p = MaxIter::try_from(3_usize).unwrap();
        assert!(!p.eval(&params(1, 0.0)));
        assert!(p.eval(&params(2, 0.0)));
        let p = MaxIter::try_from(1_usize).unwrap();
        assert!(p.eval(&params(1, 0.0)));
    }

    #[test]
    fn test_l1_norm() {
        assert!(matches!(
            L1Norm::try_from(0.0),
            Err(RankError::InvalidThreshold(_))
        ));
        assert!(L1Norm::try_from(-1.0).is_err());
        assert!(L1Norm::try_from(f64::NAN).is_err());
        let p = L1Norm::try_from(0.5).unwrap();
        assert!(!p.eval(&params(1, 0.5)));
        assert!(p.eval(&params(1, 0.25)));
        // Infinity is a valid, if useless, threshold
        assert!(L1Norm::try_from(f64::INFINITY).is_ok());
    }
}
