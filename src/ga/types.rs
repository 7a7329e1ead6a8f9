//! Core types and strategy traits for the GA engine.
//!
//! [`Tour`] is the candidate solution. The four strategy traits —
//! [`Objective`], [`Crossover`], [`Mutation`] and [`Selector`] — are the
//! seams through which [`GaEngine`](super::GaEngine) is assembled; each is
//! injected at construction time and called once per use in a generation.

use crate::error::GaError;
use rand::seq::SliceRandom;
use rand::Rng;

/// A closed route: a permutation of the city indices `0..n`.
///
/// Each population member owns its own buffer, so `clone` yields a fully
/// independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// The identity permutation `[0, 1, ..., n - 1]`.
    ///
    /// Fails with [`GaError::InvalidState`] when `n <= 1`: a problem with
    /// fewer than two cities has nothing to optimize.
    pub fn identity(n: usize) -> Result<Self, GaError> {
        check_city_count(n)?;
        Ok(Self((0..n).collect()))
    }

    /// A uniformly random permutation of `0..n`.
    pub fn shuffled<R: Rng>(n: usize, rng: &mut R) -> Result<Self, GaError> {
        let mut tour = Self::identity(n)?;
        tour.0.shuffle(rng);
        Ok(tour)
    }

    /// Wraps a caller-supplied order, checking the permutation invariant.
    pub fn from_vec(order: Vec<usize>) -> Result<Self, GaError> {
        let tour = Self(order);
        if !tour.is_permutation() {
            return Err(GaError::invalid_argument(format!(
                "not a permutation of 0..{}: {:?}",
                tour.len(),
                tour.0
            )));
        }
        Ok(tour)
    }

    /// Used by operators whose output is a permutation by construction.
    pub(crate) fn from_vec_unchecked(order: Vec<usize>) -> Self {
        Self(order)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Exchanges the cities at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Returns `true` if every index in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.0.len();
        let mut seen = vec![false; n];
        for &city in &self.0 {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

pub(crate) fn check_city_count(n: usize) -> Result<(), GaError> {
    if n <= 1 {
        return Err(GaError::invalid_state(format!(
            "degenerate problem: need at least 2 cities, got {n}"
        )));
    }
    Ok(())
}

/// A tour paired with its cost (lower is better).
///
/// Recomputed once per generation; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTour {
    pub tour: Tour,
    pub cost: f64,
}

/// The lowest-cost tour observed so far in a run.
pub type BestSolution = ScoredTour;

/// Scalar cost of a tour. Lower is better.
pub trait Objective {
    /// Number of cities every evaluated tour must cover.
    fn city_count(&self) -> usize;

    /// Computes the cost of `tour`. Must be deterministic and side-effect free.
    fn evaluate(&self, tour: &Tour) -> f64;
}

/// Combines two parents into one child.
pub trait Crossover {
    /// Produces a child from `parent1` and `parent2`, preserving a block of
    /// `segment_length` positions from `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Tour,
        parent2: &Tour,
        segment_length: usize,
        rng: &mut R,
    ) -> Result<Tour, GaError>;
}

/// Perturbs a single tour in place.
pub trait Mutation {
    fn mutate<R: Rng>(&self, tour: &mut Tour, rng: &mut R) -> Result<(), GaError>;
}

/// Picks one parent from a fully scored population.
pub trait Selector {
    /// Lower cost must yield a higher probability of being returned.
    fn select<'a, R: Rng>(
        &self,
        scored: &'a [ScoredTour],
        rng: &mut R,
    ) -> Result<&'a Tour, GaError>;
}
