//! Permutation crossover and mutation operators.
//!
//! # Crossover Operators
//!
//! - [`order1_crossover`] / [`Order1Crossover`]: segment crossover that keeps
//!   a contiguous block of parent1 in place and fills the rest in parent2's
//!   relative order
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`] / [`SwapMutation`]: exchange two distinct positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::types::{Crossover, Mutation, Tour};
use crate::error::GaError;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order-1 segment crossover.
///
/// # Algorithm
///
/// 1. Pick a start `s` uniformly in `[0, n - segment_length]`
/// 2. Copy `parent1[s..s + segment_length]` into the same child positions
/// 3. Walk `parent2` left to right, placing each value not already copied
///    into the next empty child slot
///
/// Both parents must be permutations of the same index set. This is a
/// precondition, not re-checked up front; if it is violated and a slot is
/// left empty, the call fails with [`GaError::InvalidArgument`].
///
/// # Errors
/// [`GaError::InvalidArgument`] if the parents differ in length, or
/// `segment_length` is zero or not smaller than the tour length.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn order1_crossover<R: Rng>(
    parent1: &Tour,
    parent2: &Tour,
    segment_length: usize,
    rng: &mut R,
) -> Result<Tour, GaError> {
    let n = parent1.len();
    if n != parent2.len() {
        return Err(GaError::invalid_argument(format!(
            "parents must have equal length: {} != {}",
            n,
            parent2.len()
        )));
    }
    if segment_length == 0 {
        return Err(GaError::invalid_argument("segment_length must be positive"));
    }
    if segment_length >= n {
        return Err(GaError::invalid_argument(format!(
            "segment_length ({segment_length}) must be less than tour length ({n})"
        )));
    }

    let start = rng.random_range(0..=n - segment_length);
    order1_build_child(parent1.as_slice(), parent2.as_slice(), start, segment_length)
}

/// Build one child: keep `template[start..start + len]`, fill from `donor`.
fn order1_build_child(
    template: &[usize],
    donor: &[usize],
    start: usize,
    len: usize,
) -> Result<Tour, GaError> {
    let n = template.len();
    let end = start + len;
    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut used = vec![false; n];

    // Step 1: Copy segment from template
    for i in start..end {
        let city = template[i];
        child[i] = Some(city);
        if let Some(flag) = used.get_mut(city) {
            *flag = true;
        }
    }

    // Step 2: Fill empty slots in index order from donor
    let mut slots = (0..n).filter(|i| !(start..end).contains(i));
    for &city in donor {
        if used.get(city).copied().unwrap_or(true) {
            continue;
        }
        match slots.next() {
            Some(pos) => {
                child[pos] = Some(city);
                used[city] = true;
            }
            None => break,
        }
    }

    child
        .into_iter()
        .collect::<Option<Vec<usize>>>()
        .map(Tour::from_vec_unchecked)
        .ok_or_else(|| {
            GaError::invalid_argument("parents are not permutations of the same index set")
        })
}

/// [`Crossover`] strategy backed by [`order1_crossover`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Order1Crossover;

impl Crossover for Order1Crossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Tour,
        parent2: &Tour,
        segment_length: usize,
        rng: &mut R,
    ) -> Result<Tour, GaError> {
        order1_crossover(parent1, parent2, segment_length, rng)
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// `j` is redrawn until it differs from `i`, so the result always differs
/// from the input by exactly one transposition.
///
/// # Errors
/// [`GaError::InvalidArgument`] if the tour has fewer than two cities.
///
/// # Complexity
/// O(1) expected
pub fn swap_mutation<R: Rng>(tour: &mut Tour, rng: &mut R) -> Result<(), GaError> {
    let n = tour.len();
    if n <= 1 {
        return Err(GaError::invalid_argument(format!(
            "swap mutation needs at least 2 cities, got {n}"
        )));
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while i == j {
        j = rng.random_range(0..n);
    }
    tour.swap(i, j);
    Ok(())
}

/// [`Mutation`] strategy backed by [`swap_mutation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapMutation;

impl Mutation for SwapMutation {
    fn mutate<R: Rng>(&self, tour: &mut Tour, rng: &mut R) -> Result<(), GaError> {
        swap_mutation(tour, rng)
    }
}

// ============================================================================
// Tests
// ============================================================================
