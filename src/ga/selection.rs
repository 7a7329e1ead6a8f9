//! Parent selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{ScoredTour, Selector, Tour};
use crate::error::GaError;
use rand::Rng;

/// Fitness-proportionate (roulette wheel) selection for minimization.
///
/// Costs are inverted before sampling: `weight_i = max_cost - cost_i + epsilon`,
/// so the cheapest tour gets the largest slice of the wheel. When all costs
/// are equal every weight is `epsilon` and the draw is uniform.
///
/// **Warning**: the worst tour in the population gets only `epsilon` weight.
///
/// # Complexity
/// O(n) per selection (linear scan)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouletteWheel {
    pub epsilon: f64,
}

impl Default for RouletteWheel {
    fn default() -> Self {
        Self { epsilon: 1e-10 }
    }
}

impl Selector for RouletteWheel {
    fn select<'a, R: Rng>(
        &self,
        scored: &'a [ScoredTour],
        rng: &mut R,
    ) -> Result<&'a Tour, GaError> {
        roulette(scored, self.epsilon, rng).map(|i| &scored[i].tour)
    }
}

/// Returns the index of the selected member.
fn roulette<R: Rng>(scored: &[ScoredTour], epsilon: f64, rng: &mut R) -> Result<usize, GaError> {
    let n = scored.len();
    if n == 0 {
        return Err(GaError::invalid_argument("cannot select from empty population"));
    }
    if n == 1 {
        return Ok(0);
    }

    let max_cost = scored
        .iter()
        .map(|s| s.cost)
        .fold(f64::NEG_INFINITY, f64::max);

    // Invert: lower cost -> higher weight
    let weights: Vec<f64> = scored
        .iter()
        .map(|s| {
            let w = max_cost - s.cost + epsilon;
            if w > 0.0 {
                w
            } else {
                epsilon
            }
        })
        .collect();

    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Ok(rng.random_range(0..n));
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return Ok(i);
        }
    }

    Ok(n - 1) // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(costs: &[f64]) -> Vec<ScoredTour> {
        costs
            .iter()
            .map(|&cost| ScoredTour {
                tour: Tour::identity(3).unwrap(),
                cost,
            })
            .collect()
    }

    fn count_selections(costs: &[f64], draws: usize, seed: u64) -> Vec<u32> {
        let pop = make_population(costs);
        let mut rng = create_rng(seed);
        let mut counts = vec![0u32; costs.len()];
        for _ in 0..draws {
            counts[roulette(&pop, 1e-10, &mut rng).unwrap()] += 1;
        }
        counts
    }

    #[test]
    fn test_roulette_favors_cheapest() {
        let counts = count_selections(&[100.0, 50.0, 1.0, 80.0], 10000, 42);
        assert!(
            counts[2] > counts[1] && counts[1] > counts[3] && counts[3] > counts[0],
            "selection should follow inverted cost: {counts:?}"
        );
    }

    #[test]
    fn test_equal_costs_are_uniform() {
        // chi-square goodness of fit against uniform, 4 categories (df = 3)
        let draws = 4000;
        let counts = count_selections(&[40.0, 40.0, 40.0, 40.0], draws, 42);
        let expected = draws as f64 / 4.0;
        let chi2: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // p = 0.001 critical value for df = 3
        assert!(chi2 < 16.27, "chi-square {chi2} too large for {counts:?}");
    }

    #[test]
    fn test_equal_zero_costs_do_not_divide_by_zero() {
        let counts = count_selections(&[0.0, 0.0, 0.0], 3000, 7);
        for &c in &counts {
            assert!(c > 800, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_single_member() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(roulette(&pop, 1e-10, &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_empty_population_fails() {
        let mut rng = create_rng(42);
        let result = RouletteWheel::default().select(&[], &mut rng);
        assert!(matches!(result, Err(GaError::InvalidArgument(_))));
    }

    #[test]
    fn test_select_returns_member_tour() {
        let pop = vec![
            ScoredTour {
                tour: Tour::from_vec(vec![1, 0, 2]).unwrap(),
                cost: 1.0,
            },
            ScoredTour {
                tour: Tour::from_vec(vec![2, 1, 0]).unwrap(),
                cost: 1.0,
            },
        ];
        let mut rng = create_rng(42);
        let picked = RouletteWheel::default().select(&pop, &mut rng).unwrap();
        assert!(pop.iter().any(|s| &s.tour == picked));
    }
}
