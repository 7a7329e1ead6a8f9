//! Closed-tour Euclidean length.

use super::city::City;
use crate::ga::{Objective, Tour};

/// Length of the closed route visiting `cities` in `tour` order and
/// returning to the start.
///
/// Returns `0.0` for an empty tour.
///
/// # Panics
/// Panics if `tour` holds an index `>= cities.len()`.
pub fn tour_length(tour: &Tour, cities: &[City]) -> f64 {
    let order = tour.as_slice();
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return 0.0;
    };

    let open: f64 = order
        .windows(2)
        .map(|pair| cities[pair[0]].distance(&cities[pair[1]]))
        .sum();
    open + cities[last].distance(&cities[first])
}

/// [`Objective`] over a fixed, read-only city list.
#[derive(Debug, Clone)]
pub struct TourLength {
    cities: Vec<City>,
}

impl TourLength {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }
}

impl Objective for TourLength {
    fn city_count(&self) -> usize {
        self.cities.len()
    }

    fn evaluate(&self, tour: &Tour) -> f64 {
        tour_length(tour, &self.cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Vec<City> {
        [(0, 0), (10, 0), (10, 10), (0, 10)]
            .into_iter()
            .map(City::from)
            .collect()
    }

    fn tour(order: &[usize]) -> Tour {
        Tour::from_vec(order.to_vec()).unwrap()
    }

    #[test]
    fn test_square_perimeter() {
        let cost = tour_length(&tour(&[0, 1, 2, 3]), &square());
        assert!((cost - 40.0).abs() < 1e-9, "got {cost}");
    }

    #[test]
    fn test_square_crossed() {
        // 0 -> 2 -> 1 -> 3 uses both diagonals
        let cost = tour_length(&tour(&[0, 2, 1, 3]), &square());
        let expected = 20.0 + 2.0 * 200f64.sqrt();
        assert!((cost - expected).abs() < 1e-9, "got {cost}");
    }

    #[test]
    fn test_empty_tour_is_zero() {
        let empty = Tour::from_vec(Vec::new()).unwrap();
        assert_eq!(tour_length(&empty, &square()), 0.0);
    }

    #[test]
    fn test_two_cities_round_trip() {
        let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
        assert!((tour_length(&tour(&[0, 1]), &cities) - 10.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_beyond_cities_panics() {
        let cities = vec![City::new(0.0, 0.0), City::new(1.0, 1.0)];
        tour_length(&tour(&[0, 1, 2]), &cities);
    }

    #[test]
    fn test_objective_impl() {
        let objective = TourLength::new(square());
        assert_eq!(objective.city_count(), 4);
        assert!((objective.evaluate(&tour(&[3, 2, 1, 0])) - 40.0).abs() < 1e-9);
    }

    fn cities_and_order() -> impl Strategy<Value = (Vec<City>, Vec<usize>)> {
        prop::collection::vec((-1000i32..1000, -1000i32..1000), 2..20).prop_flat_map(|coords| {
            let n = coords.len();
            let cities: Vec<City> = coords.into_iter().map(City::from).collect();
            (Just(cities), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        })
    }

    proptest! {
        #[test]
        fn prop_rotation_invariant((cities, order) in cities_and_order(), k in 0usize..20) {
            let base = tour_length(&tour(&order), &cities);
            let mut rotated = order.clone();
            rotated.rotate_left(k % order.len());
            let cost = tour_length(&tour(&rotated), &cities);
            prop_assert!((base - cost).abs() <= 1e-9 * base.max(1.0));
        }

        #[test]
        fn prop_reversal_invariant((cities, order) in cities_and_order()) {
            let base = tour_length(&tour(&order), &cities);
            let mut reversed = order.clone();
            reversed.reverse();
            let cost = tour_length(&tour(&reversed), &cities);
            prop_assert!((base - cost).abs() <= 1e-9 * base.max(1.0));
        }
    }
}
