//! The Euclidean TSP problem definition.
//!
//! - [`City`]: immutable planar coordinates, indexed by position in the list
//! - [`parse_cities`]: reads the `<id> <x> <y>` city list format
//! - [`TourLength`]: the closed-tour [`Objective`](crate::ga::Objective)

mod city;
mod objective;

pub use city::{parse_cities, City};
pub use objective::{tour_length, TourLength};
