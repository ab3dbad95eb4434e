//! Traveling Salesman Problem domain model.
//!
//! Cities on the Euclidean plane, the derived distance and visibility
//! matrices, and complete tours with closed-loop lengths. Everything here
//! is built once per problem instance and read-only afterwards; the
//! optimization state lives in [`crate::aco`].
//!
//! # Key Types
//!
//! - [`City`]: An indexed point on the plane, with seeded instance
//!   generation via [`generate_cities`]
//! - [`DistanceMatrix`]: Symmetric pairwise Euclidean distances
//! - [`VisibilityMatrix`]: Reciprocal distances, the static greed heuristic
//! - [`Tour`]: A visiting order over all cities plus its closed length

mod city;
mod distance;
mod tour;

pub use city::{generate_cities, City};
pub use distance::{DistanceMatrix, VisibilityMatrix};
pub use tour::Tour;
