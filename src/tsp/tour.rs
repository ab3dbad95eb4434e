//! Tour representation and length accounting.

use crate::random::shuffle;
use crate::tsp::DistanceMatrix;
use rand::Rng;

/// A complete tour: every city visited exactly once, returning to the start.
///
/// The stored sequence is an open permutation of `0..n`; the closing edge
/// back to the first city is not repeated in the sequence but is included
/// in the stored length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Builds a tour from a visiting order, computing its closed length.
    pub fn from_sequence(cities: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let length = closed_length(&cities, distances);
        Self { cities, length }
    }

    /// Builds a uniformly random tour starting at `start`.
    ///
    /// Useful as a blind-search baseline against pheromone-guided
    /// construction.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a valid city index for the matrix.
    pub fn random<R: Rng>(start: usize, distances: &DistanceMatrix, rng: &mut R) -> Self {
        let n = distances.size();
        assert!(start < n, "start city {start} out of range for {n} cities");
        let mut rest: Vec<usize> = (0..n).filter(|&c| c != start).collect();
        shuffle(&mut rest, rng);
        let mut cities = Vec::with_capacity(n);
        cities.push(start);
        cities.extend(rest);
        Self::from_sequence(cities, distances)
    }

    /// The visiting order. The start city appears only once, at index 0.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of cities visited.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Total closed length, including the edge back to the start.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Iterates over the tour's directed edges, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.cities.len();
        (0..n).map(move |k| (self.cities[k], self.cities[(k + 1) % n]))
    }

    /// Returns `true` if the tour visits each of `n` cities exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.cities.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.cities {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }
}

fn closed_length(cities: &[usize], distances: &DistanceMatrix) -> f64 {
    let n = cities.len();
    let mut total = 0.0;
    for k in 0..n {
        total += distances.get(cities[k], cities[(k + 1) % n]);
    }
    total
}
