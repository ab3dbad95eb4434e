//! Pheromone trail matrix and its two update rules.

use crate::tsp::Tour;

/// The mutable pheromone trail matrix.
///
/// Symmetric with a zero diagonal. A session owns exactly one field and is
/// its only writer: each cycle evaporates every trail, then deposits every
/// ant's contribution, strictly between the tour constructions of
/// consecutive cycles. Off-diagonal trails start positive and stay
/// non-negative: evaporation scales by a positive factor and deposit only
/// adds.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a field with a uniform positive trail on every edge.
    ///
    /// The diagonal stays zero; no tour traverses a self-edge.
    pub fn new(size: usize, initial: f64) -> Self {
        let mut data = vec![initial; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self { data, size }
    }

    /// Returns the trail level on edge `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities spanned by the field.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every trail by `persistence`.
    ///
    /// `persistence` is the retained fraction, `1 - evaporation_rate`;
    /// 1.0 leaves the field untouched.
    pub fn evaporate(&mut self, persistence: f64) {
        for tau in &mut self.data {
            *tau *= persistence;
        }
    }

    /// Adds `q / tour_length` to both directions of every edge each tour
    /// uses, the closing edge included.
    ///
    /// Contributions sum additively, so the result does not depend on the
    /// order of the tours. Zero-length tours carry no information and are
    /// skipped rather than dividing by zero.
    pub fn deposit(&mut self, tours: &[Tour], q: f64) {
        for tour in tours {
            let len = tour.length();
            if len <= 0.0 {
                continue;
            }
            let delta = q / len;
            for (i, j) in tour.edges() {
                self.data[i * self.size + j] += delta;
                self.data[j * self.size + i] += delta;
            }
        }
    }

    /// Returns `true` if the field is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
