//! Distance and visibility matrices.

use crate::tsp::City;

/// A dense n×n symmetric Euclidean distance matrix in row-major order.
///
/// Built once from city coordinates and never mutated. The diagonal is
/// zero and is never consulted by tour construction.
///
/// # Examples
///
/// ```
/// use u_antcolony::tsp::{City, DistanceMatrix};
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
///     City::new(2, 0.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the pairwise distance matrix for the given cities.
    ///
    /// Returns `None` for fewer than two cities: no tour exists over a
    /// single city, so the matrix would be meaningless.
    pub fn from_cities(cities: &[City]) -> Option<Self> {
        let n = cities.len();
        if n < 2 {
            return None;
        }
        let mut dm = Self {
            data: vec![0.0; n * n],
            size: n,
        };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Some(dm)
    }

    /// Returns the distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
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

/// The heuristic visibility matrix: reciprocal distance per edge.
///
/// `eta(i, j) = 1 / d(i, j)` for distinct cities at positive distance.
/// Co-located cities (zero distance) get visibility zero, as does the
/// diagonal; neither carries guidance and tour construction falls back
/// to a uniform draw when every candidate score vanishes.
#[derive(Debug, Clone)]
pub struct VisibilityMatrix {
    data: Vec<f64>,
    size: usize,
}

impl VisibilityMatrix {
    /// Derives the visibility matrix from a distance matrix.
    pub fn from_distances(distances: &DistanceMatrix) -> Self {
        let n = distances.size();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                let d = distances.get(i, j);
                if i != j && d > 0.0 {
                    data[i * n + j] = 1.0 / d;
                }
            }
        }
        Self { data, size: n }
    }

    /// Returns the visibility of the edge `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
