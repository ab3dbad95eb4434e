//! Probabilistic tour construction.

use crate::aco::PheromoneMatrix;
use crate::tsp::VisibilityMatrix;
use rand::Rng;

/// Builds one tour per call from the current pheromone field.
///
/// The builder borrows the field and the visibility matrix immutably for
/// the duration of one cycle's constructions; the field is written only
/// after every ant of the cycle has finished.
#[derive(Debug)]
pub struct TourBuilder<'a> {
    pheromone: &'a PheromoneMatrix,
    visibility: &'a VisibilityMatrix,
    alpha: f64,
    beta: f64,
}

impl<'a> TourBuilder<'a> {
    /// Creates a builder over the given matrices and exponents.
    pub fn new(
        pheromone: &'a PheromoneMatrix,
        visibility: &'a VisibilityMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        Self {
            pheromone,
            visibility,
            alpha,
            beta,
        }
    }

    /// Constructs a complete visiting order starting at `start`.
    ///
    /// At each step the next city is drawn from the remaining candidates
    /// with probability proportional to
    /// `pheromone(i, j)^alpha * visibility(i, j)^beta`. Candidates are
    /// kept in ascending index order and exactly one uniform variate is
    /// consumed per step, so the sequence of draws is enumerable and a
    /// seeded stream replays the same tour.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a valid city index.
    pub fn build<R: Rng>(&self, start: usize, rng: &mut R) -> Vec<usize> {
        let n = self.pheromone.size();
        assert!(start < n, "start city {start} out of range for {n} cities");

        let mut sequence = Vec::with_capacity(n);
        sequence.push(start);
        let mut remaining: Vec<usize> = (0..n).filter(|&c| c != start).collect();
        let mut scores = Vec::with_capacity(n.saturating_sub(1));

        while !remaining.is_empty() {
            let current = sequence[sequence.len() - 1];
            let picked = self.select_next(current, &remaining, &mut scores, rng);
            sequence.push(remaining.remove(picked));
        }
        sequence
    }

    /// Scores the remaining candidates from `current` and draws one,
    /// returning its index into `remaining`.
    ///
    /// When the score total degenerates to zero or a non-finite value
    /// (visibility underflow, exponent overflow), the draw falls back to a
    /// uniform choice so construction always completes.
    fn select_next<R: Rng>(
        &self,
        current: usize,
        remaining: &[usize],
        scores: &mut Vec<f64>,
        rng: &mut R,
    ) -> usize {
        scores.clear();
        let mut total = 0.0;
        for &candidate in remaining {
            let tau = self.pheromone.get(current, candidate);
            let eta = self.visibility.get(current, candidate);
            let score = tau.powf(self.alpha) * eta.powf(self.beta);
            scores.push(score);
            total += score;
        }
        if total.is_finite() && total > 0.0 {
            roulette(scores, total, rng)
        } else {
            uniform_index(remaining.len(), rng)
        }
    }
}

/// Draws an index with probability proportional to its weight.
///
/// Consumes exactly one uniform variate; the final index absorbs any
/// floating-point remainder.
fn roulette<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let mut pick = rng.random::<f64>() * total;
    for (idx, &w) in weights.iter().enumerate() {
        pick -= w;
        if pick <= 0.0 {
            return idx;
        }
    }
    weights.len() - 1
}

/// Uniform draw over `0..len` consuming one variate, like [`roulette`].
fn uniform_index<R: Rng>(len: usize, rng: &mut R) -> usize {
    let idx = (rng.random::<f64>() * len as f64) as usize;
    idx.min(len - 1)
}
