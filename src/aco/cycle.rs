//! Per-cycle statistics records.

/// Aggregate statistics for one completed cycle.
///
/// Records are appended to the session history in cycle order and never
/// mutated afterwards; together they form the convergence curve consumed
/// by dashboards and benchmark tabulation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleRecord {
    /// 1-based cycle index.
    pub cycle: usize,

    /// Shortest tour length built in this cycle.
    pub best_len: f64,

    /// Mean tour length over this cycle's ants.
    pub mean_len: f64,

    /// Population standard deviation of this cycle's tour lengths.
    pub std_len: f64,

    /// Shortest tour length found so far, this cycle included.
    pub best_len_global: f64,
}

impl CycleRecord {
    /// Summarizes one cycle's tour lengths.
    ///
    /// `lengths` holds one entry per ant and is never empty: a cycle
    /// always builds at least one tour.
    pub(crate) fn from_lengths(cycle: usize, lengths: &[f64], best_len_global: f64) -> Self {
        let m = lengths.len() as f64;
        let mut best = f64::INFINITY;
        let mut sum = 0.0;
        for &len in lengths {
            sum += len;
            if len < best {
                best = len;
            }
        }
        let mean = sum / m;
        let variance = lengths
            .iter()
            .map(|&len| {
                let d = len - mean;
                d * d
            })
            .sum::<f64>()
            / m;
        Self {
            cycle,
            best_len: best,
            mean_len: mean,
            std_len: variance.sqrt(),
            best_len_global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarizes_known_lengths() {
        let record = CycleRecord::from_lengths(3, &[2.0, 4.0, 6.0], 1.5);
        assert_eq!(record.cycle, 3);
        assert_eq!(record.best_len, 2.0);
        assert!((record.mean_len - 4.0).abs() < 1e-12);
        assert!((record.std_len - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(record.best_len_global, 1.5);
    }

    #[test]
    fn test_single_ant_has_zero_spread() {
        let record = CycleRecord::from_lengths(1, &[10.0], 10.0);
        assert_eq!(record.best_len, 10.0);
        assert_eq!(record.mean_len, 10.0);
        assert_eq!(record.std_len, 0.0);
    }
}
