//! City model and random instance generation.

use crate::random::create_rng;
use rand::Rng;

/// Side length of the square on which random instances are generated.
const COORD_SPAN: f64 = 100.0;

/// A city on the Euclidean plane.
///
/// Cities are immutable once created; the identifier is the city's index
/// in its instance (`0..n`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city at the given coordinates.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Returns the city identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Generates `n` cities uniformly distributed on the `[0, 100]²` square.
///
/// The same seed always yields the same instance.
///
/// # Examples
///
/// ```
/// use u_antcolony::tsp::generate_cities;
///
/// let cities = generate_cities(10, 42);
/// assert_eq!(cities.len(), 10);
/// assert_eq!(cities, generate_cities(10, 42));
/// ```
pub fn generate_cities(n: usize, seed: u64) -> Vec<City> {
    let mut rng = create_rng(seed);
    (0..n)
        .map(|id| {
            let x = rng.random_range(0.0..COORD_SPAN);
            let y = rng.random_range(0.0..COORD_SPAN);
            City::new(id, x, y)
        })
        .collect()
}
