use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Logical coordinate range, both axes.
pub const DATA_MIN: f64 = -10.0;
pub const DATA_MAX: f64 = 10.0;

/// A point in data space. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Snap both coordinates to the 2-decimal grid used on the wire.
    pub fn rounded(self) -> Self {
        Self {
            x: round2(self.x),
            y: round2(self.y),
        }
    }

    pub fn distance_to(&self, other: &DataPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uniform random points across the data range, snapped to the wire grid.
/// Seeded so a batch is reproducible.
pub fn random_points(count: usize, seed: u64) -> Vec<DataPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            DataPoint::new(
                rng.gen_range(DATA_MIN..=DATA_MAX),
                rng.gen_range(DATA_MIN..=DATA_MAX),
            )
            .rounded()
        })
        .collect()
}
