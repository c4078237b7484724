//! Random occupancy for demos.
//!
//! This is a separate mutation policy from allocation: it never consults
//! the travel-time engine, it just occupies a uniformly random set of
//! distinct rooms.

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::{Building, BuildingError};

/// Inclusive percentage bounds for [`Building::random_fill`].
///
/// Deserializing goes through [`OccupancyRange::new`], so a decoded range
/// is always drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOccupancyRange")]
pub struct OccupancyRange {
    min_percent: u8,
    max_percent: u8,
}

impl OccupancyRange {
    /// # Errors
    /// Returns [`BuildingError::InvalidOccupancyRange`] if `min > max` or
    /// `max > 100`.
    pub fn new(min_percent: u8, max_percent: u8) -> Result<Self, BuildingError> {
        if min_percent > max_percent || max_percent > 100 {
            return Err(BuildingError::InvalidOccupancyRange {
                min: min_percent,
                max: max_percent,
            });
        }
        Ok(Self {
            min_percent,
            max_percent,
        })
    }

    pub fn min_percent(&self) -> u8 {
        self.min_percent
    }

    pub fn max_percent(&self) -> u8 {
        self.max_percent
    }
}

#[derive(Deserialize)]
struct RawOccupancyRange {
    min_percent: u8,
    max_percent: u8,
}

impl TryFrom<RawOccupancyRange> for OccupancyRange {
    type Error = BuildingError;

    fn try_from(raw: RawOccupancyRange) -> Result<Self, Self::Error> {
        Self::new(raw.min_percent, raw.max_percent)
    }
}

/// 30 to 70 percent.
impl Default for OccupancyRange {
    fn default() -> Self {
        Self {
            min_percent: 30,
            max_percent: 70,
        }
    }
}

/// Outcome of a random fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomFill {
    /// The percentage drawn from the range.
    pub percent: u8,
    /// How many rooms ended up occupied.
    pub occupied: usize,
}

impl Building {
    /// Resets the table, then occupies a random share of it.
    ///
    /// Draws `percent` uniformly from `range`, computes
    /// `floor(capacity * percent / 100)` and occupies that many distinct
    /// rooms chosen uniformly at random.
    pub fn random_fill<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        range: OccupancyRange,
    ) -> RandomFill {
        self.initialize();

        let percent = rng.random_range(range.min_percent..=range.max_percent);
        let total = self.capacity();
        let count = total * usize::from(percent) / 100;

        let mut picked = vec![false; total];
        for idx in index::sample(rng, total, count) {
            picked[idx] = true;
        }
        for (room, chosen) in self.rooms_mut().zip(picked) {
            room.occupied = chosen;
        }
        self.bump_revision();

        tracing::debug!(percent, occupied = count, "random occupancy applied");
        RandomFill {
            percent,
            occupied: count,
        }
    }
}
