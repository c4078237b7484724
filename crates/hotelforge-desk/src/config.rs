//! Front desk configuration.

use hotelforge_building::{Layout, OccupancyRange};

/// Default command channel size for the desk actor.
const DEFAULT_CHANNEL_SIZE: usize = 64;

/// Configuration for a front desk instance.
///
/// ```rust
/// use hotelforge_desk::DeskConfig;
///
/// let config = DeskConfig {
///     seed: Some(7),
///     ..DeskConfig::default()
/// };
/// assert_eq!(config.layout.capacity(), 97);
/// ```
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Shape of the building the desk manages.
    pub layout: Layout,

    /// Percentage bounds for random occupancy.
    pub occupancy: OccupancyRange,

    /// Bound of the command channel. Senders wait when it is full.
    pub channel_size: usize,

    /// Seed for the random-fill RNG. `None` seeds from the OS, so every
    /// process run produces different demo occupancy.
    pub seed: Option<u64>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            layout: Layout::standard(),
            occupancy: OccupancyRange::default(),
            channel_size: DEFAULT_CHANNEL_SIZE,
            seed: None,
        }
    }
}
