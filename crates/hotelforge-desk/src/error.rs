//! Error types for the front desk.

use hotelforge_alloc::AllocError;
use hotelforge_building::BuildingError;

/// Errors that can occur during desk operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeskError {
    /// The allocation engine refused the request (e.g. not enough rooms).
    #[error(transparent)]
    Alloc(#[from] AllocError),

    /// The occupancy table rejected a write. Only reachable through a bug:
    /// the desk only writes numbers it just read from the table.
    #[error(transparent)]
    Building(#[from] BuildingError),

    /// The desk's command channel is closed.
    #[error("front desk is unavailable")]
    Unavailable,
}
