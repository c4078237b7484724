//! Error types for the building layer.

use crate::RoomNumber;

/// Errors that can occur while building or mutating the room table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildingError {
    /// A room number that is not part of the layout was passed to a
    /// mutation. Callers only ever pass numbers they read from the
    /// building, so this signals a programming error.
    #[error("room {0} is not part of the building layout")]
    UnknownRoom(RoomNumber),

    /// The layout description cannot produce unique room numbers.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// The random-fill percentage bounds are out of order or above 100.
    #[error("invalid occupancy range: {min}%..={max}%")]
    InvalidOccupancyRange { min: u8, max: u8 },
}
