//! Error types for the allocation engine.

/// Errors returned by [`select_rooms`](crate::select_rooms).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// More rooms were requested than are currently available.
    /// `available` is the real count at the time of the request.
    #[error("only {available} rooms available, {requested} requested")]
    InsufficientRooms { requested: usize, available: usize },

    /// A request for zero rooms.
    #[error("at least one room must be requested")]
    EmptyRequest,
}
