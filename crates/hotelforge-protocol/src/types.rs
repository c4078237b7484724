//! Request and response bodies for the Hotelforge HTTP API.
//!
//! Field names follow the browser UI: a room is `{"floor", "number",
//! "booked"}`, a booking request is `{"numRooms"}` and a booking response is
//! `{"booked", "travelTime"}`.

use hotelforge_alloc::Selection;
use hotelforge_building::{Floor, OccupancyStats, RandomFill, Room, RoomNumber};
use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Most rooms a single booking request may ask for.
pub const DEFAULT_MAX_ROOMS_PER_BOOKING: usize = 5;

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// One room as clients see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    pub floor: Floor,
    pub number: RoomNumber,
    pub booked: bool,
}

impl From<Room> for RoomView {
    fn from(room: Room) -> Self {
        Self {
            floor: room.floor,
            number: room.number,
            booked: room.occupied,
        }
    }
}

/// Occupancy counts for the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
    pub revision: u64,
}

impl From<OccupancyStats> for StatsView {
    fn from(stats: OccupancyStats) -> Self {
        Self {
            total: stats.total,
            available: stats.available,
            booked: stats.occupied,
            revision: stats.revision,
        }
    }
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// Body of `POST /api/book`.
///
/// The count is signed so that `0` or a negative number reaches
/// [`validate`](Self::validate) and gets a readable error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub num_rooms: i64,
}

impl BookRequest {
    pub fn new(num_rooms: i64) -> Self {
        Self { num_rooms }
    }

    /// Checks the count against the per-booking limit and returns it as a
    /// `usize` ready for the allocation engine.
    ///
    /// # Errors
    /// [`ProtocolError::InvalidRequestCount`] if the count is below 1 or
    /// above `max`.
    pub fn validate(&self, max: usize) -> Result<usize, ProtocolError> {
        let invalid = ProtocolError::InvalidRequestCount {
            requested: self.num_rooms,
            max,
        };
        let count = usize::try_from(self.num_rooms).map_err(|_| invalid.clone())?;
        if count == 0 || count > max {
            return Err(invalid);
        }
        Ok(count)
    }
}

/// Successful response to `POST /api/book`.
///
/// Rooms are reported with `booked: true`, i.e. as they stand after the
/// booking was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub booked: Vec<RoomView>,
    pub travel_time: u32,
}

impl From<&Selection> for BookingReceipt {
    fn from(selection: &Selection) -> Self {
        Self {
            booked: selection
                .rooms
                .iter()
                .map(|room| RoomView {
                    booked: true,
                    ..RoomView::from(*room)
                })
                .collect(),
            travel_time: selection.travel_time,
        }
    }
}

// ---------------------------------------------------------------------------
// Plain messages
// ---------------------------------------------------------------------------

/// A human-readable confirmation, e.g. after a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn reset() -> Self {
        Self {
            message: "All bookings reset".to_string(),
        }
    }

    pub fn random_occupancy(fill: &RandomFill) -> Self {
        Self {
            message: format!("Random occupancy: {}%", fill.percent),
        }
    }
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
