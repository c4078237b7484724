//! Room identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A room number such as `101` or `1007`.
///
/// Newtype over `u16` so a room number can't be confused with a count or a
/// floor. Serialized as the bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(pub u16);

impl RoomNumber {
    /// Builds the number of the room at `position` (1-based) on `floor`.
    pub fn new(floor: Floor, position: u8) -> Self {
        Self(u16::from(floor.0) * 100 + u16::from(position))
    }

    /// Position-on-floor derived from the number alone.
    ///
    /// `number mod 100`, with a remainder of `0` read as position 10.
    pub fn position(self) -> u8 {
        match self.0 % 100 {
            0 => 10,
            p => p as u8,
        }
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A floor (level) of the building, starting at 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Floor(pub u8);

impl Floor {
    /// Number of floors between `self` and `other`, in either direction.
    pub fn distance(self, other: Floor) -> u32 {
        u32::from(self.0.abs_diff(other.0))
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A single room and its occupancy flag.
///
/// Floor and number never change once the room is created; only `occupied`
/// mutates, and only through [`Building`](crate::Building).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    pub floor: Floor,
    pub occupied: bool,
}

impl Room {
    /// Creates an unoccupied room.
    pub fn vacant(floor: Floor, number: RoomNumber) -> Self {
        Self {
            number,
            floor,
            occupied: false,
        }
    }

    /// Position-on-floor, see [`RoomNumber::position`].
    pub fn position(&self) -> u8 {
        self.number.position()
    }

    pub fn is_available(&self) -> bool {
        !self.occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_number_from_floor_and_position() {
        assert_eq!(RoomNumber::new(Floor(1), 1), RoomNumber(101));
        assert_eq!(RoomNumber::new(Floor(1), 10), RoomNumber(110));
        assert_eq!(RoomNumber::new(Floor(10), 7), RoomNumber(1007));
    }

    #[test]
    fn test_position_of_tenth_room() {
        assert_eq!(RoomNumber(110).position(), 10);
        assert_eq!(RoomNumber(910).position(), 10);
    }

    #[test]
    fn test_position_zero_remainder_reads_as_ten() {
        assert_eq!(RoomNumber(200).position(), 10);
    }

    #[test]
    fn test_position_top_floor() {
        assert_eq!(RoomNumber(1001).position(), 1);
        assert_eq!(RoomNumber(1007).position(), 7);
    }

    #[test]
    fn test_floor_distance_is_symmetric() {
        assert_eq!(Floor(3).distance(Floor(7)), 4);
        assert_eq!(Floor(7).distance(Floor(3)), 4);
        assert_eq!(Floor(5).distance(Floor(5)), 0);
    }

    #[test]
    fn test_room_number_serializes_as_bare_integer() {
        let json = serde_json::to_string(&RoomNumber(305)).unwrap();
        assert_eq!(json, "305");
    }

    #[test]
    fn test_display() {
        assert_eq!(RoomNumber(1004).to_string(), "1004");
        assert_eq!(Floor(2).to_string(), "F-2");
    }

    #[test]
    fn test_vacant_room_is_available() {
        let room = Room::vacant(Floor(4), RoomNumber(402));
        assert!(room.is_available());
        assert_eq!(room.position(), 2);
    }
}
