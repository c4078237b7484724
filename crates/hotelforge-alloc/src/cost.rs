//! Travel-time cost of a set of rooms.

use hotelforge_building::Room;

/// Minutes to move one floor up or down.
pub const MINUTES_PER_FLOOR: u32 = 2;

/// Minutes to walk past one room along a corridor.
pub const MINUTES_PER_ROOM: u32 = 1;

/// Predicted travel time, in minutes, across `rooms`.
///
/// Only the lowest- and highest-numbered rooms matter; rooms in between and
/// input order have no effect. With fewer than two rooms the cost is 0.
///
/// On one floor the cost is the corridor distance between the two rooms.
/// Across floors the guest walks from the first room to the stairs at
/// position 1, changes floors, and walks out to the last room:
///
/// ```text
/// cost = |Δfloor| * 2 + (first_pos - 1) + (last_pos - 1)
/// ```
///
/// ```rust
/// use hotelforge_alloc::travel_time;
/// use hotelforge_building::{Floor, Room, RoomNumber};
///
/// let a = Room::vacant(Floor(1), RoomNumber(110));
/// let b = Room::vacant(Floor(2), RoomNumber(201));
/// assert_eq!(travel_time(&[a, b]), 11);
/// ```
pub fn travel_time(rooms: &[Room]) -> u32 {
    if rooms.len() < 2 {
        return 0;
    }
    let (Some(first), Some(last)) = (
        rooms.iter().min_by_key(|r| r.number),
        rooms.iter().max_by_key(|r| r.number),
    ) else {
        return 0;
    };

    let floor_travel = first.floor.distance(last.floor) * MINUTES_PER_FLOOR;

    let room_travel = if first.floor == last.floor {
        u32::from(last.number.0 - first.number.0) * MINUTES_PER_ROOM
    } else {
        let first_walk = u32::from(first.position()) - 1;
        let last_walk = u32::from(last.position()) - 1;
        (first_walk + last_walk) * MINUTES_PER_ROOM
    };

    floor_travel + room_travel
}

#[cfg(test)]
mod tests {
    use hotelforge_building::{Floor, RoomNumber};

    use super::*;

    fn room(number: u16) -> Room {
        Room::vacant(Floor((number / 100) as u8), RoomNumber(number))
    }

    fn rooms(numbers: &[u16]) -> Vec<Room> {
        numbers.iter().copied().map(room).collect()
    }

    #[test]
    fn test_empty_and_single_cost_nothing() {
        assert_eq!(travel_time(&[]), 0);
        assert_eq!(travel_time(&rooms(&[101])), 0);
        assert_eq!(travel_time(&rooms(&[1007])), 0);
    }

    #[test]
    fn test_same_floor() {
        assert_eq!(travel_time(&rooms(&[101, 103])), 2);
        assert_eq!(travel_time(&rooms(&[101, 110])), 9);
        assert_eq!(travel_time(&rooms(&[1001, 1007])), 6);
    }

    #[test]
    fn test_cross_floor() {
        // 110 → pos 10, 201 → pos 1: 2 + 9 + 0
        assert_eq!(travel_time(&rooms(&[110, 201])), 11);
        // 101 → 201: one floor, both at the stairs
        assert_eq!(travel_time(&rooms(&[101, 201])), 2);
        // 910 → 1001
        assert_eq!(travel_time(&rooms(&[910, 1001])), 11);
        // 105 → 1003: nine floors, 4 + 2 corridor
        assert_eq!(travel_time(&rooms(&[105, 1003])), 24);
    }

    #[test]
    fn test_intermediate_rooms_ignored() {
        assert_eq!(
            travel_time(&rooms(&[101, 103, 105])),
            travel_time(&rooms(&[101, 105]))
        );
        assert_eq!(
            travel_time(&rooms(&[110, 305, 201, 402])),
            travel_time(&rooms(&[110, 402]))
        );
    }

    #[test]
    fn test_permutation_invariant() {
        let base = rooms(&[204, 110, 309, 201]);
        let expected = travel_time(&base);
        let mut reversed = base.clone();
        reversed.reverse();
        assert_eq!(travel_time(&reversed), expected);
        let mut rotated = base.clone();
        rotated.rotate_left(2);
        assert_eq!(travel_time(&rotated), expected);
    }
}
