//! The selection heuristic.

use std::collections::BTreeMap;

use hotelforge_building::{Floor, Room, RoomNumber};
use serde::Serialize;

use crate::{AllocError, travel_time};

/// Rooms chosen for one request, with their travel time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub rooms: Vec<Room>,
    pub travel_time: u32,
}

impl Selection {
    fn new(rooms: Vec<Room>) -> Self {
        let travel_time = travel_time(&rooms);
        Self { rooms, travel_time }
    }

    /// Numbers of the selected rooms, in selection order.
    pub fn numbers(&self) -> Vec<RoomNumber> {
        self.rooms.iter().map(|r| r.number).collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Picks `count` rooms out of `available`.
///
/// 1. Rooms are grouped by floor, each floor sorted by room number.
/// 2. The lowest floor with at least `count` rooms wins outright: the
///    cheapest contiguous run of `count` rooms on it is returned, the
///    earliest run on a tie. Higher floors are not looked at.
/// 3. Otherwise, for each floor in turn, rooms are taken greedily from that
///    floor upward until `count` are collected. The cheapest such fill is
///    returned, the lowest starting floor on a tie.
/// 4. Failing that, the first `count` rooms of `available` as given.
///
/// # Errors
/// - [`AllocError::EmptyRequest`] if `count` is 0.
/// - [`AllocError::InsufficientRooms`] if `count > available.len()`.
pub fn select_rooms(available: &[Room], count: usize) -> Result<Selection, AllocError> {
    if count == 0 {
        return Err(AllocError::EmptyRequest);
    }
    if count > available.len() {
        return Err(AllocError::InsufficientRooms {
            requested: count,
            available: available.len(),
        });
    }

    let floors = group_by_floor(available);

    if let Some(selection) = best_on_single_floor(&floors, count) {
        return Ok(selection);
    }
    if let Some(selection) = best_across_floors(&floors, count) {
        return Ok(selection);
    }

    tracing::warn!(count, "no floor combination found, taking rooms in given order");
    Ok(Selection::new(available[..count].to_vec()))
}

/// Floor → rooms on it, ascending by number. `BTreeMap` keeps the floors
/// themselves in ascending order.
fn group_by_floor(available: &[Room]) -> BTreeMap<Floor, Vec<Room>> {
    let mut floors: BTreeMap<Floor, Vec<Room>> = BTreeMap::new();
    for room in available {
        floors.entry(room.floor).or_default().push(*room);
    }
    for rooms in floors.values_mut() {
        rooms.sort_by_key(|r| r.number);
    }
    floors
}

fn best_on_single_floor(floors: &BTreeMap<Floor, Vec<Room>>, count: usize) -> Option<Selection> {
    let (floor, rooms) = floors.iter().find(|(_, rooms)| rooms.len() >= count)?;

    let mut best: Option<(u32, &[Room])> = None;
    for window in rooms.windows(count) {
        let cost = travel_time(window);
        match best {
            Some((best_cost, _)) if cost >= best_cost => {}
            _ => best = Some((cost, window)),
        }
    }

    let (cost, window) = best?;
    tracing::trace!(%floor, count, cost, "single-floor selection");
    Some(Selection {
        rooms: window.to_vec(),
        travel_time: cost,
    })
}

fn best_across_floors(floors: &BTreeMap<Floor, Vec<Room>>, count: usize) -> Option<Selection> {
    let floors: Vec<&Vec<Room>> = floors.values().collect();

    let mut best: Option<Selection> = None;
    for start in 0..floors.len() {
        let mut selected: Vec<Room> = Vec::with_capacity(count);
        for rooms in &floors[start..] {
            if selected.len() == count {
                break;
            }
            let take = (count - selected.len()).min(rooms.len());
            selected.extend_from_slice(&rooms[..take]);
        }
        if selected.len() < count {
            continue;
        }

        let candidate = Selection::new(selected);
        match &best {
            Some(current) if candidate.travel_time >= current.travel_time => {}
            _ => best = Some(candidate),
        }
    }

    if let Some(selection) = &best {
        tracing::trace!(count, cost = selection.travel_time, "cross-floor selection");
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(number: u16) -> Room {
        Room::vacant(Floor((number / 100) as u8), RoomNumber(number))
    }

    fn rooms(numbers: &[u16]) -> Vec<Room> {
        numbers.iter().copied().map(room).collect()
    }

    fn numbers(selection: &Selection) -> Vec<u16> {
        selection.rooms.iter().map(|r| r.number.0).collect()
    }

    #[test]
    fn test_zero_count_rejected() {
        assert_eq!(
            select_rooms(&rooms(&[101]), 0),
            Err(AllocError::EmptyRequest)
        );
    }

    #[test]
    fn test_insufficient_carries_real_availability() {
        let err = select_rooms(&rooms(&[101, 202]), 3).unwrap_err();
        assert_eq!(
            err,
            AllocError::InsufficientRooms {
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn test_group_by_floor_sorts_unordered_input() {
        let grouped = group_by_floor(&rooms(&[305, 102, 301, 101]));
        let keys: Vec<u8> = grouped.keys().map(|f| f.0).collect();
        assert_eq!(keys, vec![1, 3]);
        assert_eq!(
            grouped[&Floor(3)].iter().map(|r| r.number.0).collect::<Vec<_>>(),
            vec![301, 305]
        );
    }

    #[test]
    fn test_single_floor_tie_takes_first_window() {
        // windows: 101-102 (1), 102-104 (2), 104-105 (1)
        let s = select_rooms(&rooms(&[101, 102, 104, 105]), 2).unwrap();
        assert_eq!(numbers(&s), vec![101, 102]);
        assert_eq!(s.travel_time, 1);
    }

    #[test]
    fn test_single_floor_picks_cheapest_window() {
        // windows: 101-105 (4), 105-106 (1), 106-110 (4)
        let s = select_rooms(&rooms(&[101, 105, 106, 110]), 2).unwrap();
        assert_eq!(numbers(&s), vec![105, 106]);
        assert_eq!(s.travel_time, 1);
    }

    #[test]
    fn test_cross_floor_tie_takes_lowest_start() {
        // start 0: {101, 201} = 2, start 1: {201, 301} = 2
        let s = select_rooms(&rooms(&[101, 201, 301]), 2).unwrap();
        assert_eq!(numbers(&s), vec![101, 201]);
        assert_eq!(s.travel_time, 2);
    }

    #[test]
    fn test_selection_numbers() {
        let s = select_rooms(&rooms(&[403, 401, 402]), 2).unwrap();
        assert_eq!(
            s.numbers(),
            vec![RoomNumber(401), RoomNumber(402)]
        );
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
    }
}
