//! The occupancy table.
//!
//! # Concurrency note
//!
//! `Building` is NOT thread-safe by itself: it is a plain `BTreeMap` with a
//! `&mut self` mutation API. It is owned by a single task (the front desk)
//! and reached through a channel at a higher level, which is what makes a
//! read-select-write booking atomic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{BuildingError, Layout, Room, RoomNumber};

/// Counts derived from the current table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    /// Value of [`Building::revision`] when the stats were taken.
    pub revision: u64,
}

/// A hotel building: a fixed [`Layout`] plus the occupied flag of each room.
///
/// Rooms are keyed by [`RoomNumber`]. Since a number is
/// `floor * 100 + position`, key order is floor-then-number order, so every
/// listing this type returns is already in presentation order.
#[derive(Debug, Clone)]
pub struct Building {
    layout: Layout,
    rooms: BTreeMap<RoomNumber, Room>,
    /// Bumped by every mutation of the table.
    revision: u64,
}

impl Building {
    /// Creates a building from `layout` with every room unoccupied.
    pub fn new(layout: Layout) -> Self {
        let mut building = Self {
            layout,
            rooms: BTreeMap::new(),
            revision: 0,
        };
        building.initialize();
        building
    }

    /// The 97-room building of [`Layout::standard`].
    pub fn standard() -> Self {
        Self::new(Layout::standard())
    }

    /// Rebuilds every room from the layout, all unoccupied.
    ///
    /// Calling this twice leaves the same table as calling it once; only
    /// the revision moves.
    pub fn initialize(&mut self) {
        self.rooms = self
            .layout
            .rooms()
            .map(|(floor, number)| (number, Room::vacant(floor, number)))
            .collect();
        self.revision += 1;
        tracing::debug!(
            rooms = self.rooms.len(),
            revision = self.revision,
            "building initialized"
        );
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Monotonic mutation counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Total number of rooms.
    pub fn capacity(&self) -> usize {
        self.rooms.len()
    }

    /// Every room with its current flag, floor-then-number order.
    pub fn list_all(&self) -> Vec<Room> {
        self.rooms.values().copied().collect()
    }

    /// Rooms that are not occupied, floor-then-number order.
    pub fn available(&self) -> Vec<Room> {
        self.rooms
            .values()
            .filter(|room| room.is_available())
            .copied()
            .collect()
    }

    /// Looks up a single room.
    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&number)
    }

    /// Marks every room in `numbers` as occupied.
    ///
    /// All numbers are checked before the first write, so an unknown number
    /// leaves the table untouched. Marking an already occupied room is a
    /// no-op for that room.
    ///
    /// # Errors
    /// Returns [`BuildingError::UnknownRoom`] for the first number that is
    /// not part of the layout.
    pub fn mark_occupied(&mut self, numbers: &[RoomNumber]) -> Result<(), BuildingError> {
        if let Some(&unknown) = numbers.iter().find(|n| !self.rooms.contains_key(*n)) {
            return Err(BuildingError::UnknownRoom(unknown));
        }

        for number in numbers {
            if let Some(room) = self.rooms.get_mut(number) {
                room.occupied = true;
            }
        }
        self.revision += 1;
        Ok(())
    }

    pub fn stats(&self) -> OccupancyStats {
        let occupied = self.rooms.values().filter(|r| r.occupied).count();
        OccupancyStats {
            total: self.rooms.len(),
            available: self.rooms.len() - occupied,
            occupied,
            revision: self.revision,
        }
    }

    /// Mutable access for the random-fill policy in this crate.
    pub(crate) fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.values_mut()
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision += 1;
    }
}

impl Default for Building {
    fn default() -> Self {
        Self::standard()
    }
}
