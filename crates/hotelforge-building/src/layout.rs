//! Building layout: how many rooms each floor holds.

use serde::{Deserialize, Serialize};

use crate::{BuildingError, Floor, RoomNumber};

/// Highest position a floor can hold while numbers stay unique.
///
/// A 100th room would encode as `(floor + 1) * 100`, which reads back as a
/// room of the next floor.
pub const MAX_ROOMS_PER_FLOOR: u8 = 99;

/// Rooms per floor for floors 1–9 of the standard building.
const STANDARD_ROOMS_PER_FLOOR: u8 = 10;

/// Rooms on the top floor of the standard building.
const STANDARD_TOP_FLOOR_ROOMS: u8 = 7;

/// Number of floors in the standard building.
const STANDARD_FLOORS: usize = 10;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// The fixed shape of a building.
///
/// Entry `i` of `rooms_per_floor` is the room count of floor `i + 1`. The
/// layout is validated once at construction and never mutated afterwards.
///
/// ```rust
/// use hotelforge_building::Layout;
///
/// let layout = Layout::standard();
/// assert_eq!(layout.floor_count(), 10);
/// assert_eq!(layout.capacity(), 97);
/// ```
///
/// Deserializing goes through [`Layout::new`], so a decoded layout never
/// produces colliding room numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct Layout {
    rooms_per_floor: Vec<u8>,
}

#[derive(Deserialize)]
struct RawLayout {
    rooms_per_floor: Vec<u8>,
}

impl TryFrom<RawLayout> for Layout {
    type Error = BuildingError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Self::new(raw.rooms_per_floor)
    }
}

impl Layout {
    /// Creates a layout from per-floor room counts, bottom floor first.
    ///
    /// # Errors
    /// Returns [`BuildingError::InvalidLayout`] if there are no floors, more
    /// than 255 floors, or a floor holds 0 or more than
    /// [`MAX_ROOMS_PER_FLOOR`] rooms.
    pub fn new(rooms_per_floor: Vec<u8>) -> Result<Self, BuildingError> {
        if rooms_per_floor.is_empty() {
            return Err(BuildingError::InvalidLayout(
                "a building needs at least one floor".into(),
            ));
        }
        if rooms_per_floor.len() > usize::from(u8::MAX) {
            return Err(BuildingError::InvalidLayout(format!(
                "{} floors exceed the limit of {}",
                rooms_per_floor.len(),
                u8::MAX
            )));
        }
        for (idx, &count) in rooms_per_floor.iter().enumerate() {
            if count == 0 || count > MAX_ROOMS_PER_FLOOR {
                return Err(BuildingError::InvalidLayout(format!(
                    "floor {} has {} rooms, expected 1..={}",
                    idx + 1,
                    count,
                    MAX_ROOMS_PER_FLOOR
                )));
            }
        }
        Ok(Self { rooms_per_floor })
    }

    /// The hotel this crate was built for: floors 1–9 with ten rooms each
    /// and a top floor 10 with seven rooms, 97 rooms in total.
    pub fn standard() -> Self {
        let mut rooms_per_floor = vec![STANDARD_ROOMS_PER_FLOOR; STANDARD_FLOORS - 1];
        rooms_per_floor.push(STANDARD_TOP_FLOOR_ROOMS);
        Self { rooms_per_floor }
    }

    pub fn floor_count(&self) -> usize {
        self.rooms_per_floor.len()
    }

    /// Total number of rooms across all floors.
    pub fn capacity(&self) -> usize {
        self.rooms_per_floor.iter().map(|&n| usize::from(n)).sum()
    }

    /// Room count of a floor, or `None` if the floor doesn't exist.
    pub fn rooms_on(&self, floor: Floor) -> Option<u8> {
        let idx = usize::from(floor.0).checked_sub(1)?;
        self.rooms_per_floor.get(idx).copied()
    }

    /// Returns `true` if `number` names a room of this layout.
    pub fn contains(&self, number: RoomNumber) -> bool {
        let floor = Floor((number.0 / 100).min(u16::from(u8::MAX)) as u8);
        let position = number.0 % 100;
        match self.rooms_on(floor) {
            Some(count) => position >= 1 && position <= u16::from(count),
            None => false,
        }
    }

    /// Every `(floor, number)` pair, floor by floor, ascending.
    pub fn rooms(&self) -> impl Iterator<Item = (Floor, RoomNumber)> + '_ {
        self.rooms_per_floor
            .iter()
            .enumerate()
            .flat_map(|(idx, &count)| {
                let floor = Floor(idx as u8 + 1);
                (1..=count).map(move |pos| (floor, RoomNumber::new(floor, pos)))
            })
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}
