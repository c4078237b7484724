//! Building model for Hotelforge.
//!
//! Owns the fixed room layout of a single hotel and the mutable occupancy
//! flag of every room in it.
//!
//! # Key types
//!
//! - [`Layout`]: how many rooms each floor holds (fixed after construction)
//! - [`Building`]: the authoritative occupancy table built from a layout
//! - [`Room`], [`RoomNumber`], [`Floor`]: identity and derived attributes
//! - [`OccupancyRange`]: bounds for the demo random-fill policy
//!
//! # Numbering
//!
//! A room's number is `floor * 100 + position`, so `110` is the tenth room
//! of floor 1 and `1003` is the third room of floor 10. Numbers are never
//! reused, and iteration over a [`Building`] always runs floor by floor in
//! ascending room-number order.

mod building;
mod error;
mod fill;
mod layout;
mod room;

pub use building::{Building, OccupancyStats};
pub use error::BuildingError;
pub use fill::{OccupancyRange, RandomFill};
pub use layout::Layout;
pub use room::{Floor, Room, RoomNumber};
