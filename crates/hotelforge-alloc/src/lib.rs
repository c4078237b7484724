//! Room allocation engine for Hotelforge.
//!
//! Given a snapshot of available rooms and a requested count, pick the rooms
//! a guest will book and the predicted travel time between them.
//!
//! - [`travel_time`]: the cost of a set of rooms, in minutes
//! - [`select_rooms`]: the selection heuristic
//! - [`Selection`]: the chosen rooms plus their cost
//!
//! Both functions are pure: they never touch a
//! [`Building`](hotelforge_building::Building). Applying a selection is the
//! caller's job.
//!
//! # The heuristic is not a global optimum
//!
//! Selection prefers the *lowest* floor that can hold the whole group and
//! only searches that floor, even when a higher floor would be cheaper.
//! When no floor can hold the group it walks upward from each floor in
//! turn, filling greedily. Downstream callers rely on these exact outcomes.

mod cost;
mod error;
mod select;

pub use cost::{MINUTES_PER_FLOOR, MINUTES_PER_ROOM, travel_time};
pub use error::AllocError;
pub use select::{Selection, select_rooms};
