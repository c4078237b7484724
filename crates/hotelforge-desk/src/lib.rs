//! The front desk: single owner of the Hotelforge room table.
//!
//! The desk runs as an isolated Tokio task (actor model) that owns the
//! [`Building`](hotelforge_building::Building). Every request is one message
//! on its channel, so reading availability, selecting rooms and marking them
//! occupied happen as one step that no other request can interleave with.
//! Two guests booking at the same moment can never get the same room.
//!
//! # Key types
//!
//! - [`DeskHandle`]: send commands to the running desk
//! - [`DeskConfig`]: layout, random-fill range, channel size, RNG seed
//! - [`DeskError`]: what a desk request can fail with

mod config;
mod desk;
mod error;

pub use config::DeskConfig;
pub use desk::{DeskHandle, spawn_desk};
pub use error::DeskError;
