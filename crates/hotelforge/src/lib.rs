//! # Hotelforge
//!
//! Room booking for a single hotel building, served over HTTP.
//!
//! A guest asks for up to five rooms; Hotelforge picks the available rooms
//! that minimize predicted walking time between them, preferring to keep
//! the group on one floor, and books them atomically.
//!
//! ## Layers
//!
//! ```text
//! HTTP (axum)  →  protocol (JSON bodies, validation)
//!              →  desk (actor owning the room table)
//!              →  alloc (selection + travel time) / building (occupancy)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotelforge::prelude::*;
//!
//! # async fn start() -> Result<(), HotelforgeError> {
//! let server = HotelforgeServer::builder()
//!     .bind("0.0.0.0:5000")
//!     .desk_config(DeskConfig::default())
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod handler;
mod logging;
mod server;

pub use error::HotelforgeError;
pub use handler::{AppState, router};
pub use logging::init_tracing;
pub use server::{HotelforgeServer, HotelforgeServerBuilder};

/// Everything needed to configure, run and talk to a server.
pub mod prelude {
    pub use crate::{
        AppState, HotelforgeError, HotelforgeServer, HotelforgeServerBuilder, init_tracing,
        router,
    };

    pub use hotelforge_alloc::{AllocError, Selection, select_rooms, travel_time};
    pub use hotelforge_building::{
        Building, BuildingError, Floor, Layout, OccupancyRange, OccupancyStats, RandomFill,
        Room, RoomNumber,
    };
    pub use hotelforge_desk::{DeskConfig, DeskError, DeskHandle, spawn_desk};
    pub use hotelforge_protocol::{
        BookRequest, BookingReceipt, DEFAULT_MAX_ROOMS_PER_BOOKING, ErrorBody, MessageBody,
        ProtocolError, RoomView, StatsView,
    };
}
