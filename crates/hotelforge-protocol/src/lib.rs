//! Wire protocol for the Hotelforge HTTP API.
//!
//! This crate defines the JSON bodies that clients and the server exchange:
//!
//! - **Types** ([`RoomView`], [`BookRequest`], [`BookingReceipt`], etc.):
//!   request and response bodies, with the field names the browser UI uses.
//! - **Errors** ([`ProtocolError`]): bodies that fail to parse, or parse
//!   but break an API rule, such as asking for more rooms than one booking
//!   may hold.
//!
//! # Architecture
//!
//! The protocol layer sits between HTTP (handled by the server crate) and
//! the front desk. It doesn't know about sockets or the occupancy table;
//! it only converts domain values to and from wire shapes.
//!
//! ```text
//! HTTP (JSON) → Protocol (BookRequest) → Desk (Selection) → Protocol (BookingReceipt)
//! ```

// ---------------------------------------------------------------------------
// Module declarations
// ---------------------------------------------------------------------------

mod error;
mod types;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use error::ProtocolError;
pub use types::{
    BookRequest, BookingReceipt, DEFAULT_MAX_ROOMS_PER_BOOKING, ErrorBody, MessageBody,
    RoomView, StatsView,
};
