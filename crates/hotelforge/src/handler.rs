//! HTTP routes and handlers.
//!
//! Every handler is a thin translation: wire body in, one desk command,
//! wire body out. All state lives behind the [`DeskHandle`], so handlers
//! running in parallel are serialized by the desk, not by a lock here.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use hotelforge_desk::DeskHandle;
use hotelforge_protocol::{
    BookRequest, BookingReceipt, DEFAULT_MAX_ROOMS_PER_BOOKING, MessageBody, ProtocolError,
    RoomView, StatsView,
};
use tower_http::cors::CorsLayer;

use crate::HotelforgeError;

/// State shared by all handlers. Cloned per request; the clone is just a
/// channel sender and a number.
#[derive(Clone)]
pub struct AppState {
    desk: DeskHandle,
    max_rooms_per_booking: usize,
}

impl AppState {
    pub fn new(desk: DeskHandle, max_rooms_per_booking: usize) -> Self {
        Self {
            desk,
            max_rooms_per_booking,
        }
    }

    pub fn desk(&self) -> &DeskHandle {
        &self.desk
    }
}

impl From<DeskHandle> for AppState {
    fn from(desk: DeskHandle) -> Self {
        Self::new(desk, DEFAULT_MAX_ROOMS_PER_BOOKING)
    }
}

/// Builds the `/api` router.
///
/// Exposed so the API can be mounted inside a larger axum application.
/// Responses allow any origin, so a UI served from another host can call
/// the API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/rooms", get(list_rooms))
        .route("/api/stats", get(stats))
        .route("/api/reset", post(reset))
        .route("/api/random", post(random_occupancy))
        .route("/api/random-occupancy", post(random_occupancy))
        .route("/api/book", post(book))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<RoomView>>, HotelforgeError> {
    let rooms = state.desk.list_rooms().await?;
    Ok(Json(rooms.into_iter().map(RoomView::from).collect()))
}

async fn stats(State(state): State<AppState>) -> Result<Json<StatsView>, HotelforgeError> {
    let stats = state.desk.stats().await?;
    Ok(Json(stats.into()))
}

async fn reset(State(state): State<AppState>) -> Result<Json<MessageBody>, HotelforgeError> {
    state.desk.reset().await?;
    Ok(Json(MessageBody::reset()))
}

async fn random_occupancy(
    State(state): State<AppState>,
) -> Result<Json<MessageBody>, HotelforgeError> {
    let fill = state.desk.randomize().await?;
    Ok(Json(MessageBody::random_occupancy(&fill)))
}

/// Validates the count before the desk (and the engine) ever see it.
async fn book(
    State(state): State<AppState>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookingReceipt>, HotelforgeError> {
    let Json(request) =
        payload.map_err(|rejection| ProtocolError::InvalidBody(rejection.body_text()))?;
    let count = request.validate(state.max_rooms_per_booking)?;

    let selection = state.desk.book(count).await?;
    Ok(Json(BookingReceipt::from(&selection)))
}
