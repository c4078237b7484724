//! Desk actor: an isolated Tokio task that owns the room table.
//!
//! The desk communicates with the outside world through an mpsc channel.
//! No shared mutable state, just message passing: whoever holds a
//! [`DeskHandle`] sends a command and waits for the reply.

use hotelforge_alloc::{Selection, select_rooms};
use hotelforge_building::{Building, OccupancyRange, OccupancyStats, RandomFill, Room};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};

use crate::{DeskConfig, DeskError};

/// Commands sent to the desk actor through its channel.
///
/// The `oneshot::Sender` in each variant is the reply channel: the caller
/// sends a command and waits for the response on it.
enum DeskCommand {
    /// List every room with its flag.
    ListRooms { reply: oneshot::Sender<Vec<Room>> },

    /// Current occupancy counts.
    Stats {
        reply: oneshot::Sender<OccupancyStats>,
    },

    /// Select and occupy `count` rooms.
    Book {
        count: usize,
        reply: oneshot::Sender<Result<Selection, DeskError>>,
    },

    /// Mark every room unoccupied.
    Reset {
        reply: oneshot::Sender<OccupancyStats>,
    },

    /// Reset, then occupy a random share of rooms.
    Randomize { reply: oneshot::Sender<RandomFill> },

    /// Stop the actor.
    Shutdown,
}

/// Handle to a running desk actor.
///
/// Cheap to clone; it's just an `mpsc::Sender` wrapper. Each HTTP handler
/// works through its own clone.
#[derive(Clone)]
pub struct DeskHandle {
    sender: mpsc::Sender<DeskCommand>,
}

impl DeskHandle {
    /// Sends a command built around a fresh reply channel and waits for the
    /// answer.
    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> DeskCommand,
    ) -> Result<T, DeskError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(build(reply_tx))
            .await
            .map_err(|_| DeskError::Unavailable)?;
        reply_rx.await.map_err(|_| DeskError::Unavailable)
    }

    /// Every room, floor-then-number order.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, DeskError> {
        self.request(|reply| DeskCommand::ListRooms { reply }).await
    }

    pub async fn stats(&self) -> Result<OccupancyStats, DeskError> {
        self.request(|reply| DeskCommand::Stats { reply }).await
    }

    /// Books `count` rooms and returns what was booked.
    ///
    /// No upper limit is applied here; per-request limits belong to the
    /// API layer.
    pub async fn book(&self, count: usize) -> Result<Selection, DeskError> {
        self.request(|reply| DeskCommand::Book { count, reply })
            .await?
    }

    /// Marks every room unoccupied and returns the resulting counts.
    pub async fn reset(&self) -> Result<OccupancyStats, DeskError> {
        self.request(|reply| DeskCommand::Reset { reply }).await
    }

    /// Replaces the current occupancy with a random one.
    pub async fn randomize(&self) -> Result<RandomFill, DeskError> {
        self.request(|reply| DeskCommand::Randomize { reply }).await
    }

    /// Tells the desk to shut down. Later requests fail with
    /// [`DeskError::Unavailable`].
    pub async fn shutdown(&self) -> Result<(), DeskError> {
        self.sender
            .send(DeskCommand::Shutdown)
            .await
            .map_err(|_| DeskError::Unavailable)
    }
}

/// The internal desk state. Runs inside a Tokio task.
struct DeskActor {
    building: Building,
    occupancy: OccupancyRange,
    rng: StdRng,
    receiver: mpsc::Receiver<DeskCommand>,
}

impl DeskActor {
    /// Runs the actor loop, processing commands until shutdown.
    async fn run(mut self) {
        tracing::info!(rooms = self.building.capacity(), "front desk open");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                DeskCommand::ListRooms { reply } => {
                    let _ = reply.send(self.building.list_all());
                }
                DeskCommand::Stats { reply } => {
                    let _ = reply.send(self.building.stats());
                }
                DeskCommand::Book { count, reply } => {
                    let result = self.handle_book(count);
                    let _ = reply.send(result);
                }
                DeskCommand::Reset { reply } => {
                    self.building.initialize();
                    tracing::info!(revision = self.building.revision(), "all bookings reset");
                    let _ = reply.send(self.building.stats());
                }
                DeskCommand::Randomize { reply } => {
                    let fill = self.building.random_fill(&mut self.rng, self.occupancy);
                    tracing::info!(
                        percent = fill.percent,
                        occupied = fill.occupied,
                        "random occupancy generated"
                    );
                    let _ = reply.send(fill);
                }
                DeskCommand::Shutdown => {
                    tracing::info!("front desk shutting down");
                    break;
                }
            }
        }

        tracing::info!("front desk closed");
    }

    /// Reads availability, selects, and occupies, all inside one command.
    fn handle_book(&mut self, count: usize) -> Result<Selection, DeskError> {
        let available = self.building.available();
        let selection = match select_rooms(&available, count) {
            Ok(selection) => selection,
            Err(e) => {
                tracing::debug!(count, error = %e, "booking rejected");
                return Err(e.into());
            }
        };

        let numbers = selection.numbers();
        if let Err(e) = self.building.mark_occupied(&numbers) {
            tracing::error!(error = %e, "selected room missing from the table");
            return Err(e.into());
        }

        tracing::info!(
            rooms = ?numbers,
            travel_time = selection.travel_time,
            remaining = available.len() - numbers.len(),
            "rooms booked"
        );
        Ok(selection)
    }
}

/// Spawns the desk actor and returns a handle to communicate with it.
///
/// Must be called from inside a Tokio runtime.
pub fn spawn_desk(config: DeskConfig) -> DeskHandle {
    let (tx, rx) = mpsc::channel(config.channel_size.max(1));

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let actor = DeskActor {
        building: Building::new(config.layout),
        occupancy: config.occupancy,
        rng,
        receiver: rx,
    };

    tokio::spawn(actor.run());

    DeskHandle { sender: tx }
}
