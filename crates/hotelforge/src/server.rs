//! `HotelforgeServer` builder and server loop.
//!
//! This is the entry point for running the booking API. It ties together
//! all the layers: HTTP → protocol → desk → engine/building.

use hotelforge_desk::{DeskConfig, DeskHandle, spawn_desk};
use hotelforge_protocol::DEFAULT_MAX_ROOMS_PER_BOOKING;
use tokio::net::TcpListener;

use crate::HotelforgeError;
use crate::handler::{AppState, router};

/// Builder for configuring and starting a Hotelforge server.
///
/// # Example
///
/// ```rust,no_run
/// use hotelforge::prelude::*;
///
/// # async fn start() -> Result<(), HotelforgeError> {
/// let server = HotelforgeServer::builder()
///     .bind("0.0.0.0:5000")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct HotelforgeServerBuilder {
    bind_addr: String,
    desk_config: DeskConfig,
    max_rooms_per_booking: usize,
}

impl HotelforgeServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            desk_config: DeskConfig::default(),
            max_rooms_per_booking: DEFAULT_MAX_ROOMS_PER_BOOKING,
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the front desk configuration (layout, random fill, seed).
    pub fn desk_config(mut self, config: DeskConfig) -> Self {
        self.desk_config = config;
        self
    }

    /// Sets the most rooms one booking request may ask for.
    pub fn max_rooms_per_booking(mut self, max: usize) -> Self {
        self.max_rooms_per_booking = max;
        self
    }

    /// Binds the listener and opens the front desk.
    pub async fn build(self) -> Result<HotelforgeServer, HotelforgeError> {
        let listener = TcpListener::bind(&self.bind_addr)
            .await
            .map_err(|source| HotelforgeError::Bind {
                addr: self.bind_addr.clone(),
                source,
            })?;
        tracing::info!(addr = %self.bind_addr, "HTTP listener bound");

        let desk = spawn_desk(self.desk_config);
        let state = AppState::new(desk, self.max_rooms_per_booking);

        Ok(HotelforgeServer { listener, state })
    }
}

impl Default for HotelforgeServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Hotelforge server.
///
/// Call [`run()`](Self::run) to start serving requests.
pub struct HotelforgeServer {
    listener: TcpListener,
    state: AppState,
}

impl HotelforgeServer {
    /// Creates a new builder.
    pub fn builder() -> HotelforgeServerBuilder {
        HotelforgeServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Handle to the server's front desk, for in-process callers.
    pub fn desk(&self) -> DeskHandle {
        self.state.desk().clone()
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), HotelforgeError> {
        self.run_until(std::future::pending()).await
    }

    /// Serves requests until `shutdown` resolves, then stops accepting
    /// connections, lets in-flight requests finish and closes the desk.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), HotelforgeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Hotelforge server running");

        let desk = self.state.desk().clone();
        axum::serve(self.listener, router(self.state))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(HotelforgeError::Serve)?;

        // Already closed only if someone else shut it down first.
        let _ = desk.shutdown().await;
        tracing::info!("Hotelforge server stopped");
        Ok(())
    }
}
