use hotelforge::prelude::*;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Address used when `HOTELFORGE_BIND` is unset.
const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Reads the desk configuration from the environment.
///
/// `HOTELFORGE_SEED` makes the "random occupancy" button reproducible.
fn desk_config_from_env() -> Result<DeskConfig, Box<dyn std::error::Error>> {
    let seed = match std::env::var("HOTELFORGE_SEED") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| format!("HOTELFORGE_SEED must be an integer: {e}"))?,
        ),
        Err(_) => None,
    };
    Ok(DeskConfig {
        seed,
        ..DeskConfig::default()
    })
}

// ---------------------------------------------------------------------------
// Server bootstrap
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("info");

    let bind = std::env::var("HOTELFORGE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let desk_config = desk_config_from_env()?;
    tracing::info!(%bind, seed = ?desk_config.seed, "starting front desk");

    let server = HotelforgeServer::builder()
        .bind(&bind)
        .desk_config(desk_config)
        .build()
        .await?;

    server
        .run_until(async {
            if tokio::signal::ctrl_c().await.is_err() {
                tracing::warn!("ctrl-c handler unavailable, running until killed");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutdown requested");
        })
        .await?;
    Ok(())
}
