//! Serve command
//!
//! Runs the insights API over an in-memory record store. A database-backed
//! store plugs in through the same `RecordStore` trait; `--sample` seeds
//! demo records so the dashboards render without one.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Args;

use cropflow_analytics::{Crop, Order};
use cropflow_api::{build_router, AppState, MemoryStore};
use cropflow_config::Config;

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Seed the in-memory store with demo records
    #[arg(long)]
    pub sample: bool,
}

/// Run the server
pub async fn run(args: ServeArgs, config: Config) -> Result<()> {
    let store = if args.sample {
        sample_store()
    } else {
        MemoryStore::new()
    };

    let state = AppState::new(Arc::new(store));
    let app = build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, sample = args.sample, "cropflow listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Demo records spread over the last two months
fn sample_store() -> MemoryStore {
    let now = Utc::now();
    let orders = (0..60)
        .map(|i| Order {
            id: i + 1,
            completed_at: Some(now - Duration::days((i % 45) as i64)),
            total: 12.5 + (i % 7) as f64 * 4.0,
            items: 1 + (i % 3) as u32,
        })
        .collect();

    let names = ["basil", "mint", "kale", "chard", "tomato"];
    let crops = (0..25)
        .map(|i| {
            let seeded = now - Duration::days(20 + (i % 30) as i64);
            Crop {
                id: i + 1,
                name: names[(i % names.len() as u64) as usize].to_string(),
                quantity: 6 + (i % 10) as u32,
                seeded_at: Some(seeded),
                harvested_at: (i % 3 != 0).then(|| seeded + Duration::days(14)),
            }
        })
        .collect();

    MemoryStore::new().with_orders(orders).with_crops(crops)
}
