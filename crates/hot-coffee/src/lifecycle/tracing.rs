//! # Observability & Tracing
//!
//! [`setup_tracing`] installs two layers under one `EnvFilter`:
//!
//! - a compact console layer that hides the module prefix (`with_target(false)`); actor
//!   loops log `entity_type` instead,
//! - a JSON layer appending to `app.log` in the data directory through a non-blocking
//!   writer, when a log directory is given.
//!
//! ## Configuration
//!
//! ```bash
//! RUST_LOG=info hot-coffee            # default
//! RUST_LOG=debug hot-coffee           # full payloads and demand maps
//! RUST_LOG=hot_coffee=debug,tower_http=debug hot-coffee
//! ```
//!
//! ## What Gets Traced
//!
//! With `RUST_LOG=info`, closing an order looks like:
//!
//! ```text
//! INFO close_order{id=OrderId(1)}: Sending close to actor
//! INFO Transaction committed entity_type="InventoryItem" actions=2
//! INFO Action ok entity_type="Order" id=order1
//! ```
//!
//! A rejected close logs the typed error on both actors:
//!
//! ```text
//! WARN Transaction rejected entity_type="InventoryItem" error=Entity error: Insufficient stock for milk: required 400, available 150
//! WARN Action failed entity_type="Order" id=order1 error=...
//! ```

use crate::storage::LOG_FILE;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Keep the returned guard alive until exit so buffered file
/// logs are flushed.
pub fn setup_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console = fmt::layer()
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact();

    let (file, guard) = match log_dir {
        Some(dir) => {
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE));
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();
    guard
}
