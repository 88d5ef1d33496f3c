//! # Bodega Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr, `RUST_LOG` controlled)
//! 2. Build the fixed demo catalog
//! 3. Run the menu loop over stdin/stdout until Exit or EOF
//!
//! The catalog, cart and order history live only in process memory; nothing
//! is persisted across runs.

mod app;
mod input;
mod render;

use std::io;

use anyhow::Result;
use bodega_core::Catalog;

use crate::app::App;

fn main() -> Result<()> {
    // Logs go to stderr so the menu on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    tracing::info!("bodega starting");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut app = App::new(Catalog::demo(), stdin, stdout);
    app.run()?;

    tracing::info!("bodega stopped");
    Ok(())
}
