//! NodeNest CLI
//!
//! Thin command-line wrapper around the flat-to-tree converter.
//!
//! # Usage
//!
//! ```bash
//! nodenest <source> <destination>
//! ```
//!
//! Reads a JSON array of flat node records from `<source>` and writes the
//! nested tree to `<destination>.json`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use nodenest_core::services::convert_file;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        bail!("usage: nodenest <source> <destination>");
    }

    let source = PathBuf::from(&args[1]);
    let destination = PathBuf::from(&args[2]);

    let roots = convert_file(&source, &destination)
        .await
        .with_context(|| format!("converting '{}'", source.display()))?;

    let total: usize = roots.iter().map(|n| n.node_count()).sum();
    tracing::info!("converted {} nodes ({} root-level)", total, roots.len());

    Ok(())
}
