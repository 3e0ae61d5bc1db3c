//! Driver for the intrinsic definition compiler.
//!
//! The compiler crates never touch the file system. This crate supplies
//! what they leave out:
//! - [`SourceLoader`]: where definition text comes from
//! - [`Session`]: follows imports and merges files before resolution
//! - [`GenerationCache`]: builds each file's model, table and permutations
//!   once per run, shared across threads
//! - [`commands`]: the `idefc` CLI

pub mod commands;

mod cache;
mod loader;
mod session;

pub use cache::{Built, GenerationCache};
pub use loader::{normalize, FsLoader, MemoryLoader, SourceLoader};
pub use session::{Session, SourceFile};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`, once per process.
///
/// Nothing is installed when `RUST_LOG` is unset. With `IDEF_LOG_TREE`
/// set, spans render as an indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("IDEF_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
