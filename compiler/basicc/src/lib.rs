//! BASIC driver: the `basic` binary's commands as a library.
//!
//! # Environment
//!
//! - `RUST_LOG=basic_eval=debug`: enable tracing output (calls, scripts,
//!   depth limit). Nothing is installed when `RUST_LOG` is unset.
//! - `BASIC_LOG_TREE=1`: render spans as an indented tree instead of flat
//!   lines.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
