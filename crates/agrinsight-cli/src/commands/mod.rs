//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Selection commands (analyze, export)
//! - `ask` - Canned free-text queries
//! - `browse` - State and crop listings
//! - `core` - Shared utilities (settings resolution, dataset loading, formatting)
//! - `strings` - String table inspection

pub mod analyze;
pub mod ask;
pub mod browse;
pub mod core;
pub mod strings;

// Re-export command functions for main.rs
pub use analyze::*;
pub use ask::*;
pub use browse::*;
pub use core::*;
pub use strings::*;
