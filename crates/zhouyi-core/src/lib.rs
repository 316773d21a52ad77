//! Core types for Zhouyi: coin casting, hexagrams, and the received catalog.
//!
//! This crate covers the whole divination pipeline short of persistence. You
//! can drive it end to end through [`CastingService`], or use the pieces
//! directly: cast lines with any [`rand::Rng`], derive signatures, resolve
//! changing lines, and look readings up in a [`Catalog`].

/// The 64-entry hexagram catalog and its lookups.
pub mod catalog;
/// Three-coin casting of lines and whole hexagrams.
pub mod coins;
/// Error types used throughout the crate.
pub mod error;
/// Hexagrams and their six-character signatures.
pub mod hexagram;
/// Lines, their polarities, and their coin values.
pub mod line;
/// Resolution of changing lines into the resulting hexagram.
pub mod resolve;
/// The casting service tying rng, catalog, and resolution together.
pub mod service;

/// Re-export catalog types.
pub use catalog::{CATALOG_SIZE, Catalog, CatalogEntry};
/// Re-export casting functions.
pub use coins::{cast_hexagram, cast_line};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export hexagram types.
pub use hexagram::{Hexagram, Signature};
/// Re-export line types.
pub use line::{Line, LineValue, Polarity};
/// Re-export resolution types.
pub use resolve::{Resolution, resolve};
/// Re-export service types.
pub use service::{CastingConfig, CastingResult, CastingService, HexagramReading};
