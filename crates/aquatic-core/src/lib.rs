//! Core types for the Aquatic common library.
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Chunk-relative and chunk-column coordinates
//! - Lazily-resolved world locations
//! - Balance formatting and parsing
//! - Common error types

pub mod balance;
pub mod coords;
pub mod error;
pub mod location;

pub use coords::{split_world, ChunkBlockPos, ChunkColumnPos};
pub use error::{Error, Result};
pub use location::LazyLocation;

/// World-layout constants
pub mod constants {
    /// Size of a chunk footprint in blocks per horizontal axis
    pub const CHUNK_SIZE: usize = 16;
    /// Bits needed to represent a horizontal position within a chunk (4 bits for 0-15)
    pub const CHUNK_BITS: u32 = 4;
    /// Lowest world Y coordinate
    pub const MIN_Y: i32 = -64;
    /// Highest world Y coordinate
    pub const MAX_Y: i32 = 319;
    /// Offset added to Y so the full height range packs as 0-383
    pub const Y_OFFSET: i32 = 64;
    /// Y coordinate where the upper vertical half begins
    pub const Y_SPLIT: i32 = 128;
    /// Lowest Y of the lower vertical half (-64 to 127, 192 values)
    pub const LOWER_HALF_MIN_Y: i32 = MIN_Y;
    /// Lowest Y of the upper vertical half (128 to 319, 192 values)
    pub const UPPER_HALF_MIN_Y: i32 = Y_SPLIT;
}
