//! Coordinate systems for chunk-addressed world space.

use crate::constants::{CHUNK_BITS, CHUNK_SIZE, MAX_Y, MIN_Y, Y_SPLIT};
use bytemuck::{Pod, Zeroable};
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Block position relative to its chunk column.
///
/// `x` and `z` are offsets within the 16x16 chunk footprint (0 to 15);
/// `y` is the absolute world height (-64 to 319).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct ChunkBlockPos {
    pub x: u8,
    pub z: u8,
    pub y: i16,
}

impl ChunkBlockPos {
    /// Create a new chunk-relative block position
    #[inline]
    pub const fn new(x: u8, y: i16, z: u8) -> Self {
        debug_assert!((x as usize) < CHUNK_SIZE);
        debug_assert!((z as usize) < CHUNK_SIZE);
        debug_assert!(y as i32 >= MIN_Y && y as i32 <= MAX_Y);
        Self { x, z, y }
    }

    /// True if this position falls in the upper vertical half of the world
    /// (y of 128 and above).
    #[inline]
    pub const fn is_upper_half(self) -> bool {
        self.y as i32 >= Y_SPLIT
    }

    /// Extract the chunk-relative position from a world-space block position.
    ///
    /// `x` and `z` are masked to the chunk footprint; `y` is carried through
    /// and must already be within the world height range.
    #[inline]
    pub const fn from_world(world: IVec3) -> Self {
        let mask = (CHUNK_SIZE - 1) as i32;
        Self::new(
            (world.x & mask) as u8,
            world.y as i16,
            (world.z & mask) as u8,
        )
    }

    /// Reconstruct the world-space block position within the given chunk column.
    #[inline]
    pub const fn to_world(self, chunk: ChunkColumnPos) -> IVec3 {
        IVec3::new(
            (chunk.x << CHUNK_BITS) | self.x as i32,
            self.y as i32,
            (chunk.z << CHUNK_BITS) | self.z as i32,
        )
    }
}

/// Chunk column address in chunk coordinates.
///
/// Columns span the full world height, so only the horizontal axes are
/// addressed.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct ChunkColumnPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkColumnPos {
    /// Create a new chunk column position
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk column containing the given world-space position.
    ///
    /// Arithmetic shift keeps negative coordinates in the correct column.
    #[inline]
    pub const fn from_world(world: IVec3) -> Self {
        Self::new(world.x >> CHUNK_BITS, world.z >> CHUNK_BITS)
    }

    /// World-space position of the column's lowest corner.
    #[inline]
    pub const fn to_world_min(self) -> IVec3 {
        IVec3::new(self.x << CHUNK_BITS, MIN_Y, self.z << CHUNK_BITS)
    }
}

impl From<IVec3> for ChunkBlockPos {
    fn from(world: IVec3) -> Self {
        Self::from_world(world)
    }
}

impl From<IVec3> for ChunkColumnPos {
    fn from(world: IVec3) -> Self {
        Self::from_world(world)
    }
}

/// Split a world-space block position into its chunk column and
/// chunk-relative parts.
#[inline]
pub const fn split_world(world: IVec3) -> (ChunkColumnPos, ChunkBlockPos) {
    (
        ChunkColumnPos::from_world(world),
        ChunkBlockPos::from_world(world),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_reconstruct_roundtrip() {
        let world = IVec3::new(100, 64, 200);
        let (chunk, local) = split_world(world);
        assert_eq!(local.to_world(chunk), world);
    }

    #[test]
    fn split_reconstruct_negative_coords() {
        let world = IVec3::new(-1, -64, -17);
        let (chunk, local) = split_world(world);
        assert_eq!(chunk, ChunkColumnPos::new(-1, -2));
        assert_eq!(local.x, 15);
        assert_eq!(local.z, 15);
        assert_eq!(local.to_world(chunk), world);
    }

    #[test]
    fn from_world_masks_horizontal_axes() {
        let local = ChunkBlockPos::from_world(IVec3::new(35, 70, 18));
        assert_eq!(local, ChunkBlockPos::new(3, 70, 2));
    }

    #[test]
    fn upper_half_boundary() {
        assert!(!ChunkBlockPos::new(0, 127, 0).is_upper_half());
        assert!(ChunkBlockPos::new(0, 128, 0).is_upper_half());
    }

    #[test]
    fn column_world_min_corner() {
        let min = ChunkColumnPos::new(-2, 3).to_world_min();
        assert_eq!(min, IVec3::new(-32, -64, 48));
    }
}
