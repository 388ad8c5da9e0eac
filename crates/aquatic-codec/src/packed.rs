//! Packed encodings of chunk-relative block positions.
//!
//! The 32-bit form uses 17 bits, laid out LSB-first as
//! `x[0:4) | z[4:8) | (y + 64)[8:17)`. The 16-bit form drops the vertical
//! field to 8 bits by splitting the height range into two 192-value halves
//! and carrying the half selector out of band. The bitstream form packs the
//! 17-bit layout densely, with no alignment between entries.

use aquatic_core::constants::{LOWER_HALF_MIN_Y, MAX_Y, MIN_Y, UPPER_HALF_MIN_Y, Y_OFFSET};
use aquatic_core::coords::ChunkBlockPos;
use aquatic_core::error::{Error, Result};

use crate::bits::{read_bits, write_bits};

/// Bits per position in the 32-bit and bitstream forms.
pub const POSITION_BITS: u32 = 17;

fn validate(pos: ChunkBlockPos) -> Result<()> {
    if pos.x > 15 {
        return Err(Error::CoordOutOfRange {
            axis: "x",
            value: i32::from(pos.x),
            min: 0,
            max: 15,
        });
    }
    if pos.z > 15 {
        return Err(Error::CoordOutOfRange {
            axis: "z",
            value: i32::from(pos.z),
            min: 0,
            max: 15,
        });
    }
    let y = i32::from(pos.y);
    if !(MIN_Y..=MAX_Y).contains(&y) {
        return Err(Error::CoordOutOfRange {
            axis: "y",
            value: y,
            min: MIN_Y,
            max: MAX_Y,
        });
    }
    Ok(())
}

/// Pack a position into a 32-bit integer using the low 17 bits.
///
/// Fails with [`Error::CoordOutOfRange`] if any coordinate is outside its
/// declared range; nothing partial is returned.
pub fn pack(pos: ChunkBlockPos) -> Result<u32> {
    validate(pos)?;
    // y + 64 is 0-383 after validation, 9 bits.
    let y_offset = (i32::from(pos.y) + Y_OFFSET) as u32;
    Ok(u32::from(pos.x) | (u32::from(pos.z) << 4) | (y_offset << 8))
}

/// Unpack a 32-bit packed position.
///
/// Never fails: fields are extracted by masking, and bits above bit 16 are
/// ignored. Input that was not produced by [`pack`] decodes to whatever
/// position its low bits spell; the format carries no validity marker. Use
/// [`unpack_checked`] to detect such input instead.
#[must_use]
pub fn unpack(packed: u32) -> ChunkBlockPos {
    let y_offset = ((packed >> 8) & 0x1FF) as i32;
    ChunkBlockPos {
        x: (packed & 0xF) as u8,
        z: ((packed >> 4) & 0xF) as u8,
        y: (y_offset - Y_OFFSET) as i16,
    }
}

/// Unpack a 32-bit packed position, rejecting bit patterns [`pack`] cannot
/// produce.
///
/// Any set bit above bit 16, or a vertical field outside the world height
/// range, is reported as a range error on `y`.
pub fn unpack_checked(packed: u32) -> Result<ChunkBlockPos> {
    let y = (packed >> 8) as i32 - Y_OFFSET;
    if !(MIN_Y..=MAX_Y).contains(&y) {
        return Err(Error::CoordOutOfRange {
            axis: "y",
            value: y,
            min: MIN_Y,
            max: MAX_Y,
        });
    }
    Ok(ChunkBlockPos::new(
        (packed & 0xF) as u8,
        y as i16,
        ((packed >> 4) & 0xF) as u8,
    ))
}

/// Pack a position into 16 bits plus an out-of-band vertical-half flag.
///
/// The vertical field stores the offset within the selected half (0-191),
/// which fits in 8 bits; the returned bool records which half and must be
/// carried alongside the packed value, since it is not recoverable from the
/// 16 bits alone.
pub fn pack_half(pos: ChunkBlockPos) -> Result<(bool, u16)> {
    validate(pos)?;

    let upper = pos.is_upper_half();
    let y = i32::from(pos.y);
    let y_offset = if upper {
        y - UPPER_HALF_MIN_Y
    } else {
        y - LOWER_HALF_MIN_Y
    };
    // Each half is 192 values, so this cannot fire for validated input.
    if !(0..=255).contains(&y_offset) {
        return Err(Error::CoordOutOfRange {
            axis: "y half offset",
            value: y_offset,
            min: 0,
            max: 255,
        });
    }

    let packed = u16::from(pos.x) | (u16::from(pos.z) << 4) | ((y_offset as u16) << 8);
    Ok((upper, packed))
}

/// Unpack a 16-bit packed position given its vertical-half flag.
///
/// Masking decode, like [`unpack`]: never fails, and trusts the caller to
/// supply the flag the position was packed with.
#[must_use]
pub fn unpack_half(packed: u16, is_upper_half: bool) -> ChunkBlockPos {
    let y_offset = i32::from(packed >> 8);
    let base = if is_upper_half {
        UPPER_HALF_MIN_Y
    } else {
        LOWER_HALF_MIN_Y
    };
    ChunkBlockPos {
        x: (packed & 0xF) as u8,
        z: ((packed >> 4) & 0xF) as u8,
        y: (base + y_offset) as i16,
    }
}

/// Pack a sequence of positions into a dense bitstream, 17 bits each.
///
/// Position `i` occupies bits `[17i, 17i + 17)`; input order is how
/// [`unpack_multiple`] locates entries. The buffer is
/// `ceil(17 * len / 8)` bytes, with unused trailing bits zero. The first
/// out-of-range position aborts the whole call.
pub fn pack_multiple(positions: &[ChunkBlockPos]) -> Result<Vec<u8>> {
    let total_bits = positions.len() * POSITION_BITS as usize;
    let mut bytes = vec![0u8; total_bits.div_ceil(8)];

    let mut bit_offset = 0;
    for &pos in positions {
        write_bits(&mut bytes, bit_offset, pack(pos)?, POSITION_BITS);
        bit_offset += POSITION_BITS as usize;
    }

    Ok(bytes)
}

/// Unpack `count` positions from a bitstream produced by [`pack_multiple`].
///
/// The stream embeds no length, so the caller must supply the count it was
/// packed with: a short count returns truncated data, and a long count
/// panics on indexing past the buffer.
#[must_use]
pub fn unpack_multiple(bytes: &[u8], count: usize) -> Vec<ChunkBlockPos> {
    let mut positions = Vec::with_capacity(count);
    for i in 0..count {
        let packed = read_bits(bytes, i * POSITION_BITS as usize, POSITION_BITS);
        positions.push(unpack(packed));
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquatic_core::constants::{MAX_Y, MIN_Y};

    #[test]
    fn pack_concrete_vector() {
        let pos = ChunkBlockPos::new(5, 70, 9);
        assert_eq!(pack(pos), Ok(34_453));
        assert_eq!(unpack(34_453), pos);
    }

    #[test]
    fn roundtrip_full_domain() {
        for x in 0..16u8 {
            for z in 0..16u8 {
                for y in MIN_Y..=MAX_Y {
                    let pos = ChunkBlockPos::new(x, y as i16, z);
                    let packed = pack(pos).unwrap();
                    assert!(packed < 1 << POSITION_BITS);
                    assert_eq!(unpack(packed), pos);
                }
            }
        }
    }

    #[test]
    fn unpack_ignores_high_bits() {
        let packed = pack(ChunkBlockPos::new(5, 70, 9)).unwrap();
        assert_eq!(unpack(packed | 0xFFFE_0000), unpack(packed));
    }

    #[test]
    fn unpack_checked_accepts_encoder_output() {
        for y in [MIN_Y, -1, 0, 127, 128, MAX_Y] {
            let pos = ChunkBlockPos::new(3, y as i16, 12);
            assert_eq!(unpack_checked(pack(pos).unwrap()), Ok(pos));
        }
    }

    #[test]
    fn unpack_checked_rejects_foreign_bit_patterns() {
        // Set bit above the 17-bit layout.
        assert!(unpack_checked(1 << 17).is_err());
        // In-layout but out-of-range vertical field (y offset 500).
        assert!(unpack_checked(500 << 8).is_err());
    }

    #[test]
    fn pack_rejects_out_of_range_coords() {
        let cases = [
            (ChunkBlockPos { x: 16, z: 0, y: 0 }, "x"),
            (ChunkBlockPos { x: 0, z: 16, y: 0 }, "z"),
            (ChunkBlockPos { x: 0, z: 0, y: -65 }, "y"),
            (ChunkBlockPos { x: 0, z: 0, y: 320 }, "y"),
        ];
        for (pos, bad_axis) in cases {
            for err in [pack(pos).unwrap_err(), pack_half(pos).map(|_| 0).unwrap_err()] {
                match err {
                    Error::CoordOutOfRange { axis, .. } => assert_eq!(axis, bad_axis),
                    other => panic!("unexpected error: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn half_roundtrip_full_domain() {
        for x in 0..16u8 {
            for z in 0..16u8 {
                for y in MIN_Y..=MAX_Y {
                    let pos = ChunkBlockPos::new(x, y as i16, z);
                    let (upper, packed) = pack_half(pos).unwrap();
                    assert_eq!(unpack_half(packed, upper), pos);
                }
            }
        }
    }

    #[test]
    fn half_selection_boundary() {
        let (upper, _) = pack_half(ChunkBlockPos::new(0, 127, 0)).unwrap();
        assert!(!upper);
        let (upper, _) = pack_half(ChunkBlockPos::new(0, 128, 0)).unwrap();
        assert!(upper);
    }

    #[test]
    fn half_flag_changes_reconstruction() {
        let (upper, packed) = pack_half(ChunkBlockPos::new(0, 10, 0)).unwrap();
        assert!(!upper);
        // The flag is load-bearing: the wrong half lands 192 blocks away.
        assert_eq!(unpack_half(packed, true).y, 10 + 192);
    }

    #[test]
    fn bulk_roundtrip_preserves_order() {
        let positions: Vec<ChunkBlockPos> = (0..50)
            .map(|i| ChunkBlockPos::new(i % 16, MIN_Y as i16 + i as i16 * 7, 15 - i % 16))
            .collect();
        let bytes = pack_multiple(&positions).unwrap();
        assert_eq!(unpack_multiple(&bytes, positions.len()), positions);
    }

    #[test]
    fn bulk_buffer_size_law() {
        let pos = ChunkBlockPos::new(1, 2, 3);
        for (count, expected_bytes) in [(0, 0), (1, 3), (2, 5), (8, 17), (100, 213)] {
            let bytes = pack_multiple(&vec![pos; count]).unwrap();
            assert_eq!(bytes.len(), expected_bytes, "count {count}");
        }
    }

    #[test]
    fn bulk_pack_rejects_any_bad_position() {
        let positions = [
            ChunkBlockPos::new(1, 2, 3),
            ChunkBlockPos { x: 16, z: 0, y: 0 },
        ];
        assert!(pack_multiple(&positions).is_err());
    }

    #[test]
    fn bulk_short_count_truncates() {
        let positions = [
            ChunkBlockPos::new(1, 2, 3),
            ChunkBlockPos::new(4, 5, 6),
            ChunkBlockPos::new(7, 8, 9),
        ];
        let bytes = pack_multiple(&positions).unwrap();
        assert_eq!(unpack_multiple(&bytes, 2), &positions[..2]);
        assert!(unpack_multiple(&bytes, 0).is_empty());
    }
}
