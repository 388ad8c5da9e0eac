//! Arbitrary-bit-offset reads and writes over a byte buffer.
//!
//! Bits are addressed least-significant-first within each byte, so a field
//! written at bit offset `n` continues into the low bits of the next byte
//! when it crosses a byte boundary.

/// Write the low `num_bits` bits of `value` into `buf` starting at absolute
/// bit position `bit_offset`.
///
/// Bits outside `[bit_offset, bit_offset + num_bits)` are left untouched.
/// The caller must guarantee `bit_offset + num_bits <= 8 * buf.len()`; an
/// undersized buffer panics on indexing rather than returning an error.
pub fn write_bits(buf: &mut [u8], bit_offset: usize, value: u32, num_bits: u32) {
    debug_assert!(num_bits <= 32);
    debug_assert!(bit_offset + num_bits as usize <= buf.len() * 8);

    let mut value = value;
    let mut remaining = num_bits;
    let mut offset = bit_offset;

    while remaining > 0 {
        let byte_index = offset / 8;
        let bit_in_byte = (offset % 8) as u32;
        let take = remaining.min(8 - bit_in_byte);

        let mask = (1u32 << take) - 1;

        // Clear the target bits, then OR in the new ones.
        buf[byte_index] &= !((mask as u8) << bit_in_byte);
        buf[byte_index] |= ((value & mask) as u8) << bit_in_byte;

        value >>= take;
        remaining -= take;
        offset += take as usize;
    }
}

/// Read `num_bits` bits from `buf` starting at absolute bit position
/// `bit_offset`, reconstructing a right-aligned integer.
///
/// Same bounds contract as [`write_bits`].
#[must_use]
pub fn read_bits(buf: &[u8], bit_offset: usize, num_bits: u32) -> u32 {
    debug_assert!(num_bits <= 32);
    debug_assert!(bit_offset + num_bits as usize <= buf.len() * 8);

    let mut result = 0u32;
    let mut remaining = num_bits;
    let mut offset = bit_offset;
    let mut out_pos = 0u32;

    while remaining > 0 {
        let byte_index = offset / 8;
        let bit_in_byte = (offset % 8) as u32;
        let take = remaining.min(8 - bit_in_byte);

        let mask = (1u32 << take) - 1;
        let bits = (u32::from(buf[byte_index]) >> bit_in_byte) & mask;
        result |= bits << out_pos;

        remaining -= take;
        offset += take as usize;
        out_pos += take;
    }

    result
}
