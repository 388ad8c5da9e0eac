//! Bit-packing codec for chunk-relative block positions.
//!
//! Three encodings over the same position type:
//! - A 32-bit packed integer using 17 bits
//! - A 16-bit packed value plus an out-of-band vertical-half flag
//! - A dense bitstream holding 17 bits per position, with no byte
//!   alignment between entries
//!
//! The bit-buffer primitives in [`bits`] underlie the bitstream form and
//! work for any fixed-width bit field.

pub mod bits;
pub mod packed;

pub use bits::{read_bits, write_bits};
pub use packed::{
    pack, pack_half, pack_multiple, unpack, unpack_checked, unpack_half, unpack_multiple,
    POSITION_BITS,
};
