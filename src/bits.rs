//! Bitfield helpers
//!
//! One shared masking primitive keeps the cumulative-offset arithmetic for
//! the metadata word in a single place. All functions are total: a zero
//! width yields zero, and a full 64-bit width is handled without shifting
//! past the word.

/// Mask `count` bits of `value` starting at bit `start` (LSB = bit 0).
///
/// Returns 0 when `count` is 0. Widths of 64 and above select every bit
/// from `start` upward.
pub fn extract(value: u64, start: u32, count: u32) -> u64 {
    if start >= u64::BITS {
        return 0;
    }
    (value >> start) & width_mask(count)
}

/// Place the low `count` bits of `field` at bit `start`.
///
/// The inverse of [`extract`]: bits of `field` beyond `count` are discarded,
/// so oversized inputs contribute only their low-order bits.
pub fn insert(field: u64, start: u32, count: u32) -> u64 {
    if start >= u64::BITS {
        return 0;
    }
    (field & width_mask(count)) << start
}

/// A mask with the low `count` bits set, saturating at all 64 bits.
fn width_mask(count: u32) -> u64 {
    if count >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << count) - 1
    }
}
