//! Bitfield Helper Tests
//!
//! Tests for the shared extract/insert masking primitives.

use tokenlog::bits::{extract, insert};

// =============================================================================
// Extract Tests
// =============================================================================

#[test]
fn test_zero_width_extracts_nothing() {
    assert_eq!(extract(u64::MAX, 0, 0), 0);
    assert_eq!(extract(u64::MAX, 17, 0), 0);
}

#[test]
fn test_full_width_is_identity() {
    assert_eq!(extract(0xDEAD_BEEF_CAFE_F00D, 0, 64), 0xDEAD_BEEF_CAFE_F00D);
}

#[test]
fn test_extract_selects_expected_bits() {
    // 0b1011_0100: bits 2..6 are 0b1101
    assert_eq!(extract(0b1011_0100, 2, 4), 0b1101);
}

#[test]
fn test_extract_past_word_is_zero() {
    assert_eq!(extract(u64::MAX, 64, 8), 0);
}

#[test]
fn test_extract_result_bounded_by_width() {
    for width in 0..16 {
        let extracted = extract(u64::MAX, 3, width);
        assert_eq!(extracted, (1u64 << width) - 1);
        assert!(extracted < (1u64 << width));
    }
}

// =============================================================================
// Insert Tests
// =============================================================================

#[test]
fn test_insert_discards_oversized_field() {
    // 0b1_0110 truncated to 3 bits is 0b110, shifted to bit 4
    assert_eq!(insert(0b1_0110, 4, 3), 0b110_0000);
}

#[test]
fn test_insert_then_extract_round_trips() {
    let word = insert(0b101, 7, 3);
    assert_eq!(extract(word, 7, 3), 0b101);
}

#[test]
fn test_insert_past_word_is_zero() {
    assert_eq!(insert(u64::MAX, 64, 8), 0);
}
