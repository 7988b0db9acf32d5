//! Format String Tests
//!
//! Tests for the sentinel-delimited field grammar.

use tokenlog::FormatString;

// =============================================================================
// Undecorated Strings
// =============================================================================

#[test]
fn test_plain_string_has_no_fields() {
    let format = FormatString::parse("hello world");
    assert!(format.fields().is_empty());
    assert_eq!(format.message(), "hello world");
    assert_eq!(format.module(), "");
    assert_eq!(format.file(), "");
    assert_eq!(format.raw(), "hello world");
}

#[test]
fn test_empty_string() {
    let format = FormatString::parse("");
    assert!(format.fields().is_empty());
    assert_eq!(format.message(), "");
}

#[test]
fn test_printf_style_string_untouched() {
    let format = FormatString::parse("Battery at %d%% (%s)");
    assert!(format.fields().is_empty());
    assert_eq!(format.message(), "Battery at %d%% (%s)");
}

#[test]
fn test_sentinel_midway_is_literal_text() {
    // A key pattern not at the start does not make the string annotated.
    let format = FormatString::parse("prefix ■msg♦value");
    assert!(format.fields().is_empty());
    assert_eq!(format.message(), "prefix ■msg♦value");
}

#[test]
fn test_open_sentinel_without_valid_key_is_literal() {
    // ■ followed by a digit is not a key: everything stays literal.
    let format = FormatString::parse("■1bad♦value");
    assert!(format.fields().is_empty());
    assert_eq!(format.message(), "■1bad♦value");
}

#[test]
fn test_unclosed_sentinel_is_literal() {
    let format = FormatString::parse("■msg with no close");
    assert!(format.fields().is_empty());
    assert_eq!(format.message(), "■msg with no close");
}

// =============================================================================
// Annotated Strings
// =============================================================================

#[test]
fn test_three_field_string() {
    let format = FormatString::parse("■msg♦Something happened■module♦core■file♦core.c");

    assert_eq!(format.fields().len(), 3);
    assert_eq!(format.fields()["msg"], "Something happened");
    assert_eq!(format.fields()["module"], "core");
    assert_eq!(format.fields()["file"], "core.c");

    assert_eq!(format.message(), "Something happened");
    assert_eq!(format.module(), "core");
    assert_eq!(format.file(), "core.c");
}

#[test]
fn test_fields_keep_order_of_appearance() {
    let format = FormatString::parse("■file♦a.c■msg♦hi■module♦m");
    let keys: Vec<&str> = format.fields().keys().map(String::as_str).collect();
    assert_eq!(keys, ["file", "msg", "module"]);
}

#[test]
fn test_message_falls_back_to_raw_when_msg_absent() {
    // The fallback is the raw string, sentinels included.
    let format = FormatString::parse("■module♦core");
    assert_eq!(format.fields().len(), 1);
    assert_eq!(format.module(), "core");
    assert_eq!(format.message(), "■module♦core");
}

#[test]
fn test_duplicate_key_last_write_wins() {
    let format = FormatString::parse("■msg♦A■msg♦B");
    assert_eq!(format.fields().len(), 1);
    assert_eq!(format.fields()["msg"], "B");
    assert_eq!(format.message(), "B");
}

#[test]
fn test_single_letter_key_is_valid() {
    let format = FormatString::parse("■m♦value");
    assert_eq!(format.fields()["m"], "value");
}

#[test]
fn test_empty_value_is_preserved() {
    let format = FormatString::parse("■msg♦■module♦core");
    assert_eq!(format.fields()["msg"], "");
    assert_eq!(format.message(), "");
    assert_eq!(format.module(), "core");
}

#[test]
fn test_trailing_empty_value() {
    let format = FormatString::parse("■msg♦hello■module♦");
    assert_eq!(format.fields()["msg"], "hello");
    assert_eq!(format.fields()["module"], "");
}

#[test]
fn test_value_text_taken_verbatim() {
    // No trimming: whitespace and close sentinels inside a value survive.
    let format = FormatString::parse("■msg♦  padded ♦ text  ");
    assert_eq!(format.fields()["msg"], "  padded ♦ text  ");
}

#[test]
fn test_malformed_key_midway_consumed_as_value_text() {
    // ■2x♦ is not a valid key, so it stays inside the msg value.
    let format = FormatString::parse("■msg♦before■2x♦after");
    assert_eq!(format.fields()["msg"], "before■2x♦after");
}

#[test]
fn test_keys_may_contain_digits_and_underscores() {
    let format = FormatString::parse("■t1_key♦v");
    assert_eq!(format.fields()["t1_key"], "v");
}

#[test]
fn test_parse_is_idempotent() {
    let raw = "■msg♦Something happened■module♦core";
    let first = FormatString::parse(raw);
    let second = FormatString::parse(raw);
    assert_eq!(first, second);
    assert_eq!(first.fields(), second.fields());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_display_equals_message() {
    let annotated = FormatString::parse("■msg♦hello■module♦core");
    assert_eq!(annotated.to_string(), "hello");

    let plain = FormatString::parse("just text");
    assert_eq!(plain.to_string(), "just text");
}
