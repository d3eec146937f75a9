//! Tests for tag value decoding

extern crate std;

use crate::io::ByteOrder;
use crate::tiff::constants::field_types;
use crate::tiff::ifd::{entry_position, IFDEntry};
use crate::tiff::tests::test_utils::{TestEntry, TiffBlockBuilder};
use crate::tiff::types::TagValue;
use crate::utils::tag_utils::read_tag_value;

/// Decodes entry `index` of the first IFD of `block`
fn decode(block: &[u8], order: ByteOrder, index: usize) -> Option<TagValue> {
    let entry = IFDEntry::read(block, entry_position(8, index), order).unwrap();
    read_tag_value(block, &entry, 0, order).unwrap()
}

#[test]
fn test_shorts_inline_and_offset() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let block = TiffBlockBuilder::new(order)
            .short(0, 0x0112, &[3])
            .short(0, 0x0212, &[2, 1])
            .short(0, 0x0102, &[8, 8, 8])
            .build();

        std::assert_eq!(decode(&block, order, 0), Some(TagValue::Short(3)));
        std::assert_eq!(decode(&block, order, 1), Some(TagValue::Shorts(vec![2, 1])));
        std::assert_eq!(decode(&block, order, 2), Some(TagValue::Shorts(vec![8, 8, 8])));
    }
}

#[test]
fn test_bytes_inline_and_offset() {
    let order = ByteOrder::LittleEndian;
    let block = TiffBlockBuilder::new(order)
        .bytes(0, 0x9000, field_types::UNDEFINED, b"0230")
        .bytes(0, 0x0000, field_types::BYTE, &[7])
        .bytes(0, 0x927C, field_types::UNDEFINED, &[1, 2, 3, 4, 5, 6])
        .build();

    std::assert_eq!(decode(&block, order, 0), Some(TagValue::Bytes(b"0230".to_vec())));
    std::assert_eq!(decode(&block, order, 1), Some(TagValue::Byte(7)));
    std::assert_eq!(decode(&block, order, 2), Some(TagValue::Bytes(vec![1, 2, 3, 4, 5, 6])));
}

#[test]
fn test_ascii_drops_trailing_nul() {
    let order = ByteOrder::BigEndian;
    let block = TiffBlockBuilder::new(order)
        .ascii(0, 0x010F, "Canon")
        .ascii(0, 0x0001, "N")
        .entry(0, TestEntry::raw(0x0131, field_types::ASCII, 0, vec![]))
        .build();

    std::assert_eq!(decode(&block, order, 0), Some(TagValue::Ascii("Canon".to_string())));
    std::assert_eq!(decode(&block, order, 1), Some(TagValue::Ascii("N".to_string())));
    std::assert_eq!(decode(&block, order, 2), Some(TagValue::Ascii(String::new())));
}

#[test]
fn test_longs() {
    let order = ByteOrder::LittleEndian;
    let block = TiffBlockBuilder::new(order)
        .long(0, 0x0100, &[4032])
        .long(0, 0x0111, &[100, 200])
        .slong(0, 0x9204, &[-5])
        .slong(0, 0x9204, &[-1, 1])
        .build();

    std::assert_eq!(decode(&block, order, 0), Some(TagValue::Long(4032)));
    std::assert_eq!(decode(&block, order, 1), Some(TagValue::Longs(vec![100, 200])));
    std::assert_eq!(decode(&block, order, 2), Some(TagValue::SLong(-5)));
    std::assert_eq!(decode(&block, order, 3), Some(TagValue::SLongs(vec![-1, 1])));
}

#[test]
fn test_rationals() {
    let order = ByteOrder::BigEndian;
    let block = TiffBlockBuilder::new(order)
        .rational(0, 0x829A, &[(1, 2)])
        .rational(0, 0x0002, &[(51, 1), (30, 1), (1234, 100)])
        .srational(0, 0x9204, &[(-1, 3)])
        .build();

    std::assert_eq!(decode(&block, order, 0), Some(TagValue::Rational(0.5)));
    std::assert_eq!(decode(&block, order, 1), Some(TagValue::Rationals(vec![51.0, 30.0, 12.34])));
    std::assert_eq!(decode(&block, order, 2), Some(TagValue::SRational(-1.0 / 3.0)));
}

#[test]
fn test_zero_denominator_is_not_finite() {
    let order = ByteOrder::LittleEndian;
    let block = TiffBlockBuilder::new(order)
        .rational(0, 0x829A, &[(1, 0)])
        .rational(0, 0x829D, &[(0, 0)])
        .srational(0, 0x9204, &[(-1, 0)])
        .build();

    std::assert_eq!(decode(&block, order, 0), Some(TagValue::Rational(f64::INFINITY)));
    match decode(&block, order, 1) {
        Some(TagValue::Rational(v)) => std::assert!(v.is_nan()),
        other => std::panic!("unexpected {:?}", other),
    }
    std::assert_eq!(decode(&block, order, 2), Some(TagValue::SRational(f64::NEG_INFINITY)));
}

#[test]
fn test_unsupported_type_has_no_value() {
    let order = ByteOrder::LittleEndian;
    let block = TiffBlockBuilder::new(order)
        .entry(0, TestEntry::raw(0x0112, field_types::FLOAT, 1, vec![0, 0, 0x80, 0x3F]))
        .entry(0, TestEntry::raw(0x0112, field_types::SSHORT, 1, vec![1, 0]))
        .build();

    std::assert_eq!(decode(&block, order, 0), None);
    std::assert_eq!(decode(&block, order, 1), None);
}

#[test]
fn test_payload_outside_buffer_is_an_error() {
    let order = ByteOrder::LittleEndian;
    let mut block = TiffBlockBuilder::new(order)
        .long(0, 0x0111, &[1, 2, 3])
        .build();
    block.truncate(block.len() - 4);

    let entry = IFDEntry::read(&block, entry_position(8, 0), order).unwrap();
    std::assert!(read_tag_value(&block, &entry, 0, order).is_err());
}

#[test]
fn test_offsets_are_relative_to_tiff_start() {
    let order = ByteOrder::BigEndian;
    let block = TiffBlockBuilder::new(order)
        .ascii(0, 0x010F, "Nikon Corp")
        .build();

    let mut data = b"prefix".to_vec();
    data.extend_from_slice(&block);

    let entry = IFDEntry::read(&data, 6 + entry_position(8, 0), order).unwrap();
    let value = read_tag_value(&data, &entry, 6, order).unwrap();
    std::assert_eq!(value, Some(TagValue::Ascii("Nikon Corp".to_string())));
}

#[test]
fn test_empty_arrays_ignore_the_offset() {
    let order = ByteOrder::LittleEndian;
    let far_away = vec![0xFF, 0xFF, 0x00, 0x00];
    let block = TiffBlockBuilder::new(order)
        .entry(0, TestEntry::raw(0x0111, field_types::LONG, 0, far_away.clone()))
        .entry(0, TestEntry::raw(0x829A, field_types::RATIONAL, 0, far_away.clone()))
        .entry(0, TestEntry::raw(0x9204, field_types::SLONG, 0, far_away))
        .build();

    std::assert_eq!(decode(&block, order, 0), Some(TagValue::Longs(vec![])));
    std::assert_eq!(decode(&block, order, 1), Some(TagValue::Rationals(vec![])));
    std::assert_eq!(decode(&block, order, 2), Some(TagValue::SLongs(vec![])));
}
