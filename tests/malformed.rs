//! Decoding behavior on malformed and truncated buffers.
//!
//! Every case must fail with a descriptive error rather than panic, no matter how the buffer
//! lies about its own structure.

use exifscope::prelude::*;

fn big_endian_with_ifd0(directory: &[u8]) -> Vec<u8> {
    let mut buffer = vec![0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08];
    buffer.extend_from_slice(directory);
    buffer
}

#[test]
fn empty_buffer() {
    assert!(matches!(
        ExifMetadata::deserialize(&[], None),
        Err(Error::Empty)
    ));
}

#[test]
fn unknown_byte_order_marker() {
    let buffer = [0x4D, 0x49, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x00];
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::Malformed { .. })
    ));
}

#[test]
fn wrong_magic_number() {
    let buffer = [0x49, 0x49, 0x2B, 0x00, 0x00, 0x00, 0x00, 0x00];
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::Malformed { .. })
    ));
}

#[test]
fn truncated_header() {
    // The first directory pointer is cut off.
    let buffer = [0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00];
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn first_directory_pointer_past_buffer() {
    let buffer = [0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0xFF, 0x00];
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn entry_count_exceeds_buffer() {
    // Claims two entries but only one record follows.
    let buffer = big_endian_with_ifd0(&[
        0x00, 0x02, // Entry count
        0x01, 0x28, // Tag (ResolutionUnit)
        0x00, 0x03, // Type (UInt16)
        0x00, 0x00, 0x00, 0x01, // Count
        0x00, 0x02, 0x00, 0x00, // Value
        0x00, 0x00, 0x00, 0x00, // No more IFDs
    ]);
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn unsupported_entry_type() {
    let buffer = big_endian_with_ifd0(&[
        0x00, 0x01, // Entry count
        0x01, 0x28, // Tag (ResolutionUnit)
        0x00, 0x0D, // Type 13 does not exist
        0x00, 0x00, 0x00, 0x01, // Count
        0x00, 0x00, 0x00, 0x00, // Value
        0x00, 0x00, 0x00, 0x00, // No more IFDs
    ]);
    let error = ExifMetadata::deserialize(&buffer, None).unwrap_err();
    assert!(matches!(error, Error::Malformed { .. }));
    assert!(error.to_string().contains("Unsupported entry type"));
}

#[test]
fn zero_element_count() {
    let buffer = big_endian_with_ifd0(&[
        0x00, 0x01, // Entry count
        0x01, 0x28, // Tag (ResolutionUnit)
        0x00, 0x03, // Type (UInt16)
        0x00, 0x00, 0x00, 0x00, // Count
        0x00, 0x02, 0x00, 0x00, // Value
        0x00, 0x00, 0x00, 0x00, // No more IFDs
    ]);
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::Malformed { .. })
    ));
}

#[test]
fn negative_element_count() {
    let buffer = big_endian_with_ifd0(&[
        0x00, 0x01, // Entry count
        0x01, 0x28, // Tag (ResolutionUnit)
        0x00, 0x03, // Type (UInt16)
        0xFF, 0xFF, 0xFF, 0xFF, // Count
        0x00, 0x02, 0x00, 0x00, // Value
        0x00, 0x00, 0x00, 0x00, // No more IFDs
    ]);
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::Malformed { .. })
    ));
}

#[test]
fn value_offset_past_buffer() {
    let buffer = big_endian_with_ifd0(&[
        0x00, 0x01, // Entry count
        0x01, 0x1A, // Tag (XResolution)
        0x00, 0x05, // Type (UnsignedRational)
        0x00, 0x00, 0x00, 0x01, // Count
        0x00, 0x00, 0x00, 0xFF, // Value offset beyond the buffer
        0x00, 0x00, 0x00, 0x00, // No more IFDs
    ]);
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn offset_pair_without_length_entry() {
    let buffer = big_endian_with_ifd0(&[
        0x00, 0x01, // Entry count
        0xA0, 0x10, // Tag (SamsungRawPointersOffset)
        0x00, 0x04, // Type (UInt32)
        0x00, 0x00, 0x00, 0x01, // Count
        0x00, 0x00, 0x00, 0x1A, // Value (Offset)
        0x00, 0x00, 0x00, 0x00, // No more IFDs
    ]);
    let error = ExifMetadata::deserialize(&buffer, None).unwrap_err();
    assert!(matches!(error, Error::Malformed { .. }));
    assert!(error.to_string().contains("length tag"));
}

#[test]
fn offset_pair_length_past_buffer() {
    let buffer = big_endian_with_ifd0(&[
        0x00, 0x02, // Entry count
        0xA0, 0x10, // Tag (SamsungRawPointersOffset)
        0x00, 0x04, // Type (UInt32)
        0x00, 0x00, 0x00, 0x01, // Count
        0x00, 0x00, 0x00, 0x26, // Value (Offset)
        0xA0, 0x11, // Tag (SamsungRawPointersLength)
        0x00, 0x04, // Type (UInt32)
        0x00, 0x00, 0x00, 0x01, // Count
        0x00, 0x00, 0x01, 0x00, // Length far past the buffer end
        0x00, 0x00, 0x00, 0x00, // No more IFDs
        0x01, 0x02, 0x03, 0x04, 0x05,
    ]);
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn next_directory_pointer_past_buffer() {
    let buffer = big_endian_with_ifd0(&[
        0x00, 0x01, // Entry count
        0x01, 0x28, // Tag (ResolutionUnit)
        0x00, 0x03, // Type (UInt16)
        0x00, 0x00, 0x00, 0x01, // Count
        0x00, 0x02, 0x00, 0x00, // Value
        0x00, 0x00, 0xFF, 0x00, // Next IFD far past the buffer end
    ]);
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn child_pointer_past_buffer() {
    let buffer = big_endian_with_ifd0(&[
        0x00, 0x01, // Entry count
        0x87, 0x69, // Tag (ExifOffset)
        0x00, 0x04, // Type (UInt32)
        0x00, 0x00, 0x00, 0x01, // Count
        0x00, 0x00, 0xFF, 0x00, // Child directory far past the buffer end
        0x00, 0x00, 0x00, 0x00, // No more IFDs
    ]);
    assert!(matches!(
        ExifMetadata::deserialize(&buffer, None),
        Err(Error::OutOfBounds)
    ));
}
