//! Byte-order aware primitive access for the EXIF wire format.
//!
//! EXIF buffers declare their endianness in the header (`II` for little endian, `MM` for big
//! endian) and every multi-byte value after the marker honors that declaration. This module
//! provides [`crate::io::ByteOrder`], which pairs the marker value with bounds-checked primitive
//! readers, and the crate-internal [`EncodeStream`] write cursor used by the serializer.
//!
//! # Architecture
//!
//! All readers take the full buffer plus an absolute offset rather than consuming a slice, since
//! the EXIF format is offset-driven: directory entries reference value payloads anywhere in the
//! buffer, including positions before the entry itself. Every access validates the requested
//! range and fails with [`crate::Error::OutOfBounds`] instead of panicking.
//!
//! # Usage Examples
//!
//! ```rust
//! use exifscope::io::ByteOrder;
//!
//! let data = [0x00u8, 0x2A];
//! assert_eq!(ByteOrder::BigEndian.read_u16(&data, 0)?, 0x002A);
//! assert_eq!(ByteOrder::LittleEndian.read_u16(&data, 0)?, 0x2A00);
//! # Ok::<(), exifscope::Error>(())
//! ```

use strum::FromRepr;

use crate::Result;

/// Endianness of all multi-byte values in an EXIF buffer.
///
/// The discriminant is the 16-bit order marker exactly as it appears at the start of the
/// buffer, so the marker can be converted with [`ByteOrder::from_repr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[repr(u16)]
pub enum ByteOrder {
    /// Little endian, marker bytes `II` (0x4949).
    LittleEndian = 0x4949,
    /// Big endian, marker bytes `MM` (0x4D4D).
    BigEndian = 0x4D4D,
}

macro_rules! read_impl {
    ($name:ident, $ty:ty, $size:expr, $doc:expr) => {
        #[doc = $doc]
        ///
        /// # Errors
        /// Returns [`crate::Error::OutOfBounds`] if the value extends past the end of the buffer.
        pub fn $name(self, data: &[u8], offset: usize) -> Result<$ty> {
            let bytes = offset
                .checked_add($size)
                .and_then(|end| data.get(offset..end))
                .ok_or(crate::Error::OutOfBounds)?;
            let bytes: [u8; $size] = bytes.try_into().map_err(|_| crate::Error::OutOfBounds)?;
            Ok(match self {
                ByteOrder::LittleEndian => <$ty>::from_le_bytes(bytes),
                ByteOrder::BigEndian => <$ty>::from_be_bytes(bytes),
            })
        }
    };
}

impl ByteOrder {
    /// Reads a single byte at `offset`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `offset` is past the end of the buffer.
    pub fn read_u8(self, data: &[u8], offset: usize) -> Result<u8> {
        data.get(offset).copied().ok_or(crate::Error::OutOfBounds)
    }

    /// Reads a single signed byte at `offset`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `offset` is past the end of the buffer.
    pub fn read_i8(self, data: &[u8], offset: usize) -> Result<i8> {
        Ok(self.read_u8(data, offset)? as i8)
    }

    read_impl!(read_u16, u16, 2, "Reads an unsigned 16-bit value at `offset`.");
    read_impl!(read_i16, i16, 2, "Reads a signed 16-bit value at `offset`.");
    read_impl!(read_u32, u32, 4, "Reads an unsigned 32-bit value at `offset`.");
    read_impl!(read_i32, i32, 4, "Reads a signed 32-bit value at `offset`.");
    read_impl!(read_f32, f32, 4, "Reads a 32-bit IEEE 754 value at `offset`.");
    read_impl!(read_f64, f64, 8, "Reads a 64-bit IEEE 754 value at `offset`.");
}

macro_rules! write_impl {
    ($name:ident, $ty:ty) => {
        pub(crate) fn $name(&mut self, value: $ty) {
            let bytes = match self.order {
                ByteOrder::LittleEndian => value.to_le_bytes(),
                ByteOrder::BigEndian => value.to_be_bytes(),
            };
            self.put(&bytes);
        }
    };
}

/// A growable write cursor with random access, used by the serializer for pointer backpatching.
///
/// The cursor may seek past the current end of the buffer; the gap is zero-filled on the next
/// write. Seeking alone never grows the buffer.
pub(crate) struct EncodeStream {
    order: ByteOrder,
    data: Vec<u8>,
    position: usize,
}

impl EncodeStream {
    pub(crate) fn new(order: ByteOrder) -> Self {
        EncodeStream {
            order,
            data: Vec::new(),
            position: 0,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn seek(&mut self, position: usize) {
        self.position = position;
    }

    pub(crate) fn skip(&mut self, count: usize) {
        self.position += count;
    }

    fn put(&mut self, bytes: &[u8]) {
        let end = self.position + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(bytes);
        self.position = end;
    }

    pub(crate) fn write_u8(&mut self, value: u8) {
        self.put(&[value]);
    }

    pub(crate) fn write_i8(&mut self, value: i8) {
        self.put(&[value as u8]);
    }

    write_impl!(write_u16, u16);
    write_impl!(write_i16, i16);
    write_impl!(write_u32, u32);
    write_impl!(write_i32, i32);
    write_impl!(write_f32, f32);
    write_impl!(write_f64, f64);

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        self.put(bytes);
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_u16_both_orders() {
        let data = [0x12u8, 0x34];
        assert_eq!(ByteOrder::BigEndian.read_u16(&data, 0).unwrap(), 0x1234);
        assert_eq!(ByteOrder::LittleEndian.read_u16(&data, 0).unwrap(), 0x3412);
    }

    #[test]
    fn read_u32_truncated_fails() {
        let data = [0x00u8, 0x00, 0x00];
        assert!(matches!(
            ByteOrder::BigEndian.read_u32(&data, 0),
            Err(crate::Error::OutOfBounds)
        ));
    }

    #[test]
    fn read_at_huge_offset_fails() {
        let data = [0u8; 8];
        assert!(ByteOrder::BigEndian.read_u16(&data, usize::MAX).is_err());
    }

    #[test]
    fn from_repr_matches_markers() {
        assert_eq!(ByteOrder::from_repr(0x4949), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::from_repr(0x4D4D), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::from_repr(0x4D49), None);
    }

    #[test]
    fn encode_stream_backpatch() {
        let mut stream = EncodeStream::new(ByteOrder::BigEndian);
        stream.write_u32(0);
        stream.write_u16(0xBEEF);
        let end = stream.position();
        stream.seek(0);
        stream.write_u32(end as u32);
        stream.seek(end);
        assert_eq!(stream.into_bytes(), vec![0x00, 0x00, 0x00, 0x06, 0xBE, 0xEF]);
    }

    #[test]
    fn encode_stream_zero_fills_gap() {
        let mut stream = EncodeStream::new(ByteOrder::LittleEndian);
        stream.write_u8(0xFF);
        stream.skip(3);
        stream.write_u8(0xAA);
        assert_eq!(stream.into_bytes(), vec![0xFF, 0x00, 0x00, 0x00, 0xAA]);
    }
}
