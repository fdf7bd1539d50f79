//! The top-level EXIF buffer: header handling plus the directory tree.
//!
//! An EXIF buffer opens with a 2-byte order marker (`II` or `MM`), the magic number `0x002A`,
//! and a 4-byte pointer to the first image file directory. [`ExifMetadata`] validates the
//! header, decodes the tree behind the pointer, and reserializes the whole structure with
//! freshly computed offsets.
//!
//! # Usage Examples
//!
//! ```rust
//! use exifscope::metadata::exif::ExifMetadata;
//!
//! let buffer = [0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x00];
//! let exif = ExifMetadata::deserialize(&buffer, None)?;
//! assert!(exif.directories().is_empty());
//! assert_eq!(exif.serialize()?, buffer);
//! # Ok::<(), exifscope::Error>(())
//! ```

use std::{
    fs::File,
    ops::{Deref, DerefMut},
    path::Path,
};

use memmap2::Mmap;

use crate::{
    io::{ByteOrder, EncodeStream},
    metadata::{
        collection::ImageFileDirectoryCollection, deserializer, entry::EntryReference,
        provider::TagProvider, serializer,
    },
    Result,
};

/// The magic number following the order marker in every EXIF buffer.
pub const MAGIC_NUMBER: u16 = 0x002A;

/// A complete EXIF metadata tree together with its byte order.
///
/// Dereferences to its [`ImageFileDirectoryCollection`], so chain operations are available
/// directly on the metadata object.
#[derive(Debug, Clone, PartialEq)]
pub struct ExifMetadata {
    byte_order: ByteOrder,
    directories: ImageFileDirectoryCollection,
}

impl ExifMetadata {
    /// Creates an empty metadata tree with the default big-endian byte order.
    #[must_use]
    pub fn new() -> Self {
        ExifMetadata {
            byte_order: ByteOrder::BigEndian,
            directories: ImageFileDirectoryCollection::new(),
        }
    }

    /// Deserializes an EXIF buffer, resolving tags against `provider` or the built-in
    /// catalog when `None`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for an empty buffer, and [`crate::Error::Malformed`]
    /// or [`crate::Error::OutOfBounds`] if the header or directory structure is invalid.
    pub fn deserialize(buffer: &[u8], provider: Option<&TagProvider>) -> Result<Self> {
        Ok(Self::deserialize_with_report(buffer, provider)?.0)
    }

    /// Deserializes an EXIF buffer, additionally reporting references to entries which are
    /// known not to survive reserialization. Callers planning to reserialize should remove
    /// or correct the referenced entries first.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for an empty buffer, and [`crate::Error::Malformed`]
    /// or [`crate::Error::OutOfBounds`] if the header or directory structure is invalid.
    pub fn deserialize_with_report(
        buffer: &[u8],
        provider: Option<&TagProvider>,
    ) -> Result<(Self, Vec<EntryReference>)> {
        if buffer.is_empty() {
            return Err(crate::Error::Empty);
        }

        let marker = ByteOrder::BigEndian.read_u16(buffer, 0)?;
        let byte_order = ByteOrder::from_repr(marker)
            .ok_or_else(|| malformed_error!("Unrecognized byte order marker 0x{marker:04X}"))?;

        let magic = byte_order.read_u16(buffer, 2)?;
        if magic != MAGIC_NUMBER {
            return Err(malformed_error!(
                "Unexpected magic number 0x{magic:04X}, expected 0x{MAGIC_NUMBER:04X}"
            ));
        }

        let provider = provider.unwrap_or_else(|| TagProvider::built_in());
        let mut directories = ImageFileDirectoryCollection::new();
        let cannot_round_trip =
            deserializer::deserialize(&mut directories, buffer, provider, byte_order, 4, true)?;

        Ok((
            ExifMetadata {
                byte_order,
                directories,
            },
            cannot_round_trip,
        ))
    }

    /// Memory-maps a file and deserializes it as an EXIF buffer.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped, plus all
    /// errors of [`ExifMetadata::deserialize`].
    pub fn from_file<P: AsRef<Path>>(path: P, provider: Option<&TagProvider>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        // The mapping is read-only and dropped before returning.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::deserialize(&mmap, provider)
    }

    /// Serializes the metadata tree to a fresh EXIF buffer with recomputed offsets.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidValue`] if an entry value cannot be represented on the
    /// wire, such as an empty array.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut stream = EncodeStream::new(self.byte_order);
        stream.write_u16(self.byte_order as u16);
        stream.write_u16(MAGIC_NUMBER);
        serializer::serialize(&self.directories, &mut stream)?;
        Ok(stream.into_bytes())
    }

    /// The byte order of the buffer this tree was decoded from, or the order to encode with.
    #[must_use]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Sets the byte order used by [`ExifMetadata::serialize`].
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    /// The decoded directory tree.
    #[must_use]
    pub fn directories(&self) -> &ImageFileDirectoryCollection {
        &self.directories
    }

    /// The decoded directory tree, mutably.
    pub fn directories_mut(&mut self) -> &mut ImageFileDirectoryCollection {
        &mut self.directories
    }

    /// Imports all directories from another metadata tree. The byte order is not imported.
    /// See [`ImageFileDirectoryCollection::import`] for merge rules.
    pub fn import(&mut self, other: &ExifMetadata) {
        self.directories.import(other.directories());
    }
}

impl Default for ExifMetadata {
    fn default() -> Self {
        ExifMetadata::new()
    }
}

impl Deref for ExifMetadata {
    type Target = ImageFileDirectoryCollection;

    fn deref(&self) -> &ImageFileDirectoryCollection {
        &self.directories
    }
}

impl DerefMut for ExifMetadata {
    fn deref_mut(&mut self) -> &mut ImageFileDirectoryCollection {
        &mut self.directories
    }
}
