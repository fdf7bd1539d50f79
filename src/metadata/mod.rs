//! EXIF metadata model and codec.
//!
//! # Architecture
//!
//! [`exif::ExifMetadata`] owns a [`collection::ImageFileDirectoryCollection`], a chain of
//! [`directory::ImageFileDirectory`] values each holding [`entry::Entry`] values. Entries
//! carry an [`entry::EntryValue`] which may itself hold child directory collections, forming
//! a tree. Decoding resolves wire values against a [`provider::TagProvider`] so entries with
//! special behaviors (child directory pointers, preserved data blocks, offset-and-length
//! pairs) are handled structurally rather than as raw numbers.
//!
//! The wire codec lives in the private [`deserializer`] and [`serializer`] modules and is
//! reached through [`exif::ExifMetadata::deserialize`] and [`exif::ExifMetadata::serialize`].

pub mod collection;
pub(crate) mod deserializer;
pub mod directory;
pub mod entry;
pub mod exif;
pub mod offset;
pub mod provider;
pub mod rational;
pub(crate) mod serializer;
pub mod tag;
pub mod tags;
