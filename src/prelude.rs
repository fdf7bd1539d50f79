//! # exifscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! exifscope library. Import this module to get quick access to the essential types for
//! reading, editing, and writing EXIF metadata.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all exifscope operations
pub use crate::Error;

/// The result type used throughout exifscope
pub use crate::Result;

// ================================================================================================
// Main Entry Point
// ================================================================================================

/// Main entry point for reading, editing, and writing EXIF metadata
pub use crate::metadata::exif::ExifMetadata;

/// The magic number following the order marker in every EXIF buffer
pub use crate::metadata::exif::MAGIC_NUMBER;

// ================================================================================================
// Directory Object Model
// ================================================================================================

/// A chain of image file directories
pub use crate::metadata::collection::ImageFileDirectoryCollection;

/// A single image file directory of entries keyed by tag
pub use crate::metadata::directory::ImageFileDirectory;

/// Directory entries, their wire types, and decoded values
pub use crate::metadata::entry::{Entry, EntryPathStep, EntryReference, EntryType, EntryValue};

// ================================================================================================
// Tags
// ================================================================================================

/// Tag identity, serialization behavior, and the shared tag handle
pub use crate::metadata::tag::{Tag, TagBehavior, TagRef};

/// Registry resolving wire values to known tags during decoding
pub use crate::metadata::provider::TagProvider;

// ================================================================================================
// Value Types
// ================================================================================================

/// Rational number values used by many standard tags
pub use crate::metadata::rational::{SignedRational, UnsignedRational};

/// Buffer offsets split into an absolute base and a relative part
pub use crate::metadata::offset::ScopedOffset;

// ================================================================================================
// Wire Primitives
// ================================================================================================

/// Byte order of an EXIF buffer, matching the header order marker
pub use crate::io::ByteOrder;
