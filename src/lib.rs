#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]
//#![deny(unsafe_code)]
// - 'metadata/exif.rs' uses mmap to map a file into memory

//! # exifscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/exifscope.svg)](https://crates.io/crates/exifscope)
//! [![Documentation](https://docs.rs/exifscope/badge.svg)](https://docs.rs/exifscope)
//!
//! A pure-Rust codec for EXIF metadata. `exifscope` deserializes the TIFF-style image file
//! directory tree embedded in image files, exposes it as an editable object model, and
//! reserializes it with freshly computed offsets, without requiring any image decoding.
//!
//! ## Features
//!
//! - **Complete directory model** - Root directory chains, EXIF/GPS/interoperability child
//!   directories, and sub-image directories as a uniform tree
//! - **Round-trip fidelity** - Preserved data blocks, offset-and-length pairs, and scoped
//!   pointer offsets survive decode and re-encode
//! - **Extensible tag catalog** - A built-in catalog of standard tags, plus providers for
//!   registering vendor tags with custom serialization behaviors
//! - **Both byte orders** - Little-endian (`II`) and big-endian (`MM`) buffers, decoded and
//!   encoded with bounds-checked primitive access
//! - **Memory safe** - No panics on malformed input; every decode error carries context
//!
//! ## Quick Start
//!
//! Add `exifscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! exifscope = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use exifscope::prelude::*;
//! use exifscope::metadata::tags;
//!
//! let mut exif = ExifMetadata::new();
//! let mut directory = ImageFileDirectory::new();
//! directory.set(&tags::ifd::ORIENTATION, 1u16);
//! exif.push(directory);
//!
//! let buffer = exif.serialize()?;
//! let decoded = ExifMetadata::deserialize(&buffer, None)?;
//! assert_eq!(decoded.directories(), exif.directories());
//! # Ok::<(), exifscope::Error>(())
//! ```
//!
//! ### Reading and Editing
//!
//! ```rust,no_run
//! use exifscope::metadata::{exif::ExifMetadata, tags};
//!
//! let mut exif = ExifMetadata::from_file("image.exif", None)?;
//!
//! // Look up an entry by its path of tags.
//! if let Some(entry) = exif.find_entry(&[
//!     tags::ifd0::EXIF_OFFSET.clone(),
//!     tags::exif_ifd::DATE_TIME_ORIGINAL.clone(),
//! ])? {
//!     println!("Taken: {:?}", entry.value());
//! }
//!
//! // Edit and reserialize; all offsets are recomputed.
//! exif[0].set(&tags::ifd::ARTIST, "Phaeyz");
//! let buffer = exif.serialize()?;
//! # Ok::<(), exifscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `exifscope` is organized into a few key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`metadata`] - The directory object model, tag catalog, and wire codec
//! - [`io`] - Byte-order aware primitive reading and writing
//! - [`Error`] and [`Result`] - Error handling used throughout the crate
//!
//! The main entry point is [`metadata::exif::ExifMetadata`], which owns the byte order and
//! the root directory chain. Directories hold entries keyed by [`metadata::tag::Tag`], and
//! entry values may themselves hold child directory collections, forming a tree.
//!
//! ## Tag Behaviors
//!
//! EXIF is not a flat key-value format: some entries are pointers to child directories, some
//! are offsets to opaque blocks elsewhere in the buffer, and some come in offset-and-length
//! pairs. Each catalog tag carries a [`metadata::tag::TagBehavior`] telling the codec how to
//! treat entries with that tag, so callers see structured values instead of raw offsets.
//! Unknown tags decode as plain values with an anonymous name.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result) with detailed error information:
//!
//! ```rust
//! use exifscope::{metadata::exif::ExifMetadata, Error};
//!
//! match ExifMetadata::deserialize(&[0xFF, 0xD8], None) {
//!     Ok(exif) => println!("Decoded {} directories", exif.directories().len()),
//!     Err(Error::Malformed { message, .. }) => println!("Malformed buffer: {}", message),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use exifscope::prelude::*;
///
/// let exif = ExifMetadata::new();
/// assert_eq!(exif.byte_order(), ByteOrder::BigEndian);
/// ```
pub mod prelude;

/// Byte-order aware primitive access for the EXIF wire format.
///
/// [`io::ByteOrder`] pairs the header marker values (`II` and `MM`) with bounds-checked
/// reads of every primitive the wire format uses.
pub mod io;

/// The EXIF metadata object model, tag catalog, and wire codec.
///
/// # Key Components
///
/// - [`metadata::exif::ExifMetadata`] - Top-level entry point: header plus directory tree
/// - [`metadata::collection::ImageFileDirectoryCollection`] - A chain of directories
/// - [`metadata::directory::ImageFileDirectory`] - Entries keyed by tag
/// - [`metadata::entry::Entry`] - A tag, entry type, and decoded value
/// - [`metadata::tag::Tag`] - Tag identity plus serialization behavior
/// - [`metadata::provider::TagProvider`] - Registry resolving wire values to tags
/// - [`metadata::tags`] - The built-in tag catalog
///
/// # Examples
///
/// ```rust
/// use exifscope::metadata::{exif::ExifMetadata, tags};
///
/// let buffer = [0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x00];
/// let exif = ExifMetadata::deserialize(&buffer, None)?;
/// assert!(exif.directories().is_empty());
/// # Ok::<(), exifscope::Error>(())
/// ```
pub mod metadata;

/// `exifscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. Used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `exifscope` Error type
///
/// The main error type for all operations in this crate. Provides detailed error information
/// for buffer decoding, tag registration, and serialization.
pub use error::Error;
