//! Directory entries, their wire types, and their decoded values.
//!
//! An image file directory is a sequence of entries. On the wire each entry is a fixed
//! 12-byte record: the 16-bit tag value, the 16-bit [`EntryType`], a 32-bit element count,
//! and a 4-byte field that holds the value inline when it fits or an offset to the value
//! payload when it does not. In memory an entry pairs a resolved [`Tag`](crate::metadata::tag::Tag)
//! with a typed [`EntryValue`], and values that were indirect on the wire (child directories,
//! preserved blocks, offset-and-length data) are fully materialized.
//!
//! # Inline Packing
//!
//! Whether a value is inline depends on the type's element width and the count. Up to four
//! 8-bit elements, two 16-bit elements, or one 32-bit element fit inline. Rationals and
//! doubles are eight bytes wide and are always stored through an offset, even for a single
//! element.

use strum::{Display, FromRepr};

use crate::metadata::{
    collection::ImageFileDirectoryCollection,
    rational::{SignedRational, UnsignedRational},
    tag::TagRef,
};

/// The wire type of a directory entry, with the discriminant as serialized to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromRepr)]
#[repr(u16)]
pub enum EntryType {
    /// An unsigned 8-bit integer.
    Byte = 1,
    /// A NUL-terminated ASCII string.
    Ascii = 2,
    /// An unsigned 16-bit integer.
    UInt16 = 3,
    /// An unsigned 32-bit integer.
    UInt32 = 4,
    /// Two unsigned 32-bit integers forming a fraction.
    UnsignedRational = 5,
    /// A signed 8-bit integer.
    SByte = 6,
    /// An opaque byte sequence.
    ByteSequence = 7,
    /// A signed 16-bit integer.
    Int16 = 8,
    /// A signed 32-bit integer.
    Int32 = 9,
    /// Two signed 32-bit integers forming a fraction.
    SignedRational = 10,
    /// A 32-bit IEEE 754 float.
    Single = 11,
    /// A 64-bit IEEE 754 float.
    Double = 12,
}

impl EntryType {
    /// The width in bytes of a single element of this type.
    #[must_use]
    pub fn element_size(self) -> usize {
        match self {
            EntryType::Byte | EntryType::Ascii | EntryType::SByte | EntryType::ByteSequence => 1,
            EntryType::UInt16 | EntryType::Int16 => 2,
            EntryType::UInt32 | EntryType::Int32 | EntryType::Single => 4,
            EntryType::UnsignedRational | EntryType::SignedRational | EntryType::Double => 8,
        }
    }

    /// The maximum number of elements of this type that fit in the 4-byte inline value field.
    /// Rationals and doubles never fit and always go through an offset.
    #[must_use]
    pub fn inline_capacity(self) -> usize {
        match self {
            EntryType::UnsignedRational | EntryType::SignedRational | EntryType::Double => 0,
            other => 4 / other.element_size(),
        }
    }
}

/// A decoded entry value.
///
/// Scalar and array forms are distinct variants so a round trip preserves whether the wire
/// count was one or many. Child directories appear as [`EntryValue::Ifd`] for a single
/// pointer and [`EntryValue::IfdArray`] for the rare multi-pointer pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValue {
    /// An ASCII string. The wire form carries a trailing NUL which is not part of the value.
    Ascii(String),
    /// A single unsigned byte.
    Byte(u8),
    /// Multiple unsigned bytes, or an opaque byte sequence.
    Bytes(Vec<u8>),
    /// A single signed byte.
    SByte(i8),
    /// Multiple signed bytes.
    SBytes(Vec<i8>),
    /// A single unsigned 16-bit integer.
    UInt16(u16),
    /// Multiple unsigned 16-bit integers.
    UInt16Array(Vec<u16>),
    /// A single signed 16-bit integer.
    Int16(i16),
    /// Multiple signed 16-bit integers.
    Int16Array(Vec<i16>),
    /// A single unsigned 32-bit integer.
    UInt32(u32),
    /// Multiple unsigned 32-bit integers.
    UInt32Array(Vec<u32>),
    /// A single signed 32-bit integer.
    Int32(i32),
    /// Multiple signed 32-bit integers.
    Int32Array(Vec<i32>),
    /// A single 32-bit float.
    Single(f32),
    /// Multiple 32-bit floats.
    SingleArray(Vec<f32>),
    /// A single 64-bit float.
    Double(f64),
    /// Multiple 64-bit floats.
    DoubleArray(Vec<f64>),
    /// A single unsigned rational.
    UnsignedRational(UnsignedRational),
    /// Multiple unsigned rationals.
    UnsignedRationalArray(Vec<UnsignedRational>),
    /// A single signed rational.
    SignedRational(SignedRational),
    /// Multiple signed rationals.
    SignedRationalArray(Vec<SignedRational>),
    /// A child image file directory chain.
    Ifd(ImageFileDirectoryCollection),
    /// Multiple child image file directory chains (the multi-pointer pattern).
    IfdArray(Vec<ImageFileDirectoryCollection>),
}

impl EntryValue {
    /// The wire type inferred from the value shape. Byte arrays infer as
    /// [`EntryType::ByteSequence`] and directory values as [`EntryType::UInt32`] offsets.
    #[must_use]
    pub fn inferred_type(&self) -> EntryType {
        match self {
            EntryValue::Ascii(_) => EntryType::Ascii,
            EntryValue::Byte(_) => EntryType::Byte,
            EntryValue::Bytes(_) => EntryType::ByteSequence,
            EntryValue::SByte(_) | EntryValue::SBytes(_) => EntryType::SByte,
            EntryValue::UInt16(_) | EntryValue::UInt16Array(_) => EntryType::UInt16,
            EntryValue::Int16(_) | EntryValue::Int16Array(_) => EntryType::Int16,
            EntryValue::UInt32(_) | EntryValue::UInt32Array(_) => EntryType::UInt32,
            EntryValue::Int32(_) | EntryValue::Int32Array(_) => EntryType::Int32,
            EntryValue::Single(_) | EntryValue::SingleArray(_) => EntryType::Single,
            EntryValue::Double(_) | EntryValue::DoubleArray(_) => EntryType::Double,
            EntryValue::UnsignedRational(_) | EntryValue::UnsignedRationalArray(_) => {
                EntryType::UnsignedRational
            }
            EntryValue::SignedRational(_) | EntryValue::SignedRationalArray(_) => {
                EntryType::SignedRational
            }
            EntryValue::Ifd(_) | EntryValue::IfdArray(_) => EntryType::UInt32,
        }
    }

    /// The element count as serialized to the wire. Strings count their trailing NUL.
    #[must_use]
    pub fn element_count(&self) -> usize {
        match self {
            EntryValue::Ascii(value) => value.len() + 1,
            EntryValue::Bytes(value) => value.len(),
            EntryValue::SBytes(value) => value.len(),
            EntryValue::UInt16Array(value) => value.len(),
            EntryValue::Int16Array(value) => value.len(),
            EntryValue::UInt32Array(value) => value.len(),
            EntryValue::Int32Array(value) => value.len(),
            EntryValue::SingleArray(value) => value.len(),
            EntryValue::DoubleArray(value) => value.len(),
            EntryValue::UnsignedRationalArray(value) => value.len(),
            EntryValue::SignedRationalArray(value) => value.len(),
            EntryValue::IfdArray(value) => value.len(),
            _ => 1,
        }
    }

    /// The numeric value as a `u32` offset. Only the 32-bit scalar variants carry offsets.
    pub(crate) fn as_offset(&self) -> Option<u32> {
        match self {
            EntryValue::UInt32(value) => Some(*value),
            EntryValue::Int32(value) => Some(*value as u32),
            _ => None,
        }
    }
}

macro_rules! value_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for EntryValue {
            fn from(value: $ty) -> Self {
                EntryValue::$variant(value)
            }
        }
    };
}

value_from!(u8, Byte);
value_from!(Vec<u8>, Bytes);
value_from!(i8, SByte);
value_from!(Vec<i8>, SBytes);
value_from!(u16, UInt16);
value_from!(Vec<u16>, UInt16Array);
value_from!(i16, Int16);
value_from!(Vec<i16>, Int16Array);
value_from!(u32, UInt32);
value_from!(Vec<u32>, UInt32Array);
value_from!(i32, Int32);
value_from!(Vec<i32>, Int32Array);
value_from!(f32, Single);
value_from!(Vec<f32>, SingleArray);
value_from!(f64, Double);
value_from!(Vec<f64>, DoubleArray);
value_from!(UnsignedRational, UnsignedRational);
value_from!(Vec<UnsignedRational>, UnsignedRationalArray);
value_from!(SignedRational, SignedRational);
value_from!(Vec<SignedRational>, SignedRationalArray);
value_from!(String, Ascii);
value_from!(ImageFileDirectoryCollection, Ifd);
value_from!(Vec<ImageFileDirectoryCollection>, IfdArray);

impl From<&str> for EntryValue {
    fn from(value: &str) -> Self {
        EntryValue::Ascii(value.to_string())
    }
}

impl From<&[u8]> for EntryValue {
    fn from(value: &[u8]) -> Self {
        EntryValue::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for EntryValue {
    fn from(value: [u8; N]) -> Self {
        EntryValue::Bytes(value.to_vec())
    }
}

/// A single entry of an image file directory: a tag, a wire type, and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    tag: TagRef,
    entry_type: EntryType,
    value: EntryValue,
}

impl Entry {
    /// Creates an entry with the wire type inferred from the value shape.
    pub fn new(tag: &TagRef, value: impl Into<EntryValue>) -> Self {
        let value = value.into();
        Entry {
            tag: TagRef::clone(tag),
            entry_type: value.inferred_type(),
            value,
        }
    }

    /// Creates an entry with an explicit wire type, for cases where the stored value shape
    /// differs from the serialized type (such as directory pointers carried as offsets).
    pub fn with_type(tag: &TagRef, entry_type: EntryType, value: impl Into<EntryValue>) -> Self {
        Entry {
            tag: TagRef::clone(tag),
            entry_type,
            value: value.into(),
        }
    }

    /// The tag identifying this entry.
    #[must_use]
    pub fn tag(&self) -> &TagRef {
        &self.tag
    }

    /// The wire type of this entry.
    #[must_use]
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// The decoded value of this entry.
    #[must_use]
    pub fn value(&self) -> &EntryValue {
        &self.value
    }

    /// Mutable access to the decoded value.
    pub fn value_mut(&mut self) -> &mut EntryValue {
        &mut self.value
    }
}

/// One step along a path of directory pointer entries.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryPathStep {
    /// The pointer tag whose entry was followed.
    pub tag: TagRef,
    /// Which pointer of a multi-pointer entry was followed.
    pub pointer: usize,
    /// The index of the directory containing the pointer entry within its chain.
    pub directory: usize,
}

/// A stable reference to an entry inside a directory tree, addressed by the pointer path
/// from the root collection.
///
/// References returned by decoding remain valid as long as the directory structure is not
/// rearranged; they are resolved with
/// [`ImageFileDirectoryCollection::entry_at`](crate::metadata::collection::ImageFileDirectoryCollection::entry_at).
#[derive(Debug, Clone, PartialEq)]
pub struct EntryReference {
    /// The pointer entries to follow from the root collection, outermost first.
    pub path: Vec<EntryPathStep>,
    /// The index of the directory containing the entry within the final chain.
    pub directory: usize,
    /// The tag of the referenced entry.
    pub tag: TagRef,
}
