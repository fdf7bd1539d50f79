//! Tag identities and serialization behaviors for directory entries.
//!
//! Every entry in an image file directory is keyed by a [`Tag`]. A tag couples the 16-bit wire
//! value with the structural knowledge the codec needs: which parent directory the tag lives
//! under, which directory index it is pinned to (if any), and the [`TagBehavior`] that drives
//! special decoding and encoding rules such as child directory pointers, preserved data blocks,
//! and offset-and-length pairs.
//!
//! # Architecture
//!
//! Tags are immutable and shared as [`TagRef`] (an `Arc<Tag>`), forming a parent DAG rooted at
//! [`Tag::root`]. The root tag is a process-wide static; it is never written to the wire and
//! only marks the outermost directory chain. Tag identity (equality, hashing, match scoring)
//! considers the wire value, the declared index, and the parent chain - names, aliases, and
//! behaviors are deliberately ignored so a renamed tag still matches its entries.
//!
//! # Usage Examples
//!
//! ```rust
//! use exifscope::metadata::tag::Tag;
//!
//! let gps_info = Tag::ifd_pointer(Some(Tag::root()), None, 0x8825, "GPSInfo")?;
//! let date_stamp = Tag::standard(Some(&gps_info), None, 0x001D, "GPSDateStamp")?;
//! assert_eq!(date_stamp.parent(), Some(&gps_info));
//! # Ok::<(), exifscope::Error>(())
//! ```

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, LazyLock},
};

use strum::Display;

use crate::Result;

/// A shared, immutable reference to a [`Tag`].
pub type TagRef = Arc<Tag>;

static ROOT: LazyLock<TagRef> = LazyLock::new(|| {
    Arc::new(Tag {
        value: 0,
        index: None,
        name: "Root".to_string(),
        behavior: TagBehavior::Root,
        parent: None,
        related: None,
        aliases: Vec::new(),
    })
});

/// Special behavior of a tag used while serializing and deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TagBehavior {
    /// The synthetic root of the directory tree. Never serialized.
    Root,
    /// A plain value with no special handling.
    StandardValue,
    /// A plain value which is known to reference buffer positions that will be stale after
    /// reserialization. Decoding surfaces these entries so callers can intervene.
    CannotRoundTrip,
    /// The value is an offset to an opaque block of unknown length. Decoding preserves the
    /// block bytes on a best-effort basis.
    PreserveDataBlock,
    /// The value is one or more offsets to child image file directory chains.
    IfdPointer,
    /// Like [`TagBehavior::IfdPointer`], but offsets inside the child directory are relative
    /// to the first byte of that directory instead of the start of the buffer.
    ScopedIfdPointer,
    /// The value is an offset to a data block whose length is carried by a companion length
    /// tag. The pair collapses to a single byte-sequence entry on decode.
    OffsetAndLengthPair,
}

/// An alternate name for a tag in an external naming scheme, such as exiv2 keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagAlias {
    /// The fully qualified alias, such as `Exif.Image.ImageWidth`.
    pub key: String,
    /// The alias group, such as `Image`.
    pub group: String,
}

/// Identifies an entry value within an image file directory.
///
/// Equality, hashing, and match scoring consider only the wire value, the declared index, and
/// the parent chain. See the [module docs](self) for details.
#[derive(Debug)]
pub struct Tag {
    value: u16,
    index: Option<u32>,
    name: String,
    behavior: TagBehavior,
    parent: Option<TagRef>,
    related: Option<TagRef>,
    aliases: Vec<TagAlias>,
}

impl Tag {
    /// The root tag, marking the outermost directory chain. It is never serialized or
    /// deserialized and may not be registered in a provider.
    pub fn root() -> &'static TagRef {
        &ROOT
    }

    fn create(
        parent: Option<&TagRef>,
        index: Option<u32>,
        value: u16,
        name: Option<&str>,
        behavior: TagBehavior,
        related: Option<TagRef>,
        aliases: &[(&str, &str)],
    ) -> Result<TagRef> {
        if let Some(parent) = parent {
            if !matches!(
                parent.behavior,
                TagBehavior::Root | TagBehavior::IfdPointer | TagBehavior::ScopedIfdPointer
            ) {
                return Err(crate::Error::InvalidTag(format!(
                    "a parent tag must be a directory pointer or the root, got {parent}"
                )));
            }
        }

        if behavior == TagBehavior::Root {
            return Err(crate::Error::InvalidTag(
                "cannot create a root tag".to_string(),
            ));
        }

        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Tag 0x{value:04X}"),
        };

        Ok(Arc::new(Tag {
            value,
            index,
            name,
            behavior,
            parent: parent.cloned(),
            related,
            aliases: aliases
                .iter()
                .map(|(key, group)| TagAlias {
                    key: (*key).to_string(),
                    group: (*group).to_string(),
                })
                .collect(),
        }))
    }

    /// Creates a tag with an explicit behavior and alias set. This is the general-purpose
    /// constructor used to build tag catalogs; the behavior-specific constructors below are
    /// usually more convenient.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] if the parent is not a directory pointer or the
    /// root, or if the behavior is [`TagBehavior::Root`] or [`TagBehavior::OffsetAndLengthPair`]
    /// (the latter requires [`Tag::offset_and_length_pair`] so the companion length tag exists).
    pub fn new(
        parent: Option<&TagRef>,
        index: Option<u32>,
        value: u16,
        name: Option<&str>,
        behavior: TagBehavior,
        aliases: &[(&str, &str)],
    ) -> Result<TagRef> {
        if behavior == TagBehavior::OffsetAndLengthPair {
            return Err(crate::Error::InvalidTag(
                "offset-and-length pairs require a companion length tag".to_string(),
            ));
        }
        Tag::create(parent, index, value, name, behavior, None, aliases)
    }

    /// Creates a standard value tag.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] if the parent is not a directory pointer or the root.
    pub fn standard(
        parent: Option<&TagRef>,
        index: Option<u32>,
        value: u16,
        name: &str,
    ) -> Result<TagRef> {
        Tag::create(
            parent,
            index,
            value,
            Some(name),
            TagBehavior::StandardValue,
            None,
            &[],
        )
    }

    /// Creates a tag whose entries are reported as unable to round trip. Decoding collects
    /// references to such entries so the caller can fix them up or drop them before encoding.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] if the parent is not a directory pointer or the root.
    pub fn cannot_round_trip(
        parent: Option<&TagRef>,
        index: Option<u32>,
        value: u16,
        name: &str,
    ) -> Result<TagRef> {
        Tag::create(
            parent,
            index,
            value,
            Some(name),
            TagBehavior::CannotRoundTrip,
            None,
            &[],
        )
    }

    /// Creates a directory pointer tag.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] if the parent is not a directory pointer or the root.
    pub fn ifd_pointer(
        parent: Option<&TagRef>,
        index: Option<u32>,
        value: u16,
        name: &str,
    ) -> Result<TagRef> {
        Tag::create(
            parent,
            index,
            value,
            Some(name),
            TagBehavior::IfdPointer,
            None,
            &[],
        )
    }

    /// Creates a directory pointer tag which opens a new offset scope. All offsets within the
    /// pointed-to directory are relative to its first byte instead of the start of the buffer.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] if the parent is not a directory pointer or the root.
    pub fn scoped_ifd_pointer(
        parent: Option<&TagRef>,
        index: Option<u32>,
        value: u16,
        name: &str,
    ) -> Result<TagRef> {
        Tag::create(
            parent,
            index,
            value,
            Some(name),
            TagBehavior::ScopedIfdPointer,
            None,
            &[],
        )
    }

    /// Creates a tag whose value is an offset to a data block of unknown size. Decoding makes
    /// a best effort to preserve the block bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] if the parent is not a directory pointer or the root.
    pub fn preserve_data_block(
        parent: Option<&TagRef>,
        index: Option<u32>,
        value: u16,
        name: &str,
    ) -> Result<TagRef> {
        Tag::create(
            parent,
            index,
            value,
            Some(name),
            TagBehavior::PreserveDataBlock,
            None,
            &[],
        )
    }

    /// Creates an offset-and-length pair tag. The returned tag is the offset tag; the companion
    /// length tag is created internally and available through [`Tag::related`].
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] if the parent is not a directory pointer or the root.
    pub fn offset_and_length_pair(
        parent: Option<&TagRef>,
        index: Option<u32>,
        offset_value: u16,
        offset_name: &str,
        length_value: u16,
        length_name: &str,
        aliases: &[(&str, &str)],
    ) -> Result<TagRef> {
        let length_name = if length_name.is_empty() {
            format!("{offset_name} (Length)")
        } else {
            length_name.to_string()
        };
        let length_tag = Tag::create(
            parent,
            index,
            length_value,
            Some(&length_name),
            TagBehavior::StandardValue,
            None,
            &[],
        )?;
        Tag::create(
            parent,
            index,
            offset_value,
            Some(offset_name),
            TagBehavior::OffsetAndLengthPair,
            Some(length_tag),
            aliases,
        )
    }

    /// Creates an anonymous standard tag for an unrecognized wire value encountered during
    /// decoding, pinned to the parent directory and index it was found at.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] if the parent is not a directory pointer or the root.
    pub fn unnamed(parent: &TagRef, index: u32, value: u16) -> Result<TagRef> {
        Tag::create(
            Some(parent),
            Some(index),
            value,
            None,
            TagBehavior::StandardValue,
            None,
            &[],
        )
    }

    /// The 16-bit value of the tag as it is serialized to the wire.
    #[must_use]
    pub fn value(&self) -> u16 {
        self.value
    }

    /// The index of the parent directory set this tag must exist within, or `None` if the tag
    /// may appear in any directory of the parent.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    /// A friendly name for the tag. Only used for debugging.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The serialization behavior of the tag.
    #[must_use]
    pub fn behavior(&self) -> TagBehavior {
        self.behavior
    }

    /// The parent directory tag this tag must exist under, or `None` if the tag may appear
    /// under any parent.
    #[must_use]
    pub fn parent(&self) -> Option<&TagRef> {
        self.parent.as_ref()
    }

    /// A tag related to this one. Only used by [`TagBehavior::OffsetAndLengthPair`], where it
    /// holds the companion length tag.
    #[must_use]
    pub fn related(&self) -> Option<&TagRef> {
        self.related.as_ref()
    }

    /// Alternate names for this tag in external naming schemes.
    #[must_use]
    pub fn aliases(&self) -> &[TagAlias] {
        &self.aliases
    }

    /// Whether this is the root tag.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.behavior == TagBehavior::Root
    }

    /// Whether this tag points at child image file directories.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self.behavior,
            TagBehavior::IfdPointer | TagBehavior::ScopedIfdPointer
        )
    }

    /// Scores how closely a wire occurrence matches this tag.
    ///
    /// The score is 0 if the wire value differs, or if a declared index or parent contradicts
    /// the occurrence. Otherwise the value match contributes 1 point and a satisfied declared
    /// index or parent contributes 1 point each, for a maximum of 3. Undeclared criteria are
    /// wildcards and neither contribute nor disqualify.
    #[must_use]
    pub fn match_score(&self, value: u16, parent: &TagRef, index: u32) -> u32 {
        if self.value != value {
            return 0;
        }

        let mut score = 1;

        if let Some(declared) = self.index {
            if declared != index {
                return 0;
            }
            score += 1;
        }

        if let Some(declared) = &self.parent {
            if declared.is_root() != parent.is_root()
                || (!declared.is_root() && declared.tag_match_score(parent) == 0)
            {
                return 0;
            }
            score += 1;
        }

        score
    }

    /// Scores how closely another tag matches this tag, using the same rules as
    /// [`Tag::match_score`] with criteria compared only when declared on both sides.
    #[must_use]
    pub fn tag_match_score(&self, tag: &Tag) -> u32 {
        if self.value != tag.value {
            return 0;
        }

        let mut score = 1;

        if let (Some(declared), Some(other)) = (self.index, tag.index) {
            if declared != other {
                return 0;
            }
            score += 1;
        }

        if let (Some(declared), Some(other)) = (&self.parent, &tag.parent) {
            if declared.is_root() != other.is_root()
                || (!declared.is_root() && declared.tag_match_score(other) == 0)
            {
                return 0;
            }
            score += 1;
        }

        score
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        let parents_equal = match (&self.parent, &other.parent) {
            (None, None) => true,
            (Some(a), Some(b)) => a.is_root() == b.is_root() && (a.is_root() || a == b),
            _ => false,
        };
        self.is_root() == other.is_root()
            && self.value == other.value
            && self.index == other.index
            && parents_equal
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.index.hash(state);
        self.is_root().hash(state);
        match &self.parent {
            None => state.write_u8(0),
            Some(parent) if parent.is_root() => state.write_u8(1),
            Some(parent) => {
                state.write_u8(2);
                parent.hash(state);
            }
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name, self.value)?;
        if !self.aliases.is_empty() {
            write!(f, " [")?;
            for (i, alias) in self.aliases.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", alias.key)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_root() {
        assert!(Tag::root().is_root());
        assert_eq!(Tag::root().value(), 0);
        assert_eq!(Tag::root().index(), None);
    }

    #[test]
    fn root_behavior_cannot_be_created() {
        assert!(Tag::new(None, None, 1, Some("X"), TagBehavior::Root, &[]).is_err());
    }

    #[test]
    fn parent_must_be_pointer_or_root() {
        let standard = Tag::standard(None, None, 0x0100, "ImageWidth").unwrap();
        assert!(Tag::standard(Some(&standard), None, 0x0101, "ImageHeight").is_err());

        let pointer = Tag::ifd_pointer(Some(Tag::root()), None, 0x8769, "ExifOffset").unwrap();
        assert!(Tag::standard(Some(&pointer), None, 0x9000, "ExifVersion").is_ok());
    }

    #[test]
    fn unnamed_tag_gets_hex_name() {
        let tag = Tag::unnamed(Tag::root(), 0, 0xBEEF).unwrap();
        assert_eq!(tag.name(), "Tag 0xBEEF");
    }

    #[test]
    fn equality_ignores_name_and_behavior() {
        let a = Tag::standard(Some(Tag::root()), None, 0x1234, "A").unwrap();
        let b = Tag::cannot_round_trip(Some(Tag::root()), None, 0x1234, "B").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn equality_considers_index_and_parent() {
        let no_index = Tag::standard(Some(Tag::root()), None, 0x1234, "A").unwrap();
        let indexed = Tag::standard(Some(Tag::root()), Some(0), 0x1234, "A").unwrap();
        assert_ne!(no_index, indexed);

        let no_parent = Tag::standard(None, None, 0x1234, "A").unwrap();
        assert_ne!(no_index, no_parent);
        assert_ne!(&**Tag::root(), &*no_parent);
    }

    #[test]
    fn non_root_parents_compare_recursively() {
        let exif = Tag::ifd_pointer(Some(Tag::root()), None, 0x8769, "ExifOffset").unwrap();
        let interop_a = Tag::ifd_pointer(Some(&exif), None, 0xA005, "Interop").unwrap();
        let interop_b = Tag::ifd_pointer(Some(&exif), None, 0xA005, "Renamed").unwrap();
        assert_eq!(interop_a, interop_b);

        let gps = Tag::ifd_pointer(Some(Tag::root()), None, 0x8825, "GPSInfo").unwrap();
        let under_gps = Tag::ifd_pointer(Some(&gps), None, 0xA005, "Interop").unwrap();
        assert_ne!(interop_a, under_gps);
    }

    #[test]
    fn match_score_value_mismatch_is_zero() {
        let tag = Tag::standard(None, None, 0x1234, "A").unwrap();
        assert_eq!(tag.match_score(0x1235, Tag::root(), 0), 0);
    }

    #[test]
    fn match_score_wildcards_and_points() {
        let wildcard = Tag::standard(None, None, 0x1234, "A").unwrap();
        assert_eq!(wildcard.match_score(0x1234, Tag::root(), 7), 1);

        let indexed = Tag::standard(None, Some(1), 0x1234, "A").unwrap();
        assert_eq!(indexed.match_score(0x1234, Tag::root(), 1), 2);
        assert_eq!(indexed.match_score(0x1234, Tag::root(), 2), 0);

        let parented = Tag::standard(Some(Tag::root()), None, 0x1234, "A").unwrap();
        assert_eq!(parented.match_score(0x1234, Tag::root(), 0), 2);

        let full = Tag::standard(Some(Tag::root()), Some(1), 0x1234, "A").unwrap();
        assert_eq!(full.match_score(0x1234, Tag::root(), 1), 3);
    }

    #[test]
    fn match_score_root_parent_rejects_non_root() {
        let parented = Tag::standard(Some(Tag::root()), None, 0x1234, "A").unwrap();
        let exif = Tag::ifd_pointer(Some(Tag::root()), None, 0x8769, "ExifOffset").unwrap();
        assert_eq!(parented.match_score(0x1234, &exif, 0), 0);
    }

    #[test]
    fn offset_and_length_pair_builds_companion() {
        let pair = Tag::offset_and_length_pair(
            Some(Tag::root()),
            None,
            0x0201,
            "ThumbnailOffset",
            0x0202,
            "ThumbnailLength",
            &[],
        )
        .unwrap();
        assert_eq!(pair.behavior(), TagBehavior::OffsetAndLengthPair);
        let related = pair.related().unwrap();
        assert_eq!(related.value(), 0x0202);
        assert_eq!(related.behavior(), TagBehavior::StandardValue);
        assert_eq!(related.name(), "ThumbnailLength");
    }
}
