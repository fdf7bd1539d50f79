//! Tag registry used to resolve wire values to known tags during decoding.
//!
//! A [`TagProvider`] maps 16-bit wire values to candidate [`Tag`]s. Because EXIF reuses wire
//! values across different directories (a value may mean one thing in IFD0 and another inside
//! a maker note), candidates are scored against the directory context they were encountered
//! in and the best match wins. The built-in provider returned by [`TagProvider::built_in`]
//! carries the standard TIFF, EXIF, GPS, and interoperability tags and is frozen; callers
//! needing custom tags start from [`TagProvider::to_mutable`].
//!
//! # Thread Safety
//!
//! Providers share their tag table behind an `Arc<RwLock>`. A read-only view created with
//! [`TagProvider::as_read_only`] observes later mutations of the provider it was created
//! from, mirroring how the frozen view is a window rather than a snapshot.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::{
    metadata::tag::{Tag, TagRef},
    Result,
};

type TagTable = HashMap<u16, Vec<TagRef>>;

/// A registry of tags consulted during deserialization to determine tag behaviors.
pub struct TagProvider {
    tags: Arc<RwLock<TagTable>>,
    read_only: bool,
}

impl TagProvider {
    /// Creates a new empty, mutable tag provider.
    #[must_use]
    pub fn new() -> Self {
        TagProvider {
            tags: Arc::new(RwLock::new(HashMap::new())),
            read_only: false,
        }
    }

    /// The built-in provider containing the standard tag catalog. It is read-only; use
    /// [`TagProvider::to_mutable`] to derive a provider that accepts additional tags.
    pub fn built_in() -> &'static TagProvider {
        crate::metadata::tags::built_in()
    }

    /// Whether this provider rejects mutation.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Creates an independent, mutable copy of this provider. Later changes to either
    /// provider are not visible in the other.
    #[must_use]
    pub fn to_mutable(&self) -> TagProvider {
        let tags = read_lock!(self.tags);
        TagProvider {
            tags: Arc::new(RwLock::new(tags.clone())),
            read_only: false,
        }
    }

    /// Creates a read-only view of this provider. The view shares the tag table, so further
    /// modifications through `self` remain visible in the view.
    #[must_use]
    pub fn as_read_only(&self) -> TagProvider {
        TagProvider {
            tags: Arc::clone(&self.tags),
            read_only: true,
        }
    }

    fn check_mutable(&self, tag: &TagRef) -> Result<()> {
        if tag.is_root() {
            return Err(crate::Error::InvalidTag(
                "may not add or remove the root tag".to_string(),
            ));
        }
        if self.read_only {
            return Err(crate::Error::ReadOnlyTagProvider);
        }
        Ok(())
    }

    /// Adds a tag to the provider. The tag's parent and related tags, if any, are added as
    /// well. Returns `true` if the tag was added, or `false` if an equivalent tag already
    /// exists (in which case the existing registration is kept).
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] for the root tag and
    /// [`crate::Error::ReadOnlyTagProvider`] if the provider is frozen.
    pub fn add(&self, tag: &TagRef) -> Result<bool> {
        self.check_mutable(tag)?;

        if let Some(parent) = tag.parent() {
            if !parent.is_root() {
                self.add(parent)?;
            }
        }
        if let Some(related) = tag.related() {
            if !related.is_root() {
                self.add(related)?;
            }
        }

        let mut tags = write_lock!(self.tags);
        let bucket = tags.entry(tag.value()).or_default();
        if bucket.iter().any(|existing| existing == tag) {
            return Ok(false);
        }
        bucket.push(Arc::clone(tag));
        Ok(true)
    }

    /// Adds a tag to the provider, replacing any equivalent registration. The replacement
    /// becomes the most recently registered candidate for its wire value, which makes it win
    /// score ties against older registrations. The tag's parent and related tags are added
    /// or updated as well. Returns `true` if no equivalent tag previously existed.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] for the root tag and
    /// [`crate::Error::ReadOnlyTagProvider`] if the provider is frozen.
    pub fn add_or_update(&self, tag: &TagRef) -> Result<bool> {
        self.check_mutable(tag)?;

        if let Some(parent) = tag.parent() {
            if !parent.is_root() {
                self.add_or_update(parent)?;
            }
        }
        if let Some(related) = tag.related() {
            if !related.is_root() {
                self.add_or_update(related)?;
            }
        }

        let mut tags = write_lock!(self.tags);
        let bucket = tags.entry(tag.value()).or_default();
        let added = match bucket.iter().position(|existing| existing == tag) {
            Some(position) => {
                bucket.remove(position);
                false
            }
            None => true,
        };
        bucket.push(Arc::clone(tag));
        Ok(added)
    }

    /// Adds every tag of an iterator to the provider.
    ///
    /// # Errors
    /// Propagates the first error from [`TagProvider::add`].
    pub fn add_all<'a, I: IntoIterator<Item = &'a TagRef>>(&self, tags: I) -> Result<()> {
        for tag in tags {
            self.add(tag)?;
        }
        Ok(())
    }

    /// Removes a tag from the provider. Parent and related tags are left registered.
    /// Returns `true` if an equivalent tag existed and was removed.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTag`] for the root tag and
    /// [`crate::Error::ReadOnlyTagProvider`] if the provider is frozen.
    pub fn remove(&self, tag: &TagRef) -> Result<bool> {
        self.check_mutable(tag)?;

        let mut tags = write_lock!(self.tags);
        if let Some(bucket) = tags.get_mut(&tag.value()) {
            if let Some(position) = bucket.iter().position(|existing| existing == tag) {
                bucket.remove(position);
                if bucket.is_empty() {
                    tags.remove(&tag.value());
                }
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether an equivalent tag exists in the provider. The root tag is never contained.
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        if tag.is_root() {
            return false;
        }
        let tags = read_lock!(self.tags);
        tags.get(&tag.value())
            .is_some_and(|bucket| bucket.iter().any(|existing| &**existing == tag))
    }

    /// Snapshots all registered tags, optionally filtered to a wire value.
    #[must_use]
    pub fn tags(&self, value: Option<u16>) -> Vec<TagRef> {
        let tags = read_lock!(self.tags);
        match value {
            Some(value) => tags.get(&value).cloned().unwrap_or_default(),
            None => tags.values().flatten().cloned().collect(),
        }
    }

    /// Finds the registered tag that best matches a wire occurrence, scored with
    /// [`Tag::match_score`] against the directory context. Returns `None` when no candidate
    /// scores above zero. Ties go to the most recently registered candidate, so callers can
    /// override built-in tags by registering their own.
    #[must_use]
    pub fn match_tag(&self, value: u16, parent: &TagRef, index: u32) -> Option<TagRef> {
        let tags = read_lock!(self.tags);
        let bucket = tags.get(&value)?;

        let mut best_score = 0;
        let mut best_tag = None;
        for tag in bucket {
            let score = tag.match_score(value, parent, index);
            if score > 0 && score >= best_score {
                best_score = score;
                best_tag = Some(Arc::clone(tag));
            }
        }
        best_tag
    }
}

impl Default for TagProvider {
    fn default() -> Self {
        TagProvider::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tags() -> (TagRef, TagRef, TagRef, TagRef) {
        (
            Tag::standard(None, None, 0x1234, "NoParentNoIndex").unwrap(),
            Tag::standard(None, Some(1), 0x1234, "NoParentIndex1").unwrap(),
            Tag::standard(Some(Tag::root()), None, 0x1234, "RootParentNoIndex").unwrap(),
            Tag::standard(Some(Tag::root()), Some(1), 0x1234, "RootParentIndex1").unwrap(),
        )
    }

    fn sample_provider() -> (TagProvider, (TagRef, TagRef, TagRef, TagRef)) {
        let tags = sample_tags();
        let provider = TagProvider::new();
        provider
            .add_all([&tags.0, &tags.1, &tags.2, &tags.3])
            .unwrap();
        (provider, tags)
    }

    #[test]
    fn add_rejects_root() {
        let provider = TagProvider::new();
        assert!(provider.add(Tag::root()).is_err());
    }

    #[test]
    fn add_is_idempotent_for_equivalent_tags() {
        let provider = TagProvider::new();
        let a = Tag::standard(None, None, 0x1234, "A").unwrap();
        let b = Tag::standard(None, None, 0x1234, "B").unwrap();
        assert!(provider.add(&a).unwrap());
        assert!(!provider.add(&b).unwrap());
        assert_eq!(provider.tags(Some(0x1234))[0].name(), "A");
    }

    #[test]
    fn add_registers_parent_and_related() {
        let provider = TagProvider::new();
        let pair = Tag::offset_and_length_pair(
            Some(Tag::root()),
            None,
            0xA010,
            "RawOffset",
            0xA011,
            "RawLength",
            &[],
        )
        .unwrap();
        let pointer = Tag::ifd_pointer(Some(Tag::root()), None, 0x8769, "ExifOffset").unwrap();
        let child = Tag::standard(Some(&pointer), None, 0x9000, "ExifVersion").unwrap();
        provider.add(&pair).unwrap();
        provider.add(&child).unwrap();
        assert!(provider.contains(pair.related().unwrap()));
        assert!(provider.contains(&pointer));
    }

    #[test]
    fn add_or_update_replaces_and_wins_ties() {
        let provider = TagProvider::new();
        let a = Tag::standard(None, None, 0x1234, "A").unwrap();
        let b = Tag::standard(None, None, 0x1234, "B").unwrap();
        assert!(provider.add_or_update(&a).unwrap());
        assert!(!provider.add_or_update(&b).unwrap());
        let matched = provider.match_tag(0x1234, Tag::root(), 0).unwrap();
        assert_eq!(matched.name(), "B");
    }

    #[test]
    fn read_only_rejects_mutation() {
        let (provider, (a, ..)) = sample_provider();
        let frozen = provider.as_read_only();
        assert!(matches!(
            frozen.add(&a),
            Err(crate::Error::ReadOnlyTagProvider)
        ));
        assert!(matches!(
            frozen.remove(&a),
            Err(crate::Error::ReadOnlyTagProvider)
        ));
        assert!(frozen.contains(&a));
    }

    #[test]
    fn read_only_view_sees_later_additions() {
        let provider = TagProvider::new();
        let frozen = provider.as_read_only();
        let a = Tag::standard(None, None, 0x1234, "A").unwrap();
        provider.add(&a).unwrap();
        assert!(frozen.contains(&a));
    }

    #[test]
    fn to_mutable_is_independent() {
        let (provider, (a, ..)) = sample_provider();
        let copy = provider.to_mutable();
        copy.remove(&a).unwrap();
        assert!(provider.contains(&a));
        assert!(!copy.contains(&a));
    }

    #[test]
    fn match_prefers_higher_scores() {
        let (provider, (no_parent_no_index, no_parent_index1, root_no_index, root_index1)) =
            sample_provider();

        let exif = Tag::ifd_pointer(Some(Tag::root()), None, 0x8769, "ExifOffset").unwrap();

        // Under a non-root parent only the parentless candidates qualify.
        let matched = provider.match_tag(0x1234, &exif, 1).unwrap();
        assert_eq!(&matched, &no_parent_index1);
        let matched = provider.match_tag(0x1234, &exif, 2).unwrap();
        assert_eq!(&matched, &no_parent_no_index);

        // Under the root the parented candidates outscore them.
        let matched = provider.match_tag(0x1234, Tag::root(), 1).unwrap();
        assert_eq!(&matched, &root_index1);
        let matched = provider.match_tag(0x1234, Tag::root(), 2).unwrap();
        assert_eq!(&matched, &root_no_index);
    }

    #[test]
    fn match_returns_none_without_candidates() {
        let (provider, (a, b, ..)) = sample_provider();
        provider.remove(&a).unwrap();
        provider.remove(&b).unwrap();
        let exif = Tag::ifd_pointer(Some(Tag::root()), None, 0x8769, "ExifOffset").unwrap();
        assert!(provider.match_tag(0x1234, &exif, 1).is_none());
        assert!(provider.match_tag(0x9999, Tag::root(), 0).is_none());
    }
}
