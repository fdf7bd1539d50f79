//! A single image file directory: an ordered set of entries keyed by tag.
//!
//! Entry order is preserved as decoded or inserted, since serialization order is observable
//! on the wire. Lookups use the structural tag identity described in
//! [`crate::metadata::tag`], so a tag resolved during decoding and an equivalent catalog tag
//! address the same entry.

use crate::metadata::{
    collection::ImageFileDirectoryCollection,
    entry::{Entry, EntryValue},
    tag::{Tag, TagRef},
};

/// An ordered set of entries indexed by tags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageFileDirectory {
    entries: Vec<Entry>,
}

impl ImageFileDirectory {
    /// Creates a new empty image file directory.
    #[must_use]
    pub fn new() -> Self {
        ImageFileDirectory {
            entries: Vec::new(),
        }
    }

    /// Creates a directory from a sequence of entries. Later entries replace earlier ones
    /// with an equivalent tag.
    pub fn from_entries<I: IntoIterator<Item = Entry>>(entries: I) -> Self {
        let mut directory = ImageFileDirectory::new();
        for entry in entries {
            directory.add_or_update(entry);
        }
        directory
    }

    /// The number of entries in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Looks up the entry with an equivalent tag.
    #[must_use]
    pub fn get(&self, tag: &Tag) -> Option<&Entry> {
        self.entries.iter().find(|entry| **entry.tag() == *tag)
    }

    /// Looks up the entry with an equivalent tag, mutably.
    pub fn get_mut(&mut self, tag: &Tag) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| **entry.tag() == *tag)
    }

    /// Whether an entry with an equivalent tag exists.
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.get(tag).is_some()
    }

    /// Adds an entry, or replaces the existing entry with an equivalent tag in place,
    /// keeping its position in the directory order.
    pub fn add_or_update(&mut self, entry: Entry) -> &Entry {
        let index = match self
            .entries
            .iter()
            .position(|existing| existing.tag() == entry.tag())
        {
            Some(index) => {
                self.entries[index] = entry;
                index
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        &self.entries[index]
    }

    /// Adds or replaces an entry for a tag, with the wire type inferred from the value.
    pub fn set(&mut self, tag: &TagRef, value: impl Into<EntryValue>) -> &Entry {
        self.add_or_update(Entry::new(tag, value))
    }

    /// Removes the entry with an equivalent tag, returning it if present.
    pub fn remove(&mut self, tag: &Tag) -> Option<Entry> {
        let position = self
            .entries
            .iter()
            .position(|existing| **existing.tag() == *tag)?;
        Some(self.entries.remove(position))
    }

    /// Imports all entries from another directory, merging and overwriting.
    ///
    /// Leaf values are replaced by deep copies. Child directory values merge recursively:
    /// a single chain merges into the target's chain (or the first chain of a target array),
    /// an array of chains merges positionally into the target array with missing chains
    /// appended, and incompatible target shapes are coerced first. Entries of the target
    /// which the source does not mention are kept untouched.
    pub fn import(&mut self, other: &ImageFileDirectory) {
        for entry in other.iter() {
            match entry.value() {
                EntryValue::Ifd(import_chain) => {
                    if let Some(existing) = self.get_mut(entry.tag()) {
                        let compatible = match existing.value() {
                            EntryValue::Ifd(_) => true,
                            EntryValue::IfdArray(list) => !list.is_empty(),
                            _ => false,
                        };
                        if !compatible {
                            *existing = Entry::with_type(
                                entry.tag(),
                                entry.entry_type(),
                                ImageFileDirectoryCollection::new(),
                            );
                        }
                        match existing.value_mut() {
                            EntryValue::Ifd(target) => target.import(import_chain),
                            EntryValue::IfdArray(list) => list[0].import(import_chain),
                            _ => {}
                        }
                    } else {
                        let mut target = ImageFileDirectoryCollection::new();
                        target.import(import_chain);
                        self.add_or_update(Entry::with_type(
                            entry.tag(),
                            entry.entry_type(),
                            target,
                        ));
                    }
                }
                EntryValue::IfdArray(import_chains) => {
                    if let Some(existing) = self.get_mut(entry.tag()) {
                        let coerced = match existing.value() {
                            EntryValue::IfdArray(_) => None,
                            EntryValue::Ifd(chain) => Some(vec![chain.clone()]),
                            _ => Some(Vec::new()),
                        };
                        if let Some(list) = coerced {
                            *existing = Entry::with_type(entry.tag(), entry.entry_type(), list);
                        }
                        if let EntryValue::IfdArray(target_list) = existing.value_mut() {
                            for (i, import_chain) in import_chains.iter().enumerate() {
                                if i == target_list.len() {
                                    target_list.push(ImageFileDirectoryCollection::new());
                                }
                                target_list[i].import(import_chain);
                            }
                        }
                    } else {
                        let mut target_list = Vec::new();
                        for import_chain in import_chains {
                            let mut target = ImageFileDirectoryCollection::new();
                            target.import(import_chain);
                            target_list.push(target);
                        }
                        self.add_or_update(Entry::with_type(
                            entry.tag(),
                            entry.entry_type(),
                            target_list,
                        ));
                    }
                }
                value => {
                    self.add_or_update(Entry::with_type(
                        entry.tag(),
                        entry.entry_type(),
                        value.clone(),
                    ));
                }
            }
        }
    }
}

impl FromIterator<Entry> for ImageFileDirectory {
    fn from_iter<I: IntoIterator<Item = Entry>>(entries: I) -> Self {
        ImageFileDirectory::from_entries(entries)
    }
}

impl<'a> IntoIterator for &'a ImageFileDirectory {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::tag::Tag;

    fn tags() -> (TagRef, TagRef) {
        (
            Tag::standard(None, None, 0x0100, "ImageWidth").unwrap(),
            Tag::standard(None, None, 0x0101, "ImageHeight").unwrap(),
        )
    }

    #[test]
    fn set_and_get() {
        let (width, height) = tags();
        let mut directory = ImageFileDirectory::new();
        directory.set(&width, 640u32);
        directory.set(&height, 480u32);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get(&width).unwrap().value(), &EntryValue::UInt32(640));
    }

    #[test]
    fn add_or_update_keeps_position() {
        let (width, height) = tags();
        let mut directory = ImageFileDirectory::new();
        directory.set(&width, 640u32);
        directory.set(&height, 480u32);
        directory.set(&width, 1024u32);
        let values: Vec<_> = directory.iter().map(|entry| entry.value().clone()).collect();
        assert_eq!(values, vec![EntryValue::UInt32(1024), EntryValue::UInt32(480)]);
    }

    #[test]
    fn remove_returns_entry() {
        let (width, _) = tags();
        let mut directory = ImageFileDirectory::new();
        directory.set(&width, 640u32);
        assert!(directory.remove(&width).is_some());
        assert!(directory.remove(&width).is_none());
        assert!(directory.is_empty());
    }

    #[test]
    fn import_overwrites_leaves_and_keeps_unmentioned() {
        let (width, height) = tags();
        let mut target = ImageFileDirectory::new();
        target.set(&width, 640u32);
        target.set(&height, 480u32);

        let mut source = ImageFileDirectory::new();
        source.set(&width, 1024u32);

        target.import(&source);
        assert_eq!(target.get(&width).unwrap().value(), &EntryValue::UInt32(1024));
        assert_eq!(target.get(&height).unwrap().value(), &EntryValue::UInt32(480));
    }

    #[test]
    fn import_coerces_scalar_to_chain() {
        let pointer = Tag::ifd_pointer(Some(Tag::root()), None, 0x8769, "ExifOffset").unwrap();
        let version = Tag::standard(Some(&pointer), None, 0x9000, "ExifVersion").unwrap();

        let mut child = ImageFileDirectoryCollection::new();
        let mut child_directory = ImageFileDirectory::new();
        child_directory.set(&version, vec![0x30u8, 0x32, 0x33, 0x32]);
        child.push(child_directory);

        let mut source = ImageFileDirectory::new();
        source.set(&pointer, child);

        // The target holds a stale numeric offset under the pointer tag.
        let mut target = ImageFileDirectory::new();
        target.set(&pointer, 0x5Au32);

        target.import(&source);
        match target.get(&pointer).unwrap().value() {
            EntryValue::Ifd(chain) => {
                assert_eq!(chain.len(), 1);
                assert!(chain[0].contains(&version));
            }
            other => panic!("expected directory value, got {other:?}"),
        }
    }
}
