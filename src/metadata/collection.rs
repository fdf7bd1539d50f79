//! A chain of image file directories and the operations that span it.
//!
//! On the wire a chain is a singly linked list of directories, each ending with the offset of
//! the next. In memory the chain is an ordered collection. Child chains hang off pointer
//! entries, so a complete metadata tree is a collection whose entries may themselves hold
//! collections.

use std::ops::{Index, IndexMut};

use crate::{
    io::ByteOrder,
    metadata::{
        deserializer,
        directory::ImageFileDirectory,
        entry::{Entry, EntryReference, EntryValue},
        provider::TagProvider,
        tag::TagRef,
    },
    Result,
};

/// An ordered chain of image file directories.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageFileDirectoryCollection {
    directories: Vec<ImageFileDirectory>,
}

impl ImageFileDirectoryCollection {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        ImageFileDirectoryCollection {
            directories: Vec::new(),
        }
    }

    /// Deserializes a directory chain starting at a buffer offset.
    ///
    /// The offset addresses the first directory itself, not a pointer to it. Tags are resolved
    /// against `provider`, or the built-in catalog when `None`. Returns the decoded collection
    /// together with references to entries which are known not to survive reserialization.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] or [`crate::Error::OutOfBounds`] if the buffer does
    /// not hold a valid chain at the offset.
    pub fn deserialize(
        buffer: &[u8],
        starting_offset: usize,
        byte_order: ByteOrder,
        provider: Option<&TagProvider>,
    ) -> Result<(Self, Vec<EntryReference>)> {
        let provider = provider.unwrap_or_else(|| TagProvider::built_in());
        let mut collection = ImageFileDirectoryCollection::new();
        let cannot_round_trip = deserializer::deserialize(
            &mut collection,
            buffer,
            provider,
            byte_order,
            starting_offset,
            false,
        )?;
        Ok((collection, cannot_round_trip))
    }

    /// The number of directories in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directories.len()
    }

    /// Whether the chain has no directories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// The directory at a chain position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageFileDirectory> {
        self.directories.get(index)
    }

    /// The directory at a chain position, mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ImageFileDirectory> {
        self.directories.get_mut(index)
    }

    /// The first directory of the chain.
    #[must_use]
    pub fn first(&self) -> Option<&ImageFileDirectory> {
        self.directories.first()
    }

    /// Appends a directory to the end of the chain.
    pub fn push(&mut self, directory: ImageFileDirectory) {
        self.directories.push(directory);
    }

    /// Iterates the directories in chain order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImageFileDirectory> {
        self.directories.iter()
    }

    /// Iterates the directories in chain order, mutably.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ImageFileDirectory> {
        self.directories.iter_mut()
    }

    /// Imports all directories from another collection, merging positionally. Directories
    /// beyond the target's length are appended; target directories beyond the source's length
    /// are kept untouched. See [`ImageFileDirectory::import`] for per-entry merge rules.
    pub fn import(&mut self, other: &ImageFileDirectoryCollection) {
        for (i, source) in other.directories.iter().enumerate() {
            if i == self.directories.len() {
                self.directories.push(ImageFileDirectory::new());
            }
            self.directories[i].import(source);
        }
    }

    /// Finds the first entry reachable through a path of tags, searching every directory of
    /// each chain along the way.
    ///
    /// Leading root tags in the path are skipped. When a path tag declares an index, that
    /// index selects a single directory counted across the chains being searched at that
    /// depth; otherwise all directories are searched in order. Every path tag before the last
    /// must resolve to a directory pointer entry.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidValue`] if a non-final path tag resolves to an entry
    /// which is not a directory pointer.
    pub fn find_entry(&self, tag_path: &[TagRef]) -> Result<Option<&Entry>> {
        let mut start = 0;
        while start < tag_path.len() && tag_path[start].is_root() {
            start += 1;
        }
        if start == tag_path.len() {
            return Ok(None);
        }
        Self::search(&[self], tag_path, start)
    }

    fn search<'a>(
        chains: &[&'a ImageFileDirectoryCollection],
        tag_path: &[TagRef],
        index: usize,
    ) -> Result<Option<&'a Entry>> {
        let tag = &tag_path[index];
        for directory in Self::select_directories(chains, tag.index()) {
            let Some(entry) = directory.get(tag) else {
                continue;
            };
            if index + 1 == tag_path.len() {
                return Ok(Some(entry));
            }
            if !entry.tag().is_pointer() {
                return Err(crate::Error::InvalidValue(format!(
                    "tag path entry {} is not a directory pointer",
                    entry.tag()
                )));
            }
            let found = match entry.value() {
                EntryValue::Ifd(chain) => Self::search(&[chain], tag_path, index + 1)?,
                EntryValue::IfdArray(list) => {
                    let chains: Vec<_> = list.iter().collect();
                    Self::search(&chains, tag_path, index + 1)?
                }
                _ => None,
            };
            if found.is_some() {
                return Ok(found);
            }
        }
        Ok(None)
    }

    /// Selects the directories to search at one path depth. With an index filter the
    /// directories of all chains are counted as one sequence and the single directory at
    /// that position is selected; without one, every directory is searched.
    fn select_directories<'a>(
        chains: &[&'a ImageFileDirectoryCollection],
        filter: Option<u32>,
    ) -> Vec<&'a ImageFileDirectory> {
        match filter {
            None => chains.iter().flat_map(|chain| chain.iter()).collect(),
            Some(index) => {
                let mut remaining = index as usize;
                for chain in chains {
                    if remaining < chain.len() {
                        return vec![&chain.directories[remaining]];
                    }
                    remaining -= chain.len();
                }
                Vec::new()
            }
        }
    }

    /// Resolves an [`EntryReference`] produced while decoding this collection.
    ///
    /// Returns `None` if the referenced structure has since been removed or rearranged.
    #[must_use]
    pub fn entry_at(&self, reference: &EntryReference) -> Option<&Entry> {
        let mut current = self;
        for step in &reference.path {
            let entry = current.directories.get(step.directory)?.get(&step.tag)?;
            current = match entry.value() {
                EntryValue::Ifd(chain) if step.pointer == 0 => chain,
                EntryValue::IfdArray(list) => list.get(step.pointer)?,
                _ => return None,
            };
        }
        current
            .directories
            .get(reference.directory)?
            .get(&reference.tag)
    }

    /// Resolves an [`EntryReference`] to a mutable entry.
    pub fn entry_at_mut(&mut self, reference: &EntryReference) -> Option<&mut Entry> {
        let mut current = self;
        for step in &reference.path {
            let entry = current
                .directories
                .get_mut(step.directory)?
                .get_mut(&step.tag)?;
            current = match entry.value_mut() {
                EntryValue::Ifd(chain) if step.pointer == 0 => chain,
                EntryValue::IfdArray(list) => list.get_mut(step.pointer)?,
                _ => return None,
            };
        }
        current
            .directories
            .get_mut(reference.directory)?
            .get_mut(&reference.tag)
    }
}

impl Index<usize> for ImageFileDirectoryCollection {
    type Output = ImageFileDirectory;

    fn index(&self, index: usize) -> &ImageFileDirectory {
        &self.directories[index]
    }
}

impl IndexMut<usize> for ImageFileDirectoryCollection {
    fn index_mut(&mut self, index: usize) -> &mut ImageFileDirectory {
        &mut self.directories[index]
    }
}

impl From<Vec<ImageFileDirectory>> for ImageFileDirectoryCollection {
    fn from(directories: Vec<ImageFileDirectory>) -> Self {
        ImageFileDirectoryCollection { directories }
    }
}

impl FromIterator<ImageFileDirectory> for ImageFileDirectoryCollection {
    fn from_iter<I: IntoIterator<Item = ImageFileDirectory>>(directories: I) -> Self {
        ImageFileDirectoryCollection {
            directories: directories.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ImageFileDirectoryCollection {
    type Item = &'a ImageFileDirectory;
    type IntoIter = std::slice::Iter<'a, ImageFileDirectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        entry::EntryPathStep,
        tag::{Tag, TagRef},
    };

    fn exif_pointer() -> TagRef {
        Tag::ifd_pointer(Some(Tag::root()), None, 0x8769, "ExifOffset").unwrap()
    }

    fn tree() -> (ImageFileDirectoryCollection, TagRef, TagRef) {
        let exif = exif_pointer();
        let version = Tag::standard(Some(&exif), None, 0x9000, "ExifVersion").unwrap();

        let mut child_directory = ImageFileDirectory::new();
        child_directory.set(&version, [0x30u8, 0x32, 0x33, 0x32]);
        let child: ImageFileDirectoryCollection = vec![child_directory].into();

        let mut root_directory = ImageFileDirectory::new();
        root_directory.set(&exif, child);
        let collection: ImageFileDirectoryCollection = vec![root_directory].into();
        (collection, exif, version)
    }

    #[test]
    fn find_entry_walks_pointer_path() {
        let (collection, exif, version) = tree();
        let entry = collection
            .find_entry(&[TagRef::clone(Tag::root()), exif, TagRef::clone(&version)])
            .unwrap()
            .unwrap();
        assert_eq!(entry.tag(), &version);
    }

    #[test]
    fn find_entry_empty_after_roots() {
        let (collection, _, _) = tree();
        assert!(collection
            .find_entry(&[TagRef::clone(Tag::root())])
            .unwrap()
            .is_none());
    }

    #[test]
    fn find_entry_missing_tag_is_none() {
        let (collection, exif, _) = tree();
        let absent = Tag::standard(Some(&exif), None, 0x9999, "Absent").unwrap();
        assert!(collection.find_entry(&[exif, absent]).unwrap().is_none());
    }

    #[test]
    fn find_entry_rejects_non_pointer_step() {
        let (mut collection, _exif, version) = tree();
        let width = Tag::standard(None, None, 0x0100, "ImageWidth").unwrap();
        collection[0].set(&width, 640u32);
        assert!(collection.find_entry(&[width, version]).is_err());
    }

    #[test]
    fn indexed_path_tag_selects_directory() {
        let exif = exif_pointer();
        let compression = Tag::standard(None, Some(1), 0x0103, "Compression").unwrap();

        let mut first = ImageFileDirectory::new();
        first.set(&exif, ImageFileDirectoryCollection::new());
        let mut second = ImageFileDirectory::new();
        second.set(&compression, 6u16);
        let collection: ImageFileDirectoryCollection = vec![first, second].into();

        let entry = collection.find_entry(&[compression.clone()]).unwrap();
        assert!(entry.is_some());

        let wrong_index = Tag::standard(None, Some(0), 0x0103, "Compression").unwrap();
        assert!(collection.find_entry(&[wrong_index]).unwrap().is_none());
    }

    #[test]
    fn entry_at_resolves_path() {
        let (mut collection, exif, version) = tree();
        let reference = EntryReference {
            path: vec![EntryPathStep {
                tag: TagRef::clone(&exif),
                pointer: 0,
                directory: 0,
            }],
            directory: 0,
            tag: TagRef::clone(&version),
        };
        assert!(collection.entry_at(&reference).is_some());
        assert!(collection.entry_at_mut(&reference).is_some());

        collection[0].remove(&exif);
        assert!(collection.entry_at(&reference).is_none());
    }

    #[test]
    fn import_grows_positionally() {
        let width = Tag::standard(None, None, 0x0100, "ImageWidth").unwrap();
        let mut source_first = ImageFileDirectory::new();
        source_first.set(&width, 640u32);
        let mut source_second = ImageFileDirectory::new();
        source_second.set(&width, 320u32);
        let source: ImageFileDirectoryCollection = vec![source_first, source_second].into();

        let mut target = ImageFileDirectoryCollection::new();
        target.push(ImageFileDirectory::new());
        target.import(&source);

        assert_eq!(target.len(), 2);
        assert_eq!(
            target[1].get(&width).unwrap().value(),
            &EntryValue::UInt32(320)
        );
    }

    #[test]
    fn deserialize_defaults_to_built_in_catalog() {
        let buffer = [
            0x00, 0x01, // Entry count
            0x01, 0x28, // Tag (ResolutionUnit)
            0x00, 0x03, // Type (UInt16)
            0x00, 0x00, 0x00, 0x01, // Count
            0x00, 0x02, 0x00, 0x00, // Value
            0x00, 0x00, 0x00, 0x00, // No more IFDs
        ];
        let (collection, references) =
            ImageFileDirectoryCollection::deserialize(&buffer, 0, ByteOrder::BigEndian, None)
                .unwrap();
        assert!(references.is_empty());
        assert_eq!(collection.len(), 1);

        let entry = collection[0].iter().next().unwrap();
        assert_eq!(entry.tag().name(), "ResolutionUnit");
        assert_eq!(entry.value(), &EntryValue::UInt16(2));
    }
}
