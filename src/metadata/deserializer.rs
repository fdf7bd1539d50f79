//! Wire decoding of image file directory chains.
//!
//! Decoding walks the linked list of directories at the starting offset, resolves each wire
//! tag against a [`TagProvider`], materializes entry values (following value offsets where
//! the value does not fit inline), and recurses into child chains behind pointer entries.
//!
//! Two bookkeeping structures drive the quirkier behaviors. A sorted set of every buffer
//! offset touched during the walk bounds preserved data blocks, whose wire form carries an
//! offset but no length: a block is assumed to extend to the next known offset. A path of
//! pointer steps from the root is maintained so entries needing caller attention (preserved
//! blocks, values that cannot round trip) can be reported as stable [`EntryReference`]s.

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::{
    io::ByteOrder,
    metadata::{
        collection::ImageFileDirectoryCollection,
        directory::ImageFileDirectory,
        entry::{Entry, EntryPathStep, EntryReference, EntryType, EntryValue},
        offset::ScopedOffset,
        provider::TagProvider,
        rational::{SignedRational, UnsignedRational},
        tag::{Tag, TagBehavior, TagRef},
    },
    Result,
};

/// The size in bytes of one directory entry record on the wire.
const ENTRY_SIZE: usize = 12;

/// Decodes a directory chain from `buffer` into `collection`.
///
/// When `start_is_pointer` is set, `starting_offset` addresses a 32-bit pointer to the first
/// directory rather than the directory itself, and a zero pointer decodes as an empty tree.
/// Returns references to decoded entries which will not survive reserialization.
pub(crate) fn deserialize(
    collection: &mut ImageFileDirectoryCollection,
    buffer: &[u8],
    provider: &TagProvider,
    byte_order: ByteOrder,
    starting_offset: usize,
    start_is_pointer: bool,
) -> Result<Vec<EntryReference>> {
    let mut decoder = Deserializer {
        buffer,
        provider,
        order: byte_order,
        offsets: BTreeSet::from([0]),
        preserve_blocks: Vec::new(),
        cannot_round_trip: Vec::new(),
        path: Vec::new(),
    };

    let offset = if start_is_pointer {
        let offset = decoder.read_offset_and_validate(ScopedOffset::new(0, starting_offset), 0)?;
        if offset.relative() == 0 {
            return Ok(Vec::new());
        }
        offset
    } else {
        ScopedOffset::new(0, starting_offset)
    };

    decoder.decode_chain(collection, Tag::root(), 0, offset)?;
    decoder.fix_up_preserved_blocks(collection)?;
    Ok(decoder.cannot_round_trip)
}

struct Deserializer<'a> {
    buffer: &'a [u8],
    provider: &'a TagProvider,
    order: ByteOrder,
    /// Every buffer offset known to start or end a structure. Bounds preserved blocks.
    offsets: BTreeSet<usize>,
    /// Preserved-block entries awaiting length inference, with their block start offsets.
    preserve_blocks: Vec<(EntryReference, usize)>,
    cannot_round_trip: Vec<EntryReference>,
    /// The pointer path from the root to the chain currently being decoded.
    path: Vec<EntryPathStep>,
}

impl Deserializer<'_> {
    /// Decodes the linked directory chain at `offset` into `chain`, resolving tags against
    /// `parent` with directory numbering starting at `parent_index`. Returns the number of
    /// directories decoded so sibling chains behind a multi-pointer entry continue numbering.
    fn decode_chain(
        &mut self,
        chain: &mut ImageFileDirectoryCollection,
        parent: &TagRef,
        parent_index: u32,
        offset: ScopedOffset,
    ) -> Result<u32> {
        let mut offset = offset;
        let mut parent_index = parent_index;
        let mut decoded = 0u32;

        loop {
            self.offsets.insert(offset.value());
            let entry_count = usize::from(self.order.read_u16(self.buffer, offset.value())?);
            let entries_offset = offset + 2;

            // The entry records and the trailing next-directory pointer must fit.
            let directory_size = entry_count
                .checked_mul(ENTRY_SIZE)
                .and_then(|size| size.checked_add(4))
                .ok_or(crate::Error::OutOfBounds)?;
            if entries_offset
                .value()
                .checked_add(directory_size)
                .map_or(true, |end| end > self.buffer.len())
            {
                return Err(crate::Error::OutOfBounds);
            }

            let mut directory = ImageFileDirectory::new();
            for i in 0..entry_count {
                let entry_offset = entries_offset + i * ENTRY_SIZE;
                self.decode_entry(&mut directory, chain.len(), parent, parent_index, entry_offset)?;
            }

            self.collapse_offset_and_length_pairs(&mut directory, offset)?;
            chain.push(directory);
            decoded += 1;

            let next = self
                .read_offset_and_validate(entries_offset + entry_count * ENTRY_SIZE, 0)?;
            if next.relative() == 0 {
                break;
            }
            offset = next;
            parent_index += 1;
        }

        Ok(decoded)
    }

    /// Decodes the 12-byte entry record at `entry_offset` into `directory`.
    fn decode_entry(
        &mut self,
        directory: &mut ImageFileDirectory,
        chain_position: usize,
        parent: &TagRef,
        parent_index: u32,
        entry_offset: ScopedOffset,
    ) -> Result<()> {
        let tag_value = self.order.read_u16(self.buffer, entry_offset.value())?;
        let type_value = self.order.read_u16(self.buffer, entry_offset.value() + 2)?;
        let entry_type = EntryType::from_repr(type_value).ok_or_else(|| {
            malformed_error!(
                "Unsupported entry type {type_value} for tag 0x{tag_value:04X}"
            )
        })?;
        let count = self.order.read_i32(self.buffer, entry_offset.value() + 4)?;
        if count <= 0 {
            return Err(malformed_error!(
                "Invalid element count {count} for tag 0x{tag_value:04X}"
            ));
        }
        let count = count as usize;
        let value_offset = entry_offset + 8;

        let tag = match self.provider.match_tag(tag_value, parent, parent_index) {
            Some(tag) => tag,
            None => Tag::unnamed(parent, parent_index, tag_value)?,
        };

        let value = self.decode_value(entry_type, count, value_offset)?;

        if tag.is_pointer() {
            let entry = self.decode_child_chains(
                &tag,
                entry_type,
                &value,
                chain_position,
                entry_offset.absolute(),
            )?;
            directory.add_or_update(entry);
            return Ok(());
        }

        match tag.behavior() {
            TagBehavior::PreserveDataBlock => {
                if let Some(block_offset) = value.as_offset() {
                    let start = entry_offset.absolute() + block_offset as usize;
                    self.offsets.insert(start);
                    self.preserve_blocks
                        .push((self.reference(chain_position, &tag), start));
                }
            }
            TagBehavior::CannotRoundTrip => {
                self.cannot_round_trip
                    .push(self.reference(chain_position, &tag));
            }
            _ => {}
        }

        directory.add_or_update(Entry::with_type(&tag, entry_type, value));
        Ok(())
    }

    /// Decodes the child chains behind a pointer entry and returns the replacement entry.
    /// Pointer values are relative to `base`, the scope of the containing directory.
    fn decode_child_chains(
        &mut self,
        tag: &TagRef,
        entry_type: EntryType,
        value: &EntryValue,
        chain_position: usize,
        base: usize,
    ) -> Result<Entry> {
        let child_offsets: Vec<u32> = match value {
            EntryValue::UInt32Array(values) => values.clone(),
            EntryValue::Int32Array(values) => values.iter().map(|v| *v as u32).collect(),
            other => match other.as_offset() {
                Some(offset) => vec![offset],
                None => {
                    return Err(malformed_error!(
                        "Pointer entry for tag {tag} does not hold directory offsets"
                    ));
                }
            },
        };

        let scoped = tag.behavior() == TagBehavior::ScopedIfdPointer;
        let mut children = Vec::with_capacity(child_offsets.len());
        let mut child_index = 0u32;
        for (slot, child_offset) in child_offsets.iter().enumerate() {
            let mut target = ScopedOffset::new(base, *child_offset as usize);
            if scoped {
                target = target.scope();
            }
            self.path.push(EntryPathStep {
                tag: TagRef::clone(tag),
                pointer: slot,
                directory: chain_position,
            });
            let mut child = ImageFileDirectoryCollection::new();
            let result = self.decode_chain(&mut child, tag, child_index, target);
            self.path.pop();
            child_index += result?;
            children.push(child);
        }

        let entry = if children.len() == 1 {
            Entry::with_type(tag, entry_type, children.pop().unwrap_or_default())
        } else {
            Entry::with_type(tag, entry_type, children)
        };
        Ok(entry)
    }

    /// Collapses each offset-and-length tag pair in the directory into a single
    /// byte-sequence entry holding the referenced data.
    fn collapse_offset_and_length_pairs(
        &mut self,
        directory: &mut ImageFileDirectory,
        offset: ScopedOffset,
    ) -> Result<()> {
        let pair_tags: Vec<TagRef> = directory
            .iter()
            .filter(|entry| entry.tag().behavior() == TagBehavior::OffsetAndLengthPair)
            .map(|entry| TagRef::clone(entry.tag()))
            .collect();

        for tag in pair_tags {
            let Some(length_tag) = tag.related() else {
                continue;
            };
            let length_tag = TagRef::clone(length_tag);

            let data_offset = directory
                .get(&tag)
                .and_then(|entry| entry.value().as_offset())
                .ok_or_else(|| {
                    malformed_error!("Offset tag {tag} does not hold a scalar offset")
                })?;
            let length = directory
                .get(&length_tag)
                .ok_or_else(|| {
                    malformed_error!(
                        "Offset tag {tag} is present but its length tag {length_tag} is missing"
                    )
                })?
                .value()
                .as_offset()
                .ok_or_else(|| {
                    malformed_error!("Length tag {length_tag} does not hold a scalar length")
                })? as usize;

            let start = ScopedOffset::new(offset.absolute(), data_offset as usize);
            let end = start
                .value()
                .checked_add(length)
                .ok_or(crate::Error::OutOfBounds)?;
            if end > self.buffer.len() {
                return Err(crate::Error::OutOfBounds);
            }
            self.offsets.insert(start.value());
            self.offsets.insert(end);

            let data = self.buffer[start.value()..end].to_vec();
            directory.add_or_update(Entry::new(&tag, data));
            directory.remove(&length_tag);
        }

        Ok(())
    }

    /// Infers a length for every preserved data block and replaces the entry's offset value
    /// with the block bytes. A block is assumed to end at the next known buffer offset.
    fn fix_up_preserved_blocks(
        &mut self,
        collection: &mut ImageFileDirectoryCollection,
    ) -> Result<()> {
        for (reference, start) in std::mem::take(&mut self.preserve_blocks) {
            let end = self
                .offsets
                .range((Bound::Excluded(start), Bound::Unbounded))
                .next()
                .copied()
                .unwrap_or(self.buffer.len())
                .min(self.buffer.len());
            let data = if start < end {
                self.buffer[start..end].to_vec()
            } else {
                Vec::new()
            };
            if let Some(entry) = collection.entry_at_mut(&reference) {
                *entry = Entry::new(&reference.tag, data);
            }
        }
        Ok(())
    }

    fn reference(&self, chain_position: usize, tag: &TagRef) -> EntryReference {
        EntryReference {
            path: self.path.clone(),
            directory: chain_position,
            tag: TagRef::clone(tag),
        }
    }

    /// Reads a 32-bit offset at `offset`, rebases it into the same scope, and validates that
    /// `byte_count` bytes are available at the target. Both ends of the target range are
    /// recorded as known offsets.
    fn read_offset_and_validate(
        &mut self,
        offset: ScopedOffset,
        byte_count: usize,
    ) -> Result<ScopedOffset> {
        let relative = self.order.read_u32(self.buffer, offset.value())?;
        let target = ScopedOffset::new(offset.absolute(), relative as usize);
        let end = target
            .value()
            .checked_add(byte_count)
            .ok_or(crate::Error::OutOfBounds)?;
        if end > self.buffer.len() {
            return Err(crate::Error::OutOfBounds);
        }
        self.offsets.insert(target.value());
        if byte_count > 0 {
            self.offsets.insert(end);
        }
        Ok(target)
    }

    /// Decodes an entry value of `entry_type` with `count` elements. The 4-byte field at
    /// `value_offset` holds the elements inline when they fit, or an offset to them.
    fn decode_value(
        &mut self,
        entry_type: EntryType,
        count: usize,
        value_offset: ScopedOffset,
    ) -> Result<EntryValue> {
        let inline = count <= entry_type.inline_capacity();
        let element_size = entry_type.element_size();
        let start = if inline {
            value_offset.value()
        } else {
            let total = count
                .checked_mul(element_size)
                .ok_or(crate::Error::OutOfBounds)?;
            self.read_offset_and_validate(value_offset, total)?.value()
        };

        let value = match entry_type {
            EntryType::Byte => {
                let data = self.read_bytes(start, count)?;
                if count == 1 {
                    EntryValue::Byte(data[0])
                } else {
                    EntryValue::Bytes(data.to_vec())
                }
            }
            EntryType::ByteSequence => EntryValue::Bytes(self.read_bytes(start, count)?.to_vec()),
            EntryType::SByte => {
                let data = self.read_bytes(start, count)?;
                if count == 1 {
                    EntryValue::SByte(data[0] as i8)
                } else {
                    EntryValue::SBytes(data.iter().map(|b| *b as i8).collect())
                }
            }
            EntryType::Ascii => {
                let data = self.read_bytes(start, count)?;
                let text = match data.iter().position(|b| *b == 0) {
                    Some(nul) => &data[..nul],
                    None => data,
                };
                EntryValue::Ascii(String::from_utf8_lossy(text).into_owned())
            }
            EntryType::UInt16 => {
                if count == 1 {
                    EntryValue::UInt16(self.order.read_u16(self.buffer, start)?)
                } else {
                    let mut values = Vec::with_capacity(count);
                    for i in 0..count {
                        values.push(self.order.read_u16(self.buffer, start + i * 2)?);
                    }
                    EntryValue::UInt16Array(values)
                }
            }
            EntryType::Int16 => {
                if count == 1 {
                    EntryValue::Int16(self.order.read_i16(self.buffer, start)?)
                } else {
                    let mut values = Vec::with_capacity(count);
                    for i in 0..count {
                        values.push(self.order.read_i16(self.buffer, start + i * 2)?);
                    }
                    EntryValue::Int16Array(values)
                }
            }
            EntryType::UInt32 => {
                if count == 1 {
                    EntryValue::UInt32(self.order.read_u32(self.buffer, start)?)
                } else {
                    let mut values = Vec::with_capacity(count);
                    for i in 0..count {
                        values.push(self.order.read_u32(self.buffer, start + i * 4)?);
                    }
                    EntryValue::UInt32Array(values)
                }
            }
            EntryType::Int32 => {
                if count == 1 {
                    EntryValue::Int32(self.order.read_i32(self.buffer, start)?)
                } else {
                    let mut values = Vec::with_capacity(count);
                    for i in 0..count {
                        values.push(self.order.read_i32(self.buffer, start + i * 4)?);
                    }
                    EntryValue::Int32Array(values)
                }
            }
            EntryType::Single => {
                if count == 1 {
                    EntryValue::Single(self.order.read_f32(self.buffer, start)?)
                } else {
                    let mut values = Vec::with_capacity(count);
                    for i in 0..count {
                        values.push(self.order.read_f32(self.buffer, start + i * 4)?);
                    }
                    EntryValue::SingleArray(values)
                }
            }
            EntryType::Double => {
                if count == 1 {
                    EntryValue::Double(self.order.read_f64(self.buffer, start)?)
                } else {
                    let mut values = Vec::with_capacity(count);
                    for i in 0..count {
                        values.push(self.order.read_f64(self.buffer, start + i * 8)?);
                    }
                    EntryValue::DoubleArray(values)
                }
            }
            EntryType::UnsignedRational => {
                let mut values = Vec::with_capacity(count);
                for i in 0..count {
                    values.push(UnsignedRational::new(
                        self.order.read_u32(self.buffer, start + i * 8)?,
                        self.order.read_u32(self.buffer, start + i * 8 + 4)?,
                    ));
                }
                if count == 1 {
                    EntryValue::UnsignedRational(values[0])
                } else {
                    EntryValue::UnsignedRationalArray(values)
                }
            }
            EntryType::SignedRational => {
                let mut values = Vec::with_capacity(count);
                for i in 0..count {
                    values.push(SignedRational::new(
                        self.order.read_i32(self.buffer, start + i * 8)?,
                        self.order.read_i32(self.buffer, start + i * 8 + 4)?,
                    ));
                }
                if count == 1 {
                    EntryValue::SignedRational(values[0])
                } else {
                    EntryValue::SignedRationalArray(values)
                }
            }
        };

        Ok(value)
    }

    fn read_bytes(&self, start: usize, count: usize) -> Result<&[u8]> {
        start
            .checked_add(count)
            .and_then(|end| self.buffer.get(start..end))
            .ok_or(crate::Error::OutOfBounds)
    }
}
