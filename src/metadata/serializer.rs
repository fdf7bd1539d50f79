//! Wire encoding of image file directory trees.
//!
//! Encoding is driven by two work queues over a seekable write cursor. Whenever an entry
//! needs data that cannot live inline (a value payload, a child directory), a 4-byte pointer
//! slot is reserved in place and a job referencing that slot is queued. When a job runs it
//! backpatches its slot with the current end of the stream, relative to the slot's offset
//! scope, then appends its data there.
//!
//! Value payload jobs queue separately from directory jobs and always drain first, so every
//! payload of a directory lands before any child directory. This reproduces the customary
//! layout of EXIF writers and keeps the output deterministic.

use std::collections::VecDeque;

use crate::{
    io::EncodeStream,
    metadata::{
        collection::ImageFileDirectoryCollection,
        entry::{Entry, EntryType, EntryValue},
        offset::ScopedOffset,
        tag::TagBehavior,
    },
    Result,
};

/// Serializes a directory tree into the stream, starting with a 4-byte pointer to the first
/// directory at the current position. An empty tree encodes as a zero pointer.
pub(crate) fn serialize(
    collection: &ImageFileDirectoryCollection,
    stream: &mut EncodeStream,
) -> Result<()> {
    let mut encoder = Serializer {
        standard: VecDeque::new(),
        directory: VecDeque::new(),
    };

    if collection.is_empty() {
        stream.write_u32(0);
        return Ok(());
    }

    let slot = Serializer::reserve(stream, 0);
    encoder.directory.push_back(Job {
        pointer_offset: slot,
        scope: false,
        kind: JobKind::Directory { chain: collection, index: 0 },
    });
    encoder.run(stream)
}

/// A pending write whose position is already reserved as a 4-byte pointer slot.
struct Job<'a> {
    /// The reserved slot: its value is the stream position of the slot, its absolute part
    /// the offset scope the patched pointer is relative to.
    pointer_offset: ScopedOffset,
    /// Whether the patched position opens a new offset scope for the job's content.
    scope: bool,
    kind: JobKind<'a>,
}

enum JobKind<'a> {
    /// Serialize one directory of a chain. The rest of the chain is queued as follow-up jobs.
    Directory {
        chain: &'a ImageFileDirectoryCollection,
        index: usize,
    },
    /// Append the out-of-line value payload of an entry.
    Payload { entry: &'a Entry },
    /// Append a pointer array for a multi-chain entry and queue each chain.
    PointerArray {
        chains: &'a [ImageFileDirectoryCollection],
        scoped: bool,
    },
}

struct Serializer<'a> {
    standard: VecDeque<Job<'a>>,
    directory: VecDeque<Job<'a>>,
}

impl<'a> Serializer<'a> {
    fn run(&mut self, stream: &mut EncodeStream) -> Result<()> {
        loop {
            // Payload jobs drain strictly before directory jobs.
            let job = match self.standard.pop_front().or_else(|| self.directory.pop_front()) {
                Some(job) => job,
                None => return Ok(()),
            };

            let end = stream.position();
            stream.seek(job.pointer_offset.value());
            stream.write_u32((end - job.pointer_offset.absolute()) as u32);
            stream.seek(end);

            let base = if job.scope { end } else { job.pointer_offset.absolute() };
            match job.kind {
                JobKind::Directory { chain, index } => {
                    self.write_directory(stream, chain, index, base)?;
                }
                JobKind::Payload { entry } => {
                    Self::write_elements(stream, entry.value())?;
                }
                JobKind::PointerArray { chains, scoped } => {
                    for chain in chains {
                        if chain.is_empty() {
                            stream.write_u32(0);
                            continue;
                        }
                        let slot = Self::reserve(stream, base);
                        self.directory.push_back(Job {
                            pointer_offset: slot,
                            scope: scoped,
                            kind: JobKind::Directory { chain, index: 0 },
                        });
                    }
                }
            }
        }
    }

    /// Reserves a 4-byte pointer slot at the current position, scoped to `base`.
    fn reserve(stream: &mut EncodeStream, base: usize) -> ScopedOffset {
        let slot = ScopedOffset::new(base, stream.position() - base);
        stream.skip(4);
        slot
    }

    fn write_directory(
        &mut self,
        stream: &mut EncodeStream,
        chain: &'a ImageFileDirectoryCollection,
        index: usize,
        base: usize,
    ) -> Result<()> {
        let directory = &chain[index];

        // Offset-and-length entries serialize as two wire records each, but only when they
        // hold block data; a pair tag edited to a plain value writes a single record.
        let pair_entries = directory
            .iter()
            .filter(|entry| {
                entry.tag().behavior() == TagBehavior::OffsetAndLengthPair
                    && matches!(entry.value(), EntryValue::Bytes(_))
            })
            .count();
        stream.write_u16((directory.len() + pair_entries) as u16);

        for entry in directory.iter() {
            self.write_entry(stream, entry, base)?;
        }

        if index + 1 < chain.len() {
            let slot = Self::reserve(stream, base);
            self.directory.push_back(Job {
                pointer_offset: slot,
                scope: false,
                kind: JobKind::Directory { chain, index: index + 1 },
            });
        } else {
            stream.write_u32(0);
        }
        Ok(())
    }

    fn write_entry(
        &mut self,
        stream: &mut EncodeStream,
        entry: &'a Entry,
        base: usize,
    ) -> Result<()> {
        match entry.value() {
            EntryValue::Ifd(chain) => {
                self.write_pointer_entry(stream, entry, std::slice::from_ref(chain), base)
            }
            EntryValue::IfdArray(chains) => self.write_pointer_entry(stream, entry, chains, base),
            EntryValue::Bytes(data)
                if matches!(
                    entry.tag().behavior(),
                    TagBehavior::PreserveDataBlock | TagBehavior::OffsetAndLengthPair
                ) =>
            {
                self.write_data_block_entry(stream, entry, data.len(), base)
            }
            _ => self.write_value_entry(stream, entry, base),
        }
    }

    /// Writes an entry pointing at one or more child directory chains. A single chain is
    /// pointed at directly; multiple chains go through a pointer array payload.
    fn write_pointer_entry(
        &mut self,
        stream: &mut EncodeStream,
        entry: &'a Entry,
        chains: &'a [ImageFileDirectoryCollection],
        base: usize,
    ) -> Result<()> {
        let scoped = entry.tag().behavior() == TagBehavior::ScopedIfdPointer;

        stream.write_u16(entry.tag().value());
        stream.write_u16(entry.entry_type() as u16);
        stream.write_u32(chains.len() as u32);

        match chains {
            [] => {
                return Err(invalid_value_error!(
                    "Entry for tag {} holds no directory chains",
                    entry.tag()
                ));
            }
            [chain] => {
                if chain.is_empty() {
                    stream.write_u32(0);
                } else {
                    let slot = Self::reserve(stream, base);
                    self.directory.push_back(Job {
                        pointer_offset: slot,
                        scope: scoped,
                        kind: JobKind::Directory { chain, index: 0 },
                    });
                }
            }
            chains => {
                let slot = Self::reserve(stream, base);
                self.standard.push_back(Job {
                    pointer_offset: slot,
                    scope: false,
                    kind: JobKind::PointerArray { chains, scoped },
                });
            }
        }
        Ok(())
    }

    /// Writes a preserved-block or offset-and-length entry. The wire record carries an offset
    /// with a count of one; the block bytes are queued as a payload. Offset-and-length pairs
    /// additionally write the companion length record.
    fn write_data_block_entry(
        &mut self,
        stream: &mut EncodeStream,
        entry: &'a Entry,
        data_len: usize,
        base: usize,
    ) -> Result<()> {
        if data_len == 0 {
            return Err(invalid_value_error!(
                "Entry for tag {} holds an empty data block",
                entry.tag()
            ));
        }

        stream.write_u16(entry.tag().value());
        stream.write_u16(EntryType::UInt32 as u16);
        stream.write_u32(1);
        let slot = Self::reserve(stream, base);
        self.standard.push_back(Job {
            pointer_offset: slot,
            scope: false,
            kind: JobKind::Payload { entry },
        });

        if entry.tag().behavior() == TagBehavior::OffsetAndLengthPair {
            let length_tag = entry.tag().related().ok_or_else(|| {
                invalid_value_error!("Entry for tag {} has no companion length tag", entry.tag())
            })?;
            stream.write_u16(length_tag.value());
            stream.write_u16(EntryType::UInt32 as u16);
            stream.write_u32(1);
            stream.write_u32(data_len as u32);
        }
        Ok(())
    }

    /// Writes a plain value entry: inline when the elements fit in the 4-byte field,
    /// otherwise through a reserved offset with the payload queued.
    fn write_value_entry(
        &mut self,
        stream: &mut EncodeStream,
        entry: &'a Entry,
        base: usize,
    ) -> Result<()> {
        let count = entry.value().element_count();
        if count == 0 {
            return Err(invalid_value_error!(
                "Entry for tag {} holds an empty value",
                entry.tag()
            ));
        }

        stream.write_u16(entry.tag().value());
        stream.write_u16(entry.entry_type() as u16);
        stream.write_u32(count as u32);

        if count <= entry.entry_type().inline_capacity() {
            let start = stream.position();
            Self::write_elements(stream, entry.value())?;
            // Zero-pad the inline field out to its full 4 bytes.
            let written = stream.position() - start;
            for _ in written..4 {
                stream.write_u8(0);
            }
        } else {
            let slot = Self::reserve(stream, base);
            self.standard.push_back(Job {
                pointer_offset: slot,
                scope: false,
                kind: JobKind::Payload { entry },
            });
        }
        Ok(())
    }

    fn write_elements(stream: &mut EncodeStream, value: &EntryValue) -> Result<()> {
        match value {
            EntryValue::Ascii(text) => {
                stream.write_bytes(text.as_bytes());
                stream.write_u8(0);
            }
            EntryValue::Byte(v) => stream.write_u8(*v),
            EntryValue::Bytes(data) => stream.write_bytes(data),
            EntryValue::SByte(v) => stream.write_i8(*v),
            EntryValue::SBytes(values) => {
                for v in values {
                    stream.write_i8(*v);
                }
            }
            EntryValue::UInt16(v) => stream.write_u16(*v),
            EntryValue::UInt16Array(values) => {
                for v in values {
                    stream.write_u16(*v);
                }
            }
            EntryValue::Int16(v) => stream.write_i16(*v),
            EntryValue::Int16Array(values) => {
                for v in values {
                    stream.write_i16(*v);
                }
            }
            EntryValue::UInt32(v) => stream.write_u32(*v),
            EntryValue::UInt32Array(values) => {
                for v in values {
                    stream.write_u32(*v);
                }
            }
            EntryValue::Int32(v) => stream.write_i32(*v),
            EntryValue::Int32Array(values) => {
                for v in values {
                    stream.write_i32(*v);
                }
            }
            EntryValue::Single(v) => stream.write_f32(*v),
            EntryValue::SingleArray(values) => {
                for v in values {
                    stream.write_f32(*v);
                }
            }
            EntryValue::Double(v) => stream.write_f64(*v),
            EntryValue::DoubleArray(values) => {
                for v in values {
                    stream.write_f64(*v);
                }
            }
            EntryValue::UnsignedRational(v) => {
                stream.write_u32(v.numerator);
                stream.write_u32(v.denominator);
            }
            EntryValue::UnsignedRationalArray(values) => {
                for v in values {
                    stream.write_u32(v.numerator);
                    stream.write_u32(v.denominator);
                }
            }
            EntryValue::SignedRational(v) => {
                stream.write_i32(v.numerator);
                stream.write_i32(v.denominator);
            }
            EntryValue::SignedRationalArray(values) => {
                for v in values {
                    stream.write_i32(v.numerator);
                    stream.write_i32(v.denominator);
                }
            }
            EntryValue::Ifd(_) | EntryValue::IfdArray(_) => {
                return Err(invalid_value_error!(
                    "Directory values cannot be written as a value payload"
                ));
            }
        }
        Ok(())
    }
}
