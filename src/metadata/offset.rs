//! Scoped offset arithmetic for nested directory scopes.
//!
//! Most pointers in an EXIF buffer are relative to the start of the buffer, but scoped
//! directory pointers (such as maker note directories) open a new scope in which all nested
//! pointers are relative to the first byte of the pointed-to directory. [`ScopedOffset`]
//! carries the scope base and the relative offset separately so both the absolute position
//! and the scope can be recovered at any point during decoding or encoding.

use std::ops::Add;

/// An offset split into the absolute base of the current scope and a relative part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScopedOffset {
    absolute: usize,
    relative: usize,
}

impl ScopedOffset {
    /// Creates a scoped offset from a scope base and an offset relative to it.
    #[must_use]
    pub fn new(absolute: usize, relative: usize) -> Self {
        ScopedOffset { absolute, relative }
    }

    /// The absolute base which relative offsets in this scope are added to.
    #[must_use]
    pub fn absolute(&self) -> usize {
        self.absolute
    }

    /// The offset relative to the scope base.
    #[must_use]
    pub fn relative(&self) -> usize {
        self.relative
    }

    /// The effective absolute position, scope base plus relative offset.
    #[must_use]
    pub fn value(&self) -> usize {
        self.absolute + self.relative
    }

    /// Opens a new scope at the current position. The result has this offset's value as its
    /// base and a relative offset of zero.
    #[must_use]
    pub fn scope(&self) -> Self {
        ScopedOffset::new(self.value(), 0)
    }
}

impl Add<usize> for ScopedOffset {
    type Output = ScopedOffset;

    fn add(self, rhs: usize) -> ScopedOffset {
        ScopedOffset::new(self.absolute, self.relative + rhs)
    }
}
