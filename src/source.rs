//! Sequential byte sources.
//!
//! The decoder only ever reads forward. A source never rewinds, and bytes
//! consumed by a failed read are not given back.

use crate::error::TgaError;

/// A forward-only supplier of bytes.
pub trait ByteSource {
    /// Fill `buf` completely, or fail with [`TgaError::TruncatedInput`].
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), TgaError>;

    /// Read a single byte.
    fn read_u8(&mut self) -> Result<u8, TgaError> {
        let mut b = [0u8; 1];
        self.read_exact(&mut b)?;
        Ok(b[0])
    }
}

/// Cursor over an in-memory byte slice.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), TgaError> {
        let end = self
            .pos
            .checked_add(buf.len())
            .ok_or(TgaError::TruncatedInput)?;
        let chunk = self.data.get(self.pos..end).ok_or(TgaError::TruncatedInput)?;
        buf.copy_from_slice(chunk);
        self.pos = end;
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, TgaError> {
        let b = *self.data.get(self.pos).ok_or(TgaError::TruncatedInput)?;
        self.pos += 1;
        Ok(b)
    }
}

/// Adapter over any [`std::io::Read`].
///
/// `UnexpectedEof` from the reader surfaces as [`TgaError::TruncatedInput`];
/// other I/O errors as [`TgaError::Io`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for ReadSource<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), TgaError> {
        std::io::Read::read_exact(&mut self.inner, buf)?;
        Ok(())
    }
}
