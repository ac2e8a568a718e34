use crate::error::LogoError;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Bounds-checked reads from an in-memory container.
///
/// Every short read is reported as [`LogoError::TruncatedInput`] naming the
/// field being read, never zero-filled.
pub(crate) trait SliceReadExt<'a> {
    /// Bytes left after the current position.
    fn bytes_left(&self) -> usize;

    /// Reads a little-endian `u32`.
    fn read_u32_field(&mut self, what: &str) -> Result<u32, LogoError>;

    /// Reads `count` little-endian `u32` values.
    fn read_u32_array(&mut self, count: usize, what: &str) -> Result<Vec<u32>, LogoError>;

    /// Borrows the next `length` bytes and advances past them.
    fn read_span(&mut self, length: usize, what: &str) -> Result<&'a [u8], LogoError>;
}

impl<'a> SliceReadExt<'a> for Cursor<&'a [u8]> {
    fn bytes_left(&self) -> usize {
        self.get_ref()
            .len()
            .saturating_sub(self.position() as usize)
    }

    fn read_u32_field(&mut self, what: &str) -> Result<u32, LogoError> {
        let available = self.bytes_left();
        self.read_u32::<LittleEndian>()
            .map_err(|_| LogoError::truncated(what, 4, available))
    }

    fn read_u32_array(&mut self, count: usize, what: &str) -> Result<Vec<u32>, LogoError> {
        let needed = count.saturating_mul(4);
        let available = self.bytes_left();
        if needed > available {
            return Err(LogoError::truncated(what, needed, available));
        }
        let mut values = vec![0u32; count];
        self.read_u32_into::<LittleEndian>(&mut values)
            .map_err(|_| LogoError::truncated(what, needed, available))?;
        Ok(values)
    }

    fn read_span(&mut self, length: usize, what: &str) -> Result<&'a [u8], LogoError> {
        let available = self.bytes_left();
        if length > available {
            return Err(LogoError::truncated(what, length, available));
        }
        let data: &'a [u8] = *self.get_ref();
        let start = self.position() as usize;
        self.set_position((start + length) as u64);
        Ok(&data[start..start + length])
    }
}

/// Positional writes into a growable buffer.
pub(crate) trait PositionalWriteExt {
    /// Writes `bytes` at `offset`, growing the buffer with zeros when it is too short.
    fn write_at(&mut self, offset: usize, bytes: &[u8]);

    /// Writes a little-endian `u32` at `offset`.
    fn write_u32_at(&mut self, offset: usize, value: u32) {
        let mut word = [0u8; 4];
        LittleEndian::write_u32(&mut word, value);
        self.write_at(offset, &word);
    }
}

impl PositionalWriteExt for Vec<u8> {
    fn write_at(&mut self, offset: usize, bytes: &[u8]) {
        let end = offset + bytes.len();
        if self.len() < end {
            self.resize(end, 0);
        }
        self[offset..end].copy_from_slice(bytes);
    }
}
