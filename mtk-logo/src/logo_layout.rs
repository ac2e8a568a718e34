use crate::error::LogoError;
use crate::logo_header::{LogoHeader, HEADER_SIZE};
use std::ops::Range;

/// Represents one row of the offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoEntry {
    /// Position of the image in the container.
    pub index: usize,
    /// Offset of the compressed image, relative to the block start (offset 512).
    pub offset: u32,
    /// Length of the compressed image in bytes.
    pub size: u32,
}

impl LogoEntry {
    /// Absolute byte range of the compressed image inside the container.
    pub fn absolute_range(&self) -> Range<usize> {
        let start = HEADER_SIZE + self.offset as usize;
        start..start + self.size as usize
    }
}

/// The fixed fields and offset table of a container, without any payload data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoLayout {
    pub header: LogoHeader,
    pub entries: Vec<LogoEntry>,
}

impl LogoLayout {
    /// Builds a layout from raw offsets, deriving every entry's size.
    ///
    /// The offsets must be strictly increasing and the last one must not lie
    /// beyond `header.block_size`.
    pub fn from_offsets(header: LogoHeader, offsets: &[u32]) -> Result<Self, LogoError> {
        let mut entries = Vec::with_capacity(offsets.len());
        for (index, &offset) in offsets.iter().enumerate() {
            let end = match offsets.get(index + 1) {
                Some(&next) if next <= offset => {
                    return Err(LogoError::Format(format!(
                        "offset table is not increasing at image {}: {:#X} then {:#X}",
                        index, offset, next
                    )));
                }
                Some(&next) => next,
                None if header.block_size < offset => {
                    return Err(LogoError::Format(format!(
                        "block size {} ends before the last image at offset {:#X}",
                        header.block_size, offset
                    )));
                }
                None => header.block_size,
            };
            entries.push(LogoEntry {
                index,
                offset,
                size: end - offset,
            });
        }
        Ok(Self { header, entries })
    }

    /// Number of images described by the layout.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all compressed image sizes.
    pub fn payload_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size as u64).sum()
    }

    /// Total container length the layout requires: header plus block.
    pub fn container_size(&self) -> usize {
        HEADER_SIZE + self.header.block_size as usize
    }
}
