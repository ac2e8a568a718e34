//! Fixed layout of a logo container: the opaque device header, the two block
//! words that follow it, and the offset table.

/// Size of the opaque device header that prefixes every container.
pub const HEADER_SIZE: usize = 512;
/// Offset of the optional ASCII signature inside the device header.
pub const SIGNATURE_OFFSET: usize = 8;
/// The expected signature bytes.
pub const SIGNATURE: &[u8; 4] = b"logo";
/// Absolute offset of the image count word.
pub const IMAGE_COUNT_OFFSET: usize = HEADER_SIZE;
/// Absolute offset of the block size word.
pub const BLOCK_SIZE_OFFSET: usize = HEADER_SIZE + 4;
/// Absolute offset of the first offset table entry.
pub const OFFSET_TABLE_OFFSET: usize = HEADER_SIZE + 8;
/// Bytes taken by the count and block size words, counted in `block_size`.
pub const BLOCK_PREFIX_SIZE: usize = 8;
/// Size of one offset table entry.
pub const OFFSET_ENTRY_SIZE: usize = 4;
/// zlib level used for every image on encode.
pub const COMPRESSION_LEVEL: u32 = 3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Represents the decoded fixed fields of a logo container.
///
/// `LogoHeader` keeps the four signature bytes exactly as they were read so a
/// mismatch can be reported without altering the data.
pub struct LogoHeader {
    /// Bytes `[8, 12)` of the device header.
    pub signature: [u8; 4],
    /// Number of images in the offset table.
    pub image_count: u32,
    /// Length of the block starting at offset 512, including the two block words.
    pub block_size: u32,
}

impl LogoHeader {
    /// Creates a header from the fixed fields.
    pub fn new(signature: [u8; 4], image_count: u32, block_size: u32) -> Self {
        Self {
            signature,
            image_count,
            block_size,
        }
    }

    /// Returns `true` when the signature reads `logo`.
    pub fn has_signature(&self) -> bool {
        &self.signature == SIGNATURE
    }

    /// Size of the count/size words plus the offset table, which is also the
    /// offset of the first payload relative to the block start.
    pub fn table_size(&self) -> usize {
        table_size(self.image_count as usize)
    }
}

/// Returns the block size seed for `image_count` images.
pub fn table_size(image_count: usize) -> usize {
    BLOCK_PREFIX_SIZE + OFFSET_ENTRY_SIZE * image_count
}
