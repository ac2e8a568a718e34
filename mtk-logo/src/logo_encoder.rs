use crate::codec;
use crate::error::LogoError;
use crate::ext::io_ext::PositionalWriteExt;
use crate::logo_header::{
    table_size, LogoHeader, BLOCK_SIZE_OFFSET, HEADER_SIZE, IMAGE_COUNT_OFFSET,
    OFFSET_ENTRY_SIZE, OFFSET_TABLE_OFFSET, SIGNATURE_OFFSET,
};
use crate::logo_layout::{LogoEntry, LogoLayout};
use tracing::{debug, info};

/// Builds logo containers on top of a template.
pub struct LogoEncoder;

impl LogoEncoder {
    /// Compresses `images` in order and writes them over a copy of `template`.
    ///
    /// Bytes before offset 512 are kept verbatim. Everything from 512 up to the
    /// end of the new block is overwritten; template bytes past that point are
    /// left as they were.
    pub fn encode(template: &[u8], images: &[Vec<u8>]) -> Result<Vec<u8>, LogoError> {
        Self::encode_with_layout(template, images).map(|(container, _)| container)
    }

    /// Like [`LogoEncoder::encode`], also returning the layout that was written.
    pub fn encode_with_layout(
        template: &[u8],
        images: &[Vec<u8>],
    ) -> Result<(Vec<u8>, LogoLayout), LogoError> {
        if template.len() < HEADER_SIZE {
            return Err(LogoError::truncated(
                "template header",
                HEADER_SIZE,
                template.len(),
            ));
        }

        let mut compressed = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let packed = codec::compress(image)?;
            debug!(
                index,
                raw = image.len(),
                compressed = packed.len(),
                "Compressed image"
            );
            compressed.push(packed);
        }

        let mut signature = [0u8; 4];
        signature.copy_from_slice(&template[SIGNATURE_OFFSET..SIGNATURE_OFFSET + 4]);
        let sizes: Vec<usize> = compressed.iter().map(Vec::len).collect();
        let layout = Self::layout_for(signature, &sizes)?;
        info!(
            "Writing {} pictures, total block size (8 bytes + map + pictures): {}",
            layout.header.image_count, layout.header.block_size
        );

        let mut container = template.to_vec();
        container.write_u32_at(IMAGE_COUNT_OFFSET, layout.header.image_count);
        container.write_u32_at(BLOCK_SIZE_OFFSET, layout.header.block_size);
        for entry in &layout.entries {
            container.write_u32_at(
                OFFSET_TABLE_OFFSET + entry.index * OFFSET_ENTRY_SIZE,
                entry.offset,
            );
        }
        for (entry, payload) in layout.entries.iter().zip(&compressed) {
            container.write_at(entry.absolute_range().start, payload);
        }

        Ok((container, layout))
    }

    /// Computes the offset table and block size for payloads of the given sizes.
    ///
    /// The first image starts right after the offset table, at `8 + 4 * n`
    /// bytes from the block start.
    pub fn layout_for(signature: [u8; 4], sizes: &[usize]) -> Result<LogoLayout, LogoError> {
        let overflow = || LogoError::Format("logo block exceeds 4 GiB".to_string());

        let image_count = u32::try_from(sizes.len()).map_err(|_| overflow())?;
        let mut block_size = u32::try_from(table_size(sizes.len())).map_err(|_| overflow())?;
        let mut entries = Vec::with_capacity(sizes.len());
        for (index, &size) in sizes.iter().enumerate() {
            let size = u32::try_from(size).map_err(|_| overflow())?;
            entries.push(LogoEntry {
                index,
                offset: block_size,
                size,
            });
            block_size = block_size.checked_add(size).ok_or_else(overflow)?;
        }

        Ok(LogoLayout {
            header: LogoHeader::new(signature, image_count, block_size),
            entries,
        })
    }
}
