use crate::codec;
use crate::error::LogoError;
use crate::ext::io_ext::SliceReadExt;
use crate::logo_header::{LogoHeader, HEADER_SIZE, SIGNATURE, SIGNATURE_OFFSET};
use crate::logo_layout::{LogoEntry, LogoLayout};
use std::io::Cursor;
use tracing::{debug, info, warn};

/// The result of unpacking a container: its layout plus every decompressed image.
#[derive(Debug, Clone)]
pub struct UnpackedLogo {
    /// The fixed fields and offset table that were read.
    pub layout: LogoLayout,
    /// Decompressed images in container order.
    pub images: Vec<Vec<u8>>,
}

impl UnpackedLogo {
    /// Whether bytes `[8, 12)` of the device header read `logo`.
    pub fn signature_matches(&self) -> bool {
        self.layout.header.has_signature()
    }

    pub fn image_count(&self) -> u32 {
        self.layout.header.image_count
    }

    pub fn block_size(&self) -> u32 {
        self.layout.header.block_size
    }
}

/// Reads logo containers from memory.
pub struct LogoDecoder;

impl LogoDecoder {
    /// Decodes a full container, decompressing every image in order.
    ///
    /// A signature mismatch is logged and otherwise ignored.
    pub fn decode(data: &[u8]) -> Result<UnpackedLogo, LogoError> {
        let mut reader = Cursor::new(data);
        let layout = Self::read_layout_from(&mut reader)?;

        let mut images = Vec::with_capacity(layout.len());
        for entry in &layout.entries {
            let what = format!("image {}", entry.index);
            let compressed = reader.read_span(entry.size as usize, &what)?;
            let image = codec::decompress(compressed).map_err(|e| match e {
                LogoError::Format(msg) => LogoError::Format(format!("{what}: {msg}")),
                other => other,
            })?;
            debug!(
                index = entry.index,
                compressed = entry.size,
                decompressed = image.len(),
                "Decompressed image"
            );
            images.push(image);
        }

        Ok(UnpackedLogo { layout, images })
    }

    /// Reads the header fields and offset table without touching the payloads.
    pub fn read_layout(data: &[u8]) -> Result<LogoLayout, LogoError> {
        Self::read_layout_from(&mut Cursor::new(data))
    }

    fn read_layout_from(reader: &mut Cursor<&[u8]>) -> Result<LogoLayout, LogoError> {
        let device_header = reader.read_span(HEADER_SIZE, "device header")?;
        let mut signature = [0u8; 4];
        signature.copy_from_slice(&device_header[SIGNATURE_OFFSET..SIGNATURE_OFFSET + 4]);
        Self::report_signature(&signature);

        let image_count = reader.read_u32_field("image count")?;
        info!("File contains {} pictures", image_count);
        let block_size = reader.read_u32_field("block size")?;
        info!("Total block size (8 bytes + map + pictures): {}", block_size);

        let offsets = reader.read_u32_array(image_count as usize, "offset table")?;
        let header = LogoHeader::new(signature, image_count, block_size);
        if let Some(&first) = offsets.first() {
            if first as usize != header.table_size() {
                warn!(
                    "First image offset {:#X} does not follow the offset table (expected {:#X})",
                    first,
                    header.table_size()
                );
            }
        }

        let layout = LogoLayout::from_offsets(header, &offsets)?;
        for LogoEntry {
            index,
            offset,
            size,
        } in &layout.entries
        {
            debug!("img {:02} | offset {:#010X} | size {:>10}", index, offset, size);
        }
        Ok(layout)
    }

    fn report_signature(signature: &[u8; 4]) {
        if signature == SIGNATURE {
            info!("Found 'logo' signature at offset 0x08");
        } else if signature.eq_ignore_ascii_case(SIGNATURE) {
            warn!(
                "Signature {:?} at offset 0x08 differs from 'logo' only by case, continuing",
                String::from_utf8_lossy(signature)
            );
        } else {
            warn!("No 'logo' signature found at offset 0x08, continuing anyway");
        }
    }
}
