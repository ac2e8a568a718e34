use mtk_logo::{LogoConfig, LogoDecoder, LogoEncoder, LogoError, LogoStorage};
use std::fs;
use std::path::Path;

const HEADER_SIZE: usize = 512;

fn template_with_signature(signature: &[u8; 4]) -> Vec<u8> {
    let mut template: Vec<u8> = (0..HEADER_SIZE).map(|i| (i * 7) as u8).collect();
    template[8..12].copy_from_slice(signature);
    template
}

fn sample_images() -> Vec<Vec<u8>> {
    vec![
        (0..720 * 4).map(|i| (i % 256) as u8).collect(),
        vec![0xFF; 1024],
        b"charging".to_vec(),
        Vec::new(),
    ]
}

fn word(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(data[at..at + 4].try_into().unwrap())
}

#[test]
fn test_round_trip_through_buffers() {
    let template = template_with_signature(b"logo");
    for count in 0..=4 {
        let images: Vec<Vec<u8>> = sample_images().into_iter().take(count).collect();
        let first = LogoEncoder::encode(&template, &images).unwrap();
        let unpacked = LogoDecoder::decode(&first).unwrap();
        assert_eq!(unpacked.images, images);

        let second = LogoEncoder::encode(&template, &unpacked.images).unwrap();
        assert_eq!(LogoDecoder::decode(&second).unwrap().images, images);
    }
}

#[test]
fn test_offset_table_is_strictly_increasing() {
    let container = LogoEncoder::encode(&template_with_signature(b"logo"), &sample_images()).unwrap();
    let layout = LogoDecoder::read_layout(&container).unwrap();
    assert_eq!(layout.header.image_count, 4);
    for pair in layout.entries.windows(2) {
        assert!(pair[0].offset < pair[1].offset);
        assert_eq!(pair[0].offset + pair[0].size, pair[1].offset);
    }
    assert_eq!(
        layout.header.block_size as u64,
        layout.entries[0].offset as u64 + layout.payload_size()
    );
}

#[test]
fn test_reference_layout_with_hand_built_payloads() {
    // zlib streams of "a" and "boot logo", padded after their end marker to
    // exactly 10 and 20 bytes.
    let mut first = vec![0x78, 0x5E, 0x4B, 0x04, 0x00, 0x00, 0x62, 0x00, 0x62];
    let mut second = vec![
        0x78, 0x5E, 0x4B, 0xCA, 0xCF, 0x2F, 0x51, 0xC8, 0xC9, 0x4F, 0xCF, 0x07, 0x00, 0x11, 0x8E,
        0x03, 0x86,
    ];
    first.resize(10, 0);
    second.resize(20, 0);

    let mut container = template_with_signature(b"logo");
    for value in [2u32, 46, 16, 26] {
        container.extend_from_slice(&value.to_le_bytes());
    }
    container.extend_from_slice(&first);
    container.extend_from_slice(&second);

    let unpacked = LogoDecoder::decode(&container).unwrap();
    assert_eq!(unpacked.block_size(), 46);
    let sizes: Vec<u32> = unpacked.layout.entries.iter().map(|e| e.size).collect();
    assert_eq!(sizes, vec![10, 20]);
    let offsets: Vec<u32> = unpacked.layout.entries.iter().map(|e| e.offset).collect();
    assert_eq!(offsets, vec![16, 26]);
    assert_eq!(unpacked.images, vec![b"a".to_vec(), b"boot logo".to_vec()]);
}

#[test]
fn test_block_size_mismatch_is_detected() {
    let container = LogoEncoder::encode(&template_with_signature(b"logo"), &sample_images()).unwrap();
    let block_size = word(&container, 516);

    for bad in [block_size + 1, block_size - 3, 4] {
        let mut corrupted = container.clone();
        corrupted[516..520].copy_from_slice(&bad.to_le_bytes());
        match LogoDecoder::decode(&corrupted) {
            Err(LogoError::TruncatedInput { .. }) | Err(LogoError::Format(_)) => {}
            other => panic!("block size {bad} was accepted: {other:?}"),
        }
    }
}

#[test]
fn test_truncated_container_is_reported() {
    let container = LogoEncoder::encode(&template_with_signature(b"logo"), &sample_images()).unwrap();
    let err = LogoDecoder::decode(&container[..container.len() - 1]).unwrap_err();
    assert!(matches!(err, LogoError::TruncatedInput { .. }));
}

#[test]
fn test_unpack_then_repack_files() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.img");
    let image_dir = dir.path().join("logo.d");
    let output = dir.path().join("out.bin");

    let images = sample_images();
    fs::write(
        &logo,
        LogoEncoder::encode(&template_with_signature(b"logo"), &images).unwrap(),
    )
    .unwrap();

    let storage = LogoStorage::new(
        LogoConfig::new()
            .with_logo_path(&logo)
            .with_image_dir(&image_dir)
            .with_output_path(&output),
    );
    let unpacked = storage.unpack().unwrap();
    assert!(unpacked.signature_matches());
    for (index, image) in images.iter().enumerate() {
        let path = image_dir.join(format!("Img{index}.bin"));
        assert_eq!(&fs::read(path).unwrap(), image);
    }

    fs::write(image_dir.join("Img1.bin"), b"replaced").unwrap();
    let layout = storage.repack().unwrap();
    assert_eq!(layout.header.image_count, 4);

    let repacked = fs::read(&output).unwrap();
    assert_eq!(repacked[..HEADER_SIZE], fs::read(&logo).unwrap()[..HEADER_SIZE]);
    let decoded = LogoDecoder::decode(&repacked).unwrap();
    assert_eq!(decoded.images[1], b"replaced");
    assert_eq!(decoded.images[2], images[2]);
}

#[test]
fn test_repack_keeps_wrong_signature() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.img");
    let image_dir = dir.path().join("logo.d");
    let output = dir.path().join("out.bin");
    fs::write(&logo, template_with_signature(b"ABCD")).unwrap();
    fs::create_dir(&image_dir).unwrap();
    fs::write(image_dir.join("Img0.bin"), b"splash").unwrap();

    let storage = LogoStorage::new(
        LogoConfig::new()
            .with_logo_path(&logo)
            .with_image_dir(&image_dir)
            .with_output_path(&output),
    );
    storage.repack().unwrap();

    let repacked = fs::read(&output).unwrap();
    assert_eq!(&repacked[8..12], b"ABCD");
    let decoded = LogoDecoder::decode(&repacked).unwrap();
    assert!(!decoded.signature_matches());
    assert_eq!(decoded.images, vec![b"splash".to_vec()]);
}

#[test]
fn test_repack_orders_past_ten_images() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.img");
    let image_dir = dir.path().join("logo.d");
    let output = dir.path().join("out.bin");
    fs::write(&logo, template_with_signature(b"logo")).unwrap();
    fs::create_dir(&image_dir).unwrap();
    let images: Vec<Vec<u8>> = (0..12u8).map(|i| vec![i; 16]).collect();
    for (index, image) in images.iter().enumerate() {
        fs::write(image_dir.join(format!("Img{index}.bin")), image).unwrap();
    }

    let storage = LogoStorage::new(
        LogoConfig::new()
            .with_logo_path(&logo)
            .with_image_dir(&image_dir)
            .with_output_path(&output),
    );
    storage.repack().unwrap();
    assert_eq!(LogoDecoder::decode(&fs::read(&output).unwrap()).unwrap().images, images);
}

#[test]
fn test_repack_without_image_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.img");
    let output = dir.path().join("out.bin");
    fs::write(&logo, template_with_signature(b"logo")).unwrap();

    let storage = LogoStorage::new(
        LogoConfig::new()
            .with_logo_path(&logo)
            .with_image_dir(dir.path().join("logo.d"))
            .with_output_path(&output),
    );
    assert!(matches!(storage.repack(), Err(LogoError::Directory { .. })));
    assert!(!Path::new(&output).exists());
}

#[test]
fn test_info_reads_layout_only() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.img");
    let mut container = LogoEncoder::encode(&template_with_signature(b"logo"), &sample_images()).unwrap();
    // Corrupt a payload byte; info does not decompress.
    let last = container.len() - 1;
    container[last] ^= 0xFF;
    fs::write(&logo, &container).unwrap();

    let storage = LogoStorage::new(LogoConfig::new().with_logo_path(&logo));
    let layout = storage.info().unwrap();
    assert_eq!(layout.len(), 4);
    assert!(LogoDecoder::decode(&container).is_err());
}
