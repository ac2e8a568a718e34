//! # mtk-logo
//!
//! `mtk-logo` is a pure Rust reader and writer for the logo container found in
//! MediaTek bootloader partitions (`logo.img` / `logo.bin`).
//! It unpacks the zlib-compressed boot pictures and rebuilds the container from them.
//!
//! ## Layout
//! - 512-byte device header, `logo` signature at offset 8
//! - image count and block size, both little-endian `u32`
//! - one `u32` offset per image, relative to offset 512
//! - zlib streams, back to back
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mtk-logo = "0.1"
//! ```
//!
//! ### Example: Unpacking and Repacking
//! ```rust,no_run
//! use mtk_logo::{LogoConfig, LogoStorage};
//!
//! let config = LogoConfig::new()
//!     .with_logo_path("logo.img")
//!     .with_image_dir("logo.d")
//!     .with_output_path("logo.repack.img");
//! let storage = LogoStorage::new(config);
//!
//! // Writes logo.d/Img0.bin, logo.d/Img1.bin, ...
//! let unpacked = storage.unpack().unwrap();
//! println!("{} images", unpacked.images.len());
//!
//! // Rebuilds the container from logo.d on top of logo.img
//! storage.repack().unwrap();
//! ```
//!
//! The codec also works on plain buffers:
//! ```rust
//! use mtk_logo::{LogoDecoder, LogoEncoder};
//!
//! let template = vec![0u8; 512];
//! let container = LogoEncoder::encode(&template, &[b"boot".to_vec()]).unwrap();
//! let unpacked = LogoDecoder::decode(&container).unwrap();
//! assert_eq!(unpacked.images[0], b"boot");
//! ```

pub mod codec;
pub mod error;
mod ext;
pub mod image_dir;
pub mod logo_config;
pub mod logo_decoder;
pub mod logo_encoder;
pub mod logo_header;
pub mod logo_layout;
pub mod logo_storage;

pub use error::LogoError;
pub use image_dir::ImageDirectory;
pub use logo_config::LogoConfig;
pub use logo_decoder::{LogoDecoder, UnpackedLogo};
pub use logo_encoder::LogoEncoder;
pub use logo_header::LogoHeader;
pub use logo_layout::{LogoEntry, LogoLayout};
pub use logo_storage::LogoStorage;
