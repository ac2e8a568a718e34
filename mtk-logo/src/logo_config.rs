use std::path::{Path, PathBuf};

/// Default container read by `unpack` and used as the `repack` template.
pub const DEFAULT_LOGO_PATH: &str = "logo.img";
/// Default container written by `repack`.
pub const DEFAULT_OUTPUT_PATH: &str = "out.bin";
/// Default directory holding the unpacked images.
pub const DEFAULT_IMAGE_DIR: &str = "logo.d";

/// Paths used by a [`LogoStorage`](crate::logo_storage::LogoStorage) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoConfig {
    /// Container to unpack, or the template to repack onto.
    pub logo_path: PathBuf,
    /// Destination of a repacked container.
    pub output_path: PathBuf,
    /// Directory of `Img<index>.bin` files.
    pub image_dir: PathBuf,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
        }
    }
}

impl LogoConfig {
    /// Creates a configuration with the default paths.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logo_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.logo_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_image_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.image_dir = path.as_ref().to_path_buf();
        self
    }
}
