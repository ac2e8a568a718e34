use crate::error::LogoError;
use crate::image_dir::ImageDirectory;
use crate::logo_config::LogoConfig;
use crate::logo_decoder::{LogoDecoder, UnpackedLogo};
use crate::logo_encoder::LogoEncoder;
use crate::logo_layout::LogoLayout;
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Binds the container codec to files on disk.
///
/// `LogoStorage` reads whole files into memory, hands them to
/// [`LogoDecoder`] or [`LogoEncoder`], and writes the results back out.
///
/// ```rust,no_run
/// use mtk_logo::{LogoConfig, LogoStorage};
///
/// let storage = LogoStorage::new(LogoConfig::new().with_logo_path("logo.img"));
/// let unpacked = storage.unpack().unwrap();
/// println!("{} images", unpacked.images.len());
/// ```
#[derive(Debug, Clone)]
pub struct LogoStorage {
    config: LogoConfig,
}

impl LogoStorage {
    pub fn new(config: LogoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LogoConfig {
        &self.config
    }

    /// Decodes `logo_path` and writes every image into `image_dir`.
    pub fn unpack(&self) -> Result<UnpackedLogo, LogoError> {
        let data = fs::read(&self.config.logo_path)?;
        info!(
            "Unpacking {} ({} bytes)",
            self.config.logo_path.display(),
            data.len()
        );
        let unpacked = LogoDecoder::decode(&data)?;
        ImageDirectory::new(&self.config.image_dir).write_all(&unpacked.images)?;
        info!(
            "Wrote {} images to {}",
            unpacked.images.len(),
            self.config.image_dir.display()
        );
        Ok(unpacked)
    }

    /// Rebuilds a container from `image_dir` on top of the `logo_path` template
    /// and replaces `output_path` in one step.
    pub fn repack(&self) -> Result<LogoLayout, LogoError> {
        let template = fs::read(&self.config.logo_path)?;
        let permissions = fs::metadata(&self.config.logo_path)?.permissions();
        let images = ImageDirectory::new(&self.config.image_dir).read_all()?;
        info!(
            "Repacking {} images from {} onto {}",
            images.len(),
            self.config.image_dir.display(),
            self.config.logo_path.display()
        );

        let (container, layout) = LogoEncoder::encode_with_layout(&template, &images)?;
        write_atomic(&self.config.output_path, &container, permissions)?;
        info!(
            "Wrote {} ({} bytes)",
            self.config.output_path.display(),
            container.len()
        );
        Ok(layout)
    }

    /// Reads the layout of `logo_path` without decompressing anything.
    pub fn info(&self) -> Result<LogoLayout, LogoError> {
        let data = fs::read(&self.config.logo_path)?;
        LogoDecoder::read_layout(&data)
    }
}

/// Writes `data` to a temporary file next to `path`, then renames it over `path`.
///
/// The staged file is created owner-only, so `permissions` are applied before the rename.
fn write_atomic(path: &Path, data: &[u8], permissions: Permissions) -> Result<(), LogoError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(data)?;
    staged.as_file().set_permissions(permissions)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| LogoError::Io(e.error))?;
    Ok(())
}
