use crate::error::LogoError;
use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name prefix of an unpacked image.
pub const IMAGE_PREFIX: &str = "Img";
/// File name suffix of an unpacked image.
pub const IMAGE_SUFFIX: &str = ".bin";

/// Returns the file name used for the image at `index`.
pub fn image_file_name(index: usize) -> String {
    format!("{IMAGE_PREFIX}{index}{IMAGE_SUFFIX}")
}

/// An `Img*.bin` file found in an image directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Index parsed from the file name, if it is numeric.
    pub index: Option<u64>,
    pub path: PathBuf,
}

impl ImageFile {
    fn from_path(path: PathBuf) -> Self {
        let index = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_prefix(IMAGE_PREFIX))
            .and_then(|n| n.strip_suffix(IMAGE_SUFFIX))
            .and_then(|n| n.parse::<u64>().ok());
        Self { index, path }
    }
}

/// A directory of unpacked images named `Img<index>.bin`.
#[derive(Debug, Clone)]
pub struct ImageDirectory {
    path: PathBuf,
}

impl ImageDirectory {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists the image files in container order.
    ///
    /// Files are ordered by the number in their name, so `Img10.bin` follows
    /// `Img9.bin`. Names without a number come last, in lexicographic order.
    pub fn list(&self) -> Result<Vec<ImageFile>, LogoError> {
        fs::read_dir(&self.path).map_err(|source| self.directory_error(source))?;

        let pattern = format!(
            "{}/{IMAGE_PREFIX}*{IMAGE_SUFFIX}",
            Pattern::escape(&self.path.display().to_string())
        );
        let entries = glob(&pattern).map_err(|e| {
            self.directory_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                e.to_string(),
            ))
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| self.directory_error(e.into_error()))?;
            if path.is_file() {
                files.push(ImageFile::from_path(path));
            }
        }
        files.sort_by(|a, b| match (a.index, b.index) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.path.cmp(&b.path)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.path.cmp(&b.path),
        });

        for (position, file) in files.iter().enumerate() {
            match file.index {
                Some(index) if index != position as u64 => warn!(
                    "{} is packed at position {}, not at its own index",
                    file.path.display(),
                    position
                ),
                None => warn!(
                    "{} has no numeric index, packing it at position {}",
                    file.path.display(),
                    position
                ),
                _ => {}
            }
        }
        Ok(files)
    }

    /// Reads every image file in container order.
    pub fn read_all(&self) -> Result<Vec<Vec<u8>>, LogoError> {
        self.list()?
            .into_iter()
            .map(|file| {
                debug!("Reading {}", file.path.display());
                fs::read(&file.path).map_err(LogoError::from)
            })
            .collect()
    }

    /// Writes `images` as `Img0.bin`, `Img1.bin`, ... creating the directory if needed.
    ///
    /// Fails before writing anything if the directory already holds image files
    /// that would not be overwritten, since a later repack would pack them too.
    pub fn write_all(&self, images: &[Vec<u8>]) -> Result<Vec<PathBuf>, LogoError> {
        fs::create_dir_all(&self.path).map_err(|source| self.directory_error(source))?;

        let stale: Vec<ImageFile> = self
            .list()?
            .into_iter()
            .filter(|file| file.index.map_or(true, |index| index >= images.len() as u64))
            .collect();
        if let Some(first) = stale.first() {
            return Err(self.directory_error(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!(
                    "{} leftover image file(s) such as {} would be repacked; remove them first",
                    stale.len(),
                    first.path.display()
                ),
            )));
        }

        let mut written = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let path = self.path.join(image_file_name(index));
            fs::write(&path, image)?;
            debug!("Wrote {} ({} bytes)", path.display(), image.len());
            written.push(path);
        }
        Ok(written)
    }

    fn directory_error(&self, source: std::io::Error) -> LogoError {
        LogoError::Directory {
            path: self.path.clone(),
            source,
        }
    }
}
