//! Image asset checks.
//!
//! Assets are identified by their content, not their extension: a file named
//! `icon.png` holding JPEG data is reported as a mismatch and can be
//! re-encoded in place.

use std::fs;
use std::io::{
    Cursor,
    ErrorKind,
};
use std::path::{
    Path,
    PathBuf,
};

use image::{
    ImageError,
    ImageFormat,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to convert {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Unrecognized image data in {}", path.display())]
    Unrecognized { path: PathBuf },
}

/// Format check result of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    /// Content is already in the canonical format
    Canonical,
    /// Content is a different, known format
    Mismatch { detected: ImageFormat },
    /// Content is not a known image format
    Unrecognized,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Converted { from: ImageFormat },
    AlreadyCanonical,
    NotFound,
}

/// Result for one file of a batch.
#[derive(Debug)]
pub struct AssetReport<T> {
    pub path: PathBuf,
    pub result: Result<T, AssetError>,
}

impl<T> AssetReport<T> {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// ファイルを読み込む。存在しない場合は `None`
fn read_bytes(path: &Path) -> Result<Option<Vec<u8>>, AssetError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(AssetError::Io { path: path.to_path_buf(), source }),
    }
}

/// Detects the format of `path` from its bytes.
pub fn inspect(path: &Path, canonical: ImageFormat) -> Result<ImageStatus, AssetError> {
    let Some(bytes) = read_bytes(path)? else {
        return Ok(ImageStatus::NotFound);
    };

    Ok(match image::guess_format(&bytes) {
        Ok(detected) if detected == canonical => ImageStatus::Canonical,
        Ok(detected) => ImageStatus::Mismatch { detected },
        Err(_) => ImageStatus::Unrecognized,
    })
}

/// Inspects every path, logging one line per file.
pub fn verify(paths: &[PathBuf], canonical: ImageFormat) -> Vec<AssetReport<ImageStatus>> {
    tracing::info!(count = paths.len(), ?canonical, "Verifying image formats");

    paths
        .iter()
        .map(|path| {
            let result = inspect(path, canonical);
            let file = path.display();
            match &result {
                Ok(ImageStatus::Canonical) => tracing::info!(%file, "Valid"),
                Ok(ImageStatus::Mismatch { detected }) => {
                    tracing::warn!(%file, ?detected, "Not in the expected format");
                }
                Ok(ImageStatus::Unrecognized) => tracing::warn!(%file, "Unrecognized image data"),
                Ok(ImageStatus::NotFound) => tracing::warn!(%file, "File not found"),
                Err(error) => tracing::error!(%file, %error, "Failed to check"),
            }
            AssetReport { path: path.clone(), result }
        })
        .collect()
}

/// Re-encodes `path` in place in the `canonical` format.
///
/// Files already in the canonical format are left untouched.
pub fn convert_file(path: &Path, canonical: ImageFormat) -> Result<Conversion, AssetError> {
    let Some(bytes) = read_bytes(path)? else {
        return Ok(Conversion::NotFound);
    };

    let detected = image::guess_format(&bytes)
        .map_err(|_| AssetError::Unrecognized { path: path.to_path_buf() })?;
    if detected == canonical {
        return Ok(Conversion::AlreadyCanonical);
    }

    let image_error = |source| AssetError::Image { path: path.to_path_buf(), source };
    let decoded = image::load_from_memory_with_format(&bytes, detected).map_err(image_error)?;
    let mut output = Cursor::new(Vec::new());
    decoded.write_to(&mut output, canonical).map_err(image_error)?;

    fs::write(path, output.into_inner())
        .map_err(|source| AssetError::Io { path: path.to_path_buf(), source })?;
    Ok(Conversion::Converted { from: detected })
}

/// Converts every path, continuing after failures.
pub fn convert(paths: &[PathBuf], canonical: ImageFormat) -> Vec<AssetReport<Conversion>> {
    paths
        .iter()
        .map(|path| {
            let result = convert_file(path, canonical);
            let file = path.display();
            match &result {
                Ok(Conversion::Converted { from }) => {
                    tracing::info!(%file, ?from, to = ?canonical, "Converted");
                }
                Ok(Conversion::AlreadyCanonical) => tracing::info!(%file, "Already in format, skipping"),
                Ok(Conversion::NotFound) => tracing::warn!(%file, "File not found"),
                Err(error) => tracing::error!(%file, %error, "Failed to convert"),
            }
            AssetReport { path: path.clone(), result }
        })
        .collect()
}
