//! Image attachments, stored inline as `data:<mime>;base64,<payload>` strings.

use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("the image is empty")]
    Empty,
    #[error("unsupported image format (expected PNG, JPEG, GIF, WebP or BMP)")]
    UnsupportedFormat,
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image encoding did not finish: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum ImageFormat {
    #[strum(serialize = "image/png")]
    Png,
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    #[strum(serialize = "image/gif")]
    Gif,
    #[strum(serialize = "image/webp")]
    Webp,
    #[strum(serialize = "image/bmp")]
    Bmp,
}

impl ImageFormat {
    fn matches(self, bytes: &[u8]) -> bool {
        match self {
            Self::Png => bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
            Self::Jpeg => bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
            Self::Gif => bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a"),
            Self::Webp => bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP",
            Self::Bmp => bytes.starts_with(b"BM"),
        }
    }

    /// Recognizes the format from the file signature.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        Self::iter().find(|format| format.matches(bytes))
    }

    pub fn mime(self) -> &'static str {
        self.into()
    }
}

/// MIME type of raw image bytes, if they are a supported image.
pub fn mime_of(bytes: &[u8]) -> Option<&'static str> {
    ImageFormat::sniff(bytes).map(ImageFormat::mime)
}

/// MIME type declared by an encoded photo, e.g. `image/png`.
pub fn mime_of_encoded(encoded: &str) -> Option<&str> {
    encoded
        .strip_prefix("data:")?
        .split_once(";base64,")
        .map(|(mime, _)| mime)
}

/// Encodes raw image bytes into a self-describing, directly displayable string.
///
/// The base64 work runs on the blocking pool so the caller's task stays responsive.
pub async fn encode(bytes: Vec<u8>) -> Result<String, PhotoError> {
    if bytes.is_empty() {
        return Err(PhotoError::Empty);
    }
    let format = ImageFormat::sniff(&bytes).ok_or(PhotoError::UnsupportedFormat)?;
    let payload = tokio::task::spawn_blocking(move || STANDARD.encode(bytes)).await?;
    Ok(format!("data:{};base64,{payload}", format.mime()))
}

/// Reads an image file and encodes it with [`encode`].
pub async fn encode_file(path: &Path) -> Result<String, PhotoError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| PhotoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    encode(bytes).await
}
