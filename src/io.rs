use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};
use thiserror::Error;

use crate::canvas::surface::Surface;

/// The two recoverable failure kinds; both are surfaced as dialogs and leave
/// the canvas untouched.
#[derive(Debug, Error)]
pub enum FileError {
    /// Decode failed; presented as a generic message since the user mostly
    /// just picked a file the codec cannot handle.
    #[error("unsupported or corrupt image format")]
    UnsupportedFormat(#[source] image::ImageError),
    /// Encode failed; the underlying codec message is worth showing.
    #[error("failed to save image: {0}")]
    Save(#[from] image::ImageError),
}

/// File formats the save dialog offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveFormat {
    Png,
    Jpeg,
    Bmp,
}

impl SaveFormat {
    pub fn label(&self) -> &'static str {
        match self {
            SaveFormat::Png => "PNG image",
            SaveFormat::Jpeg => "JPEG image",
            SaveFormat::Bmp => "BMP image",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SaveFormat::Png => "png",
            SaveFormat::Jpeg => "jpg",
            SaveFormat::Bmp => "bmp",
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            SaveFormat::Png => ImageFormat::Png,
            SaveFormat::Jpeg => ImageFormat::Jpeg,
            SaveFormat::Bmp => ImageFormat::Bmp,
        }
    }

    /// Infer the format from a path's extension; png when absent or unknown.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("jpg") | Some("jpeg") => SaveFormat::Jpeg,
            Some("bmp") => SaveFormat::Bmp,
            _ => SaveFormat::Png,
        }
    }
}

/// Extensions the open dialog accepts.
pub const OPEN_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Decode an image file into an RGBA buffer.
pub fn load_image(path: &Path) -> Result<RgbaImage, FileError> {
    let img = image::open(path).map_err(FileError::UnsupportedFormat)?;
    log::info!("loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img.to_rgba8())
}

/// Encode the surface to disk. The extension is appended when missing and
/// the actual write path is returned. JPEG has no alpha channel, so the
/// buffer is flattened to RGB first.
pub fn save_surface(surface: &Surface, path: PathBuf, format: SaveFormat) -> Result<PathBuf, FileError> {
    let path = ensure_extension(path, format.extension());
    let rgba = surface.to_rgba_image();
    match format {
        SaveFormat::Jpeg => {
            DynamicImage::ImageRgba8(rgba)
                .to_rgb8()
                .save_with_format(&path, format.image_format())?;
        }
        _ => rgba.save_with_format(&path, format.image_format())?,
    }
    log::info!("saved {}", path.display());
    Ok(path)
}

fn ensure_extension(mut path: PathBuf, ext: &str) -> PathBuf {
    let matches = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(current) if current.eq_ignore_ascii_case(ext)
            || (ext == "jpg" && current.eq_ignore_ascii_case("jpeg"))
    );
    if !matches {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.set_file_name(format!("{file_name}.{ext}"));
    }
    path
}
