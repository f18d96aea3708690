use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ProcError, ProcResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::backend::FrameRGBA;

/// Screenshot file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenshotFormat {
    /// Portable Network Graphics.
    Png,
    /// JPEG (alpha is dropped).
    Jpeg,
    /// Single-frame GIF.
    Gif,
}

impl ScreenshotFormat {
    /// Format for a file name's extension (case-insensitive); unknown extensions fall back to PNG.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Self::Png,
            Some("jpg" | "jpeg") => Self::Jpeg,
            Some("gif") => Self::Gif,
            other => {
                tracing::warn!(
                    extension = other.unwrap_or(""),
                    path = %path.display(),
                    "unknown screenshot extension, using png"
                );
                Self::Png
            }
        }
    }

    fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Gif => image::ImageFormat::Gif,
        }
    }
}

/// Straight-alpha RGBA8 copy of `frame`.
pub(crate) fn straight_rgba(frame: &FrameRGBA) -> ProcResult<image::RgbaImage> {
    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }
    image::RgbaImage::from_raw(frame.width, frame.height, data)
        .ok_or_else(|| ProcError::encode("frame byte len does not match its dimensions"))
}

/// Encode `frame` to `path`, picking the format from the extension.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn save_frame(frame: &FrameRGBA, path: &Path) -> ProcResult<()> {
    let format = ScreenshotFormat::from_path(path);
    let rgba = straight_rgba(frame)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let img = match format {
        // JPEG has no alpha channel.
        ScreenshotFormat::Jpeg => {
            image::DynamicImage::ImageRgb8(image::DynamicImage::ImageRgba8(rgba).to_rgb8())
        }
        ScreenshotFormat::Png | ScreenshotFormat::Gif => image::DynamicImage::ImageRgba8(rgba),
    };
    img.save_with_format(path, format.image_format())
        .with_context(|| format!("write screenshot '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), ?format, "saved screenshot");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/screenshot.rs"]
mod tests;
