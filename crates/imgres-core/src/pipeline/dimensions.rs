//! Reading image dimensions from file headers.

use image::{ImageFormat, ImageReader};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::math;
use crate::types::ImageRecord;

use super::discovery::DiscoveredFile;

/// Width, height and format read from an image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Detected image format, if the decoder recognized one
    pub format: Option<ImageFormat>,
}

/// Builds [`ImageRecord`]s from candidate files.
pub struct DimensionReader;

impl DimensionReader {
    /// Read the header of `file` and stat its size.
    ///
    /// The file is opened, read and closed inside this call; nothing stays
    /// open on the error paths either.
    pub fn extract(file: &DiscoveredFile) -> PipelineResult<ImageRecord> {
        let dims = Self::read_dimensions(&file.path)?;

        let meta = std::fs::metadata(&file.path).map_err(|e| PipelineError::Metadata {
            path: file.path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            "{}: {}x{} {} ({} bytes)",
            file.filename,
            dims.width,
            dims.height,
            dims.format.map(format_to_string).unwrap_or("unknown"),
            meta.len()
        );

        Ok(ImageRecord::new(
            file.filename.clone(),
            dims.width,
            dims.height,
            math::bytes_to_mb(meta.len()),
        ))
    }

    /// Read width and height without decoding pixel data.
    ///
    /// The format is guessed from the file contents, falling back to the
    /// extension when the contents are not recognized.
    pub fn read_dimensions(path: &Path) -> PipelineResult<Dimensions> {
        let reader = ImageReader::open(path)
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;

        let format = reader.format();
        let (width, height) = reader.into_dimensions().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Dimensions {
            width,
            height,
            format,
        })
    }
}

/// Short lowercase name for an image format.
pub fn format_to_string(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Png => "png",
        ImageFormat::WebP => "webp",
        ImageFormat::Gif => "gif",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Bmp => "bmp",
        ImageFormat::Ico => "ico",
        ImageFormat::Pnm => "pnm",
        ImageFormat::Avif => "avif",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::path::PathBuf;

    fn candidate(path: PathBuf) -> DiscoveredFile {
        let filename = path.file_name().unwrap().to_string_lossy().into_owned();
        DiscoveredFile { path, filename }
    }

    #[test]
    fn test_format_to_string() {
        assert_eq!(format_to_string(ImageFormat::Jpeg), "jpeg");
        assert_eq!(format_to_string(ImageFormat::Png), "png");
        assert_eq!(format_to_string(ImageFormat::WebP), "webp");
    }

    #[test]
    fn test_read_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbImage::new(64, 16).save(&path).unwrap();

        let dims = DimensionReader::read_dimensions(&path).unwrap();
        assert_eq!((dims.width, dims.height), (64, 16));
        assert_eq!(dims.format, Some(ImageFormat::Png));
    }

    #[test]
    fn test_format_detected_by_content() {
        // PNG data behind a .jpg name is still read as PNG
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("misnamed.jpg");
        RgbImage::new(8, 8)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let dims = DimensionReader::read_dimensions(&path).unwrap();
        assert_eq!(dims.format, Some(ImageFormat::Png));
    }

    #[test]
    fn test_extract_builds_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tall.bmp");
        RgbImage::new(10, 30).save(&path).unwrap();
        let bytes = std::fs::metadata(&path).unwrap().len();

        let record = DimensionReader::extract(&candidate(path)).unwrap();
        assert_eq!(record.filename, "tall.bmp");
        assert_eq!((record.width, record.height), (10, 30));
        assert_eq!(record.size_mb, bytes as f64 / (1024.0 * 1024.0));
    }

    #[test]
    fn test_extract_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = DimensionReader::extract(&candidate(path)).unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));
        assert!(err.to_string().starts_with("Error processing broken.png"));
    }

    #[test]
    fn test_extract_missing_file() {
        let err = DimensionReader::extract(&candidate(PathBuf::from("/nonexistent/gone.png")))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));
    }
}
