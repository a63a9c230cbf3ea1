//! Vertical page compositing for Hokusai.
//!
//! The final step of a generation run: stack every page image top-to-bottom
//! into one strip. Pure and deterministic; re-running on the same inputs
//! produces a pixel-identical output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use hokusai_error::HokusaiResult;
use image::{GenericImage, RgbaImage};
use std::path::{Path, PathBuf};

pub use hokusai_error::{ComposeError, ComposeErrorKind};

/// Combine page images vertically and write the strip to `output_path`.
///
/// The output width is the maximum input width, the height is the sum of
/// input heights; each input is pasted left-aligned at x = 0 in input
/// order, with transparent padding to the right of any narrower image.
///
/// The strip is written to a temporary file and renamed into place, so a
/// failure never leaves a partial file at `output_path`.
///
/// # Errors
///
/// - [`ComposeErrorKind::NoImages`] when `image_paths` is empty
/// - [`ComposeErrorKind::ImageOpen`] when any input cannot be opened or
///   decoded; nothing is written
/// - [`ComposeErrorKind::ImageWrite`] when encoding or the final rename
///   fails
#[tracing::instrument(skip(image_paths, output_path), fields(inputs = image_paths.len()))]
pub fn combine_images_vertical(
    image_paths: &[PathBuf],
    output_path: &Path,
) -> HokusaiResult<()> {
    if image_paths.is_empty() {
        return Err(ComposeError::new(ComposeErrorKind::NoImages).into());
    }

    // Open all inputs up front so a bad page aborts before any compositing.
    let mut images = Vec::with_capacity(image_paths.len());
    for path in image_paths {
        let img = image::open(path)
            .map_err(|e| {
                ComposeError::new(ComposeErrorKind::ImageOpen {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            })?
            .to_rgba8();
        images.push(img);
    }

    let max_width = images.iter().map(RgbaImage::width).max().unwrap_or(0);
    let total_height: u32 = images.iter().map(RgbaImage::height).sum();

    // Zeroed RGBA canvas: transparent padding right of narrower pages.
    let mut combined = RgbaImage::new(max_width, total_height);

    let mut y_offset = 0u32;
    for img in &images {
        combined.copy_from(img, 0, y_offset).map_err(|e| {
            ComposeError::new(ComposeErrorKind::ImageWrite {
                path: output_path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        y_offset += img.height();
    }

    let temp_path = output_path.with_extension("tmp");
    combined
        .save_with_format(&temp_path, image::ImageFormat::Png)
        .map_err(|e| {
            ComposeError::new(ComposeErrorKind::ImageWrite {
                path: temp_path.display().to_string(),
                message: e.to_string(),
            })
        })?;

    std::fs::rename(&temp_path, output_path).map_err(|e| {
        ComposeError::new(ComposeErrorKind::ImageWrite {
            path: output_path.display().to_string(),
            message: e.to_string(),
        })
    })?;

    tracing::info!(
        output = %output_path.display(),
        width = max_width,
        height = total_height,
        "Combined page images"
    );

    Ok(())
}
