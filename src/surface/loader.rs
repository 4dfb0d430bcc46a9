// SPDX-License-Identifier: MPL-2.0
//! Slide decoding: raster formats through `image`, SVG through `resvg`.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded slide, ready to hand to an image widget.
#[derive(Debug, Clone)]
pub struct SlideImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl SlideImage {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Pixel size the slide was rendered at.
    ///
    /// `None` when the resource reports no usable size; callers fall back to
    /// the deck's design resolution.
    #[must_use]
    pub fn intrinsic_size(&self) -> Option<Size> {
        (self.width > 0 && self.height > 0)
            .then(|| Size::new(self.width as f32, self.height as f32))
    }

    /// Approximate memory footprint of the decoded pixels.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes the slide at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read or decoded, and
/// [`Error::Svg`] when an SVG slide fails to parse or has no area.
pub fn load_slide(path: &Path) -> Result<SlideImage> {
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        load_svg(path)
    } else {
        let bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&bytes)?;
        let (width, height) = img.dimensions();
        Ok(SlideImage::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

fn load_svg(path: &Path) -> Result<SlideImage> {
    let data = fs::read(path)?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(SlideImage::from_rgba(width, height, pixmap.take()))
}

/// Decodes a slide on the blocking pool.
///
/// # Errors
///
/// Same as [`load_slide`], plus [`Error::Io`] if the blocking task panicked.
pub async fn load_slide_async(path: PathBuf) -> Result<SlideImage> {
    tokio::task::spawn_blocking(move || load_slide(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_png;
    use tempfile::tempdir;

    #[test]
    fn png_slide_reports_intrinsic_size() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("page_1.png");
        write_png(&path, 16, 9);

        let slide = load_slide(&path).expect("slide should load");
        assert_eq!((slide.width, slide.height), (16, 9));
        assert_eq!(slide.intrinsic_size(), Some(Size::new(16.0, 9.0)));
        assert_eq!(slide.size_bytes(), 16 * 9 * 4);
    }

    #[test]
    fn svg_slide_is_rasterized() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("page_1.svg");
        fs::write(
            &path,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="18"><rect width="32" height="18" fill="red"/></svg>"#,
        )
        .expect("failed to write svg");

        let slide = load_slide(&path).expect("svg should load");
        assert_eq!((slide.width, slide.height), (32, 18));
    }

    #[test]
    fn missing_slide_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_slide(&dir.path().join("page_9.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn corrupt_svg_is_svg_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("page_1.svg");
        fs::write(&path, "not svg").expect("failed to write file");
        assert!(matches!(load_slide(&path), Err(Error::Svg(_))));
    }

    #[test]
    fn zero_sized_image_has_no_intrinsic_size() {
        let slide = SlideImage::from_rgba(0, 0, Vec::new());
        assert!(slide.intrinsic_size().is_none());
    }
}
