// SPDX-License-Identifier: MPL-2.0
//! Test helpers: float assertions and small deck fixtures.

pub use approx::assert_abs_diff_eq;

use std::fs;
use std::path::Path;

/// Writes a `width`×`height` PNG to `path`.
pub fn write_png(path: &Path, width: u32, height: u32) {
    let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([40, 90, 200, 255]));
    image.save(path).expect("failed to write test png");
}

/// Writes slides `page_1.png..=page_{count}.png` into `dir`.
pub fn write_deck(dir: &Path, count: usize) {
    fs::create_dir_all(dir).expect("failed to create deck dir");
    for n in 1..=count {
        write_png(&dir.join(format!("page_{n}.png")), 16, 9);
    }
}
