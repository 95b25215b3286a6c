//! Frame rendering and PNG export.
//!
//! One field cell maps to a `scale` x `scale` pixel block over the fixed
//! display range [FIELD_VMIN, FIELD_VMAX].

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgba, RgbaImage};

use quench_core::constants::{FIELD_VMAX, FIELD_VMIN};
use quench_core::field::ScalarField;

use crate::colormap;

/// Filename of the distinguished transition frame.
pub const BOOTSTRAP_FRAME_NAME: &str = "frame_bootstrap.png";

/// Render the field to an RGBA image, upscaled by `scale` pixels per cell.
pub fn render_field(field: &ScalarField, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let size = field.size() as u32;
    let mut img: RgbaImage = ImageBuffer::new(size * scale, size * scale);

    for py in 0..size * scale {
        for px in 0..size * scale {
            let row = (py / scale) as usize;
            let col = (px / scale) as usize;
            let [r, g, b] = colormap::map_value(field.get(row, col), FIELD_VMIN, FIELD_VMAX);
            img.put_pixel(px, py, Rgba([r, g, b, 255]));
        }
    }

    img
}

/// Save the field as a PNG frame.
pub fn save_frame(field: &ScalarField, path: &Path, scale: u32) -> Result<(), image::ImageError> {
    let img = render_field(field, scale);
    img.save(path)
}

/// Numbered frame path inside `dir`: `frame_0000.png`, `frame_0200.png`, ...
pub fn frame_filename(dir: &Path, tick: u64) -> PathBuf {
    dir.join(format!("frame_{tick:04}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        let field = ScalarField::zeros(8);
        let img = render_field(&field, 1);
        assert_eq!(img.dimensions(), (8, 8));
        let img = render_field(&field, 4);
        assert_eq!(img.dimensions(), (32, 32));
    }

    #[test]
    fn test_zero_scale_clamps_to_one() {
        let field = ScalarField::zeros(4);
        let img = render_field(&field, 0);
        assert_eq!(img.dimensions(), (4, 4));
    }

    #[test]
    fn test_uniform_field_renders_uniform_color() {
        let field = ScalarField::zeros(4);
        let img = render_field(&field, 2);
        let first = img.get_pixel(0, 0);
        for pixel in img.pixels() {
            assert_eq!(pixel, first);
        }
        // Zero sits mid-range, which is the dark center of the palette.
        let Rgba([r, g, b, a]) = *first;
        assert_eq!(a, 255);
        assert!(r < 80 && g < 80 && b < 80);
    }

    #[test]
    fn test_upscale_blocks_are_solid() {
        let mut field = ScalarField::zeros(2);
        field.set(0, 0, 2.0);
        field.set(1, 1, -2.0);
        let img = render_field(&field, 3);
        // All pixels in the (0,0) block share the cell's color.
        let corner = img.get_pixel(0, 0);
        for py in 0..3 {
            for px in 0..3 {
                assert_eq!(img.get_pixel(px, py), corner);
            }
        }
    }

    #[test]
    fn test_frame_filename_zero_pads() {
        let path = frame_filename(Path::new("frames"), 200);
        assert_eq!(path, PathBuf::from("frames/frame_0200.png"));
        let path = frame_filename(Path::new("frames"), 12345);
        assert_eq!(path, PathBuf::from("frames/frame_12345.png"));
    }
}
