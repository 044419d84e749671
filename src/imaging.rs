//! Burn the searched date into a downloaded thumbnail.
//!
//! The label only ever holds a `YYYY-MM-DD` date, so a tiny built-in 5x7
//! bitmap font covering digits and `-` is enough; other characters render
//! as blanks.

use image::{Rgb, RgbImage};
use std::path::Path;

use crate::error::AnnotateError;

const TEXT_X: u32 = 10;
/// Text baseline sits this many pixels above the bottom edge.
const TEXT_BOTTOM_OFFSET: u32 = 25;
const SCALE: u32 = 2;
const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const SHADOW: Rgb<u8> = Rgb([0, 0, 0]);

/// Rows top to bottom, low 5 bits, MSB = leftmost column.
fn glyph(c: char) -> [u8; GLYPH_HEIGHT as usize] {
    match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        _ => [0; GLYPH_HEIGHT as usize],
    }
}

fn draw_text(img: &mut RgbImage, text: &str, x: u32, y: u32, color: Rgb<u8>) {
    let advance = (GLYPH_WIDTH + 1) * SCALE;
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + i as u32 * advance;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                for dy in 0..SCALE {
                    for dx in 0..SCALE {
                        let px = origin_x + col * SCALE + dx;
                        let py = y + row as u32 * SCALE + dy;
                        if px < img.width() && py < img.height() {
                            img.put_pixel(px, py, color);
                        }
                    }
                }
            }
        }
    }
}

/// Rewrite the image at `path` with `label` in the bottom-left corner.
/// The output format follows the file extension.
pub(crate) fn annotate(path: &Path, label: &str) -> Result<(), AnnotateError> {
    let mut img = image::open(path)?.to_rgb8();
    let y = img.height().saturating_sub(TEXT_BOTTOM_OFFSET);

    draw_text(&mut img, label, TEXT_X + 1, y + 1, SHADOW);
    draw_text(&mut img, label, TEXT_X, y, FOREGROUND);

    img.save(path)?;
    tracing::debug!("Added text to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_pixels(img: &RgbImage, rows: std::ops::Range<u32>) -> usize {
        img.enumerate_pixels()
            .filter(|(_, y, p)| rows.contains(y) && **p == FOREGROUND)
            .count()
    }

    #[test]
    fn label_lands_near_bottom_left() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("photo.png");
        RgbImage::from_pixel(200, 80, Rgb([40, 40, 40])).save(&path).unwrap();

        annotate(&path, "2019-06-10").unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (200, 80));
        let text_top = 80 - TEXT_BOTTOM_OFFSET;
        assert!(white_pixels(&img, text_top..text_top + GLYPH_HEIGHT * SCALE) > 0);
        assert_eq!(white_pixels(&img, 0..text_top), 0);
        // nothing left of the margin
        assert!(img
            .enumerate_pixels()
            .filter(|(x, _, _)| *x < TEXT_X)
            .all(|(_, _, p)| *p != FOREGROUND));
    }

    #[test]
    fn tiny_images_are_clipped_not_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tiny.png");
        RgbImage::new(12, 8).save(&path).unwrap();
        annotate(&path, "2019-06-10").unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 12);
    }

    #[test]
    fn unsupported_glyphs_draw_nothing() {
        let mut img = RgbImage::new(40, 20);
        draw_text(&mut img, "ab ", 0, 0, FOREGROUND);
        assert_eq!(white_pixels(&img, 0..20), 0);
    }

    #[test]
    fn non_image_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("notes.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();
        assert!(annotate(&path, "2019-06-10").is_err());
    }
}
