//! Font loading and text rasterization.
//!
//! TrueType faces are loaded from disk. A face that cannot be read or parsed
//! falls back silently to the built-in 8x8 bitmap face, so rendering never
//! fails on a missing font.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::Pixel;
use imageproc::definitions::Clamp;
use imageproc::drawing::{draw_text_mut, text_size, Canvas};

/// Default DejaVu locations on Debian-family systems.
pub const DEFAULT_REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
pub const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Bitmap glyph cell width as a fraction of the requested pixel size.
const BITMAP_ASPECT: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

enum Face {
    Outline(FontVec),
    Bitmap,
}

impl Face {
    fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => match FontVec::try_from_vec(bytes) {
                Ok(font) => Face::Outline(font),
                Err(e) => {
                    tracing::debug!("Unusable font {}: {}", path.display(), e);
                    Face::Bitmap
                }
            },
            Err(e) => {
                tracing::debug!("Font {} not readable: {}", path.display(), e);
                Face::Bitmap
            }
        }
    }
}

/// A regular/bold pair of faces.
pub struct Typeface {
    regular: Face,
    bold: Face,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("regular_builtin", &matches!(self.regular, Face::Bitmap))
            .field("bold_builtin", &matches!(self.bold, Face::Bitmap))
            .finish()
    }
}

impl Default for Typeface {
    fn default() -> Self {
        Self::load(Path::new(DEFAULT_REGULAR_FONT), Path::new(DEFAULT_BOLD_FONT))
    }
}

impl Typeface {
    /// Load both faces, falling back per face to the bitmap font.
    pub fn load(regular: &Path, bold: &Path) -> Self {
        Self {
            regular: Face::load(regular),
            bold: Face::load(bold),
        }
    }

    /// Bitmap faces only. Output does not depend on installed fonts.
    pub fn builtin() -> Self {
        Self {
            regular: Face::Bitmap,
            bold: Face::Bitmap,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!((&self.regular, &self.bold), (Face::Bitmap, Face::Bitmap))
    }

    fn face(&self, weight: Weight) -> &Face {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }

    /// Rendered width of `text` in pixels.
    pub fn measure(&self, text: &str, size: f32, weight: Weight) -> u32 {
        match self.face(weight) {
            Face::Outline(font) => text_size(PxScale::from(size), font, text).0,
            Face::Bitmap => {
                let extra = u32::from(weight == Weight::Bold);
                bitmap_cell(size).0 * text.chars().count() as u32 + extra
            }
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`).
    pub fn draw<C>(
        &self,
        canvas: &mut C,
        color: C::Pixel,
        x: i32,
        y: i32,
        text: &str,
        size: f32,
        weight: Weight,
    ) where
        C: Canvas,
        <C::Pixel as Pixel>::Subpixel: Into<f32> + Clamp<f32>,
    {
        match self.face(weight) {
            Face::Outline(font) => draw_text_mut(canvas, color, x, y, PxScale::from(size), font, text),
            Face::Bitmap => {
                draw_bitmap_text(canvas, color, x, y, text, size);
                if weight == Weight::Bold {
                    draw_bitmap_text(canvas, color, x + 1, y, text, size);
                }
            }
        }
    }
}

/// Glyph cell (width, height) for the bitmap face at a pixel size.
fn bitmap_cell(size: f32) -> (u32, u32) {
    let height = size.ceil().max(8.0) as u32;
    let width = (size * BITMAP_ASPECT).ceil().max(5.0) as u32;
    (width, height)
}

/// Nearest-neighbour scaled 8x8 glyphs.
fn draw_bitmap_text<C: Canvas>(canvas: &mut C, color: C::Pixel, x: i32, y: i32, text: &str, size: f32) {
    let (cell_w, cell_h) = bitmap_cell(size);
    let (width, height) = canvas.dimensions();

    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
            continue;
        };
        let origin_x = x + (i as u32 * cell_w) as i32;
        for dy in 0..cell_h {
            let row = glyph[(dy * 8 / cell_h) as usize];
            for dx in 0..cell_w {
                if row >> (dx * 8 / cell_w) & 1 == 0 {
                    continue;
                }
                let px = origin_x + dx as i32;
                let py = y + dy as i32;
                if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                    canvas.draw_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_missing_font_falls_back_silently() {
        let face = Typeface::load(
            Path::new("/nonexistent/regular.ttf"),
            Path::new("/nonexistent/bold.ttf"),
        );
        assert!(face.is_builtin());
    }

    #[test]
    fn test_bitmap_measure_scales_with_size() {
        let face = Typeface::builtin();
        let small = face.measure("DONATION", 12.0, Weight::Regular);
        let large = face.measure("DONATION", 24.0, Weight::Regular);
        assert!(large > small);
        assert_eq!(face.measure("", 12.0, Weight::Regular), 0);
    }

    #[test]
    fn test_bitmap_draw_marks_pixels() {
        let face = Typeface::builtin();
        let mut img = RgbImage::from_pixel(100, 30, Rgb([255, 255, 255]));
        face.draw(&mut img, Rgb([0, 0, 0]), 2, 2, "EIN", 16.0, Weight::Bold);
        assert!(img.pixels().any(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_bitmap_draw_clips_at_edges() {
        let face = Typeface::builtin();
        let mut img = RgbImage::from_pixel(20, 10, Rgb([255, 255, 255]));
        // Mostly off-canvas; must not panic.
        face.draw(&mut img, Rgb([0, 0, 0]), -5, 4, "WIDE TEXT", 24.0, Weight::Regular);
    }
}
