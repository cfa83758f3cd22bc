//! Shared drawing surface for every document renderer.
//!
//! Each string drawn through the canvas is also recorded, so the caller can
//! check the ground-truth field map against what the image shows.

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use imageproc::rect::Rect;

use super::typeface::{Typeface, Weight};

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
pub const SILVER: Rgb<u8> = Rgb([204, 204, 204]);
pub const PANEL: Rgb<u8> = Rgb([240, 240, 240]);
pub const NAVY: Rgb<u8> = Rgb([0, 51, 102]);
pub const RED: Rgb<u8> = Rgb([200, 0, 0]);
pub const GREEN: Rgb<u8> = Rgb([0, 128, 0]);

/// Text stamped diagonally over every document.
pub const WATERMARK_TEXT: &str = "SAMPLE - FOR TESTING ONLY";
const WATERMARK_SIZE: f32 = 24.0;
const WATERMARK_COLOR: Rgba<u8> = Rgba([200, 200, 200, 128]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: Weight,
    pub color: Rgb<u8>,
}

impl TextStyle {
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: Weight::Regular,
            color: BLACK,
        }
    }

    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: Weight::Bold,
            color: BLACK,
        }
    }

    pub const fn color(mut self, color: Rgb<u8>) -> Self {
        self.color = color;
        self
    }
}

pub struct DocumentCanvas<'a> {
    image: RgbImage,
    typeface: &'a Typeface,
    drawn: Vec<String>,
}

impl<'a> DocumentCanvas<'a> {
    /// White canvas of fixed pixel dimensions.
    pub fn new(width: u32, height: u32, typeface: &'a Typeface) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, WHITE),
            typeface,
            drawn: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }

    pub fn measure(&self, text: &str, style: TextStyle) -> i32 {
        self.typeface.measure(text, style.size, style.weight) as i32
    }

    /// Left-aligned text with its top edge at `y`.
    pub fn text(&mut self, x: i32, y: i32, text: &str, style: TextStyle) {
        self.typeface
            .draw(&mut self.image, style.color, x, y, text, style.size, style.weight);
        self.drawn.push(text.to_string());
    }

    /// Text centered horizontally on `cx`, top edge at `y`.
    pub fn text_centered(&mut self, cx: i32, y: i32, text: &str, style: TextStyle) {
        let x = cx - self.measure(text, style) / 2;
        self.text(x, y, text, style);
    }

    /// Text whose right edge ends at `right`.
    pub fn text_right(&mut self, right: i32, y: i32, text: &str, style: TextStyle) {
        let x = right - self.measure(text, style);
        self.text(x, y, text, style);
    }

    /// Word-wrapped paragraph. Returns the y coordinate below the last line.
    pub fn paragraph(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        style: TextStyle,
        max_width: u32,
        line_height: i32,
    ) -> i32 {
        let mut y = y;
        for line in wrap_lines(self.typeface, text, style, max_width) {
            self.text(x, y, &line, style);
            y += line_height;
        }
        y
    }

    /// Rectangle outline between two corners, `thickness` pixels inward.
    pub fn bordered_box(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>, thickness: u32) {
        for inset in 0..thickness as i32 {
            let w = x1 - x0 - 2 * inset;
            let h = y1 - y0 - 2 * inset;
            if w <= 0 || h <= 0 {
                break;
            }
            let rect = Rect::at(x0 + inset, y0 + inset).of_size(w as u32, h as u32);
            draw_hollow_rect_mut(&mut self.image, rect, color);
        }
    }

    pub fn filled_box(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
        let (w, h) = (x1 - x0, y1 - y0);
        if w > 0 && h > 0 {
            let rect = Rect::at(x0, y0).of_size(w as u32, h as u32);
            draw_filled_rect_mut(&mut self.image, rect, color);
        }
    }

    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
        draw_line_segment_mut(
            &mut self.image,
            (x0 as f32, y0 as f32),
            (x1 as f32, y1 as f32),
            color,
        );
    }

    /// Signature rule with a caption below it.
    pub fn signature_line(&mut self, x: i32, y: i32, length: i32, caption: &str, style: TextStyle) {
        self.line(x, y, x + length, y, BLACK);
        self.text(x, y + 5, caption, style);
    }

    /// Small square checkbox, ticked with an `X` when `checked`.
    pub fn checkbox(&mut self, x: i32, y: i32, checked: bool) {
        self.bordered_box(x, y, x + 12, y + 12, BLACK, 1);
        if checked {
            self.line(x + 2, y + 2, x + 10, y + 10, BLACK);
            self.line(x + 10, y + 2, x + 2, y + 10, BLACK);
        }
    }

    /// Stamp the rotated, semi-transparent watermark across the canvas.
    ///
    /// Glyph coverage is drawn into a grayscale mask, so antialiased edges
    /// only fade the watermark colour and never darken it.
    pub fn watermark(&mut self, text: &str) {
        let (width, height) = self.image.dimensions();
        let mut mask = GrayImage::new(width, height);

        let text_width = self.typeface.measure(text, WATERMARK_SIZE, Weight::Bold) as i32;
        let x = (width as i32 - text_width) / 2;
        let y = (height as i32 - WATERMARK_SIZE as i32) / 2;
        self.typeface
            .draw(&mut mask, Luma([255]), x, y, text, WATERMARK_SIZE, Weight::Bold);

        // Rise along the bottom-left to top-right diagonal.
        let theta = -(height as f32).atan2(width as f32);
        let rotated = rotate_about_center(&mask, theta, Interpolation::Bilinear, Luma([0]));

        let opacity = f32::from(WATERMARK_COLOR[3]) / 255.0;
        for (px, py, coverage) in rotated.enumerate_pixels() {
            if coverage[0] == 0 {
                continue;
            }
            let alpha = f32::from(coverage[0]) / 255.0 * opacity;
            let base = self.image.get_pixel_mut(px, py);
            for c in 0..3 {
                let blended = f32::from(base[c]) * (1.0 - alpha) + f32::from(WATERMARK_COLOR[c]) * alpha;
                base[c] = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
        self.drawn.push(text.to_string());
    }

    /// Apply the standard watermark and hand back the raster and text log.
    pub fn finish(mut self) -> (RgbImage, Vec<String>) {
        self.watermark(WATERMARK_TEXT);
        (self.image, self.drawn)
    }
}

/// Greedy word wrap to `max_width` pixels.
///
/// A single word wider than the limit gets a line of its own rather than
/// being split.
pub fn wrap_lines(typeface: &Typeface, text: &str, style: TextStyle, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if typeface.measure(&candidate, style.size, style.weight) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let face = Typeface::builtin();
        let style = TextStyle::regular(12.0);
        let text = "No goods or services were provided in exchange for this donation. \
                    This receipt may be used for tax purposes.";
        let lines = wrap_lines(&face, text, style, 300);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(face.measure(line, 12.0, Weight::Regular) <= 300, "{}", line);
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_keeps_oversized_word_whole() {
        let face = Typeface::builtin();
        let lines = wrap_lines(&face, "a supercalifragilistic b", TextStyle::regular(12.0), 40);
        assert!(lines.contains(&"supercalifragilistic".to_string()));
    }

    #[test]
    fn test_canvas_records_drawn_text() {
        let face = Typeface::builtin();
        let mut canvas = DocumentCanvas::new(200, 100, &face);
        canvas.text(10, 10, "Receipt Number: RCP-2025-12345", TextStyle::regular(12.0));
        canvas.text_centered(100, 40, "EIN: 12-3456789", TextStyle::bold(12.0));
        let (image, drawn) = canvas.finish();
        assert_eq!(image.dimensions(), (200, 100));
        assert_eq!(drawn[0], "Receipt Number: RCP-2025-12345");
        assert_eq!(drawn[1], "EIN: 12-3456789");
        assert_eq!(drawn.last().map(String::as_str), Some(WATERMARK_TEXT));
    }

    #[test]
    fn test_watermark_tints_canvas() {
        let face = Typeface::builtin();
        let mut canvas = DocumentCanvas::new(300, 300, &face);
        canvas.watermark(WATERMARK_TEXT);
        let (image, _) = canvas.finish();
        assert!(image.pixels().any(|p| *p != WHITE));
        // Semi-transparent: never fully dark.
        assert!(image.pixels().all(|p| p[0] > 100));
    }

    #[test]
    fn test_watermark_edges_never_darker_than_full_coverage() {
        let face = Typeface::builtin();
        let (image, _) = DocumentCanvas::new(400, 300, &face).finish();

        // Full coverage over white lands at 255 * (1 - a) + 200 * a.
        let opacity = f32::from(WATERMARK_COLOR[3]) / 255.0;
        let floor = (255.0 * (1.0 - opacity) + f32::from(WATERMARK_COLOR[0]) * opacity).round() as u8;
        let darkest = image.pixels().flat_map(|p| p.0).min().unwrap();
        assert!(darkest >= floor, "darkest {} below {}", darkest, floor);
        assert!(darkest < 255);
    }

    #[test]
    fn test_bordered_box_draws_outline_only() {
        let face = Typeface::builtin();
        let mut canvas = DocumentCanvas::new(50, 50, &face);
        canvas.bordered_box(5, 5, 45, 45, BLACK, 2);
        assert_eq!(*canvas.image.get_pixel(5, 5), BLACK);
        assert_eq!(*canvas.image.get_pixel(6, 6), BLACK);
        assert_eq!(*canvas.image.get_pixel(25, 25), WHITE);
    }
}
