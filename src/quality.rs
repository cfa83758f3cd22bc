//! Scan-quality degradation applied to rendered documents.
//!
//! Each tier maps to one fixed set of settings. Only `edge` rotates, and the
//! canvas is grown to the rotated bounding box so no content is clipped.

use image::{imageops, Rgb, RgbImage};
use imageproc::filter::gaussian_blur_f32;
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use rand::Rng;

use crate::models::QualityTier;

/// Probability that a given pixel receives a noise offset.
const NOISE_PROBABILITY: f64 = 0.1;

const FILL: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSettings {
    pub blur_sigma: f32,
    /// Largest absolute per-pixel channel offset.
    pub noise: i16,
    /// Rotation range in degrees, sign chosen at random.
    pub rotation: Option<(u32, u32)>,
}

impl TierSettings {
    pub fn for_tier(tier: QualityTier) -> Self {
        match tier {
            QualityTier::High => Self {
                blur_sigma: 0.0,
                noise: 0,
                rotation: None,
            },
            QualityTier::Medium => Self {
                blur_sigma: 0.5,
                noise: 10,
                rotation: None,
            },
            QualityTier::Low => Self {
                blur_sigma: 1.5,
                noise: 25,
                rotation: None,
            },
            QualityTier::Edge => Self {
                blur_sigma: 0.8,
                noise: 30,
                rotation: Some((5, 15)),
            },
        }
    }
}

/// Degrade `image` according to `tier`.
pub fn degrade<R: Rng + ?Sized>(image: RgbImage, tier: QualityTier, rng: &mut R) -> RgbImage {
    let settings = TierSettings::for_tier(tier);
    let mut image = image;

    if settings.blur_sigma > 0.0 {
        image = gaussian_blur_f32(&image, settings.blur_sigma);
    }

    if settings.noise > 0 {
        add_noise(&mut image, settings.noise, rng);
    }

    if let Some((min, max)) = settings.rotation {
        let degrees = rng.gen_range(min..=max) as f32;
        let degrees = if rng.gen_bool(0.5) { degrees } else { -degrees };
        image = rotate_expanded(&image, degrees);
    }

    image
}

fn add_noise<R: Rng + ?Sized>(image: &mut RgbImage, magnitude: i16, rng: &mut R) {
    for pixel in image.pixels_mut() {
        if !rng.gen_bool(NOISE_PROBABILITY) {
            continue;
        }
        let offset = rng.gen_range(-magnitude..=magnitude);
        for channel in pixel.0.iter_mut() {
            *channel = (*channel as i16 + offset).clamp(0, 255) as u8;
        }
    }
}

/// Rotate by `degrees` onto a white canvas sized to the rotated bounds.
fn rotate_expanded(image: &RgbImage, degrees: f32) -> RgbImage {
    let (width, height) = image.dimensions();
    let theta = degrees.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let new_width = (width as f32 * cos + height as f32 * sin).ceil() as u32;
    let new_height = (width as f32 * sin + height as f32 * cos).ceil() as u32;

    let mut padded = RgbImage::from_pixel(new_width.max(width), new_height.max(height), FILL);
    let x = (padded.width() - width) / 2;
    let y = (padded.height() - height) / 2;
    imageops::overlay(&mut padded, image, x as i64, y as i64);

    rotate_about_center(&padded, theta, Interpolation::Bilinear, FILL)
}
