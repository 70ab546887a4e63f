//! Resampling and grayscale rasterization backed by the `image` crate.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, GrayImage, Luma};

/// Resizes an image to exactly the requested size.
pub trait Resampler {
    fn resample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;
}

/// Reduces an image to a single-channel intensity grid, row-major, origin top-left.
pub trait Rasterizer {
    fn rasterize(&self, image: &DynamicImage) -> GrayImage;
}

/// Smooth exact-size resize using a convolution filter.
#[derive(Debug, Clone, Copy)]
pub struct SmoothResampler {
    filter: FilterType,
}

impl SmoothResampler {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> FilterType {
        self.filter
    }
}

impl Default for SmoothResampler {
    fn default() -> Self {
        Self::new(FilterType::Lanczos3)
    }
}

impl Resampler for SmoothResampler {
    fn resample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if image.dimensions() == (width, height) {
            return image.clone();
        }
        image.resize_exact(width, height, self.filter)
    }
}

/// Luma conversion (Rec. 709 weights, as applied by `image`).
///
/// Translucent pixels are composited over black, so fully transparent
/// areas come out at intensity 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct LumaRasterizer;

impl Rasterizer for LumaRasterizer {
    fn rasterize(&self, image: &DynamicImage) -> GrayImage {
        if !image.color().has_alpha() {
            return image.to_luma8();
        }
        let luma_alpha = image.to_luma_alpha8();
        GrayImage::from_fn(luma_alpha.width(), luma_alpha.height(), |x, y| {
            let [l, a] = luma_alpha.get_pixel(x, y).0;
            Luma([((l as u16 * a as u16 + 127) / 255) as u8])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn resample_hits_exact_size() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(500, 200));
        let resized = SmoothResampler::default().resample(&image, 100, 40);
        assert_eq!(resized.dimensions(), (100, 40));
    }

    #[test]
    fn resample_same_size_is_untouched() {
        let gray = GrayImage::from_fn(3, 2, |x, y| Luma([(x * 40 + y * 100) as u8]));
        let image = DynamicImage::ImageLuma8(gray.clone());
        let out = SmoothResampler::new(FilterType::Triangle).resample(&image, 3, 2);
        assert_eq!(out.to_luma8(), gray);
    }

    #[test]
    fn flat_image_stays_flat_after_downscale() {
        let gray = GrayImage::from_pixel(64, 32, Luma([200]));
        let image = DynamicImage::ImageLuma8(gray);
        let out = SmoothResampler::default().resample(&image, 16, 8).to_luma8();
        assert!(out.pixels().all(|p| p.0[0].abs_diff(200) <= 1));
    }

    #[test]
    fn rasterize_extremes() {
        let mut rgb = RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, Rgb([0, 0, 0]));
        rgb.put_pixel(1, 0, Rgb([255, 255, 255]));
        let gray = LumaRasterizer.rasterize(&DynamicImage::ImageRgb8(rgb));
        assert_eq!(gray.dimensions(), (2, 1));
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert_eq!(gray.get_pixel(1, 0).0[0], 255);
    }

    #[test]
    fn alpha_is_composited_over_black() {
        let mut rgba = RgbaImage::new(3, 1);
        rgba.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
        rgba.put_pixel(1, 0, Rgba([255, 255, 255, 128]));
        rgba.put_pixel(2, 0, Rgba([255, 255, 255, 255]));
        let gray = LumaRasterizer.rasterize(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert_eq!(gray.get_pixel(1, 0).0[0], 128);
        assert_eq!(gray.get_pixel(2, 0).0[0], 255);
    }
}
