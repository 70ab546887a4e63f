//! Image to text graphics converter using brightness palettes.

pub mod config;
pub mod raster;
pub mod schema;
pub mod sizing;
pub mod source;

pub use config::Settings;
pub use raster::{LumaRasterizer, Rasterizer, Resampler, SmoothResampler};
pub use schema::{Palette, TextColorSchema, DEFAULT_PALETTE};
pub use source::{ImageSource, Locator};

use image::{DynamicImage, GenericImageView, GrayImage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextGraphError {
    #[error("Image aspect ratio {ratio:.3} exceeds the allowed {max_ratio:.3}")]
    BadImageSize { ratio: f64, max_ratio: f64 },
    #[error("Palette must have 1 to 256 glyphs, got {0}")]
    InvalidPaletteConfiguration(usize),
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("Rasterizer produced {actual:?}, expected {expected:?}")]
    RasterSize { expected: (u32, u32), actual: (u32, u32) },
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TextGraphError>;

/// Converts images to text, two glyphs per pixel, one line per pixel row.
///
/// Limits default to 0 (unconstrained) and the schema to [`Palette::default`].
pub struct Converter<S = Locator, R = SmoothResampler, G = LumaRasterizer> {
    max_width: u32,
    max_height: u32,
    max_ratio: f64,
    schema: Box<dyn TextColorSchema>,
    source: S,
    resampler: R,
    rasterizer: G,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            max_width: 0,
            max_height: 0,
            max_ratio: 0.0,
            schema: Box::new(Palette::default()),
            source: Locator::default(),
            resampler: SmoothResampler::default(),
            rasterizer: LumaRasterizer,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut converter = Self::new()
            .with_max_width(settings.max_width)
            .with_max_height(settings.max_height)
            .with_max_ratio(settings.max_ratio);
        if let Some(glyphs) = &settings.palette {
            converter.set_color_schema(Palette::parse(glyphs)?);
        }
        Ok(converter)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R, G> Converter<S, R, G>
where
    S: ImageSource,
    R: Resampler,
    G: Rasterizer,
{
    pub fn set_max_width(&mut self, width: u32) {
        self.max_width = width;
    }

    pub fn set_max_height(&mut self, height: u32) {
        self.max_height = height;
    }

    pub fn set_max_ratio(&mut self, ratio: f64) {
        self.max_ratio = ratio;
    }

    pub fn set_color_schema(&mut self, schema: impl TextColorSchema + 'static) {
        self.schema = Box::new(schema);
    }

    pub fn with_max_width(mut self, width: u32) -> Self {
        self.max_width = width;
        self
    }

    pub fn with_max_height(mut self, height: u32) -> Self {
        self.max_height = height;
        self
    }

    pub fn with_max_ratio(mut self, ratio: f64) -> Self {
        self.max_ratio = ratio;
        self
    }

    pub fn with_color_schema(mut self, schema: impl TextColorSchema + 'static) -> Self {
        self.set_color_schema(schema);
        self
    }

    pub fn with_source<T: ImageSource>(self, source: T) -> Converter<T, R, G> {
        Converter {
            max_width: self.max_width,
            max_height: self.max_height,
            max_ratio: self.max_ratio,
            schema: self.schema,
            source,
            resampler: self.resampler,
            rasterizer: self.rasterizer,
        }
    }

    pub fn with_resampler<T: Resampler>(self, resampler: T) -> Converter<S, T, G> {
        Converter {
            max_width: self.max_width,
            max_height: self.max_height,
            max_ratio: self.max_ratio,
            schema: self.schema,
            source: self.source,
            resampler,
            rasterizer: self.rasterizer,
        }
    }

    pub fn with_rasterizer<T: Rasterizer>(self, rasterizer: T) -> Converter<S, R, T> {
        Converter {
            max_width: self.max_width,
            max_height: self.max_height,
            max_ratio: self.max_ratio,
            schema: self.schema,
            source: self.source,
            resampler: self.resampler,
            rasterizer,
        }
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    pub fn max_ratio(&self) -> f64 {
        self.max_ratio
    }

    /// Resolve `location` through the configured source and convert it.
    pub fn convert(&self, location: &str) -> Result<String> {
        let image = self.source.open(location)?;
        self.convert_image(&image)
    }

    pub fn convert_image(&self, image: &DynamicImage) -> Result<String> {
        let (img_w, img_h) = image.dimensions();
        if img_w == 0 || img_h == 0 {
            return Err(TextGraphError::EmptyImage { width: img_w, height: img_h });
        }

        sizing::check_ratio(img_w, img_h, self.max_ratio)?;

        let (out_w, out_h) = sizing::target_size(img_w, img_h, self.max_width, self.max_height);
        log::debug!("converting {img_w}x{img_h} -> {out_w}x{out_h}");

        let resized = self.resampler.resample(image, out_w, out_h);
        let gray = self.rasterizer.rasterize(&resized);
        if gray.dimensions() != (out_w, out_h) {
            return Err(TextGraphError::RasterSize {
                expected: (out_w, out_h),
                actual: gray.dimensions(),
            });
        }

        Ok(self.render(&gray))
    }

    fn render(&self, gray: &GrayImage) -> String {
        let (w, h) = gray.dimensions();
        let mut text = String::with_capacity(((2 * w as usize) + 1) * h as usize);
        for row in gray.rows() {
            for pixel in row {
                // Glyphs are about twice as tall as wide
                let c = self.schema.convert(pixel.0[0]);
                text.push(c);
                text.push(c);
            }
            text.push('\n');
        }
        text
    }
}
