//! Brightness to glyph mapping.

use crate::{Result, TextGraphError};

/// Default palette, ordered from the darkest intensity to the lightest.
pub const DEFAULT_PALETTE: [char; 8] = ['#', '$', '@', '%', '*', '+', '-', '\''];

/// Largest palette that still gives every glyph a bucket at least one intensity wide.
pub const MAX_PALETTE_LEN: usize = 256;

/// Maps a grayscale intensity to the glyph drawn for it.
pub trait TextColorSchema {
    fn convert(&self, intensity: u8) -> char;
}

impl<F> TextColorSchema for F
where
    F: Fn(u8) -> char,
{
    fn convert(&self, intensity: u8) -> char {
        self(intensity)
    }
}

/// Fixed ordered palette split into equal-width intensity buckets.
///
/// Bucket width is `256 / len` (integer division). For sizes that do not
/// divide 256 the trailing intensities fall past the last bucket and are
/// clamped onto the last glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
    bucket: u16,
}

impl Palette {
    pub fn new(glyphs: Vec<char>) -> Result<Self> {
        if glyphs.is_empty() || glyphs.len() > MAX_PALETTE_LEN {
            return Err(TextGraphError::InvalidPaletteConfiguration(glyphs.len()));
        }
        let bucket = (256 / glyphs.len()) as u16;
        Ok(Self { glyphs, bucket })
    }

    /// Build a palette from the chars of `glyphs`, darkest first.
    pub fn parse(glyphs: &str) -> Result<Self> {
        Self::new(glyphs.chars().collect())
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Width of each intensity bucket.
    pub fn bucket_width(&self) -> u16 {
        self.bucket
    }

    fn index(&self, intensity: u8) -> usize {
        let index = (intensity as u16 / self.bucket) as usize;
        index.min(self.glyphs.len() - 1)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { glyphs: DEFAULT_PALETTE.to_vec(), bucket: 32 }
    }
}

impl TextColorSchema for Palette {
    fn convert(&self, intensity: u8) -> char {
        self.glyphs[self.index(intensity)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_buckets() {
        let palette = Palette::default();
        assert_eq!(palette.bucket_width(), 32);
        assert_eq!(palette.convert(0), '#');
        assert_eq!(palette.convert(31), '#');
        assert_eq!(palette.convert(32), '$');
        assert_eq!(palette.convert(128), '*');
        assert_eq!(palette.convert(255), '\'');
    }

    #[test]
    fn default_matches_constructed() {
        assert_eq!(Palette::default(), Palette::new(DEFAULT_PALETTE.to_vec()).unwrap());
    }

    #[test]
    fn monotonic_over_full_range() {
        let palette = Palette::default();
        let mut last = 0;
        for intensity in 0..=255u8 {
            let index = palette.index(intensity);
            assert!(index >= last, "index went backwards at {intensity}");
            last = index;
        }
        assert_eq!(last, DEFAULT_PALETTE.len() - 1);
    }

    #[test]
    fn odd_size_clamps_to_last_glyph() {
        // 256 / 7 = 36, so 252..=255 would land on index 7
        let palette = Palette::parse("abcdefg").unwrap();
        assert_eq!(palette.bucket_width(), 36);
        assert_eq!(palette.convert(251), 'g');
        assert_eq!(palette.convert(252), 'g');
        assert_eq!(palette.convert(255), 'g');
    }

    #[test]
    fn single_glyph_covers_everything() {
        let palette = Palette::parse("@").unwrap();
        assert_eq!(palette.bucket_width(), 256);
        assert_eq!(palette.convert(0), '@');
        assert_eq!(palette.convert(255), '@');
    }

    #[test]
    fn full_size_palette_is_identity() {
        let glyphs: Vec<char> = (0..256u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        let palette = Palette::new(glyphs.clone()).unwrap();
        assert_eq!(palette.bucket_width(), 1);
        for intensity in 0..=255u8 {
            assert_eq!(palette.convert(intensity), glyphs[intensity as usize]);
        }
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert!(matches!(
            Palette::parse(""),
            Err(TextGraphError::InvalidPaletteConfiguration(0))
        ));
        let glyphs = vec!['x'; 257];
        assert!(matches!(
            Palette::new(glyphs),
            Err(TextGraphError::InvalidPaletteConfiguration(257))
        ));
    }

    #[test]
    fn closures_are_schemas() {
        let threshold = |i: u8| if i < 128 { ' ' } else { '#' };
        assert_eq!(TextColorSchema::convert(&threshold, 10), ' ');
        assert_eq!(TextColorSchema::convert(&threshold, 200), '#');
    }
}
