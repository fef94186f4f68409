use mandelzoom_core::IterationResult;
use tracing::{debug, warn};

/// Default number of palette entries (and therefore iterations per pixel).
pub const DEFAULT_PALETTE_SIZE: usize = 32;

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Color of points that never escape.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from channel values on the 0–255 scale.
    fn from_255(r: i32, g: i32, b: i32) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Opaque RGBA bytes for the framebuffer.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), 255]
    }
}

/// Escape-time colors, one per iteration step.
///
/// Built once at startup from four equal bands of linear ramps:
/// blue fading to purple, red to yellow, yellow-green to cyan,
/// and cyan to blue. Immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Generate a palette of `size` entries.
    ///
    /// `size` should be a multiple of 4. Other sizes only log a warning;
    /// entries past the last full band stay black.
    pub fn generate(size: usize) -> Self {
        if size % 4 != 0 {
            warn!(size, "palette size is not a multiple of 4");
        }
        let steps = size / 4;
        let mut colors = vec![Rgb::BLACK; size];
        if steps > 0 {
            let half = 128 / steps as i32;
            let full = 256 / steps as i32;
            for i in 0..steps {
                let k = i as i32;
                colors[i] = Rgb::from_255(half * k, 128 - half * k, 255 - full * k);
                colors[steps + i] = Rgb::new(1.0, (full * k) as f32 / 255.0, 0.0);
                colors[2 * steps + i] =
                    Rgb::new((128 - half * k) as f32 / 255.0, 1.0, (full * k) as f32 / 255.0);
                colors[3 * steps + i] = Rgb::from_255(0, 255 - full * k, full * k);
            }
        }
        debug!(size, "Generated palette");
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color for one evaluated point: the entry at the escape step, or
    /// black for interior points and steps past the end of the palette.
    #[inline]
    pub fn color(&self, result: IterationResult) -> Rgb {
        match result {
            IterationResult::Escaped { iterations } => self
                .colors
                .get(iterations as usize)
                .copied()
                .unwrap_or(Rgb::BLACK),
            IterationResult::Interior => Rgb::BLACK,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::generate(DEFAULT_PALETTE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        let close = |a: f32, b: f32| (a - b).abs() < 1e-6;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn default_has_32_entries_in_unit_range() {
        let p = Palette::default();
        assert_eq!(p.len(), 32);
        for c in p.colors() {
            for v in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&v), "{c:?} out of range");
            }
        }
    }

    #[test]
    fn band_starts() {
        let p = Palette::default();
        assert_rgb_close(p.colors()[0], Rgb::new(0.0, 128.0 / 255.0, 1.0));
        assert_rgb_close(p.colors()[8], Rgb::new(1.0, 0.0, 0.0));
        assert_rgb_close(p.colors()[16], Rgb::new(128.0 / 255.0, 1.0, 0.0));
        assert_rgb_close(p.colors()[24], Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn band_ends() {
        // size 32 → 8 steps, half step 16, full step 32.
        let p = Palette::default();
        assert_rgb_close(p.colors()[7], Rgb::new(112.0 / 255.0, 16.0 / 255.0, 31.0 / 255.0));
        assert_rgb_close(p.colors()[15], Rgb::new(1.0, 224.0 / 255.0, 0.0));
        assert_rgb_close(p.colors()[23], Rgb::new(16.0 / 255.0, 1.0, 224.0 / 255.0));
        assert_rgb_close(p.colors()[31], Rgb::new(0.0, 31.0 / 255.0, 224.0 / 255.0));
    }

    #[test]
    fn odd_size_still_builds() {
        let p = Palette::generate(30);
        assert_eq!(p.len(), 30);
        // 7 steps per band fill indices 0..28; the remainder is black.
        assert_eq!(p.colors()[28], Rgb::BLACK);
        assert_eq!(p.colors()[29], Rgb::BLACK);
        assert_rgb_close(p.colors()[7], Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn tiny_sizes_are_all_black() {
        assert!(Palette::generate(0).is_empty());
        assert!(Palette::generate(3).colors().iter().all(|&c| c == Rgb::BLACK));
    }

    #[test]
    fn color_lookup() {
        let p = Palette::default();
        assert_eq!(p.color(IterationResult::Interior), Rgb::BLACK);
        assert_eq!(p.color(IterationResult::Escaped { iterations: 9 }), p.colors()[9]);
        assert_eq!(p.color(IterationResult::Escaped { iterations: 99 }), Rgb::BLACK);
    }

    #[test]
    fn rgba8_conversion() {
        assert_eq!(Rgb::BLACK.to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(Palette::default().colors()[0].to_rgba8(), [0, 128, 255, 255]);
    }
}
