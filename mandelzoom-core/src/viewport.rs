use crate::complex::Complex;
use crate::error::CoreError;

/// Fraction of the current span moved by one pan step.
pub const PAN_FRACTION: f64 = 0.2;

/// A rectangle on the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_re: f64,
    pub max_re: f64,
    pub min_im: f64,
    pub max_im: f64,
}

impl Bounds {
    /// Default region for the Mandelbrot set.
    pub const MANDELBROT: Self = Self::new(-2.2, 0.8, -1.5, 1.5);

    /// Default region for both Julia variants.
    pub const JULIA: Self = Self::new(-1.7, 1.2, -1.5, 1.5);

    pub const fn new(min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        Self {
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }

    /// Build a bound of the given half-extents around `center`.
    pub fn around(center: Complex, half_re: f64, half_im: f64) -> Self {
        Self::new(
            center.re - half_re,
            center.re + half_re,
            center.im - half_im,
            center.im + half_im,
        )
    }

    pub fn center(&self) -> Complex {
        Complex::new(
            (self.min_re + self.max_re) / 2.0,
            (self.min_im + self.max_im) / 2.0,
        )
    }

    pub fn span_re(&self) -> f64 {
        self.max_re - self.min_re
    }

    pub fn span_im(&self) -> f64 {
        self.max_im - self.min_im
    }
}

/// One of the two plane axes, used by [`Viewport::pan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Real,
    Imaginary,
}

/// Sign of a pan step along an [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Negative,
    Positive,
}

impl PanDirection {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }
}

/// Maps the pixel grid onto a rectangular region of the complex plane.
///
/// Pixel `(0, 0)` is the **bottom-left** corner: `x` grows with the real
/// part and `y` grows with the imaginary part. The per-pixel steps are
/// derived state. Every mutator goes through [`set_bounds`](Self::set_bounds)
/// or [`set_window_size`](Self::set_window_size), which recompute them, so
/// they are never stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: Bounds,
    width: u32,
    height: u32,
    step_re: f64,
    step_im: f64,
}

impl Viewport {
    /// Create a viewport with validated bounds and dimensions.
    pub fn new(bounds: Bounds, width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidViewport {
                reason: format!("dimensions must be > 0, got {width}×{height}"),
            });
        }
        if !(bounds.min_re < bounds.max_re && bounds.min_im < bounds.max_im) {
            return Err(CoreError::InvalidViewport {
                reason: format!("bounds must satisfy min < max on both axes, got {bounds:?}"),
            });
        }
        let mut vp = Self {
            bounds,
            width,
            height,
            step_re: 0.0,
            step_im: 0.0,
        };
        vp.recompute_steps();
        Ok(vp)
    }

    /// The startup view: the Mandelbrot bound at the given window size.
    pub fn default_mandelbrot(width: u32, height: u32) -> crate::Result<Self> {
        Self::new(Bounds::MANDELBROT, width, height)
    }

    fn recompute_steps(&mut self) {
        self.step_re = self.bounds.span_re() / self.width as f64;
        self.step_im = self.bounds.span_im() / self.height as f64;
    }

    /// Replace the plane bound. Not validated: `min >= max` gives
    /// zero or negative steps and a degenerate image.
    pub fn set_bounds(&mut self, min_re: f64, max_re: f64, min_im: f64, max_im: f64) {
        self.bounds = Bounds::new(min_re, max_re, min_im, max_im);
        self.recompute_steps();
    }

    /// Replace the pixel dimensions. A zero dimension yields non-finite
    /// steps; callers drop zero-sized resize events before getting here.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.recompute_steps();
    }

    fn apply(&mut self, b: Bounds) {
        self.set_bounds(b.min_re, b.max_re, b.min_im, b.max_im);
    }

    /// Map a pixel (bottom-left origin) to its point on the plane.
    #[inline]
    pub fn map_pixel_to_plane(&self, x: u32, y: u32) -> Complex {
        Complex::new(
            self.bounds.min_re + x as f64 * self.step_re,
            self.bounds.min_im + y as f64 * self.step_im,
        )
    }

    /// Scale the half-extents by `factor` around the current center.
    /// `factor < 1` zooms in, `factor > 1` zooms out.
    pub fn zoom(&mut self, factor: f64) {
        let center = self.bounds.center();
        let half_re = self.bounds.span_re() * factor / 2.0;
        let half_im = self.bounds.span_im() * factor / 2.0;
        self.apply(Bounds::around(center, half_re, half_im));
    }

    /// Shift the bound along `axis` by [`PAN_FRACTION`] of that axis' span.
    pub fn pan(&mut self, axis: Axis, direction: PanDirection) {
        let b = self.bounds;
        let next = match axis {
            Axis::Real => {
                let shift = b.span_re() * PAN_FRACTION * direction.sign();
                Bounds::new(b.min_re + shift, b.max_re + shift, b.min_im, b.max_im)
            }
            Axis::Imaginary => {
                let shift = b.span_im() * PAN_FRACTION * direction.sign();
                Bounds::new(b.min_re, b.max_re, b.min_im + shift, b.max_im + shift)
            }
        };
        self.apply(next);
    }

    /// Re-center the current bound, keeping its extents, on the point
    /// under pixel `(x, y)`.
    pub fn recenter(&mut self, x: u32, y: u32) {
        let mid = self.map_pixel_to_plane(x, y);
        let half_re = self.bounds.span_re() / 2.0;
        let half_im = self.bounds.span_im() / 2.0;
        self.apply(Bounds::around(mid, half_re, half_im));
    }

    /// Jump back to a fixed region, e.g. [`Bounds::MANDELBROT`].
    pub fn reset_to(&mut self, bounds: Bounds) {
        self.apply(bounds);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn center(&self) -> Complex {
        self.bounds.center()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn step_re(&self) -> f64 {
        self.step_re
    }

    pub fn step_im(&self) -> f64 {
        self.step_im
    }
}
