use serde::Deserialize;

use crate::complex::Complex;
use crate::error::CoreError;

/// Squared bailout for the Mandelbrot variant.
///
/// Wider than the textbook 4.0; the Julia variants use 4.0.
pub const MANDELBROT_ESCAPE_RADIUS_SQ: f64 = 5.0;

/// Squared bailout for the Julia and Julia-Sin variants.
pub const JULIA_ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Outcome of iterating a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationResult {
    /// The orbit left the escape radius during step `iterations` (0-based).
    Escaped { iterations: u32 },

    /// The orbit stayed bounded for every allowed step.
    Interior,
}

/// Which family of set is being explored. Selected by the user; the
/// Julia constant lives in the session next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    Julia,
    JuliaSin,
}

impl FractalMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::JuliaSin => "Julia (sin)",
        }
    }
}

/// A fully specified variant: the mode plus the constant it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalKind {
    /// `z := z² + z₀`, the point itself is the constant.
    Mandelbrot,
    /// `z := z² + c`.
    Julia { c: Complex },
    /// `z := z² + c`, then the imaginary part is replaced by
    /// `cos(re)·sinh(re)`. The real part is left as `z² + c` gives it.
    JuliaSin { c: Complex },
}

impl FractalKind {
    pub fn mode(&self) -> FractalMode {
        match self {
            Self::Mandelbrot => FractalMode::Mandelbrot,
            Self::Julia { .. } => FractalMode::Julia,
            Self::JuliaSin { .. } => FractalMode::JuliaSin,
        }
    }

    pub fn default_escape_radius_sq(&self) -> f64 {
        match self {
            Self::Mandelbrot => MANDELBROT_ESCAPE_RADIUS_SQ,
            Self::Julia { .. } | Self::JuliaSin { .. } => JULIA_ESCAPE_RADIUS_SQ,
        }
    }

    /// One orbit step from `z`, where `z0` is the starting point.
    #[inline]
    fn step(&self, z: Complex, z0: Complex) -> Complex {
        match *self {
            Self::Mandelbrot => z.square_add(z0),
            Self::Julia { c } => z.square_add(c),
            Self::JuliaSin { c } => {
                let w = z.square_add(c);
                // Both terms read `w.re`; `w.im` is dropped.
                Complex::new(w.re, w.re.cos() * w.re.sinh())
            }
        }
    }
}

/// Parameters controlling iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    /// Number of steps before a point is declared interior. The renderer
    /// ties this to the palette length so every escape step has a color.
    pub max_iterations: u32,

    escape_radius_sq: f64,
}

impl FractalParams {
    pub fn new(max_iterations: u32, escape_radius_sq: f64) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        if escape_radius_sq <= 0.0 || !escape_radius_sq.is_finite() {
            return Err(CoreError::InvalidEscapeRadius(escape_radius_sq));
        }
        Ok(Self {
            max_iterations,
            escape_radius_sq,
        })
    }

    /// Squared escape radius compared against `|z|²`.
    #[inline]
    pub fn escape_radius_sq(&self) -> f64 {
        self.escape_radius_sq
    }
}

/// An escape-time evaluator: a variant bound to its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fractal {
    kind: FractalKind,
    params: FractalParams,
}

impl Fractal {
    pub fn new(kind: FractalKind, params: FractalParams) -> Self {
        Self { kind, params }
    }

    /// Evaluator using the variant's built-in escape radius.
    pub fn with_default_radius(kind: FractalKind, max_iterations: u32) -> crate::Result<Self> {
        let params = FractalParams::new(max_iterations, kind.default_escape_radius_sq())?;
        Ok(Self::new(kind, params))
    }

    /// Iterate `point` and report the first step whose result lies
    /// outside the escape radius.
    pub fn iterate(&self, point: Complex) -> IterationResult {
        let escape_radius_sq = self.params.escape_radius_sq;
        let mut z = point;
        for n in 0..self.params.max_iterations {
            z = self.kind.step(z, point);
            if z.norm_sq() > escape_radius_sq {
                return IterationResult::Escaped { iterations: n };
            }
        }
        IterationResult::Interior
    }

    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandelbrot() -> Fractal {
        Fractal::with_default_radius(FractalKind::Mandelbrot, 32).unwrap()
    }

    fn escaped_at(result: IterationResult) -> u32 {
        match result {
            IterationResult::Escaped { iterations } => iterations,
            IterationResult::Interior => panic!("expected the orbit to escape"),
        }
    }

    #[test]
    fn mandelbrot_origin_is_interior() {
        assert_eq!(mandelbrot().iterate(Complex::ZERO), IterationResult::Interior);
    }

    #[test]
    fn mandelbrot_far_point_escapes_immediately() {
        assert_eq!(escaped_at(mandelbrot().iterate(Complex::new(10.0, 10.0))), 0);
    }

    #[test]
    fn mandelbrot_known_escape_count() {
        // The orbit starts at the point: z₁ = 1 + 1 = 2 (|z|² = 4),
        // z₂ = 4 + 1 = 5 (|z|² = 25 > 5).
        assert_eq!(escaped_at(mandelbrot().iterate(Complex::new(1.0, 0.0))), 1);
    }

    #[test]
    fn mandelbrot_uses_wider_bailout() {
        // c = 1.05: z₁ = 2.1525 (|z|² ≈ 4.63), inside 5 but outside 4.
        let c = Complex::new(1.05, 0.0);
        let narrow = Fractal::new(FractalKind::Mandelbrot, FractalParams::new(32, 4.0).unwrap());
        assert_eq!(escaped_at(narrow.iterate(c)), 0);
        assert_eq!(escaped_at(mandelbrot().iterate(c)), 1);
    }

    #[test]
    fn julia_with_zero_constant() {
        let j = Fractal::with_default_radius(FractalKind::Julia { c: Complex::ZERO }, 32).unwrap();
        // z := z², origin is a fixed point.
        assert_eq!(j.iterate(Complex::ZERO), IterationResult::Interior);
        // |z| = 1 stays on the unit circle forever.
        assert_eq!(j.iterate(Complex::new(0.0, 1.0)), IterationResult::Interior);
        // 1.5 → 2.25 (|z|² ≈ 5.06 > 4) on the first step.
        assert_eq!(escaped_at(j.iterate(Complex::new(1.5, 0.0))), 0);
    }

    #[test]
    fn julia_bailout_is_four() {
        // z₀ = 1.45: z₁ = 2.1025, |z|² ≈ 4.42, outside 4 but inside 5.
        let kind = FractalKind::Julia { c: Complex::ZERO };
        let julia = Fractal::with_default_radius(kind, 32).unwrap();
        assert_eq!(escaped_at(julia.iterate(Complex::new(1.45, 0.0))), 0);
        let wide = Fractal::new(kind, FractalParams::new(32, 5.0).unwrap());
        assert_eq!(escaped_at(wide.iterate(Complex::new(1.45, 0.0))), 1);
    }

    /// Straight-line JuliaSin loop on bare `f64`s, kept independent of
    /// `Complex` and `step`.
    fn julia_sin_reference(x: f64, y: f64, c_re: f64, c_im: f64, max: u32) -> IterationResult {
        let (mut re, mut im) = (x, y);
        for i in 0..max {
            let t = re * re - im * im + c_re;
            im = re * im * 2.0 + c_im;
            re = t;
            im = re.cos() * re.sinh();
            if re * re + im * im > 4.0 {
                return IterationResult::Escaped { iterations: i };
            }
        }
        IterationResult::Interior
    }

    #[test]
    fn julia_sin_keeps_real_part_of_square() {
        let c = Complex::new(0.1, -0.2);
        let z0 = Complex::new(1.0, 0.5);
        let w = z0.square_add(c);
        let next = FractalKind::JuliaSin { c }.step(z0, z0);
        assert_eq!(next.re, w.re);
        assert_eq!(next.im, w.re.cos() * w.re.sinh());
    }

    #[test]
    fn julia_sin_agrees_with_reference_loop() {
        let c = Complex::new(-0.7, 0.27015);
        let f = Fractal::with_default_radius(FractalKind::JuliaSin { c }, 32).unwrap();
        let (w, h) = (60, 60);
        let mut differing = 0;
        for py in 0..h {
            for px in 0..w {
                let x = -1.7 + px as f64 * (2.9 / w as f64);
                let y = -1.5 + py as f64 * (3.0 / h as f64);
                if f.iterate(Complex::new(x, y)) != julia_sin_reference(x, y, c.re, c.im, 32) {
                    differing += 1;
                }
            }
        }
        assert_eq!(differing, 0);
    }

    #[test]
    fn julia_sin_escape_and_fixed_point() {
        let f =
            Fractal::with_default_radius(FractalKind::JuliaSin { c: Complex::ZERO }, 32).unwrap();
        // z₀ = 2: w = 4, re stays 4 → |z|² ≥ 16, escapes on step 0.
        assert_eq!(escaped_at(f.iterate(Complex::new(2.0, 0.0))), 0);
        // The origin maps to 0 + i·cos(0)·sinh(0) = 0.
        assert_eq!(f.iterate(Complex::ZERO), IterationResult::Interior);
    }

    #[test]
    fn iteration_cap_is_respected() {
        let f = Fractal::with_default_radius(FractalKind::Mandelbrot, 1).unwrap();
        // c = 0.5 needs four steps to escape; with a cap of one it is interior.
        assert_eq!(f.iterate(Complex::new(0.5, 0.0)), IterationResult::Interior);
        assert_eq!(escaped_at(mandelbrot().iterate(Complex::new(0.5, 0.0))), 3);
    }

    #[test]
    fn default_radii_per_family() {
        assert_eq!(FractalKind::Mandelbrot.default_escape_radius_sq(), 5.0);
        let c = Complex::new(-0.7, 0.27015);
        assert_eq!(FractalKind::Julia { c }.default_escape_radius_sq(), 4.0);
        assert_eq!(FractalKind::JuliaSin { c }.default_escape_radius_sq(), 4.0);
    }

    #[test]
    fn invalid_params() {
        assert!(FractalParams::new(0, 4.0).is_err());
        assert!(FractalParams::new(32, 0.0).is_err());
        assert!(FractalParams::new(32, -1.0).is_err());
        assert!(FractalParams::new(32, f64::NAN).is_err());
        assert!(FractalParams::new(32, f64::INFINITY).is_err());
    }

    #[test]
    fn kind_reports_mode() {
        let c = Complex::ZERO;
        assert_eq!(FractalKind::Mandelbrot.mode(), FractalMode::Mandelbrot);
        assert_eq!(FractalKind::Julia { c }.mode(), FractalMode::Julia);
        assert_eq!(FractalKind::JuliaSin { c }.mode(), FractalMode::JuliaSin);
    }

    #[test]
    fn mode_reads_snake_case_names() {
        let mode: FractalMode = serde_json::from_str(r#""julia_sin""#).unwrap();
        assert_eq!(mode, FractalMode::JuliaSin);
        assert!(serde_json::from_str::<FractalMode>(r#""JuliaSin""#).is_err());
    }
}
