use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, error, info, warn};

use mandelzoom_core::fractal::{JULIA_ESCAPE_RADIUS_SQ, MANDELBROT_ESCAPE_RADIUS_SQ};
use mandelzoom_core::{FractalKind, FractalMode, FractalParams};
use mandelzoom_render::DEFAULT_PALETTE_SIZE;

/// Startup configuration, read from `preferences.json` next to the
/// executable. Every field is optional in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct AppPreferences {
    /// Window size at startup, also restored when leaving fullscreen.
    #[serde(default = "default_window_size")]
    pub window_width: u32,
    #[serde(default = "default_window_size")]
    pub window_height: u32,
    /// Palette entries; also the iteration cap. Should be a multiple of 4.
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,
    #[serde(default = "default_mandelbrot_escape_radius_sq")]
    pub mandelbrot_escape_radius_sq: f64,
    #[serde(default = "default_julia_escape_radius_sq")]
    pub julia_escape_radius_sq: f64,
    #[serde(default)]
    pub initial_mode: FractalMode,
    #[serde(default)]
    pub initial_preset: i64,
}

fn default_window_size() -> u32 {
    600
}
fn default_palette_size() -> usize {
    DEFAULT_PALETTE_SIZE
}
fn default_mandelbrot_escape_radius_sq() -> f64 {
    MANDELBROT_ESCAPE_RADIUS_SQ
}
fn default_julia_escape_radius_sq() -> f64 {
    JULIA_ESCAPE_RADIUS_SQ
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_size(),
            window_height: default_window_size(),
            palette_size: default_palette_size(),
            mandelbrot_escape_radius_sq: default_mandelbrot_escape_radius_sq(),
            julia_escape_radius_sq: default_julia_escape_radius_sq(),
            initial_mode: FractalMode::default(),
            initial_preset: 0,
        }
    }
}

impl AppPreferences {
    /// Load preferences from the executable's directory, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            debug!("No preferences file at {}", path.display());
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    return prefs;
                }
                Err(e) => error!("Failed to parse preferences: {e}"),
            },
            Err(e) => error!("Failed to read preferences file: {e}"),
        }
        Self::default()
    }

    fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut prefs: Self = serde_json::from_str(json)?;
        prefs.window_width = prefs.window_width.max(1);
        prefs.window_height = prefs.window_height.max(1);
        if prefs.palette_size == 0 {
            warn!("palette_size must be at least 1, using {DEFAULT_PALETTE_SIZE}");
            prefs.palette_size = DEFAULT_PALETTE_SIZE;
        }
        Ok(prefs)
    }

    /// Iteration parameters for `kind`, using the configured radius for its
    /// family. An invalid radius falls back to the built-in one.
    pub fn fractal_params(
        &self,
        kind: &FractalKind,
        max_iterations: u32,
    ) -> mandelzoom_core::Result<FractalParams> {
        let configured = match kind {
            FractalKind::Mandelbrot => self.mandelbrot_escape_radius_sq,
            FractalKind::Julia { .. } | FractalKind::JuliaSin { .. } => {
                self.julia_escape_radius_sq
            }
        };
        FractalParams::new(max_iterations, configured).or_else(|e| {
            warn!("{e}; using the default escape radius");
            FractalParams::new(max_iterations, kind.default_escape_radius_sq())
        })
    }
}

fn config_path() -> PathBuf {
    crate::app_dir::exe_directory().join("preferences.json")
}
