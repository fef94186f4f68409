use crate::complex::Complex;
use crate::fractal::{FractalKind, FractalMode};
use crate::presets;

/// Whether the window currently covers the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Normal,
    Fullscreen,
}

/// The window's startup size (restored when leaving fullscreen) and its
/// current display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub initial_width: u32,
    pub initial_height: u32,
    pub display: DisplayState,
}

impl WindowGeometry {
    pub fn new(initial_width: u32, initial_height: u32) -> Self {
        Self {
            initial_width,
            initial_height,
            display: DisplayState::Normal,
        }
    }
}

/// Everything the user has selected, apart from the viewport itself.
///
/// Created once by the application and handed by reference to the input
/// controller (which mutates it) and the render pass (which reads it).
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub mode: FractalMode,
    pub julia_c: Complex,
    /// Signed on purpose: `[` walks below zero and lookups wrap.
    pub preset_index: i64,
    pub geometry: WindowGeometry,
}

impl Session {
    pub fn new(geometry: WindowGeometry) -> Self {
        Self {
            mode: FractalMode::Mandelbrot,
            julia_c: presets::preset(0),
            preset_index: 0,
            geometry,
        }
    }

    /// Start on a given preset; the constant is loaded from it.
    pub fn with_preset(mut self, index: i64) -> Self {
        self.preset_index = index;
        self.load_preset();
        self
    }

    /// Copy the selected preset into the active Julia constant.
    pub fn load_preset(&mut self) {
        self.julia_c = presets::preset(self.preset_index);
    }

    /// Move through the preset list by `delta` and load the result.
    pub fn step_preset(&mut self, delta: i64) {
        self.preset_index += delta;
        self.load_preset();
    }

    pub fn is_fullscreen(&self) -> bool {
        self.geometry.display == DisplayState::Fullscreen
    }

    /// The variant the renderer should evaluate right now.
    pub fn fractal_kind(&self) -> FractalKind {
        match self.mode {
            FractalMode::Mandelbrot => FractalKind::Mandelbrot,
            FractalMode::Julia => FractalKind::Julia { c: self.julia_c },
            FractalMode::JuliaSin => FractalKind::JuliaSin { c: self.julia_c },
        }
    }
}
