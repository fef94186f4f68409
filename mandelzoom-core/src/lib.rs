pub mod complex;
pub mod controller;
pub mod error;
pub mod fractal;
pub mod presets;
pub mod session;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use controller::{
    handle_input, handle_resize, InputEvent, InputOutcome, Key, ScreenSize, WindowRequest,
};
pub use error::CoreError;
pub use fractal::{Fractal, FractalKind, FractalMode, FractalParams, IterationResult};
pub use presets::{preset, JULIA_PRESETS, PRESET_COUNT};
pub use session::{DisplayState, Session, WindowGeometry};
pub use viewport::{Axis, Bounds, PanDirection, Viewport};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
