pub mod buffer;
pub mod error;
pub mod palette;
pub mod renderer;

pub use buffer::{PixelSink, RenderBuffer};
pub use error::RenderError;
pub use palette::{Palette, Rgb, DEFAULT_PALETTE_SIZE};
pub use renderer::{render_frame, FrameStats};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
