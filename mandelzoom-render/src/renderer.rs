use std::time::{Duration, Instant};

use tracing::debug;

use mandelzoom_core::{Fractal, IterationResult, Viewport};

use crate::buffer::PixelSink;
use crate::palette::Palette;

/// Summary of one full-frame render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub elapsed: Duration,
    pub escaped: usize,
    pub interior: usize,
}

impl FrameStats {
    pub fn pixel_count(&self) -> usize {
        self.escaped + self.interior
    }
}

/// Render a full frame, one pixel at a time.
///
/// Rows are visited top to bottom and columns left to right. Screen row
/// `r` shows plane row `height - 1 - r`, so the imaginary axis points up.
/// Every pixel is recomputed on every call.
pub fn render_frame<S: PixelSink + ?Sized>(
    fractal: &Fractal,
    viewport: &Viewport,
    palette: &Palette,
    sink: &mut S,
) -> FrameStats {
    let start = Instant::now();
    let (width, height) = (viewport.width(), viewport.height());
    let mut escaped = 0usize;
    let mut interior = 0usize;

    for row in 0..height {
        let y = height - 1 - row;
        for x in 0..width {
            let result = fractal.iterate(viewport.map_pixel_to_plane(x, y));
            match result {
                IterationResult::Escaped { .. } => escaped += 1,
                IterationResult::Interior => interior += 1,
            }
            sink.put_pixel(x, row, palette.color(result));
        }
    }

    let elapsed = start.elapsed();
    debug!(
        elapsed_ms = elapsed.as_millis() as u64,
        width,
        height,
        escaped,
        interior,
        mode = fractal.kind().mode().label(),
        "Frame rendered"
    );

    FrameStats {
        elapsed,
        escaped,
        interior,
    }
}
