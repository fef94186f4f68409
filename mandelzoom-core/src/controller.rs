//! Turns discrete keyboard and mouse events into session and viewport
//! changes.
//!
//! The controller knows nothing about the windowing toolkit. Anything it
//! needs the toolkit to do (fullscreen, restore, exit) comes back as a
//! [`WindowRequest`] in the [`InputOutcome`].

use rand::Rng;
use tracing::{debug, info};

use crate::complex::Complex;
use crate::fractal::FractalMode;
use crate::session::{DisplayState, Session};
use crate::viewport::{Axis, Bounds, PanDirection, Viewport};

/// Zoom factor applied by the zoom-in keys.
pub const ZOOM_IN_FACTOR: f64 = 0.8;
/// Zoom factor applied by the zoom-out keys.
pub const ZOOM_OUT_FACTOR: f64 = 1.2;
/// Half-width of the square random Julia constants are drawn from.
pub const RANDOM_C_EXTENT: f64 = 1.5;

/// A key, as far as the controller cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, exactly as typed.
    Char(char),
    Escape,
    Left,
    Right,
    Up,
    Down,
}

/// One user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// A mouse button went down at window coordinates (top-left origin).
    MouseDown { x: u32, y: u32 },
}

/// Size of the monitor, needed when entering and leaving fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

/// Something only the windowing layer can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRequest {
    EnterFullscreen,
    /// Leave fullscreen, resize to `width × height` and move the window's
    /// top-left corner to `(x, y)` so it is centered on screen.
    LeaveFullscreen { width: u32, height: u32, x: i32, y: i32 },
    Exit,
}

/// What happened in response to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    pub redraw: bool,
    pub window: Option<WindowRequest>,
}

impl InputOutcome {
    /// The input was not bound to anything.
    pub const IGNORED: Self = Self {
        redraw: false,
        window: None,
    };

    fn redraw() -> Self {
        Self {
            redraw: true,
            window: None,
        }
    }

    fn with_window(request: WindowRequest) -> Self {
        Self {
            redraw: true,
            window: Some(request),
        }
    }
}

/// Apply one input event to the session and viewport.
pub fn handle_input<R: Rng + ?Sized>(
    session: &mut Session,
    viewport: &mut Viewport,
    event: InputEvent,
    screen: ScreenSize,
    rng: &mut R,
) -> InputOutcome {
    match event {
        InputEvent::MouseDown { x, y } => {
            // Window rows count down from the top; plane pixels count up.
            // Same flip as the renderer, so the clicked pixel is centered.
            let plane_y = viewport.height().saturating_sub(y.saturating_add(1));
            viewport.recenter(x, plane_y);
            debug!(x, y, center = %viewport.center(), "Recentered");
            InputOutcome::redraw()
        }
        InputEvent::Key(key) => handle_key(session, viewport, key, screen, rng),
    }
}

fn handle_key<R: Rng + ?Sized>(
    session: &mut Session,
    viewport: &mut Viewport,
    key: Key,
    screen: ScreenSize,
    rng: &mut R,
) -> InputOutcome {
    use Axis::{Imaginary, Real};
    use PanDirection::{Negative, Positive};

    match key {
        Key::Escape => {
            info!("Exit requested");
            return InputOutcome::with_window(WindowRequest::Exit);
        }
        Key::Left => viewport.pan(Real, Negative),
        Key::Right => viewport.pan(Real, Positive),
        Key::Up => viewport.pan(Imaginary, Positive),
        Key::Down => viewport.pan(Imaginary, Negative),
        Key::Char(ch) => match ch {
            'f' | 'F' => return toggle_fullscreen(session, viewport, screen),
            '+' | '=' => viewport.zoom(ZOOM_IN_FACTOR),
            '-' | '_' => viewport.zoom(ZOOM_OUT_FACTOR),
            'w' | 'W' => viewport.pan(Imaginary, Positive),
            's' | 'S' => viewport.pan(Imaginary, Negative),
            'a' | 'A' => viewport.pan(Real, Negative),
            'd' | 'D' => viewport.pan(Real, Positive),
            '1' => {
                session.mode = FractalMode::Mandelbrot;
                viewport.reset_to(Bounds::MANDELBROT);
                info!(mode = session.mode.label(), "Switched fractal");
            }
            '2' | '3' => {
                session.mode = if ch == '2' {
                    FractalMode::Julia
                } else {
                    FractalMode::JuliaSin
                };
                session.load_preset();
                viewport.reset_to(Bounds::JULIA);
                info!(
                    mode = session.mode.label(),
                    preset = session.preset_index,
                    c = %session.julia_c,
                    "Switched fractal"
                );
            }
            '4' => {
                session.mode = FractalMode::Julia;
                session.julia_c = Complex::new(
                    rng.gen_range(-RANDOM_C_EXTENT..=RANDOM_C_EXTENT),
                    rng.gen_range(-RANDOM_C_EXTENT..=RANDOM_C_EXTENT),
                );
                viewport.reset_to(Bounds::JULIA);
                info!(
                    real = session.julia_c.re,
                    imag = session.julia_c.im,
                    "Using random Julia constant"
                );
            }
            ']' | '[' => {
                session.step_preset(if ch == ']' { 1 } else { -1 });
                viewport.reset_to(Bounds::JULIA);
                info!(preset = session.preset_index, c = %session.julia_c, "Selected preset");
            }
            'r' | 'R' => viewport.reset_to(Bounds::MANDELBROT),
            _ => return InputOutcome::IGNORED,
        },
    }
    InputOutcome::redraw()
}

fn toggle_fullscreen(
    session: &mut Session,
    viewport: &mut Viewport,
    screen: ScreenSize,
) -> InputOutcome {
    match session.geometry.display {
        DisplayState::Fullscreen => {
            let width = session.geometry.initial_width;
            let height = session.geometry.initial_height;
            viewport.set_window_size(width, height);
            session.geometry.display = DisplayState::Normal;
            let x = (screen.width as i32 - width as i32) / 2;
            let y = (screen.height as i32 - height as i32) / 2;
            info!(width, height, "Leaving fullscreen");
            InputOutcome::with_window(WindowRequest::LeaveFullscreen {
                width,
                height,
                x,
                y,
            })
        }
        DisplayState::Normal => {
            viewport.set_window_size(screen.width, screen.height);
            session.geometry.display = DisplayState::Fullscreen;
            info!(width = screen.width, height = screen.height, "Entering fullscreen");
            InputOutcome::with_window(WindowRequest::EnterFullscreen)
        }
    }
}

/// Apply a window resize. Zero-sized events (e.g. a minimized window)
/// are ignored so the per-pixel steps stay finite.
pub fn handle_resize(viewport: &mut Viewport, width: u32, height: u32) -> bool {
    if width == 0 || height == 0 {
        return false;
    }
    if width == viewport.width() && height == viewport.height() {
        return false;
    }
    debug!(width, height, "Reshaping viewport");
    viewport.set_window_size(width, height);
    true
}
