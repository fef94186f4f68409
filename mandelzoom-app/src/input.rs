use eframe::egui;
use tracing::debug;

use mandelzoom_core::{handle_input, InputEvent, Key, ScreenSize, WindowRequest};

use crate::app::MandelZoomApp;

/// Translate one egui event into controller inputs.
///
/// Text events carry typed characters (so `+` and `q` arrive already
/// shifted). Named keys cover escape and the arrows. Mouse presses are
/// only taken inside `canvas`, in canvas-relative pixels.
pub(crate) fn translate_event(event: &egui::Event, canvas: egui::Rect) -> Vec<InputEvent> {
    match event {
        egui::Event::Text(text) => text.chars().map(|c| InputEvent::Key(Key::Char(c))).collect(),
        egui::Event::Key {
            key, pressed: true, ..
        } => named_key(*key)
            .map(InputEvent::Key)
            .into_iter()
            .collect(),
        egui::Event::PointerButton {
            pos, pressed: true, ..
        } if canvas.contains(*pos) => {
            let x = (pos.x - canvas.min.x).max(0.0) as u32;
            let y = (pos.y - canvas.min.y).max(0.0) as u32;
            vec![InputEvent::MouseDown { x, y }]
        }
        _ => Vec::new(),
    }
}

fn named_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Escape => Some(Key::Escape),
        egui::Key::ArrowLeft => Some(Key::Left),
        egui::Key::ArrowRight => Some(Key::Right),
        egui::Key::ArrowUp => Some(Key::Up),
        egui::Key::ArrowDown => Some(Key::Down),
        _ => None,
    }
}

/// Monitor size, or the current window size when the backend doesn't report one.
fn screen_size(ctx: &egui::Context, fallback: egui::Vec2) -> ScreenSize {
    let size = ctx
        .input(|i| i.viewport().monitor_size)
        .unwrap_or(fallback);
    ScreenSize {
        width: size.x.max(1.0) as u32,
        height: size.y.max(1.0) as u32,
    }
}

fn apply_window_request(ctx: &egui::Context, request: WindowRequest) {
    match request {
        WindowRequest::EnterFullscreen => {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        }
        WindowRequest::LeaveFullscreen {
            width,
            height,
            x,
            y,
        } => {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                width as f32,
                height as f32,
            )));
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                x as f32, y as f32,
            )));
        }
        WindowRequest::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
    }
}

impl MandelZoomApp {
    /// Feed this frame's events through the controller.
    pub(crate) fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        events: &[egui::Event],
        canvas: egui::Rect,
    ) {
        if events.is_empty() {
            return;
        }
        let screen = screen_size(ctx, canvas.size());
        for input in events.iter().flat_map(|e| translate_event(e, canvas)) {
            let outcome = handle_input(
                &mut self.session,
                &mut self.viewport,
                input,
                screen,
                &mut self.rng,
            );
            if outcome.redraw {
                self.needs_render = true;
            }
            if let Some(request) = outcome.window {
                debug!(?request, "Window request");
                apply_window_request(ctx, request);
            }
        }
    }
}
