use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

use mandelzoom_core::{
    handle_resize, Bounds, Fractal, FractalMode, Session, Viewport, WindowGeometry,
};
use mandelzoom_render::{render_frame, Palette, RenderBuffer};

use crate::preferences::AppPreferences;

pub(crate) struct MandelZoomApp {
    pub(crate) session: Session,
    pub(crate) viewport: Viewport,
    pub(crate) rng: StdRng,
    pub(crate) needs_render: bool,
    palette: Palette,
    preferences: AppPreferences,
    buffer: RenderBuffer,
    texture: Option<egui::TextureHandle>,
}

impl MandelZoomApp {
    pub(crate) fn new(preferences: AppPreferences) -> mandelzoom_render::Result<Self> {
        let (width, height) = (preferences.window_width, preferences.window_height);

        let mut session = Session::new(WindowGeometry::new(width, height))
            .with_preset(preferences.initial_preset);
        session.mode = preferences.initial_mode;

        let bounds = match session.mode {
            FractalMode::Mandelbrot => Bounds::MANDELBROT,
            FractalMode::Julia | FractalMode::JuliaSin => Bounds::JULIA,
        };
        let viewport = Viewport::new(bounds, width, height)?;
        let palette = Palette::generate(preferences.palette_size);

        info!(
            width,
            height,
            mode = session.mode.label(),
            preset = session.preset_index,
            palette = palette.len(),
            "Session ready"
        );

        Ok(Self {
            session,
            viewport,
            rng: StdRng::from_entropy(),
            needs_render: true,
            palette,
            buffer: RenderBuffer::new(width, height)?,
            preferences,
            texture: None,
        })
    }

    /// Recompute every pixel for the current session and upload the result.
    fn redraw(&mut self, ctx: &egui::Context) {
        self.needs_render = false;

        let kind = self.session.fractal_kind();
        let max_iterations = u32::try_from(self.palette.len()).unwrap_or(u32::MAX);
        let params = match self.preferences.fractal_params(&kind, max_iterations) {
            Ok(params) => params,
            Err(e) => {
                error!("Cannot render: {e}");
                return;
            }
        };
        let fractal = Fractal::new(kind, params);

        let (width, height) = (self.viewport.width(), self.viewport.height());
        if let Err(e) = self.buffer.resize(width, height) {
            error!("Cannot resize frame buffer: {e}");
            return;
        }

        let stats = render_frame(&fractal, &self.viewport, &self.palette, &mut self.buffer);
        debug!(
            center = %self.viewport.center(),
            span_re = self.viewport.bounds().span_re(),
            pixels = stats.pixel_count(),
            "Redrawn"
        );

        let image = egui::ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            &self.buffer.pixels,
        );
        match self.texture.as_mut() {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("fractal", image, egui::TextureOptions::NEAREST));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for MandelZoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(|i| i.events.clone());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let available = ui.available_size();
                let width = available.x.max(1.0) as u32;
                let height = available.y.max(1.0) as u32;

                if handle_resize(&mut self.viewport, width, height) {
                    self.needs_render = true;
                }

                let (response, painter) = ui.allocate_painter(available, egui::Sense::click());

                self.handle_canvas_input(ctx, &events, response.rect);

                if self.needs_render {
                    self.redraw(ctx);
                }

                if let Some(ref texture) = self.texture {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(texture.id(), response.rect, uv, egui::Color32::WHITE);
                }
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(
            mode = self.session.mode.label(),
            center = %self.viewport.center(),
            "Exiting"
        );
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub(crate) fn run() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting MandelZoom");

    let prefs = AppPreferences::load();

    let viewport = egui::ViewportBuilder::default()
        .with_title("Mandelbrot Zoom")
        .with_inner_size([prefs.window_width as f32, prefs.window_height as f32]);

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "MandelZoom",
        options,
        Box::new(move |_cc| Ok(Box::new(MandelZoomApp::new(prefs)?))),
    )
}
