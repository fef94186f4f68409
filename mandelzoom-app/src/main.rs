mod app;
mod app_dir;
mod input;
mod preferences;

fn main() -> eframe::Result {
    app::run()
}
