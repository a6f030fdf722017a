use std::path::PathBuf;

use anyhow::Context;
use sketch_ui::config::{self, CONFIG_ENV_VAR};
use sketch_ui::{logging, SketchApp};
use tracing::info;

// Room around the canvas for the panel margins and the control row.
const WINDOW_MARGIN: f32 = 64.0;
const CONTROLS_HEIGHT: f32 = 96.0;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let config = config::load_or_default(config_path.as_deref()).context("load configuration")?;

    logging::init(config.log.debug);
    info!("Starting sketchpad");

    let viewport = egui::ViewportBuilder::default()
        .with_title("Sketchpad")
        .with_inner_size([
            config.canvas.width as f32 + WINDOW_MARGIN,
            config.canvas.height as f32 + CONTROLS_HEIGHT,
        ]);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Sketchpad",
        options,
        Box::new(
            move |cc: &eframe::CreationContext<'_>| -> Result<
                Box<dyn eframe::App>,
                Box<dyn std::error::Error + Send + Sync>,
            > {
                let pixels_per_point = config
                    .canvas
                    .pixels_per_point
                    .unwrap_or_else(|| cc.egui_ctx.pixels_per_point());
                let app = SketchApp::new(&config, pixels_per_point)?;
                Ok(Box::new(app))
            },
        ),
    )
    .map_err(|err| anyhow::anyhow!("sketchpad window failed: {err}"))
}
