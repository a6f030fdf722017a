// eframe shell: canvas on top, undo/clear, color swatches and a width slider below.

use egui::{Color32, Pos2, TextureHandle, TextureOptions};
use sketch_core::{SketchEvent, Sketchpad, Surface};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::editor::{Canvas, CanvasError, PaletteColor, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};

const SWATCH_SIZE: f32 = 24.0;
const MIB: usize = 1024 * 1024;

// One frame of drag state for the canvas widget, in screen coordinates
#[derive(Debug, Clone, Copy, Default)]
struct DragInput {
    started: bool,
    dragged: bool,
    stopped: bool,
    press_origin: Option<Pos2>,
    pointer: Option<Pos2>,
}

impl DragInput {
    // Gestures start where the button went down, not where egui noticed the drag
    fn into_events(self, canvas_origin: Pos2) -> Vec<SketchEvent<Color32>> {
        let mut events = Vec::new();
        if self.started {
            if let Some(start) = self.press_origin.or(self.pointer) {
                let start = start - canvas_origin;
                events.push(SketchEvent::PointerDown {
                    x: start.x,
                    y: start.y,
                });
            }
        }
        if self.dragged {
            if let Some(pos) = self.pointer {
                let pos = pos - canvas_origin;
                events.push(SketchEvent::PointerMove { x: pos.x, y: pos.y });
            }
        }
        if self.stopped {
            events.push(SketchEvent::PointerUp);
        }
        events
    }
}

pub struct SketchApp {
    pad: Sketchpad<Canvas>,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
    selected: PaletteColor,
    stroke_width: f32,
}

impl SketchApp {
    /// Build the canvas and its history. Fails when the configured canvas is unusable.
    pub fn new(config: &AppConfig, pixels_per_point: f32) -> Result<Self, CanvasError> {
        let [r, g, b] = config.canvas.background;
        let mut canvas = Canvas::new(
            config.canvas.width,
            config.canvas.height,
            pixels_per_point,
            Color32::from_rgb(r, g, b),
        )?;
        canvas.set_stroke_color(config.stroke.color.color32());
        canvas.set_stroke_width(config.stroke.width);
        let stroke_width = canvas.brush().width();

        let snapshot_bytes =
            canvas.width() as usize * canvas.height() as usize * std::mem::size_of::<Color32>();
        match config.history.max_footprint(snapshot_bytes) {
            Some(bytes) => info!(
                "Undo history keeps up to {:?} snapshots of {} KiB ({} MiB at most)",
                config.history.max_states,
                snapshot_bytes / 1024,
                bytes / MIB
            ),
            None => warn!(
                "Undo history is unbounded, each gesture adds {} KiB",
                snapshot_bytes / 1024
            ),
        }

        info!(
            "Sketchpad ready ({:?}, width {})",
            config.stroke.color, stroke_width
        );

        Ok(Self {
            pad: Sketchpad::new(canvas, config.history),
            texture: None,
            texture_dirty: true,
            selected: config.stroke.color,
            stroke_width,
        })
    }

    pub fn sketchpad(&self) -> &Sketchpad<Canvas> {
        &self.pad
    }

    pub fn selected_color(&self) -> PaletteColor {
        self.selected
    }

    /// Dispatch events in order, marking the texture stale when pixels may have changed.
    pub fn apply(&mut self, events: impl IntoIterator<Item = SketchEvent<Color32>>) {
        for event in events {
            if event.touches_pixels() {
                self.texture_dirty = true;
            }
            self.pad.dispatch(event);
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        if let Some(texture) = &mut self.texture {
            if self.texture_dirty {
                texture.set(self.pad.surface().to_color_image(), TextureOptions::LINEAR);
                self.texture_dirty = false;
            }
            return texture.id();
        }

        debug!("Uploading initial canvas texture");
        let texture = ctx.load_texture(
            "sketch-canvas",
            self.pad.surface().to_color_image(),
            TextureOptions::LINEAR,
        );
        let id = texture.id();
        self.texture = Some(texture);
        self.texture_dirty = false;
        id
    }

    fn canvas_view(&mut self, ui: &mut egui::Ui) -> Vec<SketchEvent<Color32>> {
        let texture = self.sync_texture(ui.ctx());
        let size = self.pad.surface().logical_size();
        let image = egui::Image::new(egui::load::SizedTexture::new(texture, size))
            .sense(egui::Sense::drag());
        let response = ui.add(image);

        let drag = DragInput {
            started: response.drag_started(),
            dragged: response.dragged(),
            stopped: response.drag_stopped(),
            press_origin: ui.input(|i| i.pointer.press_origin()),
            pointer: response.interact_pointer_pos(),
        };
        drag.into_events(response.rect.min)
    }

    fn controls(&mut self, ui: &mut egui::Ui) -> Vec<SketchEvent<Color32>> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            if ui.button("undo").clicked() {
                events.push(SketchEvent::Undo);
            }
            if ui.button("clear").clicked() {
                events.push(SketchEvent::Clear);
            }

            ui.separator();

            for color in PaletteColor::ALL {
                let outline = if color == self.selected {
                    egui::Stroke::new(2.0, Color32::DARK_GRAY)
                } else {
                    egui::Stroke::new(1.0, Color32::GRAY)
                };
                let swatch = egui::Button::new("")
                    .fill(color.color32())
                    .stroke(outline)
                    .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE));
                if ui.add(swatch).on_hover_text(color.label()).clicked() {
                    self.selected = color;
                    events.push(SketchEvent::SelectColor(color.color32()));
                }
            }

            ui.separator();

            let slider = egui::Slider::new(
                &mut self.stroke_width,
                MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH,
            )
            .text("width");
            if ui.add(slider).changed() {
                events.push(SketchEvent::SetStrokeWidth(self.stroke_width));
            }
        });
        events
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            events.push(SketchEvent::Undo);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            events.extend(self.canvas_view(ui));
            ui.add_space(16.0);
            events.extend(self.controls(ui));
        });

        if !events.is_empty() {
            self.apply(events);
            ctx.request_repaint();
        }
    }
}
