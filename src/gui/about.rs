//! About Screen Widget
//! Welcome text over an optional background image, with a button through to
//! the dashboard.

use crate::story::ABOUT_TEXT;
use anyhow::Context;
use egui::{Color32, Rect, RichText, ScrollArea, TextureHandle, TextureOptions, pos2};
use std::path::Path;

/// Default background asset, looked up relative to the working directory.
const BACKGROUND_PATH: &str = "background.jpeg";

/// The welcome/about screen. The background image is cosmetic: a missing or
/// undecodable file is logged and the screen renders without it.
pub struct AboutScreen {
    background: Option<egui::ColorImage>,
    texture: Option<TextureHandle>,
}

impl Default for AboutScreen {
    fn default() -> Self {
        let background = match load_background(Path::new(BACKGROUND_PATH)) {
            Ok(img) => Some(img),
            Err(err) => {
                log::warn!("background image unavailable, continuing without it: {err:#}");
                None
            }
        };
        Self {
            background,
            texture: None,
        }
    }
}

impl AboutScreen {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Draw the screen. Returns true when "View Dashboard" was clicked.
    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) -> bool {
        // Upload the decoded image on first paint.
        if self.texture.is_none() {
            if let Some(image) = self.background.take() {
                self.texture =
                    Some(ctx.load_texture("about_background", image, TextureOptions::LINEAR));
            }
        }

        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            ui.painter().image(
                texture.id(),
                ui.max_rect(),
                uv,
                Color32::from_gray(180), // dimmed so the text stays readable
            );
        }

        let mut view_dashboard = false;

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ScrollArea::vertical()
                .max_height(ui.available_height() - 80.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(ABOUT_TEXT).size(18.0));
                });

            ui.add_space(15.0);
            let button = egui::Button::new(RichText::new("View Dashboard").size(20.0).strong())
                .min_size(egui::vec2(220.0, 40.0));
            if ui.add(button).clicked() {
                view_dashboard = true;
            }
        });

        view_dashboard
    }
}

fn load_background(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        img.as_flat_samples().as_slice(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_background_is_not_fatal() {
        let err = load_background(Path::new("definitely_not_here.jpeg")).unwrap_err();
        assert!(err.to_string().contains("definitely_not_here.jpeg"));
        // Construction still succeeds without the asset.
        let screen = AboutScreen::new();
        let _ = screen.has_background();
    }
}
