//! Calculator theme
//!
//! Pure black and white, 1px black outlines, square corners. Uses the
//! Rubik display font when one can be found on disk.

use egui::{Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::path::{Path, PathBuf};

const DISPLAY_FONT: &str = "Rubik-Regular.ttf";

pub struct CalcColors;

impl CalcColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_button: f32,
    pub font_size_small: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_button: 18.0,
            font_size_small: 13.0,
            item_spacing: 4.0,
        }
    }
}

impl CalcTheme {
    /// Candidate locations for the display font, most specific first.
    fn font_search_paths(configured: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(path) = configured {
            paths.push(path.to_path_buf());
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                paths.push(dir.join("fonts").join(DISPLAY_FONT));
                // cargo workspace: exe is in target/debug or target/release
                if let Some(root) = dir.parent().and_then(Path::parent) {
                    paths.push(root.join("calcpad/fonts").join(DISPLAY_FONT));
                }
            }
        }
        paths.push(PathBuf::from("fonts").join(DISPLAY_FONT));
        paths.push(PathBuf::from("/usr/share/fonts").join(DISPLAY_FONT));
        paths
    }

    fn load_display_font(configured: Option<&Path>) -> Option<Vec<u8>> {
        for path in Self::font_search_paths(configured) {
            if let Ok(data) = std::fs::read(&path) {
                tracing::debug!(path = %path.display(), "loaded display font");
                return Some(data);
            }
        }
        tracing::info!("display font not found, using egui defaults");
        None
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context, font_path: Option<&Path>) {
        if let Some(data) = Self::load_display_font(font_path) {
            let mut fonts = FontDefinitions::default();
            fonts.font_data.insert("Rubik".to_owned(), FontData::from_owned(data));
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "Rubik".to_owned());
            ctx.set_fonts(fonts);
        }

        let mut style = Style::default();
        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = CalcColors::WHITE;
        visuals.panel_fill = CalcColors::WHITE;
        visuals.faint_bg_color = CalcColors::WHITE;
        visuals.extreme_bg_color = CalcColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, CalcColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = CalcColors::WHITE;
            ws.weak_bg_fill = CalcColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.open);
        // pressed buttons invert
        visuals.widgets.active.bg_fill = CalcColors::BLACK;
        visuals.widgets.active.weak_bg_fill = CalcColors::BLACK;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, CalcColors::WHITE);
        visuals.widgets.active.rounding = Rounding::ZERO;

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Display frame: white fill, 1px black outline
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(CalcColors::WHITE)
            .stroke(Stroke::new(1.0, CalcColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}
