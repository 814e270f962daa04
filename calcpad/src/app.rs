//! Calculator window
//!
//! Turns button clicks into engine events and draws the returned view.
//! All arithmetic lives in `calccore`.

use calccore::{CalcConfig, Digit, Engine, Event, Operator, View};
use egui::{Context, FontId, RichText};

use crate::fit::fit_font_size;
use crate::theme::{CalcColors, CalcTheme};

const KEYPAD: [[&str; 4]; 5] = [
    ["CE", "C", "←", "/"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["±", "0", ".", "="],
];

const BUTTON_HEIGHT: f32 = 44.0;
const PENDING_FONT_SIZE: f32 = 14.0;
/// Room kept free at the right of the entry text.
const FIT_PADDING: f32 = 15.0;

/// Engine event for a keypad label.
fn event_for(label: &str) -> Option<Event> {
    let event = match label {
        "CE" => Event::ClearEntry,
        "C" => Event::ClearAll,
        "←" => Event::Backspace,
        "±" => Event::Negate,
        "." => Event::Point,
        "=" => Event::Equals,
        _ => match Operator::ALL.into_iter().find(|op| op.symbol() == label) {
            Some(op) => Event::Operator(op),
            None => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Event::Digit(Digit::try_from(c).ok()?),
                    _ => return None,
                }
            }
        },
    };
    Some(event)
}

/// While an error is shown only the dismissing buttons stay active.
fn is_enabled(event: Event, view: &View) -> bool {
    !view.controls_disabled
        || matches!(event, Event::Digit(_) | Event::Backspace | Event::ClearEntry)
}

pub struct CalcApp {
    engine: Engine,
    view: View,
    config: CalcConfig,
}

impl CalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CalcConfig) -> Self {
        let engine = Engine::with_config(&config);
        Self {
            view: engine.view(),
            engine,
            config,
        }
    }

    fn press(&mut self, event: Event) {
        self.view = self.engine.handle(event);
    }

    fn entry_font_size(&self, ctx: &Context, available_width: f32) -> f32 {
        let text = &self.view.entry_text;
        fit_font_size(
            self.config.entry_font_size,
            self.config.min_entry_font_size,
            available_width - FIT_PADDING,
            |size| {
                ctx.fonts(|fonts| {
                    fonts
                        .layout_no_wrap(text.clone(), FontId::proportional(size), CalcColors::BLACK)
                        .size()
                        .x
                })
            },
        )
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        CalcTheme::display_frame().show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(
                    RichText::new(&self.view.pending_text)
                        .font(FontId::proportional(PENDING_FONT_SIZE)),
                );
                ui.set_min_height(self.config.entry_font_size + PENDING_FONT_SIZE + 12.0);
                let size = self.entry_font_size(ui.ctx(), ui.available_width());
                ui.label(
                    RichText::new(&self.view.entry_text)
                        .font(FontId::proportional(size))
                        .strong(),
                );
            });
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.x;
        let btn_w = (ui.available_width() - 3.0 * spacing) / 4.0;
        let mut pressed = None;

        for row in KEYPAD {
            ui.horizontal(|ui| {
                for label in row {
                    let Some(event) = event_for(label) else {
                        tracing::warn!(label, "keypad label has no event");
                        continue;
                    };
                    let enabled = is_enabled(event, &self.view);
                    let clicked = ui
                        .add_enabled_ui(enabled, |ui| {
                            ui.add_sized([btn_w, BUTTON_HEIGHT], egui::Button::new(label))
                        })
                        .inner
                        .clicked();
                    if clicked {
                        pressed = Some(event);
                    }
                }
            });
        }

        if let Some(event) = pressed {
            self.press(event);
        }
    }
}

impl eframe::App for CalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(CalcColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });
    }
}
