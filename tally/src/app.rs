//! Tally application
//!
//! Translates clicks and key presses into [`Action`]s, feeds them to the
//! engine and draws whatever `display_state()` reports.

use std::time::{Duration, Instant};

use egui::{Align, Color32, Context, FontId, Key, Layout, RichText, Rounding, Sense};
use tally::keymap::action_for_key;
use tally::layout::{self, ButtonSpec, BUTTON_LAYOUT, COLUMNS};
use tally::{Action, ButtonKind, Calculator, DisplaySettings};
use tallycore::feedback::{PressFeedback, CLICK_FLASH, KEY_FLASH};
use tallycore::theme::menu_bar;
use tallycore::{AppConfig, Theme, ThemeKind};

/// Grid cell of a button: (row, index within row).
type Cell = (usize, usize);

const BUTTON_MIN_HEIGHT: f32 = 36.0;
const BUTTON_MAX_HEIGHT: f32 = 72.0;

pub struct TallyApp {
    engine: Calculator,
    config: AppConfig,
    theme_kind: ThemeKind,
    theme: Theme,
    feedback: PressFeedback<Cell>,
    show_about: bool,
}

impl TallyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let theme_kind = config.theme;
        let theme = theme_kind.theme();
        theme.apply(&cc.egui_ctx);
        tracing::info!(theme = theme.name, "ui initialized");

        Self {
            engine: Calculator::new(DisplaySettings::from(&config.display)),
            feedback: PressFeedback::new(config.display.animate_buttons),
            config,
            theme_kind,
            theme,
            show_about: false,
        }
    }

    fn set_theme(&mut self, ctx: &Context, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = kind.theme();
        self.theme.apply(ctx);
        tracing::info!(theme = self.theme.name, "theme changed");
    }

    /// Run an action and start its button's press flash.
    fn press(&mut self, action: Action, flash: Duration) {
        if action == Action::Percent && !self.config.features.percentage_calculation {
            tracing::debug!("percentage calculation disabled, ignoring");
            return;
        }
        if let Some(cell) = layout::position_of(action) {
            self.feedback.flash(cell, flash, Instant::now());
        }
        self.engine.apply(action);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        if !self.config.features.keyboard_support {
            return;
        }

        let keys: Vec<String> = ctx.input(|i| {
            let mut keys = Vec::new();
            for event in &i.events {
                match event {
                    egui::Event::Text(text) => {
                        keys.extend(text.chars().map(String::from));
                    }
                    egui::Event::Key { key, pressed: true, .. } if is_command_key(*key) => {
                        keys.push(key.name().to_string());
                    }
                    _ => {}
                }
            }
            keys
        });

        for key in keys {
            if let Some(action) = action_for_key(&key) {
                tracing::debug!(%key, "keyboard input");
                self.press(action, KEY_FLASH);
            }
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let state = self.engine.display_state();
        let colors = &self.theme.colors;
        let current_color = if state.has_error {
            colors.special_button
        } else {
            colors.display_text
        };

        self.theme.display_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(Layout::top_down(Align::Max), |ui| {
                if self.config.display.show_previous_operation {
                    // keep the line height when nothing is pending
                    let previous = if state.previous.is_empty() {
                        " "
                    } else {
                        state.previous.as_str()
                    };
                    ui.label(
                        RichText::new(previous)
                            .font(FontId::monospace(16.0))
                            .color(colors.display_secondary),
                    );
                }
                ui.label(
                    RichText::new(&state.current)
                        .font(FontId::monospace(display_font_size(&state.current)))
                        .color(current_color)
                        .strong(),
                );
            });
        });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        let spacing = ui.spacing().item_spacing;
        let rows = BUTTON_LAYOUT.len() as f32;
        let columns = COLUMNS as f32;
        let cell_w = (ui.available_width() - spacing.x * (columns - 1.0)) / columns;
        let cell_h = ((ui.available_height() - spacing.y * (rows - 1.0)) / rows)
            .clamp(BUTTON_MIN_HEIGHT, BUTTON_MAX_HEIGHT);

        let mut clicked = None;
        for (row, buttons) in BUTTON_LAYOUT.iter().enumerate() {
            ui.horizontal(|ui| {
                for (col, spec) in buttons.iter().enumerate() {
                    let span = spec.span as f32;
                    let size = egui::vec2(cell_w * span + spacing.x * (span - 1.0), cell_h);
                    let pressed = self.feedback.is_active((row, col), now);
                    if self.render_button(ui, spec, size, pressed).clicked() {
                        clicked = Some(spec.action);
                    }
                }
            });
        }

        if let Some(action) = clicked {
            tracing::debug!(?action, "button clicked");
            self.press(action, CLICK_FLASH);
        }
    }

    fn render_button(
        &self,
        ui: &mut egui::Ui,
        spec: &ButtonSpec,
        size: egui::Vec2,
        pressed: bool,
    ) -> egui::Response {
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let hovered = ui.rect_contains_pointer(rect);
        // pressed buttons shrink slightly
        let rect = if pressed {
            rect.shrink2(rect.size() * 0.025)
        } else {
            rect
        };

        let colors = &self.theme.colors;
        let accent_text = self.theme.accent_text;
        let (fill, text_color) = match spec.action.kind() {
            ButtonKind::Number if pressed => (Some(colors.button_active), colors.button_text),
            ButtonKind::Number => (None, colors.button_text),
            ButtonKind::Special => (Some(accent(colors.special_button, pressed)), accent_text),
            ButtonKind::Operator => (Some(accent(colors.operator_button, pressed)), accent_text),
            ButtonKind::Equals if pressed || hovered => {
                (Some(colors.equals_button_hover), accent_text)
            }
            ButtonKind::Equals => (Some(colors.equals_button), accent_text),
        };

        let label = RichText::new(spec.label).size(20.0).color(text_color);
        let mut button =
            egui::Button::new(label).rounding(Rounding::same(self.theme.button_rounding));
        if let Some(fill) = fill {
            button = button.fill(fill);
        }
        ui.put(rect, button)
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("tally");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("a four-function desktop calculator");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys: 0-9 . + - * / % Enter =");
                ui.label("Backspace deletes, Esc clears");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for TallyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.feedback.prune(Instant::now());
        self.handle_keys(ctx);

        let mut selected_theme = None;
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, &self.theme, |ui| {
                ui.menu_button("view", |ui| {
                    for kind in ThemeKind::ALL {
                        if ui.selectable_label(self.theme_kind == kind, kind.label()).clicked() {
                            selected_theme = Some(kind);
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
        if let Some(kind) = selected_theme {
            self.set_theme(ctx, kind);
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.colors.background)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                self.theme.body_frame().show(ui, |ui| {
                    self.render_display(ui);
                    ui.add_space(12.0);
                    self.render_buttons(ui);
                });
            });

        if self.show_about {
            self.render_about(ctx);
        }

        if let Some(remaining) = self.feedback.next_deadline(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}

/// Darken an accent colour while its button is pressed.
fn accent(color: Color32, pressed: bool) -> Color32 {
    if pressed {
        color.gamma_multiply(0.85)
    } else {
        color
    }
}

/// Keys that produce no text event but map to an action.
fn is_command_key(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Backspace | Key::Delete | Key::Escape)
}

/// Shrink the value font as the text grows so it stays on one line.
fn display_font_size(text: &str) -> f32 {
    match text.chars().count() {
        0..=9 => 34.0,
        10..=13 => 28.0,
        _ => 22.0,
    }
}
