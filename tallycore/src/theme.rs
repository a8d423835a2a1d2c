//! Calculator themes
//!
//! Three palettes ship with the app. A theme is plain data; [`Theme::apply`]
//! turns it into egui visuals, and the calculator reads the accent colours
//! directly when painting operator, special and equals buttons.

use egui::epaint::Shadow;
use egui::style::WidgetVisuals;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use serde::{Deserialize, Serialize};

/// Which built-in theme to use. Unknown names in config fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ThemeKind {
    #[default]
    Default,
    Dark,
    Minimal,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Default, ThemeKind::Dark, ThemeKind::Minimal];

    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Default => Theme::default_light(),
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Minimal => Theme::minimal(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Default => "default",
            ThemeKind::Dark => "dark",
            ThemeKind::Minimal => "minimal",
        }
    }
}

impl From<String> for ThemeKind {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dark" => ThemeKind::Dark,
            "minimal" => ThemeKind::Minimal,
            "default" => ThemeKind::Default,
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                ThemeKind::Default
            }
        }
    }
}

/// Full palette of a theme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub background: Color32,
    pub calculator_bg: Color32,
    pub display_bg: Color32,
    pub display_text: Color32,
    /// Previous-operation line above the current value.
    pub display_secondary: Color32,
    pub button_bg: Color32,
    pub button_hover: Color32,
    pub button_active: Color32,
    pub button_text: Color32,
    pub special_button: Color32,
    pub operator_button: Color32,
    pub equals_button: Color32,
    pub equals_button_hover: Color32,
    pub border: Color32,
    /// `None` disables window and popup shadows.
    pub shadow: Option<Color32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub dark_mode: bool,
    pub colors: ThemeColors,
    /// Corner radius of the calculator body and display.
    pub rounding: f32,
    pub button_rounding: f32,
    /// Text on filled accent buttons (operators, specials, equals).
    pub accent_text: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_light()
    }
}

impl Theme {
    pub fn default_light() -> Self {
        Self {
            name: "Default",
            dark_mode: false,
            colors: ThemeColors {
                background: Color32::from_rgb(0xf8, 0xf9, 0xfa),
                calculator_bg: Color32::WHITE,
                display_bg: Color32::from_rgb(0x34, 0x3a, 0x40),
                display_text: Color32::WHITE,
                display_secondary: Color32::from_rgba_unmultiplied(255, 255, 255, 191),
                button_bg: Color32::WHITE,
                button_hover: Color32::from_rgb(0xf1, 0xf3, 0xf5),
                button_active: Color32::from_rgb(0xe9, 0xec, 0xef),
                button_text: Color32::from_rgb(0x21, 0x25, 0x29),
                special_button: Color32::from_rgb(0xfa, 0x52, 0x52),
                operator_button: Color32::from_rgb(0x4c, 0x6e, 0xf5),
                equals_button: Color32::from_rgb(0x4c, 0x6e, 0xf5),
                equals_button_hover: Color32::from_rgb(0x3b, 0x5b, 0xdb),
                border: Color32::from_rgb(0xe9, 0xec, 0xef),
                shadow: Some(Color32::from_rgba_unmultiplied(0, 0, 0, 26)),
            },
            rounding: 12.0,
            button_rounding: 8.0,
            accent_text: Color32::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark",
            dark_mode: true,
            colors: ThemeColors {
                background: Color32::from_rgb(0x1a, 0x1a, 0x1a),
                calculator_bg: Color32::from_rgb(0x2d, 0x2d, 0x2d),
                display_bg: Color32::from_rgb(0x1a, 0x1a, 0x1a),
                display_text: Color32::WHITE,
                display_secondary: Color32::from_rgba_unmultiplied(255, 255, 255, 153),
                button_bg: Color32::from_rgb(0x40, 0x40, 0x40),
                button_hover: Color32::from_rgb(0x4a, 0x4a, 0x4a),
                button_active: Color32::from_rgb(0x35, 0x35, 0x35),
                button_text: Color32::WHITE,
                special_button: Color32::from_rgb(0xff, 0x6b, 0x6b),
                operator_button: Color32::from_rgb(0x5c, 0x7c, 0xfa),
                equals_button: Color32::from_rgb(0x5c, 0x7c, 0xfa),
                equals_button_hover: Color32::from_rgb(0x4c, 0x63, 0xd2),
                border: Color32::from_rgb(0x40, 0x40, 0x40),
                shadow: Some(Color32::from_rgba_unmultiplied(0, 0, 0, 77)),
            },
            rounding: 12.0,
            button_rounding: 8.0,
            accent_text: Color32::WHITE,
        }
    }

    pub fn minimal() -> Self {
        Self {
            name: "Minimal",
            dark_mode: false,
            colors: ThemeColors {
                background: Color32::WHITE,
                calculator_bg: Color32::WHITE,
                display_bg: Color32::from_rgb(0xf8, 0xf9, 0xfa),
                display_text: Color32::from_rgb(0x21, 0x25, 0x29),
                display_secondary: Color32::from_rgba_unmultiplied(33, 37, 41, 153),
                button_bg: Color32::TRANSPARENT,
                button_hover: Color32::from_rgb(0xf8, 0xf9, 0xfa),
                button_active: Color32::from_rgb(0xe9, 0xec, 0xef),
                button_text: Color32::from_rgb(0x21, 0x25, 0x29),
                special_button: Color32::from_rgb(0xdc, 0x35, 0x45),
                operator_button: Color32::from_rgb(0x00, 0x7b, 0xff),
                equals_button: Color32::from_rgb(0x00, 0x7b, 0xff),
                equals_button_hover: Color32::from_rgb(0x00, 0x56, 0xb3),
                border: Color32::from_rgb(0xde, 0xe2, 0xe6),
                shadow: None,
            },
            rounding: 4.0,
            button_rounding: 4.0,
            accent_text: Color32::WHITE,
        }
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let c = &self.colors;
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(18.0, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = c.background;
        visuals.window_fill = c.calculator_bg;
        visuals.faint_bg_color = c.calculator_bg;
        visuals.extreme_bg_color = c.display_bg;
        visuals.override_text_color = Some(c.button_text);

        visuals.window_rounding = Rounding::same(self.rounding);
        visuals.menu_rounding = Rounding::same(self.button_rounding);
        visuals.window_stroke = Stroke::new(1.0, c.border);

        let button_rounding = Rounding::same(self.button_rounding);
        let paint = |ws: &mut WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::new(1.0, c.border);
            ws.fg_stroke = Stroke::new(1.0, c.button_text);
            ws.rounding = button_rounding;
        };
        paint(&mut visuals.widgets.noninteractive, c.calculator_bg);
        paint(&mut visuals.widgets.inactive, c.button_bg);
        paint(&mut visuals.widgets.hovered, c.button_hover);
        paint(&mut visuals.widgets.active, c.button_active);
        paint(&mut visuals.widgets.open, c.button_active);

        match c.shadow {
            Some(color) => {
                visuals.window_shadow.color = color;
                visuals.popup_shadow.color = color;
            }
            None => {
                visuals.window_shadow = Shadow::NONE;
                visuals.popup_shadow = Shadow::NONE;
            }
        }

        visuals.selection.bg_fill = c.operator_button;
        visuals.selection.stroke = Stroke::new(1.0, self.accent_text);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Frame around the value display
    pub fn display_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.colors.display_bg)
            .rounding(Rounding::same(self.rounding))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
    }

    /// Frame of the calculator body
    pub fn body_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.colors.calculator_bg)
            .stroke(Stroke::new(1.0, self.colors.border))
            .rounding(Rounding::same(self.rounding))
            .inner_margin(egui::Margin::same(12.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(theme.colors.calculator_bg)
        .stroke(Stroke::new(1.0, theme.colors.border))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ThemeKind::from("Dark".to_string()), ThemeKind::Dark);
        assert_eq!(ThemeKind::from("minimal".to_string()), ThemeKind::Minimal);
        assert_eq!(ThemeKind::from("neon".to_string()), ThemeKind::Default);
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(serde_json::to_string(&ThemeKind::Dark).unwrap(), "\"dark\"");
        let kind: ThemeKind = serde_json::from_str("\"MINIMAL\"").unwrap();
        assert_eq!(kind, ThemeKind::Minimal);
    }

    #[test]
    fn test_builtin_palettes() {
        for kind in ThemeKind::ALL {
            let theme = kind.theme();
            assert_eq!(theme.name.to_ascii_lowercase(), kind.label());
            assert_eq!(theme.colors.operator_button, theme.colors.equals_button);
        }
        assert!(Theme::dark().dark_mode);
        assert!(Theme::minimal().colors.shadow.is_none());
        assert_eq!(Theme::minimal().colors.button_bg, Color32::TRANSPARENT);
    }
}
