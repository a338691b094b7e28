use eframe::egui::{self, Color32};

/// Colours and sizes of the break overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub background: Color32,
    pub message: Color32,
    pub message_size: f32,
    /// Gap below the message block.
    pub message_margin: f32,
    pub countdown: Color32,
    pub countdown_size: f32,
    pub close: Color32,
    pub close_hover: Color32,
    pub close_size: f32,
    /// Distance of the close control from the bottom edge.
    pub close_margin_bottom: f32,
    pub spacing: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0x33, 0x33, 0x33),
            message: Color32::WHITE,
            message_size: 40.0,
            message_margin: 20.0,
            countdown: Color32::from_rgb(0x88, 0x88, 0x88),
            countdown_size: 80.0,
            close: Color32::from_rgb(0x99, 0x99, 0x99),
            close_hover: Color32::from_rgb(0xcc, 0xcc, 0xcc),
            close_size: 16.0,
            close_margin_bottom: 300.0,
            spacing: 20.0,
        }
    }
}

impl OverlayStyle {
    /// The style with every colour scaled by `opacity`, clamped to `0..=1`.
    pub fn faded(&self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity >= 1.0 {
            return self.clone();
        }
        Self {
            background: self.background.gamma_multiply(opacity),
            message: self.message.gamma_multiply(opacity),
            countdown: self.countdown.gamma_multiply(opacity),
            close: self.close.gamma_multiply(opacity),
            close_hover: self.close_hover.gamma_multiply(opacity),
            ..self.clone()
        }
    }

    pub fn message_text(&self, text: &str) -> egui::RichText {
        egui::RichText::new(text)
            .size(self.message_size)
            .strong()
            .color(self.message)
    }

    pub fn countdown_text(&self, text: String) -> egui::RichText {
        egui::RichText::new(text)
            .size(self.countdown_size)
            .strong()
            .color(self.countdown)
    }

    pub fn close_text(&self, text: &str, hovered: bool) -> egui::RichText {
        let rich = egui::RichText::new(text).size(self.close_size);
        if hovered {
            rich.color(self.close_hover).underline()
        } else {
            rich.color(self.close)
        }
    }
}

/// Opacity of the overlay `elapsed` into a fade-in lasting `duration`.
pub fn fade_in_opacity(elapsed: std::time::Duration, duration: std::time::Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}
