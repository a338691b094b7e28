pub mod theme;

use crate::overlay::{BreakOverlay, CloseHandler, CloseReason, TickOutcome};
use crate::settings::Settings;
use crate::ticker::{Ticker, TICK_PERIOD};
use eframe::egui;
use std::time::{Duration, Instant};
use theme::{fade_in_opacity, OverlayStyle};

pub const WINDOW_TITLE: &str = "Break Time";
pub const MESSAGE: &str = "Take a Break for Your Eyes and Back!\nTake a deep breath.";
pub const CLOSE_LABEL: &str = "End Break";
pub const FADE_IN: Duration = Duration::from_millis(300);

/// Closes the root viewport, which ends `eframe::run_native`.
pub struct ViewportCloser<'a>(pub &'a egui::Context);

impl CloseHandler for ViewportCloser<'_> {
    fn close(&mut self, reason: CloseReason) {
        tracing::debug!(?reason, "requesting viewport close");
        self.0.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_fullscreen(true)
            .with_decorations(false)
            .with_always_on_top(),
        ..Default::default()
    }
}

pub struct BreakApp {
    pub overlay: BreakOverlay,
    pub ticker: Ticker,
    pub style: OverlayStyle,
    opened_at: Instant,
    fade_in: bool,
    dismiss_on_escape: bool,
    close_hovered: bool,
}

impl BreakApp {
    pub fn new(settings: &Settings, now: Instant) -> Self {
        Self {
            overlay: BreakOverlay::open(),
            ticker: Ticker::armed(TICK_PERIOD, now),
            style: OverlayStyle::default(),
            opened_at: now,
            fade_in: settings.fade_in,
            dismiss_on_escape: settings.dismiss_on_escape,
            close_hovered: false,
        }
    }

    /// Deliver every tick due at `now`. Returns the delay until the next
    /// one, or `None` once the countdown has stopped.
    pub fn advance(&mut self, ctx: &egui::Context, now: Instant) -> Option<Duration> {
        let mut closer = ViewportCloser(ctx);
        for _ in 0..self.ticker.due(now) {
            if self.overlay.tick(&mut closer) == TickOutcome::Stop {
                self.ticker.disarm();
                break;
            }
        }
        self.ticker.until_next(now)
    }

    /// End the break early. Returns `false` if it was already ending.
    pub fn dismiss(&mut self, ctx: &egui::Context) -> bool {
        self.ticker.disarm();
        self.overlay.close(&mut ViewportCloser(ctx))
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        if !self.fade_in {
            return 1.0;
        }
        fade_in_opacity(now.saturating_duration_since(self.opened_at), FADE_IN)
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if self.dismiss_on_escape && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            tracing::debug!("escape pressed");
            self.dismiss(ctx);
        }
    }

    fn paint(&mut self, ctx: &egui::Context, style: &OverlayStyle) {
        let frame = egui::Frame::none().fill(style.background);
        egui::CentralPanel::default().frame(frame).show(ctx, |_ui| {});

        egui::Area::new(egui::Id::new("break_message"))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .interactable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    for line in MESSAGE.lines() {
                        ui.label(style.message_text(line));
                    }
                    ui.add_space(style.message_margin + style.spacing);
                    ui.label(style.countdown_text(self.overlay.countdown().to_string()));
                });
            });

        let mut clicked = false;
        egui::Area::new(egui::Id::new("break_close"))
            .anchor(
                egui::Align2::CENTER_BOTTOM,
                egui::vec2(0.0, -style.close_margin_bottom),
            )
            .show(ctx, |ui| {
                let label = egui::Label::new(style.close_text(CLOSE_LABEL, self.close_hovered))
                    .sense(egui::Sense::click());
                let response = ui
                    .add(label)
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                self.close_hovered = response.hovered();
                clicked = response.clicked();
            });
        if clicked {
            tracing::debug!("end break clicked");
            self.dismiss(ctx);
        }
    }
}

impl eframe::App for BreakApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let next_tick = self.advance(ctx, now);
        self.handle_input(ctx);
        if self.overlay.is_closing() {
            return;
        }

        let opacity = self.opacity(now);
        let style = self.style.faded(opacity);
        self.paint(ctx, &style);

        if opacity < 1.0 {
            ctx.request_repaint();
        } else if let Some(wait) = next_tick {
            ctx.request_repaint_after(wait);
        }
    }
}
