//! Toast notifications.
//!
//! Write outcomes are reported from `ehttp` callbacks, which only get a
//! `'static` capture, so toasts travel over a flume channel into the
//! frame loop.

use std::any::Any;

use chrono::{DateTime, TimeDelta, Utc};
use egui::{Align2, Color32, Frame, Margin, RichText};
use manage_business::WriteOutcome;
use manage_states::State;

const TOAST_TTL: TimeDelta = TimeDelta::seconds(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn color(self) -> Color32 {
        match self {
            Self::Success => Color32::from_rgb(34, 139, 34),
            Self::Warning => Color32::from_rgb(219, 161, 0),
            Self::Error => Color32::from_rgb(200, 40, 40),
        }
    }

    pub fn for_outcome(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Success => Self::Success,
            WriteOutcome::Warn => Self::Warning,
            WriteOutcome::Error => Self::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    expires_at: DateTime<Utc>,
}

pub type ToastSender = flume::Sender<(ToastLevel, String)>;

/// Collects toasts from anywhere in the app (including background HTTP
/// callbacks) and keeps the ones currently on screen.
pub struct ToastBus {
    sender: ToastSender,
    receiver: flume::Receiver<(ToastLevel, String)>,
    active: Vec<Toast>,
}

impl Default for ToastBus {
    fn default() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            sender,
            receiver,
            active: Vec::new(),
        }
    }
}

impl ToastBus {
    /// A handle safe to move into `ehttp` callbacks.
    pub fn sender(&self) -> ToastSender {
        self.sender.clone()
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        // Unbounded channel; send only fails when the receiver is gone.
        let _ = self.sender.send((level, message.into()));
    }

    /// Moves queued messages into the visible set and expires old ones.
    /// Called once per frame.
    pub fn sync(&mut self, now: DateTime<Utc>) {
        for (level, message) in self.receiver.try_iter() {
            self.active.push(Toast {
                level,
                message,
                expires_at: now + TOAST_TTL,
            });
        }
        self.active.retain(|toast| toast.expires_at > now);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.active
    }
}

impl State for ToastBus {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Draws the visible toasts stacked in the bottom-right corner.
pub fn show_toasts(ctx: &egui::Context, bus: &ToastBus) {
    if bus.visible().is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toast_area"))
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in bus.visible() {
                Frame::NONE
                    .fill(ctx.style().visuals.extreme_bg_color)
                    .stroke(egui::Stroke::new(1.0, toast.level.color()))
                    .inner_margin(Margin::symmetric(10, 6))
                    .corner_radius(4.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.message).color(toast.level.color()));
                    });
                ui.add_space(4.0);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn toasts_expire_after_ttl() {
        let mut bus = ToastBus::default();
        bus.push(ToastLevel::Success, "saved");
        bus.sync(at(0));
        assert_eq!(bus.visible().len(), 1);
        bus.sync(at(3));
        assert_eq!(bus.visible().len(), 1);
        bus.sync(at(5));
        assert!(bus.visible().is_empty());
    }

    #[test]
    fn sender_handle_feeds_the_bus() {
        let mut bus = ToastBus::default();
        let sender = bus.sender();
        sender.send((ToastLevel::Error, "boom".to_owned())).unwrap();
        bus.sync(at(0));
        assert_eq!(bus.visible()[0].message, "boom");
        assert_eq!(bus.visible()[0].level, ToastLevel::Error);
    }

    #[test]
    fn outcome_maps_to_level() {
        assert_eq!(
            ToastLevel::for_outcome(WriteOutcome::Warn),
            ToastLevel::Warning
        );
    }
}
