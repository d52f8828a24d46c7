use bevy::math::Vec2;
use bevy_egui::egui::{self, Align2, Color32, FontId, RichText};

/// Captions pinned to projected world points, behind every panel.
pub fn show_landmark_labels(ctx: &mut egui::Context, labels: &[(Vec2, &str)]) {
    for (i, (pos, caption)) in labels.iter().enumerate() {
        egui::Area::new(egui::Id::new(("landmark", i)))
            .order(egui::Order::Background)
            .pivot(Align2::CENTER_CENTER)
            .fixed_pos(egui::pos2(pos.x, pos.y))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(*caption)
                        .font(FontId::proportional(20.0))
                        .strong()
                        .color(Color32::WHITE),
                );
            });
    }
}
