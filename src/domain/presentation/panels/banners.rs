use bevy_egui::egui::{self, Align2, Color32, FontId, RichText};

/// Returns true when the visitor clicks through.
pub fn show_welcome_overlay(ctx: &mut egui::Context) -> bool {
    let screen = ctx.screen_rect();
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("welcome_backdrop"),
    ))
    .rect_filled(screen, 0.0, Color32::from_rgba_unmultiplied(24, 20, 48, 200));

    let mut entered = false;
    egui::Area::new("welcome_overlay".into())
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Welcome")
                        .font(FontId::proportional(72.0))
                        .color(Color32::from_rgb(0x81, 0x8c, 0xf8)),
                );
                ui.add_space(12.0);
                ui.label(
                    RichText::new("Cloud Solutions Architect Portfolio")
                        .font(FontId::proportional(26.0))
                        .color(Color32::from_white_alpha(180)),
                );
                ui.add_space(32.0);
                let button = egui::Button::new(
                    RichText::new("Enter Experience").font(FontId::proportional(18.0)),
                )
                .rounding(20.0);
                entered = ui.add(button).clicked();
            });
        });
    entered
}

pub fn show_hint_banner(ctx: &mut egui::Context) {
    egui::Area::new("hint_banner".into())
        .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -32.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(Color32::from_black_alpha(120))
                .rounding(16.0)
                .inner_margin(egui::Margin::symmetric(20.0, 10.0))
                .show(ui, |ui| {
                    let text = RichText::new(
                        "Explore the 3D city and click on buildings to learn about my cloud expertise",
                    )
                    .color(Color32::from_white_alpha(210));
                    ui.label(text);
                });
        });
}
