use bevy_egui::egui::{self, Color32, FontId, RichText};

pub fn show_loading_screen(ctx: &mut egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::from_rgb(17, 24, 39)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.add(egui::Spinner::new().size(48.0));
                ui.add_space(24.0);
                ui.label(
                    RichText::new("Loading your portfolio city...")
                        .font(FontId::proportional(24.0))
                        .color(Color32::WHITE),
                );
                ui.label(RichText::new("Preparing 3D experience").color(Color32::GRAY));
            });
        });
}

/// Shown instead of the scene when it could not be built.
pub fn show_error_screen(ctx: &mut egui::Context, message: &str) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::from_rgb(17, 24, 39)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.label(
                    RichText::new("3D Scene Loading Error")
                        .font(FontId::proportional(28.0))
                        .color(Color32::WHITE),
                );
                ui.add_space(12.0);
                ui.label(
                    RichText::new("Sorry, the 3D portfolio couldn't load properly.")
                        .color(Color32::LIGHT_GRAY),
                );
                ui.label(
                    RichText::new("Please try restarting the application.").color(Color32::GRAY),
                );
                ui.add_space(12.0);
                egui::CollapsingHeader::new("Technical Details").show(ui, |ui| {
                    ui.label(RichText::new(message).monospace().small());
                });
            });
        });
}
