use bevy_egui::egui::{self, Align2, RichText};

use crate::domain::city::PortfolioSettings;

/// Gear button in the top-right corner plus the settings window it toggles.
pub fn show_settings_panel(
    ctx: &mut egui::Context,
    settings: &mut PortfolioSettings,
    open: &mut bool,
) {
    egui::Area::new("settings_button".into())
        .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            let gear = egui::Button::new(RichText::new("⚙").size(22.0)).rounding(20.0);
            if ui.add(gear).on_hover_text("Settings").clicked() {
                *open = !*open;
            }
        });

    let was_dark = settings.dark_mode;
    egui::Window::new("Settings")
        .open(open)
        .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 64.0))
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(RichText::new("Theme").strong());
            ui.horizontal(|ui| {
                ui.selectable_value(&mut settings.dark_mode, true, "🌙 Dark");
                ui.selectable_value(&mut settings.dark_mode, false, "☀ Light");
            });
            ui.separator();

            ui.label(RichText::new("Sound").strong());
            ui.horizontal(|ui| {
                ui.selectable_value(&mut settings.sound_enabled, true, "On");
                ui.selectable_value(&mut settings.sound_enabled, false, "Off");
            });
            ui.separator();

            ui.checkbox(&mut settings.auto_rotate, "Auto-rotate camera");
            ui.separator();

            ui.label(RichText::new("Controls").strong());
            ui.label("Left drag: Rotate view");
            ui.label("Right drag: Pan");
            ui.label("Scroll: Zoom");
            ui.label("Click a building: Details");
            ui.label("Esc: Close panel");
        });

    if was_dark != settings.dark_mode {
        ctx.set_visuals(if settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }
}
