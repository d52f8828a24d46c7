use bevy_egui::egui;

use crate::domain::city::{BuildingId, BuildingRegistry, PortfolioSettings};

/// Key reference plus a clickable directory of the buildings. Returns the
/// building the visitor picked from the list, if any.
pub fn show_help_panel(
    ctx: &mut egui::Context,
    settings: &mut PortfolioSettings,
    registry: &BuildingRegistry,
) -> Option<BuildingId> {
    let mut picked = None;
    egui::Window::new("Help")
        .open(&mut settings.show_help)
        .show(ctx, |ui| {
            ui.label("Left Mouse: Rotate (drag) / Select building (click)");
            ui.label("Right Mouse: Pan Camera (drag)");
            ui.label("Mouse Wheel: Zoom");
            ui.label("Esc: Close panel");
            ui.label("H: Toggle Help");
            ui.label("F3: Toggle Diagnostics");
            if registry.is_empty() {
                return;
            }
            ui.separator();
            ui.label("Buildings");
            for record in registry.iter() {
                if ui.link(&record.title).clicked() {
                    picked = Some(record.id.clone());
                }
            }
        });
    picked
}
