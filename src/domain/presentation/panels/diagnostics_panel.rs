use bevy::diagnostic::{
    DiagnosticsStore, EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin,
};
use bevy_egui::egui;

use crate::domain::city::selection::{Phase, SelectionState};
use crate::domain::city::PortfolioSettings;

pub fn show_diagnostics_panel(
    ctx: &mut egui::Context,
    diagnostics: &DiagnosticsStore,
    settings: &PortfolioSettings,
    selection: &SelectionState,
) {
    if settings.show_diagnostics {
        egui::Window::new("Diagnostics").show(ctx, |ui| {
            if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
                if let Some(value) = fps.smoothed() {
                    ui.label(format!("FPS: {:.1}", value));
                }
            }
            if let Some(entity_count) = diagnostics.get(&EntityCountDiagnosticsPlugin::ENTITY_COUNT)
            {
                if let Some(value) = entity_count.value() {
                    ui.label(format!("Entities: {}", value));
                }
            }
            let phase = match selection.phase() {
                Phase::Idle => "idle".to_string(),
                Phase::Open(id) => format!("open ({id})"),
                Phase::Closing(id) => format!("closing ({id})"),
            };
            ui.label(format!("Selection: {phase}"));
        });
    }
}
