use bevy_egui::egui::{self, Color32, FontId, RichText};

use crate::domain::city::selection::{panel_content, SelectionState};
use crate::domain::city::BuildingRegistry;

const PANEL_WIDTH: f32 = 420.0;

/// Slide-in panel for the selected building. Keeps drawing the last record
/// while it animates out. Returns true when the close button was clicked.
pub fn show_info_panel(
    ctx: &mut egui::Context,
    selection: &SelectionState,
    registry: &BuildingRegistry,
) -> bool {
    let Some(content) = panel_content(selection, registry) else {
        return false;
    };
    let record = content.record;
    let [r, g, b] = record.accent_rgb();
    let accent = Color32::from_rgb(r, g, b);

    if content.visible {
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("info_backdrop"),
        ))
        .rect_filled(ctx.screen_rect(), 0.0, Color32::from_black_alpha(77));
    }

    let mut close = false;
    egui::SidePanel::left("info_panel")
        .exact_width(PANEL_WIDTH)
        .resizable(false)
        .show_animated(ctx, content.visible, |ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&record.title)
                        .font(FontId::proportional(24.0))
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    close = ui.button("❌").on_hover_text("Close").clicked();
                });
            });
            let (rect, _) = ui.allocate_exact_size(egui::vec2(64.0, 4.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, accent);
            ui.add_space(12.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Overview");
                ui.label(&record.summary);
                ui.add_space(12.0);

                ui.heading("Experience & Expertise");
                ui.label(format!(
                    "Hands-on delivery across {} projects and {} core technologies.",
                    record.projects.len(),
                    record.skills.len()
                ));
                ui.add_space(12.0);

                ui.heading("Key Projects");
                for project in &record.projects {
                    egui::Frame::group(ui.style())
                        .stroke(egui::Stroke::new(1.0, accent.linear_multiply(0.4)))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(&project.title).strong().color(accent));
                            ui.label(&project.description);
                        });
                    ui.add_space(6.0);
                }
                ui.add_space(6.0);

                ui.heading("Skills & Technologies");
                ui.horizontal_wrapped(|ui| {
                    for skill in &record.skills {
                        egui::Frame::none()
                            .fill(accent.linear_multiply(0.25))
                            .rounding(10.0)
                            .inner_margin(egui::Margin::symmetric(8.0, 3.0))
                            .show(ui, |ui| {
                                ui.label(RichText::new(skill).small());
                            });
                    }
                });
            });
        });
    close
}
