mod panels;

use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin};

use crate::domain::city::{
    BuildingRegistry, BuildingSelected, ClosePanel, Landmark, PortfolioSettings, SceneStatus,
    Selection,
};
use crate::domain::controls::{InputSet, PointerOverUi};
use crate::MainCamera;
use panels::{
    show_diagnostics_panel, show_error_screen, show_help_panel, show_hint_banner,
    show_info_panel, show_landmark_labels, show_loading_screen, show_settings_panel,
    show_welcome_overlay,
};

/// Visibility of the overlay widgets. Independent of the building selection.
#[derive(Resource)]
pub struct OverlayState {
    pub welcome_visible: bool,
    welcome_timer: Timer,
    pub settings_open: bool,
}

impl OverlayState {
    pub fn new(welcome_secs: f32) -> Self {
        Self {
            welcome_visible: true,
            welcome_timer: Timer::from_seconds(welcome_secs, TimerMode::Once),
            settings_open: false,
        }
    }

    pub fn dismiss_welcome(&mut self) {
        if self.welcome_visible {
            self.welcome_visible = false;
            debug!("Welcome overlay dismissed");
        }
    }
}

impl FromWorld for OverlayState {
    fn from_world(world: &mut World) -> Self {
        let secs = world
            .get_resource::<PortfolioSettings>()
            .map(|s| s.welcome_secs)
            .unwrap_or(3.0);
        Self::new(secs)
    }
}

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<OverlayState>()
            .add_systems(
                Update,
                (
                    track_ui_pointer.in_set(InputSet::UiPointer),
                    tick_welcome,
                    overlay_keys,
                    ui_system,
                ),
            );
    }
}

fn tick_welcome(time: Res<Time>, status: Res<SceneStatus>, mut overlay: ResMut<OverlayState>) {
    if !overlay.welcome_visible || *status != SceneStatus::Ready {
        return;
    }
    if overlay.welcome_timer.tick(time.delta()).just_finished() {
        overlay.dismiss_welcome();
    }
}

fn overlay_keys(keys: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<OverlayState>) {
    if keys.just_pressed(KeyCode::Escape) {
        overlay.settings_open = false;
        overlay.dismiss_welcome();
    }
}

/// Full-screen overlays swallow the pointer entirely.
fn track_ui_pointer(
    mut contexts: EguiContexts,
    overlay: Res<OverlayState>,
    status: Res<SceneStatus>,
    mut over_ui: ResMut<PointerOverUi>,
) {
    let blocking = overlay.welcome_visible || *status != SceneStatus::Ready;
    let over_area = contexts
        .try_ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area() || ctx.wants_pointer_input())
        .unwrap_or(false);
    over_ui.set_if_neq(PointerOverUi(blocking || over_area));
}

/// Runs `edit` on a copy and writes back only on a real change, so panels
/// redrawn every frame do not trip change detection on the settings.
fn edit_settings<R>(
    settings: &mut ResMut<PortfolioSettings>,
    edit: impl FnOnce(&mut PortfolioSettings) -> R,
) -> R {
    let mut edited = (**settings).clone();
    let out = edit(&mut edited);
    settings.set_if_neq(edited);
    out
}

#[allow(clippy::too_many_arguments)]
fn ui_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<PortfolioSettings>,
    mut overlay: ResMut<OverlayState>,
    status: Res<SceneStatus>,
    selection: Res<Selection>,
    registry: Option<Res<BuildingRegistry>>,
    diagnostics: Res<DiagnosticsStore>,
    q_cam: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    landmarks: Query<(&GlobalTransform, &Landmark)>,
    mut ev_close: EventWriter<ClosePanel>,
    mut ev_select: EventWriter<BuildingSelected>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    match &*status {
        SceneStatus::Failed(message) => {
            show_error_screen(ctx, message);
            return;
        }
        SceneStatus::Loading => {
            show_loading_screen(ctx);
            return;
        }
        SceneStatus::Ready => {}
    }
    let Some(registry) = registry else {
        return;
    };

    if overlay.welcome_visible {
        if show_welcome_overlay(ctx) {
            overlay.dismiss_welcome();
        }
        return;
    }

    if let Ok((camera, cam_gt)) = q_cam.get_single() {
        let labels: Vec<(Vec2, &str)> = landmarks
            .iter()
            .filter_map(|(gt, landmark)| {
                let anchor = gt.translation() + Vec3::Y * landmark.height;
                camera
                    .world_to_viewport(cam_gt, anchor)
                    .map(|pos| (pos, landmark.caption))
            })
            .collect();
        show_landmark_labels(ctx, &labels);
    }

    if show_info_panel(ctx, &selection, &registry) {
        ev_close.send(ClosePanel);
    }
    if !selection.is_panel_open() {
        show_hint_banner(ctx);
    }
    let picked = edit_settings(&mut settings, |edited| {
        show_settings_panel(ctx, edited, &mut overlay.settings_open);
        show_help_panel(ctx, edited, &registry)
    });
    if let Some(id) = picked {
        ev_select.send(BuildingSelected(id));
    }
    show_diagnostics_panel(ctx, &diagnostics, &settings, &selection);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn overlay_app(status: SceneStatus) -> App {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .insert_resource(PortfolioSettings::default())
            .insert_resource(status)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<OverlayState>()
            .add_systems(Update, (tick_welcome, overlay_keys));
        app
    }

    fn step(app: &mut App, ms: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(ms));
        app.update();
    }

    #[test]
    fn welcome_hides_after_its_delay() {
        let mut app = overlay_app(SceneStatus::Ready);
        step(&mut app, 2_000);
        assert!(app.world().resource::<OverlayState>().welcome_visible);
        step(&mut app, 1_100);
        assert!(!app.world().resource::<OverlayState>().welcome_visible);
    }

    #[test]
    fn welcome_waits_for_the_scene() {
        let mut app = overlay_app(SceneStatus::Loading);
        step(&mut app, 5_000);
        assert!(app.world().resource::<OverlayState>().welcome_visible);
    }

    #[test]
    fn escape_closes_settings_and_welcome() {
        let mut app = overlay_app(SceneStatus::Ready);
        app.world_mut().resource_mut::<OverlayState>().settings_open = true;
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        step(&mut app, 16);
        let overlay = app.world().resource::<OverlayState>();
        assert!(!overlay.settings_open);
        assert!(!overlay.welcome_visible);
    }

    #[derive(Resource, Default)]
    struct SettingsChanged(Vec<bool>);

    #[test]
    fn redrawing_settings_without_edits_keeps_them_unchanged() {
        #[derive(Resource)]
        struct Toggle(bool);

        let mut app = App::new();
        app.insert_resource(PortfolioSettings::default())
            .insert_resource(Toggle(false))
            .init_resource::<SettingsChanged>()
            .add_systems(
                Update,
                (
                    |mut settings: ResMut<PortfolioSettings>, toggle: Res<Toggle>| {
                        edit_settings(&mut settings, |s| {
                            if toggle.0 {
                                s.dark_mode = !s.dark_mode;
                            }
                        });
                    },
                    |settings: Res<PortfolioSettings>, mut seen: ResMut<SettingsChanged>| {
                        seen.0.push(settings.is_changed());
                    },
                )
                    .chain(),
            );

        app.update();
        app.update();
        app.world_mut().resource_mut::<Toggle>().0 = true;
        app.update();
        assert_eq!(app.world().resource::<SettingsChanged>().0, [true, false, true]);
        assert!(!app.world().resource::<PortfolioSettings>().dark_mode);
    }

    #[test]
    fn welcome_delay_comes_from_settings() {
        let mut world = World::new();
        world.insert_resource(PortfolioSettings {
            welcome_secs: 7.5,
            ..default()
        });
        let overlay = OverlayState::from_world(&mut world);
        assert_eq!(overlay.welcome_timer.duration(), Duration::from_secs_f32(7.5));
    }
}
