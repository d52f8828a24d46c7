pub mod picking;

use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::{MouseButtonInput, MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::domain::city::{
    Building, BuildingId, BuildingSelected, ClosePanel, HoveredBuilding, Pickable,
    PortfolioSettings, Selection,
};
use crate::MainCamera;
use picking::nearest_hit;

pub const MIN_DISTANCE: f32 = 15.0;
pub const MAX_DISTANCE: f32 = 90.0;
/// Keeps the camera above the ground plane; elevation of 0 is a polar angle
/// of π/2.
pub const MIN_PITCH: f32 = 0.05;
pub const MAX_PITCH: f32 = FRAC_PI_2 - 0.05;
const FOCUS_LIMIT: f32 = 40.0;
/// Cursor travel in pixels before a left press counts as a drag.
const DRAG_THRESHOLD: f32 = 5.0;
/// Pixel scroll deltas per wheel notch.
const PIXELS_PER_LINE: f32 = 100.0;
const ZOOM_RATE: f32 = 0.1;

/// Orbit camera around a focus point on the ground.
#[derive(Resource, Clone, Debug)]
pub struct OrbitRig {
    pub focus: Vec3,
    pub yaw: f32,
    /// Elevation above the horizon, radians.
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            focus: Vec3::new(0.0, 0.0, -4.0),
            yaw: 0.0,
            pitch: 0.55,
            distance: 55.0,
        }
    }
}

impl OrbitRig {
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * 0.005;
        self.pitch = (self.pitch + delta.y * 0.005).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// `scroll` in wheel lines; positive moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance =
            (self.distance * (-scroll * ZOOM_RATE).exp()).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Drag in screen pixels; moves the focus across the ground.
    pub fn pan(&mut self, delta: Vec2) {
        let right = Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin());
        let forward = Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos());
        let scale = self.distance * 0.0015;
        self.focus += (-right * delta.x + forward * delta.y) * scale;
        self.focus.x = self.focus.x.clamp(-FOCUS_LIMIT, FOCUS_LIMIT);
        self.focus.z = self.focus.z.clamp(-FOCUS_LIMIT, FOCUS_LIMIT);
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.focus + Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }
}

/// Set by the presentation layer when egui owns the pointer this frame.
#[derive(Resource, Default, PartialEq, Eq)]
pub struct PointerOverUi(pub bool);

/// Ordering for the frame's pointer handling. UI hit-testing runs first so
/// the scene never acts on a stale [`PointerOverUi`].
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSet {
    UiPointer,
    Scene,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PointerAction {
    Select(BuildingId),
    Close,
}

#[derive(Resource, Default)]
struct PointerState {
    press: Option<Vec2>,
    dragging: bool,
}

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        configure_input_sets(app);
        app.init_resource::<OrbitRig>()
            .init_resource::<PointerOverUi>()
            .init_resource::<PointerState>()
            .add_systems(
                Update,
                (
                    (pointer_controls, camera_controls)
                        .chain()
                        .in_set(InputSet::Scene),
                    close_on_escape,
                    help_toggle,
                    diagnostics_toggle,
                ),
            );
    }
}

fn configure_input_sets(app: &mut App) {
    app.configure_sets(Update, (InputSet::UiPointer, InputSet::Scene).chain());
}

fn is_drag(press: Vec2, now: Vec2) -> bool {
    now.distance(press) > DRAG_THRESHOLD
}

/// Decides what a released left button does. Empty scene space acts as the
/// panel backdrop while the panel is open.
fn click_action(
    hit: Option<BuildingId>,
    was_click: bool,
    over_ui: bool,
    panel_open: bool,
) -> Option<PointerAction> {
    if !was_click || over_ui {
        return None;
    }
    match hit {
        Some(id) => Some(PointerAction::Select(id)),
        None if panel_open => Some(PointerAction::Close),
        None => None,
    }
}

/// Wheel delta in lines, whatever unit the platform reports.
fn scroll_lines(ev: &MouseWheel) -> f32 {
    match ev.unit {
        MouseScrollUnit::Line => ev.y,
        MouseScrollUnit::Pixel => ev.y / PIXELS_PER_LINE,
    }
}

fn cursor_ray(
    window: &Window,
    cam: (&Camera, &GlobalTransform),
) -> Option<(Vec3, Vec3)> {
    let cursor = window.cursor_position()?;
    let ray = cam.0.viewport_to_world(cam.1, cursor)?;
    Some((ray.origin, *ray.direction))
}

#[allow(clippy::too_many_arguments)]
fn pointer_controls(
    windows: Query<&Window, With<PrimaryWindow>>,
    q_cam: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    buildings: Query<(Entity, &GlobalTransform, &Pickable, &Building)>,
    mut mousebtn_evr: EventReader<MouseButtonInput>,
    over_ui: Res<PointerOverUi>,
    selection: Res<Selection>,
    mut pointer: ResMut<PointerState>,
    mut hovered: ResMut<HoveredBuilding>,
    mut ev_select: EventWriter<BuildingSelected>,
    mut ev_close: EventWriter<ClosePanel>,
) {
    let Ok(win) = windows.get_single() else {
        return;
    };
    let Ok(cam) = q_cam.get_single() else {
        return;
    };
    let cursor = win.cursor_position();

    let hit = match cursor_ray(win, cam) {
        Some((origin, dir)) if !over_ui.0 => nearest_hit(
            origin,
            dir,
            buildings.iter().map(|(entity, gt, pickable, _)| {
                let (min, max) = pickable.bounds(gt.translation());
                (entity, min, max)
            }),
        )
        .map(|(entity, _)| entity),
        _ => None,
    };
    hovered.set_if_neq(HoveredBuilding(hit));

    if let (Some(start), Some(now)) = (pointer.press, cursor) {
        if is_drag(start, now) {
            pointer.dragging = true;
        }
    }

    for ev in mousebtn_evr.read() {
        if ev.button != MouseButton::Left {
            continue;
        }
        match ev.state {
            ButtonState::Pressed => {
                pointer.press = if over_ui.0 { None } else { cursor };
                pointer.dragging = false;
            }
            ButtonState::Released => {
                let was_click = pointer.press.take().is_some() && !pointer.dragging;
                pointer.dragging = false;
                let hit_id = hit
                    .and_then(|e| buildings.get(e).ok())
                    .map(|(_, _, _, building)| building.id.clone());
                match click_action(hit_id, was_click, over_ui.0, selection.is_panel_open()) {
                    Some(PointerAction::Select(id)) => {
                        ev_select.send(BuildingSelected(id));
                    }
                    Some(PointerAction::Close) => {
                        ev_close.send(ClosePanel);
                    }
                    None => {}
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn camera_controls(
    mut scroll_evr: EventReader<MouseWheel>,
    mut motion: EventReader<MouseMotion>,
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerState>,
    over_ui: Res<PointerOverUi>,
    settings: Res<PortfolioSettings>,
    time: Res<Time>,
    mut rig: ResMut<OrbitRig>,
    mut q_cam: Query<&mut Transform, With<MainCamera>>,
) {
    let mut active = false;

    if over_ui.0 {
        scroll_evr.clear();
    } else {
        for ev in scroll_evr.read() {
            rig.zoom(scroll_lines(ev));
            active = true;
        }
    }

    let delta: Vec2 = motion.read().map(|m| m.delta).sum();
    if pointer.dragging && buttons.pressed(MouseButton::Left) {
        rig.rotate(delta);
        active = true;
    } else if buttons.pressed(MouseButton::Right) && !over_ui.0 {
        rig.pan(delta);
        active = true;
    }

    if settings.auto_rotate && !active {
        rig.yaw += 0.1 * time.delta_seconds();
    }

    if let Ok(mut t) = q_cam.get_single_mut() {
        *t = rig.transform();
    }
}

fn close_on_escape(keys: Res<ButtonInput<KeyCode>>, mut ev_close: EventWriter<ClosePanel>) {
    if keys.just_pressed(KeyCode::Escape) {
        ev_close.send(ClosePanel);
    }
}

fn help_toggle(mut settings: ResMut<PortfolioSettings>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyH) {
        settings.show_help = !settings.show_help;
    }
}

fn diagnostics_toggle(mut settings: ResMut<PortfolioSettings>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::F3) {
        settings.show_diagnostics = !settings.show_diagnostics;
    }
}
