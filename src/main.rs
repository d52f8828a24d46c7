mod domain;

use std::f32::consts::{FRAC_PI_4, PI};

use bevy::core_pipeline::bloom::BloomSettings;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::diagnostic::{EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use domain::controls::OrbitRig;
use domain::{CityPlugin, InputPlugin, UiPlugin};

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.04)))
        .insert_resource(Msaa::Sample4)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(EntityCountDiagnosticsPlugin)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Portfolio City".into(),
                resolution: (1400., 900.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((CityPlugin, InputPlugin, UiPlugin))
        .add_systems(Startup, (setup_camera, setup_lights))
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3dBundle {
            camera: Camera {
                hdr: true,
                ..default()
            },
            projection: PerspectiveProjection {
                fov: 75.0_f32.to_radians(),
                ..default()
            }
            .into(),
            tonemapping: Tonemapping::TonyMcMapface,
            transform: OrbitRig::default().transform(),
            ..default()
        },
        BloomSettings::default(),
        MainCamera,
    ));
}

fn setup_lights(mut commands: Commands) {
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_rotation(Quat::from_euler(
            EulerRot::YXZ,
            FRAC_PI_4,
            -PI / 3.0,
            0.0,
        )),
        ..default()
    });

    for (position, hex) in [
        (Vec3::new(-10.0, 10.0, -10.0), "6366f1"),
        (Vec3::new(10.0, 10.0, 10.0), "8b5cf6"),
    ] {
        commands.spawn(PointLightBundle {
            point_light: PointLight {
                color: Srgba::hex(hex).map(Color::Srgba).unwrap_or(Color::WHITE),
                intensity: 400_000.0,
                range: 60.0,
                ..default()
            },
            transform: Transform::from_translation(position),
            ..default()
        });
    }
}

#[derive(Component)]
pub struct MainCamera;
