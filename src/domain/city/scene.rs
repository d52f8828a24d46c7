//! City scene: environment props, the five buildings, and the cosmetic
//! per-frame animation (ring spin, tree sway, hover tint).

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::color::{LinearRgba, Mix, Srgba};
use bevy::prelude::*;
use rand::{Rng, SeedableRng};

use super::registry::{BuildingId, BuildingRegistry};
use super::SceneStatus;

/// Height of the ground plane; building roots sit on it.
pub const GROUND_Y: f32 = -2.0;

pub struct ScenePlugin;
impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBuilding>()
            .add_systems(Startup, spawn_city)
            .add_systems(Update, (spin_rings, sway_trees, apply_hover_tint));
    }
}

/// Root of one clickable building.
#[derive(Component, Debug, Clone)]
pub struct Building {
    pub id: BuildingId,
}

/// Axis-aligned pick volume, relative to the entity's translation.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pickable {
    pub center_offset: Vec3,
    pub half_extents: Vec3,
}

impl Pickable {
    pub fn bounds(&self, translation: Vec3) -> (Vec3, Vec3) {
        let center = translation + self.center_offset;
        (center - self.half_extents, center + self.half_extents)
    }
}

/// Caption floating above a building, drawn by the overlay layer.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Landmark {
    pub caption: &'static str,
    /// Above the building root.
    pub height: f32,
}

/// Tinted on hover.
#[derive(Component)]
pub struct BuildingBody {
    material: Handle<StandardMaterial>,
    base: Color,
    hover: Color,
}

#[derive(Component)]
pub struct Spin {
    pub speed: f32,
}

#[derive(Component)]
pub struct Sway {
    pub phase: f32,
}

/// Building currently under the cursor, written by the pointer controls.
#[derive(Resource, Default, Debug, PartialEq, Eq)]
pub struct HoveredBuilding(pub Option<Entity>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildingKind {
    Main,
    Aws,
    Kubernetes,
    NaverCloud,
    KtCloud,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 5] = [
        BuildingKind::Main,
        BuildingKind::Aws,
        BuildingKind::Kubernetes,
        BuildingKind::NaverCloud,
        BuildingKind::KtCloud,
    ];

    /// Registry key emitted when this building is clicked.
    pub fn id(self) -> &'static str {
        match self {
            BuildingKind::Main => "Main",
            BuildingKind::Aws => "AWS",
            BuildingKind::Kubernetes => "Kubernetes",
            BuildingKind::NaverCloud => "NAVER Cloud",
            BuildingKind::KtCloud => "KT Cloud",
        }
    }

    pub fn position(self) -> Vec3 {
        match self {
            BuildingKind::Main => Vec3::new(0.0, GROUND_Y, -26.0),
            BuildingKind::Aws => Vec3::new(-18.0, GROUND_Y, -14.0),
            BuildingKind::Kubernetes => Vec3::new(18.0, GROUND_Y, -14.0),
            BuildingKind::NaverCloud => Vec3::new(-18.0, GROUND_Y, 14.0),
            BuildingKind::KtCloud => Vec3::new(18.0, GROUND_Y, 14.0),
        }
    }

    fn default_color(self) -> Color {
        match self {
            BuildingKind::Main => Color::srgb_u8(0x7e, 0xa8, 0xc4),
            BuildingKind::Aws => Color::srgb_u8(0xff, 0x99, 0x00),
            BuildingKind::Kubernetes => Color::srgb_u8(0x32, 0x6c, 0xe5),
            BuildingKind::NaverCloud => Color::srgb_u8(0x1e, 0xc8, 0x00),
            BuildingKind::KtCloud => Color::srgb_u8(0xff, 0x1c, 0x1c),
        }
    }

    pub fn landmark(self) -> Option<Landmark> {
        match self {
            BuildingKind::Main => Some(Landmark {
                caption: "KSJ - Cloud Solutions Architect",
                height: 22.0,
            }),
            _ => None,
        }
    }

    pub fn pickable(self) -> Pickable {
        let (half_extents, top) = match self {
            BuildingKind::Main => (Vec3::new(5.0, 9.75, 5.0), 19.5),
            BuildingKind::Aws => (Vec3::new(3.5, 8.0, 3.5), 16.0),
            BuildingKind::Kubernetes => (Vec3::new(3.0, 6.4, 3.0), 12.8),
            BuildingKind::NaverCloud => (Vec3::new(3.0, 6.5, 3.0), 13.0),
            BuildingKind::KtCloud => (Vec3::new(3.1, 5.75, 3.1), 11.5),
        };
        Pickable {
            center_offset: Vec3::new(0.0, top * 0.5, 0.0),
            half_extents,
        }
    }
}

/// Emissive value for a glowing surface.
fn glow(color: Color, strength: f32) -> LinearRgba {
    let c = color.to_linear();
    LinearRgba::rgb(c.red * strength, c.green * strength, c.blue * strength)
}

fn lighten(color: Color, amount: f32) -> Color {
    Srgba::from(color).mix(&Srgba::WHITE, amount).into()
}

struct Kit<'a> {
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
}

impl Kit<'_> {
    fn mesh(&mut self, mesh: impl Into<Mesh>) -> Handle<Mesh> {
        self.meshes.add(mesh)
    }

    fn matte(&mut self, color: Color, metallic: f32, roughness: f32) -> Handle<StandardMaterial> {
        self.materials.add(StandardMaterial {
            base_color: color,
            metallic,
            perceptual_roughness: roughness,
            ..default()
        })
    }

    fn glowing(&mut self, color: Color, emissive: Color, strength: f32) -> Handle<StandardMaterial> {
        self.materials.add(StandardMaterial {
            base_color: color,
            emissive: glow(emissive, strength),
            ..default()
        })
    }

    fn pbr(&mut self, mesh: impl Into<Mesh>, material: Handle<StandardMaterial>, at: Vec3) -> PbrBundle {
        PbrBundle {
            mesh: self.mesh(mesh),
            material,
            transform: Transform::from_translation(at),
            ..default()
        }
    }
}

fn spawn_city(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    registry: Option<Res<BuildingRegistry>>,
    mut status: ResMut<SceneStatus>,
) {
    if let SceneStatus::Failed(_) = *status {
        warn!("Skipping city spawn; scene failed to load");
        return;
    }
    let mut kit = Kit {
        meshes: &mut *meshes,
        materials: &mut *materials,
    };

    spawn_ground(&mut commands, &mut kit);
    spawn_roads(&mut commands, &mut kit);
    spawn_plaza(&mut commands, &mut kit);
    spawn_props(&mut commands, &mut kit);

    for kind in BuildingKind::ALL {
        let color = registry
            .as_deref()
            .and_then(|r| r.lookup(kind.id()))
            .map(|record| record.accent())
            .unwrap_or_else(|| kind.default_color());
        spawn_building(&mut commands, &mut kit, kind, color);
    }

    *status = SceneStatus::Ready;
    info!("City scene spawned with {} buildings", BuildingKind::ALL.len());
}

fn spawn_ground(commands: &mut Commands, kit: &mut Kit) {
    let material = kit.matte(Color::srgb_u8(0x2d, 0x34, 0x36), 0.1, 0.9);
    commands.spawn((
        Name::new("Ground"),
        PbrBundle {
            mesh: kit.mesh(Plane3d::default().mesh().size(80.0, 80.0)),
            material,
            transform: Transform::from_xyz(0.0, GROUND_Y, 0.0),
            ..default()
        },
    ));
}

/// East-west road across the city, north-south road running south of the
/// plaza. Yellow lane markings every 5 units.
fn spawn_roads(commands: &mut Commands, kit: &mut Kit) {
    let asphalt = kit.matte(Color::srgb_u8(0x36, 0x45, 0x4f), 0.0, 0.9);
    let paint = kit.matte(Color::srgb_u8(0xff, 0xff, 0x00), 0.0, 0.6);
    let y = GROUND_Y + 0.05;

    commands
        .spawn((Name::new("Roads"), SpatialBundle::default()))
        .with_children(|parent| {
            parent.spawn(kit.pbr(Cuboid::new(60.0, 0.1, 4.0), asphalt.clone(), Vec3::new(0.0, y, 0.0)));
            parent.spawn(kit.pbr(Cuboid::new(4.0, 0.1, 30.0), asphalt, Vec3::new(0.0, y, 15.0)));

            let dash_x = kit.mesh(Cuboid::new(2.0, 0.11, 0.2));
            for i in 0..10 {
                parent.spawn(PbrBundle {
                    mesh: dash_x.clone(),
                    material: paint.clone(),
                    transform: Transform::from_xyz(-25.0 + i as f32 * 5.0, y + 0.01, 0.0),
                    ..default()
                });
            }
            let dash_z = kit.mesh(Cuboid::new(0.2, 0.11, 2.0));
            for i in 0..5 {
                parent.spawn(PbrBundle {
                    mesh: dash_z.clone(),
                    material: paint.clone(),
                    transform: Transform::from_xyz(0.0, y + 0.01, 5.0 + i as f32 * 5.0),
                    ..default()
                });
            }
        });
}

fn spawn_plaza(commands: &mut Commands, kit: &mut Kit) {
    let stone = kit.matte(Color::srgb_u8(0xd2, 0xb4, 0x8c), 0.1, 0.9);
    let inner_ring = kit.materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x8b, 0x73, 0x55),
        perceptual_roughness: 0.8,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let outer_ring = kit.materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x69, 0x69, 0x69),
        perceptual_roughness: 0.9,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let fountain = kit.matte(Color::srgb_u8(0x70, 0x80, 0x90), 0.3, 0.6);
    let flat = Quat::from_rotation_x(-FRAC_PI_2);

    commands
        .spawn((Name::new("Plaza"), SpatialBundle::default()))
        .with_children(|parent| {
            parent.spawn(kit.pbr(Cylinder::new(12.0, 0.2), stone, Vec3::new(0.0, GROUND_Y + 0.1, 0.0)));
            for (inner, outer, material) in [(8.0, 9.0, inner_ring), (10.0, 11.0, outer_ring)] {
                let mut ring = kit.pbr(Annulus::new(inner, outer), material, Vec3::new(0.0, GROUND_Y + 0.3, 0.0));
                ring.transform.rotation = flat;
                parent.spawn(ring);
            }
            parent.spawn(kit.pbr(Cylinder::new(2.0, 1.0), fountain, Vec3::new(0.0, GROUND_Y + 0.6, 0.0)));
        });
}

/// Trees ring the plaza, streetlights line the roads, benches face the
/// fountain.
fn spawn_props(commands: &mut Commands, kit: &mut Kit) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);

    let trunk = kit.matte(Color::srgb_u8(0x8b, 0x45, 0x13), 0.0, 0.8);
    let leaves_low = kit.matte(Color::srgb_u8(0x22, 0x8b, 0x22), 0.0, 0.7);
    let leaves_high = kit.matte(Color::srgb_u8(0x32, 0xcd, 0x32), 0.0, 0.7);
    for i in 0..8 {
        let angle = (i as f32 + 0.5) * TAU / 8.0;
        let radius = 15.0 + rng.gen_range(-1.0..1.0);
        let position = Vec3::new(angle.cos() * radius, GROUND_Y, angle.sin() * radius);
        commands
            .spawn((
                Name::new("Tree"),
                Sway {
                    phase: rng.gen::<f32>() * TAU,
                },
                SpatialBundle::from_transform(Transform::from_translation(position)),
            ))
            .with_children(|parent| {
                parent.spawn(kit.pbr(
                    ConicalFrustum {
                        radius_top: 0.2,
                        radius_bottom: 0.3,
                        height: 3.0,
                    },
                    trunk.clone(),
                    Vec3::new(0.0, 1.5, 0.0),
                ));
                parent.spawn(kit.pbr(
                    Cone {
                        radius: 1.5,
                        height: 4.0,
                    },
                    leaves_low.clone(),
                    Vec3::new(0.0, 4.5, 0.0),
                ));
                parent.spawn(kit.pbr(
                    Cone {
                        radius: 1.2,
                        height: 3.0,
                    },
                    leaves_high.clone(),
                    Vec3::new(0.0, 6.0, 0.0),
                ));
            });
    }

    let pole = kit.matte(Color::srgb_u8(0x4a, 0x4a, 0x4a), 0.7, 0.3);
    let head = kit.matte(Color::srgb_u8(0x2a, 0x2a, 0x2a), 0.5, 0.4);
    let warm = Color::srgb_u8(0xff, 0xf8, 0xdc);
    let bulb = kit.glowing(warm, warm, 3.0);
    let streetlights = [
        Vec3::new(-24.0, GROUND_Y, -3.0),
        Vec3::new(-12.0, GROUND_Y, 3.0),
        Vec3::new(12.0, GROUND_Y, -3.0),
        Vec3::new(24.0, GROUND_Y, 3.0),
        Vec3::new(-3.0, GROUND_Y, 20.0),
        Vec3::new(3.0, GROUND_Y, 27.0),
    ];
    for position in streetlights {
        commands
            .spawn((
                Name::new("Streetlight"),
                SpatialBundle::from_transform(Transform::from_translation(position)),
            ))
            .with_children(|parent| {
                parent.spawn(kit.pbr(Cylinder::new(0.1, 8.0), pole.clone(), Vec3::new(0.0, 4.0, 0.0)));
                parent.spawn(kit.pbr(Cuboid::new(0.8, 0.4, 0.8), head.clone(), Vec3::new(0.0, 8.2, 0.0)));
                parent.spawn(kit.pbr(Cuboid::new(0.6, 0.2, 0.6), bulb.clone(), Vec3::new(0.0, 7.9, 0.0)));
                parent.spawn(PointLightBundle {
                    point_light: PointLight {
                        color: warm,
                        intensity: 40_000.0,
                        range: 15.0,
                        ..default()
                    },
                    transform: Transform::from_xyz(0.0, 7.8, 0.0),
                    ..default()
                });
            });
    }

    let wood = kit.matte(Color::srgb_u8(0x8b, 0x45, 0x13), 0.0, 0.8);
    let iron = kit.matte(Color::srgb_u8(0x4a, 0x4a, 0x4a), 0.7, 0.5);
    for i in 0..4 {
        let angle = (i as f32 + 0.5) * TAU / 4.0;
        let position = Vec3::new(angle.cos() * 6.0, GROUND_Y + 0.2, angle.sin() * 6.0);
        // Local -Z (the backrest side) points away from the fountain.
        let facing = Quat::from_rotation_y(FRAC_PI_2 - angle + PI);
        commands
            .spawn((
                Name::new("Bench"),
                SpatialBundle::from_transform(
                    Transform::from_translation(position).with_rotation(facing),
                ),
            ))
            .with_children(|parent| {
                parent.spawn(kit.pbr(Cuboid::new(2.0, 0.2, 0.8), wood.clone(), Vec3::new(0.0, 0.6, 0.0)));
                let mut back = kit.pbr(Cuboid::new(2.0, 0.2, 0.8), wood.clone(), Vec3::new(0.0, 1.2, -0.3));
                back.transform.rotation = Quat::from_rotation_x(0.3);
                parent.spawn(back);
                let leg = kit.mesh(Cuboid::new(0.1, 0.6, 0.1));
                for (x, z) in [(-0.8, 0.3), (0.8, 0.3), (-0.8, -0.3), (0.8, -0.3)] {
                    parent.spawn(PbrBundle {
                        mesh: leg.clone(),
                        material: iron.clone(),
                        transform: Transform::from_xyz(x, 0.3, z),
                        ..default()
                    });
                }
            });
    }
}

/// Lit window panes on the +Z face.
struct WindowGrid {
    cols: usize,
    rows: usize,
    size: Vec2,
    origin: Vec2,
    step: Vec2,
    face_z: f32,
}

fn spawn_building(commands: &mut Commands, kit: &mut Kit, kind: BuildingKind, color: Color) {
    let body = kit.matte(color, 0.2, 0.8);
    let tint = BuildingBody {
        material: body.clone(),
        base: color,
        hover: lighten(color, 0.12),
    };
    let pane = Color::srgb_u8(0x4a, 0x90, 0xe2);
    let window = kit.glowing(pane, pane, 2.0);

    let mut root = commands.spawn((
        Name::new(format!("Building {}", kind.id())),
        Building {
            id: BuildingId::from(kind.id()),
        },
        kind.pickable(),
        SpatialBundle::from_transform(Transform::from_translation(kind.position())),
    ));
    if let Some(landmark) = kind.landmark() {
        root.insert(landmark);
    }

    root.with_children(|parent| {
        let grid = match kind {
            BuildingKind::Main => {
                parent.spawn((kit.pbr(Cuboid::new(8.0, 16.0, 8.0), body, Vec3::new(0.0, 8.0, 0.0)), tint));
                let top = kit.matte(Color::srgb_u8(0x6b, 0x9b, 0xb5), 0.4, 0.6);
                parent.spawn(kit.pbr(Cylinder::new(4.0, 3.0), top, Vec3::new(0.0, 17.5, 0.0)));
                let ring = kit.materials.add(StandardMaterial {
                    base_color: Color::srgba(1.0, 1.0, 1.0, 0.8),
                    emissive: glow(color, 4.0),
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                });
                parent.spawn((
                    kit.pbr(Cylinder::new(5.0, 0.5), ring, Vec3::new(0.0, 19.0, 0.0)),
                    Spin { speed: 0.6 },
                ));
                WindowGrid {
                    cols: 4,
                    rows: 3,
                    size: Vec2::new(0.8, 1.2),
                    origin: Vec2::new(-3.0, 2.0),
                    step: Vec2::new(2.0, 3.0),
                    face_z: 4.1,
                }
            }
            BuildingKind::Aws => {
                parent.spawn((kit.pbr(Cuboid::new(6.0, 14.0, 6.0), body, Vec3::new(0.0, 7.0, 0.0)), tint));
                let cap = kit.matte(Color::srgb_u8(0xcc, 0x7a, 0x00), 0.3, 0.6);
                parent.spawn(kit.pbr(Cuboid::new(7.0, 2.0, 7.0), cap, Vec3::new(0.0, 15.0, 0.0)));
                WindowGrid {
                    cols: 3,
                    rows: 3,
                    size: Vec2::new(0.6, 1.0),
                    origin: Vec2::new(-1.5, 2.0),
                    step: Vec2::new(1.5, 3.0),
                    face_z: 3.1,
                }
            }
            BuildingKind::Kubernetes => {
                for (width, y) in [(6.0, 2.0), (5.5, 6.0), (5.0, 10.0)] {
                    parent.spawn((
                        kit.pbr(Cuboid::new(width, 4.0, width), body.clone(), Vec3::new(0.0, y, 0.0)),
                        BuildingBody {
                            material: tint.material.clone(),
                            base: tint.base,
                            hover: tint.hover,
                        },
                    ));
                }
                let wheel = kit.matte(Color::WHITE, 0.8, 0.2);
                parent.spawn(kit.pbr(Cylinder::new(2.5, 0.3), wheel.clone(), Vec3::new(0.0, 12.5, 0.0)));
                let spoke = kit.mesh(Cuboid::new(0.2, 0.2, 2.0));
                for i in 0..6 {
                    let angle = i as f32 / 6.0 * TAU;
                    parent.spawn(PbrBundle {
                        mesh: spoke.clone(),
                        material: wheel.clone(),
                        transform: Transform::from_xyz(angle.cos() * 1.2, 12.7, angle.sin() * 1.2)
                            .with_rotation(Quat::from_rotation_y(angle)),
                        ..default()
                    });
                }
                WindowGrid {
                    cols: 3,
                    rows: 2,
                    size: Vec2::new(0.6, 0.8),
                    origin: Vec2::new(-1.5, 1.0),
                    step: Vec2::new(1.5, 2.0),
                    face_z: 3.1,
                }
            }
            BuildingKind::NaverCloud => {
                parent.spawn((kit.pbr(Cuboid::new(6.0, 10.0, 6.0), body, Vec3::new(0.0, 5.0, 0.0)), tint));
                let top = kit.matte(Color::srgb_u8(0x17, 0xa6, 0x00), 0.3, 0.6);
                parent.spawn(kit.pbr(Cuboid::new(5.0, 3.0, 5.0), top, Vec3::new(0.0, 11.5, 0.0)));
                let edge = kit.matte(Color::srgb_u8(0x0f, 0x7d, 0x00), 0.2, 0.7);
                let post = kit.mesh(Cuboid::new(0.3, 3.0, 0.3));
                for i in 0..6 {
                    let angle = i as f32 / 6.0 * TAU;
                    parent.spawn(PbrBundle {
                        mesh: post.clone(),
                        material: edge.clone(),
                        transform: Transform::from_xyz(angle.cos() * 2.2, 11.5, angle.sin() * 2.2),
                        ..default()
                    });
                }
                WindowGrid {
                    cols: 3,
                    rows: 2,
                    size: Vec2::new(0.6, 1.0),
                    origin: Vec2::new(-1.5, 1.5),
                    step: Vec2::new(1.5, 2.5),
                    face_z: 3.1,
                }
            }
            BuildingKind::KtCloud => {
                parent.spawn((kit.pbr(Cuboid::new(6.0, 11.0, 6.0), body, Vec3::new(0.0, 5.5, 0.0)), tint));
                let stripe = kit.matte(Color::srgb_u8(0xcc, 0x00, 0x00), 0.4, 0.5);
                let band = kit.mesh(Cuboid::new(6.2, 1.0, 6.2));
                for y in [3.0, 7.0, 11.0] {
                    parent.spawn(PbrBundle {
                        mesh: band.clone(),
                        material: stripe.clone(),
                        transform: Transform::from_xyz(0.0, y, 0.0),
                        ..default()
                    });
                }
                WindowGrid {
                    cols: 3,
                    rows: 2,
                    size: Vec2::new(0.6, 0.9),
                    origin: Vec2::new(-1.5, 1.5),
                    step: Vec2::new(1.5, 2.5),
                    face_z: 3.1,
                }
            }
        };

        let pane_mesh = kit.mesh(Cuboid::new(grid.size.x, grid.size.y, 0.1));
        for i in 0..grid.cols * grid.rows {
            let (row, col) = (i / grid.cols, i % grid.cols);
            parent.spawn(PbrBundle {
                mesh: pane_mesh.clone(),
                material: window.clone(),
                transform: Transform::from_xyz(
                    grid.origin.x + col as f32 * grid.step.x,
                    grid.origin.y + row as f32 * grid.step.y,
                    grid.face_z,
                ),
                ..default()
            });
        }
    });
}

fn spin_rings(time: Res<Time>, mut rings: Query<(&mut Transform, &Spin)>) {
    for (mut t, spin) in &mut rings {
        t.rotate_y(spin.speed * time.delta_seconds());
    }
}

fn sway_trees(time: Res<Time>, mut trees: Query<(&mut Transform, &Sway)>) {
    let t = time.elapsed_seconds();
    for (mut transform, sway) in &mut trees {
        transform.rotation = Quat::from_rotation_z((t * 2.0 + sway.phase).sin() * 0.05);
    }
}

fn apply_hover_tint(
    hovered: Res<HoveredBuilding>,
    bodies: Query<(&Parent, &BuildingBody)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !hovered.is_changed() {
        return;
    }
    for (parent, body) in &bodies {
        let color = if hovered.0 == Some(parent.get()) {
            body.hover
        } else {
            body.base
        };
        if let Some(material) = materials.get_mut(&body.material) {
            material.base_color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_building_id_is_in_the_registry() {
        let registry = BuildingRegistry::embedded().unwrap();
        for kind in BuildingKind::ALL {
            assert!(registry.contains(kind.id()), "{} missing", kind.id());
        }
    }

    #[test]
    fn pick_volumes_sit_on_the_ground_and_do_not_overlap() {
        let boxes: Vec<(Vec3, Vec3)> = BuildingKind::ALL
            .iter()
            .map(|k| k.pickable().bounds(k.position()))
            .collect();
        for (min, _) in &boxes {
            assert!((min.y - GROUND_Y).abs() < 1e-4);
        }
        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                let disjoint = a.1.x < b.0.x
                    || b.1.x < a.0.x
                    || a.1.z < b.0.z
                    || b.1.z < a.0.z;
                assert!(disjoint);
            }
        }
    }

    #[test]
    fn main_tower_carries_the_title_caption() {
        let landmark = BuildingKind::Main.landmark().unwrap();
        assert_eq!(landmark.caption, "KSJ - Cloud Solutions Architect");
        let top = BuildingKind::Main.pickable().bounds(Vec3::ZERO).1.y;
        assert!(landmark.height > top);
        for kind in &BuildingKind::ALL[1..] {
            assert!(kind.landmark().is_none());
        }
    }

    #[test]
    fn hover_color_is_lighter() {
        let base = BuildingKind::Aws.default_color();
        let hover = Srgba::from(lighten(base, 0.12));
        let base = Srgba::from(base);
        assert!(hover.green > base.green);
        assert!(hover.blue > base.blue);
    }
}
