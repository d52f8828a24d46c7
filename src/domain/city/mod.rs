//! The city itself: building registry, selection controller and scene.

pub mod controller;
pub mod registry;
pub mod scene;
pub mod selection;

use std::path::PathBuf;

use bevy::prelude::*;

pub use controller::{BuildingSelected, ClosePanel, Selection, SelectionPlugin};
pub use registry::{BuildingId, BuildingRegistry};
pub use scene::{Building, HoveredBuilding, Landmark, Pickable, ScenePlugin};

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PortfolioSettings {
    pub dark_mode: bool,
    pub sound_enabled: bool,
    pub auto_rotate: bool,
    pub show_help: bool,
    pub show_diagnostics: bool,
    /// Delay between the panel sliding out and the selection being cleared.
    pub close_delay_secs: f32,
    pub welcome_secs: f32,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sound_enabled: false,
            auto_rotate: false,
            show_help: false,
            show_diagnostics: false,
            close_delay_secs: 0.3,
            welcome_secs: 3.0,
        }
    }
}

impl PortfolioSettings {
    pub fn clear_color(&self) -> Color {
        if self.dark_mode {
            Color::srgb(0.02, 0.02, 0.04)
        } else {
            Color::srgb(0.62, 0.75, 0.88)
        }
    }

    pub fn ambient_brightness(&self) -> f32 {
        if self.dark_mode {
            250.0
        } else {
            900.0
        }
    }
}

#[derive(Resource, Clone, Debug, Default, PartialEq, Eq)]
pub enum SceneStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

pub struct CityPlugin;
impl Plugin for CityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PortfolioSettings>()
            .init_resource::<SceneStatus>()
            .add_plugins((SelectionPlugin, ScenePlugin))
            .add_systems(PreStartup, load_registry)
            .add_systems(Update, apply_theme);
    }
}

fn load_registry(mut commands: Commands, mut status: ResMut<SceneStatus>) {
    let override_path = std::env::var_os(registry::OVERRIDE_ENV).map(PathBuf::from);
    match BuildingRegistry::load(override_path.as_deref()) {
        Ok(registry) => {
            info!("Building registry ready ({} entries)", registry.len());
            commands.insert_resource(registry);
        }
        Err(e) => {
            error!("Building registry failed to load: {}", e);
            *status = SceneStatus::Failed(e.to_string());
        }
    }
}

fn apply_theme(
    settings: Res<PortfolioSettings>,
    mut clear_color: ResMut<ClearColor>,
    mut ambient: ResMut<AmbientLight>,
) {
    if !settings.is_changed() {
        return;
    }
    clear_color.0 = settings.clear_color();
    ambient.brightness = settings.ambient_brightness();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_follows_settings() {
        let mut app = App::new();
        app.insert_resource(PortfolioSettings::default())
            .insert_resource(ClearColor(Color::BLACK))
            .insert_resource(AmbientLight::default())
            .add_systems(Update, apply_theme);

        app.update();
        let dark = app.world().resource::<AmbientLight>().brightness;
        assert_eq!(dark, PortfolioSettings::default().ambient_brightness());

        app.world_mut().resource_mut::<PortfolioSettings>().dark_mode = false;
        app.update();
        let light = app.world().resource::<AmbientLight>().brightness;
        assert!(light > dark);
        assert_eq!(app.world().resource::<ClearColor>().0, Color::srgb(0.62, 0.75, 0.88));
    }

    #[test]
    fn registry_loads_at_startup() {
        let mut app = App::new();
        app.init_resource::<SceneStatus>()
            .add_systems(PreStartup, load_registry);
        app.update();
        assert!(app.world().contains_resource::<BuildingRegistry>());
        assert_eq!(*app.world().resource::<SceneStatus>(), SceneStatus::Loading);
    }
}
