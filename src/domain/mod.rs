//! Domain modules split by discipline.
//! - `city`: building registry, selection state and the 3D scene.
//! - `controls`: camera rig, picking and keyboard toggles.
//! - `presentation`: info panel, settings and other overlays.

pub mod city;
pub mod controls;
pub mod presentation;

pub use city::CityPlugin;
pub use controls::InputPlugin;
pub use presentation::UiPlugin;
