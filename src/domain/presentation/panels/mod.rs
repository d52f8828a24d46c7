mod banners;
mod diagnostics_panel;
mod help_panel;
mod info_panel;
mod landmarks;
mod screens;
mod settings_panel;

pub use banners::{show_hint_banner, show_welcome_overlay};
pub use diagnostics_panel::show_diagnostics_panel;
pub use help_panel::show_help_panel;
pub use info_panel::show_info_panel;
pub use landmarks::show_landmark_labels;
pub use screens::{show_error_screen, show_loading_screen};
pub use settings_panel::show_settings_panel;
