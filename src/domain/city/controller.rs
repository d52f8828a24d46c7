use std::time::Duration;

use bevy::prelude::*;

use super::registry::{BuildingId, BuildingRegistry};
use super::selection::{reduce, ClearHandle, SelectionEvent, SelectionState};
use super::PortfolioSettings;

/// A building was activated by a pointer.
#[derive(Event, Clone, Debug)]
pub struct BuildingSelected(pub BuildingId);

/// Close button, backdrop click and Escape all send this.
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct ClosePanel;

#[derive(Resource, Default, Deref)]
pub struct Selection(SelectionState);

impl Selection {
    fn apply(&mut self, event: SelectionEvent) {
        self.0 = reduce(&self.0, event);
    }
}

/// The one outstanding clear, if any. Replaced whenever the reducer issues a
/// new handle and dropped when the handle is cancelled.
#[derive(Resource, Default)]
pub struct ClearTimer {
    pending: Option<(ClearHandle, Timer)>,
}

impl ClearTimer {
    pub fn handle(&self) -> Option<ClearHandle> {
        self.pending.as_ref().map(|(h, _)| *h)
    }
}

pub struct SelectionPlugin;
impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .init_resource::<ClearTimer>()
            .add_event::<BuildingSelected>()
            .add_event::<ClosePanel>()
            .add_systems(Update, drive_selection);
    }
}

pub fn drive_selection(
    time: Res<Time>,
    registry: Option<Res<BuildingRegistry>>,
    settings: Res<PortfolioSettings>,
    mut selection: ResMut<Selection>,
    mut clear_timer: ResMut<ClearTimer>,
    mut ev_select: EventReader<BuildingSelected>,
    mut ev_close: EventReader<ClosePanel>,
) {
    let Some(registry) = registry else {
        ev_select.clear();
        ev_close.clear();
        return;
    };

    // Closes first so a click landing in the same frame reopens.
    if ev_close.read().count() > 0 {
        selection.apply(SelectionEvent::Close);
        debug!("Info panel closing");
    }

    for BuildingSelected(id) in ev_select.read() {
        if !registry.contains(id.as_str()) {
            warn!("Ignoring click on unknown building {:?}", id.as_str());
            continue;
        }
        selection.apply(SelectionEvent::Select(id.clone()));
        info!("Info panel open: {}", id);
    }

    let started = sync_timer(&selection, &mut clear_timer, settings.close_delay_secs);
    if started {
        return;
    }

    let mut elapsed = None;
    if let Some((handle, timer)) = clear_timer.pending.as_mut() {
        if timer.tick(time.delta()).just_finished() {
            elapsed = Some(*handle);
        }
    }
    if let Some(handle) = elapsed {
        clear_timer.pending = None;
        selection.apply(SelectionEvent::ClearElapsed(handle));
        debug!("Info panel cleared");
    }
}

/// Returns true when a fresh timer was started this frame.
fn sync_timer(selection: &Selection, clear_timer: &mut ClearTimer, delay_secs: f32) -> bool {
    let wanted = selection.pending_clear();
    if wanted == clear_timer.handle() {
        return false;
    }
    clear_timer.pending = wanted.map(|handle| {
        let delay = Duration::from_secs_f32(delay_secs.max(0.0));
        (handle, Timer::new(delay, TimerMode::Once))
    });
    wanted.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::city::selection::Phase;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .insert_resource(PortfolioSettings::default())
            .insert_resource(BuildingRegistry::embedded().unwrap())
            .add_plugins(SelectionPlugin);
        app
    }

    fn step(app: &mut App, ms: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(ms));
        app.update();
    }

    fn click(app: &mut App, id: &str) {
        app.world_mut().send_event(BuildingSelected(id.into()));
    }

    fn close(app: &mut App) {
        app.world_mut().send_event(ClosePanel);
    }

    fn state(app: &App) -> SelectionState {
        app.world().resource::<Selection>().0.clone()
    }

    #[test]
    fn click_opens_and_panel_shows_title() {
        let mut app = test_app();
        click(&mut app, "AWS");
        step(&mut app, 16);

        let s = state(&app);
        assert_eq!(s.phase(), Phase::Open(&"AWS".into()));
        let registry = app.world().resource::<BuildingRegistry>();
        let title = &registry.lookup(s.selected().unwrap().as_str()).unwrap().title;
        assert_eq!(title, "AWS Cloud Solutions");
    }

    #[test]
    fn unknown_building_is_ignored() {
        let mut app = test_app();
        click(&mut app, "Azure");
        step(&mut app, 16);
        assert_eq!(state(&app).phase(), Phase::Idle);
    }

    #[test]
    fn close_then_timeout_reaches_idle_once() {
        let mut app = test_app();
        click(&mut app, "Main");
        step(&mut app, 16);
        close(&mut app);
        step(&mut app, 16);
        assert_eq!(state(&app).phase(), Phase::Closing(&"Main".into()));
        assert!(app.world().resource::<ClearTimer>().handle().is_some());

        step(&mut app, 100);
        assert_eq!(state(&app).phase(), Phase::Closing(&"Main".into()));

        step(&mut app, 250);
        assert_eq!(state(&app).phase(), Phase::Idle);
        assert!(app.world().resource::<ClearTimer>().handle().is_none());

        let idle = state(&app);
        step(&mut app, 500);
        assert_eq!(state(&app), idle);
    }

    #[test]
    fn reopen_before_timeout_cancels_clear() {
        let mut app = test_app();
        click(&mut app, "AWS");
        step(&mut app, 16);
        close(&mut app);
        step(&mut app, 16);
        step(&mut app, 100);

        click(&mut app, "Kubernetes");
        step(&mut app, 16);
        assert_eq!(state(&app).phase(), Phase::Open(&"Kubernetes".into()));
        assert!(app.world().resource::<ClearTimer>().handle().is_none());

        for _ in 0..10 {
            step(&mut app, 100);
            assert_eq!(state(&app).phase(), Phase::Open(&"Kubernetes".into()));
        }
    }

    #[test]
    fn retarget_while_open_skips_closing() {
        let mut app = test_app();
        click(&mut app, "AWS");
        step(&mut app, 16);
        click(&mut app, "KT Cloud");
        step(&mut app, 16);
        assert_eq!(state(&app).phase(), Phase::Open(&"KT Cloud".into()));
        assert!(app.world().resource::<ClearTimer>().handle().is_none());
    }

    #[test]
    fn close_and_click_in_same_frame_reopens() {
        let mut app = test_app();
        click(&mut app, "AWS");
        step(&mut app, 16);
        close(&mut app);
        click(&mut app, "NAVER Cloud");
        step(&mut app, 16);
        assert_eq!(state(&app).phase(), Phase::Open(&"NAVER Cloud".into()));
    }

    #[test]
    fn input_is_dropped_without_registry() {
        let mut app = test_app();
        app.world_mut().remove_resource::<BuildingRegistry>();
        click(&mut app, "AWS");
        step(&mut app, 16);
        assert_eq!(state(&app).phase(), Phase::Idle);
    }
}
