//! Selection state machine behind the info panel.
//!
//! `selected` and `panel_open` are kept apart so the panel can slide out
//! still showing its last content. A close issues a [`ClearHandle`]; only the
//! timer carrying the currently pending handle may clear the selection, which
//! lets a reopen invalidate an in-flight clear without touching the timer.

use super::registry::{BuildingId, BuildingRecord, BuildingRegistry};

/// Identifies one scheduled clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClearHandle(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    Select(BuildingId),
    Close,
    ClearElapsed(ClearHandle),
}

/// Observed phase, derived from [`SelectionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase<'a> {
    Idle,
    Open(&'a BuildingId),
    Closing(&'a BuildingId),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<BuildingId>,
    panel_open: bool,
    pending_clear: Option<ClearHandle>,
    next_handle: u64,
}

impl SelectionState {
    pub fn selected(&self) -> Option<&BuildingId> {
        self.selected.as_ref()
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn pending_clear(&self) -> Option<ClearHandle> {
        self.pending_clear
    }

    pub fn phase(&self) -> Phase<'_> {
        match (&self.selected, self.panel_open) {
            (Some(id), true) => Phase::Open(id),
            (Some(id), false) => Phase::Closing(id),
            (None, _) => Phase::Idle,
        }
    }
}

/// Applies one event. Never fails; events that make no sense in the current
/// phase leave the state untouched.
pub fn reduce(state: &SelectionState, event: SelectionEvent) -> SelectionState {
    let mut next = state.clone();
    match event {
        SelectionEvent::Select(id) => {
            next.selected = Some(id);
            next.panel_open = true;
            next.pending_clear = None;
        }
        SelectionEvent::Close => {
            if let Phase::Open(_) = state.phase() {
                let handle = ClearHandle(state.next_handle);
                next.next_handle = state.next_handle.wrapping_add(1);
                next.panel_open = false;
                next.pending_clear = Some(handle);
            }
        }
        SelectionEvent::ClearElapsed(handle) => {
            if state.pending_clear == Some(handle) {
                next.selected = None;
                next.panel_open = false;
                next.pending_clear = None;
            }
        }
    }
    next
}

/// What the info panel draws. `None` renders nothing.
pub struct PanelContent<'a> {
    pub record: &'a BuildingRecord,
    pub visible: bool,
}

pub fn panel_content<'a>(
    state: &SelectionState,
    registry: &'a BuildingRegistry,
) -> Option<PanelContent<'a>> {
    let record = registry.lookup(state.selected()?.as_str())?;
    Some(PanelContent {
        record,
        visible: state.is_panel_open(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(id: &str) -> SelectionEvent {
        SelectionEvent::Select(BuildingId::from(id))
    }

    fn run(events: impl IntoIterator<Item = SelectionEvent>) -> SelectionState {
        events
            .into_iter()
            .fold(SelectionState::default(), |s, e| reduce(&s, e))
    }

    #[test]
    fn starts_idle() {
        let state = SelectionState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_panel_open());
        assert!(state.pending_clear().is_none());
    }

    #[test]
    fn click_opens_panel() {
        let state = run([select("AWS")]);
        assert_eq!(state.phase(), Phase::Open(&"AWS".into()));
    }

    #[test]
    fn retarget_replaces_content_without_closing() {
        let a = run([select("AWS")]);
        let b = reduce(&a, select("Kubernetes"));
        assert_eq!(b.phase(), Phase::Open(&"Kubernetes".into()));
        assert!(b.pending_clear().is_none());
    }

    #[test]
    fn close_keeps_stale_id_until_timeout() {
        let state = run([select("AWS"), SelectionEvent::Close]);
        assert_eq!(state.phase(), Phase::Closing(&"AWS".into()));
        let handle = state.pending_clear().expect("clear scheduled");

        let idle = reduce(&state, SelectionEvent::ClearElapsed(handle));
        assert_eq!(idle.phase(), Phase::Idle);
        assert!(idle.pending_clear().is_none());
    }

    #[test]
    fn reopen_cancels_pending_clear() {
        let closing = run([select("AWS"), SelectionEvent::Close]);
        let stale = closing.pending_clear().unwrap();

        let reopened = reduce(&closing, select("KT Cloud"));
        assert_eq!(reopened.phase(), Phase::Open(&"KT Cloud".into()));
        assert!(reopened.selected().is_some());

        let after = reduce(&reopened, SelectionEvent::ClearElapsed(stale));
        assert_eq!(after, reopened);
    }

    #[test]
    fn clear_fires_once() {
        let closing = run([select("Main"), SelectionEvent::Close]);
        let handle = closing.pending_clear().unwrap();
        let idle = reduce(&closing, SelectionEvent::ClearElapsed(handle));
        let again = reduce(&idle, SelectionEvent::ClearElapsed(handle));
        assert_eq!(again, idle);
    }

    #[test]
    fn second_close_does_not_reschedule() {
        let closing = run([select("Main"), SelectionEvent::Close]);
        let twice = reduce(&closing, SelectionEvent::Close);
        assert_eq!(twice, closing);
    }

    #[test]
    fn close_while_idle_is_noop() {
        let state = run([SelectionEvent::Close]);
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn old_handle_cannot_clear_a_later_close() {
        let first = run([select("AWS"), SelectionEvent::Close]);
        let old = first.pending_clear().unwrap();
        let second = reduce(&reduce(&first, select("AWS")), SelectionEvent::Close);
        let new = second.pending_clear().unwrap();
        assert_ne!(old, new);

        let still_closing = reduce(&second, SelectionEvent::ClearElapsed(old));
        assert_eq!(still_closing.phase(), Phase::Closing(&"AWS".into()));
        let idle = reduce(&still_closing, SelectionEvent::ClearElapsed(new));
        assert_eq!(idle.phase(), Phase::Idle);
    }

    #[test]
    fn panel_shows_selected_record() {
        let registry = BuildingRegistry::embedded().unwrap();
        let state = run([select("AWS")]);
        let content = panel_content(&state, &registry).expect("content");
        assert_eq!(content.record.title, "AWS Cloud Solutions");
        assert!(content.visible);
    }

    #[test]
    fn closing_panel_keeps_last_content() {
        let registry = BuildingRegistry::embedded().unwrap();
        let state = run([select("Kubernetes"), SelectionEvent::Close]);
        let content = panel_content(&state, &registry).expect("content");
        assert_eq!(content.record.id.as_str(), "Kubernetes");
        assert!(!content.visible);
    }

    #[test]
    fn unknown_selection_renders_nothing() {
        let registry = BuildingRegistry::embedded().unwrap();
        let state = run([select("Azure")]);
        assert!(panel_content(&state, &registry).is_none());
        assert!(panel_content(&SelectionState::default(), &registry).is_none());
    }
}
