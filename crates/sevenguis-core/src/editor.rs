//! Circle drawer controller.
//!
//! Clicking empty space creates a circle and selects it, clicking a circle
//! toggles its selection, and the radius of the selected circle can be
//! edited. Creation and radius edits are undoable; selection changes are not.

use crate::circle::{Circle, CircleId, DEFAULT_RADIUS};
use crate::history::{PushKind, UndoLog};
use crate::input::{ClickDebouncer, Duration, Instant, CLICK_DEBOUNCE_MS};
use crate::observable::Observable;
use crate::selection::SelectionState;
use crate::store::{CircleSet, CircleStore};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Radius shown by the radius control before anything is selected.
pub const INITIAL_RADIUS: f64 = 20.0;

/// A replayable change to the circle store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum EditAction {
    SetRadius { id: CircleId, radius: f64 },
    RemoveCircle { id: CircleId },
    AddCircle { id: CircleId, center: Point },
}

/// Key under which edits coalesce in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKey {
    /// All radius edits within one selection session.
    Radius(u64),
    /// Creation of one circle.
    Circle(CircleId),
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKey::Radius(session) => write!(f, "radius-{}", session),
            ActionKey::Circle(id) => write!(f, "circle-{}", id),
        }
    }
}

/// History type used by the editor.
pub type EditHistory = UndoLog<ActionKey, EditAction>;

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Too soon after the previous accepted click; nothing changed.
    Debounced,
    /// Empty space was clicked and a new circle was created and selected.
    Created(CircleId),
    /// An unselected circle was clicked and is now selected.
    Selected(CircleId),
    /// The selected circle was clicked and is no longer selected.
    Deselected(CircleId),
}

/// Editor configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Radius of newly created circles.
    pub default_radius: f64,
    /// Value of the radius control before the first selection.
    pub initial_radius: f64,
    /// Minimum gap between accepted clicks.
    pub debounce: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_radius: DEFAULT_RADIUS,
            initial_radius: INITIAL_RADIUS,
            debounce: Duration::from_millis(CLICK_DEBOUNCE_MS),
        }
    }
}

/// Controller owning the circles, the undo history and the selection.
///
/// The change hook passed at construction fires after every state change;
/// it takes no arguments and the caller re-reads [`circles`](Self::circles)
/// once the triggering call has returned.
#[derive(Debug)]
pub struct CircleEditor {
    store: CircleStore,
    history: EditHistory,
    selected: Observable<Option<CircleId>>,
    /// Live value of the radius control.
    radius: Observable<f64>,
    /// Bumped on every selection so radius edits coalesce per session.
    session: u64,
    debouncer: ClickDebouncer,
}

impl CircleEditor {
    /// Create an editor with the default configuration.
    pub fn new(on_change: impl Fn() + 'static) -> Self {
        Self::with_config(EditorConfig::default(), on_change)
    }

    /// Create an editor with a custom configuration.
    pub fn with_config(config: EditorConfig, on_change: impl Fn() + 'static) -> Self {
        let hook: Rc<dyn Fn()> = Rc::new(on_change);

        let mut store = CircleStore::with_default_radius(config.default_radius);
        let mut history = EditHistory::new();
        let mut selected: Observable<Option<CircleId>> = Observable::new(None);
        let mut radius: Observable<f64> = Observable::new(config.initial_radius);

        let notify = Rc::clone(&hook);
        store.subscribe(move |_| notify());
        let notify = Rc::clone(&hook);
        history.subscribe(move |_| notify());
        let notify = Rc::clone(&hook);
        selected.subscribe(move |_| notify());
        radius.subscribe(move |_| hook());

        Self {
            store,
            history,
            selected,
            radius,
            session: 0,
            debouncer: ClickDebouncer::with_interval(config.debounce),
        }
    }

    /// Handle a click at `point` using the current time.
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        self.click_at(point, Instant::now())
    }

    /// Handle a click at `point` that happened at `now`.
    pub fn click_at(&mut self, point: Point, now: Instant) -> ClickOutcome {
        if !self.debouncer.accept(now) {
            log::trace!("click at ({}, {}) debounced", point.x, point.y);
            return ClickOutcome::Debounced;
        }

        let hit = self.store.hit_test(point).map(Circle::id);
        match hit {
            None => {
                let id = self.store.add(point).id();
                self.select(id);
                self.history.push(
                    ActionKey::Circle(id),
                    EditAction::RemoveCircle { id },
                    EditAction::AddCircle { id, center: point },
                );
                log::debug!("created circle {} at ({}, {})", id, point.x, point.y);
                ClickOutcome::Created(id)
            }
            Some(id) if self.selected() == Some(id) => {
                self.deselect();
                ClickOutcome::Deselected(id)
            }
            Some(id) => {
                self.select(id);
                ClickOutcome::Selected(id)
            }
        }
    }

    /// Select a circle, deselecting all others.
    /// Returns false, changing nothing, if the id is unknown.
    pub fn select(&mut self, id: CircleId) -> bool {
        let Some(radius) = self.store.find(id).map(|circle| circle.radius) else {
            return false;
        };

        self.store.modify_each(|circle| circle.selected = circle.id() == id);
        self.session += 1;
        self.selected.set(Some(id));
        self.radius.set(radius);
        log::debug!("selected circle {} (session {})", id, self.session);
        true
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.store.modify_each(|circle| circle.selected = false);
        self.selected.set(None);
    }

    /// Change the radius of the selected circle.
    ///
    /// Successive edits while the same circle stays selected collapse into a
    /// single history entry. Returns false if nothing is selected.
    pub fn set_selected_radius(&mut self, radius: f64) -> bool {
        let Some(id) = self.selected() else {
            return false;
        };

        self.radius.set(radius);
        let change = self.store.set_radius(id, radius);
        let Some(old) = change.old else {
            log::warn!("selected circle {} is missing from the store", id);
            return false;
        };

        let kind = self.history.push(
            ActionKey::Radius(self.session),
            EditAction::SetRadius { id, radius: old },
            EditAction::SetRadius { id, radius: change.new },
        );
        if kind == PushKind::Appended {
            log::debug!("started radius edit of circle {} at {}", id, old);
        }
        true
    }

    /// Undo the last change. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let store = &mut self.store;
        let undone = self.history.undo(|action| apply(store, action));
        if undone {
            self.sync_selection();
        }
        undone
    }

    /// Redo the last undone change. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let store = &mut self.store;
        let redone = self.history.redo(|action| apply(store, action));
        if redone {
            self.sync_selection();
        }
        redone
    }

    /// Keep the selection and radius control consistent with the store after
    /// history replay.
    fn sync_selection(&mut self) {
        let Some(id) = self.selected() else {
            return;
        };
        match self.store.find(id).map(|circle| circle.radius) {
            None => self.selected.set(None),
            Some(radius) if radius != *self.radius.get() => self.radius.set(radius),
            Some(_) => {}
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Get the current circles.
    pub fn circles(&self) -> &CircleSet {
        self.store.circles()
    }

    /// Get the selected circle id.
    pub fn selected(&self) -> Option<CircleId> {
        *self.selected.get()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selected().into()
    }

    /// Value shown by the radius control.
    pub fn current_radius(&self) -> f64 {
        *self.radius.get()
    }

    /// Number of selections made so far.
    pub fn selection_session(&self) -> u64 {
        self.session
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn store(&self) -> &CircleStore {
        &self.store
    }
}

/// Replay a recorded action onto the store.
fn apply(store: &mut CircleStore, action: &EditAction) {
    match *action {
        EditAction::SetRadius { id, radius } => {
            store.set_radius(id, radius);
        }
        EditAction::RemoveCircle { id } => {
            store.remove(id);
        }
        EditAction::AddCircle { id, center } => {
            store.add_with_id(center, id);
        }
    }
}
