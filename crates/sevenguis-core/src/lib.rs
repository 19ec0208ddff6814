//! SevenGUIs Core Library
//!
//! Platform-agnostic state for the SevenGUIs demos: the circle drawer's
//! observable store, undo history and controller, plus headless
//! view-models of the smaller pages.

pub mod circle;
pub mod editor;
pub mod history;
pub mod input;
pub mod observable;
pub mod pages;
pub mod selection;
pub mod store;

pub use circle::{Circle, CircleId, DEFAULT_RADIUS};
pub use editor::{ActionKey, CircleEditor, ClickOutcome, EditAction, EditHistory, EditorConfig};
pub use history::{LogEntry, LogEvent, PushKind, UndoLog};
pub use input::{ClickDebouncer, CLICK_DEBOUNCE_MS};
pub use observable::Observable;
pub use selection::SelectionState;
pub use store::{CircleSet, CircleStore, RadiusChange};
