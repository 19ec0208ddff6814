//! Script runner.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::script::{Script, ScriptEvent};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use sevenguis_core::input::{Duration, Instant};
use sevenguis_core::{Circle, CircleEditor, CircleId};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

/// Command line arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    /// Script to replay.
    pub script: Option<PathBuf>,
    /// Optional config file.
    pub config: Option<PathBuf>,
    /// Print usage and exit.
    pub help: bool,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> AppResult<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-c" | "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage(format!("{} expects a path", arg)))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => {
                    return Err(AppError::Usage(format!("unknown option {}", flag)));
                }
                path => {
                    if parsed.script.is_some() {
                        return Err(AppError::Usage("only one script may be given".into()));
                    }
                    parsed.script = Some(PathBuf::from(path));
                }
            }
        }
        if parsed.script.is_none() && !parsed.help {
            return Err(AppError::Usage("missing script path".into()));
        }
        Ok(parsed)
    }
}

/// Editor state after a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Circles in insertion order.
    pub circles: Vec<Circle>,
    pub selected: Option<CircleId>,
    /// Value of the radius control.
    pub radius: f64,
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_len: usize,
    /// Number of change notifications, i.e. redraw requests.
    pub redraws: usize,
}

impl Snapshot {
    fn capture(editor: &CircleEditor, redraws: usize) -> Self {
        Self {
            circles: editor.circles().iter().cloned().collect(),
            selected: editor.selected(),
            radius: editor.current_radius(),
            can_undo: editor.can_undo(),
            can_redo: editor.can_redo(),
            history_len: editor.history().len(),
            redraws,
        }
    }

    /// Serialize the snapshot.
    pub fn to_json(&self, pretty: bool) -> AppResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Replays scripts through a fresh circle editor.
#[derive(Debug, Clone, Default)]
pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run every event of `script` and report the final state.
    pub fn run(&self, script: &Script) -> Snapshot {
        let redraws = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&redraws);
        let mut editor = CircleEditor::with_config(self.config.editor_config(), move || {
            counter.set(counter.get() + 1)
        });

        // Clicks without a timestamp are spaced one debounce interval apart.
        let spacing = Duration::from_millis(self.config.debounce_ms);
        let start = Instant::now();
        let mut clock = Duration::ZERO;

        log::info!("Replaying {} events", script.len());
        for (index, event) in script.events.iter().enumerate() {
            match *event {
                ScriptEvent::Click { x, y, at_ms } => {
                    clock = match at_ms {
                        Some(ms) => Duration::from_millis(ms),
                        None => clock + spacing,
                    };
                    let outcome = editor.click_at(Point::new(x, y), start + clock);
                    log::debug!("#{} click ({}, {}) -> {:?}", index, x, y, outcome);
                }
                ScriptEvent::Radius { value } => {
                    if !editor.set_selected_radius(value) {
                        log::warn!("#{} radius {} ignored: nothing selected", index, value);
                    }
                }
                ScriptEvent::Undo => {
                    if !editor.undo() {
                        log::info!("#{} nothing to undo", index);
                    }
                }
                ScriptEvent::Redo => {
                    if !editor.redo() {
                        log::info!("#{} nothing to redo", index);
                    }
                }
                ScriptEvent::Deselect => editor.deselect(),
            }
        }

        Snapshot::capture(&editor, redraws.get())
    }
}
