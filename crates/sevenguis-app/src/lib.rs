//! SevenGUIs Application
//!
//! Drives the circle drawer from a scripted event stream, standing in for
//! the windowing and rendering layers.

mod app;
mod config;
mod error;
mod script;
mod usage;

pub use app::{App, Args, Snapshot};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use script::{Script, ScriptEvent};
pub use usage::{print_usage, ScriptCommand, SCRIPT_COMMANDS};
