//! Script command reference.

/// A script event type and how to write it.
#[derive(Debug, Clone)]
pub struct ScriptCommand {
    pub example: &'static str,
    pub description: &'static str,
}

impl ScriptCommand {
    pub const fn new(example: &'static str, description: &'static str) -> Self {
        Self {
            example,
            description,
        }
    }
}

/// Every event type a script may contain.
pub const SCRIPT_COMMANDS: &[ScriptCommand] = &[
    ScriptCommand::new(
        r#"{"type":"click","x":50,"y":50,"at_ms":0}"#,
        "Click; creates, selects or deselects a circle",
    ),
    ScriptCommand::new(
        r#"{"type":"radius","value":30}"#,
        "Set the radius of the selected circle",
    ),
    ScriptCommand::new(r#"{"type":"undo"}"#, "Undo the last change"),
    ScriptCommand::new(r#"{"type":"redo"}"#, "Redo the last undone change"),
    ScriptCommand::new(r#"{"type":"deselect"}"#, "Clear the selection"),
];

/// Print usage to stdout.
pub fn print_usage() {
    println!("Usage: sevenguis <script.json> [--config <config.json>]");
    println!("\n=== Script events ===");
    for command in SCRIPT_COMMANDS {
        println!("  {:44} {}", command.example, command.description);
    }
    println!();
}
