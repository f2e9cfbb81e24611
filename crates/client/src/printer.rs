//! Prints every battle event as one JSON line on stdout.

use std::io::Write;

use battle_core::Battle;
use battle_runtime::{Event, EventObserver};

pub struct JsonLinePrinter;

impl EventObserver for JsonLinePrinter {
    fn name(&self) -> &'static str {
        "json_line_printer"
    }

    fn on_event(&self, event: &Event, _battle: &Battle) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(target: "sim::printer", error = %e, "failed to serialize event");
                return;
            }
        };

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            tracing::warn!(target: "sim::printer", error = %e, "failed to write event");
        }
    }
}
