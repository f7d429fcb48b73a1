/// User interface and status output utilities
///
/// This module handles:
/// - Serialized console output
/// - Colored terminal text
/// - The end-of-run summary (human or JSON)
use crate::types::RunRecord;
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

/// Execute a function with exclusive access to console output
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stdout() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
            return true;
        }

        false
    }
}

/// Print a status message with "pre-commit: " prefix
pub fn status(s: &str) {
    status_lock(|| {
        println!("pre-commit: {}", s);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    status_lock(|| {
        print_color("error", term::color::BRIGHT_RED);
        println!(": {}", msg);
    });
}

/// One-line human summary of a finished run
pub fn summary_line(record: &RunRecord) -> String {
    if record.is_empty() {
        return "no steps configured".to_string();
    }
    let names: Vec<&str> = record.steps().iter().map(|s| s.name()).collect();
    format!("{} step(s) passed ({})", record.len(), names.join(", "))
}

/// Print the end-of-run summary, as JSON when requested
pub fn print_summary(record: &RunRecord, json: bool) {
    if json {
        match serde_json::to_string_pretty(record) {
            Ok(text) => status_lock(|| println!("{}", text)),
            Err(e) => print_error(&format!("Failed to serialize results: {}", e)),
        }
    } else {
        status(&summary_line(record));
    }
}
