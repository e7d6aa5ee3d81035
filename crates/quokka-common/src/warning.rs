//! Engine warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Conversion and parsing run once per animation frame in a typical embedding,
//! so a malformed value would otherwise repeat its warning at frame rate.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about a degraded input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Units", "malformed numeric '3.5.2' in '3.5.2em'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED.lock().unwrap().insert(key);

    if should_print {
        eprintln!("{YELLOW}[Quokka {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when reloading the embedding document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}
