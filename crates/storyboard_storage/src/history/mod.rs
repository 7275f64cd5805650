//! History store backends.

mod filesystem;
mod memory;

pub use filesystem::FileSystemHistoryStore;
pub use memory::InMemoryHistoryStore;

use storyboard_core::Scene;
use storyboard_interface::HistoryEntry;

/// Number of storyboards kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Puts a new entry at the front and drops whatever exceeds `capacity`.
fn prepend_bounded(
    entries: &mut Vec<HistoryEntry>,
    source_script: &str,
    scenes: &[Scene],
    capacity: usize,
) -> HistoryEntry {
    let entry = HistoryEntry::now(source_script.to_string(), scenes.to_vec());
    entries.insert(0, entry.clone());
    entries.truncate(capacity);
    entry
}
