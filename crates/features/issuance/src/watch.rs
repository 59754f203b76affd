use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Detects edits of input files by modification time.
///
/// A file that cannot be stat'ed counts as having no timestamp, so deleting
/// or recreating a watched file is a change as well.
#[derive(Debug, Clone)]
pub struct InputWatcher {
    paths: Vec<PathBuf>,
    seen: Snapshot,
}

/// Modification times of the watched files, in watch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Vec<Option<SystemTime>>);

impl InputWatcher {
    /// Starts watching `paths`, taking their current state as seen.
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let paths: Vec<_> = paths.into_iter().collect();
        let seen = snapshot(&paths);
        Self { paths, seen }
    }

    /// The current state when it differs from the last committed one.
    ///
    /// Take it before reading the files and [`InputWatcher::commit`] it once
    /// they were applied; an edit landing in between is reported again on
    /// the next poll.
    #[must_use]
    pub fn poll(&self) -> Option<Snapshot> {
        let current = snapshot(&self.paths);
        (current != self.seen).then_some(current)
    }

    pub fn commit(&mut self, snapshot: Snapshot) {
        self.seen = snapshot;
    }
}

fn snapshot(paths: &[PathBuf]) -> Snapshot {
    Snapshot(paths.iter().map(|path| modified(path)).collect())
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
