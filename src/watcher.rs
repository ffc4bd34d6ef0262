use crate::entry::DirEntry;
use crate::utils::file::is_hidden_name;
use anyhow::Result;
use log::{debug, error, info};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Duration;

pub struct DirWatcher {
    watch_path: PathBuf,
}

impl DirWatcher {
    pub fn new(watch_path: PathBuf) -> Self {
        Self { watch_path }
    }

    /// Forwards every new non-hidden entry of the watched directory to `tx`.
    /// Watching stops when the returned guard is dropped.
    pub fn start(self, tx: Sender<DirEntry>) -> Result<impl Drop> {
        info!("Starting directory watcher on: {:?}", self.watch_path);

        let mut debouncer = new_debouncer(
            Duration::from_secs(2),
            None,
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    for event in events {
                        Self::handle_event(&event.event, &tx);
                    }
                }
                Err(errors) => {
                    for error in errors {
                        error!("Watch error: {:?}", error);
                    }
                }
            },
        )?;

        debouncer
            .watcher()
            .watch(&self.watch_path, RecursiveMode::NonRecursive)?;

        info!("Directory watcher initialized successfully");

        Ok(debouncer)
    }

    fn handle_event(event: &Event, tx: &Sender<DirEntry>) {
        if !matches!(event.kind, EventKind::Create(_)) {
            return;
        }

        for path in &event.paths {
            if let Some(entry) = Self::visible_entry(path) {
                info!("New entry detected: {:?}", path);
                if let Err(e) = tx.send(entry) {
                    error!("Failed to send entry: {}", e);
                }
            }
        }
    }

    fn visible_entry(path: &Path) -> Option<DirEntry> {
        let name = path.file_name()?.to_string_lossy();
        if is_hidden_name(&name) {
            debug!("Ignoring hidden entry: {:?}", path);
            return None;
        }

        match DirEntry::from_path(path) {
            Ok(entry) => Some(entry),
            Err(e) => {
                // Already removed again before the debounce window closed
                debug!("Skipping {:?}: {}", path, e);
                None
            }
        }
    }
}
