//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::filter::FilterHandle;
use crate::config::loader::load_config;

/// Watches a config file and applies its filter fields on change.
///
/// Only `min_severity` and `conditional_threshold` are hot-swapped; the
/// sink stays as built. A file that fails to load leaves the current filter
/// in place.
pub struct ConfigWatcher {
    path: PathBuf,
    filter: FilterHandle,
}

impl ConfigWatcher {
    pub fn new(path: &Path, filter: FilterHandle) -> Self {
        Self {
            path: path.to_path_buf(),
            filter,
        }
    }

    /// Start watching. The returned watcher must be kept alive for the
    /// watch to stay active.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let filter = self.filter.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        match load_config(&path) {
                            Ok(new_config) => filter.apply(&new_config),
                            Err(e) => {
                                // Reporting through the logger itself would
                                // recurse; stderr is the escape hatch.
                                eprintln!(
                                    "fmtlog: failed to reload {}: {}. Keeping current filter.",
                                    path.display(),
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => eprintln!("fmtlog: watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;
        Ok(watcher)
    }
}
