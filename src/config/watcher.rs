//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::load_config;
use crate::config::schema::SteerConfig;
use crate::vip::VipTable;

/// Watches a configuration file and re-applies it to a [`VipTable`].
///
/// Only configs that parse and validate touch the table; a failed reload
/// keeps the previously applied state. The last applied config stays
/// readable through the cell returned by [`current`](Self::current).
pub struct ConfigWatcher {
    path: PathBuf,
    table: Arc<VipTable>,
    current: Arc<ArcSwap<SteerConfig>>,
}

impl ConfigWatcher {
    /// Create a watcher over `path`, applying `initial` to the table
    /// immediately.
    pub fn new(path: &Path, table: Arc<VipTable>, initial: SteerConfig) -> Self {
        table.apply_config(&initial);
        Self {
            path: path.to_path_buf(),
            table,
            current: Arc::new(ArcSwap::from_pointee(initial)),
        }
    }

    /// Handle to the most recently applied configuration.
    pub fn current(&self) -> Arc<ArcSwap<SteerConfig>> {
        Arc::clone(&self.current)
    }

    /// Start watching. Reloads run on the watch thread; the returned watcher
    /// must be kept alive for events to keep flowing.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let ConfigWatcher {
            path,
            table,
            current,
        } = self;
        let watch_path = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        match load_config(&path) {
                            Ok(new_config) => {
                                table.apply_config(&new_config);
                                current.store(Arc::new(new_config));
                                tracing::info!(vips = table.len(), "Configuration re-applied");
                            }
                            Err(e) => {
                                tracing::error!(
                                    "Failed to reload config: {}. Keeping current configuration.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&watch_path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?watch_path, "Config watcher started");
        Ok(watcher)
    }
}
