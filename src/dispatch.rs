//! Executes the default action bound to a result.

use crate::host::{Host, IndexingService, Shell};
use crate::keyword::build_requery_text;
use crate::model::{ActionBinding, ActionStep, Modifiers, ResultRecord};
use crate::notifier::IndexingUsageNotifier;
use crate::paths::parent_of;
use crate::settings::ExplorerSettings;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Picks the concrete step for one invocation of `binding`.
///
/// Folders are opened when Ctrl is held or no keyword toggle is enabled, and
/// re-queried otherwise. Files open elevated on Ctrl+Shift when they exist,
/// fall back to a plain open when they do not, and reveal the parent folder
/// on Ctrl alone.
pub fn resolve_step(
    binding: &ActionBinding,
    modifiers: Modifiers,
    settings: &ExplorerSettings,
) -> ActionStep {
    match binding {
        ActionBinding::Folder { path, kind } => {
            if modifiers.secondary || !settings.any_keyword_enabled() {
                ActionStep::OpenDirectory { path: path.clone() }
            } else {
                ActionStep::Requery {
                    text: build_requery_text(path, *kind, settings),
                }
            }
        }
        ActionBinding::OpenFolder { path } => ActionStep::OpenDirectory { path: path.clone() },
        ActionBinding::File { path } => {
            if modifiers.secondary && modifiers.tertiary {
                if Path::new(path).is_file() {
                    let working_dir = settings
                        .use_location_as_working_dir
                        .then(|| parent_of(path));
                    ActionStep::OpenElevated {
                        path: path.clone(),
                        working_dir,
                    }
                } else {
                    ActionStep::OpenPath { path: path.clone() }
                }
            } else if modifiers.secondary {
                ActionStep::OpenParentAndSelect { path: path.clone() }
            } else {
                ActionStep::OpenPath { path: path.clone() }
            }
        }
    }
}

fn failure_title(path: &str) -> String {
    format!("Could not start {path}")
}

pub struct ActionDispatcher {
    host: Arc<dyn Host>,
    shell: Arc<dyn Shell>,
    notifier: IndexingUsageNotifier,
    background: Mutex<Vec<JoinHandle<()>>>,
}

impl ActionDispatcher {
    pub fn new(
        host: Arc<dyn Host>,
        shell: Arc<dyn Shell>,
        indexing: Arc<dyn IndexingService>,
    ) -> Self {
        Self {
            host,
            shell,
            notifier: IndexingUsageNotifier::new(indexing),
            background: Mutex::new(Vec::new()),
        }
    }

    /// Blocks until detached launches and notifications have finished. Only
    /// short-lived front ends that exit right after an invocation need this.
    pub fn join_background(&self) {
        let handles = match self.background.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => return,
        };
        for handle in handles {
            let _ = handle.join();
        }
    }

    fn track(&self, handle: JoinHandle<()>) {
        if let Ok(mut guard) = self.background.lock() {
            guard.retain(|h| !h.is_finished());
            guard.push(handle);
        }
    }

    /// Runs the action of `record` and returns the signal for the host. Launch
    /// failures are shown to the user and do not change the returned value.
    pub fn execute(
        &self,
        record: &ResultRecord,
        modifiers: Modifiers,
        settings: &ExplorerSettings,
    ) -> bool {
        let step = resolve_step(&record.action, modifiers, settings);
        debug!(?step, ?modifiers, "dispatching result action");
        let keep_open = step.keep_open();
        self.run(step, record.context.indexed, settings);
        keep_open
    }

    fn run(&self, step: ActionStep, indexed: bool, settings: &ExplorerSettings) {
        if !matches!(step, ActionStep::Requery { .. }) {
            if let Some(handle) = self.notifier.notify_used(step.target(), indexed, settings) {
                self.track(handle);
            }
        }

        let outcome = match &step {
            ActionStep::Requery { text } => {
                self.host.change_query(text);
                Ok(())
            }
            ActionStep::OpenPath { path } => self.shell.open_path(Path::new(path)),
            ActionStep::OpenDirectory { path } => self.host.open_directory(Path::new(path), None),
            ActionStep::OpenParentAndSelect { path } => {
                let dir = parent_of(path);
                self.host
                    .open_directory(Path::new(&dir), Some(Path::new(path)))
            }
            ActionStep::OpenElevated { path, working_dir } => {
                self.spawn_elevated(path.clone(), working_dir.clone());
                Ok(())
            }
        };

        if let Err(err) = outcome {
            self.report(step.target(), &err);
        }
    }

    fn spawn_elevated(&self, path: String, working_dir: Option<String>) {
        let host = Arc::clone(&self.host);
        let shell = Arc::clone(&self.shell);
        let handle = thread::spawn(move || {
            let working_dir = working_dir.as_deref().map(Path::new);
            if let Err(err) = shell.open_elevated(Path::new(&path), working_dir) {
                warn!(path = %path, error = %err, "elevated launch failed");
                host.show_error(&failure_title(&path), &format!("{err:#}"));
            }
        });
        self.track(handle);
    }

    fn report(&self, path: &str, err: &anyhow::Error) {
        warn!(path = %path, error = %err, "result action failed");
        self.host.show_error(&failure_title(path), &format!("{err:#}"));
    }
}
