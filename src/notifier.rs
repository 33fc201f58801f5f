use crate::host::IndexingService;
use crate::settings::ExplorerSettings;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Best-effort run-counter bump on the indexing service.
#[derive(Clone)]
pub struct IndexingUsageNotifier {
    service: Arc<dyn IndexingService>,
}

impl IndexingUsageNotifier {
    pub fn new(service: Arc<dyn IndexingService>) -> Self {
        Self { service }
    }

    pub fn should_notify(indexed: bool, settings: &ExplorerSettings) -> bool {
        settings.everything_enabled && indexed
    }

    /// Spawns the increment when the indexing service is enabled and the hit
    /// came from it. The handle may be dropped; failures never reach the caller.
    pub fn notify_used(
        &self,
        path: &str,
        indexed: bool,
        settings: &ExplorerSettings,
    ) -> Option<JoinHandle<()>> {
        if !Self::should_notify(indexed, settings) {
            return None;
        }
        let service = Arc::clone(&self.service);
        let path = path.to_string();
        Some(thread::spawn(move || {
            if let Err(err) = service.increment_usage_counter(&path) {
                debug!(path = %path, error = %err, "usage counter increment failed");
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingIndex;

    fn settings(everything_enabled: bool) -> ExplorerSettings {
        ExplorerSettings {
            everything_enabled,
            ..ExplorerSettings::default()
        }
    }

    #[test]
    fn fires_only_when_enabled_and_indexed() {
        for (enabled, indexed) in [(true, true), (true, false), (false, true), (false, false)] {
            let (index, rx) = RecordingIndex::new(false);
            let notifier = IndexingUsageNotifier::new(Arc::new(index));

            let handle = notifier.notify_used("/data/a.txt", indexed, &settings(enabled));
            if let Some(handle) = handle {
                handle.join().expect("notifier thread");
            }

            let calls: Vec<String> = rx.try_iter().collect();
            let expected = usize::from(enabled && indexed);
            assert_eq!(calls.len(), expected, "enabled={enabled} indexed={indexed}");
        }
    }

    #[test]
    fn service_failure_is_swallowed() {
        let (index, rx) = RecordingIndex::new(true);
        let notifier = IndexingUsageNotifier::new(Arc::new(index));

        let handle = notifier
            .notify_used("/data/a.txt", true, &settings(true))
            .expect("dispatched");

        assert!(handle.join().is_ok());
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["/data/a.txt"]);
    }
}
