use crate::error::ExplorerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Keyword that makes a query global, i.e. no prefix is required.
pub const WILDCARD_SIGN: &str = "*";

/// Snapshot of the explorer settings. Passed into every call and never cached,
/// so a reloaded snapshot takes effect on the next call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExplorerSettings {
    pub path_search_keyword_enabled: bool,
    pub search_action_keyword_enabled: bool,
    pub path_search_action_keyword: String,
    pub search_action_keyword: String,
    pub everything_enabled: bool,
    pub use_location_as_working_dir: bool,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            path_search_keyword_enabled: false,
            search_action_keyword_enabled: true,
            path_search_action_keyword: WILDCARD_SIGN.to_string(),
            search_action_keyword: WILDCARD_SIGN.to_string(),
            everything_enabled: false,
            use_location_as_working_dir: false,
        }
    }
}

impl ExplorerSettings {
    pub fn any_keyword_enabled(&self) -> bool {
        self.path_search_keyword_enabled || self.search_action_keyword_enabled
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ExplorerError> {
        let text = fs::read_to_string(path).map_err(|source| ExplorerError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ExplorerError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn test_root(name: &str) -> PathBuf {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        std::env::temp_dir().join(format!("explorer-results-settings-{name}-{nonce}"))
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings =
            ExplorerSettings::from_json(r#"{"PathSearchKeywordEnabled": true}"#).expect("parse");
        assert!(settings.path_search_keyword_enabled);
        assert!(settings.search_action_keyword_enabled);
        assert_eq!(settings.search_action_keyword, WILDCARD_SIGN);
        assert!(!settings.everything_enabled);
    }

    #[test]
    fn load_reads_pascal_case_file() {
        let root = test_root("load");
        fs::create_dir_all(&root).expect("create dir");
        let file = root.join("Settings.json");
        fs::write(
            &file,
            r#"{
                "SearchActionKeyword": "doc:",
                "EverythingEnabled": true,
                "UseLocationAsWorkingDir": true
            }"#,
        )
        .expect("write settings");

        let settings = ExplorerSettings::load(&file).expect("load settings");
        assert_eq!(settings.search_action_keyword, "doc:");
        assert!(settings.everything_enabled);
        assert!(settings.use_location_as_working_dir);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn load_reports_missing_file() {
        let missing = test_root("missing").join("Settings.json");
        let err = ExplorerSettings::load(&missing).unwrap_err();
        assert!(matches!(err, ExplorerError::SettingsRead { .. }));
    }

    #[test]
    fn load_reports_malformed_json() {
        let root = test_root("malformed");
        fs::create_dir_all(&root).expect("create dir");
        let file = root.join("Settings.json");
        fs::write(&file, "{ not json").expect("write settings");

        let err = ExplorerSettings::load(&file).unwrap_err();
        assert!(matches!(err, ExplorerError::SettingsParse { .. }));
        let _ = fs::remove_dir_all(&root);
    }
}
