use crate::error::ExplorerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Volume,
    Folder,
    File,
}

impl EntityKind {
    pub fn is_container(self) -> bool {
        matches!(self, EntityKind::Volume | EntityKind::Folder)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Volume => "volume",
            EntityKind::Folder => "folder",
            EntityKind::File => "file",
        };
        f.write_str(name)
    }
}

impl FromStr for EntityKind {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "volume" => Ok(EntityKind::Volume),
            "folder" => Ok(EntityKind::Folder),
            "file" => Ok(EntityKind::File),
            _ => Err(ExplorerError::UnknownEntityKind(s.to_string())),
        }
    }
}

/// A file, folder or volume produced by an upstream search step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedEntity {
    pub kind: EntityKind,
    pub full_path: String,
    pub score: u32,
    /// Whether the hit came from the indexing service rather than a filesystem walk.
    pub indexed: bool,
}

impl MatchedEntity {
    pub fn new(kind: EntityKind, full_path: impl Into<String>, score: u32) -> Self {
        Self {
            kind,
            full_path: full_path.into(),
            score,
            indexed: false,
        }
    }

    pub fn with_indexed(mut self, indexed: bool) -> Self {
        self.indexed = indexed;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    pub search: String,
    /// Empty when the query was invoked globally.
    pub action_keyword: String,
}

impl QueryContext {
    pub fn new(search: impl Into<String>, action_keyword: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            action_keyword: action_keyword.into(),
        }
    }
}

/// Modifier keys held when a result is invoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl.
    pub secondary: bool,
    /// Shift.
    pub tertiary: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        secondary: false,
        tertiary: false,
    };

    pub fn secondary() -> Self {
        Self {
            secondary: true,
            tertiary: false,
        }
    }

    pub fn secondary_and_tertiary() -> Self {
        Self {
            secondary: true,
            tertiary: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewInfo {
    pub is_media: bool,
    pub image_path: Option<String>,
}

impl PreviewInfo {
    pub fn media(image_path: impl Into<String>) -> Self {
        Self {
            is_media: true,
            image_path: Some(image_path.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub value: u32,
    pub color: String,
}

/// What a result does when invoked. Modifier-dependent choices are made by
/// [`crate::dispatch::resolve_step`] at invocation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionBinding {
    /// Open the folder, or descend into it with a re-query.
    Folder { path: String, kind: EntityKind },
    /// Always open the folder.
    OpenFolder { path: String },
    File { path: String },
}

impl ActionBinding {
    pub fn path(&self) -> &str {
        match self {
            ActionBinding::Folder { path, .. }
            | ActionBinding::OpenFolder { path }
            | ActionBinding::File { path } => path,
        }
    }
}

/// A concrete step chosen for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStep {
    OpenPath { path: String },
    OpenDirectory { path: String },
    OpenParentAndSelect { path: String },
    OpenElevated {
        path: String,
        working_dir: Option<String>,
    },
    Requery { text: String },
}

impl ActionStep {
    /// The signal handed back to the host. Re-queries report `false`; every
    /// open step reports `true`, including ones whose launch failed.
    pub fn keep_open(&self) -> bool {
        !matches!(self, ActionStep::Requery { .. })
    }

    pub fn target(&self) -> &str {
        match self {
            ActionStep::OpenPath { path }
            | ActionStep::OpenDirectory { path }
            | ActionStep::OpenParentAndSelect { path }
            | ActionStep::OpenElevated { path, .. } => path,
            ActionStep::Requery { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub title: String,
    pub subtitle: String,
    pub icon_path: String,
    pub autocomplete_text: String,
    pub copy_text: String,
    pub score: u32,
    pub title_highlight: Vec<usize>,
    pub title_tooltip: String,
    pub subtitle_tooltip: String,
    pub progress: Option<Progress>,
    pub preview: PreviewInfo,
    pub action: ActionBinding,
    pub context: MatchedEntity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_parses_case_insensitively() {
        assert_eq!("Folder".parse::<EntityKind>().unwrap(), EntityKind::Folder);
        assert_eq!(" file ".parse::<EntityKind>().unwrap(), EntityKind::File);
        assert_eq!("VOLUME".parse::<EntityKind>().unwrap(), EntityKind::Volume);
    }

    #[test]
    fn unknown_entity_kind_is_rejected() {
        let err = "symlink".parse::<EntityKind>().unwrap_err();
        assert!(matches!(err, ExplorerError::UnknownEntityKind(ref s) if s == "symlink"));
    }

    #[test]
    fn only_requery_releases_the_window() {
        let requery = ActionStep::Requery {
            text: "docs/".to_string(),
        };
        let open = ActionStep::OpenPath {
            path: "a.txt".to_string(),
        };
        assert!(!requery.keep_open());
        assert!(open.keep_open());
    }

    #[test]
    fn action_binding_serializes_with_type_tag() {
        let binding = ActionBinding::File {
            path: "a.txt".to_string(),
        };
        let json = serde_json::to_value(&binding).expect("serialize");
        assert_eq!(json["type"], "file");
        assert_eq!(json["path"], "a.txt");
    }
}
