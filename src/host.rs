//! Collaborators the result core calls out to.
//!
//! The host shell, the platform launchers and the indexing service are all
//! shared with background threads, hence the `Send + Sync` bounds.

use anyhow::Result;
use std::path::Path;

pub const KEY_TOOLTIP_OPEN_DIRECTORY: &str = "plugin_explorer_plugin_ToolTipOpenDirectory";
pub const KEY_TOOLTIP_OPEN_CONTAINING_FOLDER: &str =
    "plugin_explorer_plugin_ToolTipOpenContainingFolder";
pub const KEY_DISK_FREE_SPACE: &str = "plugin_explorer_diskfreespace";
pub const KEY_OPEN_RESULT_FOLDER: &str = "plugin_explorer_openresultfolder";
pub const KEY_OPEN_RESULT_FOLDER_SUBTITLE: &str = "plugin_explorer_openresultfolder_subtitle";

pub trait Host: Send + Sync {
    /// Localized text for `key`. Templates use `{0}`, `{1}` placeholders.
    fn translate(&self, key: &str) -> String;

    fn change_query(&self, text: &str);

    fn open_directory(&self, dir: &Path, select: Option<&Path>) -> Result<()>;

    /// Blocking, user-visible error report.
    fn show_error(&self, title: &str, message: &str);
}

pub trait Shell: Send + Sync {
    fn open_path(&self, path: &Path) -> Result<()>;

    fn open_elevated(&self, path: &Path, working_dir: Option<&Path>) -> Result<()>;
}

pub trait IndexingService: Send + Sync {
    fn increment_usage_counter(&self, path: &str) -> Result<()>;
}

/// Built-in English strings, used when the host has no localization of its own.
pub fn english_text(key: &str) -> Option<&'static str> {
    let text = match key {
        KEY_TOOLTIP_OPEN_DIRECTORY => "Ctrl + Enter to open the directory",
        KEY_TOOLTIP_OPEN_CONTAINING_FOLDER => "Ctrl + Enter to open the containing folder",
        KEY_DISK_FREE_SPACE => "{0} free of {1}",
        KEY_OPEN_RESULT_FOLDER => "Open current folder",
        KEY_OPEN_RESULT_FOLDER_SUBTITLE => "Use Ctrl + Enter to open the folder",
        _ => return None,
    };
    Some(text)
}

/// Fills `{0}`, `{1}`, ... in a localized template.
pub fn fill_template(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, arg)| {
            text.replace(&format!("{{{i}}}"), arg)
        })
}
