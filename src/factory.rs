//! Turns matched entities into host-ready [`ResultRecord`]s.

use crate::host::{
    fill_template, Host, KEY_DISK_FREE_SPACE, KEY_OPEN_RESULT_FOLDER,
    KEY_OPEN_RESULT_FOLDER_SUBTITLE, KEY_TOOLTIP_OPEN_CONTAINING_FOLDER,
    KEY_TOOLTIP_OPEN_DIRECTORY,
};
use crate::keyword::{build_autocomplete_text, build_requery_text};
use crate::media::{extension_of, is_media};
use crate::model::{
    ActionBinding, EntityKind, MatchedEntity, PreviewInfo, Progress, QueryContext, ResultRecord,
};
use crate::paths::{file_name_of, parent_of, trim_trailing_separators};
use crate::search::Scorer;
use crate::settings::ExplorerSettings;
use crate::size::to_readable_size;
use anyhow::{Context, Result};
use std::path::Path;

pub const PINNED_SCORE: u32 = 500;
pub const PROGRESS_NORMAL_COLOR: &str = "#26a0da";
pub const PROGRESS_WARNING_COLOR: &str = "#da2626";
const PROGRESS_WARNING_THRESHOLD: u32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeUsage {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

impl VolumeUsage {
    /// Reads free and total space of the volume holding `path`.
    pub fn for_path(path: &Path) -> Result<Self> {
        let free_bytes = fs2::available_space(path)
            .with_context(|| format!("failed to read free space of {}", path.display()))?;
        let total_bytes = fs2::total_space(path)
            .with_context(|| format!("failed to read total space of {}", path.display()))?;
        Ok(Self {
            total_bytes,
            free_bytes,
        })
    }

    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    /// Used share in whole percent.
    pub fn used_percent(&self) -> u32 {
        if self.total_bytes == 0 {
            return 0;
        }
        let ratio = self.used_bytes() as f64 / self.total_bytes as f64;
        (ratio * 100.0).round_ties_even() as u32
    }
}

pub struct ResultFactory<'a> {
    host: &'a dyn Host,
    scorer: &'a dyn Scorer,
}

impl<'a> ResultFactory<'a> {
    pub fn new(host: &'a dyn Host, scorer: &'a dyn Scorer) -> Self {
        Self { host, scorer }
    }

    pub fn create_result(
        &self,
        query: &QueryContext,
        entity: &MatchedEntity,
        settings: &ExplorerSettings,
    ) -> ResultRecord {
        match entity.kind {
            EntityKind::Folder | EntityKind::Volume => self.create_folder_result(
                file_name_of(&entity.full_path),
                &entity.full_path,
                query,
                entity,
                settings,
            ),
            EntityKind::File => self.create_file_result(query, entity, settings),
        }
    }

    /// Folder-like result. `title` and `subtitle` are caller-supplied so the
    /// same shape serves plain folders and volume entries.
    pub fn create_folder_result(
        &self,
        title: &str,
        subtitle: &str,
        query: &QueryContext,
        entity: &MatchedEntity,
        settings: &ExplorerSettings,
    ) -> ResultRecord {
        let path = entity.full_path.as_str();
        ResultRecord {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            icon_path: path.to_string(),
            autocomplete_text: build_autocomplete_text(
                title,
                query,
                path,
                EntityKind::Folder,
                settings,
            ),
            copy_text: path.to_string(),
            score: entity.score,
            title_highlight: self.scorer.score(&query.search, title).highlight,
            title_tooltip: self.host.translate(KEY_TOOLTIP_OPEN_DIRECTORY),
            subtitle_tooltip: path.to_string(),
            progress: None,
            preview: PreviewInfo::default(),
            action: ActionBinding::Folder {
                path: path.to_string(),
                kind: entity.kind,
            },
            context: entity.clone(),
        }
    }

    /// Drive usage entry; the space is shown by the progress bar, so the
    /// title stays empty.
    pub fn create_volume_space_result(
        &self,
        path: &str,
        usage: VolumeUsage,
        indexed: bool,
        settings: &ExplorerSettings,
    ) -> ResultRecord {
        let value = usage.used_percent();
        let color = if value >= PROGRESS_WARNING_THRESHOLD {
            PROGRESS_WARNING_COLOR
        } else {
            PROGRESS_NORMAL_COLOR
        };
        let free = to_readable_size(usage.free_bytes, 2);
        let total = to_readable_size(usage.total_bytes, 2);
        let subtitle = fill_template(&self.host.translate(KEY_DISK_FREE_SPACE), &[&free, &total]);

        ResultRecord {
            title: String::new(),
            subtitle,
            icon_path: path.to_string(),
            autocomplete_text: build_requery_text(path, EntityKind::Folder, settings),
            copy_text: path.to_string(),
            score: PINNED_SCORE,
            title_highlight: Vec::new(),
            title_tooltip: path.to_string(),
            subtitle_tooltip: path.to_string(),
            progress: Some(Progress {
                value,
                color: color.to_string(),
            }),
            preview: PreviewInfo::default(),
            action: ActionBinding::OpenFolder {
                path: path.to_string(),
            },
            context: MatchedEntity::new(EntityKind::Volume, path, PINNED_SCORE)
                .with_indexed(indexed),
        }
    }

    /// "Open the folder being browsed". `path` arrives in re-query form and
    /// is trimmed to match folder paths reported by the indexing service.
    pub fn create_open_current_folder_result(
        &self,
        path: &str,
        indexed: bool,
        settings: &ExplorerSettings,
    ) -> ResultRecord {
        let folder_path = trim_trailing_separators(path);

        ResultRecord {
            title: self.host.translate(KEY_OPEN_RESULT_FOLDER),
            subtitle: self.host.translate(KEY_OPEN_RESULT_FOLDER_SUBTITLE),
            icon_path: folder_path.to_string(),
            autocomplete_text: build_requery_text(folder_path, EntityKind::Folder, settings),
            copy_text: folder_path.to_string(),
            score: PINNED_SCORE,
            title_highlight: Vec::new(),
            title_tooltip: String::new(),
            subtitle_tooltip: String::new(),
            progress: None,
            preview: PreviewInfo::default(),
            action: ActionBinding::OpenFolder {
                path: folder_path.to_string(),
            },
            context: MatchedEntity::new(EntityKind::Folder, folder_path, PINNED_SCORE)
                .with_indexed(indexed),
        }
    }

    pub fn create_file_result(
        &self,
        query: &QueryContext,
        entity: &MatchedEntity,
        settings: &ExplorerSettings,
    ) -> ResultRecord {
        let path = entity.full_path.as_str();
        let title = file_name_of(path);
        let preview = if is_media(extension_of(path).as_deref()) {
            PreviewInfo::media(path)
        } else {
            PreviewInfo::default()
        };

        ResultRecord {
            title: title.to_string(),
            subtitle: parent_of(path),
            icon_path: path.to_string(),
            autocomplete_text: build_autocomplete_text(
                title,
                query,
                path,
                EntityKind::File,
                settings,
            ),
            copy_text: path.to_string(),
            score: entity.score,
            title_highlight: self.scorer.score(&query.search, title).highlight,
            title_tooltip: self.host.translate(KEY_TOOLTIP_OPEN_CONTAINING_FOLDER),
            subtitle_tooltip: path.to_string(),
            progress: None,
            preview,
            action: ActionBinding::File {
                path: path.to_string(),
            },
            context: entity.clone(),
        }
    }
}
