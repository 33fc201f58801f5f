use crate::model::{EntityKind, MatchedEntity};
use crate::paths::normalize_windows_path;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Walks `root` into unscored entities. Walked hits are never `indexed`.
pub fn walk_entities(
    root: &Path,
    include_files: bool,
    include_dirs: bool,
) -> Result<Vec<MatchedEntity>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("failed to canonicalize root {}", root.display()))?;
    let root = normalize_windows_path(root);
    if !include_files && !include_dirs {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for entry in WalkDir::new(&root)
        .follow_links(false)
        .min_depth(1)
        .into_iter()
        .flatten()
    {
        let path = entry.path().to_string_lossy().to_string();
        if entry.file_type().is_dir() {
            if include_dirs {
                dirs.push(MatchedEntity::new(EntityKind::Folder, path, 0));
            }
        } else if include_files {
            files.push(MatchedEntity::new(EntityKind::File, path, 0));
        }
    }

    files.extend(dirs);
    Ok(files)
}
