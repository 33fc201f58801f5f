use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR};

/// Text after the last separator; empty for roots and for paths that end with
/// a separator.
pub fn file_name_of(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Containing directory of `path`, empty when there is none.
pub fn parent_of(path: &str) -> String {
    Path::new(path)
        .parent()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Drops trailing separators but keeps a bare root intact.
pub fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() && !path.is_empty() {
        &path[..MAIN_SEPARATOR.len_utf8()]
    } else {
        trimmed
    }
}

/// Strips the verbatim prefixes `canonicalize` adds on Windows.
pub fn normalize_windows_path(path: PathBuf) -> PathBuf {
    #[cfg(windows)]
    {
        let raw = path.to_string_lossy();
        if let Some(rest) = raw.strip_prefix(r"\\?\UNC\") {
            return PathBuf::from(format!(r"\\{}", rest));
        }
        if let Some(rest) = raw.strip_prefix(r"\\?\") {
            return PathBuf::from(rest);
        }
    }
    path
}

/// True for drive roots and, on unix, for mount points: the path sits on a
/// different device than its parent.
pub fn is_volume_root(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        match (path.metadata(), parent.metadata()) {
            (Ok(own), Ok(above)) => own.dev() != above.dev(),
            _ => false,
        }
    }
    #[cfg(not(unix))]
    {
        let _ = parent;
        false
    }
}
