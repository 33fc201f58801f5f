use crate::model::{EntityKind, QueryContext};
use crate::settings::{ExplorerSettings, WILDCARD_SIGN};
use std::path::{is_separator, MAIN_SEPARATOR};

fn keyword_prefix(keyword: &str) -> String {
    if keyword == WILDCARD_SIGN {
        String::new()
    } else {
        format!("{keyword} ")
    }
}

/// Prefix to put in front of a re-query. The path-search keyword wins when
/// both toggles are on.
pub fn resolve_keyword(settings: &ExplorerSettings) -> String {
    if settings.path_search_keyword_enabled {
        keyword_prefix(&settings.path_search_action_keyword)
    } else if settings.search_action_keyword_enabled {
        keyword_prefix(&settings.search_action_keyword)
    } else {
        String::new()
    }
}

/// Folders and volumes end with exactly one separator so the next search
/// lists their contents. Files are returned unchanged.
pub fn format_path_for_requery(path: &str, kind: EntityKind) -> String {
    if !kind.is_container() || path.ends_with(is_separator) {
        return path.to_string();
    }
    format!("{path}{MAIN_SEPARATOR}")
}

pub fn build_requery_text(path: &str, kind: EntityKind, settings: &ExplorerSettings) -> String {
    format!(
        "{}{}",
        resolve_keyword(settings),
        format_path_for_requery(path, kind)
    )
}

pub fn build_autocomplete_text(
    title: &str,
    query: &QueryContext,
    path: &str,
    kind: EntityKind,
    settings: &ExplorerSettings,
) -> String {
    if settings.any_keyword_enabled() {
        build_requery_text(path, kind, settings)
    } else {
        // Quick-access style invocation: replay the invoking keyword verbatim.
        format!("{} {title}", query.action_keyword)
    }
}
