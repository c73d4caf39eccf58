use std::fs;
use std::path::{Path, PathBuf};

use super::store_io::StoreError;

/// List created when the data directory has none
pub const DEFAULT_LIST: &str = "todo.json";

/// Every `*.json` file directly inside `data_dir`, sorted by file name.
pub fn discover_lists(data_dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    let entries = fs::read_dir(data_dir).map_err(|e| StoreError::ReadError {
        path: data_dir.to_path_buf(),
        source: e,
    })?;

    let mut lists = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_list_file(&path) {
            lists.push(path);
        }
    }
    lists.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(lists)
}

fn is_list_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Resolve a user-typed list name to a path.
///
/// Bare names land in `data_dir` and get a `.json` suffix; anything with a
/// directory component is taken as a path as typed. Trailing separators are
/// dropped. `None` when the input names no file (`/`, `..`, blank).
pub fn resolve_list_path(data_dir: &Path, input: &str) -> Option<PathBuf> {
    // Collecting the components drops trailing separators
    let typed: PathBuf = Path::new(input.trim()).components().collect();
    typed.file_name()?;
    let path = if typed.components().count() > 1 || typed.is_absolute() {
        typed
    } else {
        data_dir.join(typed)
    };
    if is_list_file(&path) {
        Some(path)
    } else {
        let mut name = path.into_os_string();
        name.push(".json");
        Some(PathBuf::from(name))
    }
}

/// Tab label for a list: its file stem
pub fn list_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
