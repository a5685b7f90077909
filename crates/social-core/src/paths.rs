/// Path constants and utilities for the entry store
use social_types::ContentStatus;
use std::path::{Path, PathBuf};

/// Store root used when neither SOCIAL_MEDIA_DB nor --db is given
pub const DEFAULT_STORE_ROOT: &str = "social_media_store";

/// Environment file merged into the process environment at startup
pub const ENV_FILE_NAME: &str = ".env";

pub const ENTRY_FILE_PREFIX: &str = "entry_";
pub const ENTRY_FILE_EXTENSION: &str = "json";
const TEMP_FILE_EXTENSION: &str = "tmp";

/// Directory holding entries in the given status
pub fn status_dir(root: &Path, status: ContentStatus) -> PathBuf {
    root.join(status.as_str())
}

pub fn entry_file_name(id: &str) -> String {
    format!("{}{}.{}", ENTRY_FILE_PREFIX, id, ENTRY_FILE_EXTENSION)
}

pub fn entry_path(root: &Path, status: ContentStatus, id: &str) -> PathBuf {
    status_dir(root, status).join(entry_file_name(id))
}

/// Sibling temp path used for write-then-rename
pub fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension(TEMP_FILE_EXTENSION)
}

/// True for finished entry records (temp files are skipped)
pub fn is_entry_file(path: &Path) -> bool {
    path.is_file()
        && path.extension().and_then(|s| s.to_str()) == Some(ENTRY_FILE_EXTENSION)
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(ENTRY_FILE_PREFIX))
            .unwrap_or(false)
}
