//! File-backed content entry store
//!
//! One directory per status, one JSON record per entry. A status change
//! rewrites the record and renames it into the target directory, so each
//! create or transition is a single atomic step on disk.

use super::entry_types::*;
use crate::error::{Result, SocialError};
use crate::paths;
use social_types::{CampaignInput, ContentStatus, Draft, Platform};
use std::cmp::Reverse;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ContentStore {
    root_path: PathBuf,
}

impl ContentStore {
    /// Open (or initialize) a store rooted at `root_path`
    pub fn new<P: AsRef<Path>>(root_path: P) -> Result<Self> {
        let root_path = root_path.as_ref().to_path_buf();

        for status in ContentStatus::ALL {
            fs::create_dir_all(paths::status_dir(&root_path, status))?;
        }

        Ok(Self { root_path })
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Find an entry in any status directory
    fn find_entry_path(&self, id: &EntryId) -> Option<(PathBuf, ContentStatus)> {
        for status in ContentStatus::ALL {
            let path = paths::entry_path(&self.root_path, status, id.as_str());
            log::debug!("Checking path: {:?} - exists: {}", path, path.exists());

            if path.exists() {
                return Some((path, status));
            }
        }

        None
    }

    /// Write entry data through a temp file and rename
    fn write_entry(&self, path: &Path, entry: &ContentEntry) -> Result<()> {
        let json = serde_json::to_string_pretty(entry)
            .map_err(|e| SocialError::Serialization(format!("Failed to serialize entry: {}", e)))?;

        let temp_path = paths::temp_path_for(path);
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Read entry data from file
    fn read_entry(&self, path: &Path) -> Result<ContentEntry> {
        let json = fs::read_to_string(path)?;

        serde_json::from_str(&json).map_err(|e| {
            SocialError::Deserialization(format!("Failed to deserialize entry {:?}: {}", path, e))
        })
    }

    /// Persist a new entry built from campaign inputs and their drafts
    pub fn create_entry(&self, input: &CampaignInput, drafts: Vec<Draft>) -> Result<ContentEntry> {
        let entry = ContentEntry::new(input, drafts)?;
        let path = paths::entry_path(&self.root_path, entry.status(), entry.id().as_str());

        self.write_entry(&path, &entry)?;

        log::info!(
            "Created entry {} for '{}' on {}",
            entry.id(),
            entry.topic,
            Platform::join(entry.platforms())
        );
        Ok(entry)
    }

    /// Get entry by ID
    pub fn get_entry(&self, id: &EntryId) -> Result<Option<ContentEntry>> {
        match self.find_entry_path(id) {
            Some((path, _)) => Ok(Some(self.read_entry(&path)?)),
            None => Ok(None),
        }
    }

    /// All entries in one status, unordered
    fn entries_in_status(&self, status: ContentStatus) -> Result<Vec<ContentEntry>> {
        let status_dir = paths::status_dir(&self.root_path, status);

        if !status_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(&status_dir)? {
            let path = dir_entry?.path();
            if paths::is_entry_file(&path) {
                entries.push(self.read_entry(&path)?);
            }
        }

        Ok(entries)
    }

    /// List entries, optionally in one status.
    ///
    /// Ordered by due date ascending with undated entries last, newest first
    /// within the same due date, and capped at `limit`.
    pub fn list_entries(&self, status: Option<ContentStatus>, limit: usize) -> Result<Vec<ContentEntry>> {
        let statuses: Vec<ContentStatus> = match status {
            Some(status) => vec![status],
            None => ContentStatus::ALL.to_vec(),
        };

        let mut entries = Vec::new();
        for status in statuses {
            entries.extend(self.entries_in_status(status)?);
        }

        entries.sort_by(|a, b| {
            let key = |e: &ContentEntry| (e.due_date.is_none(), e.due_date, Reverse(e.created_at()));
            key(a)
                .cmp(&key(b))
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        entries.truncate(limit);

        Ok(entries)
    }

    /// Change an entry's status.
    ///
    /// Returns `Ok(None)` for an unknown id. The updated record lands in the
    /// target status directory before the old copy is removed.
    pub fn set_status(&self, id: &EntryId, status: ContentStatus) -> Result<Option<ContentEntry>> {
        let Some((path, current_status)) = self.find_entry_path(id) else {
            log::warn!("Entry {} not found in any status directory", id);
            return Ok(None);
        };

        let mut entry = self.read_entry(&path)?;
        entry.transition_to(status);

        let new_path = paths::entry_path(&self.root_path, status, id.as_str());
        self.write_entry(&new_path, &entry)?;

        if new_path != path {
            fs::remove_file(&path)?;
        }

        log::info!("Entry {} moved from {} to {}", id, current_status, status);
        Ok(Some(entry))
    }

    /// Export projections of every entry in `status`, optionally narrowed to one platform
    pub fn export_entries(&self, status: ContentStatus, platform: Option<Platform>) -> Result<Vec<ExportRecord>> {
        let entries = self.list_entries(Some(status), usize::MAX)?;

        Ok(entries
            .iter()
            .filter_map(|entry| entry.export(platform))
            .collect())
    }

    /// Get entry counts by status
    pub fn status_counts(&self) -> Result<StatusCountMap> {
        let mut counts = StatusCountMap::new();

        for status in ContentStatus::ALL {
            for _ in self.entries_in_status(status)? {
                counts.increment(status);
            }
        }

        Ok(counts)
    }
}
