use std::cell::OnceCell;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{ChangesetId, FileRecord};
use crate::paths::common_directory_of;

/// A committed batch of changes, as listed by the provider.
///
/// Everything but `files` is fixed when the list is fetched. `files` is a
/// fetch-once cache: it is filled by the first successful file fetch for this
/// instance and lives until the next full refresh replaces the changeset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Changeset {
    pub id: ChangesetId,
    pub created_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub comment: String,
    pub branch: String,

    #[serde(skip)]
    files: OnceCell<Vec<FileRecord>>,
}

impl Changeset {
    pub fn new(
        id: ChangesetId,
        created_by: impl Into<String>,
        date: OffsetDateTime,
        comment: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            id,
            created_by: created_by.into(),
            date,
            comment: comment.into(),
            branch: branch.into(),
            files: OnceCell::new(),
        }
    }

    /// Files touched by this changeset, once fetched.
    pub fn files(&self) -> Option<&[FileRecord]> {
        self.files.get().map(Vec::as_slice)
    }

    pub fn has_files(&self) -> bool {
        self.files.get().is_some()
    }

    /// Fills the files cache. Returns false (and drops `files`) when the cache
    /// was already populated.
    pub fn set_files(&self, files: Vec<FileRecord>) -> bool {
        self.files.set(files).is_ok()
    }

    /// Deepest directory containing every fetched file.
    pub fn files_root(&self) -> Option<String> {
        common_directory_of(self.files()?.iter().map(|f| f.path.as_str()))
    }
}

impl PartialEq for Changeset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Changeset {}

#[cfg(test)]
#[path = "../tests/model/changeset_tests.rs"]
mod tests;
