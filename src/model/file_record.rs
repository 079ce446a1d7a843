use serde::{Deserialize, Serialize};

use super::ChangesetId;

/// Change classification of a file within a changeset.
///
/// Declaration order is the ordinal used when sorting by state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileState {
    Unknown,
    Ignored,
    Controlled,
    CheckedOut,
    Added,
    Moved,
    Copied,
    Deleted,
    Changed,
    Conflicted,
    NotControlled,
}

impl FileState {
    pub fn display_name(self) -> &'static str {
        match self {
            FileState::Unknown => "Unknown",
            FileState::Ignored => "Ignored",
            FileState::Controlled => "Unchanged",
            FileState::CheckedOut => "Checked out",
            FileState::Added => "Added",
            FileState::Moved => "Moved",
            FileState::Copied => "Copied",
            FileState::Deleted => "Deleted",
            FileState::Changed => "Changed",
            FileState::Conflicted => "Conflicted",
            FileState::NotControlled => "Not controlled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Local path, '/' separated.
    pub path: String,
    pub state: FileState,

    /// Changeset the revision belongs to, for diffing against its parent.
    pub changeset_id: ChangesetId,

    #[serde(default)]
    pub revision_id: Option<i64>,

    /// Previous path of a moved file.
    #[serde(default)]
    pub moved_from: Option<String>,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, state: FileState, changeset_id: ChangesetId) -> Self {
        Self {
            path: path.into(),
            state,
            changeset_id,
            revision_id: None,
            moved_from: None,
        }
    }

    /// Final path component.
    pub fn file_name(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[idx + 1..],
            None => &self.path,
        }
    }

    /// Path with `root` stripped, or the full path when it lies elsewhere.
    pub fn relative_to(&self, root: &str) -> &str {
        if root.is_empty() {
            return &self.path;
        }
        self.path.strip_prefix(root).unwrap_or(&self.path)
    }
}
