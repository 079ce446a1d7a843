use std::fmt;

use serde::{Deserialize, Serialize};

mod changeset;
mod file_record;

pub use self::changeset::Changeset;
pub use self::file_record::{FileRecord, FileState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangesetId(pub i64);

impl fmt::Display for ChangesetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
