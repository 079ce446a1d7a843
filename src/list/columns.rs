use std::cmp::Ordering;

use super::compare::{case_insensitive, chronological, numeric, ordinal};
use super::{ListItem, Searchable, SortColumn};
use crate::model::{Changeset, FileRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangesetColumn {
    Id,
    CreatedBy,
    Date,
    Comment,
    Branch,
}

impl ChangesetColumn {
    pub const ALL: [ChangesetColumn; 5] = [
        ChangesetColumn::Id,
        ChangesetColumn::CreatedBy,
        ChangesetColumn::Date,
        ChangesetColumn::Comment,
        ChangesetColumn::Branch,
    ];
}

impl SortColumn<Changeset> for ChangesetColumn {
    fn compare(self, a: &Changeset, b: &Changeset) -> Ordering {
        match self {
            ChangesetColumn::Id => numeric(a.id.0, b.id.0),
            ChangesetColumn::CreatedBy => case_insensitive(&a.created_by, &b.created_by),
            ChangesetColumn::Date => chronological(a.date, b.date),
            ChangesetColumn::Comment => case_insensitive(&a.comment, &b.comment),
            ChangesetColumn::Branch => case_insensitive(&a.branch, &b.branch),
        }
    }
}

impl Searchable for Changeset {
    fn search_strings<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.created_by);
        out.push(&self.comment);
        out.push(&self.branch);
    }
}

impl ListItem for Changeset {
    type Column = ChangesetColumn;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileColumn {
    State,
    Name,
    Path,
}

impl FileColumn {
    pub const ALL: [FileColumn; 3] = [FileColumn::State, FileColumn::Name, FileColumn::Path];
}

impl SortColumn<FileRecord> for FileColumn {
    fn compare(self, a: &FileRecord, b: &FileRecord) -> Ordering {
        match self {
            FileColumn::State => ordinal(a.state, b.state),
            FileColumn::Name => case_insensitive(a.file_name(), b.file_name()),
            FileColumn::Path => case_insensitive(&a.path, &b.path),
        }
    }
}

impl Searchable for FileRecord {
    fn search_strings<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.path);
        out.push(self.state.display_name());
    }
}

impl ListItem for FileRecord {
    type Column = FileColumn;
}

#[cfg(test)]
#[path = "../tests/list/columns_tests.rs"]
mod tests;
