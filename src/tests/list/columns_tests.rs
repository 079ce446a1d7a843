use time::macros::datetime;

use super::*;
use crate::model::{ChangesetId, FileState};

fn cs(id: i64, who: &str, comment: &str, branch: &str) -> Changeset {
    Changeset::new(
        ChangesetId(id),
        who,
        datetime!(2024-01-01 00:00 UTC) + time::Duration::hours(id),
        comment,
        branch,
    )
}

#[test]
fn changeset_columns_compare_their_field() {
    let a = cs(2, "alice", "Zebra", "/main/Feature");
    let b = cs(10, "Bob", "apple", "/main");

    assert_eq!(ChangesetColumn::Id.compare(&a, &b), Ordering::Less);
    assert_eq!(ChangesetColumn::Date.compare(&a, &b), Ordering::Less);
    assert_eq!(ChangesetColumn::CreatedBy.compare(&a, &b), Ordering::Less);
    assert_eq!(ChangesetColumn::Comment.compare(&a, &b), Ordering::Greater);
    assert_eq!(ChangesetColumn::Branch.compare(&a, &b), Ordering::Greater);
}

#[test]
fn text_columns_ignore_case() {
    let a = cs(1, "ALICE", "x", "/Main");
    let b = cs(2, "alice", "X", "/main");
    assert_eq!(ChangesetColumn::CreatedBy.compare(&a, &b), Ordering::Equal);
    assert_eq!(ChangesetColumn::Comment.compare(&a, &b), Ordering::Equal);
    assert_eq!(ChangesetColumn::Branch.compare(&a, &b), Ordering::Equal);
}

#[test]
fn changeset_search_strings_cover_author_comment_branch() {
    let c = cs(7, "alice", "Fix lighting", "/main/rendering");
    let mut out = Vec::new();
    c.search_strings(&mut out);
    assert_eq!(out, vec!["alice", "Fix lighting", "/main/rendering"]);
}

#[test]
fn file_columns() {
    let id = ChangesetId(1);
    let a = FileRecord::new("/ws/zeta/Alpha.txt", FileState::Deleted, id);
    let b = FileRecord::new("/ws/Beta/beta.txt", FileState::Added, id);

    assert_eq!(FileColumn::State.compare(&a, &b), Ordering::Greater);
    assert_eq!(FileColumn::Name.compare(&a, &b), Ordering::Less);
    assert_eq!(FileColumn::Path.compare(&a, &b), Ordering::Greater);
}

#[test]
fn file_search_strings_include_state_name() {
    let f = FileRecord::new("/ws/a.txt", FileState::Moved, ChangesetId(1));
    let mut out = Vec::new();
    f.search_strings(&mut out);
    assert_eq!(out, vec!["/ws/a.txt", "Moved"]);
}
