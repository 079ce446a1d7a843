use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Col {
    A,
    B,
    C,
}

impl SortColumn<(i32, i32, i32)> for Col {
    fn compare(self, a: &(i32, i32, i32), b: &(i32, i32, i32)) -> Ordering {
        match self {
            Col::A => a.0.cmp(&b.0),
            Col::B => a.1.cmp(&b.1),
            Col::C => a.2.cmp(&b.2),
        }
    }
}

#[test]
fn clicking_primary_toggles_direction() {
    let mut s = SortState::new(SortKey::ascending(Col::A));
    assert!(s.click(Col::A, SortPriority::Primary));
    assert_eq!(s.primary(), Some(SortKey::descending(Col::A)));
    assert!(s.click(Col::A, SortPriority::Primary));
    assert_eq!(s.primary(), Some(SortKey::ascending(Col::A)));
}

#[test]
fn clicking_new_primary_starts_ascending() {
    let mut s = SortState::new(SortKey::descending(Col::A));
    s.click(Col::B, SortPriority::Primary);
    assert_eq!(s.primary(), Some(SortKey::ascending(Col::B)));
    assert_eq!(s.priority_of(Col::A), None);
}

#[test]
fn promoting_secondary_to_primary_clears_secondary() {
    let mut s = SortState::new(SortKey::ascending(Col::A));
    s.click(Col::B, SortPriority::Secondary);
    assert_eq!(s.priority_of(Col::B), Some(SortPriority::Secondary));

    s.click(Col::B, SortPriority::Primary);
    assert_eq!(s.priority_of(Col::B), Some(SortPriority::Primary));
    assert_eq!(s.secondary(), None);
}

#[test]
fn primary_column_cannot_become_secondary() {
    let mut s = SortState::new(SortKey::ascending(Col::A));
    s.click(Col::C, SortPriority::Secondary);

    assert!(!s.click(Col::A, SortPriority::Secondary));
    assert!(!s.assign(SortPriority::Secondary, Col::A, SortDirection::Descending));

    assert_eq!(s.primary(), Some(SortKey::ascending(Col::A)));
    assert_eq!(s.secondary(), Some(SortKey::ascending(Col::C)));
    assert_eq!(s.priority_of(Col::A), Some(SortPriority::Primary));
}

#[test]
fn clicking_secondary_twice_toggles_it() {
    let mut s = SortState::new(SortKey::ascending(Col::A));
    s.click(Col::B, SortPriority::Secondary);
    s.click(Col::B, SortPriority::Secondary);
    assert_eq!(s.secondary(), Some(SortKey::descending(Col::B)));
    assert_eq!(s.direction_of(Col::B), Some(SortDirection::Descending));
}

#[test]
fn explicit_assignment_reports_changes() {
    let mut s = SortState::default();
    assert!(s.assign(SortPriority::Primary, Col::A, SortDirection::Descending));
    assert!(!s.assign(SortPriority::Primary, Col::A, SortDirection::Descending));
    assert!(s.assign(SortPriority::Secondary, Col::B, SortDirection::Ascending));
    assert!(s.clear_secondary());
    assert!(!s.clear_secondary());
}

#[test]
fn comparator_chain_uses_secondary_on_ties_only() {
    let mut s = SortState::new(SortKey::ascending(Col::A));
    s.assign(SortPriority::Secondary, Col::B, SortDirection::Descending);

    assert_eq!(s.compare(&(1, 0, 0), &(2, 9, 0)), Ordering::Less);
    assert_eq!(s.compare(&(1, 5, 0), &(1, 3, 0)), Ordering::Less);
    assert_eq!(s.compare(&(1, 3, 0), &(1, 3, 7)), Ordering::Equal);
}

#[test]
fn no_primary_means_everything_ties() {
    let s: SortState<Col> = SortState::default();
    assert_eq!(s.compare(&(1, 2, 3), &(3, 2, 1)), Ordering::Equal);
}
