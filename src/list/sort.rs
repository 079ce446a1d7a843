use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortPriority {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C> SortKey<C> {
    pub fn ascending(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

/// A closed set of sortable columns for items of type `T`.
pub trait SortColumn<T>: Copy + Eq + std::fmt::Debug {
    fn compare(self, a: &T, b: &T) -> Ordering;
}

/// Primary and optional secondary sort keys.
///
/// A column is never primary and secondary at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState<C> {
    primary: Option<SortKey<C>>,
    secondary: Option<SortKey<C>>,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self {
            primary: None,
            secondary: None,
        }
    }
}

impl<C: Copy + Eq> SortState<C> {
    pub fn new(primary: SortKey<C>) -> Self {
        Self {
            primary: Some(primary),
            secondary: None,
        }
    }

    pub fn primary(&self) -> Option<SortKey<C>> {
        self.primary
    }

    pub fn secondary(&self) -> Option<SortKey<C>> {
        self.secondary
    }

    pub fn priority_of(&self, column: C) -> Option<SortPriority> {
        if self.primary.is_some_and(|k| k.column == column) {
            Some(SortPriority::Primary)
        } else if self.secondary.is_some_and(|k| k.column == column) {
            Some(SortPriority::Secondary)
        } else {
            None
        }
    }

    pub fn direction_of(&self, column: C) -> Option<SortDirection> {
        [self.primary, self.secondary]
            .into_iter()
            .flatten()
            .find(|k| k.column == column)
            .map(|k| k.direction)
    }

    /// Header click: assigning the column already holding `priority` reverses
    /// its direction, any other column takes the slot ascending. Returns
    /// whether anything changed.
    pub fn click(&mut self, column: C, priority: SortPriority) -> bool {
        let direction = match self.slot(priority) {
            Some(k) if k.column == column => k.direction.reversed(),
            _ => SortDirection::Ascending,
        };
        self.assign(priority, column, direction)
    }

    /// Puts `column` in the `priority` slot with an explicit direction.
    ///
    /// Promoting the secondary column to primary clears the secondary slot.
    /// The primary column cannot become secondary; such a request is ignored.
    pub fn assign(&mut self, priority: SortPriority, column: C, direction: SortDirection) -> bool {
        let key = SortKey { column, direction };
        match priority {
            SortPriority::Primary => {
                if self.secondary.is_some_and(|k| k.column == column) {
                    self.secondary = None;
                }
                let changed = self.primary != Some(key);
                self.primary = Some(key);
                changed
            }
            SortPriority::Secondary => {
                if self.primary.is_some_and(|k| k.column == column) {
                    return false;
                }
                let changed = self.secondary != Some(key);
                self.secondary = Some(key);
                changed
            }
        }
    }

    pub fn clear_secondary(&mut self) -> bool {
        self.secondary.take().is_some()
    }

    fn slot(&self, priority: SortPriority) -> Option<SortKey<C>> {
        match priority {
            SortPriority::Primary => self.primary,
            SortPriority::Secondary => self.secondary,
        }
    }

    /// Comparator chain: primary key, then secondary key on ties.
    pub fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        C: SortColumn<T>,
    {
        let Some(primary) = self.primary else {
            return Ordering::Equal;
        };
        let ord = primary.direction.apply(primary.column.compare(a, b));
        match self.secondary {
            Some(secondary) => {
                ord.then_with(|| secondary.direction.apply(secondary.column.compare(a, b)))
            }
            None => ord,
        }
    }
}

#[cfg(test)]
#[path = "../tests/list/sort_tests.rs"]
mod tests;
