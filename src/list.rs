//! Filtered, sorted views over an authoritative list.
//!
//! `ListController` owns the source items and keeps `visible` (indices into
//! the source) in sync: every change of source, filter text or sort keys
//! re-derives it before returning.

mod columns;
pub mod compare;
mod filter;
mod sort;

pub use self::columns::{ChangesetColumn, FileColumn};
pub use self::filter::{Searchable, TextFilter};
pub use self::sort::{SortColumn, SortDirection, SortKey, SortPriority, SortState};

/// An item type that can be shown in a `ListController`.
pub trait ListItem: Searchable + Sized {
    type Column: SortColumn<Self>;
}

#[derive(Clone, Debug)]
pub struct ListController<T: ListItem> {
    source: Vec<T>,
    filter: TextFilter,
    sort: SortState<T::Column>,
    visible: Vec<usize>,
}

impl<T: ListItem> Default for ListController<T> {
    fn default() -> Self {
        Self::new(SortState::default())
    }
}

impl<T: ListItem> ListController<T> {
    pub fn new(sort: SortState<T::Column>) -> Self {
        Self {
            source: Vec::new(),
            filter: TextFilter::default(),
            sort,
            visible: Vec::new(),
        }
    }

    /// Replaces the whole source collection.
    pub fn set_source(&mut self, items: Vec<T>) {
        self.source = items;
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.set_source(Vec::new());
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.source.iter().find(|item| pred(item))
    }

    pub fn set_filter_text(&mut self, text: &str) {
        if self.filter.raw() == text {
            return;
        }
        self.filter = TextFilter::new(text);
        self.recompute();
    }

    pub fn filter_text(&self) -> &str {
        self.filter.raw()
    }

    /// Header click on `column`; see `SortState::click`.
    pub fn set_sort_column(&mut self, column: T::Column, priority: SortPriority) {
        if self.sort.click(column, priority) {
            self.recompute();
        }
    }

    /// Header reporting an explicit mode; see `SortState::assign`.
    pub fn set_sort(&mut self, priority: SortPriority, column: T::Column, direction: SortDirection) {
        if self.sort.assign(priority, column, direction) {
            self.recompute();
        }
    }

    pub fn clear_secondary_sort(&mut self) {
        if self.sort.clear_secondary() {
            self.recompute();
        }
    }

    pub fn sort_state(&self) -> &SortState<T::Column> {
        &self.sort
    }

    pub fn sort_priority(&self, column: T::Column) -> Option<SortPriority> {
        self.sort.priority_of(column)
    }

    pub fn sort_direction(&self, column: T::Column) -> Option<SortDirection> {
        self.sort.direction_of(column)
    }

    pub fn visible_rows(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.visible.iter().map(|&idx| &self.source[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn row(&self, index: usize) -> Option<&T> {
        self.visible.get(index).map(|&idx| &self.source[idx])
    }

    fn recompute(&mut self) {
        let filter = &self.filter;
        self.visible = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(*item))
            .map(|(idx, _)| idx)
            .collect();

        // Ties end up in no particular order.
        let source = &self.source;
        let sort = &self.sort;
        if sort.primary().is_some() {
            self.visible
                .sort_unstable_by(|&a, &b| sort.compare(&source[a], &source[b]));
        }
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
