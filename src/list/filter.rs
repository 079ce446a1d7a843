/// Items that can be matched against the search box.
pub trait Searchable {
    fn search_strings<'a>(&'a self, out: &mut Vec<&'a str>);
}

/// Case-insensitive substring filter over an item's search strings.
/// Whitespace is part of the needle; only the empty string matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextFilter {
    raw: String,
    needle: String,
}

impl TextFilter {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let mut strings = Vec::new();
        item.search_strings(&mut strings);
        strings
            .iter()
            .any(|s| s.to_lowercase().contains(&self.needle))
    }
}
