/// Longest common directory of two '/' separated paths.
///
/// The result always ends on a '/' boundary: "/a/b/ccc" and "/a/b/cde" share
/// "/a/b/", never "/a/b/c". A path only counts as a directory when it ends in
/// '/', so "C:/Workspace/Content" against "C:/Workspace/Content/Textures"
/// yields "C:/Workspace/". Returns "" when nothing up to a separator matches.
pub fn find_common_directory<'a>(a: &'a str, b: &str) -> &'a str {
    let mut dir_len = 0;
    for ((idx, ca), cb) in a.char_indices().zip(b.chars()) {
        if ca != cb {
            break;
        }
        if ca == '/' {
            dir_len = idx + ca.len_utf8();
        }
    }
    &a[..dir_len]
}

/// Common directory of every path in `paths`, or `None` for an empty input.
pub fn common_directory_of<'a, I>(paths: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut it = paths.into_iter();
    let first = it.next()?;
    let mut common = find_common_directory(first, first).to_string();
    for p in it {
        let next_len = find_common_directory(&common, p).len();
        common.truncate(next_len);
        if common.is_empty() {
            break;
        }
    }
    Some(common)
}

#[cfg(test)]
#[path = "tests/paths_tests.rs"]
mod tests;
