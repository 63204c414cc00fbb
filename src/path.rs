//! Helpers for `/`-separated absolute paths.
//!
//! Paths handled here are plain strings such as `/project/src/main.rs`. The
//! empty string stands for the filesystem root (and for "no path").

/// Splits a file path into its directory and its file name.
pub fn parse_file_path(path: &str) -> (&str, &str) {
    path.rsplit_once('/').unwrap_or(("", path))
}

/// Iterates over the segments following the leading `/`.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').skip(1)
}

/// The path with its last segment removed.
pub fn branch_name(path: &str) -> &str {
    parse_file_path(path).0
}

/// The last segment of a path.
pub fn leaf_name(path: &str) -> &str {
    parse_file_path(path).1
}

/// Checks whether `path` is `root` itself or lies beneath it, segment-wise.
pub fn is_within(path: &str, root: &str) -> bool {
    match path.strip_prefix(root) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Longest common segment-wise prefix of two paths.
///
/// Returns the prefix as a path (`""` when only `/` is shared) followed by the
/// segments of `a` and of `b` remaining below it.
pub fn common_root<'a, 'b>(a: &'a str, b: &'b str) -> (String, Vec<&'a str>, Vec<&'b str>) {
    let a_segments: Vec<&str> = segments(a).collect();
    let b_segments: Vec<&str> = segments(b).collect();

    let shared = a_segments
        .iter()
        .zip(&b_segments)
        .take_while(|(x, y)| x == y)
        .count();

    let root = a_segments[..shared]
        .iter()
        .fold(String::new(), |mut root, segment| {
            root.push('/');
            root.push_str(segment);
            root
        });

    (
        root,
        a_segments[shared..].to_vec(),
        b_segments[shared..].to_vec(),
    )
}
