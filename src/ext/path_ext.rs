use std::path::{Component, Path, PathBuf};

/// Displays a path as absolute as possible, resolving `.` and `..` when it
/// cannot be canonicalized.
pub fn best_effort_display(path: &Path) -> String {
    match path.canonicalize() {
        Ok(canonical_path) => canonical_path.display().to_string(),
        Err(_) => {
            let absolute_path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                match std::env::current_dir() {
                    Ok(current_dir) => current_dir.join(path),
                    Err(_) => path.to_path_buf(),
                }
            };

            normalize(&absolute_path).display().to_string()
        }
    }
}

/// Resolves `.` and `..` without touching the filesystem. Drive prefixes and
/// the root are kept, and `..` never climbs above the root.
fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            _ => components.push(component),
        }
    }
    components.iter().collect()
}

/// Renders a path in the `/`-separated form file trees are keyed by.
///
/// Drive prefixes and `.` are dropped and `..` removes the previous segment.
/// The filesystem root becomes `""`.
pub fn to_tree_path(path: &Path) -> String {
    path.components()
        .fold(String::new(), |mut tree_path, component| {
            match component {
                Component::Normal(segment) => {
                    tree_path.push('/');
                    tree_path.push_str(&segment.to_string_lossy());
                }
                Component::ParentDir => {
                    let parent_len = tree_path.rfind('/').unwrap_or(0);
                    tree_path.truncate(parent_len);
                }
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            }
            tree_path
        })
}

pub trait PathExt {
    fn best_effort_display(&self) -> String;
    fn to_tree_path(&self) -> String;
}

impl PathExt for Path {
    fn best_effort_display(&self) -> String {
        best_effort_display(self)
    }

    fn to_tree_path(&self) -> String {
        to_tree_path(self)
    }
}

impl PathExt for PathBuf {
    fn best_effort_display(&self) -> String {
        best_effort_display(self)
    }

    fn to_tree_path(&self) -> String {
        to_tree_path(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/project/src/main.rs", "/project/src/main.rs")]
    #[case("/project/./src/../lib.rs", "/project/lib.rs")]
    #[case("/", "")]
    #[case("/..", "")]
    fn converts_to_tree_path(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(Path::new(path).to_tree_path(), expected);
    }

    #[test]
    fn displays_missing_paths_as_absolute() {
        let display = Path::new("does/not/../exist.txt").best_effort_display();

        assert!(display.ends_with("/does/exist.txt"), "{display}");
    }

    #[rstest]
    #[case("/missing/./a/../b", "/missing/b")]
    #[case("/../missing", "/missing")]
    #[case("/", "/")]
    fn normalizes_without_dropping_root(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(normalize(Path::new(path)), PathBuf::from(expected));
    }
}
