use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay below the directory it is joined onto.
///
/// Invariant: never absolute and never contains `..`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            });
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve against a root directory.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Lexically normalize a path: drop `.` segments and let `..` pop its parent.
///
/// Never touches the filesystem, so symlinks are not resolved. A `..` at the
/// root of an absolute path is discarded, matching `filepath.Clean` semantics.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match out.components().next_back() {
                    Some(Component::Normal(_)) => out.pop(),
                    _ => false,
                };
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}

/// Final path segment as UTF-8, if there is one.
pub fn last_segment(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn relative_path_rejects_parent_segments() {
        assert!(matches!(
            RelativePath::try_new("model/../../escape.go"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn relative_path_joins_under_root() {
        let rel = RelativePath::try_new("router/router.go").unwrap();
        assert_eq!(
            rel.under(Path::new("/srv/app")),
            PathBuf::from("/srv/app/router/router.go")
        );
    }

    #[test]
    fn normalize_drops_current_dir() {
        assert_eq!(
            normalize(Path::new("/home/u/work/./app")),
            PathBuf::from("/home/u/work/app")
        );
    }

    #[test]
    fn normalize_pops_parent_dir() {
        assert_eq!(
            normalize(Path::new("/home/u/work/../other")),
            PathBuf::from("/home/u/other")
        );
    }

    #[test]
    fn normalize_clamps_at_root() {
        assert_eq!(normalize(Path::new("/../../tmp")), PathBuf::from("/tmp"));
    }

    #[test]
    fn normalize_trailing_dot() {
        assert_eq!(
            normalize(Path::new("/home/u/work/.")),
            PathBuf::from("/home/u/work")
        );
    }

    #[test]
    fn last_segment_of_root_is_none() {
        assert_eq!(last_segment(Path::new("/")), None);
        assert_eq!(last_segment(Path::new("/tmp/newapp")), Some("newapp".into()));
    }
}
