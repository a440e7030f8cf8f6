//! # Source Path Resolution
//!
//! Maps the `filepath` of a request to a location on disk.
//!
//! Without a root, paths are used as given. With a root, every path is
//! confined under it:
//! - root and prefix components are dropped, so absolute paths become relative,
//! - `..` segments are replaced with `_`,
//! - the remaining components are joined onto the root.
//!
//! # Example
//! ```rust
//! use photo_preview::image::source::SourceResolver;
//! use std::path::PathBuf;
//!
//! let r = SourceResolver::with_root("/srv/photos");
//! assert_eq!(r.resolve("/2024/a.jpg"), PathBuf::from("/srv/photos/2024/a.jpg"));
//! assert_eq!(r.resolve("../etc/passwd"), PathBuf::from("/srv/photos/_/etc/passwd"));
//! ```

use std::path::{Component, Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceResolver {
    root: Option<PathBuf>,
}

impl SourceResolver {
    /// Resolver that uses request paths unchanged.
    pub fn unrestricted() -> Self {
        Self { root: None }
    }

    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn from_option(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            None => PathBuf::from(path),
            Some(root) => {
                let mut full = root.clone();
                for component in Path::new(path).components() {
                    match component {
                        Component::Normal(part) => full.push(part),
                        Component::ParentDir => full.push("_"),
                        Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
                    }
                }
                full
            }
        }
    }
}
