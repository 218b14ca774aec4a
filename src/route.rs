//! Output routing.
//!
//! Each document lands at `<output root>/<slug>.html`. Slugs may contain
//! `/`, producing nested routes:
//!
//! ```text
//! slug "about"          →  dist/about.html
//! slug "essays/speckled" →  dist/essays/speckled.html
//! ```
//!
//! A router lives for one build run and remembers every destination it has
//! written. Routing a second document to a taken destination is a
//! [`RouteError::Collision`]; the earlier page is never overwritten. Files
//! left in the output root by a previous run are not tracked and are
//! replaced on their first write.
//!
//! Destinations are compared after `.` and `..` segments are resolved, so
//! `x/../about` and `about` are the same route.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Duplicate routes found! '{slug}' is already taken by another document ({path})")]
    Collision { slug: String, path: PathBuf },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug)]
pub struct OutputRouter {
    root: PathBuf,
    written: HashSet<PathBuf>,
}

impl OutputRouter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: HashSet::new(),
        }
    }

    /// Destination of a slug, with `.` and `..` segments resolved.
    pub fn destination(&self, slug: &str) -> PathBuf {
        normalize(&self.root.join(format!("{slug}.html")))
    }

    /// Compute the destination for a slug, failing if this run already
    /// wrote there.
    pub fn route(&self, slug: &str) -> Result<PathBuf, RouteError> {
        let path = self.destination(slug);
        if self.written.contains(&path) {
            return Err(RouteError::Collision {
                slug: slug.to_string(),
                path,
            });
        }
        Ok(path)
    }

    /// Write a page for `slug`, creating parent directories as needed.
    ///
    /// Returns the path written.
    pub fn write(&mut self, slug: &str, html: &str) -> Result<PathBuf, RouteError> {
        let path = self.route(slug)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| RouteError::Write {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, html).map_err(|source| RouteError::Write {
            path: path.clone(),
            source,
        })?;
        self.written.insert(path.clone());
        Ok(path)
    }

    /// Destinations written so far in this run.
    pub fn written(&self) -> usize {
        self.written.len()
    }
}

/// Resolve `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn destination_appends_html() {
        let router = OutputRouter::new("dist");
        assert_eq!(router.destination("about"), PathBuf::from("dist/about.html"));
        assert_eq!(
            router.destination("essays/speckled"),
            PathBuf::from("dist/essays/speckled.html")
        );
    }

    #[test]
    fn writes_page() {
        let tmp = TempDir::new().unwrap();
        let mut router = OutputRouter::new(tmp.path());
        let path = router.write("index", "<p>hi</p>").unwrap();

        assert_eq!(path, tmp.path().join("index.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
        assert_eq!(router.written(), 1);
    }

    #[test]
    fn nested_slug_creates_directories() {
        let tmp = TempDir::new().unwrap();
        let mut router = OutputRouter::new(tmp.path().join("dist"));
        let path = router.write("a/b/c", "x").unwrap();

        assert_eq!(path, tmp.path().join("dist/a/b/c.html"));
        assert!(path.exists());
    }

    #[test]
    fn distinct_slugs_never_collide() {
        let tmp = TempDir::new().unwrap();
        let mut router = OutputRouter::new(tmp.path());
        router.write("one", "1").unwrap();
        router.write("two", "2").unwrap();
        router.write("dir/one", "3").unwrap();
        assert_eq!(router.written(), 3);
    }

    #[test]
    fn same_slug_collides_without_overwriting() {
        let tmp = TempDir::new().unwrap();
        let mut router = OutputRouter::new(tmp.path());
        let first = router.write("page", "first").unwrap();

        let result = router.write("page", "second");
        match result {
            Err(RouteError::Collision { slug, path }) => {
                assert_eq!(slug, "page");
                assert_eq!(path, first);
            }
            other => panic!("expected Collision, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&first).unwrap(), "first");
    }

    #[test]
    fn dot_segments_resolve_before_collision_check() {
        let tmp = TempDir::new().unwrap();
        let mut router = OutputRouter::new(tmp.path());
        let first = router.write("b", "first").unwrap();

        for slug in ["x/../b", "./b", "x/y/../../b"] {
            match router.write(slug, "second") {
                Err(RouteError::Collision { path, .. }) => assert_eq!(path, first),
                other => panic!("expected Collision for {slug}, got {other:?}"),
            }
        }
        assert_eq!(fs::read_to_string(&first).unwrap(), "first");
    }

    #[test]
    fn destination_resolves_dot_segments() {
        let router = OutputRouter::new("dist");
        assert_eq!(
            router.destination("essays/../about"),
            PathBuf::from("dist/about.html")
        );
        assert_eq!(router.destination("../up"), PathBuf::from("up.html"));
        assert_eq!(router.destination("../../up"), PathBuf::from("../up.html"));
    }

    #[test]
    fn stale_file_from_previous_run_is_overwritten() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("page.html"), "old").unwrap();

        let mut router = OutputRouter::new(tmp.path());
        let path = router.write("page", "new").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn fresh_router_forgets_previous_run() {
        let tmp = TempDir::new().unwrap();
        OutputRouter::new(tmp.path()).write("page", "a").unwrap();
        assert!(OutputRouter::new(tmp.path()).write("page", "b").is_ok());
    }

    #[test]
    fn unwritable_destination_is_write_error() {
        let tmp = TempDir::new().unwrap();
        // A file where a directory is needed
        fs::write(tmp.path().join("blocker"), "").unwrap();
        let mut router = OutputRouter::new(tmp.path());

        let result = router.write("blocker/page", "x");
        assert!(matches!(result, Err(RouteError::Write { .. })));
        assert_eq!(router.written(), 0);
    }
}
