//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use scaffold_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{CopyReport, CopySpec, ExclusionSet},
    error::ScaffoldResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Every file path, sorted.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> ScaffoldResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> ScaffoldResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

fn not_found(path: &Path, what: &str) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("{what} does not exist"),
    }
}

/// Only the root of an excluded subtree is reported.
fn record_skip(exclusions: &ExclusionSet, relative: &Path, report: &mut CopyReport) {
    let parent_excluded = relative
        .parent()
        .is_some_and(|p| exclusions.is_excluded(p));
    if !parent_excluded {
        report.skipped.push(relative.to_path_buf());
    }
}

/// `path` relative to `root`, when it lies strictly below it.
fn below<'a>(root: &Path, path: &'a Path) -> Option<&'a Path> {
    path.strip_prefix(root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        let inner = self.read()?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "File").into())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(not_found(parent, "Parent directory").into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        self.write()?.add_dir_all(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.write()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path, "Directory").into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn copy_tree(&self, spec: &CopySpec) -> ScaffoldResult<CopyReport> {
        let mut inner = self.write()?;
        let source = spec.source_root.as_path();
        if !inner.directories.contains(source) {
            return Err(not_found(source, "Directory").into());
        }

        let mut report = CopyReport::default();

        let directories: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|p| below(source, p).map(Path::to_path_buf))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| below(source, p).map(|rel| (rel.to_path_buf(), c.clone())))
            .collect();

        inner.add_dir_all(&spec.dest_root);
        for relative in directories {
            if spec.exclusions.is_excluded(&relative) {
                record_skip(&spec.exclusions, &relative, &mut report);
                continue;
            }
            inner.add_dir_all(&spec.dest_root.join(&relative));
            report.directories.push(relative);
        }
        for (relative, content) in files {
            if spec.exclusions.is_excluded(&relative) {
                record_skip(&spec.exclusions, &relative, &mut report);
                continue;
            }
            inner.files.insert(spec.dest_root.join(&relative), content);
            report.files.push(relative);
        }

        report.skipped.sort();
        Ok(report)
    }

    fn list_files(&self, root: &Path, exclusions: &ExclusionSet) -> ScaffoldResult<Vec<PathBuf>> {
        let inner = self.read()?;
        Ok(inner
            .files
            .keys()
            .filter_map(|p| below(root, p))
            .filter(|rel| !exclusions.is_excluded(rel))
            .map(Path::to_path_buf)
            .collect())
    }
}
