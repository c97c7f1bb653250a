//! Local filesystem adapter using std::fs and walkdir.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use scaffold_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{CopyReport, CopySpec, ExclusionSet},
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn copy_tree(&self, spec: &CopySpec) -> ScaffoldResult<CopyReport> {
        let source = spec.source_root.as_path();
        if !source.is_dir() {
            return Err(map_io_error(
                source,
                io::Error::new(io::ErrorKind::NotFound, "not a directory"),
                "copy tree",
            ));
        }

        let mut report = CopyReport::default();
        let mut skipped = Vec::new();
        // Directory modes are applied last so read-only directories do not
        // block writes into them.
        let mut dir_permissions = Vec::new();

        let walker = WalkDir::new(source)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let excluded = is_excluded(source, entry, &spec.exclusions);
                if excluded {
                    skipped.push(relative_to(source, entry.path()));
                }
                !excluded
            });

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(source, e))?;
            let relative = relative_to(source, entry.path());
            let target = spec.dest_root.join(&relative);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
                let permissions = entry
                    .metadata()
                    .map_err(|e| walk_error(source, e))?
                    .permissions();
                dir_permissions.push((target, permissions));
                if !relative.as_os_str().is_empty() {
                    report.directories.push(relative);
                }
            } else if file_type.is_file() || points_to_file(entry.path()) {
                // fs::copy carries the permission bits and follows links.
                fs::copy(entry.path(), &target).map_err(|e| map_io_error(&target, e, "copy file"))?;
                report.files.push(relative);
            } else {
                warn!(path = %entry.path().display(), "Skipping non-regular template entry");
            }
        }

        for (dir, permissions) in dir_permissions.into_iter().rev() {
            fs::set_permissions(&dir, permissions)
                .map_err(|e| map_io_error(&dir, e, "set permissions"))?;
        }

        report.skipped = skipped;
        debug!(
            source = %source.display(),
            dest = %spec.dest_root.display(),
            files = report.files.len(),
            directories = report.directories.len(),
            skipped = report.skipped.len(),
            "Copied tree"
        );
        Ok(report)
    }

    fn list_files(&self, root: &Path, exclusions: &ExclusionSet) -> ScaffoldResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_excluded(root, entry, exclusions));

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(root, e))?;
            if entry.file_type().is_file() {
                files.push(relative_to(root, entry.path()));
            }
        }
        Ok(files)
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

fn is_excluded(root: &Path, entry: &DirEntry, exclusions: &ExclusionSet) -> bool {
    entry.depth() > 0 && exclusions.is_excluded(&relative_to(root, entry.path()))
}

fn points_to_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file())
}

fn walk_error(root: &Path, e: walkdir::Error) -> ScaffoldError {
    let path = e.path().unwrap_or(root).to_path_buf();
    ApplicationError::FilesystemError {
        path,
        reason: format!("Failed to walk directory: {e}"),
    }
    .into()
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffoldError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
