use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A set of excluded subtrees, matched on whole path segments.
///
/// `build` excludes `build` and `build/x/y`, never `buildings` or
/// `buildkite`. Prefixes may be written with `/` or `\` separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    prefixes: Vec<Vec<String>>,
}

impl ExclusionSet {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(|p| segments_of_str(p.as_ref()))
            .filter(|segments| !segments.is_empty())
            .collect();
        Self { prefixes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Whether `relative` equals or is nested under an excluded prefix.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let segments = segments_of_path(relative);
        self.prefixes.iter().any(|prefix| {
            segments.len() >= prefix.len()
                && segments.iter().zip(prefix).all(|(seg, pre)| seg == pre)
        })
    }
}

impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.prefixes.iter().map(|p| p.join("/")).collect();
        write!(f, "[{}]", joined.join(", "))
    }
}

fn segments_of_str(raw: &str) -> Vec<String> {
    raw.split(['/', '\\'])
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .map(str::to_string)
        .collect()
}

fn segments_of_path(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(seg) => Some(seg.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Governs one template copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySpec {
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
    pub exclusions: ExclusionSet,
}

impl CopySpec {
    pub fn new(
        source_root: impl Into<PathBuf>,
        dest_root: impl Into<PathBuf>,
        exclusions: ExclusionSet,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            exclusions,
        }
    }
}

/// What a copy actually did. All paths are relative to the source root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    /// Roots of excluded subtrees (their contents are never visited).
    pub skipped: Vec<PathBuf>,
}

impl CopyReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> ExclusionSet {
        ExclusionSet::new(["build", "frontend/node_modules", "./wailsjs/"])
    }

    #[test]
    fn excludes_exact_and_nested_paths() {
        let set = set();
        assert!(set.is_excluded(Path::new("build")));
        assert!(set.is_excluded(Path::new("build/bin/app")));
        assert!(set.is_excluded(Path::new("frontend/node_modules")));
        assert!(set.is_excluded(Path::new("frontend/node_modules/vite/index.js")));
        assert!(set.is_excluded(Path::new("wailsjs/go/main/App.js")));
    }

    #[test]
    fn matches_whole_segments_only() {
        let set = set();
        assert!(!set.is_excluded(Path::new("buildkite")));
        assert!(!set.is_excluded(Path::new("buildings/plan.txt")));
        assert!(!set.is_excluded(Path::new("frontend/node_modules_old")));
        assert!(!set.is_excluded(Path::new("frontend")));
        assert!(!set.is_excluded(Path::new("src/build")));
    }

    #[test]
    fn backslash_prefixes_are_normalized() {
        let set = ExclusionSet::new(["frontend\\dist"]);
        assert!(set.is_excluded(Path::new("frontend/dist/index.html")));
    }

    #[test]
    fn empty_prefixes_are_ignored() {
        let set = ExclusionSet::new(["", "/", "."]);
        assert!(set.is_empty());
        assert!(!set.is_excluded(Path::new("anything")));
    }

    #[test]
    fn display_lists_prefixes() {
        assert_eq!(set().to_string(), "[build, frontend/node_modules, wailsjs]");
    }
}
