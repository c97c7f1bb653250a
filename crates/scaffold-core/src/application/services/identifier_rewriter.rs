//! Identifier Rewriter - literal token replacement in files and trees.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ExclusionSet, RewriteSet},
    error::ScaffoldResult,
};

/// Rewrites identifiers through the `Filesystem` port.
pub struct IdentifierRewriter<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> IdentifierRewriter<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Apply `replacements` to one file. Writes only when the content
    /// changed; returns whether it did.
    pub fn replace_in_file(&self, path: &Path, replacements: &RewriteSet) -> ScaffoldResult<bool> {
        let original = self.fs.read_to_string(path)?;
        let updated = replacements.apply(&original);
        if updated == original {
            return Ok(false);
        }

        self.fs.write_file(path, &updated)?;
        debug!(path = %path.display(), "Rewrote identifiers");
        Ok(true)
    }

    /// Replace `old_base` with `new_base` in every file under `root` whose
    /// extension is in `extensions`, skipping excluded subtrees.
    ///
    /// Returns the number of files changed. Equal bases are a no-op.
    #[instrument(skip(self, exclusions, extensions), fields(root = %root.display()))]
    pub fn replace_in_tree(
        &self,
        root: &Path,
        old_base: &str,
        new_base: &str,
        exclusions: &ExclusionSet,
        extensions: &[String],
    ) -> ScaffoldResult<usize> {
        if old_base == new_base || old_base.is_empty() {
            debug!("Module base unchanged, skipping tree rewrite");
            return Ok(0);
        }
        let replacements = RewriteSet::new().with(old_base, new_base)?;

        let mut changed = 0;
        for relative in self.fs.list_files(root, exclusions)? {
            if !has_extension(&relative, extensions) {
                continue;
            }
            if self.replace_in_file(&root.join(&relative), &replacements)? {
                changed += 1;
            }
        }

        debug!(changed, "Tree rewrite finished");
        Ok(changed)
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.trim_start_matches('.') == ext))
}
