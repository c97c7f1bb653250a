//! Config Patch Service - structured (JSON) document mutation on disk.
//!
//! Reading and writing go through the `Filesystem` port; the mutation itself
//! is delegated to a `DocumentPatcher`.

use std::path::Path;

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        ports::{DocumentPatcher, Filesystem},
    },
    domain::JsonMutation,
    error::ScaffoldResult,
};

pub struct ConfigPatchService<'a> {
    fs: &'a dyn Filesystem,
    patcher: &'a dyn DocumentPatcher,
}

impl<'a> ConfigPatchService<'a> {
    pub fn new(fs: &'a dyn Filesystem, patcher: &'a dyn DocumentPatcher) -> Self {
        Self { fs, patcher }
    }

    /// Apply `mutations` to the JSON document at `path`.
    pub fn patch_json(&self, path: &Path, mutations: &[JsonMutation]) -> ScaffoldResult<()> {
        let document = self.fs.read_to_string(path)?;
        let patched = self
            .patcher
            .patch(&document, mutations)
            .map_err(|e| ApplicationError::ParseError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        self.fs.write_file(path, &patched)?;
        debug!(path = %path.display(), mutations = mutations.len(), "Patched document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, PatchError};
    use crate::error::ScaffoldError;

    struct Rejecting;

    impl DocumentPatcher for Rejecting {
        fn patch(&self, _: &str, _: &[JsonMutation]) -> Result<String, PatchError> {
            Err(PatchError::NotAnObject)
        }
    }

    struct Echo;

    impl DocumentPatcher for Echo {
        fn patch(&self, document: &str, mutations: &[JsonMutation]) -> Result<String, PatchError> {
            Ok(format!("{document}+{}", mutations.len()))
        }
    }

    #[test]
    fn parse_failure_becomes_parse_error_and_nothing_is_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|_| Ok("[]".into()));
        fs.expect_write_file().never();

        let err = ConfigPatchService::new(&fs, &Rejecting)
            .patch_json(Path::new("/a/wails.json"), &[JsonMutation::set("name", "x")])
            .unwrap_err();
        match err {
            ScaffoldError::Application(ApplicationError::ParseError { path, reason }) => {
                assert_eq!(path, Path::new("/a/wails.json"));
                assert!(reason.contains("not an object"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn patched_document_is_written_back() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|_| Ok("{}".into()));
        fs.expect_write_file()
            .withf(|path, content| path.ends_with("package.json") && content.contains("{}+1"))
            .times(1)
            .returning(|_, _| Ok(()));

        ConfigPatchService::new(&fs, &Echo)
            .patch_json(Path::new("/a/frontend/package.json"), &[JsonMutation::set("name", "x")])
            .unwrap();
    }
}
