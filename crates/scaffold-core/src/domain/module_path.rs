//! Module declarations and module-base derivation.
//!
//! Everything here is pure string manipulation: no I/O, no logging. Callers
//! read declaration files through the `Filesystem` port and hand the content
//! in.

/// Segment that separates a workspace's module base from an app name.
pub const APPS_SEGMENT: &str = "/apps/";

/// Suffix of the shared library module (`<base>/shared`).
pub const SHARED_SUFFIX: &str = "/shared";

/// Suffix of the tools module (`<base>/tools`).
pub const TOOLS_SUFFIX: &str = "/tools";

const MODULE_KEYWORD: &str = "module";

/// The module path named by a module-declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDeclaration {
    pub path: String,
}

impl ModuleDeclaration {
    /// Parse the first `module <path>` line of a declaration file.
    ///
    /// Returns `None` when no line declares a module or the path is empty.
    pub fn parse(contents: &str) -> Option<Self> {
        contents
            .lines()
            .find_map(module_directive)
            .map(|path| Self { path: path.to_string() })
    }

    /// Organization-level base of this module, see [`derive_base`].
    pub fn base(&self) -> Option<&str> {
        derive_base(&self.path)
    }
}

/// Strip a known suffix from a module path to get its organization base.
///
/// Priority order:
/// 1. everything before the last `/apps/` segment
/// 2. a trailing `/shared`
/// 3. a trailing `/tools`
///
/// Returns `None` if no pattern matches or the result would be empty.
pub fn derive_base(module_path: &str) -> Option<&str> {
    let base = if let Some(idx) = module_path.rfind(APPS_SEGMENT) {
        &module_path[..idx]
    } else if let Some(base) = module_path.strip_suffix(SHARED_SUFFIX) {
        base
    } else if let Some(base) = module_path.strip_suffix(TOOLS_SUFFIX) {
        base
    } else {
        return None;
    };

    (!base.is_empty()).then_some(base)
}

/// Whether a derived base is one of the known template placeholders.
pub fn is_placeholder(base: &str, placeholders: &[String]) -> bool {
    placeholders
        .iter()
        .any(|placeholder| !placeholder.is_empty() && base.contains(placeholder.as_str()))
}

/// Replace the first module directive with `module <new_module>`.
///
/// Returns the rewritten content together with the module path that was
/// replaced, or `None` for the latter if the file declared no module (the
/// content is then returned unchanged). Line endings are preserved.
pub fn rewrite_declaration(contents: &str, new_module: &str) -> (String, Option<String>) {
    let mut previous = None;
    let mut out = String::with_capacity(contents.len() + new_module.len());

    for line in contents.split_inclusive('\n') {
        if previous.is_none() {
            if let Some(path) = module_directive(line) {
                previous = Some(path.to_string());
                let ending = &line[line.trim_end_matches(['\r', '\n']).len()..];
                out.push_str(MODULE_KEYWORD);
                out.push(' ');
                out.push_str(new_module);
                out.push_str(ending);
                continue;
            }
        }
        out.push_str(line);
    }

    (out, previous)
}

/// Extract the module path from a single `module ...` line.
fn module_directive(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix(MODULE_KEYWORD)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rest = rest.split("//").next().unwrap_or_default().trim();
    let path = rest.trim_matches('"');
    (!path.is_empty()).then_some(path)
}
