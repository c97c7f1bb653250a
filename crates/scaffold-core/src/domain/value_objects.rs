//! Domain value objects: AppKind, AppName, ModuleBase.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Each
//! one is validated at construction, so holding an `AppName` or a
//! `ModuleBase` means the value is already safe to splice into paths and
//! module identifiers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── AppKind ───────────────────────────────────────────────────────────────────

/// The kind of application to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    /// Minimal service skeleton: a module declaration plus one entry point.
    Service,
    /// Full copy of the desktop template project.
    #[serde(rename = "wails")]
    DesktopApp,
}

impl AppKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::DesktopApp => "wails",
        }
    }

    /// Whether this kind is produced from the template project.
    pub const fn uses_template(self) -> bool {
        matches!(self, Self::DesktopApp)
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "service" | "headless" => Ok(Self::Service),
            "wails" | "app" => Ok(Self::DesktopApp),
            _ => Err(DomainError::InvalidKind { value: s.into() }),
        }
    }
}

// ── AppName ───────────────────────────────────────────────────────────────────

/// A validated app name, used verbatim as the `apps/<name>` directory and as
/// the last segment of the module path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        let invalid = |reason: &str| DomainError::InvalidName {
            name: raw.into(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(DomainError::MissingName);
        }
        if name == "." || name == ".." || name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("name cannot contain whitespace"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable title: `link-server` becomes `Link Server`.
    pub fn title(&self) -> String {
        self.0
            .split(['-', '_', ' '])
            .filter(|part| !part.is_empty())
            .map(|part| {
                let lower = part.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── ModuleBase ────────────────────────────────────────────────────────────────

/// Organization-level module path prefix, e.g. `github.com/acme/platform`.
///
/// Invariant: non-empty, no leading `/`, no trailing `/`, no `//`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleBase(String);

impl ModuleBase {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let base = raw.trim().trim_end_matches('/');
        let invalid = |reason: &str| DomainError::InvalidModuleBase {
            value: raw.into(),
            reason: reason.into(),
        };

        if base.is_empty() {
            return Err(invalid("module base cannot be empty"));
        }
        if base.starts_with('/') {
            return Err(invalid("module base cannot start with '/'"));
        }
        if base.contains("//") {
            return Err(invalid("module base cannot contain empty segments"));
        }
        if base.chars().any(char::is_whitespace) {
            return Err(invalid("module base cannot contain whitespace"));
        }

        Ok(Self(base.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Module path of an app in this workspace: `<base>/apps/<name>`.
    pub fn app_module(&self, name: &AppName) -> String {
        format!("{}/apps/{}", self.0, name)
    }
}

impl fmt::Display for ModuleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModuleBase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
