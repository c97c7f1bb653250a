//! The `ScaffoldRequest` aggregate and its builder.
//!
//! A request holds every user choice for one run, already validated. The
//! builder accepts raw strings (as they arrive from flags) and reports the
//! first invalid one at `build()`.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::str::FromStr;

use crate::domain::{
    error::DomainError,
    value_objects::{AppKind, AppName, ModuleBase},
};

/// Company written into the app descriptor when none is given.
pub const DEFAULT_COMPANY: &str = "Your Company";

/// A validated scaffolding request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    name: AppName,
    kind: AppKind,
    module_base: Option<ModuleBase>,
    product_name: Option<String>,
    company_name: String,
    skip_registration: bool,
    overwrite: bool,
}

impl ScaffoldRequest {
    /// Start building a new request.
    pub fn builder() -> ScaffoldRequestBuilder {
        ScaffoldRequestBuilder::default()
    }

    pub fn name(&self) -> &AppName {
        &self.name
    }
    pub const fn kind(&self) -> AppKind {
        self.kind
    }
    pub fn module_base(&self) -> Option<&ModuleBase> {
        self.module_base.as_ref()
    }
    pub fn company_name(&self) -> &str {
        &self.company_name
    }
    pub const fn skip_registration(&self) -> bool {
        self.skip_registration
    }
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Product name for a desktop app: explicit value, else the title-cased
    /// app name. Services have none.
    pub fn product_name(&self) -> Option<String> {
        match self.kind {
            AppKind::Service => None,
            AppKind::DesktopApp => Some(
                self.product_name
                    .clone()
                    .unwrap_or_else(|| self.name.title()),
            ),
        }
    }
}

/// Builder for [`ScaffoldRequest`].
#[derive(Debug, Clone, Default)]
pub struct ScaffoldRequestBuilder {
    name: Option<String>,
    kind: Option<String>,
    module_base: Option<String>,
    product_name: Option<String>,
    company_name: Option<String>,
    skip_registration: bool,
    overwrite: bool,
}

impl ScaffoldRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Kind as typed by the user; see [`AppKind`]'s `FromStr` for aliases.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Explicit module base. Blank values count as absent.
    pub fn module_base(mut self, base: Option<impl Into<String>>) -> Self {
        self.module_base = base.map(Into::into);
        self
    }

    pub fn product_name(mut self, product: Option<impl Into<String>>) -> Self {
        self.product_name = product.map(Into::into);
        self
    }

    pub fn company_name(mut self, company: impl Into<String>) -> Self {
        self.company_name = Some(company.into());
        self
    }

    pub fn skip_registration(mut self, skip: bool) -> Self {
        self.skip_registration = skip;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Validate every field and build the request.
    pub fn build(self) -> Result<ScaffoldRequest, DomainError> {
        let name = AppName::parse(self.name.as_deref().unwrap_or_default())?;

        let kind = match self.kind.as_deref() {
            Some(raw) => AppKind::from_str(raw)?,
            None => AppKind::Service,
        };

        let module_base = self
            .module_base
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(ModuleBase::parse)
            .transpose()?;

        let product_name = self
            .product_name
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let company_name = self
            .company_name
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COMPANY.to_string());

        Ok(ScaffoldRequest {
            name,
            kind,
            module_base,
            product_name,
            company_name,
            skip_registration: self.skip_registration,
            overwrite: self.overwrite,
        })
    }
}
