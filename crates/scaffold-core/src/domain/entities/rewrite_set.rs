use std::borrow::Cow;

use crate::domain::error::DomainError;

/// Literal token replacements applied as one simultaneous pass.
///
/// Old tokens must be non-empty and must not contain one another; under
/// that precondition the result does not depend on insertion order, and a
/// replacement value is never itself rewritten by a later token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSet {
    replacements: Vec<(String, String)>,
}

impl RewriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `old → new`. Identity pairs are accepted and ignored.
    pub fn with(mut self, old: impl Into<String>, new: impl Into<String>) -> Result<Self, DomainError> {
        let old = old.into();
        let new = new.into();

        if old.is_empty() {
            return Err(DomainError::EmptyToken);
        }
        if let Some((existing, _)) = self
            .replacements
            .iter()
            .find(|(existing, _)| existing.contains(old.as_str()) || old.contains(existing.as_str()))
        {
            return Err(DomainError::OverlappingTokens {
                first: existing.clone(),
                second: old,
            });
        }

        if old != new {
            self.replacements.push((old, new));
        }
        Ok(self)
    }

    pub fn is_noop(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Apply every replacement globally. Borrows when nothing matched.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if !self.replacements.iter().any(|(old, _)| input.contains(old.as_str())) {
            return Cow::Borrowed(input);
        }

        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while !rest.is_empty() {
            match self.replacements.iter().find(|(old, _)| rest.starts_with(old.as_str())) {
                Some((old, new)) => {
                    out.push_str(new);
                    rest = &rest[old.len()..];
                }
                None => {
                    let ch = rest.chars().next().unwrap_or_default();
                    out.push(ch);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }
        Cow::Owned(out)
    }
}
