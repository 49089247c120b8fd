// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExitCode {
    Success = 0,
    Usage = 2,
    Validation = 3,
    DependencyFailure = 4,
    Internal = 10,
}

impl ExitCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Usage => "usage",
            Self::Validation => "validation",
            Self::DependencyFailure => "dependency_failure",
            Self::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    NotFound,
    NoResources,
    Malformed,
    Backend,
    Configuration,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::NoResources => "no_resources",
            Self::Malformed => "malformed",
            Self::Backend => "backend_error",
            Self::Configuration => "configuration_error",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error raised anywhere between a descriptor on disk and an HTTP response.
///
/// `Display` renders only the message: the HTTP layer returns it verbatim as the
/// response body, so the kind must be inspected through [`CatalogError::kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CatalogError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound, "not found")
    }

    #[must_use]
    pub fn no_resources(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoResources, message)
    }

    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Malformed, message)
    }

    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Backend, message)
    }

    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound | ErrorKind::NoResources)
    }

    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            ErrorKind::Configuration => ExitCode::Usage,
            ErrorKind::Malformed => ExitCode::Validation,
            ErrorKind::Backend => ExitCode::DependencyFailure,
            ErrorKind::NotFound | ErrorKind::NoResources => ExitCode::Internal,
        }
    }

    #[must_use]
    pub fn to_machine_error(&self) -> MachineError {
        MachineError {
            code: self.kind.as_str().to_string(),
            message: self.message.clone(),
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineError {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_message() {
        let err = CatalogError::not_found();
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.kind().as_str(), "not_found");
    }

    #[test]
    fn exit_codes_follow_error_kind() {
        assert_eq!(
            CatalogError::configuration("x").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            CatalogError::malformed("x").exit_code() as u8,
            ExitCode::Validation as u8
        );
        assert_eq!(
            CatalogError::backend("x").exit_code(),
            ExitCode::DependencyFailure
        );
        assert_eq!(CatalogError::not_found().exit_code(), ExitCode::Internal);
    }

    #[test]
    fn no_resources_counts_as_not_found_but_keeps_its_kind() {
        let err = CatalogError::no_resources("vendor has no resources");
        assert!(err.is_not_found());
        assert_ne!(err.kind(), ErrorKind::NotFound);
    }
}
